//! Top-level game phase and the timed UI sub-states.

use serde::{Deserialize, Serialize};

use crate::content::RoomId;

/// The coarse mode of the session. Exactly one is active at a time and it
/// gates which input handlers and which screen are live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    CharacterCreation,
    IntroAnimation,
    Playing,
    Interacting,
    Complete,
}

/// The kick → modal-open animation chain, modeled as one sub-state machine
/// with deadlines instead of chained ad-hoc timers. Advanced solely by the
/// engine clock, so restart and modal-close cancel everything at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Directional kick animation is playing; modal not yet open.
    Kicking { until_ms: u64 },
    /// Modal is open and sliding in; the entering flag clears at the deadline.
    Opening { until_ms: u64 },
    /// Modal fully open, waiting on the task collaborator.
    Open,
}

impl InteractionState {
    /// Whether the task modal is visible.
    pub fn modal_open(&self) -> bool {
        matches!(
            self,
            InteractionState::Opening { .. } | InteractionState::Open
        )
    }

    /// Whether the slide-in animation flag is still set.
    pub fn modal_entering(&self) -> bool {
        matches!(self, InteractionState::Opening { .. })
    }
}

/// Transient user-facing message, replaced (and re-timed) by any newer one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub text: String,
    pub expires_at_ms: u64,
}

/// Short-lived banner shown after a room transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomBanner {
    pub room: RoomId,
    pub expires_at_ms: u64,
}
