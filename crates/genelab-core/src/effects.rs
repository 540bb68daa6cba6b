//! Side-channel effects for the host shell.
//!
//! The state machine never plays audio itself; systems push declarative
//! cues and the host drains them with [`crate::engine::GameEngine::take_effects`],
//! executing each best-effort (playback failure is swallowed, never
//! surfaced to game logic).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sound {
    DoorOpen,
    Shout,
    TaskComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    PlaySound(Sound),
}
