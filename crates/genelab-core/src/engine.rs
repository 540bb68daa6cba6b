//! Game engine - the single command boundary over the game state.
//!
//! All mutation goes through the documented commands (`move_player`,
//! `interact`, `complete_task`, `close_modal`, `restart`) plus the
//! `update` clock that advances every deadline and the NPC behavior tick.
//! Randomness is injectable via `with_seed` so NPC paths are deterministic
//! in tests.

use genelab_logic::constants::{npc as npc_tuning, timing};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::content::RoomId;
use crate::effects::{Effect, Sound};
use crate::state::{
    Character, GamePhase, GameState, InteractionState, Notification, RoomBanner,
};
use crate::systems::{
    apply_completion, apply_move, nearby_npc, nearby_object, npc_tick, resolve_interact,
    InteractOutcome,
};

/// The game controller.
pub struct GameEngine {
    state: GameState,
    rng: StdRng,
    effects: Vec<Effect>,
    npc_tick_accum_ms: u64,
    notification_duration_ms: u64,
}

impl GameEngine {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic engine for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            state: GameState::new(),
            rng,
            effects: Vec::new(),
            npc_tick_accum_ms: 0,
            notification_duration_ms: timing::NOTIFICATION_MS,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for host shells and tests. Gameplay mutations
    /// should go through the commands below.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// How long notifications stay up before auto-dismissal.
    pub fn set_notification_duration_ms(&mut self, ms: u64) {
        self.notification_duration_ms = ms;
    }

    /// Drain queued side effects (audio cues) for the host to execute.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    // ── Phase commands ──────────────────────────────────────────────────

    /// Leave character creation with the chosen appearance.
    pub fn select_character(&mut self, character: Character) {
        if self.state.phase != GamePhase::CharacterCreation {
            return;
        }
        self.state.player.character = character;
        self.state.phase = GamePhase::IntroAnimation;
    }

    /// The intro cinematic finished (or was skipped).
    pub fn finish_intro(&mut self) {
        if self.state.phase != GamePhase::IntroAnimation {
            return;
        }
        self.state.phase = GamePhase::Playing;
    }

    /// Full in-memory reset to the documented initial values. Deadlines
    /// live in the state, so this also cancels every pending timer.
    pub fn restart(&mut self) {
        self.state = GameState::new();
        self.effects.clear();
        self.npc_tick_accum_ms = 0;
    }

    // ── Gameplay commands ───────────────────────────────────────────────

    /// One discrete movement step. See [`apply_move`].
    pub fn move_player(&mut self, dx: f32, dy: f32) {
        apply_move(&mut self.state, dx, dy);
    }

    /// The interact command — NPC dialogue, door transit, or task opening,
    /// with all gating applied.
    pub fn interact(&mut self) {
        if self.state.phase != GamePhase::Playing || self.state.dialogue_npc.is_some() {
            return;
        }

        match resolve_interact(&self.state) {
            InteractOutcome::None => {}
            InteractOutcome::Dialogue { npc_id } => {
                self.state.dialogue_npc = Some(npc_id);
            }
            InteractOutcome::Transit { to, spawn } => {
                self.effects.push(Effect::PlaySound(Sound::DoorOpen));
                self.state.player.position = spawn;
                self.state.current_room = to;
                self.state.banner = Some(RoomBanner {
                    room: to,
                    expires_at_ms: self.state.now_ms + timing::BANNER_MS,
                });
            }
            InteractOutcome::Notify { message } => {
                self.push_notification(message);
            }
            InteractOutcome::OpenTask { object_id, kick } => {
                self.state.pending_object = Some(object_id);
                self.state.phase = GamePhase::Interacting;
                match kick {
                    Some(direction) => {
                        self.state.player.is_kicking = true;
                        self.state.player.kick_direction = Some(direction);
                        self.state.interaction = InteractionState::Kicking {
                            until_ms: self.state.now_ms + timing::KICK_MS,
                        };
                    }
                    None => {
                        self.state.interaction = InteractionState::Opening {
                            until_ms: self.state.now_ms + timing::MODAL_SLIDE_MS,
                        };
                    }
                }
            }
        }
    }

    /// The task modal reports success. Commits items and unlocks, closes
    /// the modal, and returns to playing (or completes the game).
    pub fn complete_task(&mut self) {
        if self.state.phase != GamePhase::Interacting {
            return;
        }
        if matches!(self.state.interaction, InteractionState::Kicking { .. }) {
            // Modal isn't open yet; nothing can have completed.
            return;
        }
        let Some(object_id) = self.state.pending_object.take() else {
            return;
        };

        self.state.phase = GamePhase::Playing;
        self.state.interaction = InteractionState::Idle;
        self.effects.push(Effect::PlaySound(Sound::TaskComplete));

        if let Some(message) = apply_completion(&mut self.state, &object_id) {
            self.push_notification(message);
        }
    }

    /// The task modal was closed without completing. No state change
    /// beyond closing; any pending kick/slide deadline is cancelled.
    pub fn close_modal(&mut self) {
        if self.state.phase != GamePhase::Interacting {
            return;
        }
        self.state.phase = GamePhase::Playing;
        self.state.pending_object = None;
        self.state.interaction = InteractionState::Idle;
        self.state.player.is_kicking = false;
        self.state.player.kick_direction = None;
    }

    /// The dialogue collaborator reports it was closed.
    pub fn close_dialogue(&mut self) {
        self.state.dialogue_npc = None;
    }

    // ── Clock ───────────────────────────────────────────────────────────

    /// Advance the engine clock: timed sub-states, notification/banner
    /// expiry, and the fixed-cadence NPC behavior loop (only while playing
    /// in the methodology room).
    pub fn update(&mut self, delta_ms: u64) {
        self.state.now_ms += delta_ms;
        let now = self.state.now_ms;

        match self.state.interaction {
            InteractionState::Kicking { until_ms } if now >= until_ms => {
                self.state.player.is_kicking = false;
                self.state.player.kick_direction = None;
                self.state.interaction = InteractionState::Opening {
                    until_ms: now + timing::MODAL_SLIDE_MS,
                };
            }
            InteractionState::Opening { until_ms } if now >= until_ms => {
                self.state.interaction = InteractionState::Open;
            }
            _ => {}
        }

        if let Some(n) = &self.state.notification {
            if now >= n.expires_at_ms {
                self.state.notification = None;
            }
        }
        if let Some(b) = &self.state.banner {
            if now >= b.expires_at_ms {
                self.state.banner = None;
            }
        }

        if self.state.phase == GamePhase::Playing
            && self.state.current_room == RoomId::Methodology
        {
            self.npc_tick_accum_ms += delta_ms;
            while self.npc_tick_accum_ms >= npc_tuning::TICK_MS {
                self.npc_tick_accum_ms -= npc_tuning::TICK_MS;
                let shouts = npc_tick(
                    &mut self.state.npcs,
                    self.state.current_room,
                    self.state.player.position,
                    self.state.now_ms,
                    &mut self.rng,
                );
                for i in shouts {
                    let name = self.state.npcs[i].name.clone();
                    self.push_notification(format!("{}: \"Excuse me, coming through!\"", name));
                    self.effects.push(Effect::PlaySound(Sound::Shout));
                }
            }
        } else {
            self.npc_tick_accum_ms = 0;
        }
    }

    // ── Render queries ──────────────────────────────────────────────────

    /// Id of the interactive object currently in reach, for highlighting.
    pub fn nearby_object_id(&self) -> Option<&'static str> {
        nearby_object(
            self.state.player.position,
            crate::content::room(self.state.current_room),
        )
        .map(|o| o.id)
    }

    /// Id of the interactable NPC currently in reach, for highlighting.
    pub fn nearby_npc_id(&self) -> Option<&str> {
        nearby_npc(
            self.state.player.position,
            &self.state.npcs,
            self.state.current_room,
        )
        .map(|n| n.id.as_str())
    }

    /// A replacing notification cancels the old dismissal deadline and
    /// starts its own.
    fn push_notification(&mut self, text: String) {
        self.state.notification = Some(Notification {
            text,
            expires_at_ms: self.state.now_ms + self.notification_duration_ms,
        });
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
