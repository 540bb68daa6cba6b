//! GeneLab Core - RFLP Teaching Game Engine
//!
//! A headless game core for a top-down 2D educational walking simulator
//! that teaches Restriction Fragment Length Polymorphism (RFLP) analysis.
//! The player explores four rooms, completes station tasks in a fixed
//! methodology order, collects inventory items, and unlocks rooms as
//! progress is made.
//!
//! # Architecture
//!
//! - **State**: one explicit [`state::GameState`] container owns the player,
//!   NPCs, inventory, room/unlock sets and every timed UI sub-state.
//! - **Content**: static room layouts, step tables and the NPC roster live
//!   in [`content`] and are never mutated.
//! - **Systems**: movement, proximity, NPC behavior and interaction gating
//!   are plain functions over state and content.
//! - **Engine**: [`engine::GameEngine`] is the single command boundary
//!   (`move_player`, `interact`, `complete_task`, `close_modal`,
//!   `restart`, `update`). Audio cues come out as [`effects::Effect`]
//!   values for the host shell to execute best-effort.
//!
//! # Example
//!
//! ```rust
//! use genelab_core::prelude::*;
//!
//! let mut engine = GameEngine::with_seed(42);
//! engine.select_character(Character::Dev);
//! engine.finish_intro();
//!
//! engine.move_player(0.0, -16.0);
//! engine.interact();
//! engine.update(50); // advance timers and the NPC tick
//! ```

pub mod content;
pub mod effects;
pub mod engine;
pub mod state;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::content::{Item, RoomId};
    pub use crate::effects::{Effect, Sound};
    pub use crate::engine::GameEngine;
    pub use crate::state::{Character, GamePhase, GameState};
}
