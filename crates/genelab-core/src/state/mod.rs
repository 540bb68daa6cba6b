//! State definitions for the game core.
//!
//! These are plain serde-friendly data structs. They have no behavior
//! beyond small accessors — the logic lives in the systems and the engine.

mod game;
mod inventory;
mod npc;
mod phase;
mod player;

pub use game::*;
pub use inventory::*;
pub use npc::*;
pub use phase::*;
pub use player::*;
