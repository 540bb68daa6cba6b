//! Systems — logic that operates on state and content.

mod interaction;
mod movement;
mod npc;
mod progression;
mod proximity;

pub use interaction::*;
pub use movement::*;
pub use npc::*;
pub use progression::*;
pub use proximity::*;
