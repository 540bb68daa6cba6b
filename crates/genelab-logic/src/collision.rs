//! Collision checking — candidate player positions against room obstacles.
//!
//! The obstacle list for a room is walls ∪ stations ∪ displays ∪ decor.
//! Movement that would collide is silently rejected by the caller; this
//! module only answers "would this position overlap anything".

use crate::constants::avatar;
use crate::geometry::{Rect, Vec2};

/// The player's bounding box at a given top-left position.
pub fn player_box(pos: Vec2) -> Rect {
    Rect::at(pos, avatar::PLAYER_WIDTH, avatar::PLAYER_HEIGHT)
}

/// The NPC bounding box at a given top-left position.
pub fn npc_box(pos: Vec2) -> Rect {
    Rect::at(pos, avatar::NPC_WIDTH, avatar::NPC_HEIGHT)
}

/// True if the player box at `candidate` strictly overlaps any obstacle.
/// An empty obstacle list trivially returns false.
pub fn is_blocked<'a, I>(candidate: Vec2, obstacles: I) -> bool
where
    I: IntoIterator<Item = &'a Rect>,
{
    let body = player_box(candidate);
    obstacles.into_iter().any(|o| body.overlaps(o))
}
