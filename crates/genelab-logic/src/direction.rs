//! Facing direction for the cosmetic kick animation.

use serde::{Deserialize, Serialize};

use crate::geometry::Vec2;

/// Cardinal facing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Direction from `from` toward `to`, chosen on whichever axis has the
/// greater signed-delta magnitude. Ties favor the vertical axis.
pub fn dominant_direction(from: Vec2, to: Vec2) -> Direction {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    }
}
