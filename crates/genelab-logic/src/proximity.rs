//! Proximity detection — which single thing is within reach of the player.
//!
//! The interaction zone is the player's bounding box expanded uniformly by
//! the interaction radius. Candidates are scanned in a FIXED order and the
//! first overlap wins — placement order in room data is an implicit
//! priority, deliberately not a nearest-first search.

use crate::collision::player_box;
use crate::constants::interaction;
use crate::geometry::{Rect, Vec2};

/// The zone within which objects and NPCs become interactable.
pub fn interaction_zone(player_pos: Vec2) -> Rect {
    player_box(player_pos).expand(interaction::RADIUS)
}

/// Index of the first candidate box overlapping `zone`, in slice order.
pub fn first_in_reach(zone: &Rect, candidates: &[Rect]) -> Option<usize> {
    candidates.iter().position(|c| zone.overlaps(c))
}
