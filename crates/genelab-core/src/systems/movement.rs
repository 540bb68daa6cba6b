//! Player movement — one discrete step per input event.

use genelab_logic::collision::is_blocked;
use genelab_logic::geometry::Vec2;

use crate::content;
use crate::state::{GamePhase, GameState};

/// Apply a movement request. Ignored unless the phase is Playing; a move
/// that would collide with the room's obstacles is rejected silently and
/// the position stays unchanged.
pub fn apply_move(state: &mut GameState, dx: f32, dy: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }
    let candidate = state.player.position + Vec2::new(dx, dy);
    let room = content::room(state.current_room);
    if !is_blocked(candidate, room.obstacles()) {
        state.player.position = candidate;
    }
}
