//! Progression effects committed when a task completes.

use crate::content::{self, RoomId};
use crate::state::{GamePhase, GameState};

/// The object in the limitations room that ends the game when completed.
pub const COMPLETION_OBJECT: &str = "certification";

/// Commit the effects of a completed task: merge resulting items, then the
/// per-room unlock/advance rules. Returns the notification to show, if
/// any. The caller has already validated that `object_id` was the pending
/// interaction.
pub fn apply_completion(state: &mut GameState, object_id: &str) -> Option<String> {
    let step = content::step_for(object_id)?;

    for item in step.resulting_items {
        state.inventory.insert(*item);
    }

    match state.current_room {
        RoomId::Introduction => {
            state.unlocked_rooms.insert(RoomId::Methodology);
            Some("The Methodology Lab is open — head through the east door.".to_string())
        }
        RoomId::Methodology => {
            let last = content::methodology_steps().len() - 1;
            if state.current_step_index < last {
                state.current_step_index += 1;
                None
            } else {
                state.unlocked_rooms.insert(RoomId::Applications);
                Some("Methodology complete! The Applications Room is now open.".to_string())
            }
        }
        RoomId::Applications => {
            state.unlocked_rooms.insert(RoomId::Limitations);
            Some("The Limitations Room is now open.".to_string())
        }
        RoomId::Limitations => {
            if object_id == COMPLETION_OBJECT {
                state.phase = GamePhase::Complete;
            }
            None
        }
    }
}
