//! Interaction gating — what happens when the player presses interact.
//!
//! Decisions are returned as an outcome value; the engine commits the
//! state changes and effects. All gating failures are recoverable and
//! surface as notifications, never errors.

use genelab_logic::collision::player_box;
use genelab_logic::direction::{dominant_direction, Direction};
use genelab_logic::geometry::Vec2;

use crate::content::{self, InteractiveObject, ObjectKind, RoomId};
use crate::state::GameState;
use crate::systems::{nearby_npc, nearby_object};

/// What an interact command should do.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractOutcome {
    /// Nothing in reach.
    None,
    /// Open the dialogue modal for this NPC (phase unchanged).
    Dialogue { npc_id: String },
    /// Door transit: teleport to `spawn` in room `to`.
    Transit { to: RoomId, spawn: Vec2 },
    /// Gating rejection or door problem; show a transient notification.
    Notify { message: String },
    /// Open the task modal, optionally after a directional kick.
    OpenTask {
        object_id: String,
        kick: Option<Direction>,
    },
}

/// Resolve an interact command against the current state. NPCs take
/// priority over objects when both are in range.
pub fn resolve_interact(state: &GameState) -> InteractOutcome {
    if let Some(npc) = nearby_npc(state.player.position, &state.npcs, state.current_room) {
        if npc.has_dialogue() {
            return InteractOutcome::Dialogue {
                npc_id: npc.id.clone(),
            };
        }
    }

    match nearby_object(state.player.position, content::room(state.current_room)) {
        Some(obj) => resolve_object(state, obj),
        None => InteractOutcome::None,
    }
}

/// Resolve an interaction with a specific object.
pub fn resolve_object(state: &GameState, obj: &InteractiveObject) -> InteractOutcome {
    match obj.kind {
        ObjectKind::Door { to, target_door } => {
            if !state.is_unlocked(to) {
                return InteractOutcome::Notify {
                    message: "It's locked. I should finish what I'm working on here first."
                        .to_string(),
                };
            }
            match content::room(to).door_spawn(target_door) {
                Some(spawn) => InteractOutcome::Transit { to, spawn },
                None => {
                    log::warn!(
                        "door {:?} references missing spawn {:?} in {:?}",
                        obj.id,
                        target_door,
                        to
                    );
                    InteractOutcome::Notify {
                        message: "This door doesn't seem to lead anywhere.".to_string(),
                    }
                }
            }
        }
        ObjectKind::Station { .. } | ObjectKind::Display => resolve_task_object(state, obj),
    }
}

fn resolve_task_object(state: &GameState, obj: &InteractiveObject) -> InteractOutcome {
    let Some(step) = content::step_for(obj.id) else {
        // Content invariant violation; tests catch this, stay recoverable.
        log::warn!("object {:?} has no step", obj.id);
        return InteractOutcome::None;
    };

    // Sequence gate: methodology stations must be tackled in order.
    if let Some(index) = content::methodology_step_index(obj.id) {
        if index < state.current_step_index {
            return InteractOutcome::Notify {
                message: format!("I've already finished at the {}.", obj.name),
            };
        }
        if index > state.current_step_index {
            let next = content::methodology_steps()[state.current_step_index].station_id;
            let next_name = content::room(RoomId::Methodology)
                .find_object(next)
                .map(|o| o.name)
                .unwrap_or(next);
            return InteractOutcome::Notify {
                message: format!("I should go to the {} first.", next_name),
            };
        }
    }

    // Item gate: every required item must already be held.
    let missing: Vec<&str> = step
        .required_items
        .iter()
        .filter(|item| !state.inventory.contains(**item))
        .map(|item| item.display_name())
        .collect();
    if !missing.is_empty() {
        return InteractOutcome::Notify {
            message: format!("I still need: {}.", missing.join(", ")),
        };
    }

    // Both gates pass. Two rooms lead with a directional kick.
    let kick = if matches!(
        state.current_room,
        RoomId::Applications | RoomId::Limitations
    ) {
        Some(dominant_direction(
            player_box(state.player.position).center(),
            obj.bounds.center(),
        ))
    } else {
        None
    };

    InteractOutcome::OpenTask {
        object_id: obj.id.to_string(),
        kick,
    }
}
