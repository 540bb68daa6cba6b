//! Proximity queries — which object or NPC the player can interact with.
//!
//! Object and NPC detection are independent; the interact command resolves
//! NPCs first (NPCs take priority when both are in range).

use genelab_logic::collision::npc_box;
use genelab_logic::geometry::{Rect, Vec2};
use genelab_logic::proximity::{first_in_reach, interaction_zone};

use crate::content::{InteractiveObject, RoomData, RoomId};
use crate::state::Npc;

/// The single interactive object in reach, scanning stations, then doors,
/// then displays; first overlap wins.
pub fn nearby_object(player_pos: Vec2, room: &'static RoomData) -> Option<&'static InteractiveObject> {
    let zone = interaction_zone(player_pos);
    let objects: Vec<&'static InteractiveObject> = room.interactives().collect();
    let boxes: Vec<Rect> = objects.iter().map(|o| o.bounds).collect();
    first_in_reach(&zone, &boxes).map(|i| objects[i])
}

/// The single interactable NPC in reach, filtered to the current room.
pub fn nearby_npc<'a>(player_pos: Vec2, npcs: &'a [Npc], room: RoomId) -> Option<&'a Npc> {
    let zone = interaction_zone(player_pos);
    npcs.iter()
        .find(|n| n.room == room && n.interactable && zone.overlaps(&npc_box(n.position)))
}
