//! Non-player characters.

use genelab_logic::geometry::Vec2;
use serde::{Deserialize, Serialize};

use crate::content::RoomId;
use crate::state::Character;

/// Behavioral state of an NPC. Idle NPCs never tick; Working/Walking NPCs
/// patrol between stations in the methodology room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NpcState {
    Idle,
    Working,
    Walking,
}

/// An NPC. Instantiated from the static roster at game start/restart,
/// mutated every behavior tick while in the methodology room, never
/// destroyed during a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Npc {
    pub id: String,
    pub name: String,
    pub role: String,
    pub character: Character,
    pub room: RoomId,
    pub position: Vec2,
    pub state: NpcState,
    /// Walk destination while Walking.
    pub target: Option<Vec2>,
    /// Countdown until a Working NPC picks a new station, in ms.
    pub work_timer_ms: i64,
    /// When this NPC last shouted at the player (cooldown gate).
    pub last_shout_ms: Option<u64>,
    pub interactable: bool,
    /// Lines shown by the dialogue collaborator; empty means no dialogue.
    pub dialogue: Vec<String>,
}

impl Npc {
    pub fn has_dialogue(&self) -> bool {
        !self.dialogue.is_empty()
    }
}
