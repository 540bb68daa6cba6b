//! The single explicit state container.

use serde::{Deserialize, Serialize};

use crate::content::{self, RoomId};
use crate::state::{
    GamePhase, InteractionState, Inventory, Notification, Npc, Player, RoomBanner,
};

/// Rooms reachable via doors. Monotonic within a session — insertion only,
/// in unlock order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomSet {
    rooms: Vec<RoomId>,
}

impl RoomSet {
    pub fn entry_only() -> Self {
        Self {
            rooms: vec![RoomId::ENTRY],
        }
    }

    pub fn contains(&self, room: RoomId) -> bool {
        self.rooms.contains(&room)
    }

    /// Idempotent set-union insertion.
    pub fn insert(&mut self, room: RoomId) {
        if !self.contains(room) {
            self.rooms.push(room);
        }
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoomId> {
        self.rooms.iter()
    }
}

/// All mutable game state, owned by the engine. Every field here is reset
/// by restart; every deadline lives here so cancellation is a plain reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub player: Player,
    pub npcs: Vec<Npc>,
    pub inventory: Inventory,
    pub current_room: RoomId,
    pub unlocked_rooms: RoomSet,
    /// Cursor into the ordered methodology step sequence.
    pub current_step_index: usize,
    /// Object id whose task modal is pending/open.
    pub pending_object: Option<String>,
    pub interaction: InteractionState,
    /// NPC id whose dialogue modal is open (phase stays Playing).
    pub dialogue_npc: Option<String>,
    pub notification: Option<Notification>,
    pub banner: Option<RoomBanner>,
    /// Engine clock, ms since game start. Drives every deadline.
    pub now_ms: u64,
}

impl GameState {
    /// The documented initial state: character creation, empty inventory,
    /// entry room unlocked, cursor at zero, no pending timers.
    pub fn new() -> Self {
        Self {
            phase: GamePhase::default(),
            player: Player::default(),
            npcs: content::initial_npcs(),
            inventory: Inventory::new(),
            current_room: RoomId::ENTRY,
            unlocked_rooms: RoomSet::entry_only(),
            current_step_index: 0,
            pending_object: None,
            interaction: InteractionState::Idle,
            dialogue_npc: None,
            notification: None,
            banner: None,
            now_ms: 0,
        }
    }

    pub fn is_unlocked(&self, room: RoomId) -> bool {
        self.unlocked_rooms.contains(room)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
