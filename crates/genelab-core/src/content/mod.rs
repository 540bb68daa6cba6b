//! Static game content — room layouts, step tables, the NPC roster.
//!
//! Content is configuration data, structurally fixed at compile time and
//! never mutated by the controller. The systems consume it by reference.

mod items;
mod npcs;
mod rooms;
mod steps;

pub use items::Item;
pub use npcs::initial_npcs;
pub use rooms::{room, PLAYER_START};
pub use steps::{methodology_step_index, methodology_steps, step_for};

use genelab_logic::geometry::{Rect, Vec2};
use serde::{Deserialize, Serialize};

/// The four fixed rooms, connected by doors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomId {
    Introduction,
    Methodology,
    Applications,
    Limitations,
}

impl RoomId {
    /// The room the player starts in (and the only one unlocked at start).
    pub const ENTRY: RoomId = RoomId::Introduction;

    pub fn title(&self) -> &'static str {
        match self {
            RoomId::Introduction => "Reception & Intake",
            RoomId::Methodology => "Methodology Lab",
            RoomId::Applications => "Applications Room",
            RoomId::Limitations => "Limitations Room",
        }
    }
}

/// What an interactive object is — a closed sum, matched exhaustively at
/// every consumption site so a new variant fails to compile until handled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectKind {
    /// Sequence-gated (in the methodology room) task object.
    Station { tint: &'static str },
    /// Ungated informational task object.
    Display,
    /// Transit to another room, landing at `target_door`'s spawn point.
    Door {
        to: RoomId,
        target_door: &'static str,
    },
}

/// An interactive object placed in a room. `id` is unique within its room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractiveObject {
    pub id: &'static str,
    pub name: &'static str,
    pub bounds: Rect,
    pub kind: ObjectKind,
}

/// Where a player lands after coming through a given door.
#[derive(Debug, Clone, Copy)]
pub struct DoorSpawn {
    pub door_id: &'static str,
    pub spawn: Vec2,
}

/// Static per-room layout.
pub struct RoomData {
    pub id: RoomId,
    pub walls: &'static [Rect],
    pub stations: &'static [InteractiveObject],
    pub doors: &'static [InteractiveObject],
    pub displays: &'static [InteractiveObject],
    /// Purely visual obstacles.
    pub decor: &'static [Rect],
    pub door_spawns: &'static [DoorSpawn],
}

impl RoomData {
    /// Everything the player collides with: walls, stations, displays, decor.
    /// Doors are deliberately not obstacles.
    pub fn obstacles(&self) -> impl Iterator<Item = &Rect> {
        self.walls
            .iter()
            .chain(self.stations.iter().map(|o| &o.bounds))
            .chain(self.displays.iter().map(|o| &o.bounds))
            .chain(self.decor.iter())
    }

    /// Interactive objects in the fixed proximity scan order:
    /// stations, then doors, then displays.
    pub fn interactives(&self) -> impl Iterator<Item = &InteractiveObject> {
        self.stations
            .iter()
            .chain(self.doors.iter())
            .chain(self.displays.iter())
    }

    pub fn find_object(&self, id: &str) -> Option<&InteractiveObject> {
        self.interactives().find(|o| o.id == id)
    }

    /// Spawn coordinate for arriving through `door_id`, if the door
    /// position table knows it.
    pub fn door_spawn(&self, door_id: &str) -> Option<Vec2> {
        self.door_spawns
            .iter()
            .find(|d| d.door_id == door_id)
            .map(|d| d.spawn)
    }
}
