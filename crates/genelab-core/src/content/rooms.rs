//! Room layouts — walls, stations, doors, displays, decor, door spawns.
//!
//! All four rooms share a 960x640 floor plan with 20-unit border walls.
//! Doors sit on top of the wall segments (they are interactable, not
//! walkable); transit teleports the player to the destination spawn.

use genelab_logic::geometry::{Rect, Vec2};

use super::{DoorSpawn, InteractiveObject, ObjectKind, RoomData, RoomId};

/// Where a fresh (or restarted) player stands in the entry room.
pub const PLAYER_START: Vec2 = Vec2::new(460.0, 420.0);

const BORDER_WALLS: [Rect; 4] = [
    Rect::new(0.0, 0.0, 960.0, 20.0),    // top
    Rect::new(0.0, 620.0, 960.0, 20.0),  // bottom
    Rect::new(0.0, 20.0, 20.0, 600.0),   // left
    Rect::new(940.0, 20.0, 20.0, 600.0), // right
];

const WEST_DOOR_RECT: Rect = Rect::new(0.0, 280.0, 20.0, 80.0);
const EAST_DOOR_RECT: Rect = Rect::new(940.0, 280.0, 20.0, 80.0);
const WEST_SPAWN: Vec2 = Vec2::new(40.0, 292.0);
const EAST_SPAWN: Vec2 = Vec2::new(880.0, 292.0);

// ── Introduction ────────────────────────────────────────────────────────

static INTRODUCTION: RoomData = RoomData {
    id: RoomId::Introduction,
    walls: &BORDER_WALLS,
    stations: &[InteractiveObject {
        id: "sample-collection",
        name: "Sample Collection Bench",
        bounds: Rect::new(420.0, 80.0, 120.0, 60.0),
        kind: ObjectKind::Station { tint: "teal" },
    }],
    doors: &[InteractiveObject {
        id: "intro-east",
        name: "Methodology Lab",
        bounds: EAST_DOOR_RECT,
        kind: ObjectKind::Door {
            to: RoomId::Methodology,
            target_door: "meth-west",
        },
    }],
    displays: &[InteractiveObject {
        id: "rflp-overview",
        name: "What is RFLP?",
        bounds: Rect::new(120.0, 80.0, 110.0, 70.0),
        kind: ObjectKind::Display,
    }],
    decor: &[
        Rect::new(60.0, 520.0, 40.0, 40.0),   // potted plant
        Rect::new(700.0, 500.0, 140.0, 60.0), // reception desk
    ],
    door_spawns: &[DoorSpawn {
        door_id: "intro-east",
        spawn: EAST_SPAWN,
    }],
};

// ── Methodology ─────────────────────────────────────────────────────────
// Station placement order doubles as the methodology step sequence.

static METHODOLOGY: RoomData = RoomData {
    id: RoomId::Methodology,
    walls: &BORDER_WALLS,
    stations: &[
        InteractiveObject {
            id: "extraction",
            name: "DNA Extraction Bench",
            bounds: Rect::new(60.0, 80.0, 110.0, 60.0),
            kind: ObjectKind::Station { tint: "blue" },
        },
        InteractiveObject {
            id: "digestion",
            name: "Restriction Digest Station",
            bounds: Rect::new(230.0, 80.0, 110.0, 60.0),
            kind: ObjectKind::Station { tint: "purple" },
        },
        InteractiveObject {
            id: "electrophoresis",
            name: "Gel Electrophoresis Rig",
            bounds: Rect::new(400.0, 80.0, 110.0, 60.0),
            kind: ObjectKind::Station { tint: "amber" },
        },
        InteractiveObject {
            id: "blotting",
            name: "Southern Blot Table",
            bounds: Rect::new(570.0, 80.0, 110.0, 60.0),
            kind: ObjectKind::Station { tint: "rose" },
        },
        InteractiveObject {
            id: "hybridisation",
            name: "Hybridisation Oven",
            bounds: Rect::new(740.0, 80.0, 110.0, 60.0),
            kind: ObjectKind::Station { tint: "emerald" },
        },
        InteractiveObject {
            id: "detection",
            name: "Autoradiography Cabinet",
            bounds: Rect::new(740.0, 480.0, 110.0, 60.0),
            kind: ObjectKind::Station { tint: "slate" },
        },
    ],
    doors: &[
        InteractiveObject {
            id: "meth-west",
            name: "Reception",
            bounds: WEST_DOOR_RECT,
            kind: ObjectKind::Door {
                to: RoomId::Introduction,
                target_door: "intro-east",
            },
        },
        InteractiveObject {
            id: "meth-east",
            name: "Applications Room",
            bounds: EAST_DOOR_RECT,
            kind: ObjectKind::Door {
                to: RoomId::Applications,
                target_door: "apps-west",
            },
        },
    ],
    displays: &[],
    decor: &[
        Rect::new(60.0, 480.0, 80.0, 60.0),  // sample fridge
        Rect::new(480.0, 520.0, 40.0, 40.0), // waste bin
    ],
    door_spawns: &[
        DoorSpawn {
            door_id: "meth-west",
            spawn: WEST_SPAWN,
        },
        DoorSpawn {
            door_id: "meth-east",
            spawn: EAST_SPAWN,
        },
    ],
};

// ── Applications ────────────────────────────────────────────────────────

static APPLICATIONS: RoomData = RoomData {
    id: RoomId::Applications,
    walls: &BORDER_WALLS,
    stations: &[],
    doors: &[
        InteractiveObject {
            id: "apps-west",
            name: "Methodology Lab",
            bounds: WEST_DOOR_RECT,
            kind: ObjectKind::Door {
                to: RoomId::Methodology,
                target_door: "meth-east",
            },
        },
        InteractiveObject {
            id: "apps-east",
            name: "Limitations Room",
            bounds: EAST_DOOR_RECT,
            kind: ObjectKind::Door {
                to: RoomId::Limitations,
                target_door: "limits-west",
            },
        },
    ],
    displays: &[
        InteractiveObject {
            id: "forensics",
            name: "Forensic DNA Fingerprinting",
            bounds: Rect::new(100.0, 80.0, 120.0, 70.0),
            kind: ObjectKind::Display,
        },
        InteractiveObject {
            id: "paternity",
            name: "Paternity Testing",
            bounds: Rect::new(300.0, 80.0, 120.0, 70.0),
            kind: ObjectKind::Display,
        },
        InteractiveObject {
            id: "diagnostics",
            name: "Disease Diagnostics",
            bounds: Rect::new(500.0, 80.0, 120.0, 70.0),
            kind: ObjectKind::Display,
        },
        InteractiveObject {
            id: "conservation",
            name: "Conservation Genetics",
            bounds: Rect::new(700.0, 80.0, 120.0, 70.0),
            kind: ObjectKind::Display,
        },
    ],
    decor: &[Rect::new(420.0, 520.0, 120.0, 50.0)], // visitor bench
    door_spawns: &[
        DoorSpawn {
            door_id: "apps-west",
            spawn: WEST_SPAWN,
        },
        DoorSpawn {
            door_id: "apps-east",
            spawn: EAST_SPAWN,
        },
    ],
};

// ── Limitations ─────────────────────────────────────────────────────────

static LIMITATIONS: RoomData = RoomData {
    id: RoomId::Limitations,
    walls: &BORDER_WALLS,
    stations: &[InteractiveObject {
        id: "certification",
        name: "Certification Desk",
        bounds: Rect::new(420.0, 480.0, 120.0, 60.0),
        kind: ObjectKind::Station { tint: "gold" },
    }],
    doors: &[InteractiveObject {
        id: "limits-west",
        name: "Applications Room",
        bounds: WEST_DOOR_RECT,
        kind: ObjectKind::Door {
            to: RoomId::Applications,
            target_door: "apps-east",
        },
    }],
    displays: &[
        InteractiveObject {
            id: "cost",
            name: "Cost & Equipment",
            bounds: Rect::new(150.0, 80.0, 120.0, 70.0),
            kind: ObjectKind::Display,
        },
        InteractiveObject {
            id: "labour",
            name: "Time & Labour",
            bounds: Rect::new(420.0, 80.0, 120.0, 70.0),
            kind: ObjectKind::Display,
        },
        InteractiveObject {
            id: "sample-quality",
            name: "Sample Quantity & Quality",
            bounds: Rect::new(690.0, 80.0, 120.0, 70.0),
            kind: ObjectKind::Display,
        },
    ],
    decor: &[Rect::new(780.0, 500.0, 120.0, 60.0)], // archive shelf
    door_spawns: &[DoorSpawn {
        door_id: "limits-west",
        spawn: WEST_SPAWN,
    }],
};

/// Layout lookup for a room.
pub fn room(id: RoomId) -> &'static RoomData {
    match id {
        RoomId::Introduction => &INTRODUCTION,
        RoomId::Methodology => &METHODOLOGY,
        RoomId::Applications => &APPLICATIONS,
        RoomId::Limitations => &LIMITATIONS,
    }
}
