//! The initial NPC roster.

use genelab_logic::geometry::Vec2;

use crate::content::RoomId;
use crate::state::{Character, Npc, NpcState};

/// Fresh NPC list for game start and restart. Methodology NPCs begin in
/// Working with staggered timers so they do not move in lockstep.
pub fn initial_npcs() -> Vec<Npc> {
    vec![
        Npc {
            id: "npc-reyes".into(),
            name: "Dr. Reyes".into(),
            role: "Lab Director".into(),
            character: Character::Lena,
            room: RoomId::Introduction,
            position: Vec2::new(720.0, 430.0),
            state: NpcState::Idle,
            target: None,
            work_timer_ms: 0,
            last_shout_ms: None,
            interactable: true,
            dialogue: vec![
                "Welcome to the lab! We've got a case that needs RFLP analysis.".into(),
                "Grab the case file and sample from the intake bench over there.".into(),
                "Once you have them, head east into the methodology lab.".into(),
            ],
        },
        Npc {
            id: "npc-okafor".into(),
            name: "Sam Okafor".into(),
            role: "Lab Technician".into(),
            character: Character::Dev,
            room: RoomId::Methodology,
            position: Vec2::new(300.0, 300.0),
            state: NpcState::Working,
            target: None,
            work_timer_ms: 2500,
            last_shout_ms: None,
            interactable: true,
            dialogue: vec![
                "Work the benches left to right — order matters in this protocol.".into(),
                "You can't run a gel before you've digested the DNA, after all.".into(),
            ],
        },
        Npc {
            id: "npc-lindqvist".into(),
            name: "Ada Lindqvist".into(),
            role: "Lab Technician".into(),
            character: Character::Aiko,
            room: RoomId::Methodology,
            position: Vec2::new(600.0, 380.0),
            state: NpcState::Working,
            target: None,
            work_timer_ms: 4000,
            last_shout_ms: None,
            interactable: false,
            dialogue: vec![],
        },
        Npc {
            id: "npc-marsh".into(),
            name: "Prof. Marsh".into(),
            role: "Curator".into(),
            character: Character::Marcus,
            room: RoomId::Applications,
            position: Vec2::new(820.0, 420.0),
            state: NpcState::Idle,
            target: None,
            work_timer_ms: 0,
            last_shout_ms: None,
            interactable: true,
            dialogue: vec![
                "Every display here is a real use of the technique you just ran.".into(),
                "Have a look around, then check the limitations room next door.".into(),
            ],
        },
    ]
}
