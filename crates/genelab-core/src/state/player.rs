//! The player avatar.

use genelab_logic::direction::Direction;
use genelab_logic::geometry::Vec2;
use serde::{Deserialize, Serialize};

use crate::content::PLAYER_START;

/// Selectable avatar appearance, chosen once during character creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Character {
    #[default]
    Aiko,
    Dev,
    Lena,
    Marcus,
}

/// The player. Position and kick state are mutated continuously by the
/// controller; the character is set once and kept until restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
    pub character: Character,
    /// Transient flag driving the cosmetic kick animation.
    pub is_kicking: bool,
    pub kick_direction: Option<Direction>,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            position: PLAYER_START,
            character: Character::default(),
            is_kicking: false,
            kick_direction: None,
        }
    }
}
