use serde::{Deserialize, Serialize};
use std::fmt;

/// Playable classes. The serialized name is the French one shown in game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    #[serde(rename = "Guerrier")]
    Warrior,
    Tank,
    Mage,
}

/// Starting stats for a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassStats {
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
}

impl CharacterClass {
    /// Order shown on the selection screen.
    pub const ALL: [CharacterClass; 3] = [
        CharacterClass::Warrior,
        CharacterClass::Tank,
        CharacterClass::Mage,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CharacterClass::Warrior => "Guerrier",
            CharacterClass::Tank => "Tank",
            CharacterClass::Mage => "Mage",
        }
    }

    /// Parses the saved class name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.name() == name)
    }

    pub fn base_stats(&self) -> ClassStats {
        match self {
            CharacterClass::Warrior => ClassStats {
                max_hp: 110,
                attack: 14,
                defense: 6,
            },
            CharacterClass::Tank => ClassStats {
                max_hp: 120,
                attack: 10,
                defense: 8,
            },
            CharacterClass::Mage => ClassStats {
                max_hp: 90,
                attack: 15,
                defense: 4,
            },
        }
    }

    pub fn avatar_file(&self) -> &'static str {
        match self {
            CharacterClass::Warrior => "hero1.png",
            CharacterClass::Tank => "hero2.png",
            CharacterClass::Mage => "hero3.png",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CharacterClass::Warrior => {
                "Equilibre. Gagne de l'attaque et du critique a chaque niveau."
            }
            CharacterClass::Tank => "Robuste. Gagne beaucoup de PV et de defense a chaque niveau.",
            CharacterClass::Mage => {
                "Fragile mais puissant. Potions plus efficaces et fuite plus facile."
            }
        }
    }

    pub fn next(&self) -> Self {
        match self {
            CharacterClass::Warrior => CharacterClass::Tank,
            CharacterClass::Tank => CharacterClass::Mage,
            CharacterClass::Mage => CharacterClass::Warrior,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            CharacterClass::Warrior => CharacterClass::Mage,
            CharacterClass::Tank => CharacterClass::Warrior,
            CharacterClass::Mage => CharacterClass::Tank,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
