//! XP curve and level-up stat growth.

use super::class::CharacterClass;
use super::types::{clamp_crit, Character};
use crate::core::constants::*;

/// XP needed to leave `level`.
pub fn xp_for_next_level(level: u32) -> u32 {
    XP_PER_LEVEL * level
}

/// Adds `amount` XP and applies every level-up it pays for.
///
/// Excess XP carries over; thresholds are re-read after each level.
/// Returns the number of levels gained.
pub fn gain_xp(character: &mut Character, amount: u32) -> u32 {
    character.xp = character.xp.saturating_add(amount);
    check_level_up(character)
}

/// Consumes XP into levels while the current threshold is met.
pub fn check_level_up(character: &mut Character) -> u32 {
    let mut gained = 0;
    while character.xp >= xp_for_next_level(character.level) {
        character.xp -= xp_for_next_level(character.level);
        character.level += 1;
        apply_level_up(character);
        gained += 1;
    }
    gained
}

fn apply_level_up(character: &mut Character) {
    character.max_hp += LEVEL_UP_HP;
    character.base_defense += LEVEL_UP_DEFENSE;

    let crit_gain = match character.class {
        CharacterClass::Warrior => WARRIOR_LEVEL_UP_CRIT,
        _ => LEVEL_UP_CRIT,
    };
    character.crit_chance = clamp_crit(character.crit_chance + crit_gain);

    match character.class {
        CharacterClass::Warrior => {
            character.base_attack += WARRIOR_BONUS_ATTACK;
        }
        CharacterClass::Tank => {
            character.max_hp += TANK_BONUS_HP;
            character.base_defense += TANK_BONUS_DEFENSE;
        }
        CharacterClass::Mage => {
            character.base_attack += MAGE_BONUS_ATTACK;
            character.max_hp += MAGE_BONUS_HP;
        }
    }

    character.hp = character.max_hp;
}
