use super::class::CharacterClass;
use crate::core::constants::*;
use crate::items::equipment::{EquipError, Equipment};
use crate::items::inventory::Inventory;
use crate::items::types::EquipmentSlot;

/// The player's hero.
///
/// `hp` never exceeds `max_hp`; every mutator clamps.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub name: String,
    pub class: CharacterClass,
    pub max_hp: u32,
    pub hp: u32,
    pub base_attack: u32,
    pub base_defense: u32,
    pub crit_chance: f64,
    pub xp: u32,
    pub level: u32,
    pub gold: u32,
    pub inventory: Inventory,
    pub equipment: Equipment,
}

pub fn clamp_crit(chance: f64) -> f64 {
    chance.clamp(MIN_CRIT_CHANCE, MAX_CRIT_CHANCE)
}

impl Character {
    /// A fresh level 1 character with the class's starting stats and an empty bag.
    pub fn new(name: &str, class: CharacterClass) -> Self {
        let stats = class.base_stats();
        Self {
            name: name.to_string(),
            class,
            max_hp: stats.max_hp,
            hp: stats.max_hp,
            base_attack: stats.attack,
            base_defense: stats.defense,
            crit_chance: BASE_CRIT_CHANCE,
            xp: 0,
            level: 1,
            gold: 0,
            inventory: Inventory::default(),
            equipment: Equipment::new(),
        }
    }

    pub fn attack(&self) -> u32 {
        self.base_attack + self.equipment.attack_bonus()
    }

    pub fn defense(&self) -> u32 {
        self.base_defense + self.equipment.defense_bonus()
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn avatar_file(&self) -> &'static str {
        self.class.avatar_file()
    }

    /// Removes up to `amount` HP and returns how much was actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.hp);
        self.hp -= applied;
        applied
    }

    /// Restores up to `amount` HP and returns how much was actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.max_hp.saturating_sub(self.hp));
        self.hp += applied;
        applied
    }

    pub fn potion_heal_amount(&self) -> u32 {
        let base = POTION_BASE_HEAL + self.level * POTION_HEAL_PER_LEVEL;
        match self.class {
            CharacterClass::Mage => (base as f64 * MAGE_POTION_MULTIPLIER) as u32,
            _ => base,
        }
    }

    /// Drinks a potion if one is left. Returns the HP actually restored.
    pub fn use_potion(&mut self) -> Option<u32> {
        if !self.inventory.consume_potion() {
            return None;
        }
        Some(self.heal(self.potion_heal_amount()))
    }

    pub fn flee_chance(&self) -> f64 {
        match self.class {
            CharacterClass::Mage => MAGE_FLEE_CHANCE,
            _ => FLEE_CHANCE,
        }
    }

    /// Moves the inventory item at `index` into its slot.
    ///
    /// A previously equipped item goes back into the inventory. On error
    /// nothing moves.
    pub fn equip_item(&mut self, index: usize) -> Result<String, EquipError> {
        let item = self
            .inventory
            .take_item(index)
            .ok_or(EquipError::InvalidIndex(index))?;

        let name = item.name.clone();
        let type_name = item.kind.type_name();

        match self.equipment.equip(item) {
            Ok(displaced) => {
                let mut message = format!("{} equipe dans le slot {}.", name, type_name);
                if let Some(old) = displaced {
                    self.inventory.add_item(old);
                    message.push_str(" L'ancien objet est dans l'inventaire.");
                }
                Ok(message)
            }
            Err((item, err)) => {
                self.inventory.items.insert(index, item);
                Err(err)
            }
        }
    }

    /// Moves the item in `slot` back to the inventory.
    pub fn unequip_item(&mut self, slot: EquipmentSlot) -> Result<String, EquipError> {
        let item = self.equipment.unequip(slot)?;
        let message = format!("{} desequipe et remis dans l'inventaire.", item.name);
        self.inventory.add_item(item);
        Ok(message)
    }
}
