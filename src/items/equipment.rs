use super::types::{EquipmentSlot, Item, ItemKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquipError {
    #[error("Item non equipable (type non reconnu).")]
    NotEquippable { name: String },
    #[error("Emplacement {} vide ou non reconnu.", .0.key().to_uppercase())]
    EmptySlot(EquipmentSlot),
    #[error("Objet introuvable dans l'inventaire (index {0}).")]
    InvalidIndex(usize),
    #[error("{name} ne peut pas aller dans l'emplacement {slot}.")]
    SlotMismatch { name: String, slot: EquipmentSlot },
}

/// Equipped items, one optional item per slot.
///
/// Every occupied slot holds an item whose kind matches the slot; the only
/// ways in are `equip` and deserialization, and both check it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EquipmentRecord")]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub chest: Option<Item>,
    pub helmet: Option<Item>,
    pub greaves: Option<Item>,
    pub boots: Option<Item>,
}

/// On-disk shape, including the pre-split `armor` slot.
#[derive(Deserialize)]
struct EquipmentRecord {
    #[serde(default)]
    weapon: Option<Item>,
    #[serde(default)]
    chest: Option<Item>,
    #[serde(default)]
    helmet: Option<Item>,
    #[serde(default)]
    greaves: Option<Item>,
    #[serde(default)]
    boots: Option<Item>,
    #[serde(default)]
    armor: Option<LegacyArmor>,
}

/// Item from the old single armor slot. Its `type` tag predates the slot
/// split and is ignored; whatever it was, it is worn as a chest piece.
#[derive(Deserialize)]
struct LegacyArmor {
    name: String,
    #[serde(default)]
    defense: u32,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    cost: u32,
    #[serde(default)]
    level_required: Option<u32>,
}

impl From<LegacyArmor> for Item {
    fn from(armor: LegacyArmor) -> Self {
        Item {
            name: armor.name,
            kind: ItemKind::Chest {
                defense: armor.defense,
            },
            desc: armor.desc,
            cost: armor.cost,
            level_required: armor.level_required,
        }
    }
}

impl TryFrom<EquipmentRecord> for Equipment {
    type Error = EquipError;

    fn try_from(record: EquipmentRecord) -> Result<Self, Self::Error> {
        let equipment = Equipment {
            weapon: record.weapon,
            // Old saves had a single armor slot; it becomes the chest piece
            chest: record.chest.or(record.armor.map(Item::from)),
            helmet: record.helmet,
            greaves: record.greaves,
            boots: record.boots,
        };

        for slot in EquipmentSlot::ALL {
            if let Some(item) = equipment.get(slot) {
                if item.slot() != Some(slot) {
                    return Err(EquipError::SlotMismatch {
                        name: item.name.clone(),
                        slot,
                    });
                }
            }
        }

        Ok(equipment)
    }
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&Item> {
        match slot {
            EquipmentSlot::Weapon => self.weapon.as_ref(),
            EquipmentSlot::Chest => self.chest.as_ref(),
            EquipmentSlot::Helmet => self.helmet.as_ref(),
            EquipmentSlot::Greaves => self.greaves.as_ref(),
            EquipmentSlot::Boots => self.boots.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<Item> {
        match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Chest => &mut self.chest,
            EquipmentSlot::Helmet => &mut self.helmet,
            EquipmentSlot::Greaves => &mut self.greaves,
            EquipmentSlot::Boots => &mut self.boots,
        }
    }

    /// Puts `item` in its slot and hands back whatever was there.
    ///
    /// A non-equippable item comes back alongside the error and the
    /// equipment is left unchanged.
    pub fn equip(&mut self, item: Item) -> Result<Option<Item>, (Item, EquipError)> {
        match item.slot() {
            Some(slot) => Ok(self.slot_mut(slot).replace(item)),
            None => {
                let err = EquipError::NotEquippable {
                    name: item.name.clone(),
                };
                Err((item, err))
            }
        }
    }

    /// Empties `slot`, returning its item.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Result<Item, EquipError> {
        self.slot_mut(slot).take().ok_or(EquipError::EmptySlot(slot))
    }

    pub fn attack_bonus(&self) -> u32 {
        self.weapon.as_ref().map_or(0, Item::attack_bonus)
    }

    pub fn defense_bonus(&self) -> u32 {
        EquipmentSlot::ARMOR
            .iter()
            .filter_map(|slot| self.get(*slot))
            .map(Item::defense_bonus)
            .sum()
    }

    /// Equipped items in display order.
    pub fn iter(&self) -> impl Iterator<Item = (EquipmentSlot, &Item)> {
        EquipmentSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|item| (slot, item)))
    }
}
