use serde::{Deserialize, Serialize};
use std::fmt;

/// The five equipment slots a character can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentSlot {
    Weapon,
    Chest,
    Helmet,
    Greaves,
    Boots,
}

impl EquipmentSlot {
    /// Display order used by the inventory screen and the battle HUD.
    pub const ALL: [EquipmentSlot; 5] = [
        EquipmentSlot::Weapon,
        EquipmentSlot::Helmet,
        EquipmentSlot::Chest,
        EquipmentSlot::Greaves,
        EquipmentSlot::Boots,
    ];

    /// Slots whose items add defense.
    pub const ARMOR: [EquipmentSlot; 4] = [
        EquipmentSlot::Chest,
        EquipmentSlot::Helmet,
        EquipmentSlot::Greaves,
        EquipmentSlot::Boots,
    ];

    /// Key used in save files.
    pub fn key(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "weapon",
            EquipmentSlot::Chest => "chest",
            EquipmentSlot::Helmet => "helmet",
            EquipmentSlot::Greaves => "greaves",
            EquipmentSlot::Boots => "boots",
        }
    }

    /// French label shown to the player.
    pub fn label(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "Arme",
            EquipmentSlot::Chest => "Plastron",
            EquipmentSlot::Helmet => "Casque",
            EquipmentSlot::Greaves => "Jambières",
            EquipmentSlot::Boots => "Bottes",
        }
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

fn default_amount() -> u32 {
    1
}

/// What an item is, with the one bonus that type carries.
///
/// Serialized inline into the item record under a `type` tag, so a weapon
/// reads as `{"type": "weapon", "attack": 3, ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemKind {
    Potion {
        #[serde(default = "default_amount")]
        amount: u32,
    },
    Gold {
        #[serde(default)]
        amount: u32,
    },
    Weapon {
        #[serde(default)]
        attack: u32,
    },
    Chest {
        #[serde(default)]
        defense: u32,
    },
    Helmet {
        #[serde(default)]
        defense: u32,
    },
    Greaves {
        #[serde(default)]
        defense: u32,
    },
    Boots {
        #[serde(default)]
        defense: u32,
    },
}

impl ItemKind {
    /// The slot this kind is worn in, or `None` for consumables.
    pub fn slot(&self) -> Option<EquipmentSlot> {
        match self {
            ItemKind::Weapon { .. } => Some(EquipmentSlot::Weapon),
            ItemKind::Chest { .. } => Some(EquipmentSlot::Chest),
            ItemKind::Helmet { .. } => Some(EquipmentSlot::Helmet),
            ItemKind::Greaves { .. } => Some(EquipmentSlot::Greaves),
            ItemKind::Boots { .. } => Some(EquipmentSlot::Boots),
            ItemKind::Potion { .. } | ItemKind::Gold { .. } => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ItemKind::Potion { .. } => "potion",
            ItemKind::Gold { .. } => "gold",
            ItemKind::Weapon { .. } => "weapon",
            ItemKind::Chest { .. } => "chest",
            ItemKind::Helmet { .. } => "helmet",
            ItemKind::Greaves { .. } => "greaves",
            ItemKind::Boots { .. } => "boots",
        }
    }
}

/// An immutable item record: loot drop, shop entry, or inventory/equipment content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(flatten)]
    pub kind: ItemKind,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub cost: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_required: Option<u32>,
}

impl Item {
    pub fn new(name: &str, kind: ItemKind, desc: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            desc: desc.to_string(),
            cost: 0,
            level_required: None,
        }
    }

    /// Shop entry: priced and gated by a minimum level.
    pub fn for_sale(name: &str, kind: ItemKind, desc: &str, cost: u32, level_required: u32) -> Self {
        Self {
            name: name.to_string(),
            kind,
            desc: desc.to_string(),
            cost,
            level_required: Some(level_required),
        }
    }

    pub fn slot(&self) -> Option<EquipmentSlot> {
        self.kind.slot()
    }

    pub fn is_equippable(&self) -> bool {
        self.slot().is_some()
    }

    pub fn attack_bonus(&self) -> u32 {
        match self.kind {
            ItemKind::Weapon { attack } => attack,
            _ => 0,
        }
    }

    pub fn defense_bonus(&self) -> u32 {
        match self.kind {
            ItemKind::Chest { defense }
            | ItemKind::Helmet { defense }
            | ItemKind::Greaves { defense }
            | ItemKind::Boots { defense } => defense,
            _ => 0,
        }
    }

    pub fn level_required(&self) -> u32 {
        self.level_required.unwrap_or(1)
    }

    /// Short stat summary, e.g. "+3 ATK" or "+2 DEF".
    pub fn stat_summary(&self) -> String {
        match self.kind {
            ItemKind::Weapon { attack } => format!("+{} ATK", attack),
            ItemKind::Potion { amount } => format!("x{}", amount),
            ItemKind::Gold { amount } => format!("{} or", amount),
            _ => format!("+{} DEF", self.defense_bonus()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weapon_record_shape() {
        let item = Item::new("Epée Rouillée", ItemKind::Weapon { attack: 3 }, "Une vieille epée.");
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["type"], "weapon");
        assert_eq!(json["attack"], 3);
        assert_eq!(json["cost"], 0);
        assert!(json.get("defense").is_none());
        assert!(json.get("level_required").is_none());
    }

    #[test]
    fn test_parses_legacy_potion_record() {
        let json = r#"{"name": "Grande Potion", "type": "potion", "amount": 1, "desc": "Restaure beaucoup de vie.", "cost": 0}"#;
        let item: Item = serde_json::from_str(json).unwrap();

        assert_eq!(item.kind, ItemKind::Potion { amount: 1 });
        assert!(!item.is_equippable());
    }

    #[test]
    fn test_parses_shop_record_with_level() {
        let json = r#"{"name": "Jambières de Fer", "type": "greaves", "defense": 3, "desc": "", "cost": 100, "level_required": 4}"#;
        let item: Item = serde_json::from_str(json).unwrap();

        assert_eq!(item.slot(), Some(EquipmentSlot::Greaves));
        assert_eq!(item.defense_bonus(), 3);
        assert_eq!(item.level_required(), 4);
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let json = r#"{"name": "Anneau", "type": "ring", "desc": "", "cost": 0}"#;
        assert!(serde_json::from_str::<Item>(json).is_err());
    }

    #[test]
    fn test_bonuses_are_exclusive_by_type() {
        let sword = Item::new("Sword", ItemKind::Weapon { attack: 5 }, "");
        let helm = Item::new("Helm", ItemKind::Helmet { defense: 2 }, "");

        assert_eq!(sword.attack_bonus(), 5);
        assert_eq!(sword.defense_bonus(), 0);
        assert_eq!(helm.attack_bonus(), 0);
        assert_eq!(helm.defense_bonus(), 2);
    }
}
