use super::types::Item;
use serde::{Deserialize, Serialize};

/// Potion counter plus the unequipped items the player carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub potion: u32,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Inventory {
    pub fn new(potion: u32) -> Self {
        Self {
            potion,
            items: Vec::new(),
        }
    }

    pub fn add_potions(&mut self, amount: u32) {
        self.potion = self.potion.saturating_add(amount);
    }

    /// Takes one potion, returning false when there are none.
    pub fn consume_potion(&mut self) -> bool {
        if self.potion == 0 {
            return false;
        }
        self.potion -= 1;
        true
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes the item at `index`, keeping the order of the rest.
    pub fn take_item(&mut self, index: usize) -> Option<Item> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::types::ItemKind;

    #[test]
    fn test_consume_potion() {
        let mut inv = Inventory::new(1);
        assert!(inv.consume_potion());
        assert_eq!(inv.potion, 0);
        assert!(!inv.consume_potion());
        assert_eq!(inv.potion, 0);
    }

    #[test]
    fn test_take_item_keeps_order() {
        let mut inv = Inventory::new(0);
        for (i, name) in ["A", "B", "C"].iter().enumerate() {
            inv.add_item(Item::new(name, ItemKind::Weapon { attack: i as u32 }, ""));
        }

        let taken = inv.take_item(1).unwrap();
        assert_eq!(taken.name, "B");
        assert_eq!(inv.get(0).unwrap().name, "A");
        assert_eq!(inv.get(1).unwrap().name, "C");
        assert!(inv.take_item(5).is_none());
        assert_eq!(inv.len(), 2);
    }

    #[test]
    fn test_missing_items_field_defaults_empty() {
        let inv: Inventory = serde_json::from_str(r#"{"potion": 3}"#).unwrap();
        assert_eq!(inv.potion, 3);
        assert!(inv.is_empty());
    }
}
