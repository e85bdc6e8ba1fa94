//! Fixed shop catalog, level-gated purchases.

use super::types::{Item, ItemKind};
use crate::character::types::Character;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error("Niveau {required} requis pour {name}.")]
    LevelTooLow { name: String, required: u32 },
    #[error("Pas assez d'or pour {name} ({cost} or).")]
    NotEnoughGold { name: String, cost: u32 },
    #[error("Article inconnu.")]
    UnknownItem,
}

/// Every item the shop sells, in display order.
pub fn shop_catalog() -> Vec<Item> {
    vec![
        Item::for_sale(
            "Potion Standard",
            ItemKind::Potion { amount: 1 },
            "Une potion de base pour se soigner. Restaure de la vie (base 35PV).",
            30,
            1,
        ),
        Item::for_sale(
            "Bottes de Cuir",
            ItemKind::Boots { defense: 1 },
            "Simples bottes en cuir pour une legere protection des pieds.",
            40,
            1,
        ),
        Item::for_sale(
            "Epée Aiguisée",
            ItemKind::Weapon { attack: 5 },
            "Meilleure que la rouille. Ajoute des points d'attaque.",
            80,
            2,
        ),
        Item::for_sale(
            "Plastron de Maille",
            ItemKind::Chest { defense: 4 },
            "Une bonne protection contre les coups. Protection pour le torse.",
            120,
            3,
        ),
        Item::for_sale(
            "Jambières de Fer",
            ItemKind::Greaves { defense: 3 },
            "Protection pour les jambes. Offre une defense solide.",
            100,
            4,
        ),
        Item::for_sale(
            "Casque de Guerrier",
            ItemKind::Helmet { defense: 3 },
            "Casque solide. Protege la tete contre les chocs.",
            90,
            4,
        ),
    ]
}

/// Names of catalog items a character of `level` may buy.
pub fn unlocked_item_names(level: u32) -> Vec<String> {
    shop_catalog()
        .into_iter()
        .filter(|item| item.level_required() <= level)
        .map(|item| item.name)
        .collect()
}

pub fn can_purchase(item: &Item, level: u32, gold: u32) -> bool {
    item.level_required() <= level && gold >= item.cost
}

/// Buys the catalog entry at `index` for `character`.
///
/// The character receives its own copy of the catalog record.
pub fn purchase(character: &mut Character, index: usize) -> Result<Item, PurchaseError> {
    let item = shop_catalog()
        .into_iter()
        .nth(index)
        .ok_or(PurchaseError::UnknownItem)?;

    let required = item.level_required();
    if required > character.level {
        return Err(PurchaseError::LevelTooLow {
            name: item.name,
            required,
        });
    }
    if character.gold < item.cost {
        return Err(PurchaseError::NotEnoughGold {
            name: item.name,
            cost: item.cost,
        });
    }

    character.gold -= item.cost;
    match item.kind {
        ItemKind::Potion { amount } => character.inventory.add_potions(amount),
        ItemKind::Gold { amount } => character.gold = character.gold.saturating_add(amount),
        _ => character.inventory.add_item(item.clone()),
    }

    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::class::CharacterClass;

    fn buyer(level: u32, gold: u32) -> Character {
        let mut c = Character::new("Acheteur", CharacterClass::Warrior);
        c.level = level;
        c.gold = gold;
        c
    }

    #[test]
    fn test_catalog_levels_are_sorted() {
        let levels: Vec<u32> = shop_catalog().iter().map(Item::level_required).collect();
        let mut sorted = levels.clone();
        sorted.sort();
        assert_eq!(levels, sorted);
    }

    #[test]
    fn test_can_purchase_gates() {
        let catalog = shop_catalog();
        let sword = &catalog[2];

        assert!(!can_purchase(sword, 1, 500));
        assert!(!can_purchase(sword, 2, 79));
        assert!(can_purchase(sword, 2, 80));
    }

    #[test]
    fn test_purchase_potion_increments_counter() {
        let mut c = buyer(1, 50);
        let potions = c.inventory.potion;

        let item = purchase(&mut c, 0).unwrap();
        assert_eq!(item.name, "Potion Standard");
        assert_eq!(c.gold, 20);
        assert_eq!(c.inventory.potion, potions + 1);
        assert!(c.inventory.is_empty());
    }

    #[test]
    fn test_purchase_gear_appends_copy() {
        let mut c = buyer(1, 100);

        purchase(&mut c, 1).unwrap();
        purchase(&mut c, 1).unwrap();

        assert_eq!(c.gold, 20);
        assert_eq!(c.inventory.len(), 2);
        assert_eq!(c.inventory.get(0), c.inventory.get(1));
        assert_eq!(c.inventory.get(0).unwrap().name, "Bottes de Cuir");
    }

    #[test]
    fn test_purchase_failures_leave_state() {
        let mut c = buyer(1, 10);

        assert!(matches!(
            purchase(&mut c, 2),
            Err(PurchaseError::LevelTooLow { required: 2, .. })
        ));
        assert!(matches!(
            purchase(&mut c, 0),
            Err(PurchaseError::NotEnoughGold { cost: 30, .. })
        ));
        assert_eq!(purchase(&mut c, 99), Err(PurchaseError::UnknownItem));
        assert_eq!(c.gold, 10);
        assert!(c.inventory.is_empty());
    }

    #[test]
    fn test_unlocked_item_names() {
        assert_eq!(
            unlocked_item_names(1),
            vec!["Potion Standard".to_string(), "Bottes de Cuir".to_string()]
        );
        assert_eq!(unlocked_item_names(4).len(), 6);
    }
}
