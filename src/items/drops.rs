use super::types::{Item, ItemKind};
use crate::core::constants::COMMON_LOOT_CHANCE;
use rand::Rng;

/// Loot that drops most of the time: potions and starter gear.
pub fn common_loot() -> Vec<Item> {
    vec![
        Item::new(
            "Grande Potion",
            ItemKind::Potion { amount: 1 },
            "Restaure beaucoup de vie.",
        ),
        Item::new(
            "Plastron en Cuir",
            ItemKind::Chest { defense: 2 },
            "Protection basique pour le torse. +2 DEF.",
        ),
        Item::new(
            "Epée Rouillée",
            ItemKind::Weapon { attack: 3 },
            "Une vieille epée. +3 ATK.",
        ),
        Item::new(
            "Casque de Recrue",
            ItemKind::Helmet { defense: 1 },
            "Protection pour la tete. +1 DEF.",
        ),
    ]
}

pub fn rare_loot() -> Vec<Item> {
    vec![
        Item::new(
            "Potion Standard",
            ItemKind::Potion { amount: 1 },
            "Restaure de la vie.",
        ),
        Item::new(
            "Pièces d'Or",
            ItemKind::Gold { amount: 80 },
            "De l'argent.",
        ),
    ]
}

/// Draws the single item dropped after a victory.
pub fn generate_loot(rng: &mut impl Rng) -> Item {
    let mut table = if rng.gen::<f64>() < COMMON_LOOT_CHANCE {
        common_loot()
    } else {
        rare_loot()
    };
    let index = rng.gen_range(0..table.len());
    table.swap_remove(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_common_table_has_no_gold() {
        assert!(common_loot()
            .iter()
            .all(|item| !matches!(item.kind, ItemKind::Gold { .. })));
    }

    #[test]
    fn test_loot_carries_its_description() {
        let chest = common_loot()
            .into_iter()
            .find(|item| item.name == "Plastron en Cuir")
            .unwrap();
        assert_eq!(chest.desc, "Protection basique pour le torse. +2 DEF.");
        assert!(rare_loot().iter().all(|item| !item.desc.is_empty()));
    }

    #[test]
    fn test_generate_loot_comes_from_tables() {
        let mut rng = create_test_rng();
        let known: Vec<String> = common_loot()
            .into_iter()
            .chain(rare_loot())
            .map(|item| item.name)
            .collect();

        for _ in 0..500 {
            let item = generate_loot(&mut rng);
            assert!(known.contains(&item.name), "unexpected loot {}", item.name);
        }
    }

    #[test]
    fn test_common_share_is_about_sixty_percent() {
        let mut rng = create_test_rng();
        let common: Vec<String> = common_loot().into_iter().map(|item| item.name).collect();
        let trials = 10_000;

        let hits = (0..trials)
            .filter(|_| common.contains(&generate_loot(&mut rng).name))
            .count();
        let rate = hits as f64 / trials as f64;

        assert!((rate - 0.6).abs() < 0.03, "common rate {}", rate);
    }
}
