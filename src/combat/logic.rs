use rand::Rng;

use super::types::{Enemy, EnemyAction};
use crate::character::types::Character;
use crate::core::constants::*;

/// Everything a combat step can produce. The session turns these into log lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    PlayerAttack {
        damage: u32,
        was_crit: bool,
    },
    Defend,
    /// Defend stance fully blocked the hit
    Blocked,
    EnemyAttack {
        damage: u32,
        heavy: bool,
        defending: bool,
    },
    ChargePrepared,
    ChargedStrike {
        damage: u32,
    },
    Riposte {
        damage: u32,
    },
    PotionUsed {
        healed: u32,
    },
    NoPotion,
    FleeSucceeded,
    FleeFailed,
}

impl CombatEvent {
    pub fn log_lines(&self, player: &str, enemy: &str) -> Vec<String> {
        let line = match self {
            CombatEvent::PlayerAttack {
                damage,
                was_crit: true,
            } => format!("CRITIQUE! {} attaque et inflige {} degats.", player, damage),
            CombatEvent::PlayerAttack { damage, .. } => {
                format!("{} attaque et inflige {} degats.", player, damage)
            }
            CombatEvent::Defend => {
                "Posture defensive activee pour le tour. 33% de chance de bloquer.".to_string()
            }
            CombatEvent::Blocked => format!("BLOCAGE PARFAIT! {} ne prend aucun degat.", player),
            CombatEvent::EnemyAttack {
                damage,
                defending: true,
                ..
            } => format!(
                "Tu defends ! {} inflige {} degats (Defense renforcee).",
                enemy, damage
            ),
            CombatEvent::EnemyAttack {
                damage,
                heavy: true,
                ..
            } => format!("{} assene un coup lourd et inflige {} degats.", enemy, damage),
            CombatEvent::EnemyAttack { damage, .. } => {
                format!("{} attaque et inflige {} degats.", enemy, damage)
            }
            CombatEvent::ChargePrepared => format!("{} se concentre pour charger...", enemy),
            CombatEvent::ChargedStrike { damage } => {
                format!("{} CHARGE et inflige {} degats!", enemy, damage)
            }
            CombatEvent::Riposte { damage } => {
                format!("Contre-attaque ! Riposte de {} degats a l'ennemi.", damage)
            }
            CombatEvent::PotionUsed { healed } => {
                format!("Tu bois une potion et recuperes {} PV.", healed)
            }
            CombatEvent::NoPotion => "Pas de potions...".to_string(),
            CombatEvent::FleeSucceeded => {
                return vec![
                    format!(
                        "[{}]: \"Ce combat n'en vaut pas la peine. Je me replie !\"",
                        player
                    ),
                    "Fuite reussie ! (Appuyez sur A)".to_string(),
                ]
            }
            CombatEvent::FleeFailed => {
                return vec![
                    format!("[{}]: \"Oups, l'ennemi m'a bloque !\"", player),
                    "Fuite echouee ! L'ennemi attaque...".to_string(),
                ]
            }
        };
        vec![line]
    }
}

/// Damage of a player strike before the crit multiplier.
pub fn attack_damage(attack: u32, variance: i32, enemy_defense: u32) -> u32 {
    let raw = (attack as i64 + variance as i64 - enemy_defense as i64).max(1);
    raw as u32
}

/// Player hits the enemy. The crit is rolled before the variance.
pub fn player_attack(player: &Character, enemy: &mut Enemy, rng: &mut impl Rng) -> Vec<CombatEvent> {
    let was_crit = rng.gen::<f64>() < player.crit_chance;
    let variance = rng.gen_range(-ATTACK_VARIANCE..=ATTACK_VARIANCE);

    let mut damage = attack_damage(player.attack(), variance, enemy.defense);
    if was_crit {
        damage *= CRIT_MULTIPLIER;
    }

    let dealt = enemy.take_damage(damage);
    vec![CombatEvent::PlayerAttack {
        damage: dealt,
        was_crit,
    }]
}

pub fn defend(defending: &mut bool) -> Vec<CombatEvent> {
    *defending = true;
    vec![CombatEvent::Defend]
}

/// Resolves one enemy turn against the player.
///
/// The defend stance is consumed whatever happens.
pub fn enemy_turn(
    player: &mut Character,
    enemy: &mut Enemy,
    defending: &mut bool,
    rng: &mut impl Rng,
) -> Vec<CombatEvent> {
    let mut events = Vec::new();
    let is_defending = *defending;
    *defending = false;

    if !player.is_alive() || !enemy.is_alive() {
        return events;
    }

    let blocked = !enemy.charging && is_defending && rng.gen::<f64>() < BLOCK_CHANCE;
    let player_defense = player.defense();

    let (raw, heavy) = match enemy.choose_action(player_defense, rng) {
        EnemyAction::Charged { damage } => {
            let dealt = player.take_damage(damage);
            events.push(CombatEvent::ChargedStrike { damage: dealt });
            return events;
        }
        EnemyAction::PrepareCharge => {
            events.push(CombatEvent::ChargePrepared);
            return events;
        }
        EnemyAction::Heavy { raw } => (raw, true),
        EnemyAction::Normal { raw } => (raw, false),
    };

    if blocked {
        events.push(CombatEvent::Blocked);
        return events;
    }

    let effective_defense = if is_defending {
        player_defense * 2
    } else {
        player_defense
    };
    let damage = raw.saturating_sub(effective_defense).max(1);
    let dealt = player.take_damage(damage);
    events.push(CombatEvent::EnemyAttack {
        damage: dealt,
        heavy,
        defending: is_defending,
    });

    if is_defending && dealt > 0 {
        let riposte = enemy.take_damage((dealt / RIPOSTE_DIVISOR).max(1));
        events.push(CombatEvent::Riposte { damage: riposte });
    }

    events
}

/// Drinks a potion, which costs the turn. Without potions nothing happens.
pub fn use_potion(
    player: &mut Character,
    enemy: &mut Enemy,
    defending: &mut bool,
    rng: &mut impl Rng,
) -> Vec<CombatEvent> {
    let Some(healed) = player.use_potion() else {
        return vec![CombatEvent::NoPotion];
    };

    let mut events = vec![CombatEvent::PotionUsed { healed }];
    events.extend(enemy_turn(player, enemy, defending, rng));
    events
}

/// Tries to leave the fight. A failed attempt hands the enemy a free turn.
pub fn attempt_flee(
    player: &mut Character,
    enemy: &mut Enemy,
    defending: &mut bool,
    rng: &mut impl Rng,
) -> Vec<CombatEvent> {
    if rng.gen::<f64>() < player.flee_chance() {
        return vec![CombatEvent::FleeSucceeded];
    }

    let mut events = vec![CombatEvent::FleeFailed];
    events.extend(enemy_turn(player, enemy, defending, rng));
    *defending = false;
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::class::CharacterClass;
    use crate::combat::types::{build_enemy, EnemyKind};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn hero() -> Character {
        Character::new("Test", CharacterClass::Warrior)
    }

    // =========================================================================
    // Player attack
    // =========================================================================

    #[test]
    fn test_attack_damage_floor() {
        assert_eq!(attack_damage(14, 2, 4), 12);
        assert_eq!(attack_damage(14, -2, 4), 8);
        assert_eq!(attack_damage(3, -2, 50), 1);
    }

    #[test]
    fn test_player_attack_range() {
        let mut rng = create_test_rng();
        let mut player = hero();
        player.crit_chance = 0.0;

        for _ in 0..500 {
            let mut enemy = build_enemy(EnemyKind::Goblin, 1);
            let events = player_attack(&player, &mut enemy, &mut rng);
            match events.as_slice() {
                [CombatEvent::PlayerAttack { damage, was_crit }] => {
                    // 14 +/- 2 - 4
                    assert!((8..=12).contains(damage), "damage {}", damage);
                    assert!(!was_crit);
                    assert_eq!(enemy.hp, enemy.max_hp - damage);
                }
                other => panic!("unexpected events {:?}", other),
            }
        }
    }

    #[test]
    fn test_crit_doubles_after_floor() {
        let mut rng = create_test_rng();
        let mut player = hero();
        player.crit_chance = 1.0;
        player.base_attack = 1;

        let mut enemy = build_enemy(EnemyKind::Golem, 10);
        let events = player_attack(&player, &mut enemy, &mut rng);
        assert_eq!(
            events,
            vec![CombatEvent::PlayerAttack {
                damage: 2,
                was_crit: true
            }]
        );
    }

    // =========================================================================
    // Enemy turn
    // =========================================================================

    #[test]
    fn test_enemy_normal_hit() {
        let mut rng = create_test_rng();
        let mut player = hero();
        let mut enemy = build_enemy(EnemyKind::Bandit, 3);
        enemy.attack = 20;
        let mut defending = false;

        let events = enemy_turn(&mut player, &mut enemy, &mut defending, &mut rng);
        assert_eq!(
            events,
            vec![CombatEvent::EnemyAttack {
                damage: 14,
                heavy: false,
                defending: false
            }]
        );
        assert_eq!(player.hp, 96);
    }

    #[test]
    fn test_enemy_hit_floor_is_one() {
        let mut rng = create_test_rng();
        let mut player = hero();
        player.base_defense = 100;
        let mut enemy = build_enemy(EnemyKind::Bandit, 1);
        let mut defending = false;

        enemy_turn(&mut player, &mut enemy, &mut defending, &mut rng);
        assert_eq!(player.hp, player.max_hp - 1);
    }

    #[test]
    fn test_defend_doubles_defense_once_and_ripostes() {
        let mut rng = create_test_rng();
        let mut blocked = 0;
        let mut hit = 0;

        for _ in 0..300 {
            let mut player = hero();
            let mut enemy = build_enemy(EnemyKind::Bandit, 3);
            enemy.attack = 40;
            let mut defending = false;
            defend(&mut defending);
            assert!(defending);

            let events = enemy_turn(&mut player, &mut enemy, &mut defending, &mut rng);
            assert!(!defending);

            match events.as_slice() {
                [CombatEvent::Blocked] => {
                    blocked += 1;
                    assert_eq!(player.hp, player.max_hp);
                    assert_eq!(enemy.hp, enemy.max_hp);
                }
                [CombatEvent::EnemyAttack {
                    damage,
                    defending: true,
                    ..
                }, CombatEvent::Riposte { damage: riposte }] => {
                    hit += 1;
                    // 40 - 6 * 2
                    assert_eq!(*damage, 28);
                    assert_eq!(*riposte, 7);
                    assert_eq!(enemy.hp, enemy.max_hp - 7);
                }
                other => panic!("unexpected events {:?}", other),
            }

            // Next hit uses normal defense again
            let events = enemy_turn(&mut player, &mut enemy, &mut defending, &mut rng);
            assert!(matches!(
                events.as_slice(),
                [CombatEvent::EnemyAttack {
                    damage: 34,
                    defending: false,
                    ..
                }]
            ));
        }

        assert!(blocked > 50 && hit > 150, "blocked {} hit {}", blocked, hit);
    }

    #[test]
    fn test_riposte_minimum_one() {
        let mut rng = create_test_rng();
        for _ in 0..50 {
            let mut player = hero();
            let mut enemy = build_enemy(EnemyKind::Bandit, 1);
            let mut defending = true;

            let events = enemy_turn(&mut player, &mut enemy, &mut defending, &mut rng);
            if events.len() == 2 {
                assert_eq!(events[1], CombatEvent::Riposte { damage: 1 });
            }
        }
    }

    #[test]
    fn test_charged_strike_ignores_defend() {
        let mut rng = create_test_rng();
        for _ in 0..100 {
            let mut player = hero();
            let mut boss = build_enemy(EnemyKind::Bandit, 5);
            boss.charging = true;
            let mut defending = true;

            let events = enemy_turn(&mut player, &mut boss, &mut defending, &mut rng);
            // 2 * 20 - 6 / 2
            assert_eq!(events, vec![CombatEvent::ChargedStrike { damage: 37 }]);
            assert!(!boss.charging);
            assert!(!defending);
            assert_eq!(boss.hp, boss.max_hp);
        }
    }

    #[test]
    fn test_charge_prepare_deals_nothing() {
        let mut rng = create_test_rng();
        let mut seen = false;

        for _ in 0..200 {
            let mut player = hero();
            let mut boss = build_enemy(EnemyKind::Orc, 5);
            let mut defending = true;

            let events = enemy_turn(&mut player, &mut boss, &mut defending, &mut rng);
            if events == vec![CombatEvent::ChargePrepared] {
                seen = true;
                assert!(boss.charging);
                assert!(!defending);
                assert_eq!(player.hp, player.max_hp);
            }
        }
        assert!(seen);
    }

    #[test]
    fn test_enemy_turn_skipped_when_enemy_dead() {
        let mut rng = create_test_rng();
        let mut player = hero();
        let mut enemy = build_enemy(EnemyKind::Goblin, 1);
        enemy.hp = 0;
        let mut defending = true;

        assert!(enemy_turn(&mut player, &mut enemy, &mut defending, &mut rng).is_empty());
        assert!(!defending);
        assert_eq!(player.hp, player.max_hp);
    }

    // =========================================================================
    // Potion and flee
    // =========================================================================

    #[test]
    fn test_potion_without_stock_keeps_turn() {
        let mut rng = create_test_rng();
        let mut player = hero();
        let mut enemy = build_enemy(EnemyKind::Goblin, 1);
        let mut defending = false;

        let events = use_potion(&mut player, &mut enemy, &mut defending, &mut rng);
        assert_eq!(events, vec![CombatEvent::NoPotion]);
        assert_eq!(player.hp, player.max_hp);
    }

    #[test]
    fn test_potion_costs_the_turn() {
        let mut rng = create_test_rng();
        let mut player = hero();
        player.inventory.potion = 1;
        player.hp = 20;
        let mut enemy = build_enemy(EnemyKind::Goblin, 1);
        let mut defending = false;

        let events = use_potion(&mut player, &mut enemy, &mut defending, &mut rng);
        assert_eq!(events[0], CombatEvent::PotionUsed { healed: 37 });
        assert_eq!(events.len(), 2);
        assert!(matches!(events[1], CombatEvent::EnemyAttack { .. }));
        assert_eq!(player.inventory.potion, 0);
    }

    fn flee_rate(class: CharacterClass) -> f64 {
        let mut rng = create_test_rng();
        let trials = 20_000;
        let mut successes = 0;

        for _ in 0..trials {
            let mut player = Character::new("Test", class);
            let mut enemy = build_enemy(EnemyKind::Goblin, 1);
            let mut defending = false;
            let events = attempt_flee(&mut player, &mut enemy, &mut defending, &mut rng);
            if events.contains(&CombatEvent::FleeSucceeded) {
                successes += 1;
            }
        }
        successes as f64 / trials as f64
    }

    #[test]
    fn test_flee_rate_converges() {
        assert!((flee_rate(CharacterClass::Warrior) - 0.5).abs() < 0.02);
        assert!((flee_rate(CharacterClass::Tank) - 0.5).abs() < 0.02);
        assert!((flee_rate(CharacterClass::Mage) - 0.6).abs() < 0.02);
    }

    #[test]
    fn test_failed_flee_gives_enemy_turn() {
        let mut rng = create_test_rng();
        let mut seen_failure = false;

        for _ in 0..50 {
            let mut player = hero();
            let mut enemy = build_enemy(EnemyKind::Goblin, 1);
            let mut defending = true;
            let events = attempt_flee(&mut player, &mut enemy, &mut defending, &mut rng);

            assert!(!defending || events == vec![CombatEvent::FleeSucceeded]);
            if events[0] == CombatEvent::FleeFailed {
                seen_failure = true;
                assert!(events.len() >= 2);
                assert!(!defending);
            }
        }
        assert!(seen_failure);
    }

    #[test]
    fn test_log_lines() {
        let lines = CombatEvent::FleeSucceeded.log_lines("Aria", "Orque");
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[Aria]"));

        let heavy = CombatEvent::EnemyAttack {
            damage: 9,
            heavy: true,
            defending: false,
        };
        assert_eq!(
            heavy.log_lines("Aria", "Boss Orque"),
            vec!["Boss Orque assene un coup lourd et inflige 9 degats.".to_string()]
        );
    }
}
