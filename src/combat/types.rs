use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::constants::*;

/// Enemy archetypes. Each stage draws one uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Goblin,
    Orc,
    Golem,
    Bandit,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 4] = [
        EnemyKind::Goblin,
        EnemyKind::Orc,
        EnemyKind::Golem,
        EnemyKind::Bandit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EnemyKind::Goblin => "Gobelin",
            EnemyKind::Orc => "Orque",
            EnemyKind::Golem => "Golem",
            EnemyKind::Bandit => "Bandit",
        }
    }

    fn boss_avatar(&self) -> &'static str {
        match self {
            EnemyKind::Goblin => "boss_goblin.png",
            EnemyKind::Orc => "boss_orque.png",
            EnemyKind::Golem => "boss_golem.png",
            EnemyKind::Bandit => "boss_bandit.png",
        }
    }
}

impl fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the enemy decided to do this turn, before defense is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyAction {
    /// Releases a prepared charge; bypasses block and defend
    Charged { damage: u32 },
    /// Spends the turn preparing a charge
    PrepareCharge,
    /// Boss-only strike at 1.6x attack
    Heavy { raw: u32 },
    Normal { raw: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    pub name: String,
    pub kind: EnemyKind,
    pub max_hp: u32,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub xp_reward: u32,
    pub is_boss: bool,
    /// Set between a charge-prepare turn and its payoff strike
    pub charging: bool,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Removes up to `amount` HP and returns how much was actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.hp);
        self.hp -= applied;
        applied
    }

    pub fn avatar_file(&self) -> &'static str {
        if self.is_boss {
            self.kind.boss_avatar()
        } else if self.kind == EnemyKind::Goblin {
            "goblin.png"
        } else {
            "enemy.png"
        }
    }

    /// Picks this turn's action.
    ///
    /// A pending charge always fires, whatever the roll. Otherwise bosses roll
    /// once: below 0.15 they start charging, below 0.30 they strike heavy.
    pub fn choose_action(&mut self, player_defense: u32, rng: &mut impl Rng) -> EnemyAction {
        if self.charging {
            self.charging = false;
            let damage = (self.attack * CHARGE_ATTACK_MULTIPLIER)
                .saturating_sub(player_defense / 2)
                .max(1);
            return EnemyAction::Charged { damage };
        }

        if self.is_boss {
            let roll = rng.gen::<f64>();
            if roll < BOSS_CHARGE_THRESHOLD {
                self.charging = true;
                return EnemyAction::PrepareCharge;
            }
            if roll < BOSS_HEAVY_THRESHOLD {
                let raw = ((self.attack as f64 * HEAVY_STRIKE_MULTIPLIER) as u32).max(1);
                return EnemyAction::Heavy { raw };
            }
        }

        EnemyAction::Normal {
            raw: self.attack.max(1),
        }
    }
}

pub fn is_boss_stage(stage: u32) -> bool {
    stage > 0 && stage % BOSS_STAGE_INTERVAL == 0
}

fn scale(value: u32, multiplier: f64) -> u32 {
    (value as f64 * multiplier) as u32
}

/// Builds the enemy for `stage`. Every fifth stage is a boss.
pub fn generate_enemy(stage: u32, rng: &mut impl Rng) -> Enemy {
    let kind = EnemyKind::ALL[rng.gen_range(0..EnemyKind::ALL.len())];
    build_enemy(kind, stage)
}

/// Deterministic part of enemy generation, split out for tests.
pub fn build_enemy(kind: EnemyKind, stage: u32) -> Enemy {
    let mut hp = ENEMY_BASE_HP + ENEMY_HP_PER_STAGE * stage;
    let mut attack = ENEMY_BASE_ATTACK + ENEMY_ATTACK_PER_STAGE * stage;
    let mut defense = ENEMY_BASE_DEFENSE + ENEMY_DEFENSE_PER_STAGE * stage;
    let mut xp_reward = ENEMY_BASE_XP + ENEMY_XP_PER_STAGE * stage;

    match kind {
        EnemyKind::Orc => {
            let (hp_m, atk_m) = ORC_MULTIPLIERS;
            hp = scale(hp, hp_m);
            attack = scale(attack, atk_m);
        }
        EnemyKind::Golem => {
            let (hp_m, atk_m) = GOLEM_MULTIPLIERS;
            hp = scale(hp, hp_m);
            attack = scale(attack, atk_m);
            defense += GOLEM_DEFENSE_BONUS;
        }
        EnemyKind::Goblin | EnemyKind::Bandit => {}
    }

    let is_boss = is_boss_stage(stage);
    let name = if is_boss {
        let (hp_m, atk_m) = BOSS_MULTIPLIERS;
        hp = scale(hp, hp_m);
        attack = scale(attack, atk_m);
        defense += BOSS_DEFENSE_BONUS;
        xp_reward *= BOSS_XP_MULTIPLIER;
        format!("Boss {}", kind.name())
    } else {
        kind.name().to_string()
    };

    Enemy {
        name,
        kind,
        max_hp: hp,
        hp,
        attack,
        defense,
        xp_reward,
        is_boss,
        charging: false,
    }
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
    fn test_stage_one_goblin() {
        let e = build_enemy(EnemyKind::Goblin, 1);
        assert_eq!(e.name, "Gobelin");
        assert_eq!(e.max_hp, 65);
        assert_eq!(e.hp, 65);
        assert_eq!(e.attack, 5);
        assert_eq!(e.defense, 4);
        assert_eq!(e.xp_reward, 15);
        assert!(!e.is_boss);
        assert!(!e.charging);
        assert_eq!(e.avatar_file(), "goblin.png");
    }

    #[test]
    fn test_orc_and_golem_modifiers() {
        let orc = build_enemy(EnemyKind::Orc, 2);
        // hp 80 * 1.1, atk 8 * 1.2
        assert_eq!(orc.max_hp, 88);
        assert_eq!(orc.attack, 9);
        assert_eq!(orc.defense, 5);
        assert_eq!(orc.avatar_file(), "enemy.png");

        let golem = build_enemy(EnemyKind::Golem, 2);
        assert_eq!(golem.max_hp, 104);
        assert_eq!(golem.attack, 7);
        assert_eq!(golem.defense, 7);
    }

    #[test]
    fn test_boss_every_fifth_stage() {
        let boss = build_enemy(EnemyKind::Golem, 5);
        assert!(boss.is_boss);
        assert_eq!(boss.name, "Boss Golem");
        // hp 125 * 1.3 = 162, * 1.5 = 243
        assert_eq!(boss.max_hp, 243);
        // atk 17 * 0.9 = 15, * 1.2 = 18
        assert_eq!(boss.attack, 18);
        assert_eq!(boss.defense, 12);
        assert_eq!(boss.xp_reward, 70);
        assert_eq!(boss.avatar_file(), "boss_golem.png");

        assert!(!build_enemy(EnemyKind::Bandit, 4).is_boss);
        assert!(build_enemy(EnemyKind::Bandit, 10).is_boss);
    }

    #[test]
    fn test_generate_enemy_uses_stage() {
        let mut rng = create_test_rng();
        for stage in 1..=12 {
            let e = generate_enemy(stage, &mut rng);
            assert_eq!(e.is_boss, stage % 5 == 0);
            assert_eq!(e.hp, e.max_hp);
            assert!(e.attack >= 1);
        }
    }

    #[test]
    fn test_take_damage_clamps() {
        let mut e = build_enemy(EnemyKind::Bandit, 1);
        assert_eq!(e.take_damage(10), 10);
        assert_eq!(e.take_damage(1000), 55);
        assert!(!e.is_alive());
    }

    #[test]
    fn test_charging_always_fires_and_clears() {
        let mut rng = create_test_rng();
        for _ in 0..100 {
            let mut boss = build_enemy(EnemyKind::Orc, 5);
            boss.charging = true;
            let action = boss.choose_action(10, &mut rng);
            let expected = (boss.attack * 2 - 5).max(1);
            assert_eq!(action, EnemyAction::Charged { damage: expected });
            assert!(!boss.charging);
        }
    }

    #[test]
    fn test_charged_damage_floor() {
        let mut rng = create_test_rng();
        let mut boss = build_enemy(EnemyKind::Goblin, 5);
        boss.charging = true;
        assert_eq!(
            boss.choose_action(1000, &mut rng),
            EnemyAction::Charged { damage: 1 }
        );
    }

    #[test]
    fn test_regular_enemy_always_normal() {
        let mut rng = create_test_rng();
        let mut e = build_enemy(EnemyKind::Goblin, 3);
        for _ in 0..200 {
            assert_eq!(
                e.choose_action(0, &mut rng),
                EnemyAction::Normal { raw: e.attack }
            );
            assert!(!e.charging);
        }
    }

    #[test]
    fn test_boss_action_distribution() {
        let mut rng = create_test_rng();
        let mut boss = build_enemy(EnemyKind::Bandit, 5);
        let (mut prepare, mut heavy, mut normal) = (0, 0, 0);
        let trials = 10_000;

        for _ in 0..trials {
            boss.charging = false;
            match boss.choose_action(0, &mut rng) {
                EnemyAction::PrepareCharge => prepare += 1,
                EnemyAction::Heavy { raw } => {
                    assert_eq!(raw, (boss.attack as f64 * 1.6) as u32);
                    heavy += 1
                }
                EnemyAction::Normal { .. } => normal += 1,
                EnemyAction::Charged { .. } => panic!("no charge was pending"),
            }
        }

        let rate = |n: i32| n as f64 / trials as f64;
        assert!((rate(prepare) - 0.15).abs() < 0.02);
        assert!((rate(heavy) - 0.15).abs() < 0.02);
        assert!((rate(normal) - 0.70).abs() < 0.02);
    }
}
