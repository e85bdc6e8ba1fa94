// Character creation
pub const STARTING_GOLD: u32 = 50;
pub const STARTING_POTIONS: u32 = 2;
pub const BASE_CRIT_CHANCE: f64 = 0.1;
pub const MIN_CRIT_CHANCE: f64 = 0.1;
pub const MAX_CRIT_CHANCE: f64 = 0.5;
pub const DEFAULT_HERO_NAME: &str = "Heros";
pub const MAX_NAME_LENGTH: usize = 15;

// XP and leveling
pub const XP_PER_LEVEL: u32 = 80;
pub const LEVEL_UP_HP: u32 = 10;
pub const LEVEL_UP_DEFENSE: u32 = 1;
pub const LEVEL_UP_CRIT: f64 = 0.01;
pub const TANK_BONUS_HP: u32 = 10;
pub const TANK_BONUS_DEFENSE: u32 = 2;
pub const WARRIOR_BONUS_ATTACK: u32 = 3;
pub const WARRIOR_LEVEL_UP_CRIT: f64 = 0.02;
pub const MAGE_BONUS_ATTACK: u32 = 2;
pub const MAGE_BONUS_HP: u32 = 5;

// Player actions
pub const ATTACK_VARIANCE: i32 = 2;
pub const CRIT_MULTIPLIER: u32 = 2;
pub const BLOCK_CHANCE: f64 = 1.0 / 3.0;
pub const RIPOSTE_DIVISOR: u32 = 4;
pub const POTION_BASE_HEAL: u32 = 35;
pub const POTION_HEAL_PER_LEVEL: u32 = 2;
pub const MAGE_POTION_MULTIPLIER: f64 = 1.5;
pub const FLEE_CHANCE: f64 = 0.5;
pub const MAGE_FLEE_CHANCE: f64 = 0.6;

// Enemy scaling per stage
pub const BOSS_STAGE_INTERVAL: u32 = 5;
pub const ENEMY_BASE_HP: u32 = 50;
pub const ENEMY_HP_PER_STAGE: u32 = 15;
pub const ENEMY_BASE_ATTACK: u32 = 2;
pub const ENEMY_ATTACK_PER_STAGE: u32 = 3;
pub const ENEMY_BASE_DEFENSE: u32 = 3;
pub const ENEMY_DEFENSE_PER_STAGE: u32 = 1;
pub const ENEMY_BASE_XP: u32 = 10;
pub const ENEMY_XP_PER_STAGE: u32 = 5;

// (hp, attack) multipliers and flat defense bonus per enemy kind
pub const ORC_MULTIPLIERS: (f64, f64) = (1.1, 1.2);
pub const GOLEM_MULTIPLIERS: (f64, f64) = (1.3, 0.9);
pub const GOLEM_DEFENSE_BONUS: u32 = 2;

// Boss modifiers: (hp, attack) multipliers, flat defense, xp multiplier
pub const BOSS_MULTIPLIERS: (f64, f64) = (1.5, 1.2);
pub const BOSS_DEFENSE_BONUS: u32 = 2;
pub const BOSS_XP_MULTIPLIER: u32 = 2;

// Boss action roll: [0, CHARGE) prepares a charge, [CHARGE, HEAVY) heavy strike
pub const BOSS_CHARGE_THRESHOLD: f64 = 0.15;
pub const BOSS_HEAVY_THRESHOLD: f64 = 0.30;
pub const HEAVY_STRIKE_MULTIPLIER: f64 = 1.6;
pub const CHARGE_ATTACK_MULTIPLIER: u32 = 2;

// Loot
pub const COMMON_LOOT_CHANCE: f64 = 0.60;

// Session
pub const LOG_CAPACITY: usize = 8;
pub const SAVE_FILE_PREFIX: &str = "save_";
pub const SAVE_FILE_EXTENSION: &str = "json";

// UI
pub const TICK_INTERVAL_MS: u64 = 50;
pub const ASSETS_DIR: &str = "assets";
