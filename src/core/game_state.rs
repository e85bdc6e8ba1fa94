//! Session state shared by every screen.

use std::collections::VecDeque;

use crate::character::types::Character;
use crate::combat::types::Enemy;
use crate::core::constants::LOG_CAPACITY;
use crate::items::types::Item;

/// The single live game session.
///
/// `player` is absent until a game is created or loaded, `enemy` until the
/// first encounter spawns.
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Option<Character>,
    pub enemy: Option<Enemy>,
    /// Encounter counter, +1 per victory
    pub stage: u32,
    pub log: VecDeque<String>,
    /// Defend stance, valid for the next enemy turn only
    pub defending: bool,
    pub discovered_shop_items: Vec<String>,
    // Victory screen data
    pub last_xp: u32,
    pub last_loot: Option<Item>,
    pub leveled_up: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            player: None,
            enemy: None,
            stage: 1,
            log: VecDeque::with_capacity(LOG_CAPACITY),
            defending: false,
            discovered_shop_items: Vec::new(),
            last_xp: 0,
            last_loot: None,
            leveled_up: false,
        }
    }

    /// Appends a line, dropping the oldest once the log is full.
    pub fn add_log_entry(&mut self, message: impl Into<String>) {
        if self.log.len() >= LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(message.into());
    }

    pub fn clear_outcome(&mut self) {
        self.last_xp = 0;
        self.last_loot = None;
        self.leveled_up = false;
    }

    /// Everything but the log goes back to its pre-game value.
    pub fn reset(&mut self) {
        let log = std::mem::take(&mut self.log);
        *self = Self::new();
        self.log = log;
    }

    pub fn player_name(&self) -> &str {
        self.player.as_ref().map_or("", |p| p.name.as_str())
    }
}
