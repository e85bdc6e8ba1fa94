//! Session operations: starting games, resolving battle turns, rewards,
//! shop, equipment and persistence. Every outcome is written to the log.

use rand::Rng;

use super::constants::*;
use super::game_state::GameState;
use crate::character::class::CharacterClass;
use crate::character::manager::{CharacterManager, SaveError};
use crate::character::progression::check_level_up;
use crate::character::types::Character;
use crate::combat::logic::{attempt_flee, defend, enemy_turn, player_attack, use_potion, CombatEvent};
use crate::combat::types::generate_enemy;
use crate::items::drops::generate_loot;
use crate::items::shop::{purchase, shop_catalog, unlocked_item_names};
use crate::items::types::{EquipmentSlot, Item, ItemKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleAction {
    Attack,
    Defend,
    Potion,
    Flee,
}

/// Where the encounter stands after a player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    /// Player's turn again (or the action did not consume it)
    Continue,
    Victory,
    GameOver,
    Fled,
}

/// Replaces the session with a fresh hero and spawns the first enemy.
pub fn start_new_game(
    state: &mut GameState,
    name: &str,
    class: CharacterClass,
    rng: &mut impl Rng,
) {
    state.reset();
    state.log.clear();

    let mut player = Character::new(name, class);
    player.gold = STARTING_GOLD;
    player.inventory.potion = STARTING_POTIONS;
    state.player = Some(player);
    state.discovered_shop_items = unlocked_item_names(1);

    state.add_log_entry(format!(
        "Nouvelle partie demarree. Classe: {}. Gold: {}.",
        class, STARTING_GOLD
    ));
    spawn_enemy(state, rng);
}

pub fn spawn_enemy(state: &mut GameState, rng: &mut impl Rng) {
    let enemy = generate_enemy(state.stage, rng);
    state.add_log_entry(format!("Un {} (Etage {}) apparait !", enemy.name, state.stage));
    state.enemy = Some(enemy);
    state.defending = false;
}

/// Resolves one player action and the enemy's answer.
///
/// Player death is checked before enemy death, so a riposte that kills the
/// enemy during a fatal hit still ends in defeat.
pub fn resolve_player_action(
    state: &mut GameState,
    action: BattleAction,
    rng: &mut impl Rng,
) -> BattleOutcome {
    let (Some(player), Some(enemy)) = (state.player.as_mut(), state.enemy.as_mut()) else {
        return BattleOutcome::Continue;
    };
    if !enemy.is_alive() || !player.is_alive() {
        return BattleOutcome::Continue;
    }

    let events = match action {
        BattleAction::Attack => {
            let mut events = player_attack(player, enemy, rng);
            if enemy.is_alive() {
                events.extend(enemy_turn(player, enemy, &mut state.defending, rng));
            }
            events
        }
        BattleAction::Defend => {
            let mut events = defend(&mut state.defending);
            events.extend(enemy_turn(player, enemy, &mut state.defending, rng));
            events
        }
        BattleAction::Potion => use_potion(player, enemy, &mut state.defending, rng),
        BattleAction::Flee => attempt_flee(player, enemy, &mut state.defending, rng),
    };

    let player_name = player.name.clone();
    let enemy_name = enemy.name.clone();
    let player_alive = player.is_alive();
    let enemy_alive = enemy.is_alive();

    for event in &events {
        for line in event.log_lines(&player_name, &enemy_name) {
            state.add_log_entry(line);
        }
    }

    if events.contains(&CombatEvent::FleeSucceeded) {
        return BattleOutcome::Fled;
    }
    if !player_alive {
        state.add_log_entry(format!("{} est tombe au combat !", player_name));
        state.enemy = None;
        state.defending = false;
        return BattleOutcome::GameOver;
    }
    if !enemy_alive {
        handle_victory(state, rng);
        return BattleOutcome::Victory;
    }
    BattleOutcome::Continue
}

/// Grants XP and loot for the defeated enemy and advances the stage.
pub fn handle_victory(state: &mut GameState, rng: &mut impl Rng) {
    let Some(enemy) = state.enemy.as_ref() else {
        return;
    };
    let xp = enemy.xp_reward;
    let enemy_name = enemy.name.clone();

    state.clear_outcome();
    state.defending = false;
    state.last_xp = xp;
    state.stage += 1;
    state.add_log_entry(format!("Tu as vaincu {} ! +{} XP.", enemy_name, xp));

    let loot = generate_loot(rng);
    let Some(player) = state.player.as_mut() else {
        return;
    };
    player.xp = player.xp.saturating_add(xp);
    let loot_message = apply_loot(player, &loot);
    let levels = check_level_up(player);
    let level = player.level;

    state.add_log_entry(loot_message);
    state.last_loot = Some(loot);
    if levels > 0 {
        state.leveled_up = true;
        state.add_log_entry(format!(
            "Niveau up ! Tu es niveau {}. Stats augmentees.",
            level
        ));
    }
}

/// Adds a dropped item to the player and describes it.
pub fn apply_loot(player: &mut Character, loot: &Item) -> String {
    match loot.kind {
        ItemKind::Potion { amount } => {
            player.inventory.add_potions(amount);
            format!(
                "Tu trouves une {}. Tu en as {}.",
                loot.name, player.inventory.potion
            )
        }
        ItemKind::Gold { amount } => {
            player.gold = player.gold.saturating_add(amount);
            format!("Tu trouves {} pieces d'or. Total: {}.", amount, player.gold)
        }
        _ => {
            player.inventory.add_item(loot.clone());
            format!("Tu places {} dans l'inventaire.", loot.name)
        }
    }
}

/// Next encounter after the victory screen.
pub fn continue_after_victory(state: &mut GameState, rng: &mut impl Rng) {
    state.clear_outcome();
    spawn_enemy(state, rng);
}

/// Drops the current encounter, keeping the hero.
pub fn end_encounter(state: &mut GameState) {
    state.enemy = None;
    state.defending = false;
}

// =========================================================================
// Shop and equipment
// =========================================================================

/// Marks every item the hero's level now reaches as discovered.
/// Returns how many were new.
pub fn discover_shop_items(state: &mut GameState) -> usize {
    let Some(level) = state.player.as_ref().map(|p| p.level) else {
        return 0;
    };

    let mut unlocked = 0;
    for item in shop_catalog() {
        if item.level_required() <= level && !state.discovered_shop_items.contains(&item.name) {
            state.add_log_entry(format!(
                "MAGASIN: Nouvel article debloque (Lvl {}): {} !",
                level, item.name
            ));
            state.discovered_shop_items.push(item.name);
            unlocked += 1;
        }
    }
    unlocked
}

pub fn buy_item(state: &mut GameState, index: usize) -> bool {
    let Some(player) = state.player.as_mut() else {
        return false;
    };

    let result = purchase(player, index)
        .map(|item| match item.kind {
            ItemKind::Potion { .. } => format!(
                "Achete {}. Total: {} potions.",
                item.name, player.inventory.potion
            ),
            ItemKind::Gold { .. } => format!("Achete {}. Or: {}.", item.name, player.gold),
            _ => format!("Achete {} et place dans l'inventaire.", item.name),
        })
        .map_err(|e| e.to_string());
    log_result(state, result)
}

pub fn equip_from_inventory(state: &mut GameState, index: usize) -> bool {
    let Some(player) = state.player.as_mut() else {
        return false;
    };
    let result = player.equip_item(index);
    log_result(state, result.map_err(|e| e.to_string()))
}

pub fn unequip_slot(state: &mut GameState, slot: EquipmentSlot) -> bool {
    let Some(player) = state.player.as_mut() else {
        return false;
    };
    let result = player.unequip_item(slot);
    log_result(state, result.map_err(|e| e.to_string()))
}

fn log_result(state: &mut GameState, result: Result<String, String>) -> bool {
    let ok = result.is_ok();
    state.add_log_entry(result.unwrap_or_else(|e| e));
    ok
}

// =========================================================================
// Persistence
// =========================================================================

pub fn save_game(state: &mut GameState, manager: &CharacterManager) -> bool {
    let Some(player) = state.player.as_ref() else {
        return false;
    };

    match manager.save_game(player, state.stage, &state.discovered_shop_items) {
        Ok(safe) => {
            state.add_log_entry(format!("Partie sauvegardee sous le nom : {}.", safe));
            true
        }
        Err(_) => {
            state.add_log_entry("Erreur de sauvegarde.");
            false
        }
    }
}

/// Replaces the session with the saved one and starts an encounter.
/// On failure the session keeps only its log.
pub fn load_game(
    state: &mut GameState,
    manager: &CharacterManager,
    filename: &str,
    rng: &mut impl Rng,
) -> bool {
    match manager.load_game(filename) {
        Ok(loaded) => {
            state.reset();
            let name = loaded.character.name.clone();
            state.player = Some(loaded.character);
            state.stage = loaded.stage;
            state.discovered_shop_items = loaded.discovered_shop_items;
            state.add_log_entry(format!(
                "Partie chargee : {}. Etage: {}.",
                name, state.stage
            ));
            spawn_enemy(state, rng);
            true
        }
        Err(SaveError::NotFound(_)) => {
            state.reset();
            state.add_log_entry("Fichier de sauvegarde non trouve.");
            false
        }
        Err(_) => {
            state.reset();
            state.add_log_entry("Erreur de chargement. Le fichier est peut-etre corrompu.");
            false
        }
    }
}

pub fn delete_save(state: &mut GameState, manager: &CharacterManager, filename: &str) -> bool {
    match manager.delete_save(filename) {
        Ok(()) => {
            state.add_log_entry(format!("Sauvegarde {} supprimee.", filename));
            true
        }
        Err(e) => {
            state.add_log_entry(format!("Erreur de suppression: {}", e));
            false
        }
    }
}
