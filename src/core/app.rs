//! Top-level screen state machine.
//!
//! Every screen is a state of [`App`]; [`App::handle_input`] is the single
//! place input is dispatched and the session mutated. Nothing here touches
//! the terminal, so the whole flow runs headless in tests.

use rand::Rng;

use super::game_logic::{self, BattleAction, BattleOutcome};
use super::game_state::GameState;
use crate::character::class::CharacterClass;
use crate::character::input::NameInput;
use crate::character::manager::{CharacterManager, SaveSummary};
use crate::input::{is_key, Input};
use crate::items::shop::shop_catalog;
use crate::items::types::EquipmentSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    NameInput,
    CharacterSelect,
    LoadSelect,
    Battle,
    Inventory,
    Shop,
    Pause,
    Victory,
    GameOver,
    FleeSuccess,
}

pub struct App<R: Rng> {
    pub state: GameState,
    pub screen: Screen,
    pub manager: CharacterManager,
    pub should_quit: bool,
    rng: R,
    // Per-screen UI state, reset when the screen is entered
    pub name_input: NameInput,
    pub selected_class: CharacterClass,
    pub saves: Vec<SaveSummary>,
    pub load_cursor: usize,
    pub inventory_cursor: usize,
    pub shop_cursor: usize,
}

impl<R: Rng> App<R> {
    pub fn new(manager: CharacterManager, rng: R) -> Self {
        let mut state = GameState::new();
        state.add_log_entry("Bienvenue ! N: nouvelle | C: charger | Q: quitter");

        let mut app = Self {
            state,
            screen: Screen::Menu,
            manager,
            should_quit: false,
            rng,
            name_input: NameInput::new(),
            selected_class: CharacterClass::Warrior,
            saves: Vec::new(),
            load_cursor: 0,
            inventory_cursor: 0,
            shop_cursor: 0,
        };
        app.refresh_saves();
        app
    }

    pub fn handle_input(&mut self, input: Input) {
        match self.screen {
            Screen::Menu => self.handle_menu(input),
            Screen::NameInput => self.handle_name_input(input),
            Screen::CharacterSelect => self.handle_class_select(input),
            Screen::LoadSelect => self.handle_load_select(input),
            Screen::Battle => self.handle_battle(input),
            Screen::Inventory => self.handle_inventory(input),
            Screen::Shop => self.handle_shop(input),
            Screen::Pause => self.handle_pause(input),
            Screen::Victory => self.handle_victory(input),
            Screen::GameOver => self.handle_game_over(input),
            Screen::FleeSuccess => self.handle_flee_success(input),
        }
    }

    /// Inventory rows: the five equipment slots, then carried items.
    pub fn inventory_len(&self) -> usize {
        EquipmentSlot::ALL.len() + self.state.player.as_ref().map_or(0, |p| p.inventory.len())
    }

    fn go_to_menu(&mut self) {
        self.state.reset();
        self.refresh_saves();
        self.screen = Screen::Menu;
    }

    fn refresh_saves(&mut self) {
        self.saves = self.manager.list_saves().unwrap_or_default();
        if self.load_cursor >= self.saves.len() {
            self.load_cursor = self.saves.len().saturating_sub(1);
        }
    }

    fn handle_menu(&mut self, input: Input) {
        if is_key(input, 'n') {
            self.name_input = NameInput::new();
            self.screen = Screen::NameInput;
        } else if is_key(input, 'c') {
            self.refresh_saves();
            if self.saves.is_empty() {
                self.state.add_log_entry("Aucune sauvegarde disponible.");
            } else {
                self.load_cursor = 0;
                self.screen = Screen::LoadSelect;
            }
        } else if is_key(input, 'q') || input == Input::Escape {
            self.should_quit = true;
        }
    }

    fn handle_name_input(&mut self, input: Input) {
        match input {
            Input::Char(c) => self.name_input.handle_char_input(c),
            Input::Backspace => self.name_input.handle_backspace(),
            Input::Enter => {
                self.selected_class = CharacterClass::Warrior;
                self.screen = Screen::CharacterSelect;
            }
            Input::Escape => self.screen = Screen::Menu,
            _ => {}
        }
    }

    fn handle_class_select(&mut self, input: Input) {
        match input {
            Input::Left => self.selected_class = self.selected_class.prev(),
            Input::Right => self.selected_class = self.selected_class.next(),
            Input::Enter => {
                let name = self.name_input.get_name();
                game_logic::start_new_game(
                    &mut self.state,
                    &name,
                    self.selected_class,
                    &mut self.rng,
                );
                self.screen = Screen::Battle;
            }
            Input::Escape => self.screen = Screen::Menu,
            _ => {}
        }
    }

    fn handle_load_select(&mut self, input: Input) {
        match input {
            Input::Up => self.load_cursor = self.load_cursor.saturating_sub(1),
            Input::Down => {
                if self.load_cursor + 1 < self.saves.len() {
                    self.load_cursor += 1;
                }
            }
            Input::Enter => {
                let Some(save) = self.saves.get(self.load_cursor) else {
                    return;
                };
                if save.is_corrupted {
                    self.state
                        .add_log_entry("Sauvegarde corrompue, impossible de la charger.");
                    return;
                }
                let filename = save.filename.clone();
                if game_logic::load_game(&mut self.state, &self.manager, &filename, &mut self.rng) {
                    self.screen = Screen::Battle;
                } else {
                    self.screen = Screen::Menu;
                }
            }
            Input::Delete => self.delete_selected_save(),
            Input::Char(_) if is_key(input, 'x') => self.delete_selected_save(),
            Input::Escape => self.screen = Screen::Menu,
            _ => {}
        }
    }

    fn delete_selected_save(&mut self) {
        let Some(save) = self.saves.get(self.load_cursor) else {
            return;
        };
        let filename = save.filename.clone();
        game_logic::delete_save(&mut self.state, &self.manager, &filename);

        self.refresh_saves();
        if self.saves.is_empty() {
            self.screen = Screen::Menu;
        }
    }

    fn handle_battle(&mut self, input: Input) {
        let action = match input {
            Input::Char('1') => Some(BattleAction::Attack),
            Input::Char('2') => Some(BattleAction::Defend),
            Input::Char('3') => Some(BattleAction::Potion),
            _ if is_key(input, 'f') => Some(BattleAction::Flee),
            _ => None,
        };

        if let Some(action) = action {
            let outcome = game_logic::resolve_player_action(&mut self.state, action, &mut self.rng);
            self.screen = match outcome {
                BattleOutcome::Continue => Screen::Battle,
                BattleOutcome::Victory => Screen::Victory,
                BattleOutcome::GameOver => Screen::GameOver,
                BattleOutcome::Fled => Screen::FleeSuccess,
            };
            return;
        }

        if is_key(input, 's') {
            game_logic::save_game(&mut self.state, &self.manager);
            self.refresh_saves();
        } else if is_key(input, 'i') {
            self.inventory_cursor = 0;
            self.screen = Screen::Inventory;
        } else if is_key(input, 'm') {
            self.shop_cursor = 0;
            game_logic::discover_shop_items(&mut self.state);
            self.screen = Screen::Shop;
        } else if input == Input::Escape {
            self.screen = Screen::Pause;
        }
    }

    fn handle_inventory(&mut self, input: Input) {
        match input {
            Input::Up => self.inventory_cursor = self.inventory_cursor.saturating_sub(1),
            Input::Down => {
                if self.inventory_cursor + 1 < self.inventory_len() {
                    self.inventory_cursor += 1;
                }
            }
            Input::Enter => {
                let slots = EquipmentSlot::ALL.len();
                if self.inventory_cursor < slots {
                    let slot = EquipmentSlot::ALL[self.inventory_cursor];
                    game_logic::unequip_slot(&mut self.state, slot);
                } else {
                    game_logic::equip_from_inventory(&mut self.state, self.inventory_cursor - slots);
                }
                self.inventory_cursor = self.inventory_cursor.min(self.inventory_len() - 1);
            }
            Input::Escape => self.screen = Screen::Battle,
            _ if is_key(input, 'i') => self.screen = Screen::Battle,
            _ => {}
        }
    }

    fn handle_shop(&mut self, input: Input) {
        match input {
            Input::Up => self.shop_cursor = self.shop_cursor.saturating_sub(1),
            Input::Down => {
                if self.shop_cursor + 1 < shop_catalog().len() {
                    self.shop_cursor += 1;
                }
            }
            Input::Enter => {
                game_logic::buy_item(&mut self.state, self.shop_cursor);
            }
            Input::Escape => self.screen = Screen::Battle,
            _ if is_key(input, 'e') => {
                game_logic::buy_item(&mut self.state, self.shop_cursor);
            }
            _ if is_key(input, 'm') => self.screen = Screen::Battle,
            _ => {}
        }
    }

    fn handle_pause(&mut self, input: Input) {
        if input == Input::Escape || is_key(input, 'r') {
            self.screen = Screen::Battle;
        } else if is_key(input, 's') {
            game_logic::save_game(&mut self.state, &self.manager);
            self.refresh_saves();
            self.screen = Screen::Battle;
        } else if is_key(input, 'm') {
            self.go_to_menu();
        }
    }

    fn handle_victory(&mut self, input: Input) {
        if input == Input::Enter || is_key(input, 'a') {
            game_logic::continue_after_victory(&mut self.state, &mut self.rng);
            self.screen = Screen::Battle;
        } else if input == Input::Escape {
            self.go_to_menu();
        }
    }

    fn handle_game_over(&mut self, input: Input) {
        if input == Input::Enter || is_key(input, 'n') {
            self.go_to_menu();
        } else if input == Input::Escape {
            self.should_quit = true;
        }
    }

    fn handle_flee_success(&mut self, input: Input) {
        if input == Input::Escape {
            // The enemy is still there; the fight picks up where it stopped
            self.screen = Screen::Battle;
        } else if input == Input::Enter || is_key(input, 'a') {
            game_logic::end_encounter(&mut self.state);
            self.go_to_menu();
        }
    }
}
