//! Core session state, rules glue and the screen state machine.

pub mod app;
pub mod constants;
pub mod game_logic;
pub mod game_state;

pub use app::{App, Screen};
pub use constants::*;
pub use game_logic::*;
pub use game_state::*;
