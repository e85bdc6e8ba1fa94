//! Ascension - turn-based terminal RPG library.
//!
//! Rules, persistence and the screen state machine live here so they can be
//! driven headless from tests; the binary only owns the terminal.

pub mod character;
pub mod combat;
pub mod core;
pub mod input;
pub mod items;
pub mod ui;
