//! UI-agnostic name entry for the character creation screens.

use crate::core::constants::{DEFAULT_HERO_NAME, MAX_NAME_LENGTH};

/// Text buffer behind the name input screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameInput {
    buffer: String,
}

impl NameInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `c` unless the name is full or `c` is a control character.
    pub fn handle_char_input(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        if self.buffer.chars().count() < MAX_NAME_LENGTH {
            self.buffer.push(c);
        }
    }

    pub fn handle_backspace(&mut self) {
        self.buffer.pop();
    }

    /// What the player has typed so far.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// The final hero name: trimmed, or the default when left blank.
    pub fn get_name(&self) -> String {
        let trimmed = self.buffer.trim();
        if trimmed.is_empty() {
            DEFAULT_HERO_NAME.to_string()
        } else {
            trimmed.to_string()
        }
    }
}
