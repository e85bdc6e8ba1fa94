//! UI-agnostic input events.
//!
//! The terminal front end turns key presses and mouse clicks into [`Input`]
//! values; `App::handle_input` is the only consumer.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Printable character (letters are matched case-insensitively by screens)
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Backspace,
    Delete,
}

/// Maps a crossterm key event. Releases, repeats and Ctrl-chords are dropped.
pub fn map_key(key: KeyEvent) -> Option<Input> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Char(c) => Some(Input::Char(c)),
        KeyCode::Up => Some(Input::Up),
        KeyCode::Down => Some(Input::Down),
        KeyCode::Left => Some(Input::Left),
        KeyCode::Right => Some(Input::Right),
        KeyCode::Enter => Some(Input::Enter),
        KeyCode::Esc => Some(Input::Escape),
        KeyCode::Backspace => Some(Input::Backspace),
        KeyCode::Delete => Some(Input::Delete),
        _ => None,
    }
}

/// True when `input` is the letter `letter`, ignoring case.
pub fn is_key(input: Input, letter: char) -> bool {
    matches!(input, Input::Char(c) if c.eq_ignore_ascii_case(&letter))
}
