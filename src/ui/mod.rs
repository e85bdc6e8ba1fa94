pub mod battle_scene;
pub mod buttons;
pub mod character_creation;
pub mod character_select;
pub mod inventory_scene;
pub mod load_select;
pub mod menu;
pub mod outcome;
pub mod pause;
pub mod shop_scene;
pub mod sprites;

use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::app::{App, Screen};
use crate::core::game_state::GameState;
use crate::input::Input;
use buttons::ButtonMap;
use sprites::SpriteLoader;

/// Draws the active screen and returns the clickable regions it registered.
pub fn draw<R: Rng>(frame: &mut Frame, app: &App<R>, sprites: &mut SpriteLoader) -> ButtonMap {
    let mut buttons = ButtonMap::new();
    let area = frame.size();

    match app.screen {
        Screen::Menu => menu::draw(frame, area, app, &mut buttons),
        Screen::NameInput => character_creation::draw(frame, area, app, &mut buttons),
        Screen::CharacterSelect => character_select::draw(frame, area, app, sprites, &mut buttons),
        Screen::LoadSelect => load_select::draw(frame, area, app, &mut buttons),
        Screen::Battle => battle_scene::draw(frame, area, &app.state, sprites, &mut buttons),
        Screen::Inventory => inventory_scene::draw(frame, area, app, &mut buttons),
        Screen::Shop => shop_scene::draw(frame, area, app, &mut buttons),
        Screen::Pause => {
            battle_scene::draw(frame, area, &app.state, sprites, &mut ButtonMap::new());
            pause::draw(frame, area, &mut buttons);
        }
        Screen::Victory => outcome::draw_victory(frame, area, &app.state, &mut buttons),
        Screen::GameOver => outcome::draw_game_over(frame, area, &app.state, sprites, &mut buttons),
        Screen::FleeSuccess => outcome::draw_flee_success(frame, area, &app.state, &mut buttons),
    }

    buttons
}

/// Bordered, centred label that also registers itself as a click target.
pub fn draw_button(
    frame: &mut Frame,
    buttons: &mut ButtonMap,
    area: Rect,
    label: &str,
    input: Input,
    enabled: bool,
) {
    let color = if enabled { Color::Yellow } else { Color::DarkGray };
    let widget = Paragraph::new(label.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);

    if enabled {
        buttons.register(area, input);
    }
}

/// A row of equally wide buttons.
pub fn draw_button_row(
    frame: &mut Frame,
    buttons: &mut ButtonMap,
    area: Rect,
    entries: &[(&str, Input, bool)],
) {
    if entries.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = entries
        .iter()
        .map(|_| Constraint::Ratio(1, entries.len() as u32))
        .collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for ((label, input, enabled), cell) in entries.iter().zip(cells.iter()) {
        draw_button(frame, buttons, *cell, label, *input, *enabled);
    }
}

/// The bounded game log, oldest line first.
pub fn draw_log(frame: &mut Frame, area: Rect, state: &GameState) {
    let lines: Vec<Line> = state.log.iter().map(|l| Line::from(l.as_str())).collect();
    let log = Paragraph::new(lines)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL).title(" Journal "));
    frame.render_widget(log, area);
}

/// A rectangle of at most `width` x `height` centred in `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
