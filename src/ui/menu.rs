use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::{buttons::ButtonMap, centered_rect, draw_button_row, draw_log};
use crate::core::app::App;
use crate::input::Input;

const TITLE: [&str; 3] = [
    "╔═╗╔═╗╔═╗╔═╗╔╗╔╔═╗╦╔═╗╔╗╔",
    "╠═╣╚═╗║  ║╣ ║║║╚═╗║║ ║║║║",
    "╩ ╩╚═╝╚═╝╚═╝╝╚╝╚═╝╩╚═╝╝╚╝",
];

pub fn draw<R: Rng>(frame: &mut Frame, area: Rect, app: &App<R>, buttons: &mut ButtonMap) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(5), // Title
            Constraint::Length(2), // Subtitle
            Constraint::Length(3), // Buttons
            Constraint::Min(0),    // Filler
            Constraint::Length(10), // Log
        ])
        .split(area);

    let title: Vec<Line> = TITLE.iter().map(|l| Line::from(*l)).collect();
    frame.render_widget(
        Paragraph::new(title)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new("Un RPG au tour par tour. Jusqu'ou monteras-tu ?")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        chunks[1],
    );

    let row = centered_rect(66, 3, chunks[2]);
    draw_button_row(
        frame,
        buttons,
        row,
        &[
            ("[N] Nouvelle partie", Input::Char('n'), true),
            ("[C] Charger", Input::Char('c'), !app.saves.is_empty()),
            ("[Q] Quitter", Input::Char('q'), true),
        ],
    );

    draw_log(frame, chunks[4], &app.state);
}
