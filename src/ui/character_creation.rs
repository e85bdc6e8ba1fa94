use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{buttons::ButtonMap, centered_rect, draw_button_row};
use crate::core::app::App;
use crate::core::constants::{DEFAULT_HERO_NAME, MAX_NAME_LENGTH};
use crate::input::Input;

/// Name entry, first step of a new game.
pub fn draw<R: Rng>(frame: &mut Frame, area: Rect, app: &App<R>, buttons: &mut ButtonMap) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Input field
            Constraint::Length(3), // Rules
            Constraint::Min(0),    // Filler
            Constraint::Length(3), // Controls
        ])
        .split(area);

    let title = Paragraph::new("Creation du heros")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let field = centered_rect(MAX_NAME_LENGTH as u16 + 12, 3, chunks[2]);
    let input_widget = Paragraph::new(format!("{}_", app.name_input.text()))
        .block(Block::default().borders(Borders::ALL).title(" Nom "))
        .style(Style::default().fg(Color::White));
    frame.render_widget(input_widget, field);

    let rules = vec![
        Line::from(format!("• {} caracteres maximum", MAX_NAME_LENGTH)),
        Line::from(format!("• Laisse vide pour '{}'", DEFAULT_HERO_NAME)),
    ];
    frame.render_widget(
        Paragraph::new(rules)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        chunks[3],
    );

    let row = centered_rect(48, 3, chunks[5]);
    draw_button_row(
        frame,
        buttons,
        row,
        &[
            ("[Entree] Valider", Input::Enter, true),
            ("[Esc] Retour", Input::Escape, true),
        ],
    );
}
