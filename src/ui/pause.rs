use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::{buttons::ButtonMap, centered_rect, draw_button};
use crate::input::Input;

/// Pause overlay drawn on top of the battle screen.
pub fn draw(frame: &mut Frame, area: Rect, buttons: &mut ButtonMap) {
    let popup = centered_rect(36, 15, area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Pause ");
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new("Jeu en pause")
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD)),
        rows[0],
    );

    draw_button(frame, buttons, rows[1], "[R] Reprendre", Input::Char('r'), true);
    draw_button(frame, buttons, rows[2], "[S] Sauvegarder", Input::Char('s'), true);
    draw_button(frame, buttons, rows[3], "[M] Menu principal", Input::Char('m'), true);
}
