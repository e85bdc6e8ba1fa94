use chrono::{Local, TimeZone};
use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{buttons::ButtonMap, centered_rect, draw_button_row, draw_log};
use crate::character::manager::SaveSummary;
use crate::core::app::App;
use crate::input::Input;

pub fn draw<R: Rng>(frame: &mut Frame, area: Rect, app: &App<R>, buttons: &mut ButtonMap) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(5),    // Save list
            Constraint::Length(3), // Controls
            Constraint::Length(6), // Log
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new("Charger une partie")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        chunks[0],
    );

    let lines: Vec<Line> = app
        .saves
        .iter()
        .enumerate()
        .map(|(i, save)| save_line(save, i == app.load_cursor))
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Sauvegardes ")),
        chunks[1],
    );

    let can_load = app
        .saves
        .get(app.load_cursor)
        .is_some_and(|save| !save.is_corrupted);
    let row = centered_rect(90, 3, chunks[2]);
    draw_button_row(
        frame,
        buttons,
        row,
        &[
            ("Haut", Input::Up, true),
            ("Bas", Input::Down, true),
            ("[Entree] Charger", Input::Enter, can_load),
            ("[X] Supprimer", Input::Delete, !app.saves.is_empty()),
            ("[Esc] Retour", Input::Escape, true),
        ],
    );

    draw_log(frame, chunks[3], &app.state);
}

fn save_line(save: &SaveSummary, selected: bool) -> Line<'static> {
    let marker = if selected { "> " } else { "  " };
    let base = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    if save.is_corrupted {
        return Line::from(vec![
            Span::styled(marker, base),
            Span::styled(
                format!("{} ({})", save.name, save.filename),
                Style::default().fg(Color::Red),
            ),
        ]);
    }

    let saved_at = Local
        .timestamp_opt(save.last_save_time, 0)
        .single()
        .map(|t| t.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_default();

    Line::from(vec![
        Span::styled(marker, base),
        Span::styled(format!("{:<16}", save.name), base),
        Span::styled(
            format!("{:<10}", save.class_name),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(format!("Niv. {:<4} Etage {:<5}", save.level, save.stage)),
        Span::styled(saved_at, Style::default().fg(Color::DarkGray)),
    ])
}
