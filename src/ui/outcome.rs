//! End-of-encounter screens: victory, defeat and a successful escape.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{buttons::ButtonMap, centered_rect, draw_button_row, draw_log, sprites::SpriteLoader};
use crate::core::game_state::GameState;
use crate::input::Input;

fn layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(8),    // Summary
            Constraint::Length(3), // Controls
            Constraint::Length(8), // Log
        ])
        .split(area)
}

fn summary_block(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
}

pub fn draw_victory(frame: &mut Frame, area: Rect, state: &GameState, buttons: &mut ButtonMap) {
    let chunks = layout(area);

    let defeated = state
        .enemy
        .as_ref()
        .map_or_else(|| "l'ennemi".to_string(), |e| e.name.clone());

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} est vaincu !", defeated),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("+{} XP", state.last_xp),
            Style::default().fg(Color::Green),
        )),
    ];

    match &state.last_loot {
        Some(item) => lines.push(Line::from(vec![
            Span::raw("Butin : "),
            Span::styled(
                format!("{} ({})", item.name, item.stat_summary()),
                Style::default().fg(Color::Yellow),
            ),
        ])),
        None => lines.push(Line::from(Span::styled(
            "Aucun butin.",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    if state.leveled_up {
        let level = state.player.as_ref().map_or(1, |p| p.level);
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("NIVEAU {} ATTEINT !", level),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(format!("Prochain etage : {}", state.stage)));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(summary_block(" Victoire ", Color::Green)),
        chunks[0],
    );

    draw_button_row(
        frame,
        buttons,
        centered_rect(48, 3, chunks[1]),
        &[
            ("[A] Continuer", Input::Char('a'), true),
            ("[Esc] Menu", Input::Escape, true),
        ],
    );

    draw_log(frame, chunks[2], state);
}

pub fn draw_game_over(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    sprites: &mut SpriteLoader,
    buttons: &mut ButtonMap,
) {
    let chunks = layout(area);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(player) = &state.player {
        let sprite = sprites.get(player.avatar_file());
        lines.extend(sprite.lines.iter().map(|l| {
            Line::from(Span::styled(l.clone(), Style::default().fg(Color::DarkGray)))
        }));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{} est tombe au combat.", player.name),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!(
            "Niveau {}  -  Etage atteint : {}",
            player.level, state.stage
        )));
    } else {
        lines.push(Line::from(format!("Etage atteint : {}", state.stage)));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(summary_block(" Game Over ", Color::Red)),
        chunks[0],
    );

    draw_button_row(
        frame,
        buttons,
        centered_rect(48, 3, chunks[1]),
        &[
            ("[N] Menu", Input::Char('n'), true),
            ("[Esc] Quitter", Input::Escape, true),
        ],
    );

    draw_log(frame, chunks[2], state);
}

pub fn draw_flee_success(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    buttons: &mut ButtonMap,
) {
    let chunks = layout(area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} s'est echappe !", state.player_name()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Le combat est abandonne. Retour au menu principal ?"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(summary_block(" Fuite ", Color::Yellow)),
        chunks[0],
    );

    draw_button_row(
        frame,
        buttons,
        centered_rect(48, 3, chunks[1]),
        &[
            ("[A] Menu", Input::Char('a'), true),
            ("[Esc] Combat", Input::Escape, true),
        ],
    );

    draw_log(frame, chunks[2], state);
}
