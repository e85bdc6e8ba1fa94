use rand::Rng;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{buttons::ButtonMap, draw_button_row, draw_log};
use crate::character::types::Character;
use crate::core::app::App;
use crate::input::Input;
use crate::items::types::{EquipmentSlot, Item};

/// Equipped slots first, then the bag. Enter equips or unequips the row.
pub fn draw<R: Rng>(frame: &mut Frame, area: Rect, app: &App<R>, buttons: &mut ButtonMap) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Lists + details
            Constraint::Length(8), // Log
            Constraint::Length(3), // Controls
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[0]);

    let Some(player) = app.state.player.as_ref() else {
        return;
    };

    let cursor = app.inventory_cursor;
    let lines = row_lines(player, cursor);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Inventaire - Potions: {} ", player.inventory.potion)),
        ),
        columns[0],
    );

    frame.render_widget(
        Paragraph::new(detail_lines(player, cursor))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" Details ")),
        columns[1],
    );

    draw_log(frame, chunks[1], &app.state);

    let action = if cursor < EquipmentSlot::ALL.len() {
        "[Entree] Retirer"
    } else {
        "[Entree] Equiper"
    };
    draw_button_row(
        frame,
        buttons,
        chunks[2],
        &[
            ("Haut", Input::Up, true),
            ("Bas", Input::Down, true),
            (action, Input::Enter, selected_item(player, cursor).is_some()),
            ("[Esc] Retour", Input::Escape, true),
        ],
    );
}

/// Item under the cursor, equipped or carried.
fn selected_item(player: &Character, cursor: usize) -> Option<&Item> {
    let slots = EquipmentSlot::ALL.len();
    if cursor < slots {
        player.equipment.get(EquipmentSlot::ALL[cursor])
    } else {
        player.inventory.get(cursor - slots)
    }
}

fn row_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn row_lines(player: &Character, cursor: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "Equipement",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
    ))];

    for (i, slot) in EquipmentSlot::ALL.iter().enumerate() {
        let marker = if i == cursor { "> " } else { "  " };
        let content = match player.equipment.get(*slot) {
            Some(item) => Span::raw(format!("{} ({})", item.name, item.stat_summary())),
            None => Span::styled("(vide)", Style::default().fg(Color::DarkGray)),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{:<10}", marker, slot.label()), row_style(i == cursor)),
            content,
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Sac",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
    )));

    if player.inventory.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Aucun objet",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let slots = EquipmentSlot::ALL.len();
    for (i, item) in player.inventory.items.iter().enumerate() {
        let selected = slots + i == cursor;
        let marker = if selected { "> " } else { "  " };
        let name_style = if item.is_equippable() {
            row_style(selected)
        } else {
            row_style(selected).fg(Color::DarkGray)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}{}", marker, item.name), name_style),
            Span::styled(
                format!("  [{}]", item.kind.type_name()),
                Style::default().fg(Color::Gray),
            ),
        ]));
    }

    lines
}

fn detail_lines(player: &Character, cursor: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(format!("ATK {}  DEF {}", player.attack(), player.defense())),
        Line::from(""),
    ];

    match selected_item(player, cursor) {
        Some(item) => {
            lines.push(Line::from(Span::styled(
                item.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(item.stat_summary()));
            if !item.desc.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(item.desc.clone()));
            }
        }
        None => lines.push(Line::from(Span::styled(
            "Rien a afficher.",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    lines
}
