use rand::Rng;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{buttons::ButtonMap, draw_button_row, draw_log};
use crate::core::app::App;
use crate::input::Input;
use crate::items::shop::{can_purchase, shop_catalog};
use crate::items::types::Item;

pub fn draw<R: Rng>(frame: &mut Frame, area: Rect, app: &App<R>, buttons: &mut ButtonMap) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Catalog
            Constraint::Length(8), // Log
            Constraint::Length(3), // Controls
        ])
        .split(area);

    let Some(player) = app.state.player.as_ref() else {
        return;
    };

    let catalog = shop_catalog();
    let lines: Vec<Line> = catalog
        .iter()
        .enumerate()
        .map(|(i, item)| {
            catalog_line(
                item,
                i == app.shop_cursor,
                can_purchase(item, player.level, player.gold),
                player.level,
            )
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Magasin - Or: {} ", player.gold)),
        ),
        chunks[0],
    );

    draw_log(frame, chunks[1], &app.state);

    let affordable = catalog
        .get(app.shop_cursor)
        .is_some_and(|item| can_purchase(item, player.level, player.gold));
    draw_button_row(
        frame,
        buttons,
        chunks[2],
        &[
            ("Haut", Input::Up, true),
            ("Bas", Input::Down, true),
            ("[E] Acheter", Input::Char('e'), affordable),
            ("[Esc] Retour", Input::Escape, true),
        ],
    );
}

fn catalog_line(item: &Item, selected: bool, affordable: bool, level: u32) -> Line<'static> {
    let marker = if selected { "> " } else { "  " };
    let mut name_style = if affordable {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    if selected {
        name_style = name_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }

    let mut spans = vec![
        Span::styled(format!("{}{:<22}", marker, item.name), name_style),
        Span::styled(
            format!("{:<10}", item.stat_summary()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{:>5} or  ", item.cost),
            Style::default().fg(Color::Yellow),
        ),
    ];

    if item.level_required() > level {
        spans.push(Span::styled(
            format!("(Lvl {} requis)", item.level_required()),
            Style::default().fg(Color::Red),
        ));
    } else {
        spans.push(Span::styled(item.desc.clone(), Style::default().fg(Color::Gray)));
    }

    Line::from(spans)
}
