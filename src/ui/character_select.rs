use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::{buttons::ButtonMap, centered_rect, draw_button_row, sprites::SpriteLoader};
use crate::character::class::CharacterClass;
use crate::core::app::App;
use crate::input::Input;

/// Class choice: one card per class, the selected one highlighted.
pub fn draw<R: Rng>(
    frame: &mut Frame,
    area: Rect,
    app: &App<R>,
    sprites: &mut SpriteLoader,
    buttons: &mut ButtonMap,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(12),   // Cards
            Constraint::Length(3), // Controls
        ])
        .split(area);

    let title = Paragraph::new(format!(
        "Choisis la classe de {}",
        app.name_input.get_name()
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[1]);

    for (class, card) in CharacterClass::ALL.iter().zip(cards.iter()) {
        draw_class_card(frame, *card, *class, *class == app.selected_class, sprites);
    }

    let row = centered_rect(72, 3, chunks[2]);
    draw_button_row(
        frame,
        buttons,
        row,
        &[
            ("< Precedent", Input::Left, true),
            ("[Entree] Commencer", Input::Enter, true),
            ("Suivant >", Input::Right, true),
            ("[Esc] Retour", Input::Escape, true),
        ],
    );
}

fn draw_class_card(
    frame: &mut Frame,
    area: Rect,
    class: CharacterClass,
    selected: bool,
    sprites: &mut SpriteLoader,
) {
    let (border_style, border_type) = if selected {
        (
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            BorderType::Double,
        )
    } else {
        (Style::default().fg(Color::DarkGray), BorderType::Plain)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .title(format!(" {} ", class.name()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sprite = sprites.get(class.avatar_file());
    let sprite_height = sprite.height() as u16;
    let sprite_color = if sprite.missing {
        Color::Magenta
    } else {
        Color::White
    };
    let sprite_lines: Vec<Line> = sprite.lines.iter().map(|l| Line::from(l.as_str())).collect();

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(sprite_height), Constraint::Min(0)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(sprite_lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(sprite_color)),
        parts[0],
    );

    let stats = class.base_stats();
    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("PV ", Style::default().fg(Color::Red)),
            Span::raw(format!("{}  ", stats.max_hp)),
            Span::styled("ATK ", Style::default().fg(Color::Yellow)),
            Span::raw(format!("{}  ", stats.attack)),
            Span::styled("DEF ", Style::default().fg(Color::Blue)),
            Span::raw(stats.defense.to_string()),
        ]),
        Line::from(""),
        Line::from(class.description()),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        parts[1],
    );
}
