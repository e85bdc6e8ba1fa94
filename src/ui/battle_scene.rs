use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::{buttons::ButtonMap, draw_button_row, draw_log, sprites::SpriteLoader};
use crate::character::progression::xp_for_next_level;
use crate::character::types::Character;
use crate::combat::types::Enemy;
use crate::core::game_state::GameState;
use crate::input::Input;

/// Draws the battle screen: both combatants, the log and the action bar.
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    sprites: &mut SpriteLoader,
    buttons: &mut ButtonMap,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Stage banner
            Constraint::Min(12),    // Combatants
            Constraint::Length(10), // Log
            Constraint::Length(3),  // Actions
        ])
        .split(area);

    draw_banner(frame, chunks[0], state);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    if let Some(player) = &state.player {
        draw_player_panel(frame, halves[0], player, state.defending, sprites);
    }
    match &state.enemy {
        Some(enemy) => draw_enemy_panel(frame, halves[1], enemy, sprites),
        None => {
            let empty = Paragraph::new("Aucun ennemi")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(empty, halves[1]);
        }
    }

    draw_log(frame, chunks[2], state);

    let potions = state.player.as_ref().map_or(0, |p| p.inventory.potion);
    draw_button_row(
        frame,
        buttons,
        chunks[3],
        &[
            ("[1] Attaque", Input::Char('1'), true),
            ("[2] Defense", Input::Char('2'), true),
            ("[3] Potion", Input::Char('3'), potions > 0),
            ("[F] Fuir", Input::Char('f'), true),
            ("[S] Sauver", Input::Char('s'), true),
            ("[I] Sac", Input::Char('i'), true),
            ("[M] Magasin", Input::Char('m'), true),
            ("[Esc] Pause", Input::Escape, true),
        ],
    );
}

fn draw_banner(frame: &mut Frame, area: Rect, state: &GameState) {
    let is_boss = state.enemy.as_ref().is_some_and(|e| e.is_boss);
    let mut spans = vec![Span::styled(
        format!(" Etage {} ", state.stage),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];
    if is_boss {
        spans.push(Span::styled(
            " BOSS ",
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn hp_gauge<'a>(title: &'a str, hp: u32, max_hp: u32, color: Color) -> Gauge<'a> {
    let ratio = if max_hp == 0 {
        0.0
    } else {
        (hp as f64 / max_hp as f64).clamp(0.0, 1.0)
    };
    Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .gauge_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .label(format!("{}/{}", hp, max_hp))
        .ratio(ratio)
}

fn hp_color(hp: u32, max_hp: u32) -> Color {
    let pct = if max_hp == 0 { 0 } else { hp * 100 / max_hp };
    match pct {
        0..=25 => Color::Red,
        26..=50 => Color::Yellow,
        _ => Color::Green,
    }
}

fn sprite_paragraph(
    sprites: &mut SpriteLoader,
    file: &str,
    color: Color,
) -> (Paragraph<'static>, u16) {
    let sprite = sprites.get(file);
    let color = if sprite.missing { Color::Magenta } else { color };
    let lines: Vec<Line<'static>> = sprite.lines.iter().map(|l| Line::from(l.clone())).collect();
    let height = sprite.height() as u16;
    (
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color)),
        height,
    )
}

fn draw_player_panel(
    frame: &mut Frame,
    area: Rect,
    player: &Character,
    defending: bool,
    sprites: &mut SpriteLoader,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} - {} niv. {} ", player.name, player.class, player.level));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (sprite, sprite_height) = sprite_paragraph(sprites, player.avatar_file(), Color::White);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(sprite_height.min(8)), // Sprite
            Constraint::Length(3),                 // HP
            Constraint::Length(3),                 // Stats
        ])
        .split(inner);

    frame.render_widget(sprite, rows[0]);
    frame.render_widget(
        hp_gauge("PV", player.hp, player.max_hp, hp_color(player.hp, player.max_hp)),
        rows[1],
    );

    let mut stats = vec![
        Span::styled(
            format!("ATK {}  ", player.attack()),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!("DEF {}  ", player.defense()),
            Style::default().fg(Color::Blue),
        ),
        Span::raw(format!("CRIT {:.0}%", player.crit_chance * 100.0)),
    ];
    if defending {
        stats.push(Span::styled(
            "  [DEFENSE]",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
    }
    let details = vec![
        Line::from(stats),
        Line::from(format!(
            "XP {}/{}  Or {}  Potions {}",
            player.xp,
            xp_for_next_level(player.level),
            player.gold,
            player.inventory.potion
        )),
    ];
    frame.render_widget(Paragraph::new(details), rows[2]);
}

fn draw_enemy_panel(frame: &mut Frame, area: Rect, enemy: &Enemy, sprites: &mut SpriteLoader) {
    let title_style = if enemy.is_boss {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" {} ", enemy.name), title_style));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let color = if enemy.is_boss { Color::Red } else { Color::LightGreen };
    let (sprite, sprite_height) = sprite_paragraph(sprites, enemy.avatar_file(), color);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(sprite_height.min(8)),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(inner);

    frame.render_widget(sprite, rows[0]);
    frame.render_widget(hp_gauge("PV", enemy.hp, enemy.max_hp, Color::Red), rows[1]);

    let mut lines = vec![Line::from(format!(
        "ATK {}  DEF {}  XP {}",
        enemy.attack, enemy.defense, enemy.xp_reward
    ))];
    if enemy.charging {
        lines.push(Line::from(Span::styled(
            "Prepare une charge !",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }
    frame.render_widget(Paragraph::new(lines), rows[2]);
}
