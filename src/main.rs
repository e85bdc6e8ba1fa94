use std::io;
use std::time::Duration;

use ascension::character::manager::CharacterManager;
use ascension::core::app::App;
use ascension::core::constants::TICK_INTERVAL_MS;
use ascension::input::map_key;
use ascension::ui::{self, buttons::ButtonMap, sprites::SpriteLoader};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseButton, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn main() {
    if let Err(e) = run() {
        eprintln!("Erreur critique: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let manager = CharacterManager::new()?;
    let mut app = App::new(manager, StdRng::from_entropy());
    let mut sprites = SpriteLoader::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, &mut app, &mut sprites);

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map_err(Into::into)
}

fn event_loop(
    terminal: &mut Tui,
    app: &mut App<StdRng>,
    sprites: &mut SpriteLoader,
) -> io::Result<()> {
    let mut buttons = ButtonMap::new();

    while !app.should_quit {
        terminal.draw(|frame| {
            buttons = ui::draw(frame, app, sprites);
        })?;

        if !event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
            continue;
        }

        match event::read()? {
            Event::Key(key)
                if key.kind == KeyEventKind::Press
                    && key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c') =>
            {
                app.should_quit = true;
            }
            Event::Key(key) => {
                if let Some(input) = map_key(key) {
                    app.handle_input(input);
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if let Some(input) = buttons.hit(mouse.column, mouse.row) {
                    app.handle_input(input);
                }
            }
            _ => {}
        }
    }

    Ok(())
}
