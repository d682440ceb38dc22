//! Interactive terminal front end
//!
//! The event loop owns the clock: key events and ticks both carry a
//! millisecond timestamp taken from one `Instant`, and the app never reads
//! time on its own. Page-turn commits happen on the tick that observes the
//! turn window elapsing, so the loop polls briefly instead of blocking.

mod app;
mod ui;

pub use app::{App, Screen};

use anyhow::{Context, Result};
use bibliomaniac_core::{BookId, CatalogStore};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::debug;

/// How long one poll waits before the loop ticks anyway
const TICK_RATE: Duration = Duration::from_millis(50);

/// Open the browser on the home shelf
pub fn run(store: CatalogStore) -> Result<()> {
    run_app(App::new(store))
}

/// Open the reader directly on one book
pub fn run_reader(store: CatalogStore, id: &str) -> Result<()> {
    let app = App::with_book(store, &BookId::new(id))?;
    run_app(app)
}

fn run_app(mut app: App) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let started = Instant::now();
    let mut needs_redraw = true;

    while !app.should_quit() {
        if needs_redraw {
            terminal.draw(|frame| ui::draw(frame, app))?;
            needs_redraw = false;
        }

        if app.tick(now_ms(started)) {
            needs_redraw = true;
        }

        if !event::poll(TICK_RATE)? {
            continue;
        }

        match event::read()? {
            Event::Resize(_, _) => needs_redraw = true,
            Event::Key(key) => {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                app.handle_key(key, now_ms(started));
                needs_redraw = true;
            }
            _ => {}
        }
    }

    debug!("leaving interactive mode");
    Ok(())
}

fn now_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    terminal::enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    terminal::disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
