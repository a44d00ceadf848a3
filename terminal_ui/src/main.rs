mod app;
mod config;
mod ui;

use std::io;
use std::sync::Once;

use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use rand::Rng;
use tui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use app::App;
use config::Config;

static PANIC_HOOK: Once = Once::new();

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

/// Puts the terminal in raw mode on the alternate screen until dropped.
///
/// The panic hook restores the terminal before the panic message is printed,
/// so the message lands on the normal screen.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        PANIC_HOOK.call_once(|| {
            let previous_hook = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |panic_info| {
                let _ = restore_terminal();
                previous_hook(panic_info);
            }));
        });

        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = restore_terminal() {
            error!("failed to restore terminal: {err}");
        }
    }
}

fn run<B: Backend, R: Rng>(terminal: &mut Terminal<B>, app: &mut App<R>) -> io::Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.on_key(key);
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    config.init_logging()?;
    info!("starting; logging to {}", config.log_file.display());

    let mut app = App::new(rand::thread_rng());
    {
        let _guard = TerminalGuard::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        run(&mut terminal, &mut app)?;
    }

    info!("exiting with {} tasks", app.tracker().tasks().len());
    Ok(())
}
