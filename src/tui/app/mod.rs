//! Application shell for the terminal window
//!
//! `App` owns the real terminal: raw mode and the alternate screen are
//! entered on creation and restored on drop, so every exit path (including
//! `?` errors) leaves the user's terminal usable. A panic hook restores it
//! as well before the panic message is printed.

pub mod status_footer;

use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Frame};

use super::keys::{handle_key_event, InputResult};
use super::shortcuts::{ShortcutAction, ShortcutGuard, ShortcutRegistry, CLEAR_SCREEN, THEME_MENU};
use super::theme_menu::ThemeMenu;
use super::ui::{self, WINDOW_TITLE};
use crate::shell::Terminal;

/// Longest wait between redraws; keeps the header clock ticking.
const MAX_WAIT: Duration = Duration::from_millis(250);

/// Guard around the real terminal.
pub struct App {
    terminal: ratatui::Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Enter raw mode and the alternate screen.
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, SetTitle(WINDOW_TITLE)) {
            let _ = disable_raw_mode();
            return Err(e).context("failed to enter alternate screen");
        }
        let terminal = match ratatui::Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                restore_terminal();
                return Err(e).context("failed to set up terminal backend");
            }
        };
        Ok(Self { terminal })
    }

    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Repaint every cell on the next draw.
    pub fn clear(&mut self) -> Result<()> {
        self.terminal.clear()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Leave raw mode and the alternate screen. Errors are ignored; this runs
/// on the way out.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Restore the terminal before the default panic output.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));
}

/// Run the interactive terminal until the user quits or SIGTERM arrives.
#[cfg(not(tarpaulin_include))]
pub fn run(terminal: &mut Terminal) -> Result<()> {
    let terminate = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(signal_hook::consts::SIGTERM, Arc::clone(&terminate))
        .context("failed to install SIGTERM handler")?;

    install_panic_hook();
    let mut app = App::new()?;
    let shortcuts = ShortcutRegistry::new();
    let mut session_shortcuts: Vec<ShortcutGuard> = Vec::new();
    let mut menu = ThemeMenu::new();

    terminal.start(Instant::now());
    let mut painted_revision = terminal.theme_revision();

    loop {
        if terminate.load(Ordering::Relaxed) {
            tracing::info!("received SIGTERM, exiting");
            break;
        }

        terminal.tick(Instant::now());

        // Session shortcuts live exactly as long as the session is interactive.
        if terminal.is_interactive() {
            if session_shortcuts.is_empty() {
                session_shortcuts.push(shortcuts.register(CLEAR_SCREEN, ShortcutAction::ClearScreen));
                session_shortcuts.push(shortcuts.register(THEME_MENU, ShortcutAction::ThemeMenu));
            }
        } else {
            session_shortcuts.clear();
            menu.close();
        }

        // A theme switch changes every cell's background.
        if terminal.theme_revision() != painted_revision {
            painted_revision = terminal.theme_revision();
            app.clear()?;
        }

        let clock = chrono::Local::now().format("%H:%M:%S").to_string();
        app.draw(|frame| ui::render(frame, terminal, &menu, &clock))?;

        let timeout = terminal
            .next_deadline()
            .map(|due| due.saturating_duration_since(Instant::now()))
            .map_or(MAX_WAIT, |wait| wait.min(MAX_WAIT));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(key, terminal, &mut menu, &shortcuts, Instant::now()) == InputResult::Quit {
                    break;
                }
            }
        }
    }

    drop(session_shortcuts);
    Ok(())
}
