//! Command interpreter
//!
//! Maps one submitted line to the single [`TerminalLine`] to append, plus
//! any deferred effects the caller must schedule. The interpreter never
//! touches the session log itself.

use std::sync::Arc;
use std::time::Duration;

use crate::catalog::{ContentCatalog, ManualPages, MAN_USAGE};
use crate::session::{LineKind, TerminalLine};
use crate::theme::{ThemeCatalog, ThemeStore};

/// Message shown once the session has been disconnected.
pub const DISCONNECTED_MESSAGE: &str = "Connection to XO_Works terminated.";

pub const THEME_USAGE: &str = "Usage: theme [theme-name]";

const THEME_RESET_DELAY: Duration = Duration::from_millis(10);
const CLEAR_DELAY: Duration = Duration::ZERO;
const DISCONNECT_DELAY: Duration = Duration::from_millis(800);
const RESTART_RESET_DELAY: Duration = Duration::from_millis(10);
/// Reload fires 1500 ms after the restart reset.
const RESTART_RELOAD_DELAY: Duration = Duration::from_millis(1510);

/// Side effect requested by a command, applied after the returned line
/// has been rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace the whole session log.
    ResetLog(Vec<TerminalLine>),
    /// Make the terminal non-interactive and show the termination message.
    Disconnect,
    /// Hard boot: forget the session and start over.
    Reload,
}

/// An effect and how long after the command it should fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deferred {
    pub delay: Duration,
    pub effect: Effect,
}

impl Deferred {
    pub fn after(delay: Duration, effect: Effect) -> Self {
        Self { delay, effect }
    }
}

/// Result of interpreting one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Line to append right away.
    pub line: TerminalLine,
    /// Effects to schedule, in order.
    pub deferred: Vec<Deferred>,
}

impl Outcome {
    fn line(line: TerminalLine) -> Self {
        Self {
            line,
            deferred: Vec::new(),
        }
    }

    fn with(line: TerminalLine, deferred: Vec<Deferred>) -> Self {
        Self { line, deferred }
    }

    pub fn is_error(&self) -> bool {
        self.line.kind == LineKind::Error
    }

    /// Everything a non-interactive caller shows, with all deferred effects
    /// applied at once: the immediate line (unless it is an empty
    /// placeholder), then each effect's visible result in order.
    pub fn settle(self) -> Vec<TerminalLine> {
        let mut lines = Vec::new();
        if !self.line.content.is_empty() {
            lines.push(self.line);
        }
        for deferred in self.deferred {
            match deferred.effect {
                Effect::ResetLog(reset) => lines.extend(reset),
                Effect::Disconnect => lines.push(TerminalLine::system(DISCONNECTED_MESSAGE)),
                Effect::Reload => {}
            }
        }
        lines
    }
}

pub struct Interpreter {
    catalog: Arc<ContentCatalog>,
    manual: ManualPages,
    theme_ids: Vec<String>,
}

impl Interpreter {
    pub fn new(catalog: Arc<ContentCatalog>, themes: &ThemeCatalog) -> Self {
        let theme_ids: Vec<String> = themes.ids().into_iter().map(str::to_string).collect();
        let manual = ManualPages::new(theme_ids.as_slice());

        Self {
            catalog,
            manual,
            theme_ids,
        }
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    /// Catalog command names starting with `prefix` (case-insensitive),
    /// in declaration order. Built-ins such as `theme` or `exit` are not
    /// completed.
    pub fn complete(&self, prefix: &str) -> Vec<&str> {
        self.catalog.complete(prefix)
    }

    /// Interpret one submitted line.
    ///
    /// The line is trimmed and lower-cased before dispatch. The only state
    /// it may change is the active theme.
    pub fn interpret(&self, raw: &str, themes: &mut ThemeStore) -> Outcome {
        let normalized = raw.trim().to_lowercase();
        let mut words = normalized.split_whitespace();
        let base = words.next().unwrap_or("");
        let args: Vec<&str> = words.collect();

        tracing::debug!(command = base, args = ?args, "dispatching");

        match base {
            "theme" => self.theme(args.first().copied(), themes),
            "clear" => Outcome::with(
                TerminalLine::placeholder(),
                vec![Deferred::after(CLEAR_DELAY, Effect::ResetLog(Vec::new()))],
            ),
            "help" => Outcome::line(TerminalLine::output_lines(
                self.catalog.help_text().iter().cloned(),
            )),
            "exit" | "poweroff" => Outcome::with(
                TerminalLine::system("Disconnecting from session..."),
                vec![Deferred::after(DISCONNECT_DELAY, Effect::Disconnect)],
            ),
            "restart" | "reboot" => Outcome::with(
                TerminalLine::system("Restarting system..."),
                vec![
                    Deferred::after(
                        RESTART_RESET_DELAY,
                        Effect::ResetLog(vec![
                            TerminalLine::system("System is restarting..."),
                            TerminalLine::system(""),
                        ]),
                    ),
                    Deferred::after(RESTART_RELOAD_DELAY, Effect::Reload),
                ],
            ),
            "man" => Outcome::line(self.man(args.first().copied())),
            _ => Outcome::line(self.lookup(base)),
        }
    }

    fn theme(&self, name: Option<&str>, themes: &mut ThemeStore) -> Outcome {
        match name {
            Some(id) if themes.change_theme(id) => Outcome::with(
                TerminalLine::placeholder(),
                vec![Deferred::after(
                    THEME_RESET_DELAY,
                    Effect::ResetLog(vec![TerminalLine::system(format!(
                        "Theme changed to {}",
                        id
                    ))]),
                )],
            ),
            Some(id) => Outcome::line(TerminalLine::error_lines([
                format!("Theme not found: {}", id),
                THEME_USAGE.to_string(),
                self.theme_options(),
            ])),
            None => Outcome::line(TerminalLine::output_lines([
                THEME_USAGE.to_string(),
                self.theme_options(),
            ])),
        }
    }

    fn theme_options(&self) -> String {
        format!("Theme options: {}", self.theme_ids.join(", "))
    }

    fn man(&self, command: Option<&str>) -> TerminalLine {
        let Some(command) = command else {
            return TerminalLine::output_lines(MAN_USAGE.iter().copied());
        };
        match self.manual.lookup(command) {
            Some(page) => TerminalLine::output_lines(page.iter().cloned()),
            None => TerminalLine::error(format!("No manual entry for '{}'", command)),
        }
    }

    fn lookup(&self, base: &str) -> TerminalLine {
        match self.catalog.get(base) {
            Some(entry) => TerminalLine::output_lines(entry.output.iter().cloned()),
            None => TerminalLine::error(format!(
                "Command not found: {}. Type 'help' to see available commands.",
                base
            )),
        }
    }
}
