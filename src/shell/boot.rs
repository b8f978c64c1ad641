//! Boot sequence
//!
//! An explicit state machine. Every call to [`BootSequencer::advance`] runs
//! the handler for the current state, which yields the log operations to
//! apply and the delay before the next call. The driver schedules that
//! delay on its timer queue.
//!
//! ```text
//! BootMessages(0..5) -> PauseBeforeArt -> RenderingArt(0..n)
//!     -> PauseBeforeWelcome -> Welcome -> Ready
//! ```

use std::time::Duration;

use chrono::NaiveDateTime;

use crate::config::BootConfig;
use crate::session::TerminalLine;

pub const BOOT_MESSAGES: [&str; 5] = [
    "XO_Works System v1.0.0",
    "System boot initiated...",
    "Loading kernel modules...",
    "Initializing systems...",
    "System ready.",
];

pub const WELCOME_MESSAGE: &str = "Welcome to XO_Works. Type 'help' to see available commands.";

const LOGIN_TTY: &str = "ttys001";

/// Delays between boot steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootTimings {
    /// Pause after each boot message
    pub messages: [Duration; 5],
    pub pause_before_art: Duration,
    pub art_line: Duration,
    pub pause_before_welcome: Duration,
    pub welcome_to_ready: Duration,
}

impl BootTimings {
    pub fn standard() -> Self {
        Self {
            messages: [100, 150, 150, 150, 150].map(Duration::from_millis),
            pause_before_art: Duration::from_millis(600),
            art_line: Duration::from_millis(30),
            pause_before_welcome: Duration::from_millis(100),
            welcome_to_ready: Duration::from_millis(100),
        }
    }

    /// Standard timings divided by the configured boot speed.
    pub fn scaled(config: &BootConfig) -> Self {
        let standard = Self::standard();
        Self {
            messages: standard.messages.map(|d| config.scale(d)),
            pause_before_art: config.scale(standard.pause_before_art),
            art_line: config.scale(standard.art_line),
            pause_before_welcome: config.scale(standard.pause_before_welcome),
            welcome_to_ready: config.scale(standard.welcome_to_ready),
        }
    }
}

impl Default for BootTimings {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootState {
    /// Appending the fixed boot message at this index
    BootMessages(usize),
    PauseBeforeArt,
    /// Appending the banner row at this index; row 0 clears the log first
    RenderingArt(usize),
    PauseBeforeWelcome,
    Welcome,
    Ready,
}

/// A change to the session log requested by the boot sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootOp {
    Append(TerminalLine),
    Clear,
}

/// Output of one boot handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootStep {
    pub ops: Vec<BootOp>,
    /// Delay before the next `advance`; `None` once `Ready` is reached.
    pub delay: Option<Duration>,
}

pub struct BootSequencer {
    state: BootState,
    art: Vec<String>,
    login: NaiveDateTime,
    timings: BootTimings,
}

impl BootSequencer {
    pub fn new(art: Vec<String>, login: NaiveDateTime, timings: BootTimings) -> Self {
        Self {
            state: BootState::BootMessages(0),
            art,
            login,
            timings,
        }
    }

    pub fn state(&self) -> BootState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == BootState::Ready
    }

    /// Jump straight to `Ready` without producing output.
    pub fn skip(&mut self) {
        self.state = BootState::Ready;
    }

    /// Run the current state's handler and move to the next state.
    pub fn advance(&mut self) -> BootStep {
        let (ops, delay, next) = match self.state {
            BootState::BootMessages(i) => self.boot_message(i),
            BootState::PauseBeforeArt => (
                Vec::new(),
                Some(self.timings.pause_before_art),
                BootState::RenderingArt(0),
            ),
            BootState::RenderingArt(i) => self.art_row(i),
            BootState::PauseBeforeWelcome => (
                Vec::new(),
                Some(self.timings.pause_before_welcome),
                BootState::Welcome,
            ),
            BootState::Welcome => (
                self.welcome(),
                Some(self.timings.welcome_to_ready),
                BootState::Ready,
            ),
            BootState::Ready => (Vec::new(), None, BootState::Ready),
        };
        if next != self.state {
            tracing::trace!(from = ?self.state, to = ?next, "boot transition");
        }
        self.state = next;
        BootStep { ops, delay }
    }

    fn boot_message(&self, i: usize) -> (Vec<BootOp>, Option<Duration>, BootState) {
        let Some(message) = BOOT_MESSAGES.get(i) else {
            return (Vec::new(), Some(Duration::ZERO), BootState::PauseBeforeArt);
        };
        let next = if i + 1 < BOOT_MESSAGES.len() {
            BootState::BootMessages(i + 1)
        } else {
            BootState::PauseBeforeArt
        };
        (
            vec![BootOp::Append(TerminalLine::system(*message))],
            Some(self.timings.messages[i]),
            next,
        )
    }

    fn art_row(&self, i: usize) -> (Vec<BootOp>, Option<Duration>, BootState) {
        let mut ops = Vec::with_capacity(2);
        if i == 0 {
            ops.push(BootOp::Clear);
        }
        match self.art.get(i) {
            Some(row) => {
                ops.push(BootOp::Append(TerminalLine::output(row.clone())));
                let next = if i + 1 < self.art.len() {
                    BootState::RenderingArt(i + 1)
                } else {
                    BootState::PauseBeforeWelcome
                };
                (ops, Some(self.timings.art_line), next)
            }
            // No banner at all: go straight on.
            None => (ops, Some(Duration::ZERO), BootState::PauseBeforeWelcome),
        }
    }

    fn welcome(&self) -> Vec<BootOp> {
        [
            TerminalLine::output(""),
            TerminalLine::system(last_login_line(&self.login)),
            TerminalLine::output(""),
            TerminalLine::output(WELCOME_MESSAGE),
        ]
        .into_iter()
        .map(BootOp::Append)
        .collect()
    }
}

/// `Last login: Mon, Oct 19, 14:05:09 on ttys001`
pub fn last_login_line(login: &NaiveDateTime) -> String {
    format!(
        "Last login: {} on {}",
        login.format("%a, %b %-d, %H:%M:%S"),
        LOGIN_TTY
    )
}
