//! XO_Works Terminal
//!
//! A simulated command-line landing page. A short boot sequence plays, then
//! a prompt answers a small fixed set of commands from a static content
//! catalog. The scrollback survives an in-shell `--resume`; the chosen theme
//! is kept in the user's config.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod session;
pub mod shell;
pub mod theme;
pub mod tui;

pub use catalog::{ContentCatalog, ManualPages};
pub use config::{Config, ConfigError};
pub use session::{LineContent, LineKind, SessionLog, SessionStore, TerminalLine};
pub use shell::{Interpreter, Terminal, TerminalOptions};
pub use theme::{Theme, ThemeCatalog, ThemeStore};
