//! TUI (Text User Interface) module for xoterm
//!
//! Renders the simulated terminal window with ratatui/crossterm and feeds
//! keystrokes into the shell core.

pub mod app;
pub mod keys;
pub mod shortcuts;
pub mod theme_menu;
pub mod ui;

pub use app::{run, App};
pub use keys::{handle_key_event, InputResult};
pub use shortcuts::{KeyBinding, ShortcutAction, ShortcutGuard, ShortcutRegistry};
pub use theme_menu::ThemeMenu;
