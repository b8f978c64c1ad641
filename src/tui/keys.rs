//! Keyboard input handling for the terminal window.
//!
//! Global shortcuts are checked first, then keys go to the focused input.
//! While the theme menu is open it takes every key except quit. While
//! booting only quit and global shortcuts do anything.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::shortcuts::{ShortcutAction, ShortcutRegistry};
use super::theme_menu::ThemeMenu;
use crate::shell::Terminal;

/// Result of handling one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    /// Leave the application
    Quit,
}

/// Handle a key event against the terminal core.
pub fn handle_key_event(
    key: KeyEvent,
    terminal: &mut Terminal,
    menu: &mut ThemeMenu,
    shortcuts: &ShortcutRegistry,
    now: Instant,
) -> InputResult {
    if key.kind != KeyEventKind::Press {
        return InputResult::Continue;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // === Quit ===
    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d')) {
        return InputResult::Quit;
    }
    if terminal.is_disconnected() {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => InputResult::Quit,
            _ => InputResult::Continue,
        };
    }

    // === Theme menu ===
    if menu.is_open() {
        if !terminal.is_interactive() {
            menu.close();
        } else if shortcuts.dispatch(&key) == Some(ShortcutAction::ThemeMenu) {
            menu.close();
            return InputResult::Continue;
        } else {
            menu.handle_key(key, terminal);
            return InputResult::Continue;
        }
    }

    // === Global shortcuts ===
    if let Some(action) = shortcuts.dispatch(&key) {
        match action {
            ShortcutAction::ClearScreen => terminal.clear_screen(),
            ShortcutAction::ThemeMenu => menu.toggle(terminal),
        }
        return InputResult::Continue;
    }

    if !terminal.is_interactive() {
        return InputResult::Continue;
    }

    match key.code {
        KeyCode::Char('l') | KeyCode::Char('L') if ctrl => terminal.clear_screen(),
        KeyCode::Char(_) if ctrl => {}
        KeyCode::Char(c) => terminal.insert_char(c),

        // === Editing ===
        KeyCode::Backspace => terminal.backspace(),
        KeyCode::Delete => terminal.delete(),
        KeyCode::Left => terminal.move_left(),
        KeyCode::Right => terminal.move_right(),
        KeyCode::Home => terminal.move_home(),
        KeyCode::End => terminal.move_end(),

        // === Commands ===
        KeyCode::Enter => terminal.submit(now),
        KeyCode::Tab => terminal.complete_tab(),
        KeyCode::Up => terminal.recall_previous(),
        KeyCode::Down => terminal.recall_next(),
        _ => {}
    }
    InputResult::Continue
}
