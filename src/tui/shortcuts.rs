//! Global keyboard shortcuts
//!
//! Shortcuts live in a registry that is consulted before the focused input.
//! Registering one hands back a [`ShortcutGuard`]; dropping the guard
//! removes the shortcut again, whichever way its owner goes away.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a global shortcut does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    ClearScreen,
    /// Open or close the theme picker
    ThemeMenu,
}

/// A key plus required modifiers. Letters match either case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub const fn ctrl(c: char) -> Self {
        Self {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        if !key.modifiers.contains(self.modifiers) {
            return false;
        }
        match (self.code, key.code) {
            (KeyCode::Char(a), KeyCode::Char(b)) => a.eq_ignore_ascii_case(&b),
            (a, b) => a == b,
        }
    }
}

/// Ctrl+L
pub const CLEAR_SCREEN: KeyBinding = KeyBinding::ctrl('l');

/// Ctrl+T
pub const THEME_MENU: KeyBinding = KeyBinding::ctrl('t');

#[derive(Debug)]
struct Entry {
    id: u64,
    binding: KeyBinding,
    action: ShortcutAction,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    entries: Vec<Entry>,
}

/// Registry of active global shortcuts (single UI thread).
#[derive(Debug, Clone, Default)]
pub struct ShortcutRegistry {
    inner: Rc<RefCell<Inner>>,
}

impl ShortcutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `binding`; it stays active until the guard is dropped.
    #[must_use = "the shortcut is removed when the guard is dropped"]
    pub fn register(&self, binding: KeyBinding, action: ShortcutAction) -> ShortcutGuard {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push(Entry {
            id,
            binding,
            action,
        });
        tracing::debug!(id, ?action, "registered global shortcut");
        ShortcutGuard {
            registry: Rc::clone(&self.inner),
            id,
        }
    }

    /// Action bound to `key`, if any. The most recent registration wins.
    pub fn dispatch(&self, key: &KeyEvent) -> Option<ShortcutAction> {
        self.inner
            .borrow()
            .entries
            .iter()
            .rev()
            .find(|e| e.binding.matches(key))
            .map(|e| e.action)
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keeps one shortcut registered while alive.
#[derive(Debug)]
pub struct ShortcutGuard {
    registry: Rc<RefCell<Inner>>,
    id: u64,
}

impl Drop for ShortcutGuard {
    fn drop(&mut self) {
        let mut inner = self.registry.borrow_mut();
        inner.entries.retain(|e| e.id != self.id);
        tracing::debug!(id = self.id, "removed global shortcut");
    }
}
