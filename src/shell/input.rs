//! Live edit buffer, history recall and tab completion

use super::interpreter::{Deferred, Outcome};
use crate::session::{CommandHistory, SessionLog, TerminalLine};

/// What a Tab press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Empty buffer or no match
    Nothing,
    /// Single match; the buffer now holds it
    Completed,
    /// Several matches were listed in the log
    Listed,
}

/// Owns the in-progress command line.
///
/// The cursor is a character index into the buffer. Any direct edit stops
/// history navigation.
#[derive(Debug, Clone, Default)]
pub struct InputController {
    buffer: String,
    cursor: usize,
    history: CommandHistory,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Replace the buffer and put the cursor at its end.
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.cursor = self.buffer.chars().count();
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
        self.history.reset_cursor();
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.buffer.remove(at);
        self.history.reset_cursor();
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.buffer.chars().count() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.buffer.remove(at);
        self.history.reset_cursor();
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.buffer.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.chars().count();
    }

    /// Forget the buffer and the history (hard boot).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Submit the buffer.
    ///
    /// Echoes `<prompt> <buffer>`, records the buffer in history, appends
    /// the interpreter's line and clears the buffer. Returns the effects to
    /// schedule, or `None` when the buffer was blank and nothing happened.
    pub fn submit<F>(&mut self, prompt: &str, log: &mut SessionLog, interpret: F) -> Option<Vec<Deferred>>
    where
        F: FnOnce(&str) -> Outcome,
    {
        if self.buffer.trim().is_empty() {
            return None;
        }
        let command = std::mem::take(&mut self.buffer);
        self.cursor = 0;

        log.push(echo(prompt, &command));
        self.history.push(command.clone());

        let outcome = interpret(&command);
        log.push(outcome.line);
        Some(outcome.deferred)
    }

    /// Recall the next older command, if any.
    pub fn recall_previous(&mut self) {
        if let Some(entry) = self.history.previous() {
            let entry = entry.to_string();
            self.set_buffer(entry);
        }
    }

    /// Recall the next newer command; past the newest, clear the buffer.
    pub fn recall_next(&mut self) {
        match self.history.next() {
            Some(Some(entry)) => {
                let entry = entry.to_string();
                self.set_buffer(entry);
            }
            Some(None) => self.set_buffer(String::new()),
            None => {}
        }
    }

    /// Complete the buffer against the names `complete` returns for it.
    ///
    /// One match replaces the buffer. Several matches echo the attempt and
    /// list them, two spaces apart, leaving the buffer as it was.
    pub fn complete_tab<'a, F>(&mut self, prompt: &str, log: &mut SessionLog, complete: F) -> Completion
    where
        F: FnOnce(&str) -> Vec<&'a str>,
    {
        if self.buffer.trim().is_empty() {
            return Completion::Nothing;
        }
        match complete(&self.buffer).as_slice() {
            [] => Completion::Nothing,
            [only] => {
                self.set_buffer(*only);
                self.history.reset_cursor();
                Completion::Completed
            }
            matches => {
                log.push(echo(prompt, &self.buffer));
                log.push(TerminalLine::system(matches.join("  ")));
                Completion::Listed
            }
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }
}

/// The input line echoed into the log.
pub fn echo(prompt: &str, buffer: &str) -> TerminalLine {
    TerminalLine::input(format!("{} {}", prompt, buffer))
}
