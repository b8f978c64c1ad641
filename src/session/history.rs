//! Command history with arrow-key recall

/// Cursor value meaning "not navigating history".
pub const NOT_NAVIGATING: isize = -1;

/// Append-only log of submitted command buffers.
///
/// The cursor counts back from the most recent entry: `0` is the newest
/// command, `len - 1` the oldest, and `-1` means the user is not browsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: isize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            cursor: NOT_NAVIGATING,
        }
    }
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted command and stop navigating.
    pub fn push(&mut self, command: impl Into<String>) {
        self.entries.push(command.into());
        self.cursor = NOT_NAVIGATING;
    }

    /// Step one entry further into the past.
    ///
    /// Returns the recalled entry, or `None` when there is nothing older.
    pub fn previous(&mut self) -> Option<&str> {
        let len = self.entries.len() as isize;
        if len == 0 || self.cursor >= len - 1 {
            return None;
        }
        self.cursor += 1;
        self.entry_at_cursor()
    }

    /// Step one entry back towards the present.
    ///
    /// Returns `Some(Some(entry))` when a newer entry was recalled,
    /// `Some(None)` when navigation ended (the buffer should be cleared) and
    /// `None` when not navigating at all.
    pub fn next(&mut self) -> Option<Option<&str>> {
        match self.cursor {
            c if c > 0 => {
                self.cursor -= 1;
                Some(self.entry_at_cursor())
            }
            0 => {
                self.cursor = NOT_NAVIGATING;
                Some(None)
            }
            _ => None,
        }
    }

    /// Stop navigating (the buffer was edited directly).
    pub fn reset_cursor(&mut self) {
        self.cursor = NOT_NAVIGATING;
    }

    pub fn cursor(&self) -> isize {
        self.cursor
    }

    pub fn is_navigating(&self) -> bool {
        self.cursor != NOT_NAVIGATING
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_at_cursor(&self) -> Option<&str> {
        let index = self.entries.len() as isize - 1 - self.cursor;
        usize::try_from(index)
            .ok()
            .and_then(|i| self.entries.get(i))
            .map(String::as_str)
    }
}
