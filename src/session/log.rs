//! Session log (the visible scrollback)

use super::line::TerminalLine;

/// Ordered, append-only list of rendered lines for the current session.
///
/// Lines are never edited in place. The only way to remove lines is a full
/// reset (`clear`, reboot, theme change or a new session).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionLog {
    lines: Vec<TerminalLine>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: TerminalLine) {
        self.lines.push(line);
    }

    pub fn extend<I: IntoIterator<Item = TerminalLine>>(&mut self, lines: I) {
        self.lines.extend(lines);
    }

    /// Replace the whole log, e.g. with a restored session or a reset banner.
    pub fn reset(&mut self, lines: Vec<TerminalLine>) {
        self.lines = lines;
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[TerminalLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last(&self) -> Option<&TerminalLine> {
        self.lines.last()
    }
}
