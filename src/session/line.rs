//! Terminal line records
//!
//! A `TerminalLine` is one entry of the visible scrollback. Lines are
//! immutable once created; the log only ever appends or resets.

use serde::{Deserialize, Serialize};

/// What produced a line, which also decides how it is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Echo of a submitted command (prompt + buffer)
    Input,
    /// Regular command output
    Output,
    /// User-facing error text
    Error,
    /// Boot and system messages
    System,
}

/// Body of a line: a single text or an ordered list of texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineContent {
    Text(String),
    Lines(Vec<String>),
}

impl LineContent {
    /// Iterate over the rows this content renders as.
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        let rows: &[String] = match self {
            LineContent::Text(text) => std::slice::from_ref(text),
            LineContent::Lines(lines) => lines,
        };
        rows.iter().map(String::as_str)
    }

    /// True for an empty single text (the placeholder line).
    pub fn is_empty(&self) -> bool {
        match self {
            LineContent::Text(text) => text.is_empty(),
            LineContent::Lines(lines) => lines.is_empty(),
        }
    }
}

/// One rendered record in the session log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalLine {
    #[serde(rename = "type")]
    pub kind: LineKind,
    pub content: LineContent,
}

impl TerminalLine {
    pub fn new(kind: LineKind, content: LineContent) -> Self {
        Self { kind, content }
    }

    pub fn input(text: impl Into<String>) -> Self {
        Self::new(LineKind::Input, LineContent::Text(text.into()))
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(LineKind::Output, LineContent::Text(text.into()))
    }

    /// Multi-row output, e.g. a catalog entry or a manual page.
    pub fn output_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            LineKind::Output,
            LineContent::Lines(lines.into_iter().map(Into::into).collect()),
        )
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(LineKind::Error, LineContent::Text(text.into()))
    }

    pub fn error_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            LineKind::Error,
            LineContent::Lines(lines.into_iter().map(Into::into).collect()),
        )
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(LineKind::System, LineContent::Text(text.into()))
    }

    /// The empty output line returned when the real result is deferred.
    pub fn placeholder() -> Self {
        Self::output("")
    }

    /// All rows joined with newlines.
    pub fn text(&self) -> String {
        self.content.rows().collect::<Vec<_>>().join("\n")
    }
}
