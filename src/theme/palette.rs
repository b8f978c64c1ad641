//! Color palette for a theme
//!
//! Centralizes the color and style definitions derived from a theme's data.
//! Provides both ratatui styles (for the TUI) and ANSI escape codes (for
//! `xoterm exec` output). A palette is built once per theme when the catalog
//! loads; rendering only reads it.

use std::borrow::Cow;

use ratatui::style::{Color, Modifier, Style};

use crate::session::LineKind;

/// Resolved colors of one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Window background
    pub background: Color,
    /// Regular output text
    pub text: Color,
    /// Prompt and echoed input
    pub accent: Color,
    /// Window title and system messages
    pub header: Color,
    /// Window border
    pub border: Color,
    /// Error lines
    pub error: Color,
    /// Theme menu preview
    pub swatch: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::Reset,
            text: Color::Gray,
            accent: Color::Green,
            header: Color::DarkGray,
            border: Color::DarkGray,
            error: Color::Red,
            swatch: Color::Green,
        }
    }
}

impl Palette {
    // Style helpers

    /// Style for output text.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Style for the prompt and echoed input.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).bg(self.background)
    }

    /// Style for the prompt symbol.
    pub fn accent_bold_style(&self) -> Style {
        self.accent_style().add_modifier(Modifier::BOLD)
    }

    /// Style for the window title and system lines.
    pub fn header_style(&self) -> Style {
        Style::default().fg(self.header).bg(self.background)
    }

    /// Style for the window border.
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border).bg(self.background)
    }

    /// Style for error lines.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).bg(self.background)
    }

    /// Style for a line of the given kind.
    pub fn line_style(&self, kind: LineKind) -> Style {
        match kind {
            LineKind::Input => self.accent_style(),
            LineKind::Output => self.text_style(),
            LineKind::Error => self.error_style(),
            LineKind::System => self.header_style(),
        }
    }

    // ANSI color helpers for CLI output

    /// Format text with the color used for lines of `kind`.
    pub fn paint(&self, kind: LineKind, text: &str) -> String {
        let color = match kind {
            LineKind::Input => self.accent,
            LineKind::Output => self.text,
            LineKind::Error => self.error,
            LineKind::System => self.header,
        };
        format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
    }
}

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
pub fn color_to_ansi(color: Color) -> Cow<'static, str> {
    let code = match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        Color::Rgb(r, g, b) => return Cow::Owned(format!("\x1b[38;2;{};{};{}m", r, g, b)),
        Color::Indexed(i) => return Cow::Owned(format!("\x1b[38;5;{}m", i)),
    };
    Cow::Borrowed(code)
}

/// Parse a `#rrggbb` color.
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}
