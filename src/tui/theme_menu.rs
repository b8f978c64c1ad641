//! Theme picker popup
//!
//! Lists every theme with its color swatch. The menu opens focused on the
//! active theme; Enter applies the focused one (persisted, log untouched)
//! and closes the menu.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::app::status_footer::render_footer;
use super::ui::centered_rect;
use crate::shell::Terminal;
use crate::theme::Theme;

pub const MENU_TITLE: &str = "Select Theme";

const FOOTER_KEYS: &[(&str, &str)] = &[("Enter", "apply"), ("Esc", "close")];

/// Open/closed state plus the focused row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeMenu {
    focused: Option<usize>,
}

impl ThemeMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.focused.is_some()
    }

    /// Focused row while open.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Open with the active theme focused.
    pub fn open(&mut self, terminal: &Terminal) {
        let current = &terminal.theme().id;
        let index = terminal
            .themes()
            .iter()
            .position(|theme| &theme.id == current)
            .unwrap_or(0);
        self.focused = Some(index);
    }

    pub fn close(&mut self) {
        self.focused = None;
    }

    pub fn toggle(&mut self, terminal: &Terminal) {
        if self.is_open() {
            self.close();
        } else {
            self.open(terminal);
        }
    }

    /// Handle a key while open. Keys that mean nothing here are swallowed.
    pub fn handle_key(&mut self, key: KeyEvent, terminal: &mut Terminal) {
        let Some(index) = self.focused else {
            return;
        };
        let last = terminal.themes().len().saturating_sub(1);

        match key.code {
            KeyCode::Down => self.focused = Some((index + 1).min(last)),
            // Up from the first row leaves the menu.
            KeyCode::Up if index == 0 => self.close(),
            KeyCode::Up => self.focused = Some(index - 1),
            KeyCode::Home => self.focused = Some(0),
            KeyCode::End => self.focused = Some(last),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(id) = terminal.themes().get(index).map(|t| t.id.clone()) {
                    terminal.select_theme(&id);
                }
                self.close();
            }
            KeyCode::Esc => self.close(),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if let Some(found) = jump_to_letter(terminal.themes(), index, c) {
                    self.focused = Some(found);
                }
            }
            _ => {}
        }
    }
}

/// Next theme after `from` whose name starts with `letter`, wrapping round.
fn jump_to_letter(themes: &[Theme], from: usize, letter: char) -> Option<usize> {
    let letter = letter.to_ascii_lowercase();
    let starts_with = |theme: &Theme| {
        theme
            .name
            .chars()
            .next()
            .is_some_and(|c| c.to_ascii_lowercase() == letter)
    };
    themes
        .iter()
        .enumerate()
        .skip(from + 1)
        .chain(themes.iter().enumerate().take(from + 1))
        .find(|(_, theme)| starts_with(*theme))
        .map(|(i, _)| i)
}

/// Draw the popup over `area` when the menu is open.
pub fn render_theme_menu(frame: &mut Frame, area: Rect, menu: &ThemeMenu, terminal: &Terminal) {
    let Some(focused) = menu.focused() else {
        return;
    };
    let palette = terminal.theme().palette;
    let themes = terminal.themes();
    let current = &terminal.theme().id;

    // Borders, title, blank, rows, blank, footer.
    let column = centered_rect(60, 100, area);
    let height = (themes.len() as u16 + 6).min(column.height);
    let popup = Rect::new(
        column.x,
        column.y + (column.height - height) / 2,
        column.width,
        height,
    );
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.accent_style())
        .style(palette.text_style());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let mut lines = vec![
        Line::styled(MENU_TITLE, palette.accent_bold_style()),
        Line::from(""),
    ];
    for (idx, theme) in themes.iter().enumerate() {
        let is_focused = idx == focused;
        let is_current = &theme.id == current;

        let style = if is_focused {
            Style::default()
                .fg(palette.background)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            palette.text_style()
        };
        let prefix = if is_focused { "> " } else { "  " };

        let mut spans = vec![
            Span::styled(prefix, style),
            Span::styled("██", Style::default().fg(theme.palette.swatch).bg(palette.background)),
            Span::styled(format!(" {}", theme.name), style),
        ];
        if is_current {
            spans.push(Span::styled(" (current)", palette.header_style()));
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines), chunks[0]);
    render_footer(frame, chunks[1], FOOTER_KEYS, &palette);
}
