//! Rendering of the terminal window
//!
//! The window is a bordered block with decorative buttons, the title and a
//! clock. The body shows the scrollback pinned to the bottom followed by the
//! prompt line, or the termination notice once disconnected.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use super::app::status_footer::render_footer;
use super::theme_menu::{render_theme_menu, ThemeMenu};
use crate::shell::{Terminal, DISCONNECTED_MESSAGE};
use crate::theme::Palette;

pub const WINDOW_TITLE: &str = "XO_Works Terminal";

/// Draw the whole window for the current terminal state, with the theme
/// menu on top while it is open.
pub fn render(frame: &mut Frame, terminal: &Terminal, menu: &ThemeMenu, clock: &str) {
    let palette = terminal.theme().palette;
    let area = frame.area();

    let block = window_block(&palette, clock);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if terminal.is_disconnected() {
        render_disconnected(frame, inner, &palette);
    } else {
        render_session(frame, inner, terminal, &palette, !menu.is_open());
        render_theme_menu(frame, area, menu, terminal);
    }
}

fn window_block(palette: &Palette, clock: &str) -> Block<'static> {
    let buttons = Line::from(vec![
        Span::styled(" ● ", Style::default().fg(Color::Red)),
        Span::styled("● ", Style::default().fg(Color::Yellow)),
        Span::styled("● ", Style::default().fg(Color::Green)),
    ])
    .left_aligned();
    let title = Line::styled(format!(" {} ", WINDOW_TITLE), palette.header_style()).centered();
    let clock = Line::styled(format!(" {} ", clock), palette.header_style()).right_aligned();

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style())
        .style(palette.text_style())
        .title_top(buttons)
        .title_top(title)
        .title_top(clock)
}

fn render_session(
    frame: &mut Frame,
    area: Rect,
    terminal: &Terminal,
    palette: &Palette,
    show_cursor: bool,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let width = area.width as usize;

    let mut rows: Vec<Line<'static>> = Vec::new();
    for line in terminal.lines() {
        let style = palette.line_style(line.kind);
        for row in line.content.rows() {
            rows.extend(wrap_spans(&[(row, style)], width));
        }
    }

    // Row and column of the edit cursor, counted from the first prompt row.
    let mut cursor = None;
    if terminal.is_interactive() {
        let prompt = terminal.prompt();
        let buffer = terminal.buffer();
        let offset = text_width(&prompt)
            + 1
            + text_width(&buffer.chars().take(terminal.cursor()).collect::<String>());
        cursor = Some((rows.len() + offset / width, offset % width));

        rows.extend(wrap_spans(
            &[
                (prompt.as_str(), palette.accent_bold_style()),
                (" ", palette.text_style()),
                (buffer, palette.text_style()),
            ],
            width,
        ));
    }

    let height = area.height as usize;
    let total = rows.len().max(cursor.map(|(row, _)| row + 1).unwrap_or(0));
    // Pin to the bottom, but never scroll the edit cursor out of view.
    let mut skip = total.saturating_sub(height);
    if let Some((row, _)) = cursor {
        skip = skip.min(row);
    }
    let visible: Vec<Line<'static>> = rows.into_iter().skip(skip).collect();
    frame.render_widget(Paragraph::new(visible).style(palette.text_style()), area);

    if let Some((row, col)) = cursor.filter(|_| show_cursor) {
        let y = area.y + (row - skip) as u16;
        let x = area.x + col as u16;
        frame.set_cursor_position(Position::new(x, y));
    }
}

fn render_disconnected(frame: &mut Frame, area: Rect, palette: &Palette) {
    let center = centered_rect(80, 30, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(center);

    let message = Paragraph::new(DISCONNECTED_MESSAGE)
        .style(palette.header_style())
        .alignment(Alignment::Center);
    frame.render_widget(message, chunks[0]);
    render_footer(frame, chunks[2], &[("q", "quit"), ("Esc", "quit")], palette);
}

/// Create a centered layout with the given constraints.
///
/// Returns the center area that can be used for content.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical_layout[1])[1]
}

/// Display width of `text` in terminal columns.
pub fn text_width(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Hard-wrap styled segments into rows at most `width` columns wide.
///
/// Breaks fall between characters, like a real terminal. An empty input
/// still yields one (empty) row.
pub fn wrap_spans(segments: &[(&str, Style)], width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut rows: Vec<Vec<Span<'static>>> = vec![Vec::new()];
    let mut used = 0;

    for (text, style) in segments {
        let mut run = String::new();
        for c in text.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width && used > 0 {
                if !run.is_empty() {
                    push_span(&mut rows, std::mem::take(&mut run), *style);
                }
                rows.push(Vec::new());
                used = 0;
            }
            run.push(c);
            used += w;
        }
        if !run.is_empty() {
            push_span(&mut rows, run, *style);
        }
    }

    rows.into_iter().map(Line::from).collect()
}

fn push_span(rows: &mut [Vec<Span<'static>>], text: String, style: Style) {
    if let Some(row) = rows.last_mut() {
        row.push(Span::styled(text, style));
    }
}
