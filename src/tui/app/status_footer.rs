//! Footer rendering with keybinding hints

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::Palette;

/// Render a centered footer with keybinding hints.
///
/// Takes pairs of (key, description) and joins them with " | " separators.
///
/// Example: `&[("q", "quit"), ("Esc", "quit")]` renders as `"q: quit | Esc: quit"`.
pub fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)], palette: &Palette) {
    let spans = build_footer_spans(keys, palette);
    let footer = Paragraph::new(Line::from(spans))
        .style(palette.header_style())
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Build styled spans for footer keybinding hints.
///
/// Keys use the accent color, descriptions and separators the header color.
fn build_footer_spans(keys: &[(&str, &str)], palette: &Palette) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ".to_string(), palette.header_style()));
        }
        spans.push(Span::styled(key.to_string(), palette.accent_style()));
        spans.push(Span::styled(format!(": {}", desc), palette.header_style()));
    }
    spans
}
