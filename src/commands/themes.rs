//! Themes listing handler

use anyhow::Result;

use super::{theme_store, Painter};

/// List every theme, marking the active one.
pub fn handle() -> Result<()> {
    let store = theme_store();
    let current = store.current_theme();
    let painter = Painter::new(current.palette);

    for theme in store.catalog().themes() {
        let is_current = theme.id == current.id;
        let marker = if is_current { "*" } else { " " };
        let row = format!(
            "{} {:<10} {:<14} prompt {}",
            marker, theme.id, theme.name, theme.prompt
        );
        if is_current {
            println!("{}", painter.accent(&row));
        } else {
            println!("{}", painter.text(&row));
        }
    }
    Ok(())
}
