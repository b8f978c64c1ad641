//! One-shot command execution
//!
//! Runs a single line through the interpreter without the TUI. Deferred
//! effects are settled immediately, so `exec clear` prints nothing and
//! `exec exit` prints the termination message.

use anyhow::Result;

use xoterm::{ContentCatalog, Interpreter};

use super::{theme_store, Painter};

/// Interpret `words` as one submitted line and print the result.
///
/// A blank line prints nothing. Returns `true` when the command produced
/// an error line.
pub fn handle(words: Vec<String>) -> Result<bool> {
    let line = words.join(" ");
    if line.trim().is_empty() {
        return Ok(false);
    }

    let mut themes = theme_store();
    let interpreter = Interpreter::new(ContentCatalog::builtin(), themes.catalog());

    let outcome = interpreter.interpret(&line, &mut themes);
    let failed = outcome.is_error();

    // Painted after interpretation so `exec theme <id>` shows the new colors.
    let painter = Painter::new(themes.current_theme().palette);
    for record in outcome.settle() {
        for row in record.content.rows() {
            println!("{}", painter.paint(record.kind, row));
        }
    }

    Ok(failed)
}
