//! Session persistence across terminal instances (file-backed store)

use std::time::{Duration, Instant};

use tempfile::TempDir;

use xoterm::session::{FileSessionStore, SessionStore};
use xoterm::theme::MemoryThemePersistence;
use xoterm::{
    ContentCatalog, Interpreter, Terminal, TerminalLine, TerminalOptions, ThemeCatalog, ThemeStore,
};

fn terminal(store: FileSessionStore, resume: bool) -> Terminal {
    let themes = ThemeStore::load(
        ThemeCatalog::builtin(),
        Box::new(MemoryThemePersistence::new()),
    );
    let interpreter = Interpreter::new(ContentCatalog::builtin(), &ThemeCatalog::builtin());
    Terminal::new(
        interpreter,
        themes,
        Box::new(store),
        TerminalOptions {
            resume,
            art: vec!["XO".to_string()],
            ..TerminalOptions::default()
        },
    )
}

/// Start and run the boot sequence to completion.
fn boot(terminal: &mut Terminal) -> Instant {
    let start = Instant::now();
    terminal.start(start);
    let ready = start + Duration::from_secs(10);
    terminal.tick(ready);
    assert!(terminal.is_interactive());
    ready
}

fn run(terminal: &mut Terminal, now: Instant, command: &str) {
    for c in command.chars() {
        terminal.insert_char(c);
    }
    terminal.submit(now);
}

#[test]
fn resume_restores_log_from_previous_process() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session-test.json");

    let mut first = terminal(FileSessionStore::at(&path), false);
    let now = boot(&mut first);
    run(&mut first, now, "contact");
    let saved = first.lines().to_vec();
    drop(first);

    let mut second = terminal(FileSessionStore::at(&path), true);
    boot(&mut second);

    assert_eq!(second.lines(), saved.as_slice());
    // History is not part of the saved session.
    assert!(second.history().is_empty());
}

#[test]
fn fresh_start_removes_session_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session-test.json");

    let mut first = terminal(FileSessionStore::at(&path), false);
    let now = boot(&mut first);
    run(&mut first, now, "about");
    assert!(path.exists());
    drop(first);

    let mut second = terminal(FileSessionStore::at(&path), false);
    second.start(Instant::now());
    assert!(!path.exists());
}

#[test]
fn clear_is_persisted_as_empty_log() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session-test.json");

    let mut terminal = terminal(FileSessionStore::at(&path), false);
    let now = boot(&mut terminal);
    run(&mut terminal, now, "clear");
    terminal.tick(now);

    let stored = FileSessionStore::at(&path).load().unwrap();
    assert_eq!(stored, Some(Vec::<TerminalLine>::new()));
}

#[test]
fn saved_file_uses_type_and_content_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session-test.json");

    let mut terminal = terminal(FileSessionStore::at(&path), false);
    let now = boot(&mut terminal);
    terminal.clear_screen();
    run(&mut terminal, now, "nope");

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"type": "input", "content": "$ nope"},
            {"type": "error", "content": "Command not found: nope. Type 'help' to see available commands."}
        ])
    );
}
