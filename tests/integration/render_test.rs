//! Rendering tests against ratatui's TestBackend

use std::time::{Duration, Instant};

use ratatui::backend::TestBackend;
use ratatui::Terminal as RatatuiTerminal;

use xoterm::session::MemorySessionStore;
use xoterm::theme::MemoryThemePersistence;
use xoterm::tui::{ui, ThemeMenu};
use xoterm::{ContentCatalog, Interpreter, Terminal, TerminalOptions, ThemeCatalog, ThemeStore};

const WIDTH: u16 = 60;
const HEIGHT: u16 = 16;

fn ready_terminal() -> (Terminal, Instant) {
    let themes = ThemeStore::load(
        ThemeCatalog::builtin(),
        Box::new(MemoryThemePersistence::new()),
    );
    let interpreter = Interpreter::new(ContentCatalog::builtin(), &ThemeCatalog::builtin());
    let mut terminal = Terminal::new(
        interpreter,
        themes,
        Box::new(MemorySessionStore::new()),
        TerminalOptions {
            boot: false,
            ..TerminalOptions::default()
        },
    );
    let now = Instant::now();
    terminal.start(now);
    (terminal, now)
}

fn type_line(terminal: &mut Terminal, text: &str) {
    for c in text.chars() {
        terminal.insert_char(c);
    }
}

/// Draw one frame and return it as text rows plus the cursor position.
fn draw(terminal: &Terminal) -> (Vec<String>, (u16, u16)) {
    draw_with_menu(terminal, &ThemeMenu::new())
}

fn draw_with_menu(terminal: &Terminal, menu: &ThemeMenu) -> (Vec<String>, (u16, u16)) {
    let mut screen = RatatuiTerminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    screen
        .draw(|frame| ui::render(frame, terminal, menu, "12:34:56"))
        .unwrap();

    let rows = screen
        .backend()
        .buffer()
        .content()
        .chunks(WIDTH as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect();
    let cursor = screen.get_cursor_position().unwrap();
    (rows, (cursor.x, cursor.y))
}

#[test]
fn window_has_title_and_clock() {
    let (terminal, _) = ready_terminal();
    let (rows, _) = draw(&terminal);

    assert!(rows[0].contains(ui::WINDOW_TITLE));
    assert!(rows[0].contains("12:34:56"));
    assert!(rows[0].starts_with('╭'));
    assert!(rows[HEIGHT as usize - 1].starts_with('╰'));
}

#[test]
fn prompt_and_cursor_follow_buffer() {
    let (mut terminal, _) = ready_terminal();
    type_line(&mut terminal, "abot");
    terminal.move_left();

    let (rows, cursor) = draw(&terminal);

    assert!(rows[1].starts_with("│guest@xo.works $ abot"));
    // Border column, then "guest@xo.works $ " (17) and "abo" (3).
    assert_eq!(cursor, (1 + 17 + 3, 1));
}

#[test]
fn output_scrolls_to_keep_prompt_visible() {
    let (mut terminal, now) = ready_terminal();
    for _ in 0..3 {
        type_line(&mut terminal, "services");
        terminal.submit(now);
    }

    let (rows, cursor) = draw(&terminal);
    let last_inner = HEIGHT as usize - 2;

    assert!(rows[last_inner].starts_with("│guest@xo.works $ "));
    assert_eq!(cursor.1, last_inner as u16);
    assert!(rows[last_inner - 1].contains("Type 'contact' to start a conversation."));
}

#[test]
fn theme_change_updates_prompt() {
    let (mut terminal, now) = ready_terminal();
    type_line(&mut terminal, "theme amber");
    terminal.submit(now);
    terminal.tick(now + Duration::from_millis(10));

    let (rows, _) = draw(&terminal);

    assert!(rows[1].contains("Theme changed to amber"));
    assert!(rows[2].starts_with("│guest@xo.works % "));
}

#[test]
fn disconnected_screen_replaces_session() {
    let (mut terminal, now) = ready_terminal();
    type_line(&mut terminal, "exit");
    terminal.submit(now);
    terminal.tick(now + Duration::from_millis(800));
    assert!(terminal.is_disconnected());

    let (rows, _) = draw(&terminal);
    let text = rows.join("\n");

    assert!(text.contains(xoterm::shell::DISCONNECTED_MESSAGE));
    assert!(text.contains("quit"));
    assert!(!text.contains("guest@xo.works"));
}

#[test]
fn long_buffer_keeps_cursor_visible_at_home() {
    let (mut terminal, _) = ready_terminal();
    let inner_width = WIDTH as usize - 2;
    type_line(&mut terminal, &"x".repeat(inner_width * 20));
    terminal.move_home();

    let (rows, cursor) = draw(&terminal);

    // The prompt row scrolls to the top so the cursor stays on screen.
    assert!(rows[1].starts_with("│guest@xo.works $ xxx"));
    assert_eq!(cursor, (1 + 17, 1));
}

#[test]
fn long_buffer_keeps_cursor_visible_at_end() {
    let (mut terminal, _) = ready_terminal();
    let inner_width = WIDTH as usize - 2;
    type_line(&mut terminal, &"x".repeat(inner_width * 20));

    let (_rows, cursor) = draw(&terminal);

    // 17 + 20 * 58 chars end on the 21st wrapped row, column 17; the last
    // inner row is row 14.
    assert_eq!(cursor, (1 + 17, HEIGHT - 2));
}

#[test]
fn theme_menu_lists_themes_with_current_marked() {
    let (mut terminal, _) = ready_terminal();
    type_line(&mut terminal, "ab");
    let mut menu = ThemeMenu::new();
    menu.open(&terminal);

    let (rows, _) = draw_with_menu(&terminal, &menu);
    let text = rows.join("\n");

    assert!(text.contains("Select Theme"));
    assert!(text.contains("> ██ Dark (current)"));
    assert!(text.contains("  ██ Retro Green"));
    assert!(text.contains("  ██ Ubuntu"));
    assert!(text.contains("Enter: apply | Esc: close"));
}

#[test]
fn theme_menu_highlights_focus_and_paints_swatches() {
    let (terminal, _) = ready_terminal();
    let mut menu = ThemeMenu::new();
    menu.open(&terminal);
    let mut screen = RatatuiTerminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    screen
        .draw(|frame| ui::render(frame, &terminal, &menu, "12:34:56"))
        .unwrap();

    let cells = screen.backend().buffer().content();
    let row = |y: usize| -> String {
        cells[y * WIDTH as usize..(y + 1) * WIDTH as usize]
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    };
    // The popup spans the middle 36 columns; Dark is the third inner row.
    let dark_row = (0..HEIGHT as usize)
        .find(|&y| row(y).contains("Dark (current)"))
        .unwrap();
    let ubuntu_row = (0..HEIGHT as usize)
        .find(|&y| row(y).contains("Ubuntu"))
        .unwrap();
    let swatch_x = 12 + 1 + 2;

    let dark = terminal.theme().palette;
    let ubuntu = &terminal.themes()[8].palette;
    assert_eq!(cells[dark_row * WIDTH as usize + swatch_x].fg, dark.swatch);
    assert_eq!(cells[ubuntu_row * WIDTH as usize + swatch_x].fg, ubuntu.swatch);
    // The focused row is drawn in reverse: background on accent.
    assert_eq!(cells[dark_row * WIDTH as usize + swatch_x - 2].bg, dark.accent);
    assert_ne!(cells[ubuntu_row * WIDTH as usize + swatch_x - 2].bg, dark.accent);
}

#[test]
fn closed_theme_menu_draws_nothing() {
    let (terminal, _) = ready_terminal();
    let (rows, _) = draw_with_menu(&terminal, &ThemeMenu::new());
    assert!(!rows.join("\n").contains("Select Theme"));
}
