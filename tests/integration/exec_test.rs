//! Integration tests for `xoterm exec` (one-shot interpreter)

use crate::helpers::Sandbox;

fn snapshot_output(args: &[&str], sandbox: &Sandbox) -> String {
    let (stdout, stderr, exit_code) = sandbox.run(args);
    format!(
        "=== xoterm {} ===\nExit code: {}\n\n--- stdout ---\n{}\n--- stderr ---\n{}",
        args.join(" "),
        exit_code,
        stdout,
        stderr
    )
}

// ============================================================================
// Catalog Commands
// ============================================================================

#[test]
fn exec_about_prints_catalog_output() {
    let sandbox = Sandbox::new();
    let (stdout, stderr, exit_code) = sandbox.run(&["exec", "about"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.starts_with("XO_Works is an independent IT consulting practice.\n"));
    assert!(stdout.contains("Founded by engineers"));
}

#[test]
fn exec_is_case_insensitive() {
    let sandbox = Sandbox::new();
    let (lower, _, _) = sandbox.run(&["exec", "contact"]);
    let (upper, _, exit_code) = sandbox.run(&["exec", "CONTACT"]);

    assert_eq!(exit_code, 0);
    assert_eq!(lower, upper);
    assert!(lower.contains("hello@xo.works"));
}

#[test]
fn snapshot_exec_help() {
    let sandbox = Sandbox::new();
    insta::assert_snapshot!("exec_help", snapshot_output(&["exec", "help"], &sandbox));
}

// ============================================================================
// Manual Pages
// ============================================================================

#[test]
fn snapshot_exec_man_theme() {
    let sandbox = Sandbox::new();
    insta::assert_snapshot!(
        "exec_man_theme",
        snapshot_output(&["exec", "man", "theme"], &sandbox)
    );
}

#[test]
fn exec_man_without_argument_shows_usage() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["exec", "man"]);

    assert_eq!(exit_code, 0);
    assert_eq!(
        stdout,
        "Usage: man [command]\nShow detailed manual page for a command.\n\nExample: man theme\n"
    );
}

#[test]
fn exec_man_unknown_command_fails() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["exec", "man", "LS"]);

    assert_eq!(exit_code, 1);
    assert_eq!(stdout, "No manual entry for 'ls'\n");
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn exec_unknown_command_exits_1() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["exec", "ls", "-la"]);

    assert_eq!(exit_code, 1);
    assert_eq!(
        stdout,
        "Command not found: ls. Type 'help' to see available commands.\n"
    );
}

#[test]
fn exec_requires_a_command() {
    let sandbox = Sandbox::new();
    let (_stdout, stderr, exit_code) = sandbox.run(&["exec"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("required"));
}

#[test]
fn exec_blank_line_is_a_no_op() {
    let sandbox = Sandbox::new();
    for blank in ["", "   ", "\t"] {
        let (stdout, stderr, exit_code) = sandbox.run(&["exec", blank]);

        assert_eq!(exit_code, 0, "blank input {:?}", blank);
        assert_eq!(stdout, "");
        assert_eq!(stderr, "");
    }
    assert!(!sandbox.config_path().exists());
}

// ============================================================================
// Themes
// ============================================================================

#[test]
fn exec_theme_without_argument_lists_options() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["exec", "theme"]);

    assert_eq!(exit_code, 0);
    assert_eq!(
        stdout,
        "Usage: theme [theme-name]\nTheme options: dark, green, amber, classic, light, solarized, chicago, synthwave, ubuntu\n"
    );
    assert!(!sandbox.config_path().exists());
}

#[test]
fn exec_theme_persists_to_config() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["exec", "theme", "Green"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "Theme changed to green\n");

    let config = std::fs::read_to_string(sandbox.config_path()).unwrap();
    assert!(config.contains("[theme]"));
    assert!(config.contains("id = \"green\""));

    let (themes, _, _) = sandbox.run(&["themes"]);
    assert!(themes.contains("* green"));
}

#[test]
fn exec_theme_keeps_other_config_keys() {
    let sandbox = Sandbox::new();
    std::fs::create_dir_all(sandbox.config_dir()).unwrap();
    std::fs::write(
        sandbox.config_path(),
        "# my settings\n[boot]\nspeed = 2.0\n\n[theme]\nid = \"dark\"\n",
    )
    .unwrap();

    let (_stdout, _stderr, exit_code) = sandbox.run(&["exec", "theme", "amber"]);
    assert_eq!(exit_code, 0);

    let config = std::fs::read_to_string(sandbox.config_path()).unwrap();
    assert!(config.starts_with("# my settings\n[boot]\nspeed = 2.0\n"));
    assert!(config.contains("id = \"amber\""));
    assert!(!config.contains("id = \"dark\""));
}

#[test]
fn exec_unknown_theme_changes_nothing() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["exec", "theme", "neon"]);

    assert_eq!(exit_code, 1);
    assert_eq!(
        stdout,
        "Theme not found: neon\nUsage: theme [theme-name]\nTheme options: dark, green, amber, classic, light, solarized, chicago, synthwave, ubuntu\n"
    );
    assert!(!sandbox.config_path().exists());
}

// ============================================================================
// Deferred Effects
// ============================================================================

#[test]
fn exec_clear_prints_nothing() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["exec", "clear"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "");
}

#[test]
fn exec_exit_prints_termination() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["exec", "poweroff"]);

    assert_eq!(exit_code, 0);
    assert_eq!(
        stdout,
        "Disconnecting from session...\nConnection to XO_Works terminated.\n"
    );
}

#[test]
fn exec_reboot_prints_restart_messages() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["exec", "reboot"]);

    assert_eq!(exit_code, 0);
    assert_eq!(
        stdout,
        "Restarting system...\nSystem is restarting...\n\n"
    );
}
