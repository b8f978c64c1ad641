//! Integration tests for the CLI surface (help, themes, config, completions)

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::helpers::Sandbox;

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_lists_subcommands_and_run_options() {
    Sandbox::new()
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("exec"))
        .stdout(predicate::str::contains("themes"))
        .stdout(predicate::str::contains("completions"))
        .stdout(predicate::str::contains("--resume"))
        .stdout(predicate::str::contains("--no-boot"))
        .stdout(predicate::str::contains("--theme <ID>"));
}

#[test]
fn version_shows_package_version() {
    Sandbox::new()
        .command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn long_version_shows_repository() {
    Sandbox::new()
        .command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("repository: "));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    Sandbox::new()
        .command()
        .arg("frobnicate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("frobnicate"));
}

// ============================================================================
// Interactive Mode Without a Terminal
// ============================================================================

#[test]
fn run_without_tty_points_to_exec() {
    Sandbox::new()
        .command()
        .arg("--no-boot")
        .assert()
        .failure()
        .stderr(predicate::str::contains("xoterm exec"));
}

#[test]
fn run_rejects_unknown_theme() {
    Sandbox::new()
        .command()
        .args(["--theme", "neon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown theme 'neon'"))
        .stderr(predicate::str::contains("dark, green, amber, classic, light, solarized, chicago, synthwave, ubuntu"));
}

// ============================================================================
// Themes
// ============================================================================

#[test]
fn themes_marks_default_theme() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["themes"]);

    assert_eq!(exit_code, 0);
    let rows: Vec<&str> = stdout.lines().collect();
    assert_eq!(rows.len(), 9);
    assert_eq!(rows[0], "* dark       Dark           prompt $");
    assert_eq!(rows[1], "  green      Retro Green    prompt >");
    assert_eq!(rows[8], "  ubuntu     Ubuntu         prompt $");
    assert!(rows[1..].iter().all(|row| row.starts_with("  ")));
}

#[test]
fn themes_ignores_invalid_persisted_theme() {
    let sandbox = Sandbox::new();
    std::fs::create_dir_all(sandbox.config_dir()).unwrap();
    std::fs::write(sandbox.config_path(), "[theme]\nid = \"neon\"\n").unwrap();

    sandbox
        .command()
        .arg("themes")
        .assert()
        .success()
        .stdout(predicate::str::contains("* dark"));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_path_uses_config_dir_env() {
    let sandbox = Sandbox::new();
    let expected = format!("{}\n", sandbox.config_path().display());

    sandbox
        .command()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn config_show_prints_defaults() {
    Sandbox::new()
        .command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[theme]"))
        .stdout(predicate::str::contains("id = \"dark\""))
        .stdout(predicate::str::contains("[boot]"))
        .stdout(predicate::str::contains("persist = true"));
}

#[test]
fn config_show_reports_broken_file() {
    let sandbox = Sandbox::new();
    std::fs::create_dir_all(sandbox.config_dir()).unwrap();
    std::fs::write(sandbox.config_path(), "[theme\nid = ").unwrap();

    sandbox
        .command()
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn broken_config_does_not_block_exec() {
    let sandbox = Sandbox::new();
    std::fs::create_dir_all(sandbox.config_dir()).unwrap();
    std::fs::write(sandbox.config_path(), "not = [valid").unwrap();

    sandbox
        .command()
        .args(["exec", "about"])
        .assert()
        .success()
        .stdout(predicate::str::contains("XO_Works"));
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn completions_bash_mentions_subcommands() {
    Sandbox::new()
        .command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("xoterm"))
        .stdout(predicate::str::contains("exec"));
}
