//! Command-line interface definitions
//!
//! Shared between the binary and `xtask` (man page generation).

use std::sync::OnceLock;

use clap::{Args, Parser, Subcommand};

/// Version shown by `--version`: package version plus build metadata.
pub fn long_version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| {
        let mut version = env!("CARGO_PKG_VERSION").to_string();
        if let Some(sha) = option_env!("VERGEN_GIT_SHA") {
            let short: String = sha.chars().take(8).collect();
            version.push_str(&format!(" ({})", short));
        }
        if let Some(date) = option_env!("XOTERM_BUILD_DATE") {
            version.push_str(&format!(" built {}", date));
        }
        if let Some(repo) = option_env!("XOTERM_REPO_NAME") {
            version.push_str(&format!("\nrepository: {}", repo));
        }
        version
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "xoterm",
    version,
    long_version = long_version(),
    about = "XO_Works Terminal - a simulated command-line landing page",
    long_about = "XO_Works Terminal - a simulated command-line landing page.\n\n\
        Without a subcommand, opens the interactive terminal: a short boot\n\
        sequence, then a prompt that answers a handful of commands\n\
        (help, about, services, contact, theme, man, clear, exit, reboot)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub run: RunArgs,
}

/// Options for the interactive terminal.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RunArgs {
    /// Restore the saved session of this shell instead of starting fresh
    #[arg(long)]
    pub resume: bool,

    /// Skip the boot sequence and start at the prompt
    #[arg(long)]
    pub no_boot: bool,

    /// Use this theme for this run only (not saved)
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one command non-interactively and print its output
    Exec {
        /// The command line, e.g. `xoterm exec man theme`
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// List the available themes
    Themes,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Show the current configuration as TOML
    Show,
    /// Open the configuration file in $EDITOR
    Edit,
    /// Print the configuration file path
    Path,
}
