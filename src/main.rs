//! xoterm - XO_Works Terminal

mod commands;

use anyhow::Result;
use clap::Parser;

use xoterm::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging is diagnostic only; a read-only cache dir must not stop the terminal.
    if let Err(e) = xoterm::logging::init() {
        if std::env::var_os(xoterm::logging::LOG_ENV).is_some() {
            eprintln!("xoterm: logging disabled: {:#}", e);
        }
    }

    match cli.command {
        None => commands::run::handle(cli.run),
        Some(Commands::Exec { words }) => {
            if commands::exec::handle(words)? {
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Commands::Themes) => commands::themes::handle(),
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Edit => commands::config::handle_edit(),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Some(Commands::Completions { shell }) => commands::completions::handle(shell),
    }
}
