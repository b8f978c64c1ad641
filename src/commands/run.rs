//! Interactive terminal session

use anyhow::{bail, Result};

use xoterm::cli::RunArgs;
use xoterm::session::{FileSessionStore, MemorySessionStore, SessionStore};
use xoterm::shell::BootTimings;
use xoterm::{ContentCatalog, Interpreter, Terminal, TerminalOptions};

use super::{load_config_or_default, theme_store};

/// Boot the terminal UI and run it until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: RunArgs) -> Result<()> {
    let config = load_config_or_default();
    let themes = theme_store();

    if let Some(id) = &args.theme {
        if !themes.contains(id) {
            bail!(
                "Unknown theme '{}'. Available themes: {}",
                id,
                themes.theme_list().join(", ")
            );
        }
    }

    if !atty::is(atty::Stream::Stdout) || !atty::is(atty::Stream::Stdin) {
        bail!("xoterm needs an interactive terminal. Use `xoterm exec <command>` for scripted use.");
    }

    let store = session_store(config.session.persist);
    let options = TerminalOptions {
        resume: args.resume,
        boot: config.boot.enabled && !args.no_boot,
        timings: BootTimings::scaled(&config.boot),
        theme_override: args.theme,
        ..TerminalOptions::default()
    };

    tracing::info!(
        resume = options.resume,
        boot = options.boot,
        "starting terminal session"
    );

    let interpreter = Interpreter::new(ContentCatalog::builtin(), themes.catalog());
    let mut terminal = Terminal::new(interpreter, themes, store, options);
    xoterm::tui::run(&mut terminal)
}

fn session_store(persist: bool) -> Box<dyn SessionStore> {
    if !persist {
        return Box::new(MemorySessionStore::new());
    }
    match FileSessionStore::for_current_session() {
        Ok(store) => {
            tracing::debug!(path = %store.path().display(), "session file");
            Box::new(store)
        }
        Err(e) => {
            tracing::warn!(error = %e, "session will not survive a restart");
            Box::new(MemorySessionStore::new())
        }
    }
}
