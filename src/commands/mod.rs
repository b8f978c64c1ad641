//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod exec;
pub mod run;
pub mod themes;

use xoterm::config::Config;
use xoterm::theme::{
    ConfigThemePersistence, MemoryThemePersistence, Palette, ThemeCatalog, ThemePersistence,
    ThemeStore,
};

/// Load the user's config, falling back to defaults on any error.
///
/// Only `config show` reports config errors; everything else keeps going.
pub fn load_config_or_default() -> Config {
    match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "using default config");
            Config::default()
        }
    }
}

/// Theme store backed by `config.toml`, or memory when there is no config
/// directory.
pub fn theme_store() -> ThemeStore {
    let persistence: Box<dyn ThemePersistence> = match Config::config_path() {
        Ok(path) => Box::new(ConfigThemePersistence::new(path)),
        Err(e) => {
            tracing::warn!(error = %e, "theme changes will not be saved");
            Box::new(MemoryThemePersistence::new())
        }
    };
    ThemeStore::load(ThemeCatalog::builtin(), persistence)
}

/// Whether stdout should carry ANSI colors.
pub fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// Styles CLI output with the active palette, or not at all.
pub struct Painter {
    palette: Option<Palette>,
}

impl Painter {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette: use_color().then_some(palette),
        }
    }

    pub fn paint(&self, kind: xoterm::LineKind, text: &str) -> String {
        match &self.palette {
            Some(palette) => palette.paint(kind, text),
            None => text.to_string(),
        }
    }

    pub fn accent(&self, text: &str) -> String {
        self.paint(xoterm::LineKind::Input, text)
    }

    pub fn text(&self, text: &str) -> String {
        self.paint(xoterm::LineKind::Output, text)
    }
}
