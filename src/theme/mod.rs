//! Theme catalog and the active-theme store
//!
//! Themes come from `data/themes.json` (id, display name, prompt symbol and
//! colors). The catalog is parsed once; each theme's palette is resolved at
//! that point so rendering never rebuilds a color table.

pub mod palette;
pub mod store;

use std::sync::{Arc, OnceLock};

use serde::Deserialize;

pub use palette::{color_to_ansi, parse_hex_color, Palette, ANSI_RESET};
pub use store::{ConfigThemePersistence, MemoryThemePersistence, ThemePersistence, ThemeStore};

const THEMES_JSON: &str = include_str!("../../data/themes.json");

/// Id of the theme used when nothing valid was persisted.
pub const DEFAULT_THEME_ID: &str = "dark";

/// Errors in theme data.
#[derive(Debug, thiserror::Error)]
pub enum ThemeDataError {
    #[error("Invalid theme data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Theme '{theme}' has invalid {field} color '{value}'")]
    InvalidColor {
        theme: String,
        field: &'static str,
        value: String,
    },

    #[error("Theme catalog is empty")]
    Empty,
}

/// Colors as written in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThemeColors {
    pub background: String,
    pub text: String,
    pub accent: String,
    pub header: String,
    pub border: String,
    /// Preview color in the theme menu; the accent when absent
    #[serde(default)]
    pub swatch: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ThemeRecord {
    id: String,
    name: String,
    prompt: String,
    colors: ThemeColors,
}

#[derive(Debug, Deserialize)]
struct ThemesFile {
    themes: Vec<ThemeRecord>,
}

/// A named bundle of prompt symbol and color palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub prompt: String,
    pub colors: ThemeColors,
    pub palette: Palette,
}

impl Theme {
    fn from_record(record: ThemeRecord) -> Result<Self, ThemeDataError> {
        let resolve = |field: &'static str, value: &str| {
            parse_hex_color(value).ok_or_else(|| ThemeDataError::InvalidColor {
                theme: record.id.clone(),
                field,
                value: value.to_string(),
            })
        };
        let palette = Palette {
            background: resolve("background", &record.colors.background)?,
            text: resolve("text", &record.colors.text)?,
            accent: resolve("accent", &record.colors.accent)?,
            header: resolve("header", &record.colors.header)?,
            border: resolve("border", &record.colors.border)?,
            swatch: resolve(
                "swatch",
                record
                    .colors
                    .swatch
                    .as_deref()
                    .unwrap_or(&record.colors.accent),
            )?,
            ..Palette::default()
        };

        Ok(Self {
            id: record.id,
            name: record.name,
            prompt: record.prompt,
            colors: record.colors,
            palette,
        })
    }
}

/// Fixed, enumerated set of themes.
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
    default_index: usize,
}

impl ThemeCatalog {
    /// Parse a catalog from its JSON representation.
    ///
    /// The default theme is `dark` when present, otherwise the first entry.
    pub fn from_json(json: &str) -> Result<Self, ThemeDataError> {
        let file: ThemesFile = serde_json::from_str(json)?;
        let themes = file
            .themes
            .into_iter()
            .map(Theme::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_themes(themes)
    }

    pub fn from_themes(themes: Vec<Theme>) -> Result<Self, ThemeDataError> {
        if themes.is_empty() {
            return Err(ThemeDataError::Empty);
        }
        let default_index = themes
            .iter()
            .position(|t| t.id == DEFAULT_THEME_ID)
            .unwrap_or(0);
        Ok(Self {
            themes,
            default_index,
        })
    }

    /// The catalog shipped with the binary, parsed on first use.
    pub fn builtin() -> Arc<ThemeCatalog> {
        static CATALOG: OnceLock<Arc<ThemeCatalog>> = OnceLock::new();
        CATALOG
            .get_or_init(|| match Self::from_json(THEMES_JSON) {
                Ok(catalog) => Arc::new(catalog),
                Err(e) => panic!("data/themes.json is invalid: {}", e),
            })
            .clone()
    }

    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn default_theme(&self) -> &Theme {
        &self.themes[self.default_index]
    }

    /// Theme for `id`, or the default theme when `id` is unknown.
    pub fn resolve(&self, id: &str) -> &Theme {
        self.get(id).unwrap_or_else(|| self.default_theme())
    }

    /// Theme ids in catalog order.
    pub fn ids(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.id.as_str()).collect()
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }
}
