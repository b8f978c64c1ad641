//! Content catalog: command name to canned output
//!
//! Loaded once from `data/content.json` and read-only for the whole process.
//! Declaration order is preserved; it drives tab completion and listings.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use serde::Deserialize;

const CONTENT_JSON: &str = include_str!("../../data/content.json");

/// One command of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub description: String,
    pub output: Vec<String>,
}

#[derive(Deserialize)]
struct ContentFile {
    commands: Vec<CatalogEntry>,
}

/// Static mapping from command name to output lines.
#[derive(Debug, Clone, Default)]
pub struct ContentCatalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl ContentCatalog {
    /// Build a catalog from entries. The first entry wins on duplicate names.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        let mut unique = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());
        for entry in entries {
            if index.contains_key(&entry.name) {
                continue;
            }
            index.insert(entry.name.clone(), unique.len());
            unique.push(entry);
        }
        Self {
            entries: unique,
            index,
        }
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: ContentFile = serde_json::from_str(json)?;
        Ok(Self::from_entries(file.commands))
    }

    /// The catalog shipped with the binary, parsed on first use.
    pub fn builtin() -> Arc<ContentCatalog> {
        static CATALOG: OnceLock<Arc<ContentCatalog>> = OnceLock::new();
        CATALOG
            .get_or_init(|| match Self::from_json(CONTENT_JSON) {
                Ok(catalog) => Arc::new(catalog),
                Err(e) => panic!("data/content.json is invalid: {}", e),
            })
            .clone()
    }

    /// Exact, case-sensitive lookup on the stored key.
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Command names in declaration order.
    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// The fixed help text (output of the `help` entry).
    pub fn help_text(&self) -> &[String] {
        self.get("help").map(|e| e.output.as_slice()).unwrap_or(&[])
    }

    /// Command names starting with `prefix`, compared case-insensitively.
    pub fn complete(&self, prefix: &str) -> Vec<&str> {
        let prefix = prefix.to_lowercase();
        self.command_names()
            .filter(|name| name.to_lowercase().starts_with(&prefix))
            .collect()
    }
}
