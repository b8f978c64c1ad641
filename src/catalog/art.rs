//! Boot banner art.

use std::sync::OnceLock;

use serde::Deserialize;

const ASCII_ART_JSON: &str = include_str!("../../data/ascii-art.json");

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArtFile {
    ascii_art: Vec<String>,
}

/// Parse banner rows from their JSON representation.
pub fn parse_banner(json: &str) -> Result<Vec<String>, serde_json::Error> {
    let file: ArtFile = serde_json::from_str(json)?;
    Ok(file.ascii_art)
}

/// The banner shipped with the binary, one entry per row.
pub fn banner() -> &'static [String] {
    static BANNER: OnceLock<Vec<String>> = OnceLock::new();
    BANNER.get_or_init(|| match parse_banner(ASCII_ART_JSON) {
        Ok(rows) => rows,
        Err(e) => panic!("data/ascii-art.json is invalid: {}", e),
    })
}
