use serde::Deserialize;
use stroke_rom_svg::{CatalogOptions, DocumentOptions};

/// Settings read from a TOML file. Missing keys keep their defaults.
///
/// ```toml
/// [document]
/// scale = 4.0
/// add_grid = true
///
/// [catalog]
/// link_prefix = "_rom_"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub document: DocumentOptions,
    pub catalog: CatalogOptions,
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
