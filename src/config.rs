//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a synopsis.toml, and if present we load settings
//! from there. This provides file extension preferences and whether math in
//! headings is converted to Unicode.

use facet::Facet;
use std::fs;

#[derive(Facet, Clone)]
/// User preferences loaded from synopsis.toml or falling back to defaults.
pub struct Config {
    #[facet(default = vec!["md".to_string(), "txt".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = true)]
    /// Convert `$...$` TeX math in headings to Unicode when rendering.
    pub math_unicode: bool,
}

impl Config {
    #[must_use]
    /// Load configuration from synopsis.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        if let Ok(contents) = fs::read_to_string("synopsis.toml") {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        facet_toml::from_str::<Self>("").unwrap()
    }
}
