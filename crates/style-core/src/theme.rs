use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::color::Color;
use crate::error::StyleError;

/// Stock palette used when no theme file overrides it.
pub const DEFAULT_PALETTE: &[(&str, &str)] = &[
    ("blue", "#228be6"),
    ("gray", "#495057"),
    ("pink", "#f06595"),
];

/// Mapping from semantic color name to a concrete CSS color value.
///
/// Provided once at the application root and only read afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Theme {
    pub palette: BTreeMap<String, String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }
}

impl Theme {
    pub fn new(palette: BTreeMap<String, String>) -> Self {
        Self { palette }
    }

    /// Look up a palette entry by name.
    pub fn color(&self, name: &str) -> Result<&str, StyleError> {
        self.palette
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| StyleError::unknown_color(name, self.palette.keys()))
    }

    /// Check that every palette value is a parseable color.
    pub fn validate(&self) -> Result<(), StyleError> {
        for value in self.palette.values() {
            Color::parse(value)?;
        }
        Ok(())
    }

    /// Parse a theme from TOML (see [`ThemeConfig`]) and validate it.
    pub fn from_toml_str(contents: &str) -> Result<Self, StyleError> {
        let config: ThemeConfig =
            toml::from_str(contents).map_err(|e| StyleError::config(e.to_string()))?;
        let theme = config.theme.resolve();
        theme.validate()?;
        Ok(theme)
    }
}

/// Top-level structure of a theme file:
///
/// ```toml
/// [theme]
/// replace_defaults = false
///
/// [theme.palette]
/// blue = "#1c7ed6"
/// teal = "#12b886"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ThemeConfig {
    #[serde(default)]
    pub theme: ThemeSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ThemeSection {
    /// When false, entries are merged over [`DEFAULT_PALETTE`].
    #[serde(default)]
    pub replace_defaults: bool,
    #[serde(default)]
    pub palette: BTreeMap<String, String>,
}

impl ThemeSection {
    fn resolve(self) -> Theme {
        if self.replace_defaults {
            return Theme::new(self.palette);
        }
        let mut theme = Theme::default();
        theme.palette.extend(self.palette);
        theme
    }
}

/// Read a theme file, falling back to [`Theme::default`] when the file is
/// missing, unparseable or contains invalid colors.
pub fn load_theme(path: impl AsRef<Path>) -> Theme {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(contents) => match Theme::from_toml_str(&contents) {
            Ok(theme) => {
                tracing::info!(path = %path.display(), colors = theme.palette.len(), "theme loaded");
                theme
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "invalid theme file, using default palette");
                Theme::default()
            }
        },
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "theme file not found, using default palette");
            Theme::default()
        }
    }
}
