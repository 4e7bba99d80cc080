//! Theme loading from TOML files.

use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::Deserialize;
use std::path::Path;

use crate::Theme;

/// Color representation in TOML: a ratatui color name or `{ rgb = [r, g, b] }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TomlColor {
    Named(String),
    Rgb { rgb: [u8; 3] },
}

impl TomlColor {
    fn to_color(&self) -> Color {
        match self {
            // Color implements FromStr for names like "LightBlue" or "#rrggbb"
            TomlColor::Named(name) => name.parse().unwrap_or(Color::Reset),
            TomlColor::Rgb { rgb } => Color::Rgb(rgb[0], rgb[1], rgb[2]),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct TomlColors {
    bg: TomlColor,
    fg: TomlColor,
    accented_bg: TomlColor,
    accented_fg: TomlColor,
    selected_bg: TomlColor,
    selected_fg: TomlColor,
    disabled: TomlColor,
    success: TomlColor,
    warning: TomlColor,
    error: TomlColor,
}

#[derive(Debug, Clone, Deserialize)]
struct TomlTheme {
    name: String,
    colors: TomlColors,
}

impl TomlTheme {
    fn into_theme(self) -> Theme {
        let c = &self.colors;
        let mut theme = Theme {
            name: "",
            bg: c.bg.to_color(),
            fg: c.fg.to_color(),
            accented_bg: c.accented_bg.to_color(),
            accented_fg: c.accented_fg.to_color(),
            selected_bg: c.selected_bg.to_color(),
            selected_fg: c.selected_fg.to_color(),
            disabled: c.disabled.to_color(),
            success: c.success.to_color(),
            warning: c.warning.to_color(),
            error: c.error.to_color(),
        };
        // Themes live for the whole run
        theme.name = Box::leak(self.name.into_boxed_str());
        theme
    }
}

/// Parse a theme from TOML content.
pub fn load_theme_from_str(content: &str) -> Result<Theme> {
    let toml_theme: TomlTheme = toml::from_str(content)?;
    Ok(toml_theme.into_theme())
}

/// Load theme from TOML file.
pub fn load_theme(path: &Path) -> Result<Theme> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read theme {}", path.display()))?;
    load_theme_from_str(&content)
}
