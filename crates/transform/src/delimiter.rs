//! Delimiter selection and resolution.

use serde::{Deserialize, Serialize};

/// Delimiter used when a custom delimiter is selected but left empty.
const CUSTOM_FALLBACK: &str = " ";

/// Delimiter mode without payload.
///
/// Used by the UI selector and by configuration. Pair it with the custom text
/// through [`DelimiterSelection::from_mode`] to get a resolvable selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelimiterMode {
    #[default]
    Comma,
    Semicolon,
    Tab,
    Newline,
    Space,
    Pipe,
    Custom,
}

impl DelimiterMode {
    /// All modes in selector order.
    pub const ALL: [DelimiterMode; 7] = [
        DelimiterMode::Comma,
        DelimiterMode::Semicolon,
        DelimiterMode::Tab,
        DelimiterMode::Newline,
        DelimiterMode::Space,
        DelimiterMode::Pipe,
        DelimiterMode::Custom,
    ];

    /// Short label for the selector bar
    pub fn label(self) -> &'static str {
        match self {
            DelimiterMode::Comma => "Comma",
            DelimiterMode::Semicolon => "Semicolon",
            DelimiterMode::Tab => "Tab",
            DelimiterMode::Newline => "Newline",
            DelimiterMode::Space => "Space",
            DelimiterMode::Pipe => "Pipe",
            DelimiterMode::Custom => "Custom",
        }
    }

    /// Position in [`DelimiterMode::ALL`].
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|mode| *mode == self)
            .unwrap_or_default()
    }

    /// Mode at `index` in selector order, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next mode in selector order, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

impl std::str::FromStr for DelimiterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "comma" => Ok(DelimiterMode::Comma),
            "semicolon" => Ok(DelimiterMode::Semicolon),
            "tab" => Ok(DelimiterMode::Tab),
            "newline" => Ok(DelimiterMode::Newline),
            "space" => Ok(DelimiterMode::Space),
            "pipe" => Ok(DelimiterMode::Pipe),
            "custom" => Ok(DelimiterMode::Custom),
            _ => Err(format!("Unknown delimiter mode: {}", s)),
        }
    }
}

/// Delimiter selection carrying custom text when needed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DelimiterSelection {
    #[default]
    Comma,
    Semicolon,
    Tab,
    Newline,
    Space,
    Pipe,
    /// Free-form delimiter, used literally
    Custom(String),
}

impl DelimiterSelection {
    /// Build a selection from a mode and the current custom text.
    ///
    /// `custom_text` is ignored for every mode except [`DelimiterMode::Custom`].
    pub fn from_mode(mode: DelimiterMode, custom_text: &str) -> Self {
        match mode {
            DelimiterMode::Comma => DelimiterSelection::Comma,
            DelimiterMode::Semicolon => DelimiterSelection::Semicolon,
            DelimiterMode::Tab => DelimiterSelection::Tab,
            DelimiterMode::Newline => DelimiterSelection::Newline,
            DelimiterMode::Space => DelimiterSelection::Space,
            DelimiterMode::Pipe => DelimiterSelection::Pipe,
            DelimiterMode::Custom => DelimiterSelection::Custom(custom_text.to_string()),
        }
    }

    /// Mode tag of this selection
    pub fn mode(&self) -> DelimiterMode {
        match self {
            DelimiterSelection::Comma => DelimiterMode::Comma,
            DelimiterSelection::Semicolon => DelimiterMode::Semicolon,
            DelimiterSelection::Tab => DelimiterMode::Tab,
            DelimiterSelection::Newline => DelimiterMode::Newline,
            DelimiterSelection::Space => DelimiterMode::Space,
            DelimiterSelection::Pipe => DelimiterMode::Pipe,
            DelimiterSelection::Custom(_) => DelimiterMode::Custom,
        }
    }

    /// Literal joining string.
    ///
    /// Never empty: an empty custom delimiter resolves to a single space.
    pub fn resolve(&self) -> &str {
        match self {
            DelimiterSelection::Comma => ",",
            DelimiterSelection::Semicolon => ";",
            DelimiterSelection::Tab => "\t",
            DelimiterSelection::Newline => "\n",
            DelimiterSelection::Space => " ",
            DelimiterSelection::Pipe => "|",
            DelimiterSelection::Custom(text) if text.is_empty() => CUSTOM_FALLBACK,
            DelimiterSelection::Custom(text) => text,
        }
    }
}
