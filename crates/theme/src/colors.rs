//! Theme color definitions.

use ratatui::style::Color;

/// Application theme with semantic color assignments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Theme name for display
    pub name: &'static str,

    /// Panel background
    pub bg: Color,
    /// Main text
    pub fg: Color,

    /// Status bar and selector bar background
    pub accented_bg: Color,
    /// Focused borders, badge text
    pub accented_fg: Color,

    /// Active delimiter background
    pub selected_bg: Color,
    /// Active delimiter text
    pub selected_fg: Color,

    /// Line numbers, hints, unfocused borders
    pub disabled: Color,

    /// Copy notification
    pub success: Color,
    /// Custom delimiter field
    pub warning: Color,
    /// Clipboard errors
    pub error: Color,
}

impl Theme {
    /// Built-in dark palette
    pub const DEFAULT: Theme = Theme {
        name: "default",
        bg: Color::Reset,
        fg: Color::White,
        accented_bg: Color::DarkGray,
        accented_fg: Color::Cyan,
        selected_bg: Color::Blue,
        selected_fg: Color::White,
        disabled: Color::Gray,
        success: Color::Green,
        warning: Color::Yellow,
        error: Color::Red,
    };

    /// Built-in light palette
    pub const LIGHT: Theme = Theme {
        name: "light",
        bg: Color::Rgb(250, 250, 250),
        fg: Color::Rgb(56, 58, 66),
        accented_bg: Color::Rgb(229, 229, 230),
        accented_fg: Color::Rgb(64, 120, 242),
        selected_bg: Color::Rgb(64, 120, 242),
        selected_fg: Color::Rgb(250, 250, 250),
        disabled: Color::Rgb(160, 161, 167),
        success: Color::Rgb(80, 161, 79),
        warning: Color::Rgb(193, 132, 1),
        error: Color::Rgb(228, 86, 73),
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::DEFAULT
    }
}
