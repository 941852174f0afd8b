use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Screen and wheel palette, overridable from the `[theme]` table 🎨
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub base: Color,
    pub surface: Color,
    pub overlay: Color,
    pub text: Color,
    /// Selection bar in menus
    pub highlight: Color,
    pub red: Color,
    /// Signed-in account line
    pub green: Color,
    pub yellow: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),
            surface: Color::Rgb(49, 50, 68),
            overlay: Color::Rgb(108, 112, 134),
            text: Color::Rgb(205, 214, 244),
            highlight: Color::Rgb(137, 180, 250),
            red: Color::Rgb(243, 139, 168),
            green: Color::Rgb(166, 227, 161),
            yellow: Color::Rgb(249, 226, 175),
        }
    }
}
