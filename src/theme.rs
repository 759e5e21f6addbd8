// Light/dark theme and the terminal palette derived from it

use colored::Color;
use serde::{Deserialize, Serialize};

/// Color scheme toggle, independent of the todo list itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark text for light terminals.
    #[default]
    Light,
    /// Bright text for dark terminals.
    Dark,
}

impl ThemeMode {
    /// The other theme.
    pub fn toggle(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Palette used to render the page under this theme.
    pub fn palette(self) -> Palette {
        Palette::for_theme(self)
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme: {} (expected light or dark)", other)),
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

/// Semantic colors the renderer applies to page elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Page title.
    pub header: Color,
    /// Text of an item still to do.
    pub text: Color,
    /// Text of a completed item.
    pub done: Color,
    /// Checkboxes and the active filter label.
    pub accent: Color,
    /// Footer hints and inactive filter labels.
    pub hint: Color,
}

impl Palette {
    /// The fixed palette for a theme.
    pub fn for_theme(theme: ThemeMode) -> Self {
        match theme {
            ThemeMode::Light => Palette {
                header: Color::Blue,
                text: Color::Black,
                done: Color::BrightBlack,
                accent: Color::Magenta,
                hint: Color::BrightBlack,
            },
            ThemeMode::Dark => Palette {
                header: Color::BrightCyan,
                text: Color::White,
                done: Color::BrightBlack,
                accent: Color::BrightMagenta,
                hint: Color::BrightBlack,
            },
        }
    }
}
