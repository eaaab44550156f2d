use serde::{Deserialize, Serialize};

/// Colour scheme of a code tabs block.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Returns the theme name as a string (used for CSS modifier classes).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse theme from string, falling back to the default.
    pub fn from_str(s: &str) -> Self {
        match s.trim() {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn all() -> [Theme; 2] {
        [Theme::Light, Theme::Dark]
    }
}
