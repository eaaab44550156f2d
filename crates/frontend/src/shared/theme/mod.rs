//! Design tokens for code tabs blocks.
//!
//! Tokens are exposed as CSS custom properties on the block container, so the
//! stylesheet only references `var(--code-tabs-*)` and never branches on theme.

use contracts::shared::code_tabs::Theme;

/// Colour and spacing tokens of one theme.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ThemeTokens {
    pub background: &'static str,
    pub header_background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub muted_text: &'static str,
    pub accent: &'static str,
    /// Horizontal padding of tabs and panels.
    pub spacing_x: &'static str,
    /// Vertical padding of tabs and panels.
    pub spacing_y: &'static str,
    pub radius: &'static str,
}

const DARK: ThemeTokens = ThemeTokens {
    background: "#0d1117",
    header_background: "#161b22",
    border: "#30363d",
    text: "#e6edf3",
    muted_text: "#8b949e",
    accent: "#58a6ff",
    spacing_x: "16px",
    spacing_y: "10px",
    radius: "8px",
};

const LIGHT: ThemeTokens = ThemeTokens {
    background: "#ffffff",
    header_background: "#f6f8fa",
    border: "#d0d7de",
    text: "#1f2328",
    muted_text: "#656d76",
    accent: "#0969da",
    spacing_x: "16px",
    spacing_y: "10px",
    radius: "8px",
};

pub fn tokens(theme: Theme) -> ThemeTokens {
    match theme {
        Theme::Dark => DARK,
        Theme::Light => LIGHT,
    }
}

/// Inline `style` value declaring the theme's custom properties.
pub fn style_vars(theme: Theme) -> String {
    let t = tokens(theme);
    [
        ("bg", t.background),
        ("header-bg", t.header_background),
        ("border", t.border),
        ("text", t.text),
        ("muted", t.muted_text),
        ("accent", t.accent),
        ("space-x", t.spacing_x),
        ("space-y", t.spacing_y),
        ("radius", t.radius),
    ]
    .iter()
    .map(|(name, value)| format!("--code-tabs-{}: {};", name, value))
    .collect::<Vec<_>>()
    .join(" ")
}

/// CSS class list of the block container.
pub fn container_class(theme: Theme) -> String {
    format!("code-tabs code-tabs--{}", theme.as_str())
}
