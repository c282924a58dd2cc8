//! Preview color themes.

use std::sync::OnceLock;

use serde::Serialize;

/// Identifier of the theme used when a lookup misses.
pub const DEFAULT_THEME: &str = "light";

/// Named color parameters for one preview theme.
///
/// Values are CSS color expressions and are substituted verbatim into the
/// preview stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Style {
    pub id: &'static str,
    /// Human-readable name shown in theme pickers and the status bar.
    pub name: &'static str,
    pub background_color: &'static str,
    pub text_color: &'static str,
    pub heading_color: &'static str,
    pub code_bg: &'static str,
    pub blockquote_bg: &'static str,
    pub scrollbar_track: &'static str,
    pub scrollbar_thumb: &'static str,
    pub scrollbar_thumb_hover: &'static str,
    pub link_color: &'static str,
}

/// The theme catalog, in display order. The first entry is the default.
static THEMES: &[Style] = &[
    Style {
        id: "light",
        name: "Light",
        background_color: "transparent",
        text_color: "#333333",
        heading_color: "#2c3e50",
        code_bg: "rgba(240, 240, 240, 0.8)",
        blockquote_bg: "rgba(240, 240, 240, 0.5)",
        scrollbar_track: "#f1f1f1",
        scrollbar_thumb: "#c1c1c1",
        scrollbar_thumb_hover: "#a8a8a8",
        link_color: "#3498db",
    },
    Style {
        id: "dark",
        name: "Dark",
        background_color: "#2d2d2d",
        text_color: "#e0e0e0",
        heading_color: "#ffffff",
        code_bg: "rgba(255, 255, 255, 0.1)",
        blockquote_bg: "rgba(255, 255, 255, 0.05)",
        scrollbar_track: "#3d3d3d",
        scrollbar_thumb: "#5d5d5d",
        scrollbar_thumb_hover: "#7d7d7d",
        link_color: "#64b5f6",
    },
    Style {
        id: "github",
        name: "GitHub",
        background_color: "#ffffff",
        text_color: "#24292e",
        heading_color: "#24292e",
        code_bg: "#f6f8fa",
        blockquote_bg: "#f6f8fa",
        scrollbar_track: "#f1f1f1",
        scrollbar_thumb: "#c1c1c1",
        scrollbar_thumb_hover: "#a8a8a8",
        link_color: "#0366d6",
    },
    Style {
        id: "solarized",
        name: "Solarized",
        background_color: "#fdf6e3",
        text_color: "#657b83",
        heading_color: "#586e75",
        code_bg: "#eee8d5",
        blockquote_bg: "#eee8d5",
        scrollbar_track: "#e6dfc2",
        scrollbar_thumb: "#d3ceb8",
        scrollbar_thumb_hover: "#c7c2b0",
        link_color: "#268bd2",
    },
    Style {
        id: "chinese",
        name: "Chinese Ink",
        background_color: "#f9f2e8",
        text_color: "#8b4513",
        heading_color: "#a0522d",
        code_bg: "rgba(160, 82, 45, 0.1)",
        blockquote_bg: "rgba(160, 82, 45, 0.05)",
        scrollbar_track: "#f0e6d2",
        scrollbar_thumb: "#d4a76a",
        scrollbar_thumb_hover: "#b8860b",
        link_color: "#cd853f",
    },
    Style {
        id: "midnight",
        name: "Midnight Blue",
        background_color: "#1a237e",
        text_color: "#e3f2fd",
        heading_color: "#ffffff",
        code_bg: "rgba(255, 255, 255, 0.1)",
        blockquote_bg: "rgba(255, 255, 255, 0.05)",
        scrollbar_track: "#283593",
        scrollbar_thumb: "#3949ab",
        scrollbar_thumb_hover: "#303f9f",
        link_color: "#82b1ff",
    },
    Style {
        id: "forest",
        name: "Forest Green",
        background_color: "#1b5e20",
        text_color: "#e8f5e8",
        heading_color: "#ffffff",
        code_bg: "rgba(255, 255, 255, 0.1)",
        blockquote_bg: "rgba(255, 255, 255, 0.05)",
        scrollbar_track: "#2e7d32",
        scrollbar_thumb: "#388e3c",
        scrollbar_thumb_hover: "#2e7d32",
        link_color: "#81c784",
    },
    Style {
        id: "ocean",
        name: "Ocean Blue",
        background_color: "#01579b",
        text_color: "#e1f5fe",
        heading_color: "#ffffff",
        code_bg: "rgba(255, 255, 255, 0.1)",
        blockquote_bg: "rgba(255, 255, 255, 0.05)",
        scrollbar_track: "#0277bd",
        scrollbar_thumb: "#0288d1",
        scrollbar_thumb_hover: "#039be5",
        link_color: "#4fc3f7",
    },
    Style {
        id: "purple",
        name: "Purple",
        background_color: "#4a148c",
        text_color: "#f3e5f5",
        heading_color: "#ffffff",
        code_bg: "rgba(255, 255, 255, 0.1)",
        blockquote_bg: "rgba(255, 255, 255, 0.05)",
        scrollbar_track: "#6a1b9a",
        scrollbar_thumb: "#7b1fa2",
        scrollbar_thumb_hover: "#4a148c",
        link_color: "#ba68c8",
    },
    Style {
        id: "neon",
        name: "Neon",
        background_color: "#1a1a2e",
        text_color: "#f0f0f0",
        heading_color: "#00ffea",
        code_bg: "rgba(0, 255, 234, 0.1)",
        blockquote_bg: "rgba(0, 255, 234, 0.05)",
        scrollbar_track: "#16213e",
        scrollbar_thumb: "#0f3460",
        scrollbar_thumb_hover: "#1a1a2e",
        link_color: "#00ffea",
    },
];

/// Returns the theme identifiers in display order.
pub fn list_theme_ids() -> &'static [&'static str] {
    static IDS: OnceLock<Vec<&'static str>> = OnceLock::new();
    IDS.get_or_init(|| THEMES.iter().map(|style| style.id).collect())
}

/// Returns every theme record in display order.
pub fn all_styles() -> &'static [Style] {
    THEMES
}

/// Looks up a theme by identifier, returning `None` for unknown ids.
pub fn find_style(theme_id: &str) -> Option<&'static Style> {
    THEMES.iter().find(|s| s.id == theme_id)
}

/// Gets the style record for a theme.
///
/// Unknown identifiers resolve to the [`DEFAULT_THEME`] record; a lookup
/// never fails.
///
/// # Example
///
/// ```
/// use mdpane::preview::get_style;
///
/// assert_eq!(get_style("dark").background_color, "#2d2d2d");
/// assert_eq!(get_style("no-such-theme").id, "light");
/// ```
pub fn get_style(theme_id: &str) -> &'static Style {
    find_style(theme_id).unwrap_or(&THEMES[0])
}

/// Returns true if `theme_id` names a theme in the catalog.
pub fn is_known_theme(theme_id: &str) -> bool {
    find_style(theme_id).is_some()
}
