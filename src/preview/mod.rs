//! Live preview rendering.
//!
//! Turns markdown into a standalone, themed HTML document suitable for an
//! embedded web view. Rendering is pure and never fails.

mod html;
mod template;
mod theme;

pub use html::{markdown_options, markdown_to_html, markdown_to_preview_html};
pub use template::{render, CORNER_RADIUS_PX, COPY_FEEDBACK_MS, PREVIEW_TEMPLATE};
pub use theme::{
    all_styles, find_style, get_style, is_known_theme, list_theme_ids, Style, DEFAULT_THEME,
};
