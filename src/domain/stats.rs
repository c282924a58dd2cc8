//! Status-bar statistics for the open document.

use serde::Serialize;

use crate::preview::get_style;

/// Encoding label shown for every document; files are always read and written as UTF-8.
pub const ENCODING_LABEL: &str = "UTF-8";

/// Counts and labels displayed in the editor status bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    /// Number of characters (Unicode scalar values).
    pub characters: usize,
    /// Number of selected characters.
    pub selected: usize,
    pub words: usize,
    pub lines: usize,
    /// Display name of the active preview theme.
    pub theme_name: &'static str,
    pub encoding: &'static str,
}

impl DocumentStats {
    /// Computes statistics for `text` with the given selection.
    ///
    /// Unknown theme ids report the default theme's name, matching what the
    /// preview actually shows.
    pub fn compute(text: &str, selection: &str, theme_id: &str) -> Self {
        Self {
            characters: text.chars().count(),
            selected: selection.chars().count(),
            words: text.split_whitespace().count(),
            lines: line_count(text),
            theme_name: get_style(theme_id).name,
            encoding: ENCODING_LABEL,
        }
    }
}

fn line_count(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        text.lines().count()
    }
}
