//! Layout state of the editor/preview split.

use serde::{Deserialize, Serialize};

/// Which panes are visible in the current layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaneLayout {
    /// Editor and preview side by side.
    Split,
    /// Preview only (reading mode).
    PreviewOnly,
}

/// Editor view state, mutated only through explicit commands.
///
/// `pane_ratio` is the share of the width given to the editor pane while in
/// split layout. The preview always remains visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    is_fullscreen: bool,
    pane_ratio: f32,
}

impl ViewState {
    pub const MIN_RATIO: f32 = 0.1;
    pub const MAX_RATIO: f32 = 0.9;
    pub const DEFAULT_RATIO: f32 = 0.5;

    pub fn new() -> Self {
        Self {
            is_fullscreen: false,
            pane_ratio: Self::DEFAULT_RATIO,
        }
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    pub fn pane_ratio(&self) -> f32 {
        self.pane_ratio
    }

    /// Switches between split layout and full-width preview.
    pub fn toggle_fullscreen(&mut self) {
        self.is_fullscreen = !self.is_fullscreen;
    }

    /// Sets the editor share of the split. Non-finite values are ignored.
    pub fn set_pane_ratio(&mut self, ratio: f32) {
        if ratio.is_finite() {
            self.pane_ratio = ratio.clamp(Self::MIN_RATIO, Self::MAX_RATIO);
        }
    }

    pub fn layout(&self) -> PaneLayout {
        if self.is_fullscreen {
            PaneLayout::PreviewOnly
        } else {
            PaneLayout::Split
        }
    }

    pub fn editor_visible(&self) -> bool {
        !self.is_fullscreen
    }

    /// Splits `total_width` into `(editor, preview)` widths for the current layout.
    pub fn pane_widths(&self, total_width: u32) -> (u32, u32) {
        if self.is_fullscreen {
            return (0, total_width);
        }
        let editor = (total_width as f32 * self.pane_ratio).round() as u32;
        let editor = editor.min(total_width);
        (editor, total_width - editor)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
