//! Bounded preview/editor font size.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A font size in pixels, always within [`FontSize::MIN`]..=[`FontSize::MAX`].
///
/// Size changes happen in fixed steps of [`FontSize::STEP`] and saturate at the
/// bounds.
///
/// # Examples
///
/// ```
/// use mdpane::domain::FontSize;
///
/// let size = FontSize::default().increase();
/// assert_eq!(size.get(), 18);
///
/// // Out-of-range values are clamped
/// assert_eq!(FontSize::new(100).get(), 32);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct FontSize(u32);

impl FontSize {
    pub const MIN: u32 = 8;
    pub const MAX: u32 = 32;
    pub const DEFAULT: u32 = 16;
    pub const STEP: u32 = 2;

    /// Creates a font size, clamping to the allowed range.
    pub fn new(px: u32) -> Self {
        Self(px.clamp(Self::MIN, Self::MAX))
    }

    /// Returns the size in pixels.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Returns the next larger size, or the maximum if already there.
    #[must_use]
    pub fn increase(self) -> Self {
        Self::new(self.0.saturating_add(Self::STEP))
    }

    /// Returns the next smaller size, or the minimum if already there.
    #[must_use]
    pub fn decrease(self) -> Self {
        Self::new(self.0.saturating_sub(Self::STEP))
    }

    /// Returns the default size.
    #[must_use]
    pub fn reset(self) -> Self {
        Self::default()
    }

    pub fn is_max(self) -> bool {
        self.0 == Self::MAX
    }

    pub fn is_min(self) -> bool {
        self.0 == Self::MIN
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<u32> for FontSize {
    fn from(px: u32) -> Self {
        Self::new(px)
    }
}

impl From<FontSize> for u32 {
    fn from(size: FontSize) -> Self {
        size.0
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl fmt::Debug for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FontSize({})", self.0)
    }
}
