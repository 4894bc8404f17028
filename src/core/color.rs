//! Token colors.
//!
//! A color is an opaque index in `0..num_colors`. The engine only compares
//! colors for equality; what they look like is up to the host.

use serde::{Deserialize, Serialize};

/// Color index of a token.
///
/// ```
/// use dots_engine::core::Color;
///
/// let red = Color::new(2);
/// assert_eq!(red.raw(), 2);
/// assert!(red.is_valid(5));
/// assert!(!red.is_valid(2));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Color(pub u8);

impl Color {
    /// Create a new color.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw color index.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Check if this color lies in `0..num_colors`.
    #[must_use]
    pub const fn is_valid(self, num_colors: u8) -> bool {
        self.0 < num_colors
    }
}

impl From<u8> for Color {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color({})", self.0)
    }
}
