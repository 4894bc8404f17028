//! Grid tokens.
//!
//! A token is the content of one grid slot. Tokens are created once, at
//! engine construction, and never move: gravity and refill only reassign
//! colors between tokens. The `selected` flag mirrors path membership for
//! the host's renderer and has no effect on the rules.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::coordinate::Coordinate;
use super::rng::ColorSource;

/// One colored cell at a fixed grid position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    coordinate: Coordinate,
    color: Color,
    selected: bool,
}

impl Token {
    /// Create an unselected token.
    #[must_use]
    pub const fn new(coordinate: Coordinate, color: Color) -> Self {
        Self {
            coordinate,
            color,
            selected: false,
        }
    }

    /// Grid slot of this token.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Current color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Replace the color with one drawn from `source`.
    pub fn randomize_color(&mut self, source: &mut impl ColorSource, num_colors: u8) {
        self.color = source.next_color(num_colors);
    }

    /// Check if `other` sits one row or one column away.
    ///
    /// Diagonal neighbors and the token itself are not adjacent.
    #[must_use]
    pub const fn is_adjacent(&self, other: &Token) -> bool {
        self.coordinate.is_adjacent(other.coordinate)
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }
}
