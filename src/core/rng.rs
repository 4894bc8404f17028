//! Color sources for new and refilled tokens.
//!
//! The engine treats "produce a new color" as an opaque capability, the
//! [`ColorSource`] trait. Two sources ship with the crate:
//!
//! - [`ColorRng`]: deterministic seeded RNG (ChaCha8), the default.
//! - [`ColorCycle`]: replays a fixed sequence, for scripted boards and tests.
//!
//! ## Usage
//!
//! ```
//! use dots_engine::core::{ColorRng, ColorSource};
//!
//! let mut rng = ColorRng::new(42);
//! let mut again = ColorRng::new(42);
//!
//! // Same seed, same colors
//! assert_eq!(rng.next_color(5), again.next_color(5));
//! assert!(rng.next_color(5).is_valid(5));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::color::Color;

/// Produces colors for tokens.
///
/// Implementations must return a color in `0..num_colors`. The engine never
/// passes `num_colors == 0`.
pub trait ColorSource {
    /// Produce the next color.
    fn next_color(&mut self, num_colors: u8) -> Color;
}

impl<S: ColorSource + ?Sized> ColorSource for &mut S {
    fn next_color(&mut self, num_colors: u8) -> Color {
        (**self).next_color(num_colors)
    }
}

impl<S: ColorSource + ?Sized> ColorSource for Box<S> {
    fn next_color(&mut self, num_colors: u8) -> Color {
        (**self).next_color(num_colors)
    }
}

/// Deterministic uniform color generator.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
/// The same seed always yields the same boards and refills.
#[derive(Clone, Debug)]
pub struct ColorRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ColorRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl ColorSource for ColorRng {
    fn next_color(&mut self, num_colors: u8) -> Color {
        Color(self.inner.gen_range(0..num_colors))
    }
}

/// Replays a fixed list of colors, wrapping around at the end.
///
/// Colors are reduced modulo `num_colors`, so any list is a valid source.
///
/// ```
/// use dots_engine::core::{Color, ColorCycle, ColorSource};
///
/// let mut source = ColorCycle::new([1, 7]);
/// assert_eq!(source.next_color(5), Color(1));
/// assert_eq!(source.next_color(5), Color(2)); // 7 % 5
/// assert_eq!(source.next_color(5), Color(1));
/// ```
#[derive(Clone, Debug)]
pub struct ColorCycle {
    colors: Vec<u8>,
    cursor: usize,
}

impl ColorCycle {
    /// Create a cycle over the given colors.
    ///
    /// An empty list behaves like `[0]`.
    pub fn new(colors: impl IntoIterator<Item = u8>) -> Self {
        let mut colors: Vec<u8> = colors.into_iter().collect();
        if colors.is_empty() {
            colors.push(0);
        }
        Self { colors, cursor: 0 }
    }

    /// Number of colors handed out so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl ColorSource for ColorCycle {
    fn next_color(&mut self, num_colors: u8) -> Color {
        let raw = self.colors[self.cursor % self.colors.len()];
        self.cursor += 1;
        Color(raw % num_colors)
    }
}
