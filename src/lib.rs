//! # dots-engine
//!
//! Rule engine for a connect-the-dots puzzle: a square grid of colored
//! tokens where the player drags a path through adjacent tokens of one
//! color, may close a loop to take every token of that color, and the
//! grid collapses and refills after each move.
//!
//! ## Design Principles
//!
//! 1. **Fixed tokens**: Tokens never move. Gravity and refill reassign
//!    colors between fixed grid slots.
//!
//! 2. **Single owner**: The engine owns the grid. Hosts read it and drive
//!    it through a narrow command surface.
//!
//! 3. **Closed outcomes**: Every path transition reports an
//!    [`AddDotStatus`]; rejection is an outcome, not an error.
//!
//! 4. **Pluggable randomness**: New colors come from a [`ColorSource`],
//!    seeded and deterministic by default.
//!
//! ## Modules
//!
//! - `core`: Colors, coordinates, tokens, color sources, configuration
//! - `board`: The token grid and column collapse
//! - `rules`: Path state machine, cycles, move commit and scoring

pub mod core;
pub mod board;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Color, Coordinate, Token,
    ColorSource, ColorRng, ColorCycle,
    EngineConfig, GameMode, ConfigError,
};

pub use crate::board::Grid;

pub use crate::rules::{AddDotStatus, PathEngine};
