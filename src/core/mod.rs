//! Core value types: colors, coordinates, tokens, color sources, configuration.
//!
//! Everything here is independent of the path rules and usable on its own.

pub mod color;
pub mod coordinate;
pub mod token;
pub mod rng;
pub mod config;
pub mod error;

pub use color::Color;
pub use coordinate::Coordinate;
pub use token::Token;
pub use rng::{ColorCycle, ColorRng, ColorSource};
pub use config::{
    EngineConfig, GameMode, DEFAULT_GRID_SIZE, DEFAULT_NUM_COLORS, INITIAL_MOVES, INITIAL_SECONDS,
    MAX_GRID_SIZE,
};
pub use error::ConfigError;
