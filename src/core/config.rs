//! Engine configuration.
//!
//! Hosts configure the engine at startup with an [`EngineConfig`]:
//! - grid size (the grid is always square)
//! - number of distinct colors
//! - the [`GameMode`], stored for the host and never interpreted here
//!
//! ```
//! use dots_engine::core::{EngineConfig, GameMode};
//!
//! let config = EngineConfig::new(GameMode::Timed)
//!     .with_grid_size(8)
//!     .with_num_colors(4);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.tile_count(), 64);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default grid side length.
pub const DEFAULT_GRID_SIZE: usize = 6;

/// Default number of token colors.
pub const DEFAULT_NUM_COLORS: u8 = 5;

/// Largest supported grid side length.
pub const MAX_GRID_SIZE: usize = 64;

/// Starting move allowance for [`GameMode::Moves`].
pub const INITIAL_MOVES: u32 = 15;

/// Starting clock, in seconds, for [`GameMode::Timed`].
pub const INITIAL_SECONDS: u32 = 30;

/// How a game ends. Enforced by the host, not the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Play until the clock runs out.
    #[default]
    Timed,
    /// Play a fixed number of moves.
    Moves,
}

impl GameMode {
    /// Starting budget for this mode: seconds for `Timed`, moves for `Moves`.
    #[must_use]
    pub const fn initial_budget(self) -> u32 {
        match self {
            GameMode::Timed => INITIAL_SECONDS,
            GameMode::Moves => INITIAL_MOVES,
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Timed => write!(f, "Timed"),
            GameMode::Moves => write!(f, "Moves"),
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Side length of the square grid.
    pub grid_size: usize,

    /// Number of distinct colors; tokens take colors in `0..num_colors`.
    pub num_colors: u8,

    /// Game mode tag.
    pub mode: GameMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

impl EngineConfig {
    /// Create a default-sized configuration for `mode`.
    #[must_use]
    pub fn new(mode: GameMode) -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            num_colors: DEFAULT_NUM_COLORS,
            mode,
        }
    }

    /// Set the grid side length.
    #[must_use]
    pub fn with_grid_size(mut self, size: usize) -> Self {
        self.grid_size = size;
        self
    }

    /// Set the number of colors.
    #[must_use]
    pub fn with_num_colors(mut self, count: u8) -> Self {
        self.num_colors = count;
        self
    }

    /// Set the game mode.
    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Total number of grid slots.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.grid_size * self.grid_size
    }

    /// Check the configuration can back an engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::InvalidGridSize {
                actual: self.grid_size,
                max: MAX_GRID_SIZE,
            });
        }
        if self.num_colors == 0 {
            return Err(ConfigError::NoColors);
        }
        Ok(())
    }
}
