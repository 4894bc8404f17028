//! Path engine: path building, cycle completion, collapse and refill.
//!
//! The engine is the single owner of the grid. A host drives it from drag
//! gestures:
//!
//! 1. pointer down / move → [`PathEngine::add_dot_to_path`] for each token hit
//! 2. pointer up → [`PathEngine::finish_move`], then [`PathEngine::clear_dot_path`]
//!
//! ```
//! use dots_engine::core::{Color, ColorCycle, Coordinate, EngineConfig, GameMode};
//! use dots_engine::rules::{AddDotStatus, PathEngine};
//!
//! let config = EngineConfig::new(GameMode::Moves).with_grid_size(2);
//! let rows = vec![vec![Color(0), Color(0)], vec![Color(1), Color(2)]];
//! let mut engine = PathEngine::from_layout(config, &rows, ColorCycle::new([3])).unwrap();
//!
//! assert_eq!(engine.add_dot_to_path(Coordinate::new(0, 0)), AddDotStatus::Added);
//! assert_eq!(engine.add_dot_to_path(Coordinate::new(1, 0)), AddDotStatus::Added);
//! assert_eq!(engine.finish_move(), 2);
//! engine.clear_dot_path();
//!
//! assert_eq!(engine.score(), 2);
//! assert!(engine.dot_path().is_empty());
//! ```

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use super::outcome::AddDotStatus;
use crate::board::Grid;
use crate::core::{Color, ColorRng, ColorSource, ConfigError, Coordinate, EngineConfig, GameMode, Token};

/// Inline capacity of the path; longer drags spill to the heap.
const PATH_INLINE: usize = 16;

/// Rule engine for one grid.
///
/// Generic over the [`ColorSource`] used for the initial board, new games
/// and refills. Defaults to the seeded [`ColorRng`].
#[derive(Clone, Debug)]
pub struct PathEngine<S: ColorSource = ColorRng> {
    config: EngineConfig,
    grid: Grid,
    /// Current drag, in gesture order (row order after `finish_move`).
    path: SmallVec<[Coordinate; PATH_INLINE]>,
    /// Same coordinates as `path`, for O(1) membership checks.
    members: FxHashSet<Coordinate>,
    score: u32,
    source: S,
}

impl PathEngine<ColorRng> {
    /// Default 6×6, five-color engine with a seeded RNG.
    #[must_use]
    pub fn with_seed(mode: GameMode, seed: u64) -> Self {
        let config = EngineConfig::new(mode);
        let mut source = ColorRng::new(seed);
        let grid = Grid::random(config.grid_size, config.num_colors, &mut source);
        Self::assemble(config, grid, source)
    }
}

impl<S: ColorSource> PathEngine<S> {
    /// Create an engine whose initial colors are drawn from `source`.
    pub fn new(config: EngineConfig, mut source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::random(config.grid_size, config.num_colors, &mut source);
        Ok(Self::assemble(config, grid, source))
    }

    /// Create an engine with explicit starting colors, `rows[y][x]`.
    ///
    /// `source` is only used for later refills and new games.
    pub fn from_layout(config: EngineConfig, rows: &[Vec<Color>], source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        if rows.len() != config.grid_size {
            return Err(ConfigError::LayoutRowCount {
                expected: config.grid_size,
                actual: rows.len(),
            });
        }
        let grid = Grid::from_layout(rows, config.num_colors)?;
        Ok(Self::assemble(config, grid, source))
    }

    fn assemble(config: EngineConfig, grid: Grid, source: S) -> Self {
        debug!(size = config.grid_size, colors = config.num_colors, mode = %config.mode, "engine created");
        Self {
            config,
            grid,
            path: SmallVec::new(),
            members: FxHashSet::default(),
            score: 0,
            source,
        }
    }

    /// Start over: score back to zero, every token recolored in place.
    ///
    /// Any in-progress path is dropped.
    pub fn new_game(&mut self) {
        self.clear_dot_path();
        self.grid.clear_selection();
        self.grid.randomize_all(&mut self.source, self.config.num_colors);
        self.score = 0;
        info!(mode = %self.config.mode, "new game");
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn game_mode(&self) -> GameMode {
        self.config.mode
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Read-only view of the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Token at column `x`, row `y`.
    #[must_use]
    pub fn dot(&self, x: usize, y: usize) -> Option<&Token> {
        self.grid.get(Coordinate::new(x, y))
    }

    /// Current path.
    ///
    /// After [`finish_move`](Self::finish_move) this still holds the
    /// committed (now stale) coordinates until the path is cleared.
    #[must_use]
    pub fn dot_path(&self) -> &[Coordinate] {
        &self.path
    }

    /// Check if `coordinate` is on the current path.
    #[must_use]
    pub fn in_path(&self, coordinate: Coordinate) -> bool {
        self.members.contains(&coordinate)
    }

    /// Number of tokens of `color` on the grid.
    #[must_use]
    pub fn color_count(&self, color: Color) -> usize {
        self.grid.color_count(color)
    }

    /// The color source used for refills.
    pub fn source(&self) -> &S {
        &self.source
    }

    // === Path building ===

    fn push(&mut self, coordinate: Coordinate) {
        if let Some(token) = self.grid.get_mut(coordinate) {
            token.set_selected(true);
        }
        self.path.push(coordinate);
        self.members.insert(coordinate);
    }

    fn pop(&mut self) -> Option<Coordinate> {
        let coordinate = self.path.pop()?;
        self.members.remove(&coordinate);
        if let Some(token) = self.grid.get_mut(coordinate) {
            token.set_selected(false);
        }
        Some(coordinate)
    }

    /// Offer the token at `candidate` to the path.
    ///
    /// - Empty path: always added.
    /// - New token: added if it matches the last token's color and is
    ///   adjacent to it.
    /// - The second-to-last token: backtrack, the last token is removed.
    /// - Any other path token adjacent to the last one closes a loop: the
    ///   path becomes every token of that color on the grid.
    ///
    /// Everything else, including off-grid coordinates, is rejected.
    pub fn add_dot_to_path(&mut self, candidate: Coordinate) -> AddDotStatus {
        let Some(color) = self.grid.get(candidate).map(Token::color) else {
            warn!(%candidate, size = self.grid.size(), "candidate outside the grid");
            return AddDotStatus::Rejected;
        };

        let status = self.transition(candidate, color);
        debug!(%candidate, %status, len = self.path.len(), "path transition");
        status
    }

    fn transition(&mut self, candidate: Coordinate, color: Color) -> AddDotStatus {
        let Some(&last) = self.path.last() else {
            self.push(candidate);
            return AddDotStatus::Added;
        };

        if !self.members.contains(&candidate) {
            if self.grid[last].color() == color && last.is_adjacent(candidate) {
                self.push(candidate);
                return AddDotStatus::Added;
            }
            return AddDotStatus::Rejected;
        }

        if self.path.len() < 2 {
            return AddDotStatus::Rejected;
        }

        let second_last = self.path[self.path.len() - 2];
        if candidate == second_last {
            self.pop();
            AddDotStatus::Removed
        } else if candidate != last && last.is_adjacent(candidate) {
            self.complete_cycle(color);
            AddDotStatus::CompleteCycle
        } else {
            AddDotStatus::Rejected
        }
    }

    /// Replace the path with every token of `color`, row by row.
    fn complete_cycle(&mut self, color: Color) {
        self.clear_dot_path();
        let matching: Vec<Coordinate> = self.grid.coordinates_with_color(color).collect();
        for coordinate in matching {
            self.push(coordinate);
        }
        info!(%color, count = self.path.len(), "cycle completed");
    }

    /// Deselect every path token and empty the path.
    pub fn clear_dot_path(&mut self) {
        while self.pop().is_some() {}
    }

    // === Committing ===

    /// Commit the current path: clear its tokens, let columns fall, refill
    /// from the top and add the path length to the score.
    ///
    /// Paths of one token or fewer are not moves; nothing happens and 0 is
    /// returned. Otherwise returns the points awarded.
    ///
    /// Tokens are collapsed top row first, so a slot cleared lower in the
    /// same column sees colors that already fell into place. The path is
    /// left in that row order and is not cleared; call
    /// [`clear_dot_path`](Self::clear_dot_path) before the next gesture.
    pub fn finish_move(&mut self) -> u32 {
        if self.path.len() <= 1 {
            return 0;
        }

        let points = self.path.len() as u32;
        self.path.sort_by_key(|c| c.y);

        for &coordinate in &self.path {
            if let Some(token) = self.grid.get_mut(coordinate) {
                token.set_selected(false);
            }
            self.grid
                .drop_column_into(coordinate, &mut self.source, self.config.num_colors);
        }

        self.score += points;
        info!(points, score = self.score, "move committed");
        points
    }
}
