//! The token grid.
//!
//! The grid is owned by the path engine. Hosts read it through `&Grid`;
//! every mutation goes through the engine's commands.

pub mod grid;

pub use grid::Grid;
