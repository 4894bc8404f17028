//! Path rules.
//!
//! `PathEngine` owns the grid and implements the drag state machine:
//! - building and backtracking a same-color path
//! - cycle completion (select every token of the loop's color)
//! - committing a move: collapse, refill and scoring
//!
//! Timers and move counters for the game modes live in the host.

pub mod engine;
pub mod outcome;

pub use engine::PathEngine;
pub use outcome::AddDotStatus;
