//! Outcome of offering a token to the path.

use serde::{Deserialize, Serialize};

/// Result of [`PathEngine::add_dot_to_path`](super::PathEngine::add_dot_to_path).
///
/// Rejection is a normal outcome, not an error: the path is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddDotStatus {
    /// Token appended to the end of the path.
    Added,
    /// Token not accepted; nothing changed.
    Rejected,
    /// Player backtracked; the last token was dropped from the path.
    Removed,
    /// Player closed a loop; the path now holds every token of that color.
    CompleteCycle,
}

impl AddDotStatus {
    /// Check if the path changed.
    #[must_use]
    pub const fn changed_path(self) -> bool {
        !matches!(self, AddDotStatus::Rejected)
    }
}

impl std::fmt::Display for AddDotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AddDotStatus::Added => "added",
            AddDotStatus::Rejected => "rejected",
            AddDotStatus::Removed => "removed",
            AddDotStatus::CompleteCycle => "complete cycle",
        };
        f.write_str(name)
    }
}
