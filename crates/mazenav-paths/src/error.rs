use std::fmt;

use mazenav_core::Point;

/// Errors reported by the search facade.
///
/// All variants are recoverable at the call site: the caller can fall back
/// to another strategy, fix its configuration, or simply report that no
/// path exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A strategy name that does not match any known strategy.
    UnknownStrategy(String),
    /// A heuristic name that does not match any known estimator.
    UnknownHeuristic(String),
    /// The goal is unreachable from the start under the current wall layout.
    NoPath { start: Point, goal: Point },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStrategy(name) => {
                write!(f, "unknown search strategy \u{201c}{name}\u{201d}")
            }
            Self::UnknownHeuristic(name) => {
                write!(f, "unknown heuristic \u{201c}{name}\u{201d}")
            }
            Self::NoPath { start, goal } => {
                write!(f, "no path from {start} to {goal}")
            }
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = SearchError::UnknownHeuristic("euclid".into());
        assert_eq!(e.to_string(), "unknown heuristic \u{201c}euclid\u{201d}");

        let e = SearchError::NoPath {
            start: Point::new(1, 1),
            goal: Point::new(3, 3),
        };
        assert_eq!(e.to_string(), "no path from (1, 1) to (3, 3)");
    }
}
