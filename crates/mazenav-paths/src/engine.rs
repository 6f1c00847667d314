//! Strategy dispatch, timing, and the caller-facing facade.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use mazenav_core::{Point, Range};

use crate::cost::CostMatrix;
use crate::error::SearchError;
use crate::heuristic::{Estimator, Heuristic};
use crate::model::Maze;
use crate::searcher::Searcher;

/// The five search strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    Bfs,
    Dfs,
    Ucs,
    Greedy,
    AStar,
}

impl Strategy {
    /// All strategies, in dispatch order.
    pub const ALL: [Strategy; 5] = [
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::Ucs,
        Strategy::Greedy,
        Strategy::AStar,
    ];

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Ucs => "ucs",
            Self::Greedy => "greedy",
            Self::AStar => "astar",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, SearchError> {
        match s {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "ucs" => Ok(Self::Ucs),
            "greedy" => Ok(Self::Greedy),
            "astar" | "a*" => Ok(Self::AStar),
            _ => Err(SearchError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Outcome of one timed search invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Ordered cells from start to goal inclusive.
    pub path: Vec<Point>,
    /// Accumulated price for the cost-aware strategies, `None` for BFS/DFS.
    pub cost: Option<i32>,
    /// Wall-clock duration of the strategy call proper.
    pub elapsed: Duration,
}

/// Caller-facing search facade.
///
/// Owns the [`Searcher`] state and remembers the elapsed time of the last
/// invocation per strategy, so a caller can display comparative timings the
/// way the pause screen lists them. Timing is reporting only; it never
/// influences the search itself.
pub struct Navigator {
    searcher: Searcher,
    timings: [Option<Duration>; Strategy::ALL.len()],
}

impl Navigator {
    /// Create a navigator for the given maze rectangle.
    pub fn new(bounds: Range) -> Self {
        Self {
            searcher: Searcher::new(bounds),
            timings: [None; Strategy::ALL.len()],
        }
    }

    /// Create a navigator sized for `maze`.
    pub fn for_maze(maze: &Maze) -> Self {
        Self::new(maze.bounds())
    }

    /// Run `strategy` from `start` to `goal` and report the path found.
    ///
    /// The cost matrix and, for A*, the heuristic table are rebuilt from
    /// the live maze before the clock starts, so eaten collectibles shift
    /// the incentive and estimator preparation stays out of the timings.
    /// A* falls back to [`Heuristic::Manhattan`] when no heuristic is
    /// given; the other strategies ignore the argument.
    ///
    /// An exhausted frontier is reported as [`SearchError::NoPath`].
    pub fn find_path(
        &mut self,
        maze: &Maze,
        strategy: Strategy,
        start: Point,
        goal: Point,
        heuristic: Option<Heuristic>,
    ) -> Result<SearchReport, SearchError> {
        if self.searcher.range() != maze.bounds() {
            self.searcher.set_range(maze.bounds());
        }

        let (found, elapsed) = match strategy {
            Strategy::Bfs => {
                let clock = Instant::now();
                let found = self.searcher.bfs_path(maze, start, goal);
                (found.map(|p| (p, None)), clock.elapsed())
            }
            Strategy::Dfs => {
                let clock = Instant::now();
                let found = self.searcher.dfs_path(maze, start, goal);
                (found.map(|p| (p, None)), clock.elapsed())
            }
            Strategy::Ucs => {
                let costs = CostMatrix::build(maze);
                let clock = Instant::now();
                let found = self.searcher.ucs_path(maze, &costs, start, goal);
                (found.map(|(p, c)| (p, Some(c))), clock.elapsed())
            }
            Strategy::Greedy => {
                let costs = CostMatrix::build(maze);
                let clock = Instant::now();
                let found = self.searcher.greedy_path(maze, &costs, start, goal);
                (found.map(|(p, c)| (p, Some(c))), clock.elapsed())
            }
            Strategy::AStar => {
                let costs = CostMatrix::build(maze);
                let h = heuristic.unwrap_or(Heuristic::Manhattan);
                let est = Estimator::build(&mut self.searcher, maze, &costs, h, goal);
                let clock = Instant::now();
                let found = self.searcher.astar_path(maze, &costs, &est, start, goal);
                (found.map(|(p, c)| (p, Some(c))), clock.elapsed())
            }
        };

        self.timings[strategy.index()] = Some(elapsed);

        match found {
            Some((path, cost)) => {
                log::debug!(
                    "{strategy}: {} cells from {start} to {goal} in {elapsed:?}",
                    path.len()
                );
                Ok(SearchReport {
                    path,
                    cost,
                    elapsed,
                })
            }
            None => {
                log::debug!("{strategy}: no path from {start} to {goal}");
                Err(SearchError::NoPath { start, goal })
            }
        }
    }

    /// Elapsed time of the last `strategy` invocation, if any.
    pub fn last_elapsed(&self, strategy: Strategy) -> Option<Duration> {
        self.timings[strategy.index()]
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn strategy_round_trip() {
        for strategy in Strategy::ALL {
            let json = serde_json::to_string(&strategy).unwrap();
            let back: Strategy = serde_json::from_str(&json).unwrap();
            assert_eq!(strategy, back);
        }
    }

    #[test]
    fn heuristic_round_trip() {
        for h in [Heuristic::Manhattan, Heuristic::BfsHops, Heuristic::GreedyPrice] {
            let json = serde_json::to_string(&h).unwrap();
            let back: Heuristic = serde_json::from_str(&json).unwrap();
            assert_eq!(h, back);
        }
    }
}
