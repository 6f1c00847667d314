//! Interchangeable goal-distance estimators.

use std::str::FromStr;

use mazenav_core::{Point, Range};

use crate::cost::{CostMatrix, WALL_PRICE};
use crate::distance::manhattan;
use crate::error::SearchError;
use crate::model::Maze;
use crate::searcher::{Searcher, UNREACHED};

/// Estimator strategy, selected by name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// `|dx| + |dy|` to the goal. Admissible on unit-cost grids; can
    /// overestimate across collectible (zero-price) cells.
    Manhattan,
    /// Hop count of an unweighted search to the goal. Expensive to prepare
    /// and intended for strategy comparison rather than production use.
    BfsHops,
    /// Accumulated price of a greedy walk to the goal. Not admissible in
    /// general; A* guided by it loses its optimality guarantee, which is
    /// the point of the experiment.
    GreedyPrice,
}

impl Heuristic {
    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::BfsHops => "bfs-hops",
            Self::GreedyPrice => "greedy-price",
        }
    }
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = SearchError;

    /// Fails with [`SearchError::UnknownHeuristic`] before any search
    /// starts; there is no silent default.
    fn from_str(s: &str) -> Result<Self, SearchError> {
        match s {
            "manhattan" => Ok(Self::Manhattan),
            "bfs" | "bfs-hops" => Ok(Self::BfsHops),
            "greedy" | "greedy-price" => Ok(Self::GreedyPrice),
            _ => Err(SearchError::UnknownHeuristic(s.to_string())),
        }
    }
}

enum Kind {
    Manhattan,
    Table(Vec<i32>),
}

/// A goal-fixed estimator.
///
/// Table-backed variants ([`Heuristic::BfsHops`], [`Heuristic::GreedyPrice`])
/// do all their flood/walk work in [`Estimator::build`], outside the timed
/// search region, so the strategy comparison a caller displays is not
/// polluted by estimator preparation.
pub struct Estimator {
    goal: Point,
    rng: Range,
    width: usize,
    kind: Kind,
}

impl Estimator {
    /// Build the estimator for `goal`.
    pub fn build(
        searcher: &mut Searcher,
        maze: &Maze,
        costs: &CostMatrix,
        heuristic: Heuristic,
        goal: Point,
    ) -> Estimator {
        let rng = searcher.range();
        let kind = match heuristic {
            Heuristic::Manhattan => Kind::Manhattan,
            Heuristic::BfsHops => {
                let table = searcher
                    .hop_flood(maze, goal)
                    .iter()
                    .map(|&d| if d == UNREACHED { WALL_PRICE } else { d })
                    .collect();
                Kind::Table(table)
            }
            Heuristic::GreedyPrice => {
                // One greedy walk per open cell. Cells the walk cannot
                // resolve keep the wall sentinel; forward search cannot
                // reach them either, so the value is never consulted.
                let mut table = vec![WALL_PRICE; rng.len()];
                let width = rng.width().max(0) as usize;
                for p in rng.iter() {
                    if maze.is_wall(p) {
                        continue;
                    }
                    if let Some((_, price)) = searcher.greedy_path(maze, costs, p, goal) {
                        let x = (p.x - rng.min.x) as usize;
                        let y = (p.y - rng.min.y) as usize;
                        table[y * width + x] = price;
                    }
                }
                Kind::Table(table)
            }
        };
        Estimator {
            goal,
            rng,
            width: rng.width().max(0) as usize,
            kind,
        }
    }

    /// Estimated remaining price from `p` to the goal.
    pub fn estimate(&self, p: Point) -> i32 {
        match &self.kind {
            Kind::Manhattan => manhattan(p, self.goal),
            Kind::Table(table) => {
                if !self.rng.contains(p) {
                    return WALL_PRICE;
                }
                let x = (p.x - self.rng.min.x) as usize;
                let y = (p.y - self.rng.min.y) as usize;
                table[y * self.width + x]
            }
        }
    }

    /// The goal this estimator was built for.
    pub fn goal(&self) -> Point {
        self.goal
    }
}
