//! Search strategies and cost models for maze navigation.
//!
//! This crate computes traversal paths between two cells of a fixed
//! rectangular maze, with five interchangeable strategies:
//!
//! - **BFS** hop-optimal search ([`Searcher::bfs_path`])
//! - **DFS** first-found depth-first search ([`Searcher::dfs_path`])
//! - **UCS** minimum-price search over the cost matrix ([`Searcher::ucs_path`])
//! - **Greedy** first-improvement descent with backtracking
//!   ([`Searcher::greedy_path`])
//! - **A\*** estimator-guided minimum-price search ([`Searcher::astar_path`])
//!
//! All strategies run through [`Searcher`], which owns and reuses internal
//! caches so that repeated queries incur zero allocations after warm-up.
//! The [`Navigator`] facade dispatches by [`Strategy`] name, times every
//! invocation for strategy comparison, and reports an exhausted frontier as
//! [`SearchError::NoPath`].
//!
//! # Cost model
//!
//! Stepping into a cell costs that cell's price from the [`CostMatrix`]:
//! collectible cells are free, walls carry a prohibitive sentinel, and every
//! other open cell shares the flat [`VOID_PRICE`]. The matrix is derived
//! from the live maze at the start of every cost-aware search, so consuming
//! a collectible measurably shifts the incentive of UCS, Greedy, and A*.

mod astar;
mod bfs;
mod cost;
mod dfs;
mod distance;
mod engine;
mod error;
mod greedy;
mod heuristic;
mod model;
mod searcher;
mod ucs;

pub use cost::{COLLECTIBLE_PRICE, CostMatrix, VOID_PRICE, WALL_PRICE};
pub use distance::manhattan;
pub use engine::{Navigator, SearchReport, Strategy};
pub use error::SearchError;
pub use heuristic::{Estimator, Heuristic};
pub use model::{Maze, OPEN, ParseError, WALL};
pub use searcher::{Searcher, UNREACHED};
