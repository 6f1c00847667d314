//! **mazenav-core**: foundational types for the maze navigation engine.
//!
//! This crate provides the geometry primitives ([`Point`], [`Range`]) and the
//! integer-cell [`Grid`] snapshot that the external maze generator hands to
//! the pathfinding crate.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range};
pub use grid::{Cell, Grid};
