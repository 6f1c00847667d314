//! Per-cell traversal prices derived from the maze.

use mazenav_core::{Point, Range};

use crate::model::Maze;

/// Price of stepping onto a cell holding a collectible.
pub const COLLECTIBLE_PRICE: i32 = 0;
/// Price of stepping onto an ordinary open cell.
pub const VOID_PRICE: i32 = 10;
/// Sentinel price for walls. Larger than any realistic path length times
/// [`VOID_PRICE`] on the grids this engine serves, so a route that can
/// avoid walls always will.
pub const WALL_PRICE: i32 = 1000;

/// Flat row-major matrix of cell prices over the maze rectangle.
///
/// Built fresh from the live maze at the start of every cost-aware search:
/// a collectible eaten since the last call must lower the incentive it used
/// to provide.
#[derive(Debug, Clone)]
pub struct CostMatrix {
    rng: Range,
    width: usize,
    prices: Vec<i32>,
}

impl CostMatrix {
    /// Derive prices from the current wall layout and collectible set.
    pub fn build(maze: &Maze) -> Self {
        let rng = maze.bounds();
        let width = rng.width().max(0) as usize;
        let mut prices = Vec::with_capacity(rng.len());
        for p in rng.iter() {
            prices.push(if maze.is_wall(p) {
                WALL_PRICE
            } else if maze.is_collectible(p) {
                COLLECTIBLE_PRICE
            } else {
                VOID_PRICE
            });
        }
        Self { rng, width, prices }
    }

    /// The price of stepping onto `p`. Out-of-range cells price as walls.
    #[inline]
    pub fn price(&self, p: Point) -> i32 {
        if !self.rng.contains(p) {
            return WALL_PRICE;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        self.prices[y * self.width + x]
    }

    /// The rectangle the matrix covers.
    pub fn range(&self) -> Range {
        self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: &str = "\
#####
#.*.#
#####";

    #[test]
    fn prices_by_cell_kind() {
        let maze = Maze::parse(FIELD).unwrap();
        let costs = CostMatrix::build(&maze);
        assert_eq!(costs.range(), maze.bounds());
        assert_eq!(costs.price(Point::new(0, 0)), WALL_PRICE);
        assert_eq!(costs.price(Point::new(1, 1)), VOID_PRICE);
        assert_eq!(costs.price(Point::new(2, 1)), COLLECTIBLE_PRICE);
        // Out of range prices as wall.
        assert_eq!(costs.price(Point::new(-1, 0)), WALL_PRICE);
        assert_eq!(costs.price(Point::new(5, 1)), WALL_PRICE);
    }

    #[test]
    fn rebuild_reflects_eaten_collectible() {
        let mut maze = Maze::parse(FIELD).unwrap();
        let p = Point::new(2, 1);

        let before = CostMatrix::build(&maze);
        assert_eq!(before.price(p), COLLECTIBLE_PRICE);

        maze.collect(p);
        let after = CostMatrix::build(&maze);
        assert_eq!(after.price(p), VOID_PRICE);
        // The stale matrix still holds the old price; callers must rebuild.
        assert_eq!(before.price(p), COLLECTIBLE_PRICE);
    }
}
