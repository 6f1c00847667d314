use std::collections::BinaryHeap;

use mazenav_core::Point;

use crate::cost::CostMatrix;
use crate::model::Maze;
use crate::searcher::{QueueRef, Searcher};

impl Searcher {
    /// Compute the minimum accumulated-price path from `from` to `to`.
    ///
    /// Priority-queue expansion keyed by cost so far, where stepping into a
    /// cell costs that cell's [`CostMatrix`] price, so routes through
    /// collectible cells beat plain floor of the same length. Equal
    /// priorities pop in insertion order. The search stops when `to` is
    /// dequeued; since prices are non-negative the accumulated price is
    /// minimal at that point. Returns the path and its accumulated price,
    /// or `None` when the frontier empties first.
    pub fn ucs_path(
        &mut self,
        maze: &Maze,
        costs: &CostMatrix,
        from: Point,
        to: Point,
    ) -> Option<(Vec<Point>, i32)> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;
        if maze.is_wall(from) || maze.is_wall(to) {
            return None;
        }
        if start_idx == goal_idx {
            return Some((vec![from], 0));
        }

        self.cost_generation = self.cost_generation.wrapping_add(1);
        let cur_gen = self.cost_generation;

        {
            let node = &mut self.cost_nodes[start_idx];
            node.g = 0;
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<QueueRef> = BinaryHeap::new();
        self.seq = self.seq.wrapping_add(1);
        open.push(QueueRef {
            idx: start_idx,
            f: 0,
            seq: self.seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut total = None;

        while let Some(current) = open.pop() {
            let ci = current.idx;
            let cn = &self.cost_nodes[ci];
            // Skip stale entries.
            if cn.generation != cur_gen || !cn.open {
                continue;
            }
            let current_g = cn.g;
            self.cost_nodes[ci].open = false;

            if ci == goal_idx {
                total = Some(current_g);
                break;
            }

            let cp = self.point(ci);
            nbuf.clear();
            maze.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative = current_g + costs.price(np);

                let n = &mut self.cost_nodes[ni];
                if n.generation == cur_gen {
                    if tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative;
                n.parent = ci;
                n.open = true;
                self.seq = self.seq.wrapping_add(1);
                open.push(QueueRef {
                    idx: ni,
                    f: tentative,
                    seq: self.seq,
                });
            }
        }

        self.nbuf = nbuf;

        let total = total?;
        Some((self.trace_cost_path(goal_idx), total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::VOID_PRICE;

    const ROOM: &str = "\
#####
#...#
#...#
#...#
#####";

    #[test]
    fn minimum_price_in_open_room() {
        let maze = Maze::parse(ROOM).unwrap();
        let costs = CostMatrix::build(&maze);
        let mut s = Searcher::new(maze.bounds());
        let (path, total) = s
            .ucs_path(&maze, &costs, Point::new(1, 1), Point::new(3, 3))
            .unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(total, 4 * VOID_PRICE);
    }

    #[test]
    fn collectible_on_route_lowers_price() {
        let maze = Maze::parse(
            "\
#####
#...#
#.*.#
#...#
#####",
        )
        .unwrap();
        let costs = CostMatrix::build(&maze);
        let mut s = Searcher::new(maze.bounds());
        let (path, total) = s
            .ucs_path(&maze, &costs, Point::new(1, 1), Point::new(3, 3))
            .unwrap();
        // Same length as without the collectible, strictly cheaper.
        assert_eq!(path.len(), 5);
        assert_eq!(total, 3 * VOID_PRICE);
        assert!(total < 4 * VOID_PRICE);
        assert!(path.contains(&Point::new(2, 2)));
    }

    #[test]
    fn collectible_detour_beats_straight_route() {
        // The free top corridor outweighs its extra length.
        let maze = Maze::parse(
            "\
#######
#*****#
#.###.#
#.....#
#######",
        )
        .unwrap();
        let costs = CostMatrix::build(&maze);
        let mut s = Searcher::new(maze.bounds());
        let (path, total) = s
            .ucs_path(&maze, &costs, Point::new(1, 3), Point::new(5, 3))
            .unwrap();
        // Up through the collectibles: three void steps bracket five free
        // ones, beating the four-step straight corridor.
        assert_eq!(total, 3 * VOID_PRICE);
        assert!(total < 4 * VOID_PRICE);
        assert!(path.contains(&Point::new(3, 1)));
    }

    #[test]
    fn accumulated_price_matches_path_sum() {
        let maze = Maze::parse(
            "\
######
#.*..#
#.##.#
#....#
######",
        )
        .unwrap();
        let costs = CostMatrix::build(&maze);
        let mut s = Searcher::new(maze.bounds());
        let (path, total) = s
            .ucs_path(&maze, &costs, Point::new(1, 1), Point::new(4, 3))
            .unwrap();
        let summed: i32 = path[1..].iter().map(|&p| costs.price(p)).sum();
        assert_eq!(total, summed);
    }

    #[test]
    fn enclosed_goal_reports_no_path() {
        let maze = Maze::parse(
            "\
######
#..#.#
#..#.#
######",
        )
        .unwrap();
        let costs = CostMatrix::build(&maze);
        let mut s = Searcher::new(maze.bounds());
        assert_eq!(
            s.ucs_path(&maze, &costs, Point::new(1, 1), Point::new(4, 1)),
            None
        );
    }

    #[test]
    fn repeat_call_returns_same_path() {
        let maze = Maze::parse(ROOM).unwrap();
        let costs = CostMatrix::build(&maze);
        let mut s = Searcher::new(maze.bounds());
        let a = s.ucs_path(&maze, &costs, Point::new(1, 1), Point::new(3, 3));
        let b = s.ucs_path(&maze, &costs, Point::new(1, 1), Point::new(3, 3));
        assert_eq!(a, b);
    }
}
