use std::collections::BinaryHeap;

use mazenav_core::Point;

use crate::cost::CostMatrix;
use crate::heuristic::Estimator;
use crate::model::Maze;
use crate::searcher::{QueueRef, Searcher};

impl Searcher {
    /// Compute a path from `from` to `to` guided by `est`.
    ///
    /// Open entries are keyed by `f = g + h` with insertion-order
    /// tie-breaks; finalized cells are closed via their open flag. A
    /// neighbour's record is installed on first discovery and replaced only
    /// when the tentative `g` strictly improves on the stored value,
    /// otherwise the old predecessor stays. The search stops when `to` is
    /// dequeued.
    ///
    /// With an estimate that never overestimates (Manhattan or hop-count on
    /// collectible-free grids) the accumulated price matches
    /// [`ucs_path`](Self::ucs_path); with the greedy-price estimate it
    /// deliberately may not.
    pub fn astar_path(
        &mut self,
        maze: &Maze,
        costs: &CostMatrix,
        est: &Estimator,
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
            f: est.estimate(from),
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
                    f: tentative + est.estimate(np),
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
    use crate::heuristic::Heuristic;

    const WALLED: &str = "\
#######
#...#.#
#.#...#
#.#.#.#
#...#.#
#######";

    fn estimator(s: &mut Searcher, maze: &Maze, costs: &CostMatrix, h: Heuristic, goal: Point) -> Estimator {
        Estimator::build(s, maze, costs, h, goal)
    }

    #[test]
    fn manhattan_guided_matches_ucs_cost() {
        let maze = Maze::parse(WALLED).unwrap();
        let costs = CostMatrix::build(&maze);
        let mut s = Searcher::new(maze.bounds());
        let (start, goal) = (Point::new(1, 1), Point::new(5, 4));

        let (_, ucs_total) = s.ucs_path(&maze, &costs, start, goal).unwrap();
        let est = estimator(&mut s, &maze, &costs, Heuristic::Manhattan, goal);
        let (path, astar_total) = s.astar_path(&maze, &costs, &est, start, goal).unwrap();

        assert_eq!(astar_total, ucs_total);
        assert_eq!(path[0], start);
        assert_eq!(*path.last().unwrap(), goal);
        for pair in path.windows(2) {
            assert_eq!(
                (pair[1].x - pair[0].x).abs() + (pair[1].y - pair[0].y).abs(),
                1
            );
            assert!(!maze.is_wall(pair[1]));
        }
    }

    #[test]
    fn hop_guided_matches_ucs_cost() {
        let maze = Maze::parse(WALLED).unwrap();
        let costs = CostMatrix::build(&maze);
        let mut s = Searcher::new(maze.bounds());
        let (start, goal) = (Point::new(1, 1), Point::new(5, 1));

        let (_, ucs_total) = s.ucs_path(&maze, &costs, start, goal).unwrap();
        let est = estimator(&mut s, &maze, &costs, Heuristic::BfsHops, goal);
        let (_, astar_total) = s.astar_path(&maze, &costs, &est, start, goal).unwrap();

        assert_eq!(astar_total, ucs_total);
    }

    #[test]
    fn open_room_diagonal_costs_four_steps() {
        let maze = Maze::parse(
            "\
#####
#...#
#...#
#...#
#####",
        )
        .unwrap();
        let costs = CostMatrix::build(&maze);
        let mut s = Searcher::new(maze.bounds());
        let goal = Point::new(3, 3);
        let est = estimator(&mut s, &maze, &costs, Heuristic::Manhattan, goal);
        let (path, total) = s
            .astar_path(&maze, &costs, &est, Point::new(1, 1), goal)
            .unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(total, 4 * VOID_PRICE);
    }

    #[test]
    fn greedy_estimate_still_finds_valid_path() {
        let maze = Maze::parse(WALLED).unwrap();
        let costs = CostMatrix::build(&maze);
        let mut s = Searcher::new(maze.bounds());
        let (start, goal) = (Point::new(1, 1), Point::new(5, 4));

        let est = estimator(&mut s, &maze, &costs, Heuristic::GreedyPrice, goal);
        let (path, total) = s.astar_path(&maze, &costs, &est, start, goal).unwrap();

        assert_eq!(path[0], start);
        assert_eq!(*path.last().unwrap(), goal);
        for pair in path.windows(2) {
            assert_eq!(
                (pair[1].x - pair[0].x).abs() + (pair[1].y - pair[0].y).abs(),
                1
            );
            assert!(!maze.is_wall(pair[1]));
        }
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
        let goal = Point::new(4, 1);
        let est = estimator(&mut s, &maze, &costs, Heuristic::Manhattan, goal);
        assert_eq!(
            s.astar_path(&maze, &costs, &est, Point::new(1, 1), goal),
            None
        );
    }
}
