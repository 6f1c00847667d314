use mazenav_core::Point;

use crate::cost::CostMatrix;
use crate::model::Maze;
use crate::searcher::Searcher;

impl Searcher {
    /// Walk greedily from `from` toward `to` by local price.
    ///
    /// At each step the four neighbours are scanned in fixed
    /// up/right/down/left order; if `to` itself is adjacent the walk moves
    /// there regardless of price, otherwise the first strictly-improving
    /// open neighbour not yet entered this call wins (first-improvement, so
    /// the scan order decides ties). A step with no candidate is a dead
    /// end: the cell is closed and the walk backtracks along its stack.
    /// An empty stack means no path. Returns the walked path and its
    /// accumulated price.
    ///
    /// The walk is a local search: its accumulated price can overshoot the
    /// optimum, which is exactly the property the greedy-price estimator
    /// inherits.
    pub fn greedy_path(
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

        self.greedy_generation = self.greedy_generation.wrapping_add(1);
        let cur_gen = self.greedy_generation;

        self.greedy_stack.clear();
        self.greedy_mark[start_idx] = cur_gen;
        self.greedy_stack.push(start_idx);

        let mut found = false;

        while let Some(&ci) = self.greedy_stack.last() {
            let cp = self.point(ci);

            let mut chosen = None;
            let mut best = i32::MAX;
            for np in cp.neighbors_4() {
                if maze.is_wall(np) {
                    continue;
                }
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if ni == goal_idx {
                    // Goal short-circuit: move there unconditionally.
                    chosen = Some(ni);
                    break;
                }
                if self.greedy_mark[ni] == cur_gen {
                    continue;
                }
                let price = costs.price(np);
                if price < best {
                    best = price;
                    chosen = Some(ni);
                }
            }

            match chosen {
                Some(ni) => {
                    self.greedy_mark[ni] = cur_gen;
                    self.greedy_stack.push(ni);
                    if ni == goal_idx {
                        found = true;
                        break;
                    }
                }
                None => {
                    // Dead end: close the cell and backtrack.
                    self.greedy_stack.pop();
                }
            }
        }

        if !found {
            return None;
        }

        let path: Vec<Point> = self.greedy_stack.iter().map(|&i| self.point(i)).collect();
        let total = path[1..].iter().map(|&p| costs.price(p)).sum();
        Some((path, total))
    }
}
