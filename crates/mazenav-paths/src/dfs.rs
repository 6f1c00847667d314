use mazenav_core::Point;

use crate::model::Maze;
use crate::searcher::Searcher;

impl Searcher {
    /// Compute a depth-first path from `from` to `to`.
    ///
    /// Replays recursive descent with an explicit frame stack so depth is
    /// bounded by the cell count, not the call stack: a cell is marked
    /// visited on entry, its neighbours are tried in fixed
    /// up/right/down/left order, exhausted frames backtrack, and the first
    /// route that reaches `to` wins. The result is a valid path but carries
    /// no shortest-path guarantee. Returns `None` when every frame is
    /// exhausted without reaching `to`.
    pub fn dfs_path(&mut self, maze: &Maze, from: Point, to: Point) -> Option<Vec<Point>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;
        if maze.is_wall(from) || maze.is_wall(to) {
            return None;
        }
        if start_idx == goal_idx {
            return Some(vec![from]);
        }

        self.flood_generation = self.flood_generation.wrapping_add(1);
        let cur_gen = self.flood_generation;

        self.dfs_stack.clear();
        self.flood_mark[start_idx] = cur_gen;
        self.flood_parent[start_idx] = usize::MAX;
        self.dfs_stack.push((start_idx, 0));

        let mut found = false;

        loop {
            let (ci, dir) = match self.dfs_stack.last_mut() {
                Some(frame) => {
                    let f = *frame;
                    if f.1 < 4 {
                        frame.1 += 1;
                    }
                    f
                }
                None => break,
            };
            if dir >= 4 {
                // All four directions tried: backtrack.
                self.dfs_stack.pop();
                continue;
            }

            let np = self.point(ci).neighbors_4()[dir];
            if maze.is_wall(np) {
                continue;
            }
            let Some(ni) = self.idx(np) else {
                continue;
            };
            if self.flood_mark[ni] == cur_gen {
                continue;
            }

            // Descend: record the edge and enter the neighbour.
            self.flood_mark[ni] = cur_gen;
            self.flood_parent[ni] = ci;
            if ni == goal_idx {
                found = true;
                break;
            }
            self.dfs_stack.push((ni, 0));
        }

        if !found {
            return None;
        }
        Some(self.trace_flood_path(goal_idx))
    }
}
