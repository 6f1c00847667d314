use mazenav_core::Point;

use crate::model::Maze;
use crate::searcher::{Searcher, UNREACHED};

impl Searcher {
    /// Compute the shortest path by hop count from `from` to `to`.
    ///
    /// FIFO expansion over the non-wall cardinal neighbours in fixed
    /// up/right/down/left order. A cell's predecessor is recorded when it is
    /// first enqueued and the search stops as soon as `to` is dequeued;
    /// because every step costs one hop, the resulting path is shortest by
    /// move count. Returns `None` when the frontier empties without
    /// reaching `to`.
    pub fn bfs_path(&mut self, maze: &Maze, from: Point, to: Point) -> Option<Vec<Point>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;
        if maze.is_wall(from) || maze.is_wall(to) {
            return None;
        }
        if start_idx == goal_idx {
            return Some(vec![from]);
        }

        // Bump generation to lazily invalidate all discovery marks.
        self.flood_generation = self.flood_generation.wrapping_add(1);
        let cur_gen = self.flood_generation;

        self.flood_queue.clear();
        self.flood_mark[start_idx] = cur_gen;
        self.flood_parent[start_idx] = usize::MAX;
        self.flood_queue.push_back(start_idx);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(ci) = self.flood_queue.pop_front() {
            if ci == goal_idx {
                found = true;
                break;
            }
            let cp = self.point(ci);

            nbuf.clear();
            maze.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.flood_mark[ni] == cur_gen {
                    // Already visited or already enqueued.
                    continue;
                }
                self.flood_mark[ni] = cur_gen;
                self.flood_parent[ni] = ci;
                self.flood_queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;

        if !found {
            return None;
        }
        Some(self.trace_flood_path(goal_idx))
    }

    /// Flood the hop-count map from `goal` over open cells.
    ///
    /// After this call every cell connected to `goal` holds the number of
    /// cardinal steps separating it from `goal`; all other cells hold
    /// [`UNREACHED`]. On an undirected grid this equals running one
    /// unweighted BFS from each cell to the goal, at a fraction of the work.
    pub fn hop_flood(&mut self, maze: &Maze, goal: Point) -> &[i32] {
        for v in self.hop_map.iter_mut() {
            *v = UNREACHED;
        }

        let Some(gi) = self.idx(goal) else {
            return &self.hop_map;
        };
        if maze.is_wall(goal) {
            return &self.hop_map;
        }

        self.flood_queue.clear();
        self.hop_map[gi] = 0;
        self.flood_queue.push_back(gi);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = self.flood_queue.pop_front() {
            let dist = self.hop_map[ci];
            let cp = self.point(ci);

            nbuf.clear();
            maze.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.hop_map[ni] != UNREACHED {
                    continue;
                }
                self.hop_map[ni] = dist + 1;
                self.flood_queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;
        &self.hop_map
    }
}
