//! Search coordinator: owns the transient per-strategy caches and the
//! shared path-reconstruction machinery.

use std::collections::VecDeque;

use mazenav_core::{Point, Range};

/// Sentinel value meaning "not reached" in the hop-count map.
pub const UNREACHED: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Internal node records
// ---------------------------------------------------------------------------

/// Lazily invalidated node record for the cost-aware searches (UCS, A*).
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Heap entry ordered by priority `f`, ties broken by insertion order.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct QueueRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) seq: u64,
}

impl Ord for QueueRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (a max-heap) pops the smallest f first and,
        // among equal f, the earliest-pushed entry.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Searcher
// ---------------------------------------------------------------------------

/// Central coordinator for the search strategies over one maze rectangle.
///
/// `Searcher` owns all transient search state (frontiers, node records,
/// parent tables, scratch buffers), invalidated lazily via generation
/// counters so that repeated queries incur no allocations after the first
/// use. Each search call runs to completion on the calling thread and owns
/// this state exclusively; nothing here outlives or is shared between
/// calls.
pub struct Searcher {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    // UCS / A* node records
    pub(crate) cost_nodes: Vec<Node>,
    pub(crate) cost_generation: u32,
    pub(crate) seq: u64,
    // BFS / DFS discovery marks and parent table
    pub(crate) flood_parent: Vec<usize>,
    pub(crate) flood_mark: Vec<u32>,
    pub(crate) flood_generation: u32,
    pub(crate) flood_queue: VecDeque<usize>,
    // unweighted hop-count map (BfsHops estimator)
    pub(crate) hop_map: Vec<i32>,
    // Greedy walk stack and entered marks
    pub(crate) greedy_stack: Vec<usize>,
    pub(crate) greedy_mark: Vec<u32>,
    pub(crate) greedy_generation: u32,
    // DFS frame stack: (cell index, next direction to try)
    pub(crate) dfs_stack: Vec<(usize, usize)>,
    // shared scratch buffer for neighbour queries
    pub(crate) nbuf: Vec<Point>,
}

impl Searcher {
    /// Create a new `Searcher` for the given maze rectangle.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            width: rng.width().max(0) as usize,
            cost_nodes: vec![Node::default(); len],
            cost_generation: 0,
            seq: 0,
            flood_parent: vec![usize::MAX; len],
            flood_mark: vec![0; len],
            flood_generation: 0,
            flood_queue: VecDeque::new(),
            hop_map: vec![UNREACHED; len],
            greedy_stack: Vec::new(),
            greedy_mark: vec![0; len],
            greedy_generation: 0,
            dfs_stack: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying rectangle, reallocating caches as needed.
    ///
    /// If the new size fits within existing capacity, caches are kept and
    /// only generation counters are bumped so stale entries are ignored.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        let old_capacity = self.cost_nodes.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;

        if new_len <= old_capacity {
            self.cost_generation = self.cost_generation.wrapping_add(1);
            self.flood_generation = self.flood_generation.wrapping_add(1);
            self.greedy_generation = self.greedy_generation.wrapping_add(1);
            return;
        }

        self.cost_nodes.clear();
        self.cost_nodes.resize(new_len, Node::default());
        self.cost_generation = 0;

        self.flood_parent.clear();
        self.flood_parent.resize(new_len, usize::MAX);
        self.flood_mark.clear();
        self.flood_mark.resize(new_len, 0);
        self.flood_generation = 0;

        self.hop_map.clear();
        self.hop_map.resize(new_len, UNREACHED);

        self.greedy_mark.clear();
        self.greedy_mark.resize(new_len, 0);
        self.greedy_generation = 0;
    }

    /// The maze rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }

    // -----------------------------------------------------------------------
    // Path reconstruction
    // -----------------------------------------------------------------------

    // Both walks require that the forward pass reached `goal_idx`; the
    // strategies verify that before calling. The parent tables form trees
    // rooted at the parentless start, so each walk terminates at
    // `usize::MAX`.

    /// Resolve the cost-node parent chain into a start→goal path.
    pub(crate) fn trace_cost_path(&self, goal_idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.cost_nodes[ci].parent;
        }
        path.reverse();
        path
    }

    /// Resolve the flood parent table into a start→goal path.
    pub(crate) fn trace_flood_path(&self, goal_idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.flood_parent[ci];
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_ref_pops_smallest_f_first() {
        use std::collections::BinaryHeap;
        let mut heap = BinaryHeap::new();
        heap.push(QueueRef { idx: 0, f: 7, seq: 0 });
        heap.push(QueueRef { idx: 1, f: 3, seq: 1 });
        heap.push(QueueRef { idx: 2, f: 5, seq: 2 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop()).map(|q| q.idx).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn queue_ref_breaks_ties_by_insertion_order() {
        use std::collections::BinaryHeap;
        let mut heap = BinaryHeap::new();
        heap.push(QueueRef { idx: 9, f: 4, seq: 2 });
        heap.push(QueueRef { idx: 5, f: 4, seq: 1 });
        heap.push(QueueRef { idx: 7, f: 4, seq: 3 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop()).map(|q| q.idx).collect();
        assert_eq!(order, vec![5, 9, 7]);
    }

    #[test]
    fn set_range_smaller_preserves_capacity() {
        let mut s = Searcher::new(Range::new(0, 0, 20, 20));
        let original_cap = s.cost_nodes.len(); // 400

        let small = Range::new(0, 0, 5, 5);
        s.set_range(small);
        assert_eq!(s.range(), small);
        assert_eq!(s.cost_nodes.len(), original_cap);
        assert_eq!(s.width, 5);
        // Generations bumped so stale entries are ignored.
        assert!(s.cost_generation > 0 && s.flood_generation > 0);
    }

    #[test]
    fn set_range_larger_reallocates() {
        let mut s = Searcher::new(Range::new(0, 0, 5, 5));
        let old_cap = s.cost_nodes.len(); // 25

        let big = Range::new(0, 0, 20, 20);
        s.set_range(big);
        assert_eq!(s.range(), big);
        assert!(s.cost_nodes.len() > old_cap);
        assert_eq!(s.cost_nodes.len(), 400);
        assert_eq!(s.hop_map.len(), 400);
    }

    #[test]
    fn idx_point_round_trip() {
        let s = Searcher::new(Range::new(0, 0, 7, 5));
        for p in s.range().iter() {
            let i = s.idx(p).unwrap();
            assert_eq!(s.point(i), p);
        }
        assert_eq!(s.idx(Point::new(7, 0)), None);
        assert_eq!(s.idx(Point::new(0, 5)), None);
        assert_eq!(s.idx(Point::new(-1, -1)), None);
    }
}
