use std::cmp::Ordering;

use mazer_core::{Point, Range};

/// Counters describing the most recent A* search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes popped from the frontier and closed.
    pub expanded: usize,
    /// Entries pushed onto the frontier, including the start node and
    /// re-pushes after a cheaper path was found.
    pub pushed: usize,
    /// The search stopped at the expansion cap before exhausting the
    /// frontier.
    pub capped: bool,
}

// ---------------------------------------------------------------------------
// Internal node for A* priority-queue searches
// ---------------------------------------------------------------------------

/// Per-cell search bookkeeping: g-score, f-score and came-from link.
///
/// A node only carries meaning when its `generation` equals the current
/// search generation; otherwise it is treated as never discovered.
/// `open == false` in the current generation means the node is closed.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: f64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0.0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Frontier entry, ordered by `(f, seq)` for use in `BinaryHeap`.
///
/// `seq` is a per-search insertion counter, so entries with equal `f`
/// pop in the order they were pushed.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: f64,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, seq) first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

/// Distance of a cell the current breadth-first search has not reached.
pub(crate) const UNREACHABLE: u32 = u32::MAX;

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Central coordinator for pathfinding on a grid rectangle.
///
/// `PathRange` owns the node arrays and BFS distances so that repeated queries
/// incur no allocations after the first use. Each search bumps a generation
/// counter, which makes every query behave as if it started from empty
/// score maps.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    // A* caches
    pub(crate) astar_nodes: Vec<Node>,
    pub(crate) astar_generation: u32,
    pub(crate) max_expansions: Option<usize>,
    pub(crate) stats: SearchStats,
    // BFS distances from the last source
    pub(crate) bfs_dist: Vec<u32>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let w = rng.width().max(0) as usize;
        let len = rng.len();
        Self {
            rng,
            width: w,
            astar_nodes: vec![Node::default(); len],
            astar_generation: 0,
            max_expansions: None,
            stats: SearchStats::default(),
            bfs_dist: vec![UNREACHABLE; len],
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying range, reallocating caches as needed.
    ///
    /// If the new size fits within existing capacity, caches are preserved
    /// and only the generation counter is bumped. Otherwise caches are
    /// reallocated.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        let old_capacity = self.astar_nodes.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;

        if new_len <= old_capacity {
            self.next_generation();
            return;
        }

        self.astar_nodes.clear();
        self.astar_nodes.resize(new_len, Node::default());
        self.astar_generation = 0;

        self.bfs_dist.clear();
        self.bfs_dist.resize(new_len, UNREACHABLE);
    }

    /// Start a new A* generation, invalidating every node.
    ///
    /// Generation 0 is what fresh nodes carry, so when the counter wraps
    /// the nodes are reset and the count restarts at 1.
    pub(crate) fn next_generation(&mut self) -> u32 {
        self.astar_generation = self.astar_generation.wrapping_add(1);
        if self.astar_generation == 0 {
            self.astar_nodes.fill(Node::default());
            self.astar_generation = 1;
        }
        self.astar_generation
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Stop A* after `cap` expansions (`None` for no limit).
    ///
    /// A capped search reports no path and sets [`SearchStats::capped`].
    pub fn set_max_expansions(&mut self, cap: Option<usize>) {
        self.max_expansions = cap;
    }

    /// Statistics from the most recent [`astar_path`](Self::astar_path).
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
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
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.rng, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range = <Range as serde::Deserialize>::deserialize(deserializer)?;
        Ok(PathRange::new(range))
    }
}
