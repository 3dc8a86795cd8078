use std::collections::BinaryHeap;

use mazer_core::Point;

use crate::PathRange;
use crate::error::PathError;
use crate::pathrange::{NodeRef, SearchStats};
use crate::traits::AstarPather;

impl PathRange {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Returns the full path (including both endpoints), `Ok(None)` if the
    /// goal cannot be reached, or an error if either endpoint lies outside
    /// the range. When `from == to` the path is `[from]`.
    ///
    /// Frontier ties on f-score are broken by insertion order. A node whose
    /// g-score improves is pushed again rather than updated in place; the
    /// outdated entry is skipped when popped because the node is closed by
    /// then.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<Option<Vec<Point>>, PathError> {
        let start_idx = self.idx(from).ok_or(PathError::StartOutOfRange(from))?;
        let goal_idx = self.idx(to).ok_or(PathError::GoalOutOfRange(to))?;

        self.stats = SearchStats::default();
        if start_idx == goal_idx {
            return Ok(Some(vec![from]));
        }

        let cur_gen = self.next_generation();

        // Initialise the start node.
        {
            let node = &mut self.astar_nodes[start_idx];
            node.g = 0;
            node.f = pather.estimate(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut seq: u64 = 0;
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: self.astar_nodes[start_idx].f,
            seq,
        });
        let mut stats = SearchStats {
            pushed: 1,
            ..SearchStats::default()
        };

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip entries for nodes closed since they were pushed.
            if !self.astar_nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            if self.max_expansions.is_some_and(|cap| stats.expanded >= cap) {
                log::warn!(
                    "A* stopped after {} expansions without reaching {}",
                    stats.expanded,
                    to
                );
                stats.capped = true;
                break 'search false;
            }

            self.astar_nodes[ci].open = false;
            stats.expanded += 1;
            let current_g = self.astar_nodes[ci].g;
            let current_point = self.point(ci);
            log::trace!("expand {} g={} f={}", current_point, current_g, current.f);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + pather.cost(current_point, np);

                let n = &mut self.astar_nodes[ni];
                if n.generation == cur_gen {
                    // Closed, or already reached at least as cheaply.
                    if !n.open || tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.f = f64::from(tentative_g) + pather.estimate(np, to);
                n.parent = ci;
                n.open = true;

                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    f: n.f,
                    seq,
                });
                stats.pushed += 1;
            }
        };

        self.nbuf = nbuf;
        self.stats = stats;

        if !found {
            log::debug!(
                "A* found no path {} -> {} ({} expanded, {} pushed)",
                from,
                to,
                stats.expanded,
                stats.pushed
            );
            return Ok(None);
        }

        // Reconstruct path.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.astar_nodes[ci].parent;
        }
        path.reverse();
        log::debug!(
            "A* found {}-step path {} -> {} ({} expanded, {} pushed)",
            path.len() - 1,
            from,
            to,
            stats.expanded,
            stats.pushed
        );
        Ok(Some(path))
    }
}
