use std::collections::VecDeque;

use mazer_core::Point;

use crate::PathRange;
use crate::error::PathError;
use crate::pathrange::UNREACHABLE;
use crate::traits::Pather;

impl PathRange {
    /// Number of unit-cost steps on a shortest path from `from` to `to`.
    ///
    /// Runs a breadth-first search that stops as soon as `to` is dequeued,
    /// so it ignores edge costs and heuristics entirely. Useful as an exact
    /// reference for [`astar_path`](Self::astar_path) on unit-cost grids.
    /// Returns `Ok(None)` if `to` cannot be reached.
    pub fn bfs_distance<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Result<Option<usize>, PathError> {
        let start_idx = self.idx(from).ok_or(PathError::StartOutOfRange(from))?;
        let goal_idx = self.idx(to).ok_or(PathError::GoalOutOfRange(to))?;

        self.bfs_dist.fill(UNREACHABLE);
        self.bfs_dist[start_idx] = 0;
        let mut queue = VecDeque::from([start_idx]);
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let dist = loop {
            let Some(ci) = queue.pop_front() else {
                break None;
            };
            let d = self.bfs_dist[ci];
            if ci == goal_idx {
                break Some(d as usize);
            }

            nbuf.clear();
            pather.neighbors(self.point(ci), &mut nbuf);
            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.bfs_dist[ni] == UNREACHABLE {
                    self.bfs_dist[ni] = d + 1;
                    queue.push_back(ni);
                }
            }
        };

        self.nbuf = nbuf;
        log::trace!("BFS {} -> {}: {:?}", from, to, dist);
        Ok(dist)
    }
}
