use mazer_core::Point;
use mazer_grid::Maze;

use crate::config::SearchConfig;
use crate::error::PathError;
use crate::pathrange::{PathRange, SearchStats};
use crate::traits::MazePather;

/// Outcome of [`solve`].
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Start-to-goal path, or `None` if the goal is unreachable (or the
    /// expansion cap was hit, see [`SearchStats::capped`]).
    pub path: Option<Vec<Point>>,
    pub stats: SearchStats,
}

impl Solution {
    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of moves along the path.
    pub fn steps(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len() - 1)
    }
}

/// Find a shortest path from the maze's start to its goal.
pub fn solve(maze: &Maze, config: &SearchConfig) -> Result<Solution, PathError> {
    let mut pr = PathRange::new(maze.bounds());
    pr.set_max_expansions(config.max_expansions);
    let pather = MazePather::new(maze, config.heuristic);
    log::debug!(
        "solving {}x{} maze {} -> {} with {} heuristic",
        maze.rows(),
        maze.cols(),
        maze.start(),
        maze.goal(),
        config.heuristic
    );
    let path = pr.astar_path(&pather, maze.start(), maze.goal())?;
    Ok(Solution {
        path,
        stats: pr.stats(),
    })
}
