use mazer_core::Point;
use mazer_grid::Maze;

use crate::heuristic::Heuristic;

/// Minimal pathfinding interface: neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> f64;
}

/// Pather over a [`Maze`]: orthogonal unit-cost moves onto non-wall cells.
#[derive(Debug, Clone, Copy)]
pub struct MazePather<'a> {
    pub maze: &'a Maze,
    pub heuristic: Heuristic,
}

impl<'a> MazePather<'a> {
    pub fn new(maze: &'a Maze, heuristic: Heuristic) -> Self {
        Self { maze, heuristic }
    }
}

impl Pather for MazePather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(
            p.neighbors_4()
                .into_iter()
                .filter(|&np| self.maze.is_passable(np)),
        );
    }
}

impl WeightedPather for MazePather<'_> {
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        1
    }
}

impl AstarPather for MazePather<'_> {
    fn estimate(&self, from: Point, to: Point) -> f64 {
        self.heuristic.estimate(from, to)
    }
}
