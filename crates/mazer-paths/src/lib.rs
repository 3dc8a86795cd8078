//! Shortest-path search on 2D grids.
//!
//! - **A\*** shortest-path search ([`PathRange::astar_path`]) with a
//!   selectable [`Heuristic`]
//! - **BFS** unit-cost shortest distances ([`PathRange::bfs_distance`])
//! - [`solve`]: run A* from a [`Maze`](mazer_grid::Maze)'s start to its goal
//!
//! All searches operate through [`PathRange`], which owns and reuses its
//! node arrays so that repeated queries incur no allocations after warm-up.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`WeightedPather`] : [`Pather`] | edge costs |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`MazePather`] implements all three for a maze.

mod astar;
mod bfs;
mod config;
mod error;
mod heuristic;
mod pathrange;
mod solve;
mod traits;

pub use config::SearchConfig;
pub use error::{PathError, UnknownHeuristic};
pub use heuristic::{Heuristic, euclidean, manhattan};
pub use pathrange::{PathRange, SearchStats};
pub use solve::{Solution, solve};
pub use traits::{AstarPather, MazePather, Pather, WeightedPather};
