use mazer_core::Point;
use thiserror::Error;

/// Configuration errors raised while building a [`Maze`](crate::Maze).
///
/// Each of these is reported before any search runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MazeError {
    #[error("maze has no cells")]
    Empty,
    #[error("maze of {rows}x{cols} cells is too large")]
    TooLarge { rows: usize, cols: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid tile \u{201c}{ch}\u{201d} at {pos}")]
    InvalidTile { ch: char, pos: Point },
    #[error("start not found in maze")]
    MissingStart,
    #[error("goal not found in maze")]
    MissingGoal,
    #[error("maze has more than one start: {first} and {second}")]
    MultipleStarts { first: Point, second: Point },
    #[error("maze has more than one goal: {first} and {second}")]
    MultipleGoals { first: Point, second: Point },
    #[error("wall ratio must be within [0, 1], got {0}")]
    WallRatio(f64),
}
