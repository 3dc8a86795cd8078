//! Maze model for *mazer*.
//!
//! - [`Maze`]: a validated rectangular grid of [`Tile`]s with exactly one
//!   start and one goal
//! - a plain-text maze format ([`Maze`] implements `FromStr` and `Display`)
//! - [`render`]: draw a path onto a display copy of a maze
//! - [`MazeGen`]: random maze generation

pub mod error;
pub mod generate;
pub mod maze;
pub mod parse;
pub mod render;

pub use error::MazeError;
pub use generate::MazeGen;
pub use maze::{Maze, Tile};
pub use render::{PATH_MARKER, render, render_with};
