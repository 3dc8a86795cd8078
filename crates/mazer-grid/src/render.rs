//! Draw a path onto a display copy of a maze.

use mazer_core::{Canvas, Point};

use crate::maze::Maze;

/// Marker written on every intermediate path cell.
pub const PATH_MARKER: char = '*';

/// Render `maze` to a [`Canvas`], marking `path` with [`PATH_MARKER`].
///
/// See [`render_with`].
pub fn render(maze: &Maze, path: Option<&[Point]>) -> Canvas {
    render_with(maze, path, PATH_MARKER)
}

/// Render `maze` to a [`Canvas`], overwriting every cell of `path` except
/// its first and last with `marker`.
///
/// The maze is only read; the returned canvas owns its own storage.
/// Path points outside the maze are ignored.
pub fn render_with(maze: &Maze, path: Option<&[Point]>, marker: char) -> Canvas {
    let mut canvas = Canvas::new(maze.bounds(), ' ');
    for (p, tile) in maze.iter() {
        canvas.set(p, tile.as_char());
    }
    if let Some(path) = path {
        if path.len() > 2 {
            for &p in &path[1..path.len() - 1] {
                canvas.set(p, marker);
            }
        }
    }
    canvas
}
