//! The [`Canvas`] type: an owned 2D grid of display characters.
//!
//! Unlike a shared-buffer view, a `Canvas` owns its storage: cloning it
//! yields an independent copy, so drawing on a clone never affects the
//! original.

use std::fmt;

use crate::geom::{Point, Range};

/// A rectangular grid of characters covering a [`Range`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Canvas {
    cells: Vec<char>,
    bounds: Range,
}

impl Canvas {
    /// Create a canvas over `bounds` filled with `fill`.
    pub fn new(bounds: Range, fill: char) -> Self {
        Self {
            cells: vec![fill; bounds.len()],
            bounds,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.bounds.height().max(0) as usize
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.bounds.width().max(0) as usize
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let x = (p.x - self.bounds.min.x) as usize;
        let y = (p.y - self.bounds.min.y) as usize;
        Some(y * self.cols() + x)
    }

    /// Read the character at `p`, or `None` if `p` is outside bounds.
    pub fn at(&self, p: Point) -> Option<char> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the character at `p`. No-op if `p` is outside bounds.
    pub fn set(&mut self, p: Point, ch: char) {
        if let Some(i) = self.index(p) {
            self.cells[i] = ch;
        }
    }

    /// Iterate over the rows as character slices.
    pub fn lines(&self) -> impl Iterator<Item = &[char]> {
        // chunks panics on zero, and an empty canvas has no rows anyway.
        self.cells.chunks(self.cols().max(1))
    }
}

impl fmt::Display for Canvas {
    /// Rows on separate lines, cells separated by a single space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, line) in self.lines().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, ch) in line.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(rows: usize, cols: usize) -> Range {
        Range::with_dims(rows, cols).unwrap()
    }

    #[test]
    fn canvas_new_and_at() {
        let c = Canvas::new(dims(2, 3), '.');
        assert_eq!(c.rows(), 2);
        assert_eq!(c.cols(), 3);
        assert_eq!(c.at(Point::new(2, 1)), Some('.'));
        assert_eq!(c.at(Point::new(3, 0)), None);
    }

    #[test]
    fn canvas_set_out_of_bounds_is_noop() {
        let mut c = Canvas::new(dims(2, 2), '.');
        c.set(Point::new(5, 5), 'X');
        assert_eq!(c, Canvas::new(dims(2, 2), '.'));
    }

    #[test]
    fn canvas_clone_is_independent() {
        let a = Canvas::new(dims(2, 2), '.');
        let mut b = a.clone();
        b.set(Point::new(1, 1), '*');
        assert_eq!(a.at(Point::new(1, 1)), Some('.'));
        assert_eq!(b.at(Point::new(1, 1)), Some('*'));
    }

    #[test]
    fn canvas_display_space_separated() {
        let mut c = Canvas::new(dims(2, 3), '.');
        c.set(Point::row_col(0, 0), 'S');
        c.set(Point::row_col(1, 2), 'G');
        assert_eq!(c.to_string(), "S . .\n. . G");
    }

    #[test]
    fn empty_canvas_displays_nothing() {
        let c = Canvas::new(Range::default(), '.');
        assert_eq!(c.to_string(), "");
    }

    #[test]
    fn canvas_with_offset_origin() {
        let mut c = Canvas::new(Range::new(2, 1, 4, 3), '.');
        c.set(Point::new(3, 2), '*');
        assert_eq!(c.at(Point::new(0, 0)), None);
        assert_eq!(c.to_string(), ". .\n. *");
    }
}
