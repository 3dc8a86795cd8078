//! Plain-text maze format.
//!
//! One line per row, one character per cell:
//!
//! | Char | Tile |
//! |---|---|
//! | `.` or `0` | open |
//! | `#` or `1` | wall |
//! | `S` | start |
//! | `G` | goal |
//!
//! Whitespace inside a line is ignored, so `S.#` and `S 0 1` describe the
//! same row. Blank lines before the first row and after the last are
//! skipped.

use std::fmt;
use std::str::FromStr;

use mazer_core::Point;

use crate::error::MazeError;
use crate::maze::{Maze, Tile};
use crate::render::render;

/// Parse the text format into rows of tiles, without validating
/// start/goal counts or row widths.
pub fn parse_rows(s: &str) -> Result<Vec<Vec<Tile>>, MazeError> {
    let lines: Vec<&str> = s.lines().collect();
    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());
    let (Some(first), Some(last)) = (first, last) else {
        return Ok(Vec::new());
    };

    lines[first..=last]
        .iter()
        .enumerate()
        .map(|(y, line)| {
            line.chars()
                .filter(|ch| !ch.is_whitespace())
                .enumerate()
                .map(|(x, ch)| {
                    Tile::from_char(ch).ok_or(MazeError::InvalidTile {
                        ch,
                        pos: Point::new(x as i32, y as i32),
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = parse_rows(s)?;
        log::trace!("parsed {} maze rows", rows.len());
        Maze::from_rows(rows)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&render(self, None), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
S 0 0 1 0
1 1 0 1 0
0 0 0 0 0
0 1 1 1 0
0 0 0 0 G";

    #[test]
    fn parse_numeric_format() {
        let m: Maze = SAMPLE.parse().unwrap();
        assert_eq!(m.rows(), 5);
        assert_eq!(m.cols(), 5);
        assert_eq!(m.start(), Point::row_col(0, 0));
        assert_eq!(m.goal(), Point::row_col(4, 4));
        assert_eq!(m.at(Point::row_col(1, 0)), Some(Tile::Wall));
        assert_eq!(m.count(Tile::Wall), 7);
    }

    #[test]
    fn parse_symbolic_format_and_blank_lines() {
        let m: Maze = "\n\n  S.#\n  ..G\n\n".parse().unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.goal(), Point::row_col(1, 2));
    }

    #[test]
    fn display_uses_symbolic_format() {
        let m: Maze = SAMPLE.parse().unwrap();
        let text = m.to_string();
        assert!(text.starts_with("S . . # .\n# # . # ."));
        let again: Maze = text.parse().unwrap();
        assert_eq!(again, m);
    }

    #[test]
    fn invalid_character() {
        let err = "S.x\n..G".parse::<Maze>().unwrap_err();
        assert_eq!(
            err,
            MazeError::InvalidTile {
                ch: 'x',
                pos: Point::row_col(0, 2)
            }
        );
    }

    #[test]
    fn interior_blank_line_is_ragged() {
        let err = "S.\n\n.G".parse::<Maze>().unwrap_err();
        assert!(matches!(err, MazeError::Ragged { row: 1, .. }));
    }

    #[test]
    fn empty_input() {
        assert_eq!("".parse::<Maze>(), Err(MazeError::Empty));
        assert_eq!("  \n \n".parse::<Maze>(), Err(MazeError::Empty));
    }
}
