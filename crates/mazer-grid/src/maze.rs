//! The [`Maze`] type: a validated, read-only grid of [`Tile`]s.

use mazer_core::{Point, Range};

use crate::error::MazeError;

/// Contents of one maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Tile {
    #[default]
    Open,
    Wall,
    Start,
    Goal,
}

impl Tile {
    /// Whether a search may step onto this tile.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Tile::Wall)
    }

    /// Display character used by the text format.
    pub const fn as_char(self) -> char {
        match self {
            Tile::Open => '.',
            Tile::Wall => '#',
            Tile::Start => 'S',
            Tile::Goal => 'G',
        }
    }

    /// Parse a tile character. Accepts both `.`/`#` and `0`/`1` for open and
    /// wall cells.
    pub const fn from_char(ch: char) -> Option<Tile> {
        match ch {
            '.' | '0' => Some(Tile::Open),
            '#' | '1' => Some(Tile::Wall),
            'S' => Some(Tile::Start),
            'G' => Some(Tile::Goal),
            _ => None,
        }
    }
}

/// A rectangular maze with exactly one start and one goal.
///
/// The maze is immutable once built: searches only ever borrow it, and
/// [`render`](crate::render) draws onto an independent
/// [`Canvas`](mazer_core::Canvas).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<Tile>>", into = "Vec<Vec<Tile>>")
)]
pub struct Maze {
    tiles: Vec<Tile>,
    bounds: Range,
    start: Point,
    goal: Point,
}

impl Maze {
    /// Build a maze from rows of tiles.
    ///
    /// Fails if the maze is empty or ragged, or if it does not contain
    /// exactly one [`Tile::Start`] and one [`Tile::Goal`].
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, MazeError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(MazeError::Empty);
        }
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(MazeError::Ragged {
                row: y,
                expected: cols,
                found: row.len(),
            });
        }
        let bounds = Range::with_dims(rows.len(), cols).ok_or(MazeError::TooLarge {
            rows: rows.len(),
            cols,
        })?;
        let mut tiles = Vec::with_capacity(bounds.len());
        let mut start: Option<Point> = None;
        let mut goal: Option<Point> = None;

        for (y, row) in rows.into_iter().enumerate() {
            for (x, tile) in row.into_iter().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match tile {
                    Tile::Start => {
                        if let Some(first) = start {
                            return Err(MazeError::MultipleStarts { first, second: p });
                        }
                        start = Some(p);
                    }
                    Tile::Goal => {
                        if let Some(first) = goal {
                            return Err(MazeError::MultipleGoals { first, second: p });
                        }
                        goal = Some(p);
                    }
                    Tile::Open | Tile::Wall => {}
                }
                tiles.push(tile);
            }
        }

        Ok(Self {
            tiles,
            bounds,
            start: start.ok_or(MazeError::MissingStart)?,
            goal: goal.ok_or(MazeError::MissingGoal)?,
        })
    }

    /// Copy the tiles back out as rows.
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.tiles.chunks(self.cols()).map(<[Tile]>::to_vec).collect()
    }

    /// The bounding range, `[0, cols) × [0, rows)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.bounds.height() as usize
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.bounds.width() as usize
    }

    /// Position of the start tile.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Position of the goal tile.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The tile at `p`, or `None` if `p` is out of bounds.
    pub fn at(&self, p: Point) -> Option<Tile> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(self.tiles[p.y as usize * self.cols() + p.x as usize])
    }

    /// Whether `p` is inside the maze and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::is_passable)
    }

    /// Row-major iterator over `(Point, Tile)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds.iter().zip(self.tiles.iter().copied())
    }

    /// Count the tiles equal to `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Maze {
    type Error = MazeError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Maze> for Vec<Vec<Tile>> {
    fn from(maze: Maze) -> Self {
        maze.to_rows()
    }
}
