//! Random maze generation.

use mazer_core::Range;
use rand::Rng;

use crate::error::MazeError;
use crate::maze::{Maze, Tile};

/// Maze generator driven by a random number generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `rows × cols` maze where each cell is a wall with
    /// probability `wall_ratio` (0.0–1.0).
    ///
    /// The start is placed at the top-left corner and the goal at the
    /// bottom-right corner; both are always open. The result is not
    /// guaranteed to be solvable.
    ///
    /// Dimensions whose cell count overflows, or that do not fit in a
    /// [`Point`](mazer_core::Point) coordinate, fail with
    /// [`MazeError::TooLarge`] before anything is allocated.
    pub fn random(&mut self, rows: usize, cols: usize, wall_ratio: f64) -> Result<Maze, MazeError> {
        let cells = rows
            .checked_mul(cols)
            .filter(|_| Range::with_dims(rows, cols).is_some())
            .ok_or(MazeError::TooLarge { rows, cols })?;
        if cells < 2 {
            return Err(MazeError::Empty);
        }
        if !(0.0..=1.0).contains(&wall_ratio) {
            return Err(MazeError::WallRatio(wall_ratio));
        }

        let mut grid: Vec<Vec<Tile>> = (0..rows)
            .map(|_| {
                (0..cols)
                    .map(|_| {
                        if self.rng.random_bool(wall_ratio) {
                            Tile::Wall
                        } else {
                            Tile::Open
                        }
                    })
                    .collect()
            })
            .collect();
        grid[0][0] = Tile::Start;
        grid[rows - 1][cols - 1] = Tile::Goal;

        let maze = Maze::from_rows(grid)?;
        log::debug!(
            "generated {}x{} maze with {} walls (goal at {})",
            rows,
            cols,
            maze.count(Tile::Wall),
            maze.goal(),
        );
        Ok(maze)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::Point;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn corners_hold_start_and_goal() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(7));
        let m = mg.random(6, 9, 1.0).unwrap();
        assert_eq!(m.start(), Point::row_col(0, 0));
        assert_eq!(m.goal(), Point::row_col(5, 8));
        // Everything else is a wall at ratio 1.0.
        assert_eq!(m.count(Tile::Wall), 6 * 9 - 2);
    }

    #[test]
    fn zero_ratio_is_all_open() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(1));
        let m = mg.random(4, 4, 0.0).unwrap();
        assert_eq!(m.count(Tile::Wall), 0);
        assert_eq!(m.count(Tile::Open), 14);
    }

    #[test]
    fn same_seed_same_maze() {
        let a = MazeGen::new(StdRng::seed_from_u64(42)).random(8, 8, 0.3).unwrap();
        let b = MazeGen::new(StdRng::seed_from_u64(42)).random(8, 8, 0.3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_bad_arguments() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(0));
        assert_eq!(mg.random(1, 1, 0.2).unwrap_err(), MazeError::Empty);
        assert_eq!(mg.random(0, 5, 0.2).unwrap_err(), MazeError::Empty);
        assert_eq!(
            mg.random(3, 3, 1.5).unwrap_err(),
            MazeError::WallRatio(1.5)
        );
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(0));
        assert_eq!(
            mg.random(usize::MAX, 2, 0.0).unwrap_err(),
            MazeError::TooLarge {
                rows: usize::MAX,
                cols: 2
            }
        );
        let too_wide = i32::MAX as usize + 1;
        assert_eq!(
            mg.random(1, too_wide, 0.0).unwrap_err(),
            MazeError::TooLarge {
                rows: 1,
                cols: too_wide
            }
        );
        assert_eq!(
            mg.random(1, too_wide, 0.0).unwrap_err().to_string(),
            format!("maze of 1x{too_wide} cells is too large")
        );
    }

    #[test]
    fn single_row_maze() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(3));
        let m = mg.random(1, 2, 0.5).unwrap();
        assert_eq!(m.to_string(), "S G");
    }
}
