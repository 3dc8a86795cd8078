//! Shared logic for the `mazer` command-line tool.
//!
//! The binary only parses arguments and sets up logging; loading, solving
//! and formatting live here so they can be tested.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use mazer_core::Point;
use mazer_grid::{Maze, MazeGen, render};
use mazer_paths::{SearchConfig, Solution, solve};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// The built-in 5×5 demo maze.
pub const SAMPLE_MAZE: &str = "\
S 0 0 1 0
1 1 0 1 0
0 0 0 0 0
0 1 1 1 0
0 0 0 0 G";

/// Read a maze from `path`, or from stdin when `path` is `None` or `-`.
pub fn load_maze(path: Option<&Path>) -> Result<Maze> {
    let (text, source) = match path {
        Some(p) if p != Path::new("-") => (
            fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?,
            p.display().to_string(),
        ),
        _ => (
            io::read_to_string(io::stdin()).context("reading maze from stdin")?,
            "<stdin>".to_string(),
        ),
    };
    let maze: Maze = text
        .parse()
        .with_context(|| format!("invalid maze in {source}"))?;
    log::info!(
        "loaded {}x{} maze from {source}",
        maze.rows(),
        maze.cols()
    );
    Ok(maze)
}

/// Generate a random maze, seeded from `seed` or from the OS.
pub fn generate_maze(rows: usize, cols: usize, walls: f64, seed: Option<u64>) -> Result<Maze> {
    let rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    MazeGen::new(rng)
        .random(rows, cols, walls)
        .context("generating maze")
}

/// Solve `maze` and format the result for the terminal.
pub fn solve_report(maze: &Maze, config: &SearchConfig, quiet: bool) -> Result<(Solution, String)> {
    let solution = solve(maze, config)?;
    let report = format_report(maze, &solution, quiet);
    Ok((solution, report))
}

/// Terminal report for a solved maze.
///
/// Without `quiet`, the unsolved maze is printed first.
pub struct Report<'a> {
    pub maze: &'a Maze,
    pub solution: &'a Solution,
    pub quiet: bool,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.quiet {
            writeln!(f, "Original Maze:\n{}\n", self.maze)?;
        }
        match &self.solution.path {
            Some(path) => {
                writeln!(f, "Shortest Path Found:")?;
                writeln!(f, "{}", render(self.maze, Some(path)))?;
                writeln!(f, "Path: {}", format_path(path))?;
                write!(f, "Steps: {}", path.len() - 1)
            }
            None if self.solution.stats.capped => write!(
                f,
                "Search stopped after {} expansions. No path found.",
                self.solution.stats.expanded
            ),
            None => write!(f, "No path found. Goal is unreachable."),
        }
    }
}

/// Format a solved maze. See [`Report`].
pub fn format_report(maze: &Maze, solution: &Solution, quiet: bool) -> String {
    Report {
        maze,
        solution,
        quiet,
    }
    .to_string()
}

/// `[(r, c), (r, c), ...]`
pub fn format_path(path: &[Point]) -> String {
    let cells: Vec<String> = path.iter().map(Point::to_string).collect();
    format!("[{}]", cells.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_paths::Heuristic;

    #[test]
    fn sample_report() {
        let maze: Maze = SAMPLE_MAZE.parse().unwrap();
        let (sol, report) = solve_report(&maze, &SearchConfig::default(), false).unwrap();
        assert_eq!(sol.steps(), Some(8));
        assert!(report.starts_with("Original Maze:\nS . . # .\n"));
        assert!(report.contains("Shortest Path Found:\nS * * # .\n# # * # .\n"));
        assert!(report.contains(
            "Path: [(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 3), (2, 4), (3, 4), (4, 4)]"
        ));
        assert!(report.ends_with("Steps: 8"));
    }

    #[test]
    fn quiet_unreachable_report() {
        let maze: Maze = "S#G".parse().unwrap();
        let (_, report) =
            solve_report(&maze, &SearchConfig::new(Heuristic::Euclidean), true).unwrap();
        assert_eq!(report, "No path found. Goal is unreachable.");
    }

    #[test]
    fn capped_report() {
        let maze: Maze = SAMPLE_MAZE.parse().unwrap();
        let config = SearchConfig::default().with_max_expansions(2);
        let (_, report) = solve_report(&maze, &config, true).unwrap();
        assert_eq!(report, "Search stopped after 2 expansions. No path found.");
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = generate_maze(6, 7, 0.25, Some(9)).unwrap();
        let b = generate_maze(6, 7, 0.25, Some(9)).unwrap();
        assert_eq!(a, b);
        assert!(generate_maze(6, 7, 2.0, Some(9)).is_err());
        let err = generate_maze(usize::MAX, 2, 0.3, Some(9)).unwrap_err();
        assert!(format!("{err:#}").contains("too large"));
    }

    #[test]
    fn load_maze_reports_file_errors() {
        let err = load_maze(Some(Path::new("/nonexistent/maze.txt"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/maze.txt"));
    }

    #[test]
    fn load_maze_from_file() {
        let path = std::env::temp_dir().join(format!("mazer-cli-{}.txt", std::process::id()));
        fs::write(&path, "S.#\n..G\n").unwrap();
        let maze = load_maze(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(maze.goal(), Point::row_col(1, 2));
    }

    #[test]
    fn load_maze_rejects_bad_content() {
        let path =
            std::env::temp_dir().join(format!("mazer-cli-bad-{}.txt", std::process::id()));
        fs::write(&path, "S.G\nS..\n").unwrap();
        let err = load_maze(Some(&path)).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(err.to_string().starts_with("invalid maze in"));
        assert!(format!("{err:#}").contains("more than one start"));
    }
}
