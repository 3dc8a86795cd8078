//! Terminal maze solver.
//!
//! Run: cargo run --bin mazer -- demo
//!      cargo run --bin mazer -- solve maze.txt --heuristic euclidean
//!      cargo run --bin mazer -- generate --rows 12 --cols 30 --solve

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use mazer_cli::{SAMPLE_MAZE, generate_maze, load_maze, solve_report};
use mazer_grid::Maze;
use mazer_paths::{Heuristic, SearchConfig};

#[derive(Parser)]
#[command(name = "mazer", about = "Shortest paths through grid mazes with A*")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a maze read from a file (or stdin)
    Solve {
        /// Maze file; omit or pass "-" to read stdin
        file: Option<PathBuf>,
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Solve the built-in 5x5 sample maze
    Demo {
        #[command(flatten)]
        search: SearchArgs,
    },
    /// Print a random maze
    Generate {
        #[arg(long, default_value_t = 10)]
        rows: usize,
        #[arg(long, default_value_t = 20)]
        cols: usize,
        /// Probability of each cell being a wall (0.0-1.0)
        #[arg(long, default_value_t = 0.3)]
        walls: f64,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Also solve the generated maze
        #[arg(long)]
        solve: bool,
        #[command(flatten)]
        search: SearchArgs,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Heuristic guiding the search: manhattan or euclidean
    #[arg(long, default_value_t = Heuristic::Manhattan)]
    heuristic: Heuristic,
    /// Give up after this many node expansions
    #[arg(long)]
    max_expansions: Option<usize>,
    /// Only print the solution, not the original maze
    #[arg(short, long)]
    quiet: bool,
}

impl SearchArgs {
    fn config(&self) -> SearchConfig {
        SearchConfig {
            heuristic: self.heuristic,
            max_expansions: self.max_expansions,
        }
    }
}

fn run_search(maze: &Maze, args: &SearchArgs) -> Result<()> {
    let (_, report) = solve_report(maze, &args.config(), args.quiet)?;
    println!("{report}");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Solve { file, search } => {
            let maze = load_maze(file.as_deref())?;
            run_search(&maze, &search)?;
        }
        Commands::Demo { search } => {
            let maze: Maze = SAMPLE_MAZE.parse()?;
            run_search(&maze, &search)?;
        }
        Commands::Generate {
            rows,
            cols,
            walls,
            seed,
            solve,
            search,
        } => {
            let maze = generate_maze(rows, cols, walls, seed)?;
            if solve {
                run_search(&maze, &search)?;
            } else {
                println!("{maze}");
            }
        }
    }

    Ok(())
}
