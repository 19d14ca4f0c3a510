//! Word Grid Solver - CLI
//!
//! Finds and ranks every dictionary word traceable through a letter grid.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};
use word_grid_solver::{
    commands::{parse_grid, random_grid, run_benchmark, solve_grid},
    config::{ConfigFile, ConfigOverrides, resolve},
    logging::init_logger,
    output::{print_benchmark_result, print_solve_report},
    solver::{Solver, SolverConfig, WordList},
    wordlists::loader::{default_word_list, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "word_grid",
    about = "Finds every dictionary word traceable through adjacent cells of a letter grid",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: embedded dictionary)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Grid rows
    #[arg(long, global = true)]
    rows: Option<usize>,

    /// Grid columns
    #[arg(long, global = true)]
    cols: Option<usize>,

    /// Shortest word to report
    #[arg(long, global = true)]
    min_length: Option<usize>,

    /// Longest word to report (also the search depth)
    #[arg(long, global = true)]
    max_length: Option<usize>,

    /// Also report words whose last cell has no unvisited neighbor
    #[arg(long, global = true)]
    collect_dead_ends: bool,

    /// Search starting cells in parallel
    #[arg(short, long, global = true)]
    parallel: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a grid given as text, rows separated by '/' ('.' for an empty cell)
    Solve {
        /// Grid letters, e.g. CRANE/SLATE/TRAIN/BRAIN/GRAPE
        grid: String,

        /// Number of words to list
        #[arg(short, long, default_value = "30")]
        limit: usize,
    },

    /// Solve a randomly generated grid (default)
    Random {
        /// Seed for a reproducible grid
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of words to list
        #[arg(short, long, default_value = "30")]
        limit: usize,
    },

    /// Benchmark solver performance on random grids
    Benchmark {
        /// Number of random grids to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for reproducible grids
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Resolve the solver configuration from file and flags
fn load_config(cli: &Cli) -> Result<SolverConfig> {
    let file = cli
        .config
        .as_deref()
        .map(ConfigFile::load)
        .transpose()
        .context("Failed to load configuration")?;

    let overrides = ConfigOverrides {
        rows: cli.rows,
        cols: cli.cols,
        min_length: cli.min_length,
        max_length: cli.max_length,
        collect_dead_ends: cli.collect_dead_ends,
    };

    resolve(file.as_ref(), &overrides).context("Invalid configuration")
}

/// Load the dictionary from the -d flag or the embedded list
fn load_dictionary(path: Option<&Path>) -> Result<WordList> {
    let words = match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to read dictionary {}", path.display()))?,
        None => default_word_list(),
    };
    info!("dictionary holds {} words", words.len());
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = load_config(&cli)?;
    let words = load_dictionary(cli.dictionary.as_deref())?;
    let solver = Solver::new(config, &words);

    // Default to a random grid if no command given
    let command = cli.command.unwrap_or(Commands::Random {
        seed: None,
        limit: 30,
    });

    match command {
        Commands::Solve { grid, limit } => {
            let grid = parse_grid(&solver, &grid).context("Invalid grid")?;
            let report = solve_grid(&solver, grid, cli.parallel)?;
            print_solve_report(&report, limit);
        }
        Commands::Random { seed, limit } => {
            let grid = random_grid(solver.config().shape(), seed);
            let report = solve_grid(&solver, grid, cli.parallel)?;
            print_solve_report(&report, limit);
        }
        Commands::Benchmark { count, seed } => {
            println!("Running benchmark on {count} random grids...");
            let result = run_benchmark(&solver, count, seed, cli.parallel)?;
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
