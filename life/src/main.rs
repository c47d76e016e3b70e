//! `life`: advance a `.Life 1.06` pattern by a number of generations.

use std::path::PathBuf;

use clap::Parser;
use life::exit_codes;
use life::logging;
use life::run::{RunOptions, run_life};

#[derive(Parser, Debug)]
#[command(
    name = "life",
    version,
    about = "Run Conway's Game of Life on a sparse, unbounded grid"
)]
struct Cli {
    /// The Game of Life file to parse (`.Life 1.06`).
    #[arg(short, long)]
    input: PathBuf,

    /// The number of generations to run [default: config value, else 0].
    #[arg(short = 'n', long)]
    iterations: Option<u64>,

    /// Write the result to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit cells in ascending (x, y) order.
    #[arg(long)]
    sorted: bool,

    /// TOML file with run defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl From<Cli> for RunOptions {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            iterations: cli.iterations,
            output: cli.output,
            sorted: cli.sorted,
            config: cli.config,
        }
    }
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(err) = run_life(&cli.into()) {
        eprintln!("Failed to run Game of Life: {err:#}");
        std::process::exit(exit_codes::FAILED);
    }
    std::process::exit(exit_codes::OK);
}
