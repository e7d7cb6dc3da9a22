//! `mazerun`: report the lowest turn-weighted cost through a maze and how
//! many tiles lie on any cheapest path.

mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use mazerun_core::{Facing, Grid};
use mazerun_paths::{SearchConfig, Strategy, search};

#[derive(Parser, Debug)]
#[command(author, version, about = "Lowest-score paths through a facing-aware maze")]
struct Cli {
    /// Maze file over the alphabet `#`, `.`, `S`, `E`.
    #[arg(default_value = "input.txt")]
    path: PathBuf,

    /// Orientation of the walker on the start cell.
    #[arg(long, value_enum, default_value_t = FacingArg::East)]
    facing: FacingArg,

    /// Exploration strategy.
    #[arg(long, value_enum, default_value_t = StrategyArg::Dijkstra)]
    strategy: StrategyArg,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also print the maze with every best-path tile marked `O` (text output only).
    #[arg(long)]
    show: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum FacingArg {
    North,
    East,
    South,
    West,
}

impl From<FacingArg> for Facing {
    fn from(f: FacingArg) -> Self {
        match f {
            FacingArg::North => Facing::North,
            FacingArg::East => Facing::East,
            FacingArg::South => Facing::South,
            FacingArg::West => Facing::West,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Dijkstra,
    Exhaustive,
}

impl From<StrategyArg> for Strategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::Dijkstra => Strategy::Dijkstra,
            StrategyArg::Exhaustive => Strategy::Exhaustive,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let text = std::fs::read_to_string(&cli.path)
        .with_context(|| format!("failed to read maze from {}", cli.path.display()))?;
    let grid: Grid = text
        .parse()
        .with_context(|| format!("failed to parse maze in {}", cli.path.display()))?;

    let config = SearchConfig::new()
        .with_start_facing(cli.facing.into())
        .with_strategy(cli.strategy.into());
    let outcome = search(&grid, &config).context("search failed")?;

    let rendered = output::render(&grid, &config, &outcome, cli.format, cli.show)?;
    print!("{rendered}");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // `log` records from the libraries are bridged by the subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
