use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use island_count_core::{CounterConfig, FloodOrder};

/// Count 4-connected islands of land in a grid
#[derive(Parser, Debug)]
#[command(name = "island-count")]
#[command(about = "Count 4-connected islands of land in a land/water grid", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the island count of each grid
    Count {
        /// Grid files (one row per line, `1`/`#` land, `0`/`.` water); `-` reads stdin
        #[arg(required_unless_present = "random")]
        files: Vec<PathBuf>,

        #[command(flatten)]
        random: RandomArgs,

        /// Print each grid before counting it
        #[arg(long)]
        show_grid: bool,
    },

    /// Print every cell transition of the flood-fill, one per line
    Trace {
        /// Grid file; `-` reads stdin
        #[arg(required_unless_present = "random")]
        file: Option<PathBuf>,

        #[command(flatten)]
        random: RandomArgs,

        /// Flood-fill order
        #[arg(long, value_enum, default_value_t = OrderArg::Dfs)]
        order: OrderArg,

        /// Sink cells directly instead of passing through the in-progress marker
        #[arg(long)]
        no_in_progress: bool,

        /// Emit steps as JSON lines
        #[arg(long)]
        json: bool,

        /// Stop after this many steps, leaving the grid partially sunk
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print the grid before and after the trace
        #[arg(long)]
        show_grid: bool,
    },
}

/// Random grid options
#[derive(Args, Debug, Clone)]
pub struct RandomArgs {
    /// Generate a random grid of ROWSxCOLS instead of reading a file
    #[arg(long, value_name = "ROWSxCOLS", value_parser = parse_dimensions)]
    pub random: Option<(usize, usize)>,

    /// Seed for the random grid
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Probability of each random cell being land (0-1)
    #[arg(long, default_value_t = 0.45)]
    pub land_ratio: f64,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderArg {
    /// Depth-first
    Dfs,
    /// Breadth-first
    Bfs,
}

impl OrderArg {
    pub fn counter_config(self, mark_in_progress: bool) -> CounterConfig {
        let order = match self {
            OrderArg::Dfs => FloodOrder::DepthFirst,
            OrderArg::Bfs => FloodOrder::BreadthFirst,
        };
        CounterConfig {
            order,
            mark_in_progress,
        }
    }
}

/// Parse `ROWSxCOLS`, e.g. `12x30`
fn parse_dimensions(s: &str) -> Result<(usize, usize), String> {
    let (rows, cols) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected ROWSxCOLS, got '{s}'"))?;
    let rows = rows
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid row count '{rows}': {e}"))?;
    let cols = cols
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid column count '{cols}': {e}"))?;
    Ok((rows, cols))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimensions() {
        assert_eq!(parse_dimensions("12x30"), Ok((12, 30)));
        assert_eq!(parse_dimensions("4X5"), Ok((4, 5)));
        assert!(parse_dimensions("12").is_err());
        assert!(parse_dimensions("ax3").is_err());
    }

    #[test]
    fn test_cli_parses_trace() {
        let cli = Cli::try_parse_from([
            "island-count",
            "trace",
            "--random",
            "3x4",
            "--order",
            "bfs",
            "--no-in-progress",
            "--limit",
            "5",
        ])
        .unwrap();

        match cli.command {
            Commands::Trace {
                file,
                random,
                order,
                no_in_progress,
                limit,
                ..
            } => {
                assert!(file.is_none());
                assert_eq!(random.random, Some((3, 4)));
                assert_eq!(order, OrderArg::Bfs);
                assert!(no_in_progress);
                assert_eq!(limit, Some(5));
            }
            Commands::Count { .. } => panic!("expected trace"),
        }
    }

    #[test]
    fn test_count_requires_input() {
        assert!(Cli::try_parse_from(["island-count", "count"]).is_err());
        assert!(Cli::try_parse_from(["island-count", "count", "grid.txt"]).is_ok());
    }

    #[test]
    fn test_order_maps_to_config() {
        let config = OrderArg::Bfs.counter_config(false);
        assert_eq!(config.order, FloodOrder::BreadthFirst);
        assert!(!config.mark_in_progress);
    }
}
