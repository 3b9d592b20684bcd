mod cli;

use std::fs;
use std::io::Read as _;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use island_count_core::{GridModel, IslandCounter, TraversalStep};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, OrderArg, RandomArgs};

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    run(cli)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Count {
            files,
            random,
            show_grid,
        } => count(&files, &random, show_grid),
        Commands::Trace {
            file,
            random,
            order,
            no_in_progress,
            json,
            limit,
            show_grid,
        } => {
            let (label, grid) = match (file, random.random) {
                (Some(path), _) => (path.display().to_string(), load_grid(&path)?),
                (None, Some(dims)) => random_grid(dims, &random),
                (None, None) => bail!("no grid given: pass a file or --random ROWSxCOLS"),
            };
            let options = TraceOptions {
                order,
                mark_in_progress: !no_in_progress,
                json,
                limit,
                show_grid,
            };
            trace(&label, grid, &options)
        }
    }
}

/// Count every named grid, plus the random grid if requested
fn count(files: &[PathBuf], random: &RandomArgs, show_grid: bool) -> Result<()> {
    let mut labels = Vec::with_capacity(files.len() + 1);
    let mut grids = Vec::with_capacity(files.len() + 1);

    for path in files {
        grids.push(load_grid(path)?);
        labels.push(path.display().to_string());
    }
    if let Some(dims) = random.random {
        let (label, grid) = random_grid(dims, random);
        labels.push(label);
        grids.push(grid);
    }

    if show_grid {
        for (label, grid) in labels.iter().zip(&grids) {
            println!("{label}:\n{grid}\n");
        }
    }

    info!(grids = grids.len(), "Counting islands");
    let counts = IslandCounter::default().count_batch(&mut grids);

    if counts.len() == 1 && files.len() <= 1 {
        println!("{}", counts[0]);
    } else {
        for (label, islands) in labels.iter().zip(counts) {
            println!("{label}: {islands}");
        }
    }
    Ok(())
}

struct TraceOptions {
    order: OrderArg,
    mark_in_progress: bool,
    json: bool,
    limit: Option<usize>,
    show_grid: bool,
}

/// Drain (or partially drain) a traversal, printing one line per step
fn trace(label: &str, mut grid: GridModel, options: &TraceOptions) -> Result<()> {
    let (rows, cols) = grid.dimensions();
    if options.show_grid && !options.json {
        println!("{label} ({rows}x{cols}):\n{grid}\n");
    }

    let counter = IslandCounter::new(options.order.counter_config(options.mark_in_progress));
    let mut traversal = counter.traverse(&mut grid);
    let limit = options.limit.unwrap_or(usize::MAX);

    for (idx, step) in traversal.by_ref().take(limit).enumerate() {
        if options.json {
            println!("{}", serde_json::to_string(&step)?);
        } else {
            println!("{}", describe_step(idx + 1, &step));
        }
    }

    // A limit that lands exactly on the last step leaves nothing to sink
    let finished = traversal.is_finished() || traversal.grid().is_cleared();
    let islands = traversal.islands_found();
    let steps = traversal.steps_taken();

    if options.json {
        return Ok(());
    }
    if finished {
        println!("\nIslands: {islands} ({steps} steps)");
    } else {
        println!("\nStopped after {steps} steps; {islands} islands found so far");
    }
    if options.show_grid {
        println!("\n{}", traversal.grid());
    }
    Ok(())
}

fn describe_step(number: usize, step: &TraversalStep) -> String {
    let marker = if step.starts_island {
        format!("  <- island {} starts", step.island)
    } else {
        String::new()
    };
    format!(
        "{number:>5}  ({:>3}, {:>3}) -> {}{marker}",
        step.row, step.col, step.cell
    )
}

fn load_grid(path: &Path) -> Result<GridModel> {
    let text = if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read grid from stdin")?;
        text
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read grid file {}", path.display()))?
    };

    text.parse()
        .with_context(|| format!("Invalid grid in {}", path.display()))
}

fn random_grid((rows, cols): (usize, usize), args: &RandomArgs) -> (String, GridModel) {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let grid = GridModel::random(rows, cols, args.land_ratio, &mut rng);
    let label = format!("random {rows}x{cols} (seed {}, land {:.2})", args.seed, args.land_ratio);
    (label, grid)
}
