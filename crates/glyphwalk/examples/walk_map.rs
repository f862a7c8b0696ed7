//! Solve a map file and print the collected letters and path.
//!
//! ```text
//! cargo run -p glyphwalk --example walk_map -- MAP [--crossings] [--record LOG]
//! ```
//!
//! Set `RUST_LOG=glyphwalk_engine=debug` to see turn resolution.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Parser;
use glyphwalk::engine::DEFAULT_MAX_STEPS;
use glyphwalk::prelude::*;
use glyphwalk::replay::record_solve;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "walk_map")]
#[command(about = "Solve an ASCII path map and print its letters and path")]
struct Args {
    /// Map file to solve
    map: PathBuf,

    /// Let the walk pass straight over segments lying across it
    #[arg(long)]
    crossings: bool,

    /// Write the route log to this file
    #[arg(long, value_name = "LOG")]
    record: Option<PathBuf>,

    /// Step bound for the solver
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,
}

impl Args {
    fn config(&self) -> WalkConfig {
        WalkConfig {
            max_steps: self.max_steps,
            crossings: self.crossings,
            ..WalkConfig::default()
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let grid = Grid::load(&args.map)?;
    let summary = validate(&grid)?;
    println!(
        "{}: {} rows, {} letters, start {}",
        args.map.display(),
        summary.row_count,
        summary.letter_count,
        summary.start
    );

    let solver = Solver::new(args.config())?;
    let trace = match &args.record {
        Some(log_path) => {
            let sink = BufWriter::new(File::create(log_path)?);
            let trace = record_solve(&grid, &solver, sink)?;
            tracing::info!(path = %log_path.display(), frames = trace.route.len(), "route recorded");
            trace
        }
        None => solver.solve_traced(&grid)?,
    };

    println!("Letters: {}", trace.result.letters);
    println!("Path:    {}", trace.result.path);
    println!(
        "steps={} turns={} letters={} revisits={}",
        trace.metrics.steps,
        trace.metrics.turns,
        trace.metrics.letters_credited,
        trace.metrics.letter_revisits,
    );
    Ok(())
}
