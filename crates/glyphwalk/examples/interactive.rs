//! Walk a map by hand: one direction per line on stdin.
//!
//! ```text
//! cargo run -p glyphwalk --example interactive -- MAP
//! ```
//!
//! Accepts `up`, `down`, `left`, `right` (or `u`, `d`, `l`, `r`).
//! The session stops at the end character.

use std::error::Error;
use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use glyphwalk::engine::FnObserver;
use glyphwalk::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "interactive")]
#[command(about = "Walk an ASCII path map one direction at a time")]
struct Args {
    /// Map file to walk
    map: PathBuf,

    /// Let the walk pass straight over segments lying across it
    #[arg(long)]
    crossings: bool,
}

fn parse(line: &str) -> Option<Direction> {
    match line.trim() {
        "u" => Some(Direction::Up),
        "d" => Some(Direction::Down),
        "l" => Some(Direction::Left),
        "r" => Some(Direction::Right),
        other => other.parse().ok(),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let grid = Grid::load(&args.map)?;
    println!("{grid}\n");

    let observer = FnObserver::new(
        |state: &WalkState| {
            println!(
                "at {} facing {}  letters: {:<10} path: {}",
                state.position(),
                state.direction(),
                state.letters(),
                state.path()
            );
        },
        |state: &WalkState, attempted: Direction| {
            println!("cannot move {attempted} from {}", state.position());
        },
    );
    let config = WalkConfig {
        crossings: args.crossings,
        end_policy: EndPolicy::Halt,
        ..WalkConfig::default()
    };
    let mut walker = Walker::with_config(grid, observer, config)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let Some(direction) = parse(&line) else {
            println!("unknown direction {:?}", line.trim());
            continue;
        };
        if walker.try_move(direction) == MoveOutcome::ReachedEnd {
            break;
        }
    }

    let state = walker.state();
    println!(
        "\nLetters: {}\nPath:    {}\nrejected moves: {}",
        state.letters(),
        state.path(),
        walker.metrics().rejected_moves
    );
    Ok(())
}
