//! Generates a single puzzle and prints it.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a tier and pin the seed for a reproducible puzzle:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hardest --seed test
//! ```
//!
//! Set `RUST_LOG=debug` to see the search iteration count.

use std::process;

use clap::Parser;
use gridlace_core::{Board, Difficulty};
use gridlace_generator::{BacktrackingGenerator, PuzzleGenerator, Seed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty tier (very-easy, easy, medium, hard, very-hard, hardest).
    #[arg(long, default_value = "medium")]
    difficulty: Difficulty,

    /// Seed string; a random seed is drawn when omitted.
    #[arg(long)]
    seed: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let seed = args.seed.map_or_else(Seed::random, Seed::new);

    let mut board = Board::new();
    if let Err(err) = BacktrackingGenerator.generate(&mut board, args.difficulty, &seed) {
        eprintln!("{err}");
        process::exit(1);
    }

    println!("Seed:");
    println!("  {seed}");
    println!();
    println!("Difficulty:");
    println!("  {} ({} clues)", args.difficulty, board.filled_count());
    println!();
    println!("Puzzle:");
    println!("{board}");
}
