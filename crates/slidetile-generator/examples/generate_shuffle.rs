//! Example demonstrating solvable shuffle generation.
//!
//! This example shows how to:
//! - Generate a random solvable shuffle for a grid size
//! - Reproduce a shuffle from its seed
//! - Sample many shuffles to inspect how many candidates were rejected
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_shuffle -- --side 4
//! ```
//!
//! Reproduce a shuffle from a seed:
//!
//! ```sh
//! cargo run --example generate_shuffle -- --side 4 --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Count rejected candidates over many sampled shuffles:
//!
//! ```sh
//! cargo run --example generate_shuffle -- --side 5 --samples 100000
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use slidetile_core::GridSize;
use slidetile_generator::{GeneratedShuffle, ShuffleGenerator, ShuffleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid side length.
    #[arg(long, value_name = "N", default_value_t = 4)]
    side: u8,

    /// Seed to reproduce (64 hex digits).
    #[arg(long, value_name = "HEX")]
    seed: Option<ShuffleSeed>,

    /// Number of shuffles to sample for attempt statistics.
    #[arg(long, value_name = "COUNT")]
    samples: Option<usize>,
}

fn main() {
    let args = Args::parse();
    let size = match GridSize::new(args.side) {
        Ok(size) => size,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    let generator = ShuffleGenerator::new();

    if let Some(samples) = args.samples {
        if samples == 0 {
            eprintln!("--samples must be at least 1.");
            process::exit(1);
        }
        print_attempt_stats(&generator, size, samples);
        return;
    }

    let shuffle = match args.seed {
        Some(seed) => generator.generate_with_seed(size, seed),
        None => generator.generate(size),
    };
    print_shuffle(&shuffle);
}

fn print_shuffle(shuffle: &GeneratedShuffle) {
    let size = shuffle.arrangement.size();
    println!("Seed:");
    println!("  {}", shuffle.seed);
    println!();
    println!("Arrangement ({size}, {} attempt(s)):", shuffle.attempts);
    let side = usize::from(size.side());
    let ids: Vec<String> = shuffle
        .arrangement
        .as_slice()
        .iter()
        .map(|id| if id.is_blank() { ".".to_owned() } else { id.to_string() })
        .collect();
    for row in ids.chunks(side) {
        let cells: Vec<String> = row.iter().map(|cell| format!("{cell:>3}")).collect();
        println!("  {}", cells.join(""));
    }
}

fn print_attempt_stats(generator: &ShuffleGenerator, size: GridSize, samples: usize) {
    let attempts: Vec<u32> = (0..samples)
        .into_par_iter()
        .map(|_| generator.generate(size).attempts.get())
        .collect();
    let total: u64 = attempts.iter().map(|&a| u64::from(a)).sum();
    let max = attempts.iter().copied().max().unwrap_or_default();
    #[expect(clippy::cast_precision_loss)]
    let mean = total as f64 / samples as f64;
    println!("Grid: {size}");
    println!("Samples: {samples}");
    println!("Mean attempts: {mean:.3}");
    println!("Max attempts: {max}");
}
