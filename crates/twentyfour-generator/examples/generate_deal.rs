//! Example demonstrating solvable deal generation.
//!
//! This example shows how to:
//! - Generate a random deal, or a reproducible one from a seed or phrase
//! - Display the deal, the seed, and a witness solution
//! - Survey how often random draws are solvable
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_deal
//! ```
//!
//! Reproduce a deal from a seed or a phrase:
//!
//! ```sh
//! cargo run --example generate_deal -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! cargo run --example generate_deal -- --phrase "daily puzzle"
//! ```
//!
//! Generate many deals in parallel and report attempt statistics:
//!
//! ```sh
//! cargo run --example generate_deal -- --count 10000
//! ```
//!
//! Check every one of the 6561 possible deals:
//!
//! ```sh
//! cargo run --example generate_deal -- --exhaustive
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use twentyfour_core::{Card, Deal};
use twentyfour_generator::{DealGenerator, DealSeed, GeneratedDeal};
use twentyfour_solver::{find_solution, is_solvable};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed to generate from, as 64 hex digits.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<DealSeed>,

    /// Phrase to derive the seed from.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,

    /// Number of deals to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,

    /// Report the solvable share of all possible deals instead of generating.
    #[arg(long, conflicts_with_all = ["seed", "phrase", "count"])]
    exhaustive: bool,
}

fn main() {
    let args = Args::parse();
    let generator = DealGenerator::new();

    if args.exhaustive {
        print_exhaustive();
        return;
    }

    let seed = args
        .seed
        .or_else(|| args.phrase.as_deref().map(DealSeed::from_phrase));
    if let Some(seed) = seed {
        print_deal(&generator.generate_with_seed(seed));
        return;
    }

    match args.count {
        0 => {
            eprintln!("--count must be at least 1.");
            process::exit(1);
        }
        1 => print_deal(&generator.generate()),
        count => print_survey(&generator, count),
    }
}

fn print_deal(generated: &GeneratedDeal) {
    if let Some(seed) = &generated.seed {
        println!("Seed:");
        println!("  {seed}");
        println!();
    }

    println!("Deal:");
    println!("  {}", generated.deal);
    println!();

    println!("Solution:");
    match find_solution(&generated.deal.values()) {
        Some(expr) => println!("  {expr} = 24"),
        None => println!("  (none)"),
    }
    println!();

    println!("Stats:");
    println!("  attempts: {}", generated.attempts);
    println!("  fell back: {}", generated.fell_back);
}

fn print_survey(generator: &DealGenerator, count: usize) {
    let attempts: Vec<usize> = (0..count)
        .into_par_iter()
        .map(|_| generator.generate().attempts)
        .collect();
    let total: usize = attempts.iter().sum();
    let max = attempts.iter().copied().max().unwrap_or(0);

    println!("Survey:");
    println!("  deals: {count}");
    println!("  total attempts: {total}");
    println!("  max attempts: {max}");
    #[expect(clippy::cast_precision_loss)]
    let rate = count as f64 / total as f64;
    println!("  acceptance rate: {:.1}%", rate * 100.0);
}

fn print_exhaustive() {
    let deals: Vec<Deal> = Card::ALL
        .iter()
        .flat_map(|&a| Card::ALL.iter().map(move |&b| (a, b)))
        .flat_map(|(a, b)| Card::ALL.iter().map(move |&c| (a, b, c)))
        .flat_map(|(a, b, c)| Card::ALL.iter().map(move |&d| Deal::new([a, b, c, d])))
        .collect();
    let solvable = deals
        .par_iter()
        .filter(|deal| is_solvable(&deal.values()))
        .count();

    println!("Exhaustive:");
    println!("  deals: {}", deals.len());
    println!("  solvable: {solvable}");
    #[expect(clippy::cast_precision_loss)]
    let rate = solvable as f64 / deals.len() as f64;
    println!("  solvable share: {:.1}%", rate * 100.0);
}
