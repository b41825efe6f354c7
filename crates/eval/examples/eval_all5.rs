// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// $ cargo r --release --example eval_all5 -- --wild-pairs
// ```
use clap::Parser;
use std::time::Instant;

use jokerdraw_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Let a joker pair the highest card of a hand with no natural pair.
    #[clap(long)]
    wild_pairs: bool,
}

#[rustfmt::skip]
fn main() {
    let cli = Cli::parse();
    let rules = Rules {
        wild_pairs: cli.wild_pairs,
    };

    // Evaluate all 3M hands, jokers included.
    let now = Instant::now();
    let mut counts = [0usize; 9];
    let mut joker_counts = [0usize; 9];

    Deck::default().for_each(5, |cards| {
        let Ok(hand) = Hand::new(cards) else {
            return;
        };

        let rank = HandValue::eval_with_rules(&hand, rules).rank();
        counts[rank as usize] += 1;
        if hand.jokers() > 0 {
            joker_counts[rank as usize] += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("{:<17}{:>10}{:>12}", "", "all", "with jokers");
    for rank in HandRank::ranks() {
        println!(
            "{:<17}{:>10}{:>12}",
            format!("{rank}:"),
            counts[rank as usize],
            joker_counts[rank as usize]
        );
    }
}
