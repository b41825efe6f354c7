// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jokerdraw CLI, five cards draw against the dealer with two wild jokers.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use std::io;

use jokerdraw_core::{Config, Rules, Session};

mod render;
mod simulate;
mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// Seed for the deck shuffles.
    #[clap(long, short)]
    seed: Option<u64>,
    /// Let a joker pair the highest card of a hand without pairs.
    #[clap(long)]
    wild_pairs: bool,
    /// Plays the given number of rounds using the dealer policy for both seats.
    #[clap(long, value_parser = clap::value_parser!(u64).range(1..))]
    simulate: Option<u64>,
    /// Enables debug logging.
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let config = Config {
        seed: cli.seed,
        rules: Rules {
            wild_pairs: cli.wild_pairs,
        },
    };

    let mut session = Session::new(config);

    match cli.simulate {
        Some(rounds) => {
            simulate::run(&mut session, rounds, &mut io::stdout()).context("simulation failed")?;
        }
        None => terminal::run(&mut session).context("game interrupted")?,
    }

    Ok(())
}
