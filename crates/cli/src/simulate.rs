// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Plays rounds with the dealer policy on both seats.
use anyhow::Result;
use log::info;
use std::{io::Write, time::Instant};

use jokerdraw_core::{HandRank, Outcome, Session};

/// Simulation counts.
#[derive(Debug, Default)]
pub struct Summary {
    /// Player hands by category.
    pub player: [u64; 9],
    /// Dealer hands by category.
    pub dealer: [u64; 9],
    /// Rounds won by the player.
    pub player_rounds: u64,
    /// Rounds won by the dealer.
    pub dealer_rounds: u64,
    /// Pushed rounds.
    pub pushes: u64,
}

/// Plays the given number of rounds and prints a summary.
pub fn run(session: &mut Session, rounds: u64, w: &mut impl Write) -> Result<Summary> {
    let now = Instant::now();
    let mut summary = Summary::default();

    for _ in 0..rounds {
        let (showdown, outcome) = session.play_auto()?;
        summary.player[showdown.player.rank() as usize] += 1;
        summary.dealer[showdown.dealer.rank() as usize] += 1;

        match outcome {
            Outcome::PlayerWin => summary.player_rounds += 1,
            Outcome::DealerWin => summary.dealer_rounds += 1,
            Outcome::Push => summary.pushes += 1,
        }
    }

    info!(
        "Played {rounds} rounds in {:.3}s",
        now.elapsed().as_secs_f64()
    );

    writeln!(w, "Rounds:          {rounds}")?;
    writeln!(w, "Player rounds:   {}", summary.player_rounds)?;
    writeln!(w, "Dealer rounds:   {}", summary.dealer_rounds)?;
    writeln!(w, "Pushes:          {}\n", summary.pushes)?;

    let tally = session.tally();
    writeln!(
        w,
        "Player wins:     {} ({}%)",
        tally.player_wins(),
        tally.player_percent()
    )?;
    writeln!(
        w,
        "Dealer wins:     {} ({}%)\n",
        tally.dealer_wins(),
        tally.dealer_percent()
    )?;

    writeln!(w, "{:<17}{:>10}{:>10}", "", "player", "dealer")?;
    for rank in HandRank::ranks().rev() {
        writeln!(
            w,
            "{:<17}{:>10}{:>10}",
            format!("{rank}:"),
            summary.player[rank as usize],
            summary.dealer[rank as usize]
        )?;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jokerdraw_core::{Config, Rules};

    #[test]
    fn simulate_rounds() {
        let mut session = Session::new(Config {
            seed: Some(9),
            rules: Rules { wild_pairs: true },
        });

        let mut output = Vec::new();
        let summary = run(&mut session, 200, &mut output).unwrap();

        assert_eq!(summary.player.iter().sum::<u64>(), 200);
        assert_eq!(summary.dealer.iter().sum::<u64>(), 200);
        assert_eq!(
            summary.player_rounds + summary.dealer_rounds + summary.pushes,
            200
        );

        // Pushes carry over so decided rounds can credit more than one win.
        let tally = session.tally();
        assert!(tally.player_wins() >= summary.player_rounds);
        assert!(tally.dealer_wins() >= summary.dealer_rounds);

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Rounds:          200"));
        assert!(output.contains("Straight Flush:"));
    }
}
