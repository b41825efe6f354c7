// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Round outcomes and the session win tally.
use log::debug;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use jokerdraw_eval::HandValue;

/// The outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player hand beats the dealer hand.
    PlayerWin,
    /// The dealer hand beats the player hand.
    DealerWin,
    /// The hands have the same value.
    Push,
}

impl Outcome {
    /// The message shown to the player.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::PlayerWin => "You win!",
            Outcome::DealerWin => "Dealer wins",
            Outcome::Push => "Push! Next round's win counts double.",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Player and dealer wins for a session.
///
/// Each push doubles the multiplier, the next decisive round credits the
/// winner with the multiplier and resets it to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    player_wins: u64,
    dealer_wins: u64,
    push_multiplier: u64,
}

impl Default for Tally {
    fn default() -> Self {
        Self {
            player_wins: 0,
            dealer_wins: 0,
            push_multiplier: 1,
        }
    }
}

impl Tally {
    /// Compares the hands values and updates the tally.
    pub fn resolve(&mut self, player: &HandValue, dealer: &HandValue) -> Outcome {
        let outcome = match player.cmp(dealer) {
            Ordering::Greater => {
                self.player_wins = self.player_wins.saturating_add(self.push_multiplier);
                self.push_multiplier = 1;
                Outcome::PlayerWin
            }
            Ordering::Less => {
                self.dealer_wins = self.dealer_wins.saturating_add(self.push_multiplier);
                self.push_multiplier = 1;
                Outcome::DealerWin
            }
            Ordering::Equal => {
                self.push_multiplier = self.push_multiplier.saturating_mul(2);
                Outcome::Push
            }
        };

        debug!(
            "Player {player} dealer {dealer}: {outcome:?} wins {}/{} multiplier {}",
            self.player_wins, self.dealer_wins, self.push_multiplier
        );

        outcome
    }

    /// The player wins.
    pub fn player_wins(&self) -> u64 {
        self.player_wins
    }

    /// The dealer wins.
    pub fn dealer_wins(&self) -> u64 {
        self.dealer_wins
    }

    /// The multiplier for the next decisive round.
    pub fn push_multiplier(&self) -> u64 {
        self.push_multiplier
    }

    /// The player percentage of wins rounded down, 50 before any decisive
    /// round.
    pub fn player_percent(&self) -> u32 {
        let total = self.player_wins as u128 + self.dealer_wins as u128;
        if total == 0 {
            50
        } else {
            (self.player_wins as u128 * 100 / total) as u32
        }
    }

    /// The dealer percentage of wins.
    pub fn dealer_percent(&self) -> u32 {
        100 - self.player_percent()
    }
}

/// Compares the player and dealer values and updates the tally.
pub fn resolve(player: &HandValue, dealer: &HandValue, tally: &mut Tally) -> Outcome {
    tally.resolve(player, dealer)
}
