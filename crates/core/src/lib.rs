// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jokerdraw Poker game types.
//!
//! A round deals five cards to the player and the dealer from a shuffled deck
//! with two jokers, the player chooses which cards to keep, the dealer draws
//! with a fixed policy, and the higher hand wins:
//!
//! ```
//! # use jokerdraw_core::*;
//! let mut session = Session::new(Config { seed: Some(1), ..Default::default() });
//! let mut round = session.new_round().unwrap();
//! round.player_draw(&Keep::parse("125")).unwrap();
//! round.dealer_draw().unwrap();
//!
//! let showdown = session.showdown(&round).unwrap();
//! match session.settle(&showdown) {
//!     Outcome::Push => assert_eq!(session.tally().push_multiplier(), 2),
//!     _ => assert_eq!(session.tally().player_wins() + session.tally().dealer_wins(), 1),
//! }
//! ```
//!
//! Pushes carry over, each push doubles the wins credited to the winner of the
//! next decisive round.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod dealer;
pub mod round;
pub mod session;
pub mod tally;

pub use round::{Keep, Round, RoundError, Showdown};
pub use session::{Config, Session};
pub use tally::{Outcome, Tally, resolve};

// Reexport the evaluator types.
pub use jokerdraw_eval::{Card, Deck, Hand, HandRank, HandValue, Rank, Rules, Suit};
