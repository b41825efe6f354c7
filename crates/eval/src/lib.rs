// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jokerdraw Poker hand evaluator.
//!
//! Evaluator for 5 cards hands dealt from a deck with two wild jokers. A hand
//! evaluates to a [HandValue] made of a [HandRank] category and tiebreak ranks,
//! values compare by category and then by tiebreak so the higher value wins:
//!
//! ```
//! # use jokerdraw_eval::*;
//! let v1 = HandValue::eval(&"5H 5D 5C 9S 2D".parse::<Hand>().unwrap());
//! let v2 = HandValue::eval(&"2H 2D 9S 9D JK".parse::<Hand>().unwrap());
//! assert_eq!(v1.rank(), HandRank::ThreeOfAKind);
//! assert_eq!(v2.rank(), HandRank::FullHouse);
//! assert!(v2 > v1);
//! ```
//!
//! Cards that don't make a hand are rejected:
//!
//! ```
//! # use jokerdraw_eval::*;
//! let cards = Deck::default().into_iter().take(4).collect::<Vec<_>>();
//! assert_eq!(evaluate(&cards), Err(InvalidHandError::WrongSize(4)));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub mod hand;

pub use eval::{HandRank, HandValue, Rules, evaluate};
pub use hand::{Hand, InvalidHandError};

// Reexport cards types.
pub use jokerdraw_cards::{Card, Deck, ParseCardError, Rank, Suit};
