// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jokerdraw Poker cards types.
//!
//! This crate define types to create cards, a card is either a standard card
//! or a wild joker:
//!
//! ```
//! # use jokerdraw_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(Card::Joker.is_joker());
//! ```
//!
//! and a [Deck] type with 52 standard cards and two jokers for shuffling,
//! dealing, and iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use jokerdraw_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 3_162_510);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
