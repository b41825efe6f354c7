// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator with wild jokers.
//!
//! Jokers are assigned to whatever makes the strongest category, categories
//! are checked from the strongest down and the first one that matches wins.
//!
//! Jokers complete straight flushes, four of a kind, full houses, flushes,
//! straights and three of a kind, but two pair and one pair only count the
//! natural pairs in the hand. A hand with a single joker and no natural pair
//! is a high card hand. This asymmetry is part of the house rules and changing
//! it changes the game, the [Rules::wild_pairs] option is the only supported
//! way to let a joker make a pair.
//!
//! Straights and flushes are checked independently with the same joker budget,
//! so two jokers may count both toward the straight and the flush, and the
//! ace is always high.
use serde::{Deserialize, Serialize};
use std::fmt;

use jokerdraw_cards::{Card, Suit};

use crate::hand::{Hand, InvalidHandError};

/// Evaluation rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// Lets a joker pair the highest card of a hand with no natural pair.
    pub wild_pairs: bool,
}

/// The hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// Returns all categories from the weakest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// The category name.
    pub fn name(&self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The value of a hand.
///
/// Values are ordered by category first and then by the tiebreak ranks
/// compared left to right, equal values are a push.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    tiebreak: Vec<u8>,
}

impl HandValue {
    /// Creates a value from a category and its tiebreak ranks values.
    pub fn new(rank: HandRank, tiebreak: Vec<u8>) -> Self {
        Self { rank, tiebreak }
    }

    /// Evaluates a hand using the default rules.
    pub fn eval(hand: &Hand) -> Self {
        Self::eval_with_rules(hand, Rules::default())
    }

    /// Evaluates a hand using the given rules.
    pub fn eval_with_rules(hand: &Hand, rules: Rules) -> Self {
        let counts = Counts::new(hand.cards());
        let jokers = counts.jokers;

        let flush_suit = Suit::suits().find(|&s| counts.suit(s) + jokers >= 5);

        let straight = (6..=14).rev().find(|&start| {
            let missing = (start - 4..=start)
                .filter(|&v| counts.rank(v) == 0)
                .count();
            missing <= jokers as usize
        });

        if let (Some(start), Some(_)) = (straight, flush_suit) {
            return Self::new(HandRank::StraightFlush, vec![start]);
        }

        if let Some(quads) = counts.highest(|c| c + jokers >= 4) {
            return Self::new(HandRank::FourOfAKind, vec![quads]);
        }

        // The pair can use only the jokers left after completing the three.
        let three = counts.highest(|c| c + jokers >= 3);
        if let Some(three) = three {
            let remaining = jokers - 3u8.saturating_sub(counts.rank(three));
            let pair = (2..=14)
                .rev()
                .filter(|&v| v != three)
                .find(|&v| counts.rank(v) + remaining >= 2);

            if let Some(pair) = pair {
                return Self::new(HandRank::FullHouse, vec![three, pair]);
            }
        }

        if let Some(suit) = flush_suit {
            let mut values = hand
                .cards()
                .iter()
                .filter(|c| c.suit() == Some(suit))
                .filter_map(|c| c.rank())
                .map(|r| r.value())
                .collect::<Vec<_>>();
            values.sort_unstable_by(|a, b| b.cmp(a));

            // Jokers play as aces after the natural cards.
            values.resize(5, 14);
            return Self::new(HandRank::Flush, values);
        }

        if let Some(start) = straight {
            return Self::new(HandRank::Straight, vec![start]);
        }

        if let Some(three) = three {
            return Self::new(HandRank::ThreeOfAKind, vec![three]);
        }

        // Natural pairs only, jokers are never used here.
        let pairs = (2..=14)
            .rev()
            .filter(|&v| counts.rank(v) >= 2)
            .collect::<Vec<_>>();

        match pairs.as_slice() {
            [high, _, ..] => return Self::new(HandRank::TwoPair, vec![*high]),
            [pair] => return Self::new(HandRank::OnePair, vec![*pair]),
            _ => {}
        }

        let high = counts.highest(|c| c > 0);

        if let Some(high) = high.filter(|_| rules.wild_pairs && jokers > 0) {
            return Self::new(HandRank::OnePair, vec![high]);
        }

        Self::new(HandRank::HighCard, vec![high.unwrap_or(0)])
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tiebreak ranks values, compared left to right.
    pub fn tiebreak(&self) -> &[u8] {
        &self.tiebreak
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.rank, self.tiebreak)
    }
}

/// Validates and evaluates a hand using the default rules.
///
/// ```
/// # use jokerdraw_eval::*;
/// let cards = ["AS", "KS", "QS", "JS", "JK"].map(|c| c.parse::<Card>().unwrap());
/// let value = evaluate(&cards).unwrap();
/// assert_eq!(value.rank(), HandRank::StraightFlush);
/// assert_eq!(value.tiebreak(), &[14]);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandValue, InvalidHandError> {
    Ok(HandValue::eval(&Hand::new(cards)?))
}

/// Rank and suit counts for the standard cards in a hand.
struct Counts {
    /// Indexed by rank value.
    ranks: [u8; 15],
    suits: [u8; 4],
    jokers: u8,
}

impl Counts {
    fn new(cards: &[Card]) -> Self {
        let mut counts = Counts {
            ranks: [0; 15],
            suits: [0; 4],
            jokers: 0,
        };

        for card in cards {
            match card {
                Card::Standard { rank, suit } => {
                    counts.ranks[rank.value() as usize] += 1;
                    counts.suits[*suit as usize] += 1;
                }
                Card::Joker => counts.jokers += 1,
            }
        }

        counts
    }

    #[inline]
    fn rank(&self, value: u8) -> u8 {
        self.ranks[value as usize]
    }

    #[inline]
    fn suit(&self, suit: Suit) -> u8 {
        self.suits[suit as usize]
    }

    /// The highest rank value whose count satisfies `f`.
    fn highest<F>(&self, f: F) -> Option<u8>
    where
        F: Fn(u8) -> bool,
    {
        (2..=14).rev().find(|&v| f(self.rank(v)))
    }
}
