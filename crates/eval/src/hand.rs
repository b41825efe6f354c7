// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A validated five cards hand.
use std::{fmt, str::FromStr};

use jokerdraw_cards::{Card, ParseCardError};

/// Error returned when cards do not form a valid hand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidHandError {
    /// The hand doesn't have exactly five cards.
    #[error("a hand must have 5 cards, got {0}")]
    WrongSize(usize),
    /// The hand has more jokers than the deck contains.
    #[error("a hand can have at most 2 jokers, got {0}")]
    TooManyJokers(usize),
    /// A card in a hand string could not be parsed.
    #[error(transparent)]
    InvalidCard(#[from] ParseCardError),
}

/// An unordered five cards hand with at most two jokers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; Hand::SIZE]);

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// The maximum number of jokers in a hand.
    pub const MAX_JOKERS: usize = 2;

    /// Creates a hand, fails if there are not exactly five cards or there are
    /// more than two jokers.
    pub fn new(cards: &[Card]) -> Result<Self, InvalidHandError> {
        let cards: [Card; Hand::SIZE] = cards
            .try_into()
            .map_err(|_| InvalidHandError::WrongSize(cards.len()))?;

        let jokers = cards.iter().filter(|c| c.is_joker()).count();
        if jokers > Hand::MAX_JOKERS {
            return Err(InvalidHandError::TooManyJokers(jokers));
        }

        Ok(Self(cards))
    }

    /// The hand cards.
    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    /// Number of jokers in this hand.
    pub fn jokers(&self) -> usize {
        self.0.iter().filter(|c| c.is_joker()).count()
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = InvalidHandError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        Hand::new(cards)
    }
}

impl FromStr for Hand {
    type Err = InvalidHandError;

    /// Parses a whitespace separated list of cards like `AS KS QS JS JK`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()?;
        Hand::new(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HandRank, HandValue};
    use jokerdraw_cards::{Rank, Suit};

    #[test]
    fn hand_size() {
        let cards = [
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Queen, Suit::Spades),
            Card::new(Rank::Jack, Suit::Spades),
            Card::Joker,
            Card::Joker,
        ];

        assert!(Hand::new(&cards[..5]).is_ok());
        assert_eq!(Hand::new(&cards), Err(InvalidHandError::WrongSize(6)));
        assert_eq!(Hand::new(&cards[..4]), Err(InvalidHandError::WrongSize(4)));
        assert_eq!(Hand::new(&[]), Err(InvalidHandError::WrongSize(0)));
    }

    #[test]
    fn hand_jokers() {
        let hand: Hand = "2H 3D JK JK 9C".parse().unwrap();
        assert_eq!(hand.jokers(), 2);

        let cards = [Card::Joker; 5];
        assert_eq!(Hand::new(&cards), Err(InvalidHandError::TooManyJokers(5)));

        let res = "2H JK JK JK 9C".parse::<Hand>();
        assert_eq!(res, Err(InvalidHandError::TooManyJokers(3)));
    }

    #[test]
    fn hand_from_string() {
        let hand: Hand = "as 10s QS js jk".parse().unwrap();
        assert_eq!(hand.to_string(), "AS TS QS JS JK");

        assert!(matches!(
            "AS KS QS JS XX".parse::<Hand>(),
            Err(InvalidHandError::InvalidCard(_))
        ));
        assert_eq!(
            "AS KS QS".parse::<Hand>(),
            Err(InvalidHandError::WrongSize(3))
        );
    }

    #[test]
    fn hand_duplicate_cards() {
        // A hand is a multiset, the same card may appear more than once.
        let hand: Hand = "AS AS AS AS KD".parse().unwrap();
        assert_eq!(hand.jokers(), 0);
        assert_eq!(
            HandValue::eval(&hand),
            HandValue::new(HandRank::FourOfAKind, vec![14])
        );

        let hand: Hand = "AS AS AS JK JK".parse().unwrap();
        assert_eq!(hand.jokers(), 2);
        assert_eq!(hand.to_string(), "AS AS AS JK JK");
    }
}
