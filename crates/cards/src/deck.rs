// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A Poker card, either a standard card or a wild joker.
///
/// ```
/// # use jokerdraw_cards::{Card, Rank, Suit};
/// let ah = Card::new(Rank::Ace, Suit::Hearts);
/// assert_eq!(ah.rank(), Some(Rank::Ace));
/// assert!(Card::Joker.rank().is_none());
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Card {
    /// A standard card with a rank and a suit.
    Standard {
        /// The card rank.
        rank: Rank,
        /// The card suit.
        suit: Suit,
    },
    /// A joker, it has no rank or suit and can stand for any card.
    Joker,
}

impl Card {
    /// Create a standard card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card::Standard { rank, suit }
    }

    /// Returns the card rank, `None` for a joker.
    pub fn rank(&self) -> Option<Rank> {
        match self {
            Card::Standard { rank, .. } => Some(*rank),
            Card::Joker => None,
        }
    }

    /// Returns the card suit, `None` for a joker.
    pub fn suit(&self) -> Option<Suit> {
        match self {
            Card::Standard { suit, .. } => Some(*suit),
            Card::Joker => None,
        }
    }

    /// Checks if this card is a joker.
    pub fn is_joker(&self) -> bool {
        matches!(self, Card::Joker)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Standard { rank, suit } => write!(f, "{rank}{suit}"),
            Card::Joker => write!(f, "JK"),
        }
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({self})")
    }
}

/// Error returned when parsing a card from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCardError {
    /// The string is empty.
    #[error("empty card string")]
    Empty,
    /// The rank part is not a valid rank.
    #[error("invalid card rank {0:?}")]
    InvalidRank(String),
    /// The suit part is not a valid suit.
    #[error("invalid card suit {0:?}")]
    InvalidSuit(String),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses cards like `AS`, `TH`, `10h`, `5♦` or `JK` for a joker.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_uppercase();
        if s.is_empty() {
            return Err(ParseCardError::Empty);
        }

        if s == "JK" || s == "JOKER" {
            return Ok(Card::Joker);
        }

        let mut chars = s.chars();
        let suit_char = chars.next_back().ok_or(ParseCardError::Empty)?;
        let rank_str = chars.as_str();

        let suit = match suit_char {
            'H' | '♥' => Suit::Hearts,
            'D' | '♦' => Suit::Diamonds,
            'S' | '♠' => Suit::Spades,
            'C' | '♣' => Suit::Clubs,
            _ => return Err(ParseCardError::InvalidSuit(suit_char.to_string())),
        };

        let rank = match rank_str {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseCardError::InvalidRank(rank_str.to_string())),
        };

        Ok(Card::new(rank, suit))
    }
}

/// Card rank.
///
/// The discriminant is the rank comparison value, the ace is always high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank numeric value, 2 for a deuce up to 14 for an ace.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the rank for a numeric value in 2..=14.
    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ranks().find(|r| r.value() == value)
    }

    /// Checks if this is a ten or a face card.
    pub fn is_high(&self) -> bool {
        *self >= Rank::Ten
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit.
    Hearts,
    /// Diamonds suit.
    Diamonds,
    /// Spades suit.
    Spades,
    /// Clubs suit.
    Clubs,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
            Suit::Clubs => 'C',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs].into_iter()
    }

    /// The suit glyph.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Hearts => '\u{2665}',
            Suit::Diamonds => '\u{2666}',
            Suit::Spades => '\u{2660}',
            Suit::Clubs => '\u{2663}',
        }
    }

    /// Hearts and diamonds are red.
    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

/// A cards Deck with 52 standard cards and two jokers.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 54;

    /// The number of jokers in the deck.
    pub const JOKERS: usize = 2;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals `n` cards, returns `None` and leaves the deck untouched if there
    /// are less than `n` cards left.
    pub fn deal_n(&mut self, n: usize) -> Option<Vec<Card>> {
        if n > self.cards.len() {
            return None;
        }

        Some((0..n).filter_map(|_| self.cards.pop()).collect())
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes one copy of a card from the deck, returns false if the card is
    /// not in the deck.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|c| c == &card) {
            Some(pos) => {
                self.cards.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// The two jokers are distinct deck positions so a hand with both jokers is
    /// visited once for each pair of positions.
    ///
    /// Panics if k is not 1 <= k <= 5.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=5).contains(&k), "1 <= k <= 5");

        if k > self.cards.len() {
            return;
        }

        let n = self.cards.len();
        let mut h = [Card::Joker; 5];

        for c1 in 0..n {
            h[0] = self.cards[c1];

            if k == 1 {
                f(&h[0..k]);
                continue;
            }

            for c2 in (c1 + 1)..n {
                h[1] = self.cards[c2];

                if k == 2 {
                    f(&h[0..k]);
                    continue;
                }

                for c3 in (c2 + 1)..n {
                    h[2] = self.cards[c3];

                    if k == 3 {
                        f(&h[0..k]);
                        continue;
                    }

                    for c4 in (c3 + 1)..n {
                        h[3] = self.cards[c4];

                        if k == 4 {
                            f(&h[0..k]);
                            continue;
                        }

                        for c5 in (c4 + 1)..n {
                            h[4] = self.cards[c5];
                            f(&h[0..k]);
                        }
                    }
                }
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .chain([Card::Joker; Deck::JOKERS])
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::rngs::StdRng;

    #[test]
    fn deck_composition() {
        let mut cards = HashSet::default();
        let mut jokers = 0;
        let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
        assert_eq!(deck.count(), Deck::SIZE);

        while let Some(card) = deck.deal() {
            if card.is_joker() {
                jokers += 1;
            } else {
                cards.insert(card);
            }
        }

        // Check uniquness.
        assert_eq!(cards.len(), 52);
        assert_eq!(jokers, Deck::JOKERS);
        assert!(deck.is_empty());
        assert!(deck.deal().is_none());
    }

    #[test]
    fn rank_values() {
        let values = Rank::ranks().map(|r| r.value()).collect::<Vec<_>>();
        assert_eq!(values, (2..=14).collect::<Vec<_>>());

        assert_eq!(Rank::from_value(10), Some(Rank::Ten));
        assert_eq!(Rank::from_value(14), Some(Rank::Ace));
        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);

        assert!(Rank::Ten.is_high());
        assert!(Rank::Ace.is_high());
        assert!(!Rank::Nine.is_high());
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        assert_eq!(Card::Joker.to_string(), "JK");
        assert_eq!(format!("{:?}", Card::Joker), "Card(JK)");
    }

    #[test]
    fn card_from_string() {
        assert_eq!("AS".parse(), Ok(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!("10h".parse(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!("TH".parse(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!("5♦".parse(), Ok(Card::new(Rank::Five, Suit::Diamonds)));
        assert_eq!(" jk ".parse(), Ok(Card::Joker));
        assert_eq!("Joker".parse(), Ok(Card::Joker));

        assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
        assert_eq!(
            "1S".parse::<Card>(),
            Err(ParseCardError::InvalidRank("1".to_string()))
        );
        assert_eq!(
            "AX".parse::<Card>(),
            Err(ParseCardError::InvalidSuit("X".to_string()))
        );
        assert!("S".parse::<Card>().is_err());

        for card in Deck::default() {
            assert_eq!(card.to_string().parse(), Ok(card));
        }
    }

    #[test]
    fn deck_deal_n() {
        let mut deck = Deck::default();
        let hand = deck.deal_n(5).unwrap();
        assert_eq!(hand.len(), 5);
        assert_eq!(deck.count(), Deck::SIZE - 5);

        assert!(deck.deal_n(50).is_none());
        assert_eq!(deck.count(), Deck::SIZE - 5);
    }

    #[test]
    fn deck_remove() {
        let mut deck = Deck::default();
        assert!(deck.remove(Card::new(Rank::Ace, Suit::Diamonds)));
        assert!(!deck.remove(Card::new(Rank::Ace, Suit::Diamonds)));

        // Jokers are removed one at a time.
        assert!(deck.remove(Card::Joker));
        assert_eq!(deck.count(), Deck::SIZE - 2);
        assert!(deck.remove(Card::Joker));
        assert!(!deck.remove(Card::Joker));
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut count = 0;
        deck.for_each(1, |cards| {
            assert_eq!(cards.len(), 1);
            count += 1;
        });
        assert_eq!(count, Deck::SIZE);

        let mut count = 0;
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            count += 1;
        });
        assert_eq!(count, 1_431);

        let mut count = 0;
        let mut two_jokers = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            if cards.iter().filter(|c| c.is_joker()).count() == 2 {
                two_jokers += 1;
            }
            count += 1;
        });
        assert_eq!(count, 3_162_510);
        // nck(52, 3)
        assert_eq!(two_jokers, 22_100);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::Joker);
        deck.remove(Card::Joker);

        let mut hands = HashSet::default();
        deck.for_each(3, |cards| {
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }
}
