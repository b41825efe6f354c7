// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A single draw round between the player and the dealer.
use log::{debug, trace};
use rand::Rng;

use jokerdraw_eval::{Card, Deck, Hand, HandValue, InvalidHandError, Rules};

use crate::dealer;

/// Errors raised while playing a round.
#[derive(Debug, thiserror::Error)]
pub enum RoundError {
    /// There are not enough cards left in the deck.
    #[error("not enough cards in the deck, {0} left")]
    DeckExhausted(usize),
    /// A seat doesn't hold a valid hand.
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] InvalidHandError),
}

/// The player choice of cards to keep before the draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keep {
    /// Keep all the cards.
    All,
    /// Discard the hand and draw five new cards.
    Redraw,
    /// Keep the cards at the given positions.
    Cards(Vec<usize>),
}

impl Keep {
    /// Parses the player input.
    ///
    /// `a` keeps all cards, an empty input redraws the hand, otherwise each
    /// digit from 1 to 5 selects the card at that position and everything else
    /// is ignored, so `135` and `1, 3, 5` are the same choice.
    pub fn parse(input: &str) -> Keep {
        let input = input.trim();
        if input.eq_ignore_ascii_case("a") {
            return Keep::All;
        }

        if input.is_empty() {
            return Keep::Redraw;
        }

        let mut positions = input
            .chars()
            .filter_map(|c| c.to_digit(10))
            .filter(|d| (1..=Hand::SIZE as u32).contains(d))
            .map(|d| d as usize - 1)
            .collect::<Vec<_>>();
        positions.sort_unstable();
        positions.dedup();

        Keep::Cards(positions)
    }

    /// Keeps all the cards that are not in the discards positions.
    pub fn from_discards(discards: &[usize]) -> Keep {
        let positions = (0..Hand::SIZE).filter(|idx| !discards.contains(idx));
        Keep::Cards(positions.collect())
    }
}

/// The player and dealer hands values at showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showdown {
    /// The player hand value.
    pub player: HandValue,
    /// The dealer hand value.
    pub dealer: HandValue,
}

/// A round with its own deck.
#[derive(Debug)]
pub struct Round {
    deck: Deck,
    player: Vec<Card>,
    dealer: Vec<Card>,
}

impl Round {
    /// Shuffles a new deck and deals five cards to the player then five cards
    /// to the dealer.
    pub fn deal<R: Rng>(rng: &mut R) -> Result<Self, RoundError> {
        Self::with_deck(Deck::new_and_shuffled(rng))
    }

    /// Deals the hands from the top of the given deck.
    pub fn with_deck(mut deck: Deck) -> Result<Self, RoundError> {
        let player = deal_cards(&mut deck, Hand::SIZE)?;
        let dealer = deal_cards(&mut deck, Hand::SIZE)?;

        debug!(
            "Dealt player {} dealer {}",
            format_cards(&player),
            format_cards(&dealer)
        );

        Ok(Self {
            deck,
            player,
            dealer,
        })
    }

    /// The player cards.
    pub fn player(&self) -> &[Card] {
        &self.player
    }

    /// The dealer cards.
    pub fn dealer(&self) -> &[Card] {
        &self.dealer
    }

    /// Cards left in the deck.
    pub fn deck_count(&self) -> usize {
        self.deck.count()
    }

    /// Replaces the player cards that are not kept, kept cards stay in their
    /// order followed by the new cards.
    pub fn player_draw(&mut self, keep: &Keep) -> Result<(), RoundError> {
        let kept = match keep {
            Keep::All => return Ok(()),
            Keep::Redraw => Vec::new(),
            Keep::Cards(positions) => self
                .player
                .iter()
                .enumerate()
                .filter(|(idx, _)| positions.contains(idx))
                .map(|(_, c)| *c)
                .collect(),
        };

        let new_cards = deal_cards(&mut self.deck, Hand::SIZE - kept.len())?;
        self.player = kept.into_iter().chain(new_cards).collect();

        debug!("Player draw {keep:?}: {}", format_cards(&self.player));

        Ok(())
    }

    /// Replaces the dealer discards, returns the discarded positions.
    pub fn dealer_draw(&mut self) -> Result<Vec<usize>, RoundError> {
        let discards = dealer::discards(&self.dealer);
        if discards.len() > self.deck.count() {
            return Err(RoundError::DeckExhausted(self.deck.count()));
        }

        // Highest position first so the remaining positions don't shift.
        for &idx in discards.iter().rev() {
            let card = self
                .deck
                .deal()
                .ok_or(RoundError::DeckExhausted(0))?;
            let discarded = self.dealer.remove(idx);
            self.dealer.push(card);
            trace!("Dealer discards {discarded} draws {card}");
        }

        debug!("Dealer draw {discards:?}: {}", format_cards(&self.dealer));

        Ok(discards)
    }

    /// Evaluates the player and dealer hands.
    pub fn showdown(&self, rules: Rules) -> Result<Showdown, RoundError> {
        let player = HandValue::eval_with_rules(&Hand::new(&self.player)?, rules);
        let dealer = HandValue::eval_with_rules(&Hand::new(&self.dealer)?, rules);
        Ok(Showdown { player, dealer })
    }
}

fn deal_cards(deck: &mut Deck, n: usize) -> Result<Vec<Card>, RoundError> {
    deck.deal_n(n)
        .ok_or_else(|| RoundError::DeckExhausted(deck.count()))
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
