// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A game session between a player and the dealer.
use log::info;
use rand::{SeedableRng, rngs::StdRng};

use jokerdraw_eval::Rules;

use crate::{
    dealer,
    round::{Keep, Round, RoundError, Showdown},
    tally::{Outcome, Tally},
};

/// Session configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Seed for the shuffles, a random seed is used if not set.
    pub seed: Option<u64>,
    /// The hand evaluation rules.
    pub rules: Rules,
}

/// A game session, it owns the shuffle source and the win tally.
#[derive(Debug)]
pub struct Session {
    config: Config,
    rng: StdRng,
    tally: Tally,
    rounds: u64,
}

impl Session {
    /// Creates a new session.
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        info!(
            "New session seed {:?} wild pairs {}",
            config.seed, config.rules.wild_pairs
        );

        Self {
            config,
            rng,
            tally: Tally::default(),
            rounds: 0,
        }
    }

    /// Deals a new round with a freshly shuffled deck.
    pub fn new_round(&mut self) -> Result<Round, RoundError> {
        self.start_round(Round::deal)
    }

    /// Counts the round only if the deal succeeds.
    fn start_round<F>(&mut self, deal: F) -> Result<Round, RoundError>
    where
        F: FnOnce(&mut StdRng) -> Result<Round, RoundError>,
    {
        let round = deal(&mut self.rng)?;
        self.rounds += 1;
        Ok(round)
    }

    /// Evaluates the round hands.
    pub fn showdown(&self, round: &Round) -> Result<Showdown, RoundError> {
        round.showdown(self.config.rules)
    }

    /// Updates the tally with the showdown result.
    pub fn settle(&mut self, showdown: &Showdown) -> Outcome {
        let outcome = self.tally.resolve(&showdown.player, &showdown.dealer);
        info!(
            "Round {} {outcome:?}: player {} dealer {}",
            self.rounds, showdown.player, showdown.dealer
        );
        outcome
    }

    /// Plays a round where both seats draw with the dealer policy.
    pub fn play_auto(&mut self) -> Result<(Showdown, Outcome), RoundError> {
        let mut round = self.new_round()?;
        round.player_draw(&Keep::from_discards(&dealer::discards(round.player())))?;
        round.dealer_draw()?;

        let showdown = self.showdown(&round)?;
        let outcome = self.settle(&showdown);
        Ok((showdown, outcome))
    }

    /// The session win tally.
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// The number of rounds dealt.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// The session configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jokerdraw_eval::Deck;

    fn seeded(seed: u64) -> Session {
        Session::new(Config {
            seed: Some(seed),
            rules: Rules::default(),
        })
    }

    #[test]
    fn seeded_sessions_repeat() {
        let mut s1 = seeded(42);
        let mut s2 = seeded(42);

        for _ in 0..10 {
            let r1 = s1.new_round().unwrap();
            let r2 = s2.new_round().unwrap();
            assert_eq!(r1.player(), r2.player());
            assert_eq!(r1.dealer(), r2.dealer());
        }

        assert_eq!(s1.rounds(), 10);
    }

    #[test]
    fn failed_deal_is_not_counted() {
        let mut session = seeded(1);

        let mut deck = Deck::default();
        while deck.count() > 9 {
            deck.deal();
        }

        let res = session.start_round(|_| Round::with_deck(deck));
        assert!(matches!(res, Err(RoundError::DeckExhausted(4))));
        assert_eq!(session.rounds(), 0);

        session.new_round().unwrap();
        assert_eq!(session.rounds(), 1);
    }

    #[test]
    fn auto_rounds_update_tally() {
        let mut session = seeded(7);

        for _ in 0..500 {
            let before = *session.tally();
            let (showdown, outcome) = session.play_auto().unwrap();
            let after = *session.tally();

            match outcome {
                Outcome::PlayerWin => {
                    assert!(showdown.player > showdown.dealer);
                    assert_eq!(
                        after.player_wins(),
                        before.player_wins() + before.push_multiplier()
                    );
                    assert_eq!(after.dealer_wins(), before.dealer_wins());
                    assert_eq!(after.push_multiplier(), 1);
                }
                Outcome::DealerWin => {
                    assert!(showdown.player < showdown.dealer);
                    assert_eq!(
                        after.dealer_wins(),
                        before.dealer_wins() + before.push_multiplier()
                    );
                    assert_eq!(after.player_wins(), before.player_wins());
                    assert_eq!(after.push_multiplier(), 1);
                }
                Outcome::Push => {
                    assert_eq!(showdown.player, showdown.dealer);
                    assert_eq!(after.player_wins(), before.player_wins());
                    assert_eq!(after.dealer_wins(), before.dealer_wins());
                    assert_eq!(after.push_multiplier(), before.push_multiplier() * 2);
                }
            }
        }

        let tally = session.tally();
        assert!(tally.player_wins() + tally.dealer_wins() > 0);
        assert_eq!(tally.player_percent() + tally.dealer_percent(), 100);
    }
}
