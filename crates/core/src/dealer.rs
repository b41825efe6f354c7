// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Dealer draw policy.
use jokerdraw_eval::Card;

/// Returns the positions of the cards the dealer discards, in ascending order.
///
/// The dealer keeps jokers, every card of a rank that appears at least twice,
/// and tens or better, everything else is discarded.
pub fn discards(hand: &[Card]) -> Vec<usize> {
    let mut counts = [0u8; 15];
    for rank in hand.iter().filter_map(Card::rank) {
        counts[rank.value() as usize] += 1;
    }

    hand.iter()
        .enumerate()
        .filter(|(_, card)| match card.rank() {
            Some(rank) => counts[rank.value() as usize] < 2 && !rank.is_high(),
            None => false,
        })
        .map(|(idx, _)| idx)
        .collect()
}
