// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards rendering.
use crossterm::style::{Color, Stylize};

use jokerdraw_core::{Card, Rank};

const CARD_BG: Color = Color::Rgb {
    r: 255,
    g: 255,
    b: 255,
};

const JOKER_BG: Color = Color::Rgb {
    r: 235,
    g: 235,
    b: 235,
};

/// Renders cards side by side as three lines of text, hidden cards show
/// their back.
pub fn render(cards: &[Card], hide: bool) -> [String; 3] {
    let mut lines = [String::new(), String::new(), String::new()];

    for card in cards {
        let card_lines = if hide { back() } else { face(card) };
        for (line, card_line) in lines.iter_mut().zip(card_lines) {
            line.push_str(&card_line);
            line.push(' ');
        }
    }

    lines
}

fn face(card: &Card) -> [String; 3] {
    let Card::Standard { rank, suit } = card else {
        return joker();
    };

    let color = if suit.is_red() {
        Color::Red
    } else {
        Color::Black
    };

    let face = if *rank == Rank::Ten {
        "10".to_string()
    } else {
        format!("{rank} ")
    };

    let suit = suit.symbol();
    [
        format!("{suit}  "),
        format!(" {face}"),
        format!("  {suit}"),
    ]
    .map(|s| s.with(color).on(CARD_BG).bold().to_string())
}

fn joker() -> [String; 3] {
    ["J  ", " \u{265e} ", "  J"].map(|s| s.with(Color::Black).on(JOKER_BG).bold().to_string())
}

fn back() -> [String; 3] {
    let black = |s: &str| s.with(Color::Black).on(CARD_BG).bold().to_string();
    let red = |s: &str| s.with(Color::Red).on(CARD_BG).bold().to_string();

    [
        format!("{}{}", black("\u{2660} "), red("\u{2665}")),
        black(" \u{2664} "),
        format!("{}{}", red("\u{2666} "), black("\u{2663}")),
    ]
}
