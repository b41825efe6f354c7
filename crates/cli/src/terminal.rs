// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{Color, Stylize},
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};

use jokerdraw_core::{Keep, Outcome, Round, Session, Tally};

use crate::render::render;

/// Runs the interactive game loop on stdin and stdout.
pub fn run(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    play(session, &mut input, &mut output)
}

/// Plays rounds until the player quits or the input is closed, a closed
/// input is reported as an interrupted game.
pub fn play(session: &mut Session, r: &mut impl BufRead, w: &mut impl Write) -> Result<()> {
    loop {
        if !play_round(session, r, w)? {
            writeln!(w, "\n\nGame interrupted by user. Goodbye!")?;
            break;
        }

        match prompt(r, w, "\nPlay another round? (y/n): ")? {
            Some(again) if again.trim().eq_ignore_ascii_case("n") => {
                writeln!(w, "\nThanks for playing! Goodbye!")?;
                break;
            }
            Some(_) => {}
            None => {
                writeln!(w, "\n\nGame interrupted by user. Goodbye!")?;
                break;
            }
        }
    }

    w.flush()?;
    Ok(())
}

/// Plays a round, returns false if the input was closed.
fn play_round(session: &mut Session, r: &mut impl BufRead, w: &mut impl Write) -> Result<bool> {
    let mut round = session.new_round()?;
    show_table(w, session.tally(), &round, true)?;

    let prompt_text = "\nWhich card(s) do you want to KEEP? (1–5) or 'a' to keep all: ";
    let Some(choice) = prompt(r, w, prompt_text)? else {
        return Ok(false);
    };

    round.player_draw(&Keep::parse(&choice))?;
    round.dealer_draw()?;

    show_table(w, session.tally(), &round, true)?;
    if prompt(r, w, "\nPress Enter to reveal dealer")?.is_none() {
        return Ok(false);
    }

    show_table(w, session.tally(), &round, false)?;

    let showdown = session.showdown(&round)?;
    writeln!(
        w,
        "{} {}",
        "Dealer has:".bold(),
        showdown.dealer.rank().name().with(Color::Red).bold()
    )?;
    writeln!(
        w,
        "{} {}\n",
        "You have:".bold(),
        showdown.player.rank().name().bold()
    )?;

    let outcome = session.settle(&showdown);
    let message = match outcome {
        Outcome::PlayerWin => outcome.message().bold(),
        Outcome::DealerWin => outcome.message().with(Color::Red).bold(),
        Outcome::Push => outcome.message().with(Color::Yellow).bold(),
    };
    writeln!(w, "{message}")?;

    Ok(true)
}

fn show_table(w: &mut impl Write, tally: &Tally, round: &Round, hide_dealer: bool) -> Result<()> {
    queue!(w, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    writeln!(w, "{}\n", "\u{2660} 5-CARD DRAW \u{2663}".bold())?;

    writeln!(w, "{}", "Dealer:".with(Color::Red).bold())?;
    for line in render(round.dealer(), hide_dealer) {
        writeln!(w, "{line}")?;
    }
    writeln!(w, "Dealer Win%: {}\n", percent(tally.dealer_percent()))?;

    writeln!(w, "{}", "Your Hand:".bold())?;
    for line in render(round.player(), false) {
        writeln!(w, "{line}")?;
    }
    writeln!(w, "Player Win%: {}\n", percent(tally.player_percent()))?;

    w.flush()?;
    Ok(())
}

fn percent(value: u32) -> String {
    let color = if value >= 50 { Color::Green } else { Color::Red };
    value.to_string().with(color).to_string()
}

/// Prints the prompt and reads a line, `None` if the input is closed.
fn prompt(r: &mut impl BufRead, w: &mut impl Write, text: &str) -> Result<Option<String>> {
    write!(w, "{text}")?;
    w.flush()?;

    let mut line = String::new();
    if r.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jokerdraw_core::{Config, Rules};

    fn session() -> Session {
        Session::new(Config {
            seed: Some(3),
            rules: Rules::default(),
        })
    }

    fn play_script(session: &mut Session, script: &str) -> String {
        let mut input = script.as_bytes();
        let mut output = Vec::new();
        play(session, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn play_rounds_until_quit() {
        let mut session = session();
        let output = play_script(&mut session, "a\n\ny\n135\n\nn\n");

        assert_eq!(session.rounds(), 2);
        assert!(output.contains("Which card(s) do you want to KEEP?"));
        assert!(output.contains("Press Enter to reveal dealer"));
        assert!(output.contains("Dealer has:"));
        assert!(output.contains("Thanks for playing! Goodbye!"));
        assert!(!output.contains("interrupted"));

        let tally = session.tally();
        let decided = tally.player_wins() + tally.dealer_wins();
        assert!(decided > 0 || tally.push_multiplier() > 1);
    }

    #[test]
    fn closed_input_stops() {
        let mut session = session();
        let output = play_script(&mut session, "");
        assert_eq!(session.rounds(), 1);
        assert!(!output.contains("Dealer has:"));
        assert!(output.ends_with("Game interrupted by user. Goodbye!\n"));

        let mut session = self::session();
        let output = play_script(&mut session, "a\n\n");
        assert_eq!(session.rounds(), 1);
        assert!(output.contains("Dealer has:"));
        assert!(output.ends_with("Game interrupted by user. Goodbye!\n"));
        assert!(!output.contains("Thanks for playing"));
    }
}
