//! Terminal front end for a single match

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use referee_logic::{MatchSummary, Opponent, Outcome, Referee, RoundReport, Side};

pub fn print_banner<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Welcome to Rock-Paper-Scissors-Plus!")?;
    writeln!(out, "Best of 3 rounds.")?;
    writeln!(out, "You may use 'bomb' once - it beats everything.")?;
    writeln!(out, "Invalid moves waste the round.")?;
    writeln!(out, "Let's begin!")?;
    writeln!(out)?;
    Ok(())
}

fn print_report<W: Write>(out: &mut W, report: &RoundReport) -> Result<()> {
    match report {
        RoundReport::Wasted { reason, .. } => {
            writeln!(out, "Invalid input: {}. Round wasted.", reason)?;
        }
        RoundReport::Played { user_move, opponent_move, outcome, .. } => {
            writeln!(out, "You played: {}", user_move)?;
            writeln!(out, "Bot played: {}", opponent_move)?;
            let line = match outcome {
                Outcome::Draw => "Result: Draw",
                Outcome::UserWins => "Result: You win this round!",
                Outcome::OpponentWins => "Result: Bot wins this round!",
            };
            writeln!(out, "{}", line)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

pub fn print_summary<W: Write>(out: &mut W, summary: &MatchSummary) -> Result<()> {
    if summary.finished {
        writeln!(out, "=== GAME OVER ===")?;
    } else {
        writeln!(out, "=== MATCH ABANDONED ===")?;
    }
    writeln!(
        out,
        "Final Score -> You: {} | Bot: {}",
        summary.user_score, summary.opponent_score
    )?;
    let verdict = match summary.winner {
        Some(Side::User) => "Final Result: You win",
        Some(Side::Opponent) => "Final Result: Bot wins",
        None => "Final Result: Draw",
    };
    writeln!(out, "{}", verdict)?;
    Ok(())
}

/// Prompt for moves until the match ends or input runs out
pub fn play<O, R, W>(referee: &mut Referee<O>, input: &mut R, out: &mut W) -> Result<()>
where
    O: Opponent,
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();
    while !referee.is_over() {
        writeln!(out, "--- Round {} ---", referee.state().round)?;
        write!(out, "Your move: ")?;
        out.flush().context("flush prompt")?;

        // Undecodable bytes become U+FFFD and fail validation like any other typo
        buf.clear();
        let read = input.read_until(b'\n', &mut buf).context("read move")?;
        if read == 0 {
            writeln!(out)?;
            log::warn!("input closed before the match finished");
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let report = referee.play_round(&line)?;
        print_report(out, &report)?;
    }
    Ok(())
}
