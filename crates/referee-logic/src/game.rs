//! Match execution engine

use serde::{Deserialize, Serialize};
use crate::error::{InvalidReason, RefereeError};
use crate::moves::{Move, Outcome, Side};
use crate::opponent::Opponent;
use crate::resolve;
use crate::state::MatchState;
use crate::update::{apply_penalty, update};
use crate::validate::validate;

/// What happened in a single round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RoundReport {
    /// Both sides moved and the round was scored
    Played {
        round: u8,
        user_move: Move,
        opponent_move: Move,
        outcome: Outcome,
    },
    /// The user's input was rejected and the round was lost to the penalty
    Wasted {
        round: u8,
        input: String,
        reason: InvalidReason,
    },
}

impl RoundReport {
    pub fn round(&self) -> u8 {
        match self {
            RoundReport::Played { round, .. } | RoundReport::Wasted { round, .. } => *round,
        }
    }
}

/// Result of a complete (or abandoned) match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub user_score: u32,
    pub opponent_score: u32,
    pub draws: u32,
    pub wasted: u32,
    pub finished: bool,
    /// `None` when the scores are level
    pub winner: Option<Side>,
    pub rounds: Vec<RoundReport>,
}

/// Drives one match: owns the state, asks the opponent for moves and
/// records every round.
pub struct Referee<O> {
    state: MatchState,
    opponent: O,
    history: Vec<RoundReport>,
}

impl<O: Opponent> Referee<O> {
    pub fn new(opponent: O) -> Self {
        Self {
            state: MatchState::new(),
            opponent,
            history: Vec::new(),
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn history(&self) -> &[RoundReport] {
        &self.history
    }

    pub fn is_over(&self) -> bool {
        self.state.game_over
    }

    /// Play one round with the user's raw input.
    ///
    /// Invalid input is not an error here: the round is wasted and
    /// reported as such. The only error is playing past the end.
    pub fn play_round(&mut self, raw: &str) -> Result<RoundReport, RefereeError> {
        if self.state.game_over {
            return Err(RefereeError::MatchOver);
        }

        let round = self.state.round;
        let report = match validate(raw, &self.state) {
            Err(invalid) => {
                log::warn!("round {}: {}, round wasted", round, invalid);
                apply_penalty(&mut self.state);
                RoundReport::Wasted {
                    round,
                    input: invalid.input,
                    reason: invalid.reason,
                }
            }
            Ok(user_move) => {
                let opponent_move = self.opponent.next_move(&self.state);
                let outcome = resolve(user_move, opponent_move);
                update(&mut self.state, user_move, opponent_move, outcome);
                log::info!(
                    "round {}: user {} vs opponent {} -> {}",
                    round,
                    user_move,
                    opponent_move,
                    outcome
                );
                RoundReport::Played {
                    round,
                    user_move,
                    opponent_move,
                    outcome,
                }
            }
        };

        self.history.push(report.clone());

        if self.state.game_over {
            log::info!(
                "match over: user {} - opponent {}",
                self.state.user_score,
                self.state.opponent_score
            );
        }

        Ok(report)
    }

    pub fn summary(&self) -> MatchSummary {
        let mut draws = 0;
        let mut wasted = 0;
        for report in &self.history {
            match report {
                RoundReport::Played { outcome: Outcome::Draw, .. } => draws += 1,
                RoundReport::Played { .. } => {}
                RoundReport::Wasted { .. } => wasted += 1,
            }
        }

        MatchSummary {
            user_score: self.state.user_score,
            opponent_score: self.state.opponent_score,
            draws,
            wasted,
            finished: self.state.game_over,
            winner: self.state.leader(),
            rounds: self.history.clone(),
        }
    }
}

/// Play a match from a list of raw inputs.
///
/// Stops when the match ends; extra inputs are ignored and too few
/// inputs leave the summary unfinished.
pub fn run_match<O, I, S>(inputs: I, opponent: O) -> MatchSummary
where
    O: Opponent,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut referee = Referee::new(opponent);
    for input in inputs {
        if referee.play_round(input.as_ref()).is_err() {
            break;
        }
    }
    referee.summary()
}
