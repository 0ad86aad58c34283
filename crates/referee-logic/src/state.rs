//! Match state

use serde::{Deserialize, Serialize};
use crate::moves::Side;

/// Number of rounds in a match
pub const MAX_ROUNDS: u8 = 3;

/// The single mutable entity of a match.
///
/// Owned by whoever drives the match and passed by reference to the
/// validator, selector and updater. `round` starts at 1 and tops out at
/// `MAX_ROUNDS + 1`, at which point `game_over` is set. Bomb flags only
/// ever go from false to true.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub round: u8,
    pub user_score: u32,
    #[serde(alias = "bot_score")]
    pub opponent_score: u32,
    pub user_bomb_used: bool,
    #[serde(alias = "bot_bomb_used")]
    pub opponent_bomb_used: bool,
    pub game_over: bool,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            round: 1,
            user_score: 0,
            opponent_score: 0,
            user_bomb_used: false,
            opponent_bomb_used: false,
            game_over: false,
        }
    }
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bomb_used(&self, side: Side) -> bool {
        match side {
            Side::User => self.user_bomb_used,
            Side::Opponent => self.opponent_bomb_used,
        }
    }

    pub(crate) fn score_mut(&mut self, side: Side) -> &mut u32 {
        match side {
            Side::User => &mut self.user_score,
            Side::Opponent => &mut self.opponent_score,
        }
    }

    /// Advance the round counter and re-evaluate game over.
    ///
    /// Shared by completed rounds and wasted (penalty) rounds.
    pub(crate) fn advance_round(&mut self) {
        self.round = self.round.saturating_add(1);
        if self.round > MAX_ROUNDS {
            self.game_over = true;
        }
    }

    /// Overall leader, `None` when scores are level
    pub fn leader(&self) -> Option<Side> {
        match self.user_score.cmp(&self.opponent_score) {
            core::cmp::Ordering::Greater => Some(Side::User),
            core::cmp::Ordering::Less => Some(Side::Opponent),
            core::cmp::Ordering::Equal => None,
        }
    }
}
