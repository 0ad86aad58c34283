//! Move, side and outcome definitions

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// A move in Rock-Paper-Scissors-Plus
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    /// Beats every other move. Usable once per player per match.
    Bomb,
}

impl Move {
    /// Every legal move, bomb included
    pub const ALL: [Move; 4] = [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb];

    /// The three-way cycle without the special move
    pub const CLASSIC: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
        }
    }

    pub fn is_special(&self) -> bool {
        *self == Move::Bomb
    }

    /// Whether `self` dominates `other` under the classic cycle.
    /// Rock beats scissors, scissors beats paper, paper beats rock.
    pub fn beats(&self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }

    /// Case-folded, whitespace-trimmed lookup. Returns `None` for anything
    /// outside the legal move set.
    pub fn normalize(raw: &str) -> Option<Move> {
        let folded = raw.trim().to_lowercase();
        Move::ALL.iter().copied().find(|m| m.as_str() == folded)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Move {
    type Err = crate::error::InvalidMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::normalize(s).ok_or_else(|| crate::error::InvalidMove::unrecognized(s))
    }
}

/// One of the two seats at the table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    User,
    #[serde(alias = "bot")]
    Opponent,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::User => f.write_str("user"),
            Side::Opponent => f.write_str("opponent"),
        }
    }
}

/// Result of a single resolved round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    #[serde(rename = "user")]
    UserWins,
    #[serde(rename = "opponent", alias = "bot")]
    OpponentWins,
    Draw,
}

impl Outcome {
    /// The winning side, `None` on a draw
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::UserWins => Some(Side::User),
            Outcome::OpponentWins => Some(Side::Opponent),
            Outcome::Draw => None,
        }
    }

    /// Same round seen from the other seat
    pub fn flipped(&self) -> Self {
        match self {
            Outcome::UserWins => Outcome::OpponentWins,
            Outcome::OpponentWins => Outcome::UserWins,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::UserWins => f.write_str("user"),
            Outcome::OpponentWins => f.write_str("opponent"),
            Outcome::Draw => f.write_str("draw"),
        }
    }
}
