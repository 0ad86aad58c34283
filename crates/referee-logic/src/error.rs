//! Error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a submitted move was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum InvalidReason {
    #[error("not a recognized move")]
    #[serde(rename = "not a recognized move")]
    Unrecognized,

    #[error("special move already used")]
    #[serde(rename = "special move already used")]
    SpecialMoveUsed,
}

/// A move that failed validation. Never fatal: the round is wasted and
/// the match continues.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid move {input:?}: {reason}")]
pub struct InvalidMove {
    /// Raw input as submitted, before normalization
    pub input: String,
    pub reason: InvalidReason,
}

impl InvalidMove {
    pub fn unrecognized(input: &str) -> Self {
        Self { input: input.to_string(), reason: InvalidReason::Unrecognized }
    }

    pub fn special_move_used(input: &str) -> Self {
        Self { input: input.to_string(), reason: InvalidReason::SpecialMoveUsed }
    }
}

#[derive(Debug, Error)]
pub enum RefereeError {
    #[error(transparent)]
    InvalidMove(#[from] InvalidMove),

    #[error("match is over, no further rounds can be played")]
    MatchOver,

    #[error("tool call error: {0}")]
    Tool(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_messages() {
        assert_eq!(InvalidReason::Unrecognized.to_string(), "not a recognized move");
        assert_eq!(InvalidReason::SpecialMoveUsed.to_string(), "special move already used");
    }

    #[test]
    fn test_invalid_move_display() {
        let err = InvalidMove::unrecognized("lizard");
        assert_eq!(err.to_string(), "invalid move \"lizard\": not a recognized move");
    }

    #[test]
    fn test_referee_error_from_invalid_move() {
        let err: RefereeError = InvalidMove::special_move_used("bomb").into();
        assert!(matches!(
            err,
            RefereeError::InvalidMove(InvalidMove { reason: InvalidReason::SpecialMoveUsed, .. })
        ));
    }
}
