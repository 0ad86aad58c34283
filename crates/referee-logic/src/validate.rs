//! Move validation

use crate::error::InvalidMove;
use crate::moves::{Move, Side};
use crate::state::MatchState;

/// Validate a raw move submitted by the user.
///
/// Normalizes case and surrounding whitespace, then checks membership in
/// the legal move set and the single-use bomb rule. Does not touch
/// `state`.
pub fn validate(raw: &str, state: &MatchState) -> Result<Move, InvalidMove> {
    validate_for(raw, Side::User, state)
}

/// Same as [`validate`] for an arbitrary side
pub fn validate_for(raw: &str, side: Side, state: &MatchState) -> Result<Move, InvalidMove> {
    let Some(mv) = Move::normalize(raw) else {
        return Err(InvalidMove::unrecognized(raw));
    };

    if mv.is_special() && state.bomb_used(side) {
        return Err(InvalidMove::special_move_used(raw));
    }

    Ok(mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidReason;

    #[test]
    fn test_valid_moves_normalized() {
        let state = MatchState::new();
        assert_eq!(validate("Rock ", &state), Ok(Move::Rock));
        assert_eq!(validate("PAPER", &state), Ok(Move::Paper));
        assert_eq!(validate(" scissors", &state), Ok(Move::Scissors));
        assert_eq!(validate("Bomb", &state), Ok(Move::Bomb));
    }

    #[test]
    fn test_unrecognized_move() {
        let state = MatchState::new();
        let err = validate("lizard", &state).unwrap_err();
        assert_eq!(err.reason, InvalidReason::Unrecognized);
        assert_eq!(err.input, "lizard");

        let err = validate("   ", &state).unwrap_err();
        assert_eq!(err.reason, InvalidReason::Unrecognized);
    }

    #[test]
    fn test_bomb_rejected_once_used() {
        let mut state = MatchState::new();
        state.user_bomb_used = true;

        let err = validate(" BOMB ", &state).unwrap_err();
        assert_eq!(err.reason, InvalidReason::SpecialMoveUsed);

        // Other moves still allowed
        assert_eq!(validate("rock", &state), Ok(Move::Rock));
    }

    #[test]
    fn test_opponent_flag_does_not_block_user() {
        let mut state = MatchState::new();
        state.opponent_bomb_used = true;

        assert_eq!(validate("bomb", &state), Ok(Move::Bomb));
        assert_eq!(
            validate_for("bomb", Side::Opponent, &state).unwrap_err().reason,
            InvalidReason::SpecialMoveUsed
        );
    }

    #[test]
    fn test_validation_does_not_mutate() {
        let state = MatchState::new();
        let before = state.clone();
        let _ = validate("bomb", &state);
        let _ = validate("nonsense", &state);
        assert_eq!(state, before);
    }
}
