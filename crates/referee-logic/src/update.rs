//! State transitions applied after each round

use crate::moves::{Move, Outcome};
use crate::state::MatchState;

/// Apply a resolved round to the match state.
///
/// Marks bombs as used, scores the winner, advances the round and sets
/// `game_over` once the round counter passes `MAX_ROUNDS`. Must be
/// called exactly once per completed round, and never after the match
/// is over (not enforced, only logged).
pub fn update<'a>(
    state: &'a mut MatchState,
    user_move: Move,
    opponent_move: Move,
    outcome: Outcome,
) -> &'a mut MatchState {
    if state.game_over {
        log::warn!("update called on a finished match (round {})", state.round);
    }

    if user_move.is_special() {
        state.user_bomb_used = true;
    }
    if opponent_move.is_special() {
        state.opponent_bomb_used = true;
    }

    if let Some(side) = outcome.winner() {
        let score = state.score_mut(side);
        *score = score.saturating_add(1);
    }

    state.advance_round();

    log::debug!(
        "round applied: {} vs {} -> {}, score {}-{}, next round {}{}",
        user_move,
        opponent_move,
        outcome,
        state.user_score,
        state.opponent_score,
        state.round,
        if state.game_over { " (game over)" } else { "" },
    );

    state
}

/// Waste the current round after an invalid submission.
///
/// No scoring and no bomb flag changes, only the round counter and the
/// game over check. Must not be called after the match is over (not
/// enforced, only logged).
pub fn apply_penalty(state: &mut MatchState) -> &mut MatchState {
    if state.game_over {
        log::warn!("penalty applied to a finished match (round {})", state.round);
    }

    state.advance_round();

    log::debug!(
        "round wasted, next round {}{}",
        state.round,
        if state.game_over { " (game over)" } else { "" },
    );

    state
}
