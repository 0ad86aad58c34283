//! Referee Logic for Rock-Paper-Scissors-Plus
//!
//! Rules engine for a three-round match of rock-paper-scissors where each
//! player may play a bomb once. The bomb beats everything except another
//! bomb. This crate is compiled to:
//! - Native (for the console referee)
//! - WASM (for browser front ends driving the tool surface)

mod error;
mod game;
mod moves;
mod opponent;
mod random;
mod state;
mod tools;
mod update;
mod validate;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{InvalidMove, InvalidReason, RefereeError};
pub use game::{run_match, MatchSummary, Referee, RoundReport};
pub use moves::{Move, Outcome, Side};
pub use opponent::{select_opponent_move, Opponent, RandomOpponent, ScriptedOpponent};
pub use random::SeededRng;
pub use state::{MatchState, MAX_ROUNDS};
pub use tools::{call_tool, tool_manifest, RoundResult, ToolCall, ToolInfo};
pub use update::{apply_penalty, update};
pub use validate::{validate, validate_for};

/// Legal move set
pub const LEGAL_MOVES: [Move; 4] = Move::ALL;

/// Decide a round between two validated moves.
///
/// Bomb against bomb is a draw, a lone bomb wins, equal moves draw and
/// everything else follows rock > scissors > paper > rock.
pub fn resolve(user_move: Move, opponent_move: Move) -> Outcome {
    match (user_move, opponent_move) {
        (Move::Bomb, Move::Bomb) => Outcome::Draw,
        (Move::Bomb, _) => Outcome::UserWins,
        (_, Move::Bomb) => Outcome::OpponentWins,
        (a, b) if a == b => Outcome::Draw,
        (a, b) if a.beats(b) => Outcome::UserWins,
        _ => Outcome::OpponentWins,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_matrix() {
        use Move::*;
        use Outcome::*;

        let table = [
            (Rock, Rock, Draw),
            (Rock, Paper, OpponentWins),
            (Rock, Scissors, UserWins),
            (Rock, Bomb, OpponentWins),
            (Paper, Rock, UserWins),
            (Paper, Paper, Draw),
            (Paper, Scissors, OpponentWins),
            (Paper, Bomb, OpponentWins),
            (Scissors, Rock, OpponentWins),
            (Scissors, Paper, UserWins),
            (Scissors, Scissors, Draw),
            (Scissors, Bomb, OpponentWins),
            (Bomb, Rock, UserWins),
            (Bomb, Paper, UserWins),
            (Bomb, Scissors, UserWins),
            (Bomb, Bomb, Draw),
        ];

        for (user, opponent, expected) in table {
            assert_eq!(resolve(user, opponent), expected, "{} vs {}", user, opponent);
        }
    }

    #[test]
    fn test_resolve_antisymmetric() {
        for a in Move::ALL {
            for b in Move::ALL {
                assert_eq!(resolve(a, b), resolve(b, a).flipped(), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_legal_moves() {
        assert_eq!(LEGAL_MOVES.len(), 4);
        assert!(LEGAL_MOVES.contains(&Move::Bomb));
    }
}
