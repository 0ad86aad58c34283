//! Opponent move selection

use rand::Rng;
use crate::moves::Move;
use crate::state::MatchState;

/// Choose the opponent's move uniformly at random.
///
/// The bomb is part of the pool until the opponent has used it. No
/// weighting and no adaptation to the user's history.
pub fn select_opponent_move<R: Rng + ?Sized>(state: &MatchState, rng: &mut R) -> Move {
    let pool: &[Move] = if state.opponent_bomb_used {
        &Move::CLASSIC
    } else {
        &Move::ALL
    };
    pool[rng.gen_range(0..pool.len())]
}

/// Something that supplies the opponent's move each round
pub trait Opponent {
    fn next_move(&mut self, state: &MatchState) -> Move;
}

/// Uniform random opponent backed by any `rand` generator
#[derive(Clone, Debug)]
pub struct RandomOpponent<R> {
    rng: R,
}

impl<R: Rng> RandomOpponent<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Opponent for RandomOpponent<R> {
    fn next_move(&mut self, state: &MatchState) -> Move {
        select_opponent_move(state, &mut self.rng)
    }
}

/// Plays a fixed list of moves in order.
///
/// Never plays an illegal move: a scripted bomb after the opponent's bomb
/// is spent, or a move past the end of the script, becomes rock.
#[derive(Clone, Debug, Default)]
pub struct ScriptedOpponent {
    moves: Vec<Move>,
    cursor: usize,
}

impl ScriptedOpponent {
    pub fn new(moves: Vec<Move>) -> Self {
        Self { moves, cursor: 0 }
    }
}

impl Opponent for ScriptedOpponent {
    fn next_move(&mut self, state: &MatchState) -> Move {
        let scripted = self.moves.get(self.cursor).copied();
        self.cursor += 1;
        match scripted {
            Some(Move::Bomb) if state.opponent_bomb_used => {
                log::warn!("scripted bomb after bomb was spent, playing rock");
                Move::Rock
            }
            Some(mv) => mv,
            None => Move::Rock,
        }
    }
}
