use referee_logic::{
    apply_penalty, resolve, run_match, update, validate, InvalidReason, MatchState, Move,
    Outcome, RandomOpponent, Referee, RoundReport, ScriptedOpponent, SeededRng, Side,
};

#[test]
fn scripted_three_round_match_step_by_step() {
    let mut state = MatchState::new();

    // Round 1: "Rock " against scissors
    let user = validate("Rock ", &state).unwrap();
    assert_eq!(user, Move::Rock);
    let outcome = resolve(user, Move::Scissors);
    assert_eq!(outcome, Outcome::UserWins);
    update(&mut state, user, Move::Scissors, outcome);
    assert_eq!(state.user_score, 1);
    assert_eq!(state.round, 2);

    // Round 2: bomb against bomb
    let user = validate("bomb", &state).unwrap();
    let outcome = resolve(user, Move::Bomb);
    assert_eq!(outcome, Outcome::Draw);
    update(&mut state, user, Move::Bomb, outcome);
    assert_eq!((state.user_score, state.opponent_score), (1, 0));
    assert_eq!(state.round, 3);
    assert!(state.user_bomb_used);
    assert!(state.opponent_bomb_used);

    // Round 3: second bomb is rejected and the round is wasted
    let err = validate("bomb", &state).unwrap_err();
    assert_eq!(err.reason, InvalidReason::SpecialMoveUsed);
    apply_penalty(&mut state);
    assert_eq!(state.round, 4);
    assert!(state.game_over);

    assert_eq!((state.user_score, state.opponent_score), (1, 0));
    assert_eq!(state.leader(), Some(Side::User));
}

#[test]
fn scripted_three_round_match_through_referee() {
    let opponent = ScriptedOpponent::new(vec![Move::Scissors, Move::Bomb]);
    let mut referee = Referee::new(opponent);

    referee.play_round("Rock ").unwrap();
    referee.play_round("bomb").unwrap();
    let last = referee.play_round("bomb").unwrap();

    assert_eq!(
        last,
        RoundReport::Wasted {
            round: 3,
            input: "bomb".to_string(),
            reason: InvalidReason::SpecialMoveUsed,
        }
    );

    let summary = referee.summary();
    assert!(summary.finished);
    assert_eq!(summary.user_score, 1);
    assert_eq!(summary.opponent_score, 0);
    assert_eq!(summary.draws, 1);
    assert_eq!(summary.wasted, 1);
    assert_eq!(summary.winner, Some(Side::User));
}

#[test]
fn seeded_matches_replay_identically() {
    for seed in 0..50u64 {
        let inputs = ["paper", "bomb", "scissors"];
        let a = run_match(inputs, RandomOpponent::new(SeededRng::new(seed)));
        let b = run_match(inputs, RandomOpponent::new(SeededRng::new(seed)));
        assert_eq!(a, b, "seed {} replayed differently", seed);
        assert!(a.finished);
    }
}

#[test]
fn random_opponent_never_bombs_twice() {
    for seed in 0..200u64 {
        let summary = run_match(
            ["rock", "rock", "rock"],
            RandomOpponent::new(SeededRng::new(seed)),
        );
        let bombs = summary
            .rounds
            .iter()
            .filter(|r| matches!(r, RoundReport::Played { opponent_move: Move::Bomb, .. }))
            .count();
        assert!(bombs <= 1, "seed {}: opponent bombed {} times", seed, bombs);
    }
}
