//! Behavioural tests for the hard opponent.

use tictac_engine::{
    Board, Difficulty, GameSession, MinimaxStrategy, Outcome, Player, Position, Strategy,
};

/// Plays every possible X line against minimax O and returns the outcomes.
fn explore_all_x_lines(session: GameSession, outcomes: &mut Vec<Outcome>) {
    if let Some(outcome) = session.outcome() {
        outcomes.push(outcome);
        return;
    }

    for pos in session.board().empty_cells() {
        let mut next = session.clone();
        next.try_apply_move(pos.to_index()).expect("empty cell is legal");
        if next.outcome().is_none() {
            let mut strategy = MinimaxStrategy::new(Player::O);
            next.apply_strategy(&mut strategy).expect("minimax move is legal");
        }
        explore_all_x_lines(next, outcomes);
    }
}

#[test]
fn test_never_loses_as_second_player() {
    let mut outcomes = Vec::new();
    explore_all_x_lines(GameSession::new(), &mut outcomes);

    assert!(!outcomes.is_empty());
    assert!(
        outcomes.iter().all(|o| o.winner() != Some(Player::X)),
        "minimax lost at least one line"
    );
    assert!(outcomes.contains(&Outcome::Winner(Player::O)));
    assert!(outcomes.contains(&Outcome::Draw));
}

#[test]
fn test_self_play_is_a_draw() {
    let mut session = GameSession::new();
    let mut x = MinimaxStrategy::new(Player::X);
    let mut o = MinimaxStrategy::new(Player::O);

    while let Some(player) = session.to_move() {
        let strategy: &mut dyn Strategy = match player {
            Player::X => &mut x,
            Player::O => &mut o,
        };
        session.apply_strategy(strategy).unwrap();
    }

    assert_eq!(session.outcome(), Some(Outcome::Draw));
}

#[test]
fn test_never_loses_against_weaker_tiers() {
    for seed in 0..2 {
        for difficulty in [Difficulty::Easy, Difficulty::Medium] {
            let mut session = GameSession::new();
            let mut x = MinimaxStrategy::new(Player::X);
            let mut o = difficulty.strategy(Player::O, Some(seed));

            while let Some(player) = session.to_move() {
                match player {
                    Player::X => session.apply_strategy(&mut x).unwrap(),
                    Player::O => session.apply_strategy(o.as_mut()).unwrap(),
                };
            }

            assert_ne!(
                session.outcome().and_then(|o| o.winner()),
                Some(Player::O),
                "lost to {difficulty} with seed {seed}"
            );
        }
    }
}

#[test]
fn test_opening_move_is_corner_or_center() {
    let mut board = Board::new();
    let pos = MinimaxStrategy::new(Player::X).choose_move(&mut board).unwrap();

    assert!(
        Position::CORNERS.contains(&pos) || pos == Position::Center,
        "opened on {pos:?}"
    );
    // Every opening draws under perfect play, so the lowest index wins the tie.
    assert_eq!(pos, Position::TopLeft);
    assert_eq!(board, Board::new());
}

#[test]
fn test_answers_center_with_corner() {
    let mut board = Board::new();
    board.place(Position::Center, Player::X).unwrap();

    let pos = MinimaxStrategy::new(Player::O).choose_move(&mut board).unwrap();
    assert!(Position::CORNERS.contains(&pos), "answered with {pos:?}");
}
