//! Tests for the perfect-play search and its use through the controller.

use unbeaten_core::{
    Board, Evaluation, GameController, PerfectPlayer, Phase, Player, SearchError, audit,
    choose_move,
};

#[test]
fn test_search_is_deterministic() {
    let board: Board = "O../.../..X".parse().unwrap();
    let first = choose_move(&board, Player::Circle).unwrap();
    for _ in 0..3 {
        assert_eq!(choose_move(&board, Player::Circle).unwrap(), first);
    }
}

#[test]
fn test_double_threat_position() {
    // [A, B, A, B, A, B, _, _, _] with B to move: both diagonals are open
    // for A, so every reply loses and the lowest index is kept.
    let board: Board = "OXO/XOX/...".parse().unwrap();
    let best = choose_move(&board, Player::Cross).unwrap();
    assert_eq!(best.index, 6);
    assert_eq!(best.evaluation, Evaluation::Loss);
}

#[test]
fn test_finished_board_has_no_move() {
    let board: Board = "XXX/OO./O..".parse().unwrap();
    assert_eq!(
        choose_move(&board, Player::Circle),
        Err(SearchError::BoardFinished)
    );
}

#[test]
fn test_every_opening_reply_holds_the_draw() {
    for opening in 0..9 {
        let mut board = Board::new();
        board.place(opening, Player::Circle).unwrap();
        let best = choose_move(&board, Player::Cross).unwrap();
        assert_ne!(best.index, opening);
        assert!(
            best.evaluation >= Evaluation::Draw,
            "reply to {opening} evaluates as {}",
            best.evaluation
        );
    }
}

#[test]
fn test_perfect_player_never_loses() {
    let report = audit(PerfectPlayer);
    assert!(report.games > 0);
    assert_eq!(report.human_wins, 0, "{report:?}");
    assert!(report.never_loses());
    assert_eq!(
        report.games,
        report.opponent_wins + report.draws + report.human_wins
    );
}

#[test]
fn test_perfect_self_play_is_a_draw() {
    let mut game = GameController::new();
    while game.phase() != Phase::GameOver {
        let best = choose_move(game.board(), game.human()).unwrap();
        game.handle_click(best.index).unwrap();
    }
    assert_eq!(game.outcome().winner(), None);
    assert_eq!(game.history().len(), 9);
}
