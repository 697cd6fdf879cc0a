//! Tests for board state and win detection.

use unbeaten_core::{Board, CELL_COUNT, Cell, GameOutcome, InvalidMove, Player, WinLine};

/// Every assignment of {Empty, Circle, Cross} to the nine cells.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(CELL_COUNT as u32)).map(|mut code| {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for cell in cells.iter_mut() {
            *cell = match code % 3 {
                0 => Cell::Empty,
                1 => Cell::Occupied(Player::Circle),
                _ => Cell::Occupied(Player::Cross),
            };
            code /= 3;
        }
        Board::from_cells(cells)
    })
}

fn uniform_line(board: &Board) -> Option<WinLine> {
    WinLine::ALL.into_iter().find(|line| {
        let [a, b, c] = line.cells().map(|i| board.get(i).unwrap());
        a != Cell::Empty && a == b && b == c
    })
}

#[test]
fn test_winning_line_iff_uniform_triple() {
    for board in all_boards() {
        assert_eq!(board.winning_line(), uniform_line(&board), "board {board}");
        assert_eq!(
            board.is_finished(),
            board.is_full() || uniform_line(&board).is_some(),
            "board {board}"
        );
    }
}

#[test]
fn test_rejected_place_leaves_board_unchanged() {
    for board in all_boards().step_by(7) {
        for index in [0, 4, 8, 9, 100] {
            let mut attempt = board.clone();
            if let Err(e) = attempt.place(index, Player::Circle) {
                assert_eq!(attempt, board, "{e} changed board {board}");
                if index >= CELL_COUNT {
                    assert_eq!(e, InvalidMove::OutOfRange { index });
                }
            }
        }
    }
}

#[test]
fn test_place_completes_top_row() {
    // [A, A, _, B, B, _, _, _, _]
    let mut board: Board = "OO./XX./...".parse().unwrap();
    let outcome = board.place(2, Player::Circle).unwrap();

    assert_eq!(
        outcome,
        GameOutcome::Won {
            line: WinLine::ALL[0],
            player: Player::Circle,
        }
    );
    assert_eq!(board.winning_line().map(|l| l.cells()), Some([0, 1, 2]));
    assert!(board.is_finished());
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board: Board = "XOX/XOO/OXX".parse().unwrap();
    assert!(board.is_finished());
    assert_eq!(board.winning_line(), None);
    assert_eq!(board.outcome(), GameOutcome::Drawn);
}

#[test]
fn test_reset_round_trip() {
    let mut board: Board = "XO./.X./..O".parse().unwrap();
    board.reset();
    assert_eq!(board.empty_indices(), vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_empty_indices_ascending() {
    let board: Board = ".O./X.X/.O.".parse().unwrap();
    assert_eq!(board.empty_indices(), vec![0, 2, 4, 6, 8]);
}
