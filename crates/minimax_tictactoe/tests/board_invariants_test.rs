//! Exhaustive checks of board invariants over every reachable game.

use minimax_tictactoe::{Board, CELL_COUNT, Cell, GameError, Outcome, Player};

/// Every line on a 3x3 board, as linear indices.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn line_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let cell = board.cell(a)?;
        (cell == board.cell(b)? && cell == board.cell(c)?)
            .then_some(cell)
            .and_then(Cell::player)
    })
}

/// Walks every game tree node, calling `check` on each position.
fn walk(board: &Board, check: &mut impl FnMut(&Board)) {
    check(board);
    if board.is_game_over() {
        return;
    }
    for index in board.available_moves() {
        let mut child = board.deep_copy();
        assert_eq!(child.play(index), Ok(true));
        walk(&child, check);
    }
}

#[test]
fn test_available_moves_plus_move_count_is_nine() {
    let mut positions = 0u64;
    walk(&Board::new(), &mut |board| {
        positions += 1;
        assert_eq!(board.available_moves().len() + board.move_count(), CELL_COUNT);
        for index in 0..CELL_COUNT {
            let open = board.cell(index) == Some(Cell::Blank);
            assert_eq!(board.available_moves().contains(index), open);
        }
    });
    // Nodes of the full tic-tac-toe game tree, root included.
    assert_eq!(positions, 549_946);
}

#[test]
fn test_game_over_matches_lines_and_full_board() {
    let mut finished_games = 0u64;
    walk(&Board::new(), &mut |board| {
        let winner = line_winner(board);
        let expected_over = winner.is_some() || board.move_count() == CELL_COUNT;
        assert_eq!(board.is_game_over(), expected_over, "{board}");

        if board.is_game_over() {
            finished_games += 1;
            let expected = winner.map_or(Outcome::Draw, Outcome::Winner);
            assert_eq!(board.winner(), Ok(expected), "{board}");
        } else {
            assert_eq!(board.winner(), Err(GameError::GameInProgress));
        }
    });
    assert_eq!(finished_games, 255_168);
}

#[test]
fn test_turn_alternates_from_x() {
    walk(&Board::new(), &mut |board| {
        let expected = if board.move_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        assert_eq!(board.turn(), expected);
    });
}

#[test]
fn test_finished_boards_reject_every_move() {
    walk(&Board::new(), &mut |board| {
        if !board.is_game_over() {
            return;
        }
        for index in 0..CELL_COUNT {
            let mut copy = board.deep_copy();
            assert_eq!(copy.play(index), Err(GameError::GameOver));
            assert_eq!(&copy, board);
        }
    });
}

#[test]
fn test_deep_copy_never_aliases_original() {
    let mut original = Board::new();
    for index in [4, 0] {
        original.play(index).unwrap();
    }
    let snapshot = original.to_array();

    let mut copy = original.deep_copy();
    copy.play(8).unwrap();
    copy.play(2).unwrap();
    copy.reset();

    assert_eq!(original.to_array(), snapshot);
    assert_eq!(original.turn(), Player::X);
    assert_eq!(original.move_count(), 2);
    assert_eq!(original.available_moves().len(), 7);

    original.play(8).unwrap();
    assert_eq!(copy, Board::new());
}

#[test]
fn test_to_array_is_a_copy() {
    let mut board = Board::new();
    board.play(0).unwrap();
    let mut grid = board.to_array();
    grid[0][0] = Cell::Occupied(Player::O);
    grid[2][2] = Cell::Occupied(Player::O);
    assert_eq!(board.cell(0), Some(Cell::Occupied(Player::X)));
    assert_eq!(board.cell(8), Some(Cell::Blank));
}

#[test]
fn test_fully_drawn_board() {
    let mut board = Board::new();
    // X O X / X O O / O X X
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        assert_eq!(board.play(index), Ok(true));
    }
    assert!(board.is_game_over());
    assert_eq!(board.winner(), Ok(Outcome::Draw));
}
