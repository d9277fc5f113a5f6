//! Scripted console sessions.

use minimax_console::{Console, ConsoleConfig};
use minimax_tictactoe::{Algorithm, Board, Outcome, Player};

fn run_session(config: ConsoleConfig, input: &str) -> (Board, String) {
    let mut console = Console::new(config, input.as_bytes(), Vec::new());
    console.run().expect("session should not fail");
    let output = String::from_utf8(console.output().clone()).unwrap();
    (console.board().clone(), output)
}

#[test]
fn test_spectated_game_is_drawn() {
    let config = ConsoleConfig::default().with_spectate(true);
    let (board, output) = run_session(config, "n\n");

    assert!(output.starts_with("Starting a new game."));
    assert!(output.contains("X's turn."));
    assert!(output.contains("O's turn."));
    assert!(output.contains("The game is a draw."));
    assert!(output.ends_with("Would you like to start a new game? (Y/N): "));
    assert_eq!(board.winner(), Ok(Outcome::Draw));
}

#[test]
fn test_rematch_resets_board() {
    let config = ConsoleConfig::default()
        .with_spectate(true)
        .with_algorithm(Algorithm::AlphaBetaPruning);
    let (board, output) = run_session(config, "y\nn\n");

    assert_eq!(output.matches("The game is a draw.").count(), 2);
    assert_eq!(output.matches("Started new game.").count(), 1);
    assert!(board.is_game_over());
}

#[test]
fn test_rematch_prompt_repeats_on_bad_answer() {
    let config = ConsoleConfig::default().with_spectate(true);
    let (_, output) = run_session(config, "maybe\nN\n");

    assert_eq!(output.matches("Invalid input.").count(), 1);
    assert_eq!(
        output.matches("Would you like to start a new game?").count(),
        2
    );
}

#[test]
fn test_out_of_range_index_rejected() {
    let (board, output) = run_session(ConsoleConfig::default(), "9\n-3\n");

    assert_eq!(
        output
            .matches("The index of the move must be between 0 and 8, inclusive.")
            .count(),
        2
    );
    assert_eq!(board, Board::new());
}

#[test]
fn test_non_numeric_index_rejected() {
    let (board, output) = run_session(ConsoleConfig::default(), "centre\n");

    assert!(output.contains("Invalid move."));
    assert!(output.contains("The index of the move must be a number."));
    assert_eq!(board.move_count(), 0);
}

#[test]
fn test_occupied_cell_rejected() {
    let (board, output) = run_session(ConsoleConfig::default(), "4\n4\n");

    assert!(output.contains("The selected index must be blank."));
    assert_eq!(board.move_count(), 2);
    assert_eq!(board.turn(), Player::X);
}

#[test]
fn test_engine_opens_when_human_plays_o() {
    let config = ConsoleConfig::default().with_human(Player::O);
    let (board, output) = run_session(config, "");

    assert!(output.contains("X plays"));
    assert!(output.ends_with("Index of move: "));
    assert_eq!(board.move_count(), 1);
    assert_eq!(board.turn(), Player::O);
}

#[test]
fn test_engine_punishes_blunder() {
    // X 0, O 4, X 1, O 2 (forced), X 7 ignores the threat on 6.
    let (board, output) = run_session(ConsoleConfig::default(), "0\n1\n7\nn\n");

    assert!(output.contains("O plays 4."));
    assert!(output.contains("O plays 2."));
    assert!(output.contains("O plays 6."));
    assert!(output.contains("Player O wins!"));
    assert_eq!(board.winner(), Ok(Outcome::Winner(Player::O)));
}

#[test]
fn test_depth_limited_engine_still_plays() {
    let config = ConsoleConfig::default()
        .with_algorithm(Algorithm::Minimax)
        .with_max_ply(Some(2));
    let (board, _) = run_session(config, "4\n");

    assert_eq!(board.move_count(), 2);
}
