//! Interactive console game loop.

use crate::config::ConsoleConfig;
use anyhow::Result;
use minimax_tictactoe::{Board, CELL_COUNT, Outcome};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// A console session: reads moves from `input`, writes the game to `output`.
#[derive(Debug)]
pub struct Console<R, W> {
    board: Board,
    config: ConsoleConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a session on a fresh board.
    pub fn new(config: ConsoleConfig, input: R, output: W) -> Self {
        Self {
            board: Board::new(),
            config,
            input,
            output,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Plays games until the user declines a rematch or input runs out.
    #[instrument(skip(self), fields(algorithm = %self.config.algorithm()))]
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Starting a new game.")?;

        loop {
            self.print_status()?;
            if !self.play_move()? {
                info!("Input closed");
                return Ok(());
            }

            if self.board.is_game_over() {
                self.print_winner()?;
                if !self.try_again()? {
                    return Ok(());
                }
            }
        }
    }

    fn print_status(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}\n", self.board)?;
        writeln!(self.output, "{}'s turn.", self.board.turn())?;
        Ok(())
    }

    /// Returns `false` once input is exhausted.
    fn play_move(&mut self) -> Result<bool> {
        let player = self.board.turn();
        if self.config.is_human(player) {
            return self.human_move();
        }

        let choice = self
            .config
            .algorithm()
            .play(&mut self.board, *self.config.max_ply())?;
        writeln!(self.output, "{} plays {}.", player, choice.index)?;
        Ok(true)
    }

    fn human_move(&mut self) -> Result<bool> {
        write!(self.output, "Index of move: ")?;
        self.output.flush()?;

        let Some(token) = self.read_token()? else {
            return Ok(false);
        };

        let reason = match token.parse::<i64>() {
            Err(_) => Some("The index of the move must be a number.".to_string()),
            Ok(index) if !(0..CELL_COUNT as i64).contains(&index) => Some(format!(
                "The index of the move must be between 0 and {}, inclusive.",
                CELL_COUNT - 1
            )),
            Ok(index) => {
                let played = self.board.play(index as usize)?;
                (!played).then(|| "The selected index must be blank.".to_string())
            }
        };

        if let Some(reason) = reason {
            debug!(%token, %reason, "Rejected move");
            writeln!(self.output, "\nInvalid move.")?;
            writeln!(self.output, "\n{}", reason)?;
        }
        Ok(true)
    }

    fn print_winner(&mut self) -> Result<()> {
        let outcome = self.board.winner()?;
        info!(%outcome, "Game over");

        writeln!(self.output, "\n{}\n", self.board)?;
        match outcome {
            Outcome::Draw => writeln!(self.output, "The game is a draw.")?,
            Outcome::Winner(player) => writeln!(self.output, "Player {} wins!", player)?,
        }
        Ok(())
    }

    /// Asks for a rematch; resets the board on yes.
    fn try_again(&mut self) -> Result<bool> {
        loop {
            write!(self.output, "Would you like to start a new game? (Y/N): ")?;
            self.output.flush()?;

            let Some(response) = self.read_token()? else {
                return Ok(false);
            };
            if response.eq_ignore_ascii_case("y") {
                self.board.reset();
                writeln!(self.output, "Started new game.")?;
                return Ok(true);
            }
            if response.eq_ignore_ascii_case("n") {
                return Ok(false);
            }
            writeln!(self.output, "Invalid input.")?;
        }
    }

    /// Reads the next non-blank line, trimmed. `None` at end of input.
    fn read_token(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let token = line.trim();
            if !token.is_empty() {
                return Ok(Some(token.to_string()));
            }
        }
    }
}
