//! Line-based console: prompts, the human move source and event rendering.

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tictac_engine::{Board, Difficulty, EngineError, GameEvent, MoveSource, Outcome, Player};
use tracing::{debug, instrument, warn};

/// Console shared between the move sources and the renderer.
pub type SharedConsole<R, W> = Rc<RefCell<Console<R, W>>>;

/// A terminal: something to read lines from and something to write to.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Wraps the console for sharing.
    pub fn shared(self) -> SharedConsole<R, W> {
        Rc::new(RefCell::new(self))
    }

    /// Returns the output stream.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Writes a line.
    pub fn say(&mut self, text: impl std::fmt::Display) -> std::io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Prints `question` and reads one line, trimmed. `None` at end of input.
    pub fn ask(&mut self, question: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks for a player name; a blank answer or end of input gives `default`.
    #[instrument(skip(self))]
    pub fn ask_name(&mut self, question: &str, default: &str) -> std::io::Result<String> {
        let answer = self.ask(question)?.unwrap_or_default();
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    /// Asks a yes/no question; anything but `y` or `yes` is no.
    #[instrument(skip(self))]
    pub fn ask_yes_no(&mut self, question: &str) -> std::io::Result<bool> {
        let answer = self.ask(question)?.unwrap_or_default().to_lowercase();
        Ok(matches!(answer.as_str(), "y" | "yes"))
    }

    /// Shows the difficulty menu until a valid choice is made.
    ///
    /// Returns `None` if input ends first.
    #[instrument(skip(self))]
    pub fn choose_difficulty(&mut self) -> std::io::Result<Option<Difficulty>> {
        self.say("Choose a difficulty level:")?;
        for (i, difficulty) in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
            .iter()
            .enumerate()
        {
            self.say(format!("{}. {} ({})", i + 1, difficulty, difficulty.describe()))?;
        }

        loop {
            let Some(choice) = self.ask("Enter the number of your choice: ")? else {
                return Ok(None);
            };
            match choice.as_str() {
                "1" => return Ok(Some(Difficulty::Easy)),
                "2" => return Ok(Some(Difficulty::Medium)),
                "3" => return Ok(Some(Difficulty::Hard)),
                _ => self.say("Invalid choice. Please select 1, 2, or 3.")?,
            }
        }
    }

    /// Prints what happened in the match.
    pub fn render(&mut self, event: &GameEvent) -> std::io::Result<()> {
        match event {
            GameEvent::MatchStarted { board, first } => {
                self.say("Welcome to Tic-Tac-Toe!")?;
                self.render_board(board)?;
                self.say(format!("{} moves first.", first))
            }
            GameEvent::MoveMade {
                player,
                position,
                difficulty: Some(difficulty),
                board,
                ..
            } => {
                self.say(format!(
                    "Computer Move ({}): {} in {}",
                    difficulty.describe(),
                    player,
                    position.to_index() + 1
                ))?;
                self.render_board(board)
            }
            GameEvent::MoveMade { board, .. } => self.render_board(board),
            GameEvent::MoveRejected {
                error: EngineError::CellOccupied(_),
                ..
            } => self.say("That spot is already taken. Try again."),
            GameEvent::MoveRejected { error, .. } => self.say(format!("{}. Try again.", error)),
            GameEvent::GameOver {
                outcome, winner, ..
            } => match (outcome, winner) {
                (Outcome::Winner(player), Some(name)) => self.say(format!("{} ({}) wins!", name, player)),
                (Outcome::Winner(player), None) => self.say(format!("{} wins!", player)),
                (Outcome::Draw, _) => self.say("It's a tie!"),
            },
        }
    }

    fn render_board(&mut self, board: &Board) -> std::io::Result<()> {
        self.say(board)?;
        self.say("")
    }
}

/// A human player typing cell numbers 1-9 at the console.
///
/// Non-numbers and numbers outside 1-9 are re-prompted here; occupied
/// cells are left to the engine to reject.
#[derive(Debug)]
pub struct ConsoleSource<R, W> {
    name: String,
    console: SharedConsole<R, W>,
}

impl<R, W> ConsoleSource<R, W> {
    /// Creates a source for the named player.
    pub fn new(name: impl Into<String>, console: SharedConsole<R, W>) -> Self {
        Self {
            name: name.into(),
            console,
        }
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleSource<R, W> {
    #[instrument(skip(self, _board), fields(name = %self.name))]
    fn request_move(&mut self, _board: &Board, player: Player) -> Result<usize, EngineError> {
        let mut console = self.console.borrow_mut();
        let question = format!("{}'s turn ({}), choose a cell (1-9): ", self.name, player);

        loop {
            let answer = match console.ask(&question) {
                Ok(Some(answer)) => answer,
                Ok(None) => return Err(EngineError::InputClosed),
                Err(e) => {
                    warn!(error = %e, "Failed to read move");
                    return Err(EngineError::InputClosed);
                }
            };

            let reply = match answer.parse::<usize>() {
                Ok(cell @ 1..=9) => {
                    debug!(cell, "Move entered");
                    return Ok(cell - 1);
                }
                Ok(_) => "Move must be between 1 and 9.",
                Err(_) => "Invalid input. Please enter a number between 1 and 9.",
            };
            if let Err(e) = console.say(reply) {
                warn!(error = %e, "Failed to write prompt");
                return Err(EngineError::InputClosed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> SharedConsole<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()).shared()
    }

    fn output(console: &SharedConsole<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.borrow().output().clone()).unwrap()
    }

    #[test]
    fn test_reprompts_until_in_range() {
        let shared = console("hello\n0\n10\n5\n");
        let mut source = ConsoleSource::new("Ada", shared.clone());

        assert_eq!(source.request_move(&Board::new(), Player::X), Ok(4));

        let text = output(&shared);
        assert!(text.contains("Invalid input. Please enter a number between 1 and 9."));
        assert_eq!(text.matches("Move must be between 1 and 9.").count(), 2);
        assert_eq!(text.matches("Ada's turn (X)").count(), 4);
    }

    #[test]
    fn test_end_of_input_closes_source() {
        let shared = console("");
        let mut source = ConsoleSource::new("Ada", shared);
        assert_eq!(
            source.request_move(&Board::new(), Player::X),
            Err(EngineError::InputClosed)
        );
    }

    #[test]
    fn test_yes_no() {
        let shared = console("Y\nnope\n");
        assert!(shared.borrow_mut().ask_yes_no("Play again? ").unwrap());
        assert!(!shared.borrow_mut().ask_yes_no("Play again? ").unwrap());
        assert!(!shared.borrow_mut().ask_yes_no("Play again? ").unwrap());
    }

    #[test]
    fn test_blank_name_falls_back() {
        let shared = console("  Ada  \n\n");
        assert_eq!(shared.borrow_mut().ask_name("Name: ", "Player 1").unwrap(), "Ada");
        assert_eq!(shared.borrow_mut().ask_name("Name: ", "Player 1").unwrap(), "Player 1");
        assert_eq!(shared.borrow_mut().ask_name("Name: ", "Player 2").unwrap(), "Player 2");
        assert_eq!(output(&shared), "Name: Name: Name: ");
    }

    #[test]
    fn test_difficulty_menu_retries() {
        let shared = console("7\n3\n");
        assert_eq!(shared.borrow_mut().choose_difficulty().unwrap(), Some(Difficulty::Hard));
        assert!(output(&shared).contains("Invalid choice. Please select 1, 2, or 3."));
    }

    #[test]
    fn test_render_game_over() {
        let shared = console("");
        shared
            .borrow_mut()
            .render(&GameEvent::GameOver {
                outcome: Outcome::Draw,
                winner: None,
                board: Board::new(),
            })
            .unwrap();
        assert_eq!(output(&shared), "It's a tie!\n");
    }
}
