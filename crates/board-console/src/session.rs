//! Interactive command loop.

use std::io::{self, BufRead, Write};

use board_engine::{Game, MoveApplied, SquareSet};
use tracing::debug;

use crate::command::{ConsoleCommand, HELP};
use crate::render::{BoardView, RenderOptions};

/// One game played over a line-oriented reader and writer.
pub struct Session<R: BufRead, W: Write> {
    game: Game,
    options: RenderOptions,
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, options: RenderOptions, reader: R, writer: W) -> Self {
        Self {
            game,
            options,
            reader,
            writer,
        }
    }

    /// Consumes the session and returns the game in its final state.
    pub fn into_game(self) -> Game {
        self.game
    }

    /// Runs until `quit`, `exit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.writer, "Type 'help' for the list of commands.")?;
        self.draw(SquareSet::EMPTY)?;

        loop {
            write!(self.writer, "{}> ", self.game.current_turn())?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                writeln!(self.writer)?;
                break;
            }

            let command = match ConsoleCommand::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.writer, "{}", e)?;
                    continue;
                }
            };
            debug!(?command, "console command");

            match command {
                ConsoleCommand::Move(mv) => match self.game.submit_move(mv.from, mv.to) {
                    Ok(applied) => {
                        self.report(&applied)?;
                        self.draw(SquareSet::EMPTY)?;
                    }
                    Err(e) => writeln!(self.writer, "{}", e)?,
                },
                ConsoleCommand::Hint(sq) => match self.game.hint(sq) {
                    Ok(hint) if hint.is_empty() => {
                        writeln!(self.writer, "The piece on {} cannot move.", sq)?
                    }
                    Ok(hint) => self.draw(hint)?,
                    Err(e) => writeln!(self.writer, "{}", e)?,
                },
                ConsoleCommand::Board => self.draw(SquareSet::EMPTY)?,
                ConsoleCommand::Help => writeln!(self.writer, "{}", HELP)?,
                ConsoleCommand::Quit => break,
                ConsoleCommand::Empty => {}
            }
        }

        writeln!(self.writer, "Game over after {} moves.", self.game.move_count())?;
        self.writer.flush()
    }

    fn draw(&mut self, hint: SquareSet) -> io::Result<()> {
        let view = BoardView::new(&self.game, self.options).with_hint(hint);
        writeln!(self.writer, "{}", view)
    }

    fn report(&mut self, applied: &MoveApplied) -> io::Result<()> {
        write!(self.writer, "{} {}", applied.piece, applied.mv)?;
        if let Some((sq, victim)) = applied.captured {
            write!(self.writer, ", captures {} on {}", victim, sq)?;
        }
        if let Some(promoted) = applied.promoted {
            write!(self.writer, ", crowned {}", promoted.kind)?;
        }
        writeln!(self.writer)
    }
}
