#![cfg(feature = "std")]

//! Console guess loop and the sources it reads guesses from.

use std::io::{self, BufRead, Write};

use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::Rng;

use crate::{
    board::{Board, Cell, BB},
    common::GuessResult,
    config::BOARD_SIZE,
    game::{GameSession, GameStatus, GameSummary},
    view::PlayerView,
};

/// One integer read from a [`GuessSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    Value(i64),
    /// The next token does not start with an integer.
    Malformed,
    /// The source is exhausted.
    Closed,
}

/// Where the guess loop gets its coordinates from, one integer at a time.
pub trait GuessSource {
    /// Next integer from the input. `board` is the current board for sources
    /// that pick targets themselves.
    fn next_int(&mut self, board: &Board) -> io::Result<Scan>;

    /// Drop what is left of the current input line after a malformed read.
    fn discard_line(&mut self) {}

    /// Whether the loop should echo each guess after the prompt.
    fn echoes(&self) -> bool {
        false
    }
}

/// Reads whitespace-separated integers from any buffered reader, typically
/// stdin.
///
/// A guess may span lines and one line may hold several guesses. Whatever
/// follows an integer on its line stays buffered for the next read.
pub struct LineSource<R> {
    reader: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
        }
    }
}

impl<R: BufRead> GuessSource for LineSource<R> {
    fn next_int(&mut self, _board: &Board) -> io::Result<Scan> {
        loop {
            let rest = &self.line[self.pos..];
            let token = rest.trim_start();
            if token.is_empty() {
                self.line.clear();
                self.pos = 0;
                if self.reader.read_line(&mut self.line)? == 0 {
                    return Ok(Scan::Closed);
                }
                continue;
            }
            self.pos += rest.len() - token.len();
            return Ok(match split_int(token) {
                Some((value, tail)) => {
                    self.pos += token.len() - tail.len();
                    Scan::Value(value)
                }
                None => Scan::Malformed,
            });
        }
    }

    fn discard_line(&mut self) {
        self.line.clear();
        self.pos = 0;
    }
}

/// Split a leading integer (optional sign, then digits) off `input`, after
/// skipping leading whitespace. Returns the value and the unread tail, or
/// `None` when `input` does not start with an integer that fits in `i64`.
pub fn split_int(input: &str) -> Option<(i64, &str)> {
    let input = input.trim_start();
    let sign = usize::from(input.starts_with(['+', '-']));
    let digits = input[sign..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    let (number, tail) = input.split_at(sign + digits);
    number.parse().ok().map(|value| (value, tail))
}

fn grid_error<E>(err: E) -> io::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    io::Error::new(io::ErrorKind::InvalidData, err)
}

/// Fires at random cells, never the same cell twice.
pub struct RandomShooter {
    rng: SmallRng,
    fired: BB,
    pending_col: Option<i64>,
}

impl RandomShooter {
    pub fn new(rng: SmallRng) -> Self {
        Self {
            rng,
            fired: BB::new(),
            pending_col: None,
        }
    }

    /// Pick an unplayed cell it has not fired at yet.
    fn pick(&mut self, board: &Board) -> io::Result<Option<(usize, usize)>> {
        let taken = board.occupancy(Cell::Hit).map_err(grid_error)?
            | board.occupancy(Cell::Miss).map_err(grid_error)?
            | self.fired;
        let mut open = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if !taken.get(r, c).map_err(grid_error)? {
                    open.push((r, c));
                }
            }
        }
        if open.is_empty() {
            return Ok(None);
        }
        let (r, c) = open[self.rng.random_range(0..open.len())];
        self.fired.set(r, c).map_err(grid_error)?;
        Ok(Some((r, c)))
    }
}

impl GuessSource for RandomShooter {
    fn next_int(&mut self, board: &Board) -> io::Result<Scan> {
        if let Some(col) = self.pending_col.take() {
            return Ok(Scan::Value(col));
        }
        Ok(match self.pick(board)? {
            Some((r, c)) => {
                self.pending_col = Some(c as i64);
                Scan::Value(r as i64)
            }
            None => Scan::Closed,
        })
    }

    fn echoes(&self) -> bool {
        true
    }
}

/// How the guess loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopOutcome {
    /// The session reached `Won` or `Exhausted`.
    Finished(GameSummary),
    /// Input ran out while the session was still playing.
    InputClosed(GameSummary),
}

impl LoopOutcome {
    pub fn summary(&self) -> GameSummary {
        match self {
            LoopOutcome::Finished(s) | LoopOutcome::InputClosed(s) => *s,
        }
    }
}

enum Read {
    Guess(i64, i64),
    Malformed,
    Closed,
}

/// Read a row then a column. The column is not read after a malformed row.
fn read_guess(source: &mut dyn GuessSource, board: &Board) -> io::Result<Read> {
    let row = match source.next_int(board)? {
        Scan::Value(v) => v,
        Scan::Malformed => return Ok(Read::Malformed),
        Scan::Closed => return Ok(Read::Closed),
    };
    Ok(match source.next_int(board)? {
        Scan::Value(col) => Read::Guess(row, col),
        Scan::Malformed => Read::Malformed,
        Scan::Closed => Read::Closed,
    })
}

fn write_player_view<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    write!(out, "\nPlayer view:\n{}", PlayerView(board))
}

/// Run guesses from `source` against `session` until it is won, exhausted,
/// or the source runs dry.
pub fn run_guess_loop<W: Write>(
    session: &mut GameSession,
    source: &mut dyn GuessSource,
    out: &mut W,
) -> io::Result<LoopOutcome> {
    writeln!(
        out,
        "\nGame started! {} ship cells remain. Max attempts: {}",
        session.remaining(),
        session.max_attempts()
    )?;
    write_player_view(out, session.board())?;

    while session.status() == GameStatus::Playing {
        write!(
            out,
            "\nEnter row and column (0..{}), separated by a space: ",
            BOARD_SIZE - 1
        )?;
        out.flush()?;
        let (row, col) = match read_guess(source, session.board())? {
            Read::Guess(row, col) => (row, col),
            Read::Malformed => {
                debug!("discarding malformed input");
                source.discard_line();
                writeln!(out, "Invalid input. Try again.")?;
                continue;
            }
            Read::Closed => {
                writeln!(
                    out,
                    "\nInput closed. {} ship cells remain after {} attempts.",
                    session.remaining(),
                    session.attempts()
                )?;
                return Ok(LoopOutcome::InputClosed(session.summary()));
            }
        };
        if source.echoes() {
            writeln!(out, "{} {}", row, col)?;
        }

        match session.guess(row, col) {
            Ok(GuessResult::Hit) => writeln!(out, "Hit! {} remaining.", session.remaining())?,
            Ok(GuessResult::Miss) => writeln!(out, "Water!")?,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        }
        write_player_view(out, session.board())?;
    }

    let summary = session.summary();
    match summary.status {
        GameStatus::Won => writeln!(
            out,
            "\nCongratulations! You sank every ship in {} attempts.",
            summary.attempts
        )?,
        GameStatus::Exhausted => writeln!(
            out,
            "\nGame over! Out of attempts. {} ship cells remained.",
            summary.remaining
        )?,
        GameStatus::Playing => warn!("guess loop left while still playing"),
    }
    Ok(LoopOutcome::Finished(summary))
}
