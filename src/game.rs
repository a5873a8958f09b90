use log::{debug, info};

use crate::{
    board::{Board, Cell},
    common::{BoardError, GuessError, GuessResult},
    config::{BOARD_SIZE, MAX_ATTEMPTS},
};

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    Playing,
    /// Every ship cell was hit.
    Won,
    /// The attempt cap was reached with ship cells left.
    Exhausted,
}

/// Snapshot of a session's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameSummary {
    pub status: GameStatus,
    pub attempts: u32,
    pub remaining: usize,
    pub max_attempts: u32,
}

/// A single-player guessing session owning the board.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    attempts: u32,
    remaining: usize,
    max_attempts: u32,
}

impl GameSession {
    /// Start a session with the standard attempt cap.
    pub fn new(board: Board) -> Self {
        Self::with_max_attempts(board, MAX_ATTEMPTS)
    }

    pub fn with_max_attempts(board: Board, max_attempts: u32) -> Self {
        let remaining = board.count(Cell::Ship);
        Self {
            board,
            attempts: 0,
            remaining,
            max_attempts,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Accepted guesses so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Ship cells not yet hit.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Evaluate the current status. A cleared board wins even on the final
    /// allowed attempt.
    pub fn status(&self) -> GameStatus {
        if self.remaining == 0 {
            GameStatus::Won
        } else if self.attempts >= self.max_attempts {
            GameStatus::Exhausted
        } else {
            GameStatus::Playing
        }
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            status: self.status(),
            attempts: self.attempts,
            remaining: self.remaining,
            max_attempts: self.max_attempts,
        }
    }

    /// Fire at `(row, col)`.
    ///
    /// Out-of-range coordinates and cells already played are rejected without
    /// consuming an attempt. Otherwise the attempt counts, a ship cell becomes
    /// a hit and anything else becomes a miss.
    pub fn guess(&mut self, row: i64, col: i64) -> Result<GuessResult, GuessError> {
        if self.status() != GameStatus::Playing {
            return Err(GuessError::GameOver);
        }
        let (r, c) = match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) if r < BOARD_SIZE && c < BOARD_SIZE => (r, c),
            _ => return Err(GuessError::OutOfBounds { row, col }),
        };
        let result = match self.board.guess(r, c) {
            Ok(result) => result,
            Err(BoardError::AlreadyGuessed) => {
                return Err(GuessError::AlreadyPlayed { row: r, col: c })
            }
            Err(_) => return Err(GuessError::OutOfBounds { row, col }),
        };
        self.attempts += 1;
        if result == GuessResult::Hit {
            self.remaining = self.remaining.saturating_sub(1);
        }
        debug!(
            "guess ({}, {}) -> {:?}, attempt {}/{}",
            r, c, result, self.attempts, self.max_attempts
        );
        match self.status() {
            GameStatus::Playing => {}
            status => info!("session ended {:?} after {} attempts", status, self.attempts),
        }
        Ok(result)
    }
}
