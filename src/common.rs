//! Shared error and result types.

use core::fmt;

use crate::bitboard::BitBoardError;

/// Result of an accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GuessResult {
    /// The cell held an untouched ship segment.
    Hit,
    /// The cell held water or an ability zone.
    Miss,
}

/// Errors returned by [`Board`](crate::Board) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
    /// Cell lies outside the board.
    OutOfBounds { row: usize, col: usize },
    /// Cell was already hit or missed.
    AlreadyGuessed,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "bitboard error: {}", e),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the board", row, col)
            }
            BoardError::AlreadyGuessed => write!(f, "cell was already played"),
        }
    }
}

/// Why a ship placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    OutOfBounds,
    Overlaps,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "is out of bounds"),
            PlacementError::Overlaps => write!(f, "overlaps another ship"),
        }
    }
}

/// Fatal setup failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// A hardcoded ship could not be placed.
    Ship {
        ship: &'static str,
        reason: PlacementError,
    },
    /// An ability stencil could not be built.
    Mask(BitBoardError),
}

impl From<BitBoardError> for SetupError {
    fn from(err: BitBoardError) -> Self {
        SetupError::Mask(err)
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::Ship { ship, reason } => write!(f, "{} {}", ship, reason),
            SetupError::Mask(e) => write!(f, "ability stencil: {}", e),
        }
    }
}

/// Recoverable guess rejections. None of them consume an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    OutOfBounds { row: i64, col: i64 },
    AlreadyPlayed { row: usize, col: usize },
    /// The session already reached a terminal state.
    GameOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessError::OutOfBounds { .. } => write!(f, "Coordinates out of bounds."),
            GuessError::AlreadyPlayed { .. } => write!(f, "Position already played."),
            GuessError::GameOver => write!(f, "The game is already over."),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}
#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for SetupError {}
#[cfg(feature = "std")]
impl std::error::Error for GuessError {}
