//! Commonly used types and utilities for ease of import.

pub use crate::{
    setup_board, Board, Cell, DebugView, GameSession, GameStatus, GameSummary, Orientation,
    PlayerView, ShipPlacement, ABILITIES, FLEET,
};

#[cfg(feature = "std")]
pub use crate::{run_guess_loop, GuessSource, LineSource, LoopOutcome, RandomShooter, Scan};
