#![cfg_attr(not(feature = "std"), no_std)]

mod bitboard;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod mask;
mod overlay;
#[cfg(feature = "std")]
mod play;
pub mod prelude;
mod setup;
mod ship;
mod view;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use mask::*;
pub use overlay::*;
#[cfg(feature = "std")]
pub use play::*;
pub use setup::*;
pub use ship::*;
pub use view::*;
