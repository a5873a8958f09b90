//! Stamping ability stencils onto the board.

use crate::bitboard::BitBoardError;
use crate::board::{Board, Cell};
use crate::mask::{Mask, MaskShape, MASK_MID};

/// An ability: a stencil shape centered on a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ability {
    pub shape: MaskShape,
    pub row: isize,
    pub col: isize,
}

impl Ability {
    pub const fn new(shape: MaskShape, row: isize, col: isize) -> Self {
        Self { shape, row, col }
    }

    /// Build this ability's stencil and stamp it onto `board`.
    pub fn apply(&self, board: &mut Board) -> Result<usize, BitBoardError> {
        let mask = self.shape.build()?;
        Ok(overlay(board, self.row, self.col, &mask))
    }
}

/// Center `mask` on `(origin_row, origin_col)` and turn every covered water
/// cell into an ability cell. Returns how many cells changed.
///
/// Cells off the board are skipped. Non-water cells (ships, earlier ability
/// zones, guesses) are never overwritten.
pub fn overlay(board: &mut Board, origin_row: isize, origin_col: isize, mask: &Mask) -> usize {
    let mid = MASK_MID as isize;
    let mut stamped = 0;
    for (r, c) in mask.iter_set_bits() {
        let target_row = origin_row + r as isize - mid;
        let target_col = origin_col + c as isize - mid;
        if let Some(cell) = board.cell_mut(target_row, target_col) {
            if *cell == Cell::Water {
                *cell = Cell::Ability;
                stamped += 1;
            }
        }
    }
    stamped
}
