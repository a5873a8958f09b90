//! Fixed 5×5 area-of-effect stencils.
//!
//! Each builder is pure and returns the same grid on every call. A marked
//! cell is part of the ability's footprint, relative to the stencil center
//! `(ABILITY_SIZE / 2, ABILITY_SIZE / 2)`.

use crate::bitboard::{BitBoard, BitBoardError};
use crate::config::ABILITY_SIZE;

/// A 5×5 stencil.
pub type Mask = BitBoard<u32, ABILITY_SIZE>;

/// Center row/column of every stencil.
pub const MASK_MID: usize = ABILITY_SIZE / 2;

/// Stencil shapes an ability can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum MaskShape {
    Cone,
    Cross,
    Diamond,
}

impl MaskShape {
    pub fn build(self) -> Result<Mask, BitBoardError> {
        match self {
            MaskShape::Cone => build_cone(),
            MaskShape::Cross => build_cross(),
            MaskShape::Diamond => build_diamond(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MaskShape::Cone => "cone",
            MaskShape::Cross => "cross",
            MaskShape::Diamond => "diamond",
        }
    }
}

fn build_with(marked: impl Fn(usize, usize) -> bool) -> Result<Mask, BitBoardError> {
    let cells = (0..ABILITY_SIZE).flat_map(|r| (0..ABILITY_SIZE).map(move |c| (r, c)));
    Mask::from_iter(cells.filter(|&(r, c)| marked(r, c)))
}

/// Apex at row 0 center, widening by one cell per side on each row down.
pub fn build_cone() -> Result<Mask, BitBoardError> {
    build_with(|r, c| {
        let left = MASK_MID.saturating_sub(r);
        let right = (MASK_MID + r).min(ABILITY_SIZE - 1);
        (left..=right).contains(&c)
    })
}

/// Full center row plus full center column.
pub fn build_cross() -> Result<Mask, BitBoardError> {
    build_with(|r, c| r == MASK_MID || c == MASK_MID)
}

/// Cells within Manhattan distance `MASK_MID` of the center.
pub fn build_diamond() -> Result<Mask, BitBoardError> {
    build_with(|r, c| r.abs_diff(MASK_MID) + c.abs_diff(MASK_MID) <= MASK_MID)
}
