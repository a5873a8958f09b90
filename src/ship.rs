//! Ship geometry: orientations, bounds and overlap validation, placement.
//!
//! Every orientation is described by one per-step delta. The path a ship
//! covers, the bounds check, the overlap check and the placer are all derived
//! from that delta.

use crate::board::{Board, Cell};
use crate::common::PlacementError;

/// Direction a ship extends from its anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// Row and column both increase (↘).
    DiagonalDownRight,
    /// Row increases, column decreases (↙).
    DiagonalDownLeft,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::DiagonalDownRight,
        Orientation::DiagonalDownLeft,
    ];

    /// `(row, col)` step between consecutive ship cells.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::DiagonalDownRight => (1, 1),
            Orientation::DiagonalDownLeft => (1, -1),
        }
    }
}

/// Orientation codes 0..=3 in declaration order. Any other code is rejected
/// and handed back to the caller.
impl TryFrom<u8> for Orientation {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Orientation::ALL.get(code as usize).copied().ok_or(code)
    }
}

/// Cell covered by the `offset`-th segment of a ship.
fn segment(
    start_row: isize,
    start_col: isize,
    orientation: Orientation,
    offset: usize,
) -> (isize, isize) {
    let (dr, dc) = orientation.delta();
    let step = offset as isize;
    (start_row + dr * step, start_col + dc * step)
}

/// Cells a ship of `length` would cover, anchor first.
pub fn ship_path(
    start_row: isize,
    start_col: isize,
    length: usize,
    orientation: Orientation,
) -> impl Iterator<Item = (isize, isize)> {
    (0..length).map(move |i| segment(start_row, start_col, orientation, i))
}

/// True iff both the anchor and the terminal cell lie on the board.
///
/// The path is a straight line, so every cell between the two ends is then
/// on the board as well.
pub fn in_bounds(
    start_row: isize,
    start_col: isize,
    length: usize,
    orientation: Orientation,
) -> bool {
    let (end_row, end_col) =
        segment(start_row, start_col, orientation, length.saturating_sub(1));
    Board::contains(start_row, start_col) && Board::contains(end_row, end_col)
}

/// True if any cell on the path is not water.
///
/// Meant to run after [`in_bounds`]; a path cell off the board counts as
/// occupied rather than panicking.
pub fn overlaps(
    board: &Board,
    start_row: isize,
    start_col: isize,
    length: usize,
    orientation: Orientation,
) -> bool {
    ship_path(start_row, start_col, length, orientation)
        .any(|(r, c)| board.cell(r, c) != Some(Cell::Water))
}

/// Write `Ship` into every cell on the path. No validation: callers check
/// [`in_bounds`] and [`overlaps`] first. Cells off the board are skipped.
pub fn place(
    board: &mut Board,
    length: usize,
    start_row: isize,
    start_col: isize,
    orientation: Orientation,
) {
    for (r, c) in ship_path(start_row, start_col, length, orientation) {
        if let Some(cell) = board.cell_mut(r, c) {
            *cell = Cell::Ship;
        }
    }
}

/// Name and length of a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipDef {
    name: &'static str,
    length: usize,
}

impl ShipDef {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship anchored at `(row, col)` extending along `orientation`.
///
/// Ships have no identity once written to the board; this only carries the
/// parameters of the act of placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipPlacement {
    pub def: ShipDef,
    pub row: isize,
    pub col: isize,
    pub orientation: Orientation,
}

impl ShipPlacement {
    pub const fn new(def: ShipDef, row: isize, col: isize, orientation: Orientation) -> Self {
        Self {
            def,
            row,
            col,
            orientation,
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = (isize, isize)> {
        ship_path(self.row, self.col, self.def.length(), self.orientation)
    }

    pub fn in_bounds(&self) -> bool {
        in_bounds(self.row, self.col, self.def.length(), self.orientation)
    }

    pub fn overlaps(&self, board: &Board) -> bool {
        overlaps(board, self.row, self.col, self.def.length(), self.orientation)
    }

    /// Bounds first, then overlap against whatever is already on `board`.
    pub fn validate(&self, board: &Board) -> Result<(), PlacementError> {
        if !self.in_bounds() {
            return Err(PlacementError::OutOfBounds);
        }
        if self.overlaps(board) {
            return Err(PlacementError::Overlaps);
        }
        Ok(())
    }

    pub fn place_on(&self, board: &mut Board) {
        place(board, self.def.length(), self.row, self.col, self.orientation);
    }
}
