//! The 10×10 grid of cell states shared by setup and play.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, GuessResult};
use crate::config::BOARD_SIZE;

/// Occupancy grid sized to the board.
pub type BB = BitBoard<u128, BOARD_SIZE>;

/// State of a single board cell. Discriminants are the raw values shown in
/// the debug view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Water = 0,
    Miss = 1,
    Ship = 3,
    Ability = 5,
    Hit = 9,
}

impl Cell {
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Player-facing symbol. Anything not yet guessed looks like water.
    pub const fn symbol(self) -> char {
        match self {
            Cell::Hit => 'H',
            Cell::Miss => '.',
            Cell::Water | Cell::Ship | Cell::Ability => '~',
        }
    }

    /// Whether a guess already landed on this cell.
    pub const fn is_played(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

impl TryFrom<u8> for Cell {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Water),
            1 => Ok(Cell::Miss),
            3 => Ok(Cell::Ship),
            5 => Ok(Cell::Ability),
            9 => Ok(Cell::Hit),
            other => Err(other),
        }
    }
}

/// Square grid of [`Cell`]s, all water when created.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Water; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Whether `(row, col)` lies in `[0, BOARD_SIZE)` on both axes.
    pub fn contains(row: isize, col: isize) -> bool {
        (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col)
    }

    /// Cell at signed coordinates, `None` off the board.
    pub fn cell(&self, row: isize, col: isize) -> Option<Cell> {
        if Self::contains(row, col) {
            Some(self.cells[row as usize][col as usize])
        } else {
            None
        }
    }

    pub fn cell_mut(&mut self, row: isize, col: isize) -> Option<&mut Cell> {
        if Self::contains(row, col) {
            Some(&mut self.cells[row as usize][col as usize])
        } else {
            None
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(BoardError::OutOfBounds { row, col })
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        let slot = self
            .cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(BoardError::OutOfBounds { row, col })?;
        *slot = cell;
        Ok(())
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE]> {
        self.cells.iter()
    }

    /// Number of cells currently holding `state`.
    pub fn count(&self, state: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == state).count()
    }

    /// Bitboard of every cell holding `state`.
    pub fn occupancy(&self, state: Cell) -> Result<BB, BoardError> {
        let mut grid = BB::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                if cell == state {
                    grid.set(r, c)?;
                }
            }
        }
        Ok(grid)
    }

    /// Resolve a guess at `(row, col)`: ship becomes hit, water or ability
    /// becomes miss. Cells already played are rejected untouched.
    pub fn guess(&mut self, row: usize, col: usize) -> Result<GuessResult, BoardError> {
        let cell = self.get(row, col)?;
        if cell.is_played() {
            return Err(BoardError::AlreadyGuessed);
        }
        let (next, result) = match cell {
            Cell::Ship => (Cell::Hit, GuessResult::Hit),
            _ => (Cell::Miss, GuessResult::Miss),
        };
        self.set(row, col, next)?;
        Ok(result)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in &self.cells {
            write!(f, "  ")?;
            for cell in row {
                write!(f, "{} ", cell.value())?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
