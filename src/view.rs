//! Console renderings of a board.

use core::fmt;

use crate::board::{Board, Cell};
use crate::config::BOARD_SIZE;

/// Raw cell values (0/1/3/5/9) with row and column headers.
#[derive(Clone, Copy)]
pub struct DebugView<'a>(pub &'a Board);

/// What the player may see: `H` for hits, `.` for misses, `~` for
/// everything else.
#[derive(Clone, Copy)]
pub struct PlayerView<'a>(pub &'a Board);

fn write_grid(
    f: &mut fmt::Formatter<'_>,
    board: &Board,
    mut write_cell: impl FnMut(&mut fmt::Formatter<'_>, Cell) -> fmt::Result,
) -> fmt::Result {
    write!(f, "    ")?;
    for col in 0..BOARD_SIZE {
        write!(f, "{:2} ", col)?;
    }
    writeln!(f)?;
    write!(f, "   ")?;
    for _ in 0..BOARD_SIZE {
        write!(f, "---")?;
    }
    writeln!(f)?;
    for (r, row) in board.rows().enumerate() {
        write!(f, "{:2}| ", r)?;
        for &cell in row {
            write_cell(f, cell)?;
        }
        writeln!(f)?;
    }
    Ok(())
}

impl fmt::Display for DebugView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self.0, |f, cell| write!(f, "{:2} ", cell.value()))
    }
}

impl fmt::Display for PlayerView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self.0, |f, cell| write!(f, " {} ", cell.symbol()))
    }
}
