//! Board setup: fleet placement followed by ability overlays.

use log::debug;

use crate::board::Board;
use crate::common::SetupError;
use crate::overlay::Ability;
use crate::ship::ShipPlacement;

/// Validate and place each ship in order.
///
/// Every ship is placed as soon as its own checks pass, so later overlap
/// checks see all earlier ships. The first failure aborts setup.
pub fn place_fleet(board: &mut Board, fleet: &[ShipPlacement]) -> Result<(), SetupError> {
    for ship in fleet {
        ship.validate(board).map_err(|reason| SetupError::Ship {
            ship: ship.def.name(),
            reason,
        })?;
        ship.place_on(board);
        debug!(
            "placed {} at ({}, {}) {:?}",
            ship.def.name(),
            ship.row,
            ship.col,
            ship.orientation
        );
    }
    Ok(())
}

/// Stamp each ability in order; later overlays see earlier ones.
pub fn apply_abilities(board: &mut Board, abilities: &[Ability]) -> Result<(), SetupError> {
    for ability in abilities {
        let stamped = ability.apply(board)?;
        debug!(
            "{} ability at ({}, {}) marked {} cells",
            ability.shape.name(),
            ability.row,
            ability.col,
            stamped
        );
    }
    Ok(())
}

/// Fresh board with `fleet` placed and `abilities` overlaid.
pub fn setup_board(fleet: &[ShipPlacement], abilities: &[Ability]) -> Result<Board, SetupError> {
    let mut board = Board::new();
    place_fleet(&mut board, fleet)?;
    apply_abilities(&mut board, abilities)?;
    Ok(board)
}
