use crate::mask::MaskShape;
use crate::overlay::Ability;
use crate::ship::{Orientation, ShipDef, ShipPlacement};

pub const BOARD_SIZE: usize = 10;
pub const SHIP_LENGTH: usize = 3;
pub const ABILITY_SIZE: usize = 5;
pub const MAX_ATTEMPTS: u32 = 25;

pub const NUM_SHIPS: usize = 4;
pub const FLEET: [ShipPlacement; NUM_SHIPS] = [
    ShipPlacement::new(
        ShipDef::new("horizontal ship", SHIP_LENGTH),
        2,
        1,
        Orientation::Horizontal,
    ),
    ShipPlacement::new(
        ShipDef::new("vertical ship", SHIP_LENGTH),
        6,
        5,
        Orientation::Vertical,
    ),
    ShipPlacement::new(
        ShipDef::new("diagonal ship (↘)", SHIP_LENGTH),
        0,
        7,
        Orientation::DiagonalDownRight,
    ),
    ShipPlacement::new(
        ShipDef::new("anti-diagonal ship (↙)", SHIP_LENGTH),
        0,
        2,
        Orientation::DiagonalDownLeft,
    ),
];

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = NUM_SHIPS * SHIP_LENGTH;

pub const ABILITIES: [Ability; 3] = [
    Ability::new(MaskShape::Cone, 2, 2),
    Ability::new(MaskShape::Cross, 7, 2),
    Ability::new(MaskShape::Diamond, 5, 7),
];
