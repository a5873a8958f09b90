use fleetgrid::{
    place_fleet, setup_board, Board, BoardError, Cell, GuessResult, Orientation, PlacementError,
    SetupError, ShipDef, ShipPlacement, ABILITIES, BOARD_SIZE, FLEET, SHIP_LENGTH,
    TOTAL_SHIP_CELLS,
};

const FLEET_CELLS: [(usize, usize); 12] = [
    (2, 1),
    (2, 2),
    (2, 3),
    (6, 5),
    (7, 5),
    (8, 5),
    (0, 7),
    (1, 8),
    (2, 9),
    (0, 2),
    (1, 1),
    (2, 0),
];

#[test]
fn test_new_board_is_all_water() {
    let board = Board::new();
    assert_eq!(board.count(Cell::Water), BOARD_SIZE * BOARD_SIZE);
}

#[test]
fn test_cell_values_round_trip() {
    for cell in [Cell::Water, Cell::Miss, Cell::Ship, Cell::Ability, Cell::Hit] {
        assert_eq!(Cell::try_from(cell.value()), Ok(cell));
    }
    assert_eq!(Cell::Ship.value(), 3);
    assert_eq!(Cell::Hit.value(), 9);
    assert_eq!(Cell::try_from(2u8), Err(2));
}

#[test]
fn test_get_and_set_bounds() {
    let mut board = Board::new();
    assert_eq!(
        board.set(10, 0, Cell::Ship).unwrap_err(),
        BoardError::OutOfBounds { row: 10, col: 0 }
    );
    assert!(board.get(0, 10).is_err());
    assert_eq!(board.cell(-1, 0), None);
}

#[test]
fn test_guess_hit_and_miss() {
    let mut board = Board::new();
    board.set(3, 3, Cell::Ship).unwrap();
    board.set(4, 4, Cell::Ability).unwrap();

    assert_eq!(board.guess(3, 3).unwrap(), GuessResult::Hit);
    assert_eq!(board.get(3, 3).unwrap(), Cell::Hit);
    assert_eq!(board.guess(4, 4).unwrap(), GuessResult::Miss);
    assert_eq!(board.get(4, 4).unwrap(), Cell::Miss);
    assert_eq!(board.guess(0, 0).unwrap(), GuessResult::Miss);

    // repeated guess triggers error and leaves the cell alone
    assert_eq!(board.guess(3, 3).unwrap_err(), BoardError::AlreadyGuessed);
    assert_eq!(board.get(3, 3).unwrap(), Cell::Hit);
}

#[test]
fn test_standard_fleet_places_twelve_cells() {
    let mut board = Board::new();
    place_fleet(&mut board, &FLEET).unwrap();

    assert_eq!(board.count(Cell::Ship), TOTAL_SHIP_CELLS);
    assert_eq!(TOTAL_SHIP_CELLS, 4 * SHIP_LENGTH);
    let ships = board.occupancy(Cell::Ship).unwrap();
    for (r, c) in FLEET_CELLS {
        assert!(ships.get(r, c).unwrap(), "expected ship at ({}, {})", r, c);
    }
}

#[test]
fn test_setup_board_overlays_abilities() {
    let board = setup_board(&FLEET, &ABILITIES).unwrap();
    assert_eq!(board.count(Cell::Ship), TOTAL_SHIP_CELLS);
    assert_eq!(board.count(Cell::Ability), 35);
    assert_eq!(
        board.count(Cell::Water),
        BOARD_SIZE * BOARD_SIZE - TOTAL_SHIP_CELLS - 35
    );
}

#[test]
fn test_setup_reports_out_of_bounds_ship() {
    let fleet = [ShipPlacement::new(
        ShipDef::new("horizontal ship", SHIP_LENGTH),
        0,
        8,
        Orientation::Horizontal,
    )];
    let err = setup_board(&fleet, &ABILITIES).unwrap_err();
    assert_eq!(
        err,
        SetupError::Ship {
            ship: "horizontal ship",
            reason: PlacementError::OutOfBounds,
        }
    );
    assert_eq!(err.to_string(), "horizontal ship is out of bounds");
}

#[test]
fn test_setup_overlap_sees_earlier_ships() {
    let mut fleet = FLEET;
    // vertical ship dropped onto the horizontal one
    fleet[1] = ShipPlacement::new(
        ShipDef::new("vertical ship", SHIP_LENGTH),
        1,
        2,
        Orientation::Vertical,
    );
    let mut board = Board::new();
    let err = place_fleet(&mut board, &fleet).unwrap_err();
    assert_eq!(
        err,
        SetupError::Ship {
            ship: "vertical ship",
            reason: PlacementError::Overlaps,
        }
    );
    assert_eq!(err.to_string(), "vertical ship overlaps another ship");
    // the horizontal ship was already placed when the vertical one failed
    assert_eq!(board.count(Cell::Ship), SHIP_LENGTH);
}
