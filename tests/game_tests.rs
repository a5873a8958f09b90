use fleetgrid::{
    setup_board, Board, Cell, GameSession, GameStatus, GuessError, GuessResult, ABILITIES, FLEET,
    MAX_ATTEMPTS, TOTAL_SHIP_CELLS,
};

fn standard_session() -> GameSession {
    GameSession::new(setup_board(&FLEET, &ABILITIES).unwrap())
}

fn cells_holding(board: &Board, wanted: impl Fn(Cell) -> bool) -> Vec<(i64, i64)> {
    let mut cells = Vec::new();
    for r in 0..10 {
        for c in 0..10 {
            if wanted(board.get(r, c).unwrap()) {
                cells.push((r as i64, c as i64));
            }
        }
    }
    cells
}

#[test]
fn test_new_session_counts_ship_cells() {
    let session = standard_session();
    assert_eq!(session.remaining(), TOTAL_SHIP_CELLS);
    assert_eq!(session.attempts(), 0);
    assert_eq!(session.max_attempts(), MAX_ATTEMPTS);
    assert_eq!(session.status(), GameStatus::Playing);
}

#[test]
fn test_hit_decrements_remaining_once() {
    let mut session = standard_session();
    assert_eq!(session.guess(2, 1).unwrap(), GuessResult::Hit);
    assert_eq!(session.board().get(2, 1).unwrap(), Cell::Hit);
    assert_eq!(session.remaining(), TOTAL_SHIP_CELLS - 1);
    assert_eq!(session.attempts(), 1);

    // repeat is rejected without consuming an attempt
    assert_eq!(
        session.guess(2, 1).unwrap_err(),
        GuessError::AlreadyPlayed { row: 2, col: 1 }
    );
    assert_eq!(session.remaining(), TOTAL_SHIP_CELLS - 1);
    assert_eq!(session.attempts(), 1);
}

#[test]
fn test_ability_and_water_become_miss() {
    let mut session = standard_session();
    assert_eq!(session.board().get(3, 0).unwrap(), Cell::Ability);
    assert_eq!(session.guess(3, 0).unwrap(), GuessResult::Miss);
    assert_eq!(session.guess(0, 0).unwrap(), GuessResult::Miss);
    assert_eq!(session.board().get(3, 0).unwrap(), Cell::Miss);
    assert_eq!(session.attempts(), 2);
    assert_eq!(session.remaining(), TOTAL_SHIP_CELLS);
    assert_eq!(
        session.guess(0, 0).unwrap_err(),
        GuessError::AlreadyPlayed { row: 0, col: 0 }
    );
}

#[test]
fn test_out_of_bounds_not_counted() {
    let mut session = standard_session();
    for (r, c) in [(-1, 0), (0, -1), (10, 0), (0, 10), (i64::MAX, 3)] {
        assert_eq!(
            session.guess(r, c).unwrap_err(),
            GuessError::OutOfBounds { row: r, col: c }
        );
    }
    assert_eq!(session.attempts(), 0);
}

#[test]
fn test_win_after_all_ship_cells() {
    let mut session = standard_session();
    let ships = cells_holding(session.board(), |c| c == Cell::Ship);
    assert_eq!(ships.len(), TOTAL_SHIP_CELLS);
    session.guess(9, 9).unwrap();
    for (r, c) in ships {
        session.guess(r, c).unwrap();
    }
    let summary = session.summary();
    assert_eq!(summary.status, GameStatus::Won);
    assert_eq!(summary.attempts, TOTAL_SHIP_CELLS as u32 + 1);
    assert_eq!(summary.remaining, 0);
    assert_eq!(session.guess(0, 0).unwrap_err(), GuessError::GameOver);
}

#[test]
fn test_exhausted_after_cap() {
    let mut session = standard_session();
    let misses = cells_holding(session.board(), |c| c != Cell::Ship);
    session.guess(2, 1).unwrap();
    for &(r, c) in misses.iter().take(MAX_ATTEMPTS as usize - 1) {
        session.guess(r, c).unwrap();
    }
    let summary = session.summary();
    assert_eq!(summary.status, GameStatus::Exhausted);
    assert_eq!(summary.attempts, MAX_ATTEMPTS);
    assert_eq!(summary.remaining, TOTAL_SHIP_CELLS - 1);
    assert_eq!(session.guess(2, 2).unwrap_err(), GuessError::GameOver);
}

#[test]
fn test_final_attempt_win_beats_exhaustion() {
    let board = setup_board(&FLEET, &ABILITIES).unwrap();
    let mut session = GameSession::with_max_attempts(board, TOTAL_SHIP_CELLS as u32);
    for (r, c) in cells_holding(session.board(), |c| c == Cell::Ship) {
        session.guess(r, c).unwrap();
    }
    assert_eq!(session.status(), GameStatus::Won);
}

#[test]
fn test_empty_board_is_already_won() {
    let session = GameSession::new(Board::new());
    assert_eq!(session.status(), GameStatus::Won);
}
