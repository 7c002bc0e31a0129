use broadside::{
    placement, weapons, Board, CellState, GameError, Orientation, ShotOutcome, GRID_SIZE,
    NUM_SHIPS, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_can_place_bounds_and_overlap() {
    let mut board = Board::new();
    // Carrier, size 5, horizontal from (0, 6) would run off the board.
    assert!(!placement::can_place(
        board.grid(),
        0,
        6,
        5,
        Orientation::Horizontal
    ));
    assert!(placement::can_place(
        board.grid(),
        0,
        5,
        5,
        Orientation::Horizontal
    ));

    board.place_ship(0, 0, 0, Orientation::Horizontal).unwrap();
    // Crossing the carrier is an overlap.
    assert!(!placement::can_place(
        board.grid(),
        0,
        2,
        3,
        Orientation::Vertical
    ));
    assert_eq!(
        board.place_ship(1, 0, 2, Orientation::Vertical),
        Err(GameError::Overlap)
    );
}

#[test]
fn test_place_rejects_out_of_bounds_before_mutation() {
    let mut board = Board::new();
    assert_eq!(
        board.place_ship(0, 8, 8, Orientation::Horizontal),
        Err(GameError::OutOfBounds { row: 8, col: 8 })
    );
    assert!(board.grid().ships().is_empty());
}

#[test]
fn test_touches_ship_diagonal() {
    let mut board = Board::new();
    board.place_ship(0, 5, 0, Orientation::Horizontal).unwrap();
    // Row 4 is diagonally adjacent to the carrier on row 5.
    assert!(placement::touches_ship(
        board.grid(),
        4,
        4,
        2,
        Orientation::Horizontal
    ));
    // Two rows away is fine.
    assert!(!placement::touches_ship(
        board.grid(),
        3,
        0,
        2,
        Orientation::Horizontal
    ));
}

#[test]
fn test_manual_placement_allows_touching_fleets() {
    let mut board = Board::new();
    board.place_ship(0, 0, 0, Orientation::Horizontal).unwrap();
    // Directly below the carrier: rejected by the adjacency rule, but manual
    // placement does not consult it.
    assert!(placement::touches_ship(
        board.grid(),
        1,
        0,
        4,
        Orientation::Horizontal
    ));
    assert_eq!(board.place_ship(1, 1, 0, Orientation::Horizontal), Ok(()));
}

#[test]
fn test_auto_placement_produces_valid_fleet() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut board = Board::new();
    placement::auto_place_fleet(&mut rng, &mut board).unwrap();

    assert!(board.is_ready());
    // No overlap: the occupancy count equals the fleet total.
    assert_eq!(board.grid().ships().count_ones(), TOTAL_SHIP_CELLS);

    // No two ships touch, not even diagonally.
    let ships: Vec<_> = board.fleet().ships().collect();
    assert_eq!(ships.len(), NUM_SHIPS);
    for (i, a) in ships.iter().enumerate() {
        for b in ships.iter().skip(i + 1) {
            for &(ar, ac) in a.cells() {
                for &(br, bc) in b.cells() {
                    let dr = ar.abs_diff(br);
                    let dc = ac.abs_diff(bc);
                    assert!(dr > 1 || dc > 1, "{:?} touches {:?}", a, b);
                }
            }
        }
    }
}

#[test]
fn test_fire_is_idempotent_on_resolved_cells() {
    let mut board = Board::new();
    board.place_ship(3, 0, 0, Orientation::Horizontal).unwrap();

    assert_eq!(
        weapons::fire(board.grid_mut(), 0, 0),
        Ok(ShotOutcome::Hit)
    );
    let snapshot = *board.grid();
    assert_eq!(
        weapons::fire(board.grid_mut(), 0, 0),
        Ok(ShotOutcome::AlreadyResolved)
    );
    assert_eq!(board.grid().hits(), snapshot.hits());
    assert_eq!(board.grid().misses(), snapshot.misses());

    assert_eq!(
        weapons::fire(board.grid_mut(), 9, 9),
        Ok(ShotOutcome::Miss)
    );
    assert_eq!(
        weapons::fire(board.grid_mut(), 9, 9),
        Ok(ShotOutcome::AlreadyResolved)
    );
}

#[test]
fn test_sunk_reported_once() {
    let mut board = Board::new();
    // Submarine, size 2, at (0,0)-(0,1).
    board.place_ship(3, 0, 0, Orientation::Horizontal).unwrap();

    weapons::fire(board.grid_mut(), 0, 0).unwrap();
    assert!(board.newly_sunk().is_empty());

    weapons::fire(board.grid_mut(), 0, 1).unwrap();
    let sunk = board.newly_sunk();
    assert_eq!(sunk.len(), 1);
    assert_eq!(sunk[0].name(), "Submarine");

    // Announced exactly once.
    assert!(board.newly_sunk().is_empty());
}

#[test]
fn test_all_ships_sunk_end_to_end() {
    let mut board = Board::new();
    board.place_ship(3, 0, 0, Orientation::Horizontal).unwrap();

    assert!(!board.grid().all_ships_sunk());
    weapons::fire(board.grid_mut(), 0, 0).unwrap();
    weapons::fire(board.grid_mut(), 0, 1).unwrap();

    let ship = board.fleet().ship(3).unwrap();
    assert!(ship.is_sunk(board.grid()));
    assert!(board.grid().all_ships_sunk());
}

#[test]
fn test_cell_states() {
    let mut board = Board::new();
    board.place_ship(3, 4, 4, Orientation::Vertical).unwrap();

    assert_eq!(board.grid().state(4, 4), Ok(CellState::Ship));
    assert_eq!(board.grid().state(0, 0), Ok(CellState::Water));

    weapons::fire(board.grid_mut(), 4, 4).unwrap();
    weapons::fire(board.grid_mut(), 0, 0).unwrap();
    assert_eq!(board.grid().state(4, 4), Ok(CellState::Hit));
    assert_eq!(board.grid().state(0, 0), Ok(CellState::Miss));
    assert_eq!(
        board.grid().state(GRID_SIZE, 0),
        Err(GameError::OutOfBounds {
            row: GRID_SIZE,
            col: 0
        })
    );
}
