use battleship::shot::resolve;
use battleship::{
    place_fleet, Board, CellState, Coordinate, Orientation, ShotOutcome, TrackCell, TrackingView,
    SHIPS, TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    place_fleet(&mut board, &mut rng).unwrap();
    board
}

fn shots() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..10usize, 0..10usize), 0..150)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn fleet_is_straight_disjoint_and_in_bounds(seed in any::<u64>()) {
        let board = random_board(seed);
        let mut covered = [[0u8; 10]; 10];
        let mut lengths = Vec::new();
        for ship in board.ships() {
            lengths.push(ship.length());
            let (row, col) = ship.origin();
            for (i, (r, c)) in ship.cells().enumerate() {
                prop_assert!(r < 10 && c < 10);
                match ship.orientation() {
                    Orientation::Horizontal => prop_assert_eq!((r, c), (row, col + i)),
                    Orientation::Vertical => prop_assert_eq!((r, c), (row + i, col)),
                }
                covered[r][c] += 1;
            }
        }
        prop_assert_eq!(lengths, SHIPS.iter().map(|s| s.length()).collect::<Vec<_>>());

        let mut ship_cells = 0;
        for r in 0..10 {
            for c in 0..10 {
                prop_assert!(covered[r][c] <= 1);
                let is_ship = board.cell_at(r, c).unwrap() == CellState::Ship;
                prop_assert_eq!(is_ship, covered[r][c] == 1);
                ship_cells += usize::from(is_ship);
            }
        }
        prop_assert_eq!(ship_cells, TOTAL_SHIP_CELLS);
    }

    #[test]
    fn view_agrees_with_board(seed in any::<u64>(), targets in shots()) {
        let mut board = random_board(seed);
        let mut view = TrackingView::new();
        for (r, c) in targets {
            let before = board.cell_at(r, c).unwrap();
            let outcome = resolve(&mut view, &mut board, Coordinate::new(r, c).unwrap()).unwrap();
            let after = board.cell_at(r, c).unwrap();
            match before {
                CellState::Ship => prop_assert_eq!((outcome, after), (ShotOutcome::Hit, CellState::Hit)),
                CellState::Water => prop_assert_eq!((outcome, after), (ShotOutcome::Miss, CellState::Miss)),
                terminal => prop_assert_eq!((outcome, after), (ShotOutcome::AlreadyShot, terminal)),
            }
        }
        for r in 0..10 {
            for c in 0..10 {
                let cell = board.cell_at(r, c).unwrap();
                match view.cell_at(r, c).unwrap() {
                    TrackCell::Hit => prop_assert_eq!(cell, CellState::Hit),
                    TrackCell::Miss => prop_assert_eq!(cell, CellState::Miss),
                    TrackCell::Unknown => prop_assert!(!cell.is_shot()),
                }
            }
        }
        prop_assert_eq!(board.hit_count(), view.hit_count());
        prop_assert_eq!(board.remaining_ship_cells(), TOTAL_SHIP_CELLS - board.hit_count());
    }

    #[test]
    fn repeat_shot_is_idempotent(seed in any::<u64>(), row in 0..10usize, col in 0..10usize) {
        let mut board = random_board(seed);
        let mut view = TrackingView::new();
        let target = Coordinate::new(row, col).unwrap();
        let first = resolve(&mut view, &mut board, target).unwrap();
        prop_assert_ne!(first, ShotOutcome::AlreadyShot);
        let (board_after, view_after) = (board.clone(), view);
        prop_assert_eq!(resolve(&mut view, &mut board, target).unwrap(), ShotOutcome::AlreadyShot);
        prop_assert_eq!(board, board_after);
        prop_assert_eq!(view, view_after);
    }
}
