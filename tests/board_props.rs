use proptest::prelude::*;
use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};
use salvo::{
    all_coords, Coord, PlacementPolicy, RandomPlacement, StandardBoard, TargetCell,
    DEFAULT_BOARD_SIZE, TOTAL_SHIP_CELLS,
};

fn random_fleet(rng: &mut SmallRng) -> StandardBoard {
    let mut board = StandardBoard::new();
    RandomPlacement.place_fleet(&mut board, rng).unwrap();
    board
}

fn random_shots(rng: &mut SmallRng) -> Vec<Coord> {
    let mut shots: Vec<Coord> = all_coords(DEFAULT_BOARD_SIZE).collect();
    shots.shuffle(rng);
    let n = rng.random_range(0..shots.len());
    shots.truncate(n);
    shots
}

/// A cell may only move forward: unknown to miss or hit, hit to attributed.
fn allowed(before: TargetCell, after: TargetCell) -> bool {
    match before {
        TargetCell::Unknown => true,
        TargetCell::Miss => after == TargetCell::Miss,
        TargetCell::Hit => matches!(
            after,
            TargetCell::Hit | TargetCell::Resolved(_) | TargetCell::Sunk(_)
        ),
        TargetCell::Resolved(t) => after == TargetCell::Resolved(t),
        TargetCell::Sunk(t) => after == TargetCell::Sunk(t),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_fleet_is_consistent(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = random_fleet(&mut rng);
        prop_assert!(board.is_ready_to_play());
        let occupied = board
            .ocean_grid()
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count();
        prop_assert_eq!(occupied, TOTAL_SHIP_CELLS);
        for ship in board.fleet() {
            let placement = board.placement_for(ship.ship_type()).unwrap();
            for c in placement.coords_within(DEFAULT_BOARD_SIZE).unwrap() {
                prop_assert_eq!(board.ocean_grid()[c.row][c.col], Some(ship.ship_type()));
            }
        }
    }

    #[test]
    fn target_grid_only_moves_forward(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut hidden = random_fleet(&mut rng);
        let mut tracker = StandardBoard::new();
        for shot in random_shots(&mut rng) {
            let before = *tracker.target_grid();
            let outcome = hidden.incoming_at_coord(shot).unwrap();
            tracker.update_target_grid(&outcome).unwrap();
            let after = tracker.target_grid();
            prop_assert!(!after.get(shot).unwrap().is_unknown());
            for c in all_coords(DEFAULT_BOARD_SIZE) {
                let (b, a) = (before.get(c).unwrap(), after.get(c).unwrap());
                prop_assert!(allowed(b, a), "{} went from {:?} to {:?}", c, b, a);
            }
        }
    }

    #[test]
    fn attributed_hits_name_the_right_ship(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut hidden = random_fleet(&mut rng);
        let mut tracker = StandardBoard::new();
        for shot in random_shots(&mut rng) {
            let outcome = hidden.incoming_at_coord(shot).unwrap();
            tracker.update_target_grid(&outcome).unwrap();
        }
        for (c, cell) in tracker.target_grid().iter() {
            let actual = hidden.ocean_grid()[c.row][c.col];
            match cell {
                TargetCell::Miss => prop_assert_eq!(actual, None),
                TargetCell::Hit => prop_assert!(actual.is_some()),
                TargetCell::Resolved(t) | TargetCell::Sunk(t) => prop_assert_eq!(actual, Some(t)),
                TargetCell::Unknown => {}
            }
        }
    }
}
