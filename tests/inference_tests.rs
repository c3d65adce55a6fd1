use std::collections::BTreeSet;

use salvo::{
    Board, Coord, Heading, Outcome, Placement, PlacementError, ShipType, StandardBoard,
    TargetCell, SHIP_TYPES,
};

fn c(row: usize, col: usize) -> Coord {
    Coord::new(row, col)
}

fn counts(board: &Board<3>) -> Vec<usize> {
    SHIP_TYPES
        .iter()
        .map(|&t| board.all_valid_target_placements(t).len())
        .collect()
}

#[test]
fn empty_grid_placement_counts() {
    let board = Board::<3>::new();
    assert_eq!(counts(&board), vec![12, 6, 6, 0, 0]);
}

#[test]
fn placements_are_unique_and_vertical_first() {
    let board = Board::<3>::new();
    let placements = board.all_valid_target_placements(ShipType::Destroyer);
    let unique: BTreeSet<Placement> = placements.iter().copied().collect();
    assert_eq!(unique.len(), placements.len());
    assert!(placements[..3].iter().all(|p| p.heading == Heading::N));
    assert!(placements[3..].iter().all(|p| p.heading == Heading::W));
}

#[test]
fn misses_and_hits_restrict_placements() {
    let mut board = Board::<3>::new();
    board.update_target_grid(&Outcome::miss(c(0, 0))).unwrap();
    board.update_target_grid(&Outcome::miss(c(0, 1))).unwrap();
    board.update_target_grid(&Outcome::hit(c(1, 1))).unwrap();
    assert_eq!(counts(&board), vec![8, 3, 3, 0, 0]);

    // Sinking the patrol at (1,0) pins it to (1,0)-(1,1).
    board
        .update_target_grid(&Outcome::sunk(c(1, 0), ShipType::Patrol))
        .unwrap();
    assert_eq!(board.all_valid_target_placements(ShipType::Patrol).len(), 1);
    assert_eq!(board.all_valid_target_placements(ShipType::Destroyer).len(), 2);
    assert_eq!(
        board.target_grid().get(c(1, 1)),
        Some(TargetCell::Resolved(ShipType::Patrol))
    );
    assert_eq!(
        board.target_grid().get(c(1, 0)),
        Some(TargetCell::Sunk(ShipType::Patrol))
    );
}

#[test]
fn sink_propagates_along_line() {
    let mut board = Board::<3>::new();
    board.update_target_grid(&Outcome::hit(c(0, 0))).unwrap();
    board.update_target_grid(&Outcome::hit(c(0, 1))).unwrap();
    board
        .update_target_grid(&Outcome::sunk(c(0, 2), ShipType::Destroyer))
        .unwrap();

    let grid = board.target_grid();
    assert_eq!(grid.get(c(0, 0)), Some(TargetCell::Resolved(ShipType::Destroyer)));
    assert_eq!(grid.get(c(0, 1)), Some(TargetCell::Resolved(ShipType::Destroyer)));
    assert_eq!(grid.get(c(0, 2)), Some(TargetCell::Sunk(ShipType::Destroyer)));
    for row in 1..3 {
        for col in 0..3 {
            assert_eq!(grid.get(c(row, col)), Some(TargetCell::Unknown));
        }
    }
    assert_eq!(board.find_hits(true), Vec::<Coord>::new());
    assert_eq!(board.find_hits(false).len(), 3);
    assert_eq!(
        board.target_coords_with_type(ShipType::Destroyer, true),
        vec![c(0, 2)]
    );
    assert_eq!(board.target_coords_with_type(ShipType::Destroyer, false).len(), 3);
}

fn cascade_outcomes() -> [Outcome; 6] {
    [
        Outcome::hit(c(0, 0)),
        Outcome::miss(c(0, 2)),
        Outcome::hit(c(1, 1)),
        Outcome::hit(c(1, 0)),
        Outcome::sunk(c(0, 1), ShipType::Patrol),
        Outcome::sunk(c(1, 2), ShipType::Destroyer),
    ]
}

#[test]
fn resolution_cascades_across_ship_types() {
    let outcomes = cascade_outcomes();
    let mut board = Board::<3>::new();
    for o in &outcomes[..5] {
        board.update_target_grid(o).unwrap();
    }
    // The patrol could still lie along row 0 or down column 1.
    assert_eq!(board.all_valid_target_placements(ShipType::Patrol).len(), 2);
    assert_eq!(board.target_grid().get(c(0, 0)), Some(TargetCell::Hit));
    assert_eq!(board.target_grid().get(c(1, 1)), Some(TargetCell::Hit));

    board.update_target_grid(&outcomes[5]).unwrap();
    let grid = board.target_grid();
    assert_eq!(grid.get(c(1, 0)), Some(TargetCell::Resolved(ShipType::Destroyer)));
    assert_eq!(grid.get(c(1, 1)), Some(TargetCell::Resolved(ShipType::Destroyer)));
    assert_eq!(grid.get(c(0, 0)), Some(TargetCell::Resolved(ShipType::Patrol)));
    assert_eq!(board.find_hits(true), Vec::<Coord>::new());
    assert_eq!(board.all_valid_target_placements(ShipType::Patrol).len(), 1);
}

#[test]
fn resolution_order_does_not_matter() {
    let mut forward = Board::<3>::new();
    let mut backward = Board::<3>::new();
    let mut stepwise = Board::<3>::new();
    for o in &cascade_outcomes() {
        forward.record_outcome(o).unwrap();
        backward.record_outcome(o).unwrap();
        stepwise.update_target_grid(o).unwrap();
    }
    let reversed: Vec<ShipType> = SHIP_TYPES.iter().rev().copied().collect();
    assert_eq!(forward.resolve_target_grid(), 3);
    assert_eq!(backward.resolve_target_grid_in_order(&reversed), 3);
    assert_eq!(forward.target_grid(), backward.target_grid());
    assert_eq!(forward.target_grid(), stepwise.target_grid());
    assert_eq!(forward.resolve_target_grid(), 0);
}

#[test]
fn counts_by_ship_type_at_coord() {
    let board = Board::<3>::new();
    let at_corner = board.possible_ship_types_at_coord(c(0, 0));
    assert_eq!(at_corner.as_array(), [2, 2, 2, 0, 0]);
    assert_eq!(at_corner.total(), 6);
    assert_eq!(
        at_corner.possible_types(),
        vec![ShipType::Patrol, ShipType::Destroyer, ShipType::Submarine]
    );

    let board = StandardBoard::new();
    assert_eq!(board.possible_ship_types_at_coord(c(4, 4)).as_array(), [4, 6, 6, 8, 10]);
}

#[test]
fn miss_blocks_counts() {
    let mut board = Board::<3>::new();
    board.update_target_grid(&Outcome::miss(c(1, 1))).unwrap();
    assert_eq!(board.possible_ship_types_at_coord(c(1, 1)).total(), 0);
    let counts = board.possible_ship_types_at_coord(c(1, 0));
    assert_eq!(counts.get(ShipType::Patrol), 2);
    assert_eq!(counts.get(ShipType::Destroyer), 1);
    assert_eq!(counts.get(ShipType::Submarine), 1);
}

#[test]
fn density_grid_sums_type_counts() {
    let board = Board::<3>::new();
    let grid = board.possible_targets_grid();
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(
                grid[row][col],
                board.possible_ship_types_at_coord(c(row, col)).total()
            );
        }
    }
    assert_eq!(grid[1][1], 4 + 2 + 2);
}

#[test]
fn typed_validity_matches_enumeration() {
    let mut board = Board::<3>::new();
    board.update_target_grid(&Outcome::miss(c(0, 0))).unwrap();
    board.update_target_grid(&Outcome::hit(c(1, 1))).unwrap();
    for t in [ShipType::Patrol, ShipType::Destroyer] {
        let valid: BTreeSet<Placement> =
            board.all_valid_target_placements(t).into_iter().collect();
        for p in board.placements_containing_coord(c(1, 1), &[t]) {
            assert_eq!(board.is_valid_target_placement(&p, Some(t)).unwrap(), valid.contains(&p));
        }
    }
    let p = Placement::new(c(0, 0), Heading::W, 3);
    assert_eq!(
        board.is_valid_target_placement(&p, Some(ShipType::Patrol)),
        Err(PlacementError::LengthMismatch { expected: 2, found: 3 })
    );
}

#[test]
fn agnostic_validity_rejects_resolved_cells() {
    let mut board = Board::<3>::new();
    board
        .update_target_grid(&Outcome::sunk(c(0, 0), ShipType::Patrol))
        .unwrap();
    let through_sink = Placement::new(c(0, 0), Heading::W, 2);
    let clear = Placement::new(c(1, 0), Heading::W, 3);
    assert!(!board.is_valid_target_placement(&through_sink, None).unwrap());
    assert!(board.is_valid_target_placement(&clear, None).unwrap());
    assert!(board
        .all_valid_target_placements_of_length(3)
        .iter()
        .all(|p| !p.contains(c(0, 0))));
}

#[test]
fn all_hit_placements_are_rejected() {
    let mut board = Board::<3>::new();
    board.update_target_grid(&Outcome::hit(c(2, 0))).unwrap();
    board.update_target_grid(&Outcome::hit(c(2, 1))).unwrap();
    let both_hits = Placement::new(c(2, 0), Heading::W, 2);
    assert!(!board
        .all_valid_target_placements(ShipType::Patrol)
        .contains(&both_hits));
    assert!(!board
        .all_valid_target_placements_of_length(2)
        .contains(&both_hits));
}

#[test]
fn placements_through_coord() {
    let board = StandardBoard::new();
    let all = board.placements_containing_coord(c(0, 0), &[]);
    // One horizontal and one vertical per ship type, patrol..carrier; the
    // destroyer and submarine share lengths.
    assert_eq!(all.len(), 8);
    let carrier = board.placements_containing_coord(c(4, 4), &[ShipType::Carrier]);
    assert_eq!(carrier.len(), 10);
    assert!(carrier.iter().all(|p| p.contains(c(4, 4)) && p.length == 5));
}
