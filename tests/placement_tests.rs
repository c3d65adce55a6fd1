use std::collections::BTreeSet;

use proptest::prelude::*;
use salvo::{Coord, DistanceMetric, Heading, Placement};

#[test]
fn equal_placements_cover_equal_cells() {
    let north = Placement::new(Coord::new(0, 0), Heading::N, 3);
    let south = Placement::new(Coord::new(2, 0), Heading::S, 3);
    assert_eq!(north, south);

    let west = Placement::new(Coord::new(4, 1), Heading::W, 4);
    let east = Placement::new(Coord::new(4, 4), Heading::E, 4);
    assert_eq!(west, east);
    assert_ne!(north, Placement::new(Coord::new(0, 0), Heading::W, 3));
}

#[test]
fn single_cell_placements_are_equal_for_any_heading() {
    let set: BTreeSet<Placement> = Heading::ALL
        .iter()
        .map(|&h| Placement::new(Coord::new(2, 2), h, 1))
        .collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn canonical_form_is_top_or_left_anchored() {
    let p = Placement::new(Coord::new(5, 5), Heading::S, 3).canonical().unwrap();
    assert_eq!(p.coord, Coord::new(3, 5));
    assert_eq!(p.heading, Heading::N);

    let p = Placement::new(Coord::new(5, 5), Heading::E, 2).canonical().unwrap();
    assert_eq!(p.coord, Coord::new(5, 4));
    assert_eq!(p.heading, Heading::W);

    assert!(Placement::new(Coord::new(0, 0), Heading::S, 2).canonical().is_err());
}

#[test]
fn contains_and_slots() {
    let p = Placement::new(Coord::new(3, 3), Heading::S, 3);
    assert!(p.contains(Coord::new(1, 3)));
    assert!(p.contains(Coord::new(3, 3)));
    assert!(!p.contains(Coord::new(4, 3)));
    assert!(!p.contains(Coord::new(2, 2)));
    assert_eq!(p.slot_of(Coord::new(3, 3)), Some(0));
    assert_eq!(p.slot_of(Coord::new(1, 3)), Some(2));
    assert_eq!(p.slot_of(Coord::new(0, 3)), None);
}

#[test]
fn coords_within_checks_upper_bounds() {
    let p = Placement::new(Coord::new(1, 1), Heading::W, 2);
    assert!(p.coords_within(3).is_some());
    assert!(p.coords_within(2).is_none());
    assert!(p.mask::<2>().is_none());
    assert_eq!(p.mask::<3>().unwrap().count_ones(), 2);
}

#[test]
fn total_distance_sums_over_cells() {
    let p = Placement::new(Coord::new(0, 0), Heading::W, 3);
    let d = p.total_dist_to_coord(Coord::new(0, 0), DistanceMetric::Manhattan);
    assert_eq!(d, 0.0 + 1.0 + 2.0);
    let d = p.total_dist_to_coord(Coord::new(1, 0), DistanceMetric::SquaredEuclidean);
    assert_eq!(d, 1.0 + 2.0 + 5.0);
}

fn heading() -> impl Strategy<Value = Heading> {
    prop_oneof![
        Just(Heading::N),
        Just(Heading::S),
        Just(Heading::E),
        Just(Heading::W)
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn round_trip_through_opposite_heading(
        row in 0usize..10,
        col in 0usize..10,
        h in heading(),
        length in 1usize..=5,
    ) {
        let p = Placement::new(Coord::new(row, col), h, length);
        if let Some(cells) = p.coords_within(10) {
            prop_assert_eq!(cells.len(), length);
            let (dr, dc) = salvo::heading_vector(h);
            for pair in cells.windows(2) {
                prop_assert_eq!(pair[0].offset(dr, dc), Some(pair[1]));
            }
            let far_end = cells[length - 1];
            let back = Placement::new(far_end, h.opposite(), length);
            prop_assert_eq!(back, p);
            let mut back_cells = back.coords_within(10).unwrap();
            back_cells.reverse();
            prop_assert_eq!(back_cells, cells);
        }
    }
}
