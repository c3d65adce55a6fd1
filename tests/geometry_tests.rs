use salvo::{
    heading_vector, in_bounds, placement_coords, Coord, DistanceMetric, GeometryError, Heading,
};

#[test]
fn heading_vectors_point_away_from_anchor_side() {
    assert_eq!(heading_vector(Heading::N), (1, 0));
    assert_eq!(heading_vector(Heading::S), (-1, 0));
    assert_eq!(heading_vector(Heading::E), (0, -1));
    assert_eq!(heading_vector(Heading::W), (0, 1));
}

#[test]
fn heading_parsing_accepts_letters_and_names() {
    assert_eq!("n".parse::<Heading>().unwrap(), Heading::N);
    assert_eq!("South".parse::<Heading>().unwrap(), Heading::S);
    assert_eq!(" e ".parse::<Heading>().unwrap(), Heading::E);
    assert_eq!(Heading::try_from('w').unwrap(), Heading::W);
    assert_eq!("X".parse::<Heading>().unwrap_err(), GeometryError::InvalidHeading);
    assert_eq!("northwest".parse::<Heading>().unwrap_err(), GeometryError::InvalidHeading);
    assert_eq!(Heading::try_from('q').unwrap_err(), GeometryError::InvalidHeading);
}

#[test]
fn opposite_headings() {
    for h in Heading::ALL {
        assert_eq!(h.opposite().opposite(), h);
        let (dr, dc) = heading_vector(h);
        assert_eq!(heading_vector(h.opposite()), (-dr, -dc));
    }
}

#[test]
fn placement_coords_steps_along_heading() {
    let cells = placement_coords(Coord::new(2, 3), Heading::W, 3).unwrap();
    assert_eq!(cells, vec![Coord::new(2, 3), Coord::new(2, 4), Coord::new(2, 5)]);

    let cells = placement_coords(Coord::new(2, 3), Heading::S, 3).unwrap();
    assert_eq!(cells, vec![Coord::new(2, 3), Coord::new(1, 3), Coord::new(0, 3)]);
}

#[test]
fn single_cell_placement_ignores_heading() {
    for h in Heading::ALL {
        assert_eq!(placement_coords(Coord::new(4, 4), h, 1).unwrap(), vec![Coord::new(4, 4)]);
    }
}

#[test]
fn placement_coords_below_zero_is_out_of_bounds() {
    let err = placement_coords(Coord::new(1, 0), Heading::S, 3).unwrap_err();
    assert_eq!(err, GeometryError::OutOfBounds { row: -1, col: 0 });
    let err = placement_coords(Coord::new(0, 0), Heading::E, 2).unwrap_err();
    assert_eq!(err, GeometryError::OutOfBounds { row: 0, col: -1 });
}

#[test]
fn bounds_check() {
    assert!(in_bounds(Coord::new(0, 0), 10));
    assert!(in_bounds(Coord::new(9, 9), 10));
    assert!(!in_bounds(Coord::new(10, 0), 10));
    assert!(!in_bounds(Coord::new(0, 3), 3));
}

#[test]
fn labels_round_trip() {
    assert_eq!(Coord::new(0, 0).label(), "A1");
    assert_eq!(Coord::new(9, 9).label(), "J10");
    assert_eq!(Coord::new(1, 6).to_string(), "B7");
    assert_eq!(Coord::parse_label("a1", 10).unwrap(), Coord::new(0, 0));
    assert_eq!(Coord::parse_label("J10", 10).unwrap(), Coord::new(9, 9));
    assert_eq!(Coord::parse_label(" c4 ", 10).unwrap(), Coord::new(2, 3));
}

#[test]
fn bad_labels_are_rejected() {
    assert_eq!(Coord::parse_label("", 10).unwrap_err(), GeometryError::InvalidLabel);
    assert_eq!(Coord::parse_label("1A", 10).unwrap_err(), GeometryError::InvalidLabel);
    assert_eq!(Coord::parse_label("A0", 10).unwrap_err(), GeometryError::InvalidLabel);
    assert_eq!(Coord::parse_label("Ax", 10).unwrap_err(), GeometryError::InvalidLabel);
    assert_eq!(
        Coord::parse_label("K1", 10).unwrap_err(),
        GeometryError::OutOfBounds { row: 10, col: 0 }
    );
    assert_eq!(
        Coord::parse_label("A11", 10).unwrap_err(),
        GeometryError::OutOfBounds { row: 0, col: 10 }
    );
}

#[test]
fn distances() {
    let a = Coord::new(0, 0);
    let b = Coord::new(3, 4);
    assert_eq!(a.distance(&b, DistanceMetric::Manhattan), 7.0);
    assert_eq!(a.distance(&b, DistanceMetric::SquaredEuclidean), 25.0);
    assert_eq!(a.distance(&b, DistanceMetric::Euclidean), 5.0);
    assert_eq!(b.distance(&a, DistanceMetric::Euclidean), 5.0);
    assert_eq!("dist2".parse::<DistanceMetric>().unwrap(), DistanceMetric::SquaredEuclidean);
    assert_eq!("dist".parse::<DistanceMetric>().unwrap(), DistanceMetric::Euclidean);
    assert_eq!("Manhattan".parse::<DistanceMetric>().unwrap(), DistanceMetric::Manhattan);
    assert!("chebyshev".parse::<DistanceMetric>().is_err());
    assert_eq!(DistanceMetric::default(), DistanceMetric::SquaredEuclidean);
}

#[test]
fn neighbors_stay_on_board() {
    let corner = Coord::new(0, 0);
    assert_eq!(corner.neighbors(3, false), vec![Coord::new(1, 0), Coord::new(0, 1)]);
    assert_eq!(corner.neighbors(3, true).len(), 3);
    assert_eq!(Coord::new(1, 1).neighbors(3, true).len(), 8);
    assert!(Coord::new(1, 1).is_adjacent(&Coord::new(1, 2)));
    assert!(!Coord::new(1, 1).is_adjacent(&Coord::new(2, 2)));
}
