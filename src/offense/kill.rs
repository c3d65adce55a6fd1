//! Kill-stage strategies. Each returns equal weights over its candidates, or
//! an empty map when it has nothing to offer.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::board::{Board, TargetFilter};
use crate::common::Outcome;
use crate::config::SHIP_TYPES;
use crate::geometry::Coord;
use crate::placement::Placement;
use crate::sampling::TargetWeights;
use crate::ship::ShipType;
use crate::target::TargetCell;

fn equal_weights(coords: impl IntoIterator<Item = Coord>) -> TargetWeights {
    coords.into_iter().map(|c| (c, 1.0)).collect()
}

fn is_open_hit<const N: usize>(board: &Board<N>, coord: Coord) -> bool {
    board.target_grid().get(coord) == Some(TargetCell::Hit)
}

/// Untargeted neighbours of the most recent open hit that has any.
pub fn naive<const N: usize>(board: &Board<N>, open_hits: &[Coord]) -> TargetWeights {
    for &hit in open_hits.iter().rev() {
        let around = board.targets_around(hit, false, TargetFilter::Untargeted);
        if !around.is_empty() {
            return equal_weights(around);
        }
    }
    TargetWeights::new()
}

/// First untargeted cell past the run of open hits from `start`, walking
/// `(dr, dc)` and then the opposite way. At most two cells.
pub fn targets_on_line<const N: usize>(
    board: &Board<N>,
    start: Coord,
    (dr, dc): (isize, isize),
) -> Vec<Coord> {
    let mut ends = Vec::new();
    for (sr, sc) in [(dr, dc), (-dr, -dc)] {
        let mut next = start.offset(sr, sc);
        while let Some(c) = next.filter(|c| is_open_hit(board, *c)) {
            next = c.offset(sr, sc);
        }
        if let Some(c) = next {
            if board.target_grid().get(c) == Some(TargetCell::Unknown) {
                ends.push(c);
            }
        }
    }
    ends
}

/// Extend a line of adjacent open hits at both ends.
///
/// Lines are tried from the most recent open hit back. With a single open
/// hit, or no line that can be extended, this is [`naive`].
pub fn linear<const N: usize>(board: &Board<N>, open_hits: &[Coord]) -> TargetWeights {
    if open_hits.len() >= 2 {
        for &hit in open_hits.iter().rev() {
            for (dr, dc) in [(1, 0), (0, 1)] {
                let in_line = [(dr, dc), (-dr, -dc)]
                    .iter()
                    .filter_map(|&(r, c)| hit.offset(r, c))
                    .any(|n| is_open_hit(board, n));
                if !in_line {
                    continue;
                }
                let ends = targets_on_line(board, hit, (dr, dc));
                if !ends.is_empty() {
                    return equal_weights(ends);
                }
            }
        }
    }
    naive(board, open_hits)
}

/// Ship types not reported sunk anywhere in `history`.
pub fn afloat_types(history: &[Outcome]) -> Vec<ShipType> {
    SHIP_TYPES
        .iter()
        .copied()
        .filter(|t| !history.iter().any(|o| o.sunk_ship_type() == Some(*t)))
        .collect()
}

/// Score untargeted cells by the placements through the latest open hit.
///
/// Every placement of a still-afloat ship type that covers the hit and fits
/// the grid scores `hits / length` (0 when fully hit) times the number of
/// afloat types of that length. A cell's score is the sum over placements
/// covering it, rounded to three decimals; only the best cells are kept.
/// Earlier open hits are tried if the latest yields no cells.
pub fn placement_scored<const N: usize>(
    board: &Board<N>,
    history: &[Outcome],
    open_hits: &[Coord],
) -> TargetWeights {
    let afloat = afloat_types(history);
    if afloat.is_empty() {
        return TargetWeights::new();
    }
    for &anchor in open_hits.iter().rev() {
        let weights = scores_around(board, &afloat, anchor);
        if !weights.is_empty() {
            return weights;
        }
    }
    TargetWeights::new()
}

fn scores_around<const N: usize>(
    board: &Board<N>,
    afloat: &[ShipType],
    anchor: Coord,
) -> TargetWeights {
    let grid = board.target_grid();
    let placements: Vec<Placement> = board
        .placements_containing_coord(anchor, afloat)
        .into_iter()
        .filter(|p| board.is_valid_target_placement(p, None).unwrap_or(false))
        .collect();

    let mut scores: BTreeMap<Coord, f64> = BTreeMap::new();
    for p in &placements {
        let cells = match p.coords_within(N) {
            Some(cells) => cells,
            None => continue,
        };
        let hits = cells.iter().filter(|c| is_open_hit(board, **c)).count();
        let mut fraction = hits as f64 / p.length as f64;
        if hits == p.length {
            fraction = 0.0;
        }
        let same_length = afloat.iter().filter(|t| t.length() == p.length).count();
        let score = fraction * same_length as f64;
        for c in cells {
            if grid.get(c) == Some(TargetCell::Unknown) {
                *scores.entry(c).or_insert(0.0) += score;
            }
        }
    }

    let rounded: BTreeMap<Coord, f64> = scores
        .into_iter()
        .map(|(c, s)| (c, libm::round(s * 1000.0) / 1000.0))
        .collect();
    let best = rounded.values().copied().fold(f64::NEG_INFINITY, f64::max);
    equal_weights(
        rounded
            .into_iter()
            .filter(|(_, s)| *s == best)
            .map(|(c, _)| c),
    )
}
