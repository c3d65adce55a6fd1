//! Ship placements as value types.
//!
//! A placement is an anchor, a heading and a length. Two placements are equal
//! when they cover the same cells: `A1` heading N for 3 equals `C1` heading S.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::bitboard::Mask;
use crate::common::GeometryError;
use crate::geometry::{heading_vector, in_bounds, placement_coords, Coord, DistanceMetric, Heading};

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub coord: Coord,
    pub heading: Heading,
    pub length: usize,
}

impl Placement {
    pub const fn new(coord: Coord, heading: Heading, length: usize) -> Self {
        Placement {
            coord,
            heading,
            length,
        }
    }

    /// Covered cells, in order from the anchor.
    pub fn coords(&self) -> Result<Vec<Coord>, GeometryError> {
        placement_coords(self.coord, self.heading, self.length)
    }

    /// Covered cells if every one lies on a `size`×`size` board.
    pub fn coords_within(&self, size: usize) -> Option<Vec<Coord>> {
        let coords = self.coords().ok()?;
        coords.iter().all(|c| in_bounds(*c, size)).then_some(coords)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        let (top, left, vertical, length) = self.key();
        let (row, col) = (coord.row as isize, coord.col as isize);
        if vertical {
            col == left && row >= top && row < top + length
        } else {
            row == top && col >= left && col < left + length
        }
    }

    /// Position of `coord` along the placement, counted from the anchor.
    pub fn slot_of(&self, coord: Coord) -> Option<usize> {
        self.coords().ok()?.iter().position(|c| *c == coord)
    }

    /// The same cells anchored at the top (heading N) or left (heading W) end.
    pub fn canonical(&self) -> Result<Placement, GeometryError> {
        let (top, left, vertical, length) = self.key();
        if top < 0 || left < 0 {
            return Err(GeometryError::OutOfBounds { row: top, col: left });
        }
        let heading = if vertical { Heading::N } else { Heading::W };
        Ok(Placement::new(
            Coord::new(top as usize, left as usize),
            heading,
            length as usize,
        ))
    }

    pub fn is_vertical(&self) -> bool {
        self.key().2
    }

    /// Occupancy mask on an `N`×`N` board, `None` if the placement leaves it.
    pub fn mask<const N: usize>(&self) -> Option<Mask<N>> {
        Mask::<N>::from_coords(self.coords_within(N)?)
    }

    /// Sum of distances from every covered cell to `coord`.
    pub fn total_dist_to_coord(&self, coord: Coord, metric: DistanceMetric) -> f64 {
        self.coords()
            .map(|cells| cells.iter().map(|c| c.distance(&coord, metric)).sum())
            .unwrap_or(f64::INFINITY)
    }

    /// `(top, left, vertical, length)`, identifying the covered cell set.
    /// Length-1 placements are treated as vertical.
    fn key(&self) -> (isize, isize, bool, isize) {
        let (dr, dc) = heading_vector(self.heading);
        let span = self.length.saturating_sub(1) as isize;
        let (row, col) = (self.coord.row as isize, self.coord.col as isize);
        let (end_row, end_col) = (row + dr * span, col + dc * span);
        let vertical = self.heading.is_vertical() || self.length <= 1;
        (
            row.min(end_row),
            col.min(end_col),
            vertical,
            self.length as isize,
        )
    }
}

impl PartialEq for Placement {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Placement {}

impl PartialOrd for Placement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Placement {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for Placement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}x{}", self.coord, self.heading, self.length)
    }
}
