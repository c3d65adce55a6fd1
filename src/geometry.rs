//! Grid geometry: coordinates, headings and placement arithmetic.
//!
//! Everything here is pure. Board and offense code call these helpers freely.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::common::{ConfigError, GeometryError};

/// Zero-based grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Step by `(dr, dc)`, returning `None` if either index goes negative.
    pub fn offset(self, dr: isize, dc: isize) -> Option<Coord> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Coord { row, col })
    }

    /// Human label: row letter followed by the 1-based column, e.g. `"B7"`.
    pub fn label(&self) -> String {
        alloc::format!("{}", self)
    }

    /// Parse a label such as `"a1"` or `"J10"` for a board of edge `size`.
    pub fn parse_label(label: &str, size: usize) -> Result<Coord, GeometryError> {
        let label = label.trim();
        let mut chars = label.chars();
        let letter = chars
            .next()
            .filter(|c| c.is_ascii_alphabetic())
            .ok_or(GeometryError::InvalidLabel)?;
        let row = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
        let col: usize = chars
            .as_str()
            .parse()
            .map_err(|_| GeometryError::InvalidLabel)?;
        if col == 0 {
            return Err(GeometryError::InvalidLabel);
        }
        let coord = Coord::new(row, col - 1);
        if !in_bounds(coord, size) {
            return Err(GeometryError::OutOfBounds {
                row: coord.row as isize,
                col: coord.col as isize,
            });
        }
        Ok(coord)
    }

    /// True if `other` shares an edge with `self`.
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    pub fn distance(&self, other: &Coord, metric: DistanceMetric) -> f64 {
        let dr = self.row.abs_diff(other.row) as f64;
        let dc = self.col.abs_diff(other.col) as f64;
        match metric {
            DistanceMetric::Manhattan => dr + dc,
            DistanceMetric::SquaredEuclidean => dr * dr + dc * dc,
            DistanceMetric::Euclidean => libm::sqrt(dr * dr + dc * dc),
        }
    }

    /// In-bounds neighbours, orthogonal first; diagonals appended when asked.
    pub fn neighbors(&self, size: usize, diagonal: bool) -> Vec<Coord> {
        const ORTHO: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        const DIAG: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
        let steps = ORTHO.iter().chain(if diagonal { &DIAG[..] } else { &[] });
        steps
            .filter_map(|&(dr, dc)| self.offset(dr, dc))
            .filter(|c| in_bounds(*c, size))
            .collect()
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match u8::try_from(self.row).ok().filter(|r| *r < 26) {
            Some(r) => write!(f, "{}{}", (b'A' + r) as char, self.col + 1),
            None => write!(f, "R{}C{}", self.row, self.col + 1),
        }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

/// Direction a placement extends from its anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    N,
    S,
    E,
    W,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::N, Heading::S, Heading::E, Heading::W];
    /// One heading per axis; the others describe the same cell sets.
    pub const CANONICAL: [Heading; 2] = [Heading::N, Heading::W];

    pub fn opposite(self) -> Heading {
        match self {
            Heading::N => Heading::S,
            Heading::S => Heading::N,
            Heading::E => Heading::W,
            Heading::W => Heading::E,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Heading::N | Heading::S)
    }
}

impl TryFrom<char> for Heading {
    type Error = GeometryError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'N' => Ok(Heading::N),
            'S' => Ok(Heading::S),
            'E' => Ok(Heading::E),
            'W' => Ok(Heading::W),
            _ => Err(GeometryError::InvalidHeading),
        }
    }
}

impl FromStr for Heading {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Heading::try_from(c),
            _ => match s.to_ascii_lowercase().as_str() {
                "north" => Ok(Heading::N),
                "south" => Ok(Heading::S),
                "east" => Ok(Heading::E),
                "west" => Ok(Heading::W),
                _ => Err(GeometryError::InvalidHeading),
            },
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Heading::N => 'N',
            Heading::S => 'S',
            Heading::E => 'E',
            Heading::W => 'W',
        };
        write!(f, "{}", c)
    }
}

/// Unit step for a heading as `(d_row, d_col)`.
///
/// North grows rows downward from the anchor and West grows columns to the
/// right: the heading names the side the anchor sits on.
pub const fn heading_vector(heading: Heading) -> (isize, isize) {
    match heading {
        Heading::N => (1, 0),
        Heading::S => (-1, 0),
        Heading::E => (0, -1),
        Heading::W => (0, 1),
    }
}

/// The `length` cells starting at `coord` and stepping along `heading`.
///
/// Fails with `OutOfBounds` if a step would take an index below zero. Upper
/// bounds depend on the board and are checked with [`in_bounds`].
pub fn placement_coords(
    coord: Coord,
    heading: Heading,
    length: usize,
) -> Result<Vec<Coord>, GeometryError> {
    let (dr, dc) = heading_vector(heading);
    (0..length)
        .map(|i| {
            let i = i as isize;
            coord.offset(i * dr, i * dc).ok_or(GeometryError::OutOfBounds {
                row: coord.row as isize + i * dr,
                col: coord.col as isize + i * dc,
            })
        })
        .collect()
}

pub fn in_bounds(coord: Coord, size: usize) -> bool {
    coord.row < size && coord.col < size
}

/// All coordinates of a `size`×`size` board in row-major order.
pub fn all_coords(size: usize) -> impl Iterator<Item = Coord> {
    (0..size).flat_map(move |row| (0..size).map(move |col| Coord { row, col }))
}

/// Distance measure used by the isolate and cluster hunt patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize, clap::ValueEnum)
)]
pub enum DistanceMetric {
    Euclidean,
    #[default]
    SquaredEuclidean,
    Manhattan,
}

impl FromStr for DistanceMetric {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dist" | "euclidean" => Ok(DistanceMetric::Euclidean),
            "dist2" | "squared" | "squared-euclidean" => Ok(DistanceMetric::SquaredEuclidean),
            "manhattan" | "taxicab" => Ok(DistanceMetric::Manhattan),
            _ => Err(ConfigError {
                kind: "distance metric",
                value: s.into(),
            }),
        }
    }
}
