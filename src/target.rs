//! The target grid: one side's knowledge of the opponent's ocean.

use alloc::vec::Vec;
use core::fmt;

use crate::config::SUNK_OFFSET;
use crate::geometry::{all_coords, Coord};
use crate::ship::ShipType;

/// What is known about one cell of the opponent's ocean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetCell {
    /// Never fired at.
    #[default]
    Unknown,
    Miss,
    /// Hit on a ship whose identity is not yet known.
    Hit,
    /// Hit on a known ship that has not been proven to sink here.
    Resolved(ShipType),
    /// The cell whose hit sank this ship.
    Sunk(ShipType),
}

impl TargetCell {
    pub fn is_unknown(self) -> bool {
        self == TargetCell::Unknown
    }

    pub fn is_miss(self) -> bool {
        self == TargetCell::Miss
    }

    /// Any kind of hit: plain, resolved or sink cell.
    pub fn is_hit(self) -> bool {
        matches!(
            self,
            TargetCell::Hit | TargetCell::Resolved(_) | TargetCell::Sunk(_)
        )
    }

    /// A hit not yet attributed to any ship.
    pub fn is_open_hit(self) -> bool {
        self == TargetCell::Hit
    }

    pub fn ship_type(self) -> Option<ShipType> {
        match self {
            TargetCell::Resolved(t) | TargetCell::Sunk(t) => Some(t),
            _ => None,
        }
    }

    /// Attributed to `ship_type`, sink cell or not.
    pub fn is_type(self, ship_type: ShipType) -> bool {
        self.ship_type() == Some(ship_type)
    }

    pub fn is_sink_of(self, ship_type: ShipType) -> bool {
        self == TargetCell::Sunk(ship_type)
    }

    /// Numeric encoding: -2 unknown, -1 miss, 0 hit, ship id when resolved,
    /// ship id plus [`SUNK_OFFSET`] on the sink cell.
    pub fn value(self) -> f64 {
        match self {
            TargetCell::Unknown => -2.0,
            TargetCell::Miss => -1.0,
            TargetCell::Hit => 0.0,
            TargetCell::Resolved(t) => t.id() as f64,
            TargetCell::Sunk(t) => t.id() as f64 + SUNK_OFFSET,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            TargetCell::Unknown => '.',
            TargetCell::Miss => 'o',
            TargetCell::Hit => 'x',
            TargetCell::Resolved(t) => (b'0' + t.id()) as char,
            TargetCell::Sunk(t) => (b'a' + t.id() - 1) as char,
        }
    }
}

/// An `N`×`N` grid of [`TargetCell`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetGrid<const N: usize> {
    cells: [[TargetCell; N]; N],
}

impl<const N: usize> TargetGrid<N> {
    pub fn new() -> Self {
        TargetGrid {
            cells: [[TargetCell::Unknown; N]; N],
        }
    }

    /// The cell at `coord`; off-board coordinates read as `None`.
    pub fn get(&self, coord: Coord) -> Option<TargetCell> {
        self.cells.get(coord.row)?.get(coord.col).copied()
    }

    /// Overwrite a cell and return what was there. No-op off the board.
    pub(crate) fn set(&mut self, coord: Coord, cell: TargetCell) -> Option<TargetCell> {
        let slot = self.cells.get_mut(coord.row)?.get_mut(coord.col)?;
        Some(core::mem::replace(slot, cell))
    }

    pub fn rows(&self) -> &[[TargetCell; N]; N] {
        &self.cells
    }

    /// `(coord, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, TargetCell)> + '_ {
        all_coords(N).map(move |c| (c, self.cells[c.row][c.col]))
    }

    pub fn coords_where<F>(&self, mut pred: F) -> Vec<Coord>
    where
        F: FnMut(TargetCell) -> bool,
    {
        self.iter().filter(|(_, t)| pred(*t)).map(|(c, _)| c).collect()
    }

    pub fn count<F>(&self, mut pred: F) -> usize
    where
        F: FnMut(TargetCell) -> bool,
    {
        self.iter().filter(|(_, t)| pred(*t)).count()
    }

    pub fn is_all_unknown(&self) -> bool {
        self.iter().all(|(_, t)| t.is_unknown())
    }
}

impl<const N: usize> Default for TargetGrid<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Display for TargetGrid<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{} ", cell.symbol())?;
            }
            if r + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
