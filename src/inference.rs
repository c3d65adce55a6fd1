//! Target-grid inference: which placements each enemy ship can still occupy,
//! and the fixed point that attributes hits once a ship has only one option.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use log::debug;

use crate::bitboard::Mask;
use crate::board::Board;
use crate::common::PlacementError;
use crate::config::{NUM_SHIP_TYPES, SHIP_TYPES};
use crate::geometry::{Coord, Heading};
use crate::placement::Placement;
use crate::ship::ShipType;
use crate::target::TargetCell;

/// Placement counts per ship type, indexed by [`ShipType::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypeCounts([usize; NUM_SHIP_TYPES]);

impl TypeCounts {
    pub fn get(&self, ship_type: ShipType) -> usize {
        self.0[ship_type.index()]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShipType, usize)> + '_ {
        SHIP_TYPES.iter().copied().zip(self.0.iter().copied())
    }

    /// Ship types with at least one placement through the cell.
    pub fn possible_types(&self) -> Vec<ShipType> {
        self.iter().filter(|(_, n)| *n > 0).map(|(t, _)| t).collect()
    }

    pub fn as_array(&self) -> [usize; NUM_SHIP_TYPES] {
        self.0
    }
}

impl fmt::Display for TypeCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (t, n)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", t, n)?;
        }
        Ok(())
    }
}

impl<const N: usize> Board<N> {
    /// Placements of `ship_type` consistent with everything on the target grid.
    ///
    /// Vertical placements come first, each group in row-major anchor order.
    pub fn all_valid_target_placements(&self, ship_type: ShipType) -> Vec<Placement> {
        let length = ship_type.length();
        let must_include = self.target_coords_with_type(ship_type, false);
        let sunk = self.target.iter().any(|(_, t)| t.is_sink_of(ship_type));

        let mut anchors = if must_include.is_empty() {
            !Mask::<N>::new()
        } else {
            let mut near = Mask::<N>::new();
            let reach = length as isize - 1;
            for c in &must_include {
                for k in -reach..=reach {
                    if let Some(n) = c.offset(k, 0) {
                        near.set(n);
                    }
                    if let Some(n) = c.offset(0, k) {
                        near.set(n);
                    }
                }
            }
            near
        };
        let blocked = Mask::<N>::from_coords(self.target.coords_where(|t| {
            t.is_miss() || t.ship_type().is_some_and(|other| other != ship_type)
        }))
        .unwrap_or_default();
        anchors &= !blocked;

        Heading::CANONICAL
            .iter()
            .flat_map(|&h| anchors.coords().map(move |c| Placement::new(c, h, length)))
            .filter(|p| self.fits_ship_type(p, ship_type, &must_include, sunk))
            .collect()
    }

    /// Placements of `length` over cells that are untargeted or open hits.
    pub fn all_valid_target_placements_of_length(&self, length: usize) -> Vec<Placement> {
        Heading::CANONICAL
            .iter()
            .flat_map(|&h| {
                crate::geometry::all_coords(N).map(move |c| Placement::new(c, h, length))
            })
            .filter(|p| {
                self.placement_cells(p)
                    .is_some_and(|cells| fits_unresolved(&cells) && !all_open_hits(&cells))
            })
            .collect()
    }

    /// Whether `placement` is consistent with the target grid.
    ///
    /// With a ship type, this is membership in
    /// [`all_valid_target_placements`](Self::all_valid_target_placements).
    /// Without one, every covered cell must be untargeted or an open hit.
    pub fn is_valid_target_placement(
        &self,
        placement: &Placement,
        ship_type: Option<ShipType>,
    ) -> Result<bool, PlacementError> {
        match ship_type {
            None => Ok(self
                .placement_cells(placement)
                .is_some_and(|cells| fits_unresolved(&cells))),
            Some(t) if t.length() != placement.length => Err(PlacementError::LengthMismatch {
                expected: t.length(),
                found: placement.length,
            }),
            Some(t) => {
                let must_include = self.target_coords_with_type(t, false);
                let sunk = self.target.iter().any(|(_, c)| c.is_sink_of(t));
                Ok(self.fits_ship_type(placement, t, &must_include, sunk))
            }
        }
    }

    /// Attribute open hits to ship types until nothing changes.
    ///
    /// Each pass asks every ship type for its valid placements; a type with
    /// exactly one left has that placement's open hits rewritten to it.
    /// Returns the number of cells rewritten.
    pub fn resolve_target_grid(&mut self) -> usize {
        self.resolve_target_grid_in_order(&SHIP_TYPES)
    }

    /// [`resolve_target_grid`](Self::resolve_target_grid) visiting ship types in `order`.
    pub fn resolve_target_grid_in_order(&mut self, order: &[ShipType]) -> usize {
        let mut rewritten = 0;
        loop {
            let mut changed = false;
            for &ship_type in order {
                let placements = self.all_valid_target_placements(ship_type);
                let only = match placements.as_slice() {
                    [only] => *only,
                    _ => continue,
                };
                let mut resolved_here = 0;
                for c in only.coords_within(N).unwrap_or_default() {
                    if self.target.get(c) == Some(TargetCell::Hit) {
                        self.target.set(c, TargetCell::Resolved(ship_type));
                        resolved_here += 1;
                    }
                }
                if resolved_here > 0 {
                    debug!("Resolved {} hit(s) to {} at {}", resolved_here, ship_type, only);
                    rewritten += resolved_here;
                    changed = true;
                }
            }
            if !changed {
                return rewritten;
            }
        }
    }

    /// For each ship type, how many of its valid placements cover `coord`.
    pub fn possible_ship_types_at_coord(&self, coord: Coord) -> TypeCounts {
        let mut counts = [0; NUM_SHIP_TYPES];
        for t in SHIP_TYPES {
            counts[t.index()] = self
                .all_valid_target_placements(t)
                .iter()
                .filter(|p| p.contains(coord))
                .count();
        }
        TypeCounts(counts)
    }

    /// Number of valid placements, over all ship types, covering each cell.
    pub fn possible_targets_grid(&self) -> [[usize; N]; N] {
        let mut grid = [[0; N]; N];
        for t in SHIP_TYPES {
            for p in self.all_valid_target_placements(t) {
                for c in p.coords_within(N).unwrap_or_default() {
                    grid[c.row][c.col] += 1;
                }
            }
        }
        grid
    }

    /// On-board placements of the given ship types that cover `coord`.
    /// An empty `ship_types` means every type. Target-grid state is ignored.
    pub fn placements_containing_coord(
        &self,
        coord: Coord,
        ship_types: &[ShipType],
    ) -> BTreeSet<Placement> {
        let types = if ship_types.is_empty() {
            &SHIP_TYPES[..]
        } else {
            ship_types
        };
        let mut placements = BTreeSet::new();
        for t in types {
            let length = t.length();
            for shift in 0..length {
                let candidates = [
                    coord.row.checked_sub(shift).map(|r| (Coord::new(r, coord.col), Heading::N)),
                    coord.col.checked_sub(shift).map(|c| (Coord::new(coord.row, c), Heading::W)),
                ];
                for (anchor, heading) in candidates.into_iter().flatten() {
                    let p = Placement::new(anchor, heading, length);
                    if p.coords_within(N).is_some() {
                        placements.insert(p);
                    }
                }
            }
        }
        placements
    }

    /// Target cells under `placement`, or `None` if it leaves the board.
    pub(crate) fn placement_cells(&self, placement: &Placement) -> Option<Vec<TargetCell>> {
        placement
            .coords_within(N)?
            .into_iter()
            .map(|c| self.target.get(c))
            .collect()
    }

    fn fits_ship_type(
        &self,
        placement: &Placement,
        ship_type: ShipType,
        must_include: &[Coord],
        sunk: bool,
    ) -> bool {
        if placement.length != ship_type.length() {
            return false;
        }
        let cells = match self.placement_cells(placement) {
            Some(cells) => cells,
            None => return false,
        };
        // All open hits would leave this ship without its sink cell.
        if all_open_hits(&cells) {
            return false;
        }
        let cells_ok = cells.iter().all(|&t| {
            t.is_open_hit() || t.is_type(ship_type) || (!sunk && t.is_unknown())
        });
        cells_ok && must_include.iter().all(|c| placement.contains(*c))
    }
}

fn all_open_hits(cells: &[TargetCell]) -> bool {
    cells.iter().all(|t| t.is_open_hit())
}

fn fits_unresolved(cells: &[TargetCell]) -> bool {
    cells.iter().all(|t| t.is_unknown() || t.is_open_hit())
}
