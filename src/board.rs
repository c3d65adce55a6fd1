//! Board state: one side's ocean grid with its fleet, plus its target grid.
//!
//! Placement inference over the target grid lives in [`crate::inference`].

use alloc::vec::Vec;
use core::fmt;

use log::warn;
use rand::Rng;

use crate::bitboard::Mask;
use crate::common::{BoardError, CombatError, GeometryError, Outcome, PlacementError};
use crate::config::{DEFAULT_BOARD_SIZE, NUM_SHIP_TYPES, SHIP_TYPES};
use crate::geometry::{all_coords, in_bounds, Coord, Heading};
use crate::placement::Placement;
use crate::ship::{Ship, ShipType};
use crate::target::{TargetCell, TargetGrid};

/// Which target-grid cells [`Board::all_targets`] and friends return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetFilter {
    #[default]
    All,
    /// Cells never fired at.
    Untargeted,
    /// Cells already fired at, hit or miss.
    Targeted,
}

impl TargetFilter {
    fn accepts(self, cell: TargetCell) -> bool {
        match self {
            TargetFilter::All => true,
            TargetFilter::Untargeted => cell.is_unknown(),
            TargetFilter::Targeted => !cell.is_unknown(),
        }
    }
}

/// Bounding rectangle of a placed ship, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipBounds {
    pub ship_type: ShipType,
    pub top: usize,
    pub left: usize,
    pub width: usize,
    pub height: usize,
}

/// Shot and damage tallies for one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardStatus {
    pub shots_fired: usize,
    pub hits: usize,
    pub misses: usize,
    /// Damage counted over the own fleet, repeat strikes included.
    pub damage_taken: u32,
    pub ships_damaged: usize,
    pub ships_sunk: usize,
}

impl fmt::Display for BoardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Shots fired: {} ({} hits, {} misses)",
            self.shots_fired, self.hits, self.misses
        )?;
        write!(
            f,
            "Ships:       {} hits on {} ships, {} ships sunk",
            self.damage_taken, self.ships_damaged, self.ships_sunk
        )
    }
}

/// A player's board of edge `N`.
///
/// `N * N` must fit the 128-bit occupancy mask, so `N <= 11`.
#[derive(Clone, PartialEq, Eq)]
pub struct Board<const N: usize> {
    fleet: [Option<Ship>; NUM_SHIP_TYPES],
    placements: [Option<Placement>; NUM_SHIP_TYPES],
    ocean: [[Option<ShipType>; N]; N],
    occupied: Mask<N>,
    pub(crate) target: TargetGrid<N>,
}

/// The standard 10×10 board.
pub type StandardBoard = Board<DEFAULT_BOARD_SIZE>;

impl<const N: usize> Board<N> {
    /// Create an empty board: no ships, nothing fired at.
    pub fn new() -> Self {
        Board {
            fleet: [None; NUM_SHIP_TYPES],
            placements: [None; NUM_SHIP_TYPES],
            ocean: [[None; N]; N],
            occupied: Mask::<N>::new(),
            target: TargetGrid::new(),
        }
    }

    pub const fn size(&self) -> usize {
        N
    }

    // Placement

    /// Place `ship_type` at `placement`. On error the board is unchanged.
    pub fn add_ship(
        &mut self,
        ship_type: ShipType,
        placement: Placement,
    ) -> Result<(), PlacementError> {
        let idx = ship_type.index();
        if self.fleet[idx].is_some() {
            return Err(PlacementError::DuplicateShip(ship_type));
        }
        if placement.length != ship_type.length() {
            return Err(PlacementError::LengthMismatch {
                expected: ship_type.length(),
                found: placement.length,
            });
        }
        let coords = placement
            .coords_within(N)
            .ok_or(PlacementError::OffBoard)?;
        let mask =
            Mask::<N>::from_coords(coords.iter().copied()).ok_or(PlacementError::OffBoard)?;
        if !(self.occupied & mask).is_empty() {
            return Err(PlacementError::Overlap);
        }

        self.occupied |= mask;
        for c in &coords {
            self.ocean[c.row][c.col] = Some(ship_type);
        }
        self.fleet[idx] = Some(Ship::new(ship_type));
        self.placements[idx] = Some(placement);
        Ok(())
    }

    /// Place several ships at once. Either all are placed or none are.
    pub fn add_fleet<I>(&mut self, fleet: I) -> Result<(), PlacementError>
    where
        I: IntoIterator<Item = (ShipType, Placement)>,
    {
        let mut staged = self.clone();
        for (ship_type, placement) in fleet {
            staged.add_ship(ship_type, placement)?;
        }
        *self = staged;
        Ok(())
    }

    /// Every in-bounds placement of `length` that overlaps no placed ship.
    /// Vertical placements come first, each group in row-major anchor order.
    pub fn all_valid_ship_placements(&self, length: usize) -> Vec<Placement> {
        Heading::CANONICAL
            .iter()
            .flat_map(|&h| all_coords(N).map(move |c| Placement::new(c, h, length)))
            .filter(|p| {
                p.mask::<N>()
                    .is_some_and(|m| (self.occupied & m).is_empty())
            })
            .collect()
    }

    /// Uniformly random legal placement for `ship_type` on the ocean grid.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_type: ShipType,
    ) -> Result<Placement, PlacementError> {
        let candidates = self.all_valid_ship_placements(ship_type.length());
        if candidates.is_empty() {
            return Err(PlacementError::NoValidPlacement(ship_type));
        }
        Ok(candidates[rng.random_range(0..candidates.len())])
    }

    /// All five ships placed, none damaged, nothing fired at yet.
    pub fn is_ready_to_play(&self) -> bool {
        self.fleet.iter().all(Option::is_some)
            && self.fleet.iter().flatten().all(|s| !s.is_damaged())
            && self.target.is_all_unknown()
    }

    // Combat

    /// Resolve an opponent's shot at `coord` against this board's fleet.
    pub fn incoming_at_coord(&mut self, coord: Coord) -> Result<Outcome, BoardError> {
        if !in_bounds(coord, N) {
            return Err(GeometryError::OutOfBounds {
                row: coord.row as isize,
                col: coord.col as isize,
            }
            .into());
        }
        let ship_type = match self.ocean[coord.row][coord.col] {
            Some(t) => t,
            None => return Ok(Outcome::miss(coord)),
        };
        let idx = ship_type.index();
        let placement = self.placements[idx].ok_or(CombatError::ShipNotOnBoard(ship_type))?;
        let slot = placement
            .slot_of(coord)
            .ok_or(CombatError::CoordNotOnShip)?;
        let ship = self.fleet[idx]
            .as_mut()
            .ok_or(CombatError::ShipNotOnBoard(ship_type))?;

        let damage = ship.hit(slot)?;
        if damage > 1 {
            warn!("Repeat damage: {}", coord);
        }
        if ship.is_sunk() {
            Ok(Outcome::sunk(coord, ship_type))
        } else {
            Ok(Outcome::hit(coord))
        }
    }

    /// Record the outcome of one of our shots, then propagate what it implies.
    pub fn update_target_grid(&mut self, outcome: &Outcome) -> Result<(), BoardError> {
        self.record_outcome(outcome)?;
        self.resolve_target_grid();
        Ok(())
    }

    /// Write an outcome to the target grid without running inference.
    /// Returns the cell it replaced.
    pub fn record_outcome(&mut self, outcome: &Outcome) -> Result<TargetCell, BoardError> {
        let coord = outcome.coord();
        let cell = match (outcome.is_hit(), outcome.sunk_ship_type()) {
            (false, _) => TargetCell::Miss,
            (true, Some(t)) => TargetCell::Sunk(t),
            (true, None) => TargetCell::Hit,
        };
        let prev = self
            .target
            .set(coord, cell)
            .ok_or(GeometryError::OutOfBounds {
                row: coord.row as isize,
                col: coord.col as isize,
            })?;
        if !prev.is_unknown() {
            warn!("Repeat target: {}", coord);
        }
        Ok(prev)
    }

    // Queries

    /// Ship type occupying each ocean cell.
    pub fn ocean_grid(&self) -> &[[Option<ShipType>; N]; N] {
        &self.ocean
    }

    pub fn target_grid(&self) -> &TargetGrid<N> {
        &self.target
    }

    /// Placed ships in ship-type order.
    pub fn fleet(&self) -> impl Iterator<Item = &Ship> + '_ {
        self.fleet.iter().flatten()
    }

    pub fn ship(&self, ship_type: ShipType) -> Option<&Ship> {
        self.fleet[ship_type.index()].as_ref()
    }

    pub fn placement_for(&self, ship_type: ShipType) -> Option<Placement> {
        self.placements[ship_type.index()]
    }

    pub fn ship_at(&self, coord: Coord) -> Option<&Ship> {
        let ship_type = (*self.ocean.get(coord.row)?.get(coord.col)?)?;
        self.ship(ship_type)
    }

    /// Damage count of the ship segment at `coord`, 0 for open water.
    pub fn damage_at(&self, coord: Coord) -> u32 {
        let ship = match self.ship_at(coord) {
            Some(s) => s,
            None => return 0,
        };
        self.placement_for(ship.ship_type())
            .and_then(|p| p.slot_of(coord))
            .map_or(0, |slot| ship.damage()[slot])
    }

    /// Per ship type, whether it is placed and still afloat.
    pub fn fleet_afloat(&self) -> [bool; NUM_SHIP_TYPES] {
        core::array::from_fn(|i| self.fleet[i].is_some_and(|s| s.is_afloat()))
    }

    /// True once a non-empty fleet has been sunk entirely.
    pub fn is_fleet_sunk(&self) -> bool {
        self.fleet.iter().any(Option::is_some) && self.fleet().all(Ship::is_sunk)
    }

    pub fn afloat_ship_types(&self) -> Vec<ShipType> {
        self.fleet()
            .filter(|s| s.is_afloat())
            .map(Ship::ship_type)
            .collect()
    }

    /// Bounding rectangles of the placed ships.
    pub fn ship_bounds(&self) -> Vec<ShipBounds> {
        SHIP_TYPES
            .iter()
            .filter_map(|&t| {
                let coords = self.placement_for(t)?.coords_within(N)?;
                let top = coords.iter().map(|c| c.row).min()?;
                let bottom = coords.iter().map(|c| c.row).max()?;
                let left = coords.iter().map(|c| c.col).min()?;
                let right = coords.iter().map(|c| c.col).max()?;
                Some(ShipBounds {
                    ship_type: t,
                    top,
                    left,
                    width: right - left + 1,
                    height: bottom - top + 1,
                })
            })
            .collect()
    }

    pub fn status(&self) -> BoardStatus {
        BoardStatus {
            shots_fired: self.target.count(|t| !t.is_unknown()),
            hits: self.target.count(TargetCell::is_hit),
            misses: self.target.count(TargetCell::is_miss),
            damage_taken: self.fleet().map(Ship::total_damage).sum(),
            ships_damaged: self.fleet().filter(|s| s.is_damaged()).count(),
            ships_sunk: self.fleet().filter(|s| s.is_sunk()).count(),
        }
    }

    /// Target-grid coordinates passing `filter`, row-major.
    pub fn all_targets(&self, filter: TargetFilter) -> Vec<Coord> {
        self.target.coords_where(|t| filter.accepts(t))
    }

    /// Neighbours of `coord` passing `filter`, orthogonal ones first.
    pub fn targets_around(&self, coord: Coord, diagonal: bool, filter: TargetFilter) -> Vec<Coord> {
        coord
            .neighbors(N, diagonal)
            .into_iter()
            .filter(|c| self.target.get(*c).is_some_and(|t| filter.accepts(t)))
            .collect()
    }

    /// Hit cells; with `unresolved`, only hits not yet attributed to a ship.
    pub fn find_hits(&self, unresolved: bool) -> Vec<Coord> {
        if unresolved {
            self.target.coords_where(TargetCell::is_open_hit)
        } else {
            self.target.coords_where(TargetCell::is_hit)
        }
    }

    /// Cells attributed to `ship_type`; with `sink_only`, just its sink cell.
    pub fn target_coords_with_type(&self, ship_type: ShipType, sink_only: bool) -> Vec<Coord> {
        if sink_only {
            self.target.coords_where(|t| t.is_sink_of(ship_type))
        } else {
            self.target.coords_where(|t| t.is_type(ship_type))
        }
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Display for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..N {
            for c in 0..N {
                let coord = Coord::new(r, c);
                let sym = match self.ocean[r][c] {
                    None => '.',
                    Some(_) if self.damage_at(coord) > 0 => 'X',
                    Some(t) => (b'0' + t.id()) as char,
                };
                write!(f, "{} ", sym)?;
            }
            write!(f, "   ")?;
            for c in 0..N {
                let sym = self
                    .target
                    .get(Coord::new(r, c))
                    .map_or(' ', TargetCell::symbol);
                write!(f, "{} ", sym)?;
            }
            if r + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board<{}> {{\n  occupied: {:?},\n  fleet: {:?},\n  placements: {:?}\n}}",
            N, self.occupied, self.fleet, self.placements
        )?;
        write!(f, "{}", self.target)
    }
}
