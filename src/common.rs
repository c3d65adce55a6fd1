//! Common types: the error taxonomy and the `Outcome` of a single shot.

use alloc::string::String;
use core::fmt;

use crate::geometry::Coord;
use crate::ship::ShipType;

/// Errors from coordinate and heading arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// Heading was not one of N, S, E, W.
    InvalidHeading,
    /// Coordinate lies off the board (row/col may be negative after stepping).
    OutOfBounds { row: isize, col: isize },
    /// Coordinate label could not be parsed (expected e.g. "A1").
    InvalidLabel,
}

/// Errors returned when placing a ship on the ocean grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A ship of this type is already in the fleet.
    DuplicateShip(ShipType),
    /// Some covered cell is outside the board.
    OffBoard,
    /// Some covered cell is already occupied by another ship.
    Overlap,
    /// Placement length differs from the ship's length.
    LengthMismatch { expected: usize, found: usize },
    /// No legal placement remains for the requested ship.
    NoValidPlacement(ShipType),
}

/// Errors returned while resolving fire against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatError {
    /// Damage slot is outside `[0, length)`.
    SlotOutOfRange { slot: usize, length: usize },
    /// The ocean grid names a ship that is not in the fleet.
    ShipNotOnBoard(ShipType),
    /// The coordinate is not covered by the ship's placement.
    CoordNotOnShip,
    /// Outcome flags violate `sunk => hit` or `sunk_ship_type => sunk`.
    InconsistentOutcome,
}

/// Umbrella error for board operations that can fail in more than one way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    Geometry(GeometryError),
    Placement(PlacementError),
    Combat(CombatError),
}

/// Failure to parse a strategy or metric name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub kind: &'static str,
    pub value: String,
}

impl From<GeometryError> for BoardError {
    fn from(err: GeometryError) -> Self {
        BoardError::Geometry(err)
    }
}

impl From<PlacementError> for BoardError {
    fn from(err: PlacementError) -> Self {
        BoardError::Placement(err)
    }
}

impl From<CombatError> for BoardError {
    fn from(err: CombatError) -> Self {
        BoardError::Combat(err)
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidHeading => {
                write!(f, "Heading must be North, South, East or West")
            }
            GeometryError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is off the board", row, col)
            }
            GeometryError::InvalidLabel => {
                write!(f, "Coordinate label must be a row letter and column number")
            }
        }
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::DuplicateShip(t) => write!(f, "{} is already on the board", t),
            PlacementError::OffBoard => write!(f, "Ship placement is out of bounds"),
            PlacementError::Overlap => write!(f, "Ship placement overlaps with another ship"),
            PlacementError::LengthMismatch { expected, found } => write!(
                f,
                "Placement length {} does not match ship length {}",
                found, expected
            ),
            PlacementError::NoValidPlacement(t) => write!(f, "No room left to place {}", t),
        }
    }
}

impl fmt::Display for CombatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatError::SlotOutOfRange { slot, length } => {
                write!(f, "Damage slot {} is out of range for length {}", slot, length)
            }
            CombatError::ShipNotOnBoard(t) => write!(f, "{} is not in the fleet", t),
            CombatError::CoordNotOnShip => write!(f, "Coordinate is not covered by the ship"),
            CombatError::InconsistentOutcome => {
                write!(f, "Outcome flags are inconsistent (sunk requires hit)")
            }
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Geometry(e) => write!(f, "Geometry error: {}", e),
            BoardError::Placement(e) => write!(f, "Placement error: {}", e),
            BoardError::Combat(e) => write!(f, "Combat error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {} '{}'", self.kind, self.value)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GeometryError {}
#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for CombatError {}
#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Result of one shot, as reported by the defending board.
///
/// Invariants: `sunk` implies `hit`, and a sunk ship type implies `sunk`.
/// The constructors uphold both; [`Outcome::try_new`] checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    coord: Coord,
    hit: bool,
    sunk: bool,
    sunk_ship_type: Option<ShipType>,
}

impl Outcome {
    pub const fn miss(coord: Coord) -> Self {
        Self { coord, hit: false, sunk: false, sunk_ship_type: None }
    }

    pub const fn hit(coord: Coord) -> Self {
        Self { coord, hit: true, sunk: false, sunk_ship_type: None }
    }

    pub const fn sunk(coord: Coord, ship_type: ShipType) -> Self {
        Self { coord, hit: true, sunk: true, sunk_ship_type: Some(ship_type) }
    }

    /// Build an outcome from raw flags, rejecting inconsistent combinations.
    pub fn try_new(
        coord: Coord,
        hit: bool,
        sunk: bool,
        sunk_ship_type: Option<ShipType>,
    ) -> Result<Self, CombatError> {
        if (sunk && !hit) || (sunk_ship_type.is_some() && !sunk) {
            return Err(CombatError::InconsistentOutcome);
        }
        Ok(Self { coord, hit, sunk, sunk_ship_type })
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    pub fn sunk_ship_type(&self) -> Option<ShipType> {
        self.sunk_ship_type
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.hit, self.sunk_ship_type) {
            (false, _) => write!(f, "{}: miss", self.coord),
            (true, Some(t)) => write!(f, "{}: hit, {} sunk", self.coord, t),
            (true, None) if self.sunk => write!(f, "{}: hit, ship sunk", self.coord),
            (true, None) => write!(f, "{}: hit", self.coord),
        }
    }
}
