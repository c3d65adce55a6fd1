//! Ship types and per-ship damage tracking.

use core::fmt;

use crate::common::CombatError;
use crate::config::{MAX_SHIP_LENGTH, SHIP_TYPES};

/// The five ship classes. Discriminants are the ids used in grid encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ShipType {
    Patrol = 1,
    Destroyer = 2,
    Submarine = 3,
    Battleship = 4,
    Carrier = 5,
}

impl ShipType {
    /// Numeric id in `1..=5`.
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Position in [`SHIP_TYPES`] and in per-type arrays.
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipType::Patrol => "Patrol",
            ShipType::Destroyer => "Destroyer",
            ShipType::Submarine => "Submarine",
            ShipType::Battleship => "Battleship",
            ShipType::Carrier => "Carrier",
        }
    }

    pub const fn length(self) -> usize {
        match self {
            ShipType::Patrol => 2,
            ShipType::Destroyer | ShipType::Submarine => 3,
            ShipType::Battleship => 4,
            ShipType::Carrier => 5,
        }
    }

    pub fn from_id(id: u8) -> Option<ShipType> {
        SHIP_TYPES.iter().copied().find(|t| t.id() == id)
    }

    pub fn from_index(index: usize) -> Option<ShipType> {
        SHIP_TYPES.get(index).copied()
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ship on a board with one damage counter per segment.
///
/// Counters are cumulative: a segment struck twice reads 2. A ship is afloat
/// while any segment reads 0.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    ship_type: ShipType,
    damage: [u32; MAX_SHIP_LENGTH],
}

impl Ship {
    pub const fn new(ship_type: ShipType) -> Self {
        Ship {
            ship_type,
            damage: [0; MAX_SHIP_LENGTH],
        }
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    /// Damage counters, one per segment.
    pub fn damage(&self) -> &[u32] {
        &self.damage[..self.length()]
    }

    /// Record a strike on `slot` and return that slot's new damage count.
    pub fn hit(&mut self, slot: usize) -> Result<u32, CombatError> {
        let length = self.length();
        if slot >= length {
            return Err(CombatError::SlotOutOfRange { slot, length });
        }
        self.damage[slot] = self.damage[slot].saturating_add(1);
        Ok(self.damage[slot])
    }

    pub fn is_afloat(&self) -> bool {
        self.damage().iter().any(|&d| d == 0)
    }

    pub fn is_sunk(&self) -> bool {
        !self.is_afloat()
    }

    pub fn is_damaged(&self) -> bool {
        self.damage().iter().any(|&d| d > 0)
    }

    /// Sum of all damage counters, repeat strikes included.
    pub fn total_damage(&self) -> u32 {
        self.damage().iter().sum()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", length: {}, damage: {:?}, sunk: {} }}",
            self.ship_type.name(),
            self.length(),
            self.damage(),
            self.is_sunk(),
        )
    }
}
