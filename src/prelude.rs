//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, BoardError, Coord, Heading, HunterOffense, OffenseConfig, Outcome, Placement,
    PlacementPolicy, RandomOffense, RandomPlacement, ShipType, StandardBoard, TargetCell,
    TargetingPolicy,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
