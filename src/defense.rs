//! Fleet placement policies.

use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::common::PlacementError;
use crate::config::SHIP_TYPES;

/// A strategy that lays out a whole fleet on an empty board.
pub trait PlacementPolicy {
    fn place_fleet<const N: usize, R: Rng + ?Sized>(
        &mut self,
        board: &mut Board<N>,
        rng: &mut R,
    ) -> Result<(), PlacementError>;
}

/// Places each ship uniformly at random among its legal positions,
/// largest ship first.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPlacement;

impl PlacementPolicy for RandomPlacement {
    fn place_fleet<const N: usize, R: Rng + ?Sized>(
        &mut self,
        board: &mut Board<N>,
        rng: &mut R,
    ) -> Result<(), PlacementError> {
        let mut staged = board.clone();
        for &ship_type in SHIP_TYPES.iter().rev() {
            let placement = staged.random_placement(rng, ship_type)?;
            staged.add_ship(ship_type, placement)?;
            debug!("Placed {} at {}", ship_type, placement);
        }
        *board = staged;
        Ok(())
    }
}
