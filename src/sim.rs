//! Solo simulation: one offense firing at one hidden fleet until it sinks.

use alloc::vec::Vec;

use log::info;
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Outcome};
use crate::defense::PlacementPolicy;
use crate::offense::TargetingPolicy;

/// Result of a solo game.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSummary {
    pub shots: usize,
    pub hits: usize,
    pub misses: usize,
    /// True when every ship was sunk before the offense ran out of targets.
    pub fleet_sunk: bool,
    pub history: Vec<Outcome>,
}

/// Lay out a fleet with `defense`, then let `offense` fire at it.
///
/// The game ends when the fleet is sunk, after `N * N` shots, or when the
/// offense has no target left. The offense sees only its own tracking board.
pub fn run_solo<const N: usize, P, D, R>(
    offense: &mut P,
    defense: &mut D,
    rng: &mut R,
) -> Result<GameSummary, BoardError>
where
    P: TargetingPolicy,
    D: PlacementPolicy,
    R: Rng + ?Sized,
{
    let mut hidden = Board::<N>::new();
    defense.place_fleet(&mut hidden, rng)?;
    let mut tracker = Board::<N>::new();
    let mut history: Vec<Outcome> = Vec::new();
    offense.reset();

    while !hidden.is_fleet_sunk() && history.len() < N * N {
        let coord = match offense.target(&tracker, &history, rng) {
            Some(c) => c,
            None => break,
        };
        let outcome = hidden.incoming_at_coord(coord)?;
        tracker.update_target_grid(&outcome)?;
        offense.update_state(&outcome);
        history.push(outcome);
    }

    let hits = history.iter().filter(|o| o.is_hit()).count();
    let summary = GameSummary {
        shots: history.len(),
        hits,
        misses: history.len() - hits,
        fleet_sunk: hidden.is_fleet_sunk(),
        history,
    };
    info!(
        "Game over after {} shots ({} hits, {} misses)",
        summary.shots, summary.hits, summary.misses
    );
    Ok(summary)
}
