//! Hunt-stage weighting over untargeted cells.

use alloc::vec::Vec;

use crate::board::{Board, TargetFilter};
use crate::geometry::Coord;
use crate::offense::{uniform_untargeted, HuntConfig, HuntPattern, MarkWeight};
use crate::sampling::TargetWeights;

/// Raw (unnormalised) weights for `config.pattern`.
///
/// Falls back to uniform over untargeted cells when the pattern assigns no
/// positive weight anywhere.
pub fn targets<const N: usize>(config: &HuntConfig, board: &Board<N>) -> TargetWeights {
    let weights = match config.pattern {
        HuntPattern::Uniform => uniform_untargeted(board),
        HuntPattern::MaxDensity => max_density(board),
        HuntPattern::Isolate | HuntPattern::Cluster => by_distance(config, board),
    };
    if weights.values().any(|&w| w > 0.0) {
        weights
    } else {
        uniform_untargeted(board)
    }
}

fn max_density<const N: usize>(board: &Board<N>) -> TargetWeights {
    let density = board.possible_targets_grid();
    board
        .all_targets(TargetFilter::Untargeted)
        .into_iter()
        .filter(|c| density[c.row][c.col] > 0)
        .map(|c| (c, density[c.row][c.col] as f64))
        .collect()
}

fn marks<const N: usize>(weight: MarkWeight, board: &Board<N>) -> Vec<Coord> {
    let grid = board.target_grid();
    match weight {
        MarkWeight::Shots => board.all_targets(TargetFilter::Targeted),
        MarkWeight::Hits => grid.coords_where(|t| t.is_hit()),
        MarkWeight::Misses => grid.coords_where(|t| t.is_miss()),
    }
}

fn by_distance<const N: usize>(config: &HuntConfig, board: &Board<N>) -> TargetWeights {
    let marks = marks(config.weight, board);
    let mut weights = TargetWeights::new();
    for target in board.all_targets(TargetFilter::Untargeted) {
        let total: f64 = marks
            .iter()
            .map(|m| target.distance(m, config.metric))
            .sum();
        let w = match config.pattern {
            HuntPattern::Cluster if total > 0.0 => 1.0 / total,
            HuntPattern::Cluster => 0.0,
            _ => total,
        };
        weights.insert(target, w);
    }
    weights
}
