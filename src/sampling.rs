// Weighted random selection over target maps.
// Shared by the hunt and kill stages of the targeting engine.

use alloc::collections::BTreeMap;
use rand::Rng;

use crate::geometry::Coord;

/// Candidate targets with non-negative weights, in coordinate order.
pub type TargetWeights = BTreeMap<Coord, f64>;

fn usable(w: f64) -> f64 {
    if w.is_finite() && w > 0.0 {
        w
    } else {
        0.0
    }
}

/// Scale weights so they sum to 1. Negative or non-finite weights become 0.
/// If nothing positive remains, every key gets the same share.
pub fn normalized<K: Ord + Clone>(weights: &BTreeMap<K, f64>) -> BTreeMap<K, f64> {
    let total: f64 = weights.values().copied().map(usable).sum();
    if total == 0.0 {
        let uniform = 1.0 / weights.len() as f64;
        return weights.keys().map(|k| (k.clone(), uniform)).collect();
    }
    weights
        .iter()
        .map(|(k, &w)| (k.clone(), usable(w) / total))
        .collect()
}

/// Draw one key with probability `weight / sum(weights)`.
///
/// Zero-weight keys are never drawn unless every weight is zero, in which
/// case the draw is uniform. Returns `None` only for an empty map.
pub fn sample_weighted<K, R>(weights: &BTreeMap<K, f64>, rng: &mut R) -> Option<K>
where
    K: Ord + Clone,
    R: Rng + ?Sized,
{
    if weights.is_empty() {
        return None;
    }
    let total: f64 = weights.values().copied().map(usable).sum();
    if total == 0.0 {
        let idx = rng.random_range(0..weights.len());
        return weights.keys().nth(idx).cloned();
    }

    let threshold: f64 = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    let mut last_positive = None;
    for (k, &w) in weights {
        let w = usable(w);
        if w == 0.0 {
            continue;
        }
        cumulative += w;
        if threshold < cumulative {
            return Some(k.clone());
        }
        last_positive = Some(k);
    }
    // Rounding can leave the threshold just past the final sum.
    last_positive.cloned()
}
