//! Targeting engine: choose the next shot from the target grid and history.
//!
//! [`HunterOffense`] alternates between a Hunt stage, which spreads shots
//! over untargeted water, and a Kill stage, which works around open hits
//! until the ship is sunk. Both stages produce a weight map over candidate
//! cells that is normalised and sampled with an injected RNG.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use log::{debug, trace};
use rand::Rng;

use crate::board::{Board, TargetFilter};
use crate::common::{ConfigError, Outcome};
use crate::geometry::{Coord, DistanceMetric};
use crate::sampling::{normalized, sample_weighted, TargetWeights};

pub mod hunt;
pub mod kill;

/// Stage of the Hunt/Kill state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    #[default]
    Hunt,
    Kill,
}

/// A strategy that picks where to fire next.
///
/// The board and history are passed on every call, so one policy value can
/// evaluate any board. Implementations must not mutate the board.
pub trait TargetingPolicy {
    /// Next coordinate to fire at, or `None` once every cell has been fired at.
    fn target<const N: usize, R: Rng + ?Sized>(
        &mut self,
        board: &Board<N>,
        history: &[Outcome],
        rng: &mut R,
    ) -> Option<Coord>;

    /// Feed back the outcome of the shot just fired.
    fn update_state(&mut self, _outcome: &Outcome) {}

    /// Forget all per-game state.
    fn reset(&mut self) {}
}

/// How Hunt-stage weights are computed over untargeted cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize, clap::ValueEnum)
)]
pub enum HuntPattern {
    /// Every untargeted cell equally likely.
    #[default]
    Uniform,
    /// Weight by the number of valid ship placements covering the cell.
    MaxDensity,
    /// Prefer cells far from earlier marks.
    Isolate,
    /// Prefer cells close to earlier marks.
    Cluster,
}

/// Which fired-at cells count as marks for isolate and cluster hunting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize, clap::ValueEnum)
)]
pub enum MarkWeight {
    #[default]
    Shots,
    Hits,
    Misses,
}

/// Kill-stage strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize, clap::ValueEnum)
)]
pub enum KillStrategy {
    /// Untargeted neighbours of the latest open hit.
    Naive,
    /// Extend lines of adjacent open hits.
    Linear,
    /// Score cells by the ship placements through the latest open hit.
    #[default]
    PlacementScored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct HuntConfig {
    pub pattern: HuntPattern,
    pub weight: MarkWeight,
    pub metric: DistanceMetric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct OffenseConfig {
    pub hunt: HuntConfig,
    pub kill: KillStrategy,
}

fn config_error(kind: &'static str, value: &str) -> ConfigError {
    ConfigError {
        kind,
        value: value.into(),
    }
}

impl FromStr for HuntPattern {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" | "random" => Ok(HuntPattern::Uniform),
            "max-density" | "maxdensity" | "maxprob" | "density" => Ok(HuntPattern::MaxDensity),
            "isolate" | "isolated" => Ok(HuntPattern::Isolate),
            "cluster" | "clustered" => Ok(HuntPattern::Cluster),
            _ => Err(config_error("hunt pattern", s)),
        }
    }
}

impl FromStr for MarkWeight {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shots" | "any" => Ok(MarkWeight::Shots),
            "hits" => Ok(MarkWeight::Hits),
            "misses" => Ok(MarkWeight::Misses),
            _ => Err(config_error("mark weight", s)),
        }
    }
}

impl FromStr for KillStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" | "dumb" => Ok(KillStrategy::Naive),
            "linear" | "basic" => Ok(KillStrategy::Linear),
            "placement-scored" | "placements" | "advanced" => Ok(KillStrategy::PlacementScored),
            _ => Err(config_error("kill strategy", s)),
        }
    }
}

impl fmt::Display for OffenseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hunt={:?} (marks={:?}, metric={:?}), kill={:?}",
            self.hunt.pattern, self.hunt.weight, self.hunt.metric, self.kill
        )
    }
}

/// Open hits in the order they were scored, most recent last.
///
/// Plain `Hit` cells missing from `history` are placed first, row-major.
/// A cell fired at more than once counts at its latest position.
pub fn open_hits<const N: usize>(board: &Board<N>, history: &[Outcome]) -> Vec<Coord> {
    let grid = board.target_grid();
    let mut ordered: Vec<Coord> = Vec::new();
    for outcome in history {
        let c = outcome.coord();
        if grid.get(c).is_some_and(|t| t.is_open_hit()) {
            ordered.retain(|o| *o != c);
            ordered.push(c);
        }
    }
    let mut hits: Vec<Coord> = board
        .find_hits(true)
        .into_iter()
        .filter(|c| !ordered.contains(c))
        .collect();
    hits.extend(ordered);
    hits
}

/// Equal weight on every untargeted cell.
pub(crate) fn uniform_untargeted<const N: usize>(board: &Board<N>) -> TargetWeights {
    board
        .all_targets(TargetFilter::Untargeted)
        .into_iter()
        .map(|c| (c, 1.0))
        .collect()
}

/// The Hunt/Kill targeting engine.
#[derive(Debug, Clone, Default)]
pub struct HunterOffense {
    config: OffenseConfig,
    mode: Mode,
    initial_hit: Option<Coord>,
    target_probs: TargetWeights,
}

impl HunterOffense {
    pub fn new(config: OffenseConfig) -> Self {
        HunterOffense {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &OffenseConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The hit that started the current Kill stage.
    pub fn initial_hit(&self) -> Option<Coord> {
        self.initial_hit
    }

    /// Normalised distribution the last target was drawn from.
    pub fn target_probs(&self) -> &TargetWeights {
        &self.target_probs
    }

    /// Kill-stage weights for the current open hits (empty without any).
    pub fn kill_targets<const N: usize>(
        &self,
        board: &Board<N>,
        history: &[Outcome],
    ) -> TargetWeights {
        let open = open_hits(board, history);
        if open.is_empty() {
            return TargetWeights::new();
        }
        match self.config.kill {
            KillStrategy::Naive => kill::naive(board, &open),
            KillStrategy::Linear => kill::linear(board, &open),
            KillStrategy::PlacementScored => kill::placement_scored(board, history, &open),
        }
    }

    /// Hunt-stage weights over untargeted cells.
    pub fn hunt_targets<const N: usize>(&self, board: &Board<N>) -> TargetWeights {
        hunt::targets(&self.config.hunt, board)
    }

    fn set_to_hunt(&mut self) {
        if self.mode != Mode::Hunt {
            trace!("Kill -> Hunt");
        }
        self.mode = Mode::Hunt;
        self.initial_hit = None;
    }

    fn set_to_kill(&mut self, coord: Coord) {
        trace!("Hunt -> Kill at {}", coord);
        self.mode = Mode::Kill;
        self.initial_hit = Some(coord);
    }
}

impl TargetingPolicy for HunterOffense {
    fn target<const N: usize, R: Rng + ?Sized>(
        &mut self,
        board: &Board<N>,
        history: &[Outcome],
        rng: &mut R,
    ) -> Option<Coord> {
        let has_open_hits = board.target_grid().count(|t| t.is_open_hit()) > 0;
        let mut weights = if has_open_hits {
            self.kill_targets(board, history)
        } else {
            TargetWeights::new()
        };
        if has_open_hits && weights.is_empty() {
            debug!("No kill candidates from {:?}; hunting instead", self.config.kill);
            self.set_to_hunt();
        }
        if weights.is_empty() {
            weights = self.hunt_targets(board);
        }
        if weights.is_empty() {
            weights = uniform_untargeted(board);
        }
        self.target_probs = normalized(&weights);
        sample_weighted(&self.target_probs, rng)
    }

    fn update_state(&mut self, outcome: &Outcome) {
        match self.mode {
            Mode::Hunt if outcome.is_hit() && !outcome.is_sunk() => {
                self.set_to_kill(outcome.coord())
            }
            Mode::Kill if outcome.is_sunk() => self.set_to_hunt(),
            _ => {}
        }
    }

    fn reset(&mut self) {
        self.mode = Mode::Hunt;
        self.initial_hit = None;
        self.target_probs.clear();
    }
}

/// Fires uniformly at random over untargeted cells; never enters Kill mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOffense;

impl TargetingPolicy for RandomOffense {
    fn target<const N: usize, R: Rng + ?Sized>(
        &mut self,
        board: &Board<N>,
        _history: &[Outcome],
        rng: &mut R,
    ) -> Option<Coord> {
        sample_weighted(&uniform_untargeted(board), rng)
    }
}
