#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod bitboard;
mod board;
mod common;
mod config;
mod defense;
mod geometry;
mod inference;
#[cfg(feature = "std")]
mod logging;
pub mod offense;
mod placement;
pub mod prelude;
pub mod sampling;
mod ship;
pub mod sim;
mod target;

pub use bitboard::{BitBoard, Bits, Mask, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
pub use defense::*;
pub use geometry::*;
pub use inference::TypeCounts;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env};
pub use offense::{
    open_hits, HuntConfig, HuntPattern, HunterOffense, KillStrategy, MarkWeight, Mode,
    OffenseConfig, RandomOffense, TargetingPolicy,
};
pub use placement::Placement;
pub use sampling::{normalized, sample_weighted, TargetWeights};
pub use ship::*;
pub use sim::{run_solo, GameSummary};
pub use target::*;
