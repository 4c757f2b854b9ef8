//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Turn-based: state advances only through explicit [`Stage::tick`] calls
//! - Stable iteration order (insertion order, entities are never removed)
//! - No rendering or platform dependencies

pub mod actor;
pub mod bird;
pub mod point;
pub mod stage;
pub mod target;

pub use actor::{Actor, Status};
pub use bird::{Bird, BirdKind, DuplicateLaunch};
pub use point::Point;
pub use stage::{Stage, StageStatus};
pub use target::{Target, TargetKind};
