//! Static targets: obstacles and pigs.
//!
//! Pure actor specializations; the kinds differ only in their glyphs. Pigs
//! decide the stage outcome, obstacles never do.

use serde::{Deserialize, Serialize};

use super::actor::{Actor, Status};

/// Target kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    Obstacle,
    Pig,
}

impl TargetKind {
    /// (active, destroyed) display glyphs
    pub fn glyphs(self) -> (char, char) {
        match self {
            TargetKind::Obstacle => ('O', ' '),
            TargetKind::Pig => ('@', '+'),
        }
    }
}

/// A stationary target on the stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    kind: TargetKind,
    actor: Actor,
}

impl Target {
    pub fn new(kind: TargetKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            actor: Actor::new(x, y),
        }
    }

    /// Shorthand for an obstacle
    pub fn obstacle(x: f32, y: f32) -> Self {
        Self::new(TargetKind::Obstacle, x, y)
    }

    /// Shorthand for a pig
    pub fn pig(x: f32, y: f32) -> Self {
        Self::new(TargetKind::Pig, x, y)
    }

    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }

    pub fn is_active(&self) -> bool {
        self.actor.is_active()
    }

    /// Display glyph for the target's kind and current status
    pub fn glyph(&self) -> char {
        let (active, destroyed) = self.kind.glyphs();
        match self.actor.status() {
            Status::Active => active,
            Status::Destroyed => destroyed,
        }
    }
}
