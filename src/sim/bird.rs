//! Projectile birds: launch state machine and ballistic trajectory.
//!
//! A bird sits frozen at its start position until launched, then follows a
//! closed-form ballistic arc evaluated from elapsed time. Evaluating the
//! trajectory stores the result back into the actor, so collision tests run
//! in the same tick observe the fresh coordinates (position must be
//! evaluated before colliding).

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::actor::{Actor, Status};
use crate::consts::GRAVITY;

/// Error returned when launching a bird that was already launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("bird has already been launched")]
pub struct DuplicateLaunch;

/// Bird tiers; they differ only in launch speed and glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BirdKind {
    Red,
    Yellow,
}

impl BirdKind {
    /// Scalar launch speed (game units per time-unit)
    pub fn speed(self) -> f32 {
        match self {
            BirdKind::Red => 20.0,
            BirdKind::Yellow => 30.0,
        }
    }

    /// (active, destroyed) display glyphs
    pub fn glyphs(self) -> (char, char) {
        match self {
            BirdKind::Red => ('V', 'v'),
            BirdKind::Yellow => ('A', 'a'),
        }
    }
}

/// Launch parameters, recorded at most once per bird
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct Launch {
    angle_deg: f32,
    time: f32,
}

/// A launchable projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    kind: BirdKind,
    actor: Actor,
    start: Vec2,
    launch: Option<Launch>,
}

impl Bird {
    /// Create an unlaunched bird at (x, y)
    pub fn new(kind: BirdKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            actor: Actor::new(x, y),
            start: Vec2::new(x, y),
            launch: None,
        }
    }

    /// Shorthand for a red bird
    pub fn red(x: f32, y: f32) -> Self {
        Self::new(BirdKind::Red, x, y)
    }

    /// Shorthand for a yellow bird
    pub fn yellow(x: f32, y: f32) -> Self {
        Self::new(BirdKind::Yellow, x, y)
    }

    pub fn kind(&self) -> BirdKind {
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

    /// Display glyph for the bird's kind and current status
    pub fn glyph(&self) -> char {
        let (active, destroyed) = self.kind.glyphs();
        match self.actor.status() {
            Status::Active => active,
            Status::Destroyed => destroyed,
        }
    }

    /// True once `launch` has succeeded
    pub fn has_launched(&self) -> bool {
        self.launch.is_some()
    }

    /// Launched and not yet destroyed: the trajectory is live
    pub fn is_flying(&self) -> bool {
        self.has_launched() && self.actor.is_active()
    }

    /// Record launch angle (degrees) and launch time.
    ///
    /// Launching does not move the bird; motion is evaluated lazily by
    /// [`Bird::position`]. A bird launches at most once; a second call fails
    /// with [`DuplicateLaunch`] and leaves the recorded parameters unchanged.
    pub fn launch(&mut self, angle_deg: f32, time: f32) -> Result<(), DuplicateLaunch> {
        if self.launch.is_some() {
            return Err(DuplicateLaunch);
        }
        self.launch = Some(Launch { angle_deg, time });
        log::debug!("bird launched: angle {} deg at t={}", angle_deg, time);
        Ok(())
    }

    /// Evaluate the bird's position at the given game time.
    ///
    /// While flying, the position is the closed-form ballistic arc from the
    /// start position, and the computed value is stored so later collision
    /// tests in the same tick see it. Before launch, and after destruction,
    /// the stored position is returned unchanged (a destroyed bird stays
    /// frozen wherever it was last evaluated).
    ///
    /// Elapsed time is not clamped at zero: querying a time earlier than
    /// the recorded launch time extrapolates the arc backward.
    pub fn position(&mut self, time: f32) -> Vec2 {
        if let Some(launch) = self.launch {
            if self.actor.is_active() {
                let dt = time - launch.time;
                let angle = launch.angle_deg.to_radians();
                let speed = self.kind.speed();
                let x = self.start.x + speed * dt * angle.cos();
                let y = self.start.y + speed * dt * angle.sin() - (GRAVITY * dt * dt) / 2.0;
                self.actor.set_pos(Vec2::new(x, y));
            }
        }
        self.actor.pos()
    }

    /// Destroy the bird if it is at or below ground level (y ≤ 0).
    ///
    /// Idempotent, and a no-op while the bird is above ground. Applies to
    /// unlaunched birds too.
    pub fn collide_with_ground(&mut self) {
        if self.actor.is_active() && self.actor.y() <= 0.0 {
            self.actor.destroy();
            log::debug!("bird hit the ground at x={:.2}", self.actor.x());
        }
    }
}
