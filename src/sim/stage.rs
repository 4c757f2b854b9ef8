//! Stage assembly and the per-tick update loop.
//!
//! A stage owns its actors in three insertion-ordered collections. Nothing
//! is ever removed: destruction is a status change, so iteration stays
//! stable and destroyed actors still render, with their destroyed glyph.
//!
//! Ordering inside [`Stage::tick`] is load-bearing: each bird's trajectory
//! is evaluated before its collision tests so the tests see the fresh
//! position, targets are tested obstacles first and pigs second, and the
//! returned points list birds, then obstacles, then pigs.

use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::point::Point;
use super::target::Target;
use crate::consts::DEFAULT_COLLISION_INTERVAL;

/// Overall outcome of a stage, computed fresh from actor statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageStatus {
    /// At least one pig and at least one bird remain active
    InProgress,
    /// No pig remains active
    Victory,
    /// Pigs remain but no bird (launched or not) is left active
    Defeat,
}

impl StageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageStatus::InProgress => "in progress",
            StageStatus::Victory => "victory",
            StageStatus::Defeat => "defeat",
        }
    }
}

/// One play-through: all actors plus the collision interval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    collision_interval: f32,
    birds: Vec<Bird>,
    obstacles: Vec<Target>,
    pigs: Vec<Target>,
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage {
    /// Create an empty stage with the default collision interval
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_COLLISION_INTERVAL)
    }

    /// Create an empty stage with an explicit collision interval
    pub fn with_interval(collision_interval: f32) -> Self {
        Self {
            collision_interval,
            birds: Vec::new(),
            obstacles: Vec::new(),
            pigs: Vec::new(),
        }
    }

    /// Half-width of the square proximity box applied to every collision test
    pub fn collision_interval(&self) -> f32 {
        self.collision_interval
    }

    /// Append one or more birds, preserving insertion order
    pub fn add_birds(&mut self, birds: impl IntoIterator<Item = Bird>) {
        self.birds.extend(birds);
    }

    /// Append one or more obstacles, preserving insertion order
    pub fn add_obstacles(&mut self, obstacles: impl IntoIterator<Item = Target>) {
        self.obstacles.extend(obstacles);
    }

    /// Append one or more pigs, preserving insertion order
    pub fn add_pigs(&mut self, pigs: impl IntoIterator<Item = Target>) {
        self.pigs.extend(pigs);
    }

    pub fn birds(&self) -> &[Bird] {
        &self.birds
    }

    pub fn obstacles(&self) -> &[Target] {
        &self.obstacles
    }

    pub fn pigs(&self) -> &[Target] {
        &self.pigs
    }

    /// Launch the first bird that has not been launched yet.
    ///
    /// Birds are considered in insertion order; when every bird has already
    /// launched this is a silent no-op.
    pub fn launch(&mut self, angle_deg: f32, time: f32) {
        match self.birds.iter_mut().find(|bird| !bird.has_launched()) {
            Some(bird) => {
                // cannot fail: find() only yields unlaunched birds
                let _ = bird.launch(angle_deg, time);
            }
            None => log::debug!("launch ignored: no unlaunched bird left"),
        }
    }

    /// Advance the stage to the given game time and snapshot every actor.
    ///
    /// For each bird in order: evaluate the trajectory, test it against
    /// every target (obstacles first, then pigs) with the stage's collision
    /// interval, then apply the ground rule. Returns one [`Point`] per
    /// actor in birds, obstacles, pigs order.
    pub fn tick(&mut self, time: f32) -> Vec<Point> {
        for bird in &mut self.birds {
            bird.position(time);
            for target in self.obstacles.iter_mut().chain(self.pigs.iter_mut()) {
                bird.actor_mut()
                    .collide(target.actor_mut(), self.collision_interval);
            }
            bird.collide_with_ground();
        }

        let mut points =
            Vec::with_capacity(self.birds.len() + self.obstacles.len() + self.pigs.len());
        points.extend(
            self.birds
                .iter()
                .map(|bird| Point::new(bird.actor().pos(), bird.glyph())),
        );
        points.extend(
            self.obstacles
                .iter()
                .map(|target| Point::new(target.actor().pos(), target.glyph())),
        );
        points.extend(
            self.pigs
                .iter()
                .map(|target| Point::new(target.actor().pos(), target.glyph())),
        );
        points
    }

    /// Compute the stage outcome from current actor statuses.
    ///
    /// Victory is checked first: a stage without active pigs is won even if
    /// no bird remains, and a stage that never had pigs is won immediately.
    /// Unlaunched birds count as active.
    pub fn status(&self) -> StageStatus {
        if !self.pigs.iter().any(Target::is_active) {
            StageStatus::Victory
        } else if self.birds.iter().any(Bird::is_active) {
            StageStatus::InProgress
        } else {
            StageStatus::Defeat
        }
    }
}
