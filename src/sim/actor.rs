//! Base actor: a point on the stage with a one-way Active/Destroyed lifecycle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Lifecycle status of an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// On stage and collidable
    Active,
    /// Hit; stays on stage as inert scenery
    Destroyed,
}

/// A point-sized entity on the stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pos: Vec2,
    status: Status,
}

impl Actor {
    /// Create an active actor at (x, y)
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            status: Status::Active,
        }
    }

    /// Current position
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    /// Current lifecycle status
    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }

    /// Destroy the actor. Destruction is one-way; destroying an
    /// already-destroyed actor is a no-op.
    pub fn destroy(&mut self) {
        self.status = Status::Destroyed;
    }

    pub(crate) fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    /// Square proximity collision between two actors.
    ///
    /// The hit test is an axis-aligned square of half-width `interval`
    /// around each actor: |Δx| ≤ interval AND |Δy| ≤ interval. On a hit
    /// both actors are destroyed; collision never destroys only one party.
    /// If either actor is already destroyed the call changes nothing.
    pub fn collide(&mut self, other: &mut Actor, interval: f32) {
        if !self.is_active() || !other.is_active() {
            return;
        }
        let delta = (self.pos - other.pos).abs();
        if delta.x <= interval && delta.y <= interval {
            self.destroy();
            other.destroy();
            log::debug!(
                "collision: ({:.2}, {:.2}) x ({:.2}, {:.2})",
                self.pos.x,
                self.pos.y,
                other.pos.x,
                other.pos.y
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_actor_is_active() {
        let actor = Actor::new(1.0, 2.0);
        assert_eq!(actor.x(), 1.0);
        assert_eq!(actor.y(), 2.0);
        assert_eq!(actor.status(), Status::Active);
        assert!(actor.is_active());
    }

    #[test]
    fn test_collide_destroys_both_within_box() {
        let mut a = Actor::new(2.0, 2.0);
        let mut b = Actor::new(2.0, 3.0);
        a.collide(&mut b, 1.0);
        assert_eq!(a.status(), Status::Destroyed);
        assert_eq!(b.status(), Status::Destroyed);
    }

    #[test]
    fn test_collide_misses_outside_box() {
        // same pair as above but interval 0: |Δy| = 1 > 0
        let mut a = Actor::new(2.0, 2.0);
        let mut b = Actor::new(2.0, 3.0);
        a.collide(&mut b, 0.0);
        assert!(a.is_active());
        assert!(b.is_active());
    }

    #[test]
    fn test_collide_hits_all_neighbors_at_interval_one() {
        let offsets = [
            (0, 1),
            (1, 1),
            (1, 0),
            (1, -1),
            (0, -1),
            (-1, -1),
            (-1, 0),
            (-1, 1),
        ];
        for (dx, dy) in offsets {
            let mut a = Actor::new(2.0, 2.0);
            let mut b = Actor::new(2.0 + dx as f32, 2.0 + dy as f32);
            a.collide(&mut b, 1.0);
            assert!(!a.is_active(), "expected hit at offset ({dx}, {dy})");
            assert!(!b.is_active(), "expected hit at offset ({dx}, {dy})");
        }
    }

    #[test]
    fn test_collide_noop_when_either_party_destroyed() {
        let mut dead = Actor::new(2.0, 2.0);
        dead.destroy();

        let mut b = Actor::new(2.0, 2.0);
        dead.collide(&mut b, 1.0);
        assert!(b.is_active(), "destroyed self must not destroy other");

        b.collide(&mut dead, 1.0);
        assert!(b.is_active(), "destroyed other must not destroy self");
    }

    #[test]
    fn test_destroy_is_one_way() {
        let mut actor = Actor::new(0.0, 0.0);
        actor.destroy();
        actor.destroy();
        assert_eq!(actor.status(), Status::Destroyed);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Collision destroys both actors or neither, never exactly one.
            #[test]
            fn prop_collide_is_all_or_nothing(
                ax in -100.0f32..100.0,
                ay in -100.0f32..100.0,
                bx in -100.0f32..100.0,
                by in -100.0f32..100.0,
                interval in 0.0f32..10.0,
            ) {
                let mut a = Actor::new(ax, ay);
                let mut b = Actor::new(bx, by);
                a.collide(&mut b, interval);
                prop_assert_eq!(a.status(), b.status());
                let hit = (ax - bx).abs() <= interval && (ay - by).abs() <= interval;
                prop_assert_eq!(a.status() == Status::Destroyed, hit);
            }

            // A destroyed party freezes the pair: colliding changes nothing,
            // even at distance zero.
            #[test]
            fn prop_collide_requires_both_active(
                ax in -100.0f32..100.0,
                ay in -100.0f32..100.0,
                interval in 0.0f32..10.0,
            ) {
                let mut a = Actor::new(ax, ay);
                let mut b = Actor::new(ax, ay);
                b.destroy();
                a.collide(&mut b, interval);
                prop_assert!(a.is_active());
                prop_assert_eq!(b.status(), Status::Destroyed);
            }
        }
    }
}
