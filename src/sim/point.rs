//! Per-tick render snapshot.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One renderable cell: an actor's rounded position plus its glyph.
///
/// A value type: two points are the same point when their rounded
/// coordinates and glyph coincide, regardless of which actor produced them.
/// Points are produced fresh every tick and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub glyph: char,
}

impl Point {
    /// Snapshot a position, rounding each coordinate to the nearest cell
    pub fn new(pos: Vec2, glyph: char) -> Self {
        Self {
            x: pos.x.round() as i32,
            y: pos.y.round() as i32,
            glyph,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rounds_to_nearest_cell() {
        let point = Point::new(Vec2::new(5.8, -0.4), '@');
        assert_eq!(point.x, 6);
        assert_eq!(point.y, 0);

        let point = Point::new(Vec2::new(2.4, 2.6), 'V');
        assert_eq!(point.x, 2);
        assert_eq!(point.y, 3);
    }

    #[test]
    fn test_equality_is_by_rounded_value() {
        // different source floats, same cell
        let a = Point::new(Vec2::new(1.9, 2.1), '@');
        let b = Point::new(Vec2::new(2.2, 1.8), '@');
        assert_eq!(a, b);

        // same cell, different glyph
        let c = Point::new(Vec2::new(2.0, 2.0), 'O');
        assert_ne!(a, c);
    }

    #[test]
    fn test_hashes_like_it_compares() {
        let mut seen = HashSet::new();
        seen.insert(Point::new(Vec2::new(1.9, 2.1), '@'));
        seen.insert(Point::new(Vec2::new(2.2, 1.8), '@'));
        assert_eq!(seen.len(), 1);
    }
}
