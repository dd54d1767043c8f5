//! Axis-Aligned Bounding Boxes
//!
//! Overlap tests for collision and the win query. Overlap is strict: two boxes
//! that only share an edge or a corner do not collide. Grid-aligned positions
//! (the player sliding flush along a wall) must stay legal.

use serde::{Deserialize, Serialize};

use super::vec2::Vec2;

/// Axis-aligned rectangle in pixel coordinates.
///
/// Covers the half-open area `[x, x + w) x [y, y + h)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge in pixels
    pub x: i32,
    /// Top edge in pixels
    pub y: i32,
    /// Width in pixels
    pub w: i32,
    /// Height in pixels
    pub h: i32,
}

impl Rect {
    /// Create a new rectangle from its top-left corner and size.
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a square box centered on `center` with the given half-side.
    #[inline]
    pub const fn centered(center: Vec2, half: i32) -> Self {
        Self {
            x: center.x - half,
            y: center.y - half,
            w: half * 2,
            h: half * 2,
        }
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Strict overlap test.
    ///
    /// Returns `true` only when the shared area is non-empty; touching edges
    /// or corners do not count as overlap.
    #[inline]
    pub const fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Check whether this rectangle lies entirely inside `other`.
    ///
    /// Edge contact is allowed: a box flush against the container's border is
    /// still contained.
    #[inline]
    pub const fn contained_in(&self, other: &Rect) -> bool {
        self.x >= other.x
            && self.y >= other.y
            && self.right() <= other.right()
            && self.bottom() <= other.bottom()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0, 0, 20, 20);
        let b = Rect::new(10, 10, 20, 20);
        let c = Rect::new(40, 40, 20, 20);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_edge_touch_is_not_overlap() {
        let a = Rect::new(0, 0, 20, 20);
        let right_neighbor = Rect::new(20, 0, 20, 20);
        let corner_neighbor = Rect::new(20, 20, 20, 20);

        assert!(!a.overlaps(&right_neighbor));
        assert!(!a.overlaps(&corner_neighbor));
        // One pixel of shared area flips it
        assert!(a.overlaps(&Rect::new(19, 0, 20, 20)));
    }

    #[test]
    fn test_centered() {
        let r = Rect::centered(Vec2::new(30, 30), 10);
        assert_eq!(r, Rect::new(20, 20, 20, 20));
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 40);
    }

    #[test]
    fn test_contained_in_allows_flush_edges() {
        let screen = Rect::new(0, 0, 400, 300);

        assert!(Rect::new(0, 0, 20, 20).contained_in(&screen));
        assert!(Rect::new(380, 280, 20, 20).contained_in(&screen));
        assert!(!Rect::new(-1, 0, 20, 20).contained_in(&screen));
        assert!(!Rect::new(381, 280, 20, 20).contained_in(&screen));
    }
}
