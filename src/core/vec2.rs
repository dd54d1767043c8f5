//! Pixel-Coordinate 2D Vector
//!
//! Positions and displacements in this game are whole pixels, so the vector is
//! plain `i32` arithmetic. All operations wrap the same way on every platform.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// 2D vector with integer pixel components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component in pixels (grows rightward)
    pub x: i32,
    /// Y component in pixels (grows downward, screen convention)
    pub y: i32,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new vector.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Add another vector.
    #[inline]
    pub fn add(self, other: Self) -> Self {
        Self {
            x: self.x.wrapping_add(other.x),
            y: self.y.wrapping_add(other.y),
        }
    }

    /// Subtract another vector.
    #[inline]
    pub fn sub(self, other: Self) -> Self {
        Self {
            x: self.x.wrapping_sub(other.x),
            y: self.y.wrapping_sub(other.y),
        }
    }

    /// Scale by an integer scalar.
    #[inline]
    pub fn scale(self, scalar: i32) -> Self {
        Self {
            x: self.x.wrapping_mul(scalar),
            y: self.y.wrapping_mul(scalar),
        }
    }

    /// Squared length. Stays in i64 so large displacements cannot overflow.
    #[inline]
    pub fn length_squared(self) -> i64 {
        let x = i64::from(self.x);
        let y = i64::from(self.y);
        x * x + y * y
    }

    /// Check whether both components are zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Vec2::add(self, other)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Vec2::sub(self, other)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: self.x.wrapping_neg(),
            y: self.y.wrapping_neg(),
        }
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let a = Vec2::new(30, 40);
        let b = Vec2::new(-5, 5);

        assert_eq!(a + b, Vec2::new(25, 45));
        assert_eq!(a - b, Vec2::new(35, 35));
        assert_eq!(b.scale(4), Vec2::new(-20, 20));
        assert_eq!(-b, Vec2::new(5, -5));
    }

    #[test]
    fn test_zero() {
        assert!(Vec2::ZERO.is_zero());
        assert!(!Vec2::new(0, 1).is_zero());
        assert_eq!(Vec2::new(7, -7) + Vec2::ZERO, Vec2::new(7, -7));
    }

    #[test]
    fn test_length_squared_no_overflow() {
        let v = Vec2::new(i32::MAX, i32::MAX);
        // i64 arithmetic keeps this exact
        let expected = (i64::from(i32::MAX)) * (i64::from(i32::MAX)) * 2;
        assert_eq!(v.length_squared(), expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vec2::new(3, -4).to_string(), "(3, -4)");
    }
}
