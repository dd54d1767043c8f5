//! Input Capture
//!
//! The host polls its own keyboard each frame and hands the core one
//! [`InputFrame`] per tick: the signed state of each movement axis. The core
//! turns that into a pixel displacement at the player's speed and derives the
//! heading the host uses for sprite facing.

use serde::{Deserialize, Serialize};

use crate::core::vec2::Vec2;

/// Raw input state for a single frame.
///
/// Axis values are -1, 0, or +1. Anything the host's input layer knows about
/// key repeat, joystick deadzones, or remapping is resolved before this point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFrame {
    /// Horizontal axis: -1 (left), 0 (idle), +1 (right)
    pub move_x: i8,

    /// Vertical axis: -1 (up), 0 (idle), +1 (down) - screen convention
    pub move_y: i8,
}

impl InputFrame {
    /// An idle frame (no keys held).
    pub const IDLE: Self = Self { move_x: 0, move_y: 0 };

    /// Create input with explicit axis values.
    ///
    /// Values outside -1..=1 are clamped.
    pub const fn new(move_x: i8, move_y: i8) -> Self {
        Self {
            move_x: clamp_axis(move_x),
            move_y: clamp_axis(move_y),
        }
    }

    /// Build a frame from the four held arrow keys.
    ///
    /// When opposing keys are held in the same frame the later-scanned key
    /// wins: right over left, down over up.
    pub const fn from_keys(left: bool, right: bool, up: bool, down: bool) -> Self {
        let mut move_x = 0;
        if left {
            move_x = -1;
        }
        if right {
            move_x = 1;
        }
        let mut move_y = 0;
        if up {
            move_y = -1;
        }
        if down {
            move_y = 1;
        }
        Self { move_x, move_y }
    }

    /// Check if this is an idle frame (no movement requested).
    #[inline]
    pub const fn is_idle(self) -> bool {
        self.move_x == 0 && self.move_y == 0
    }

    /// Requested pixel displacement at the given speed.
    #[inline]
    pub const fn displacement(self, speed: i32) -> Vec2 {
        Vec2::new(self.move_x as i32 * speed, self.move_y as i32 * speed)
    }

    /// Heading of the requested travel, for sprite facing.
    #[inline]
    pub const fn heading(self) -> Heading {
        Heading::from_displacement(Vec2::new(self.move_x as i32, self.move_y as i32))
    }
}

const fn clamp_axis(v: i8) -> i8 {
    if v < -1 {
        -1
    } else if v > 1 {
        1
    } else {
        v
    }
}

/// Direction of attempted travel.
///
/// Horizontal movement dominates for diagonal requests, matching the sprite
/// sheets (the avatar only has left/right run frames).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Heading {
    /// No movement requested
    #[default]
    Idle = 0,
    /// Travelling toward -x
    Left = 1,
    /// Travelling toward +x
    Right = 2,
    /// Travelling toward -y
    Up = 3,
    /// Travelling toward +y
    Down = 4,
}

impl Heading {
    /// Derive a heading from a displacement vector.
    pub const fn from_displacement(displacement: Vec2) -> Self {
        if displacement.x < 0 {
            Heading::Left
        } else if displacement.x > 0 {
            Heading::Right
        } else if displacement.y < 0 {
            Heading::Up
        } else if displacement.y > 0 {
            Heading::Down
        } else {
            Heading::Idle
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
