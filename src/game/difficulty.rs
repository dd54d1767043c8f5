//! Difficulty Table
//!
//! Fixed difficulty-to-dimension mapping. Maze dimensions and screen size are
//! both part of the boundary contract and stored explicitly: the medium screen
//! is 600x450 while its 30x22 maze renders to 600x440, so the screen height
//! cannot be derived from the cell count.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::rect::Rect;

/// Selectable difficulty level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
#[derive(Default)]
pub enum Difficulty {
    /// 20x15 cell maze on a 400x300 screen
    #[default]
    Easy = 0,
    /// 30x22 cell maze on a 600x450 screen
    Medium = 1,
    /// 40x30 cell maze on a 800x600 screen
    Hard = 2,
}

impl Difficulty {
    /// All difficulties in menu order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Maze width in cells.
    #[inline]
    pub const fn maze_width(self) -> usize {
        match self {
            Difficulty::Easy => 20,
            Difficulty::Medium => 30,
            Difficulty::Hard => 40,
        }
    }

    /// Maze height in cells.
    #[inline]
    pub const fn maze_height(self) -> usize {
        match self {
            Difficulty::Easy => 15,
            Difficulty::Medium => 22,
            Difficulty::Hard => 30,
        }
    }

    /// Screen bounds in pixels for this difficulty.
    #[inline]
    pub const fn screen_bounds(self) -> ScreenBounds {
        match self {
            Difficulty::Easy => ScreenBounds::new(400, 300),
            Difficulty::Medium => ScreenBounds::new(600, 450),
            Difficulty::Hard => ScreenBounds::new(800, 600),
        }
    }

    /// Menu label, as shown to the player.
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Parse a menu label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Playable screen area in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenBounds {
    /// Screen width in pixels
    pub width: i32,
    /// Screen height in pixels
    pub height: i32,
}

impl ScreenBounds {
    /// Create bounds from raw pixel dimensions.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// The screen as a rectangle anchored at the origin.
    #[inline]
    pub const fn as_rect(self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CELL_SIZE;

    #[test]
    fn test_fixed_table() {
        assert_eq!(Difficulty::Easy.maze_width(), 20);
        assert_eq!(Difficulty::Easy.maze_height(), 15);
        assert_eq!(Difficulty::Easy.screen_bounds(), ScreenBounds::new(400, 300));

        assert_eq!(Difficulty::Medium.maze_width(), 30);
        assert_eq!(Difficulty::Medium.maze_height(), 22);
        assert_eq!(Difficulty::Medium.screen_bounds(), ScreenBounds::new(600, 450));

        assert_eq!(Difficulty::Hard.maze_width(), 40);
        assert_eq!(Difficulty::Hard.maze_height(), 30);
        assert_eq!(Difficulty::Hard.screen_bounds(), ScreenBounds::new(800, 600));
    }

    #[test]
    fn test_screen_covers_maze() {
        // Easy and hard screens are exactly the rendered maze; medium's fixed
        // 450px height leaves a 10px strip below its 440px maze
        for difficulty in [Difficulty::Easy, Difficulty::Hard] {
            let bounds = difficulty.screen_bounds();
            assert_eq!(bounds.width, difficulty.maze_width() as i32 * CELL_SIZE);
            assert_eq!(bounds.height, difficulty.maze_height() as i32 * CELL_SIZE);
        }

        let medium = Difficulty::Medium.screen_bounds();
        assert_eq!(medium.width, Difficulty::Medium.maze_width() as i32 * CELL_SIZE);
        assert_eq!(medium.height, 450);
        assert!(medium.height > Difficulty::Medium.maze_height() as i32 * CELL_SIZE);
    }

    #[test]
    fn test_labels_round_trip() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_label(difficulty.label()), Some(difficulty));
        }
        assert_eq!(Difficulty::from_label("nightmare"), None);
    }
}
