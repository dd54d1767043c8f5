//! Movement Resolution
//!
//! Pure move resolution against wall geometry and screen bounds, plus the win
//! query. No side effects: playing the move sound or advancing the run
//! animation is the host's job, triggered off the returned outcome.

use crate::core::rect::Rect;
use crate::core::vec2::Vec2;
use crate::game::difficulty::ScreenBounds;
use crate::game::input::Heading;
use crate::game::maze::Maze;
use crate::{CELL_SIZE, PLAYER_RADIUS};

/// Result of one attempted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Position after the attempt (unchanged when rejected)
    pub position: Vec2,
    /// Whether the move was accepted
    pub moved: bool,
    /// Direction of attempted travel, for sprite facing
    pub heading: Heading,
}

/// Attempt to move the player by `displacement`.
///
/// The candidate position is accepted only when the player's bounding box
/// neither overlaps a wall cell nor leaves the screen. A rejected move is a
/// normal outcome, never an error: the position simply stays put.
///
/// A zero displacement reports `moved = false` with heading `Idle`, so the
/// host can drop back to the idle animation.
pub fn attempt_move(
    position: Vec2,
    displacement: Vec2,
    maze: &Maze,
    bounds: ScreenBounds,
) -> MoveOutcome {
    if displacement.is_zero() {
        return MoveOutcome {
            position,
            moved: false,
            heading: Heading::Idle,
        };
    }

    let heading = Heading::from_displacement(displacement);
    let candidate = position.add(displacement);

    if collides_with_walls(candidate, maze) || !within_bounds(candidate, bounds) {
        return MoveOutcome {
            position,
            moved: false,
            heading,
        };
    }

    MoveOutcome {
        position: candidate,
        moved: true,
        heading,
    }
}

/// Check whether the player box at `position` overlaps any wall cell.
///
/// Scans only the cell range the box can reach instead of the whole grid; the
/// range arithmetic reproduces the strict-overlap test exactly, so accept and
/// reject decisions match a full scan (pinned by a test below).
pub fn collides_with_walls(position: Vec2, maze: &Maze) -> bool {
    let player = Rect::centered(position, PLAYER_RADIUS);

    // Cells whose box strictly overlaps the player box: half-open ranges in
    // cell units, clamped to the grid. Cells outside the grid have no walls.
    let col_min = player.x.div_euclid(CELL_SIZE).max(0);
    let col_max = (player.right() - 1).div_euclid(CELL_SIZE).min(maze.width() as i32 - 1);
    let row_min = player.y.div_euclid(CELL_SIZE).max(0);
    let row_max = (player.bottom() - 1).div_euclid(CELL_SIZE).min(maze.height() as i32 - 1);

    for row in row_min..=row_max {
        for col in col_min..=col_max {
            if maze.is_wall(col as usize, row as usize) {
                return true;
            }
        }
    }
    false
}

/// Check whether the player box at `position` lies entirely on screen.
///
/// Flush contact with a screen edge is allowed.
pub fn within_bounds(position: Vec2, bounds: ScreenBounds) -> bool {
    Rect::centered(position, PLAYER_RADIUS).contained_in(&bounds.as_rect())
}

/// Check whether the player box overlaps the exit cell's box.
///
/// Pure query, callable every frame independent of movement.
pub fn is_at_exit(position: Vec2, exit_position: Vec2) -> bool {
    let player = Rect::centered(position, PLAYER_RADIUS);
    let exit = Rect::new(exit_position.x, exit_position.y, CELL_SIZE, CELL_SIZE);
    player.overlaps(&exit)
}

// =============================================================================
// TESTS
// =============================================================================
