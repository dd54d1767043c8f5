//! Game Logic Module
//!
//! All game simulation code. 100% deterministic.
//!
//! ## Module Structure
//!
//! - `difficulty`: Difficulty table and screen bounds
//! - `maze`: Maze carving and exit placement
//! - `input`: Per-frame input capture and heading
//! - `movement`: Wall/bounds move resolution and win query
//! - `state`: Player and session state
//! - `tick`: Per-frame session step
//! - `events`: Game events for host sound/animation cues

pub mod difficulty;
pub mod events;
pub mod input;
pub mod maze;
pub mod movement;
pub mod state;
pub mod tick;

// Re-export key types
pub use difficulty::{Difficulty, ScreenBounds};
pub use events::GameEvent;
pub use input::{Heading, InputFrame};
pub use maze::{Cell, Maze, MazeError};
pub use movement::{attempt_move, is_at_exit, MoveOutcome};
pub use state::{PlayerState, SessionId, SessionPhase, SessionState};
pub use tick::{step, StepResult};
