//! # Maze Escape Core
//!
//! Deterministic maze generation and movement resolution for the Maze Escape game.
//! This crate is the game's logic core only: the host owns the window, rendering,
//! input polling, menu, sounds, and animations, and drives this crate once per frame.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    MAZE ESCAPE CORE                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── vec2.rs     - Integer pixel-coordinate 2D vector        │
//! │  ├── rect.rs     - Axis-aligned bounding boxes               │
//! │  └── rng.rs      - Deterministic Xorshift128+ PRNG           │
//! │                                                              │
//! │  game/           - Game logic (deterministic)                │
//! │  ├── difficulty.rs - Difficulty table and screen bounds      │
//! │  ├── maze.rs     - Maze carving and exit placement           │
//! │  ├── input.rs    - Per-frame input and heading               │
//! │  ├── movement.rs - Wall/bounds resolution and win query      │
//! │  ├── state.rs    - Player and session state                  │
//! │  ├── tick.rs     - Per-frame session step                    │
//! │  └── events.rs   - Host cues (sound/animation triggers)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! Given the same difficulty and seed, a session produces an identical maze and
//! identical move resolutions on any platform:
//! - Integer pixel coordinates only, no floating point
//! - All randomness from seeded Xorshift128+
//! - No system time or I/O anywhere in the core
//!
//! ## Typical host loop
//!
//! ```
//! use maze_escape::game::difficulty::Difficulty;
//! use maze_escape::game::input::InputFrame;
//! use maze_escape::game::state::SessionState;
//! use maze_escape::game::tick::step;
//!
//! let mut session = SessionState::new(Difficulty::Easy, 7).unwrap();
//! // per frame: translate held keys into an InputFrame, then step
//! let result = step(&mut session, InputFrame::from_keys(false, true, false, false));
//! assert_eq!(result.won, session.is_won());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::rect::Rect;
pub use crate::core::rng::DeterministicRng;
pub use crate::core::vec2::Vec2;
pub use game::difficulty::{Difficulty, ScreenBounds};
pub use game::input::{Heading, InputFrame};
pub use game::maze::{Cell, Maze, MazeError};
pub use game::movement::MoveOutcome;
pub use game::state::{PlayerState, SessionId, SessionState};
pub use game::tick::StepResult;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Side of one grid cell in pixels.
pub const CELL_SIZE: i32 = 20;

/// Half-side of the player's bounding box in pixels (a 20x20 box, one cell).
pub const PLAYER_RADIUS: i32 = 10;

/// Pixels the player advances per accepted move step.
pub const PLAYER_SPEED: i32 = 5;

/// Player spawn point at session start, in pixels.
pub const SPAWN_POSITION: Vec2 = Vec2::new(30, 30);
