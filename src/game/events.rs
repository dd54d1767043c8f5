//! Game Events
//!
//! Events generated during a session for the host's presentation layer. The
//! core never plays sounds or advances animations itself; the host reacts to
//! these cues (move sound on `PlayerMoved`, win sound and confetti on
//! `ExitReached`) in whatever order it prefers.

use serde::{Deserialize, Serialize};

use crate::core::vec2::Vec2;
use crate::game::input::Heading;

/// Game event data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An attempted move was accepted
    PlayerMoved {
        /// Tick when the move landed
        tick: u32,
        /// Committed position
        position: Vec2,
        /// Direction of travel
        heading: Heading,
    },

    /// An attempted move was rejected by a wall or the screen edge
    MoveBlocked {
        /// Tick of the attempt
        tick: u32,
        /// Direction of attempted travel
        heading: Heading,
    },

    /// The player's box reached the exit cell
    ExitReached {
        /// Tick of the win
        tick: u32,
        /// Player position at the win
        position: Vec2,
    },
}

impl GameEvent {
    /// Tick when the event occurred.
    pub const fn tick(&self) -> u32 {
        match self {
            GameEvent::PlayerMoved { tick, .. }
            | GameEvent::MoveBlocked { tick, .. }
            | GameEvent::ExitReached { tick, .. } => *tick,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
