//! Session State
//!
//! The explicit per-play context: one session is created when the player picks
//! a difficulty in the menu and dropped when they return to it. Everything a
//! frame touches lives here; there is no process-wide game state.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::rect::Rect;
use crate::core::rng::{derive_session_seed, DeterministicRng};
use crate::core::vec2::Vec2;
use crate::game::difficulty::{Difficulty, ScreenBounds};
use crate::game::events::GameEvent;
use crate::game::input::Heading;
use crate::game::maze::{Maze, MazeError};
use crate::{PLAYER_RADIUS, PLAYER_SPEED, SPAWN_POSITION};

// =============================================================================
// SESSION ID
// =============================================================================

/// Unique session identifier (UUID as bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub struct SessionId(pub [u8; 16]);

impl SessionId {
    /// Create from raw bytes.
    pub const fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Create a fresh random id.
    pub fn generate() -> Self {
        Self(*uuid::Uuid::new_v4().as_bytes())
    }

    /// Create from UUID string.
    pub fn from_uuid_str(s: &str) -> Option<Self> {
        uuid::Uuid::parse_str(s).ok().map(|u| Self(*u.as_bytes()))
    }

    /// Convert to UUID string.
    pub fn to_uuid_string(&self) -> String {
        uuid::Uuid::from_bytes(self.0).to_string()
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

// =============================================================================
// PLAYER STATE
// =============================================================================

/// State of the player avatar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Current position in pixels (center of the bounding box)
    pub position: Vec2,

    /// Half-side of the bounding box in pixels
    pub radius: i32,

    /// Pixels advanced per accepted move
    pub speed: i32,

    /// Facing from the last attempted move, for sprite selection
    pub heading: Heading,

    /// Accepted moves so far this session
    pub steps: u32,
}

impl PlayerState {
    /// Create a new player at a spawn position.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            radius: PLAYER_RADIUS,
            speed: PLAYER_SPEED,
            heading: Heading::Idle,
            steps: 0,
        }
    }

    /// The player's current bounding box.
    #[inline]
    pub fn bounding_box(&self) -> Rect {
        Rect::centered(self.position, self.radius)
    }
}

// =============================================================================
// SESSION PHASE
// =============================================================================

/// Current phase of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Default)]
pub enum SessionPhase {
    /// Actively playing
    #[default]
    Playing,
    /// Exit reached; the session is inert until the host drops it
    Won,
}

// =============================================================================
// SESSION STATE
// =============================================================================

/// Complete state of one play session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionState {
    /// Session identifier
    pub session_id: SessionId,

    /// Difficulty this session was started with
    pub difficulty: Difficulty,

    /// RNG seed the maze was generated from (for replays)
    pub seed: u64,

    /// Frames stepped so far
    pub tick: u32,

    /// Current phase
    pub phase: SessionPhase,

    /// The generated maze, read-only for the life of the session
    pub maze: Maze,

    /// The player avatar
    pub player: PlayerState,

    /// RNG state after generation (retained for checkpointing)
    pub rng: DeterministicRng,

    /// Events accumulated during the current step
    events: Vec<GameEvent>,
}

impl SessionState {
    /// Start a session: generate the maze for the difficulty and spawn the
    /// player.
    ///
    /// # Errors
    ///
    /// Propagates [`MazeError`] from generation. The built-in difficulty table
    /// never produces invalid dimensions, so this only fires for hosts driving
    /// generation with custom dimensions elsewhere.
    pub fn new(difficulty: Difficulty, seed: u64) -> Result<Self, MazeError> {
        let mut rng = DeterministicRng::new(seed);
        let maze = Maze::generate(difficulty.maze_width(), difficulty.maze_height(), &mut rng)?;
        let session_id = SessionId::generate();

        info!(
            session_id = %session_id.to_uuid_string(),
            %difficulty,
            seed,
            "session created"
        );

        Ok(Self {
            session_id,
            difficulty,
            seed,
            tick: 0,
            phase: SessionPhase::Playing,
            maze,
            player: PlayerState::new(SPAWN_POSITION),
            rng,
            events: Vec::new(),
        })
    }

    /// Start a session without managing a seed directly: fold host entropy
    /// and the difficulty into one via [`derive_session_seed`].
    ///
    /// Recording the entropy bytes is enough to replay the session.
    ///
    /// # Errors
    ///
    /// Propagates [`MazeError`] from generation, as [`SessionState::new`].
    pub fn from_entropy(difficulty: Difficulty, entropy: &[u8; 32]) -> Result<Self, MazeError> {
        let seed = derive_session_seed(entropy, difficulty as u8);
        Self::new(difficulty, seed)
    }

    /// Screen bounds for this session, from the difficulty table.
    ///
    /// The table is the single authority for screen size; it is not derivable
    /// from the maze (medium is 600x450 over a 600x440 maze).
    #[inline]
    pub fn bounds(&self) -> ScreenBounds {
        self.difficulty.screen_bounds()
    }

    /// Whether the exit has been reached.
    #[inline]
    pub fn is_won(&self) -> bool {
        self.phase == SessionPhase::Won
    }

    /// Queue an event for the current step.
    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain queued events.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Build a session from parts. Test fixtures only.
    #[cfg(test)]
    pub(crate) fn from_parts(difficulty: Difficulty, maze: Maze, player: PlayerState) -> Self {
        Self {
            session_id: SessionId::default(),
            difficulty,
            seed: 0,
            tick: 0,
            phase: SessionPhase::Playing,
            maze,
            player,
            rng: DeterministicRng::new(0),
            events: Vec::new(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
