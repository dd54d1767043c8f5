//! Per-Frame Session Step
//!
//! One call per host frame: translate the frame's input into a displacement,
//! resolve it, update the player, and check the win condition. The host reacts
//! to the returned events; after a win the session goes inert.

use tracing::info;

use crate::game::events::GameEvent;
use crate::game::input::InputFrame;
use crate::game::movement::{attempt_move, is_at_exit};
use crate::game::state::{SessionPhase, SessionState};

/// Result of one step.
#[derive(Debug, Default)]
pub struct StepResult {
    /// Events generated this step
    pub events: Vec<GameEvent>,
    /// Whether the session is won (latches once the exit is reached)
    pub won: bool,
}

/// Run one frame of the session.
///
/// Order per frame: resolve the requested move, then check the exit overlap.
/// The win check runs even on idle frames, so an exit placed on the spawn cell
/// wins immediately. Steps after a win change nothing and report `won = true`.
pub fn step(state: &mut SessionState, input: InputFrame) -> StepResult {
    if state.phase == SessionPhase::Won {
        return StepResult {
            events: Vec::new(),
            won: true,
        };
    }

    state.tick += 1;

    let displacement = input.displacement(state.player.speed);
    let outcome = attempt_move(state.player.position, displacement, &state.maze, state.bounds());

    state.player.heading = outcome.heading;
    if outcome.moved {
        state.player.position = outcome.position;
        state.player.steps += 1;
        state.push_event(GameEvent::PlayerMoved {
            tick: state.tick,
            position: outcome.position,
            heading: outcome.heading,
        });
    } else if !input.is_idle() {
        state.push_event(GameEvent::MoveBlocked {
            tick: state.tick,
            heading: outcome.heading,
        });
    }

    let won = is_at_exit(state.player.position, state.maze.exit_position());
    if won {
        state.phase = SessionPhase::Won;
        info!(tick = state.tick, position = %state.player.position, "exit reached");
        state.push_event(GameEvent::ExitReached {
            tick: state.tick,
            position: state.player.position,
        });
    }

    StepResult {
        events: state.take_events(),
        won,
    }
}

// =============================================================================
// TESTS
// =============================================================================
