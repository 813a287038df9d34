//! Per-frame game step
//!
//! One pass of the play loop minus presenting and pacing: tick the
//! controller, then draw the session only if the round is still running.

use rand::Rng;

use super::controller::{Controls, EndReason, GameController, GameState};
use super::event::Events;
use super::renderer::{draw_session, Canvas};

/// Tick the round at `now` and draw it if it is still running.
/// An ended round draws nothing; the caller stops its loop.
pub fn step<R: Rng>(
    game: &mut GameController<R>,
    now: f64,
    controls: &Controls,
    canvas: &mut impl Canvas,
) -> GameState {
    let state = game.tick(now, controls);
    if state == GameState::Running {
        draw_session(canvas, game.session(), game.remaining());
    }
    state
}

/// Message shown to the player when a round ends, if any
pub fn end_message(reason: EndReason) -> Option<&'static str> {
    match reason {
        EndReason::TimeUp => Some("Time's up! Game Over!"),
        EndReason::Quit => None,
    }
}

/// Drain this tick's gameplay events into the log
pub fn report_events(events: &mut Events) {
    for event in events.collected.drain() {
        log::info!(
            "Picked up collectible at ({}, {}), score {}",
            event.position.x,
            event.position.z,
            event.score
        );
    }
    for event in events.level_up.drain() {
        log::info!(
            "Level {}: speed {:.2}, {} collectibles and walls",
            event.level,
            event.speed,
            event.spawned
        );
    }
    for event in events.blocked.drain() {
        log::debug!(
            "Blocked by wall at ({:.2}, {:.2}) moving ({:.2}, {:.2})",
            event.position.x,
            event.position.z,
            event.movement.x,
            event.movement.z
        );
    }
}
