//! Game Loop Controller
//!
//! Owns the session for its whole lifetime and advances it one tick at a
//! time. Each tick runs, in order:
//! 1. Countdown check (ends the round at zero)
//! 2. Quit check
//! 3. Directional input → movement intent
//! 4. Tentative move, reverted on wall contact
//! 5. At most one collectible pickup
//! 6. Level-up once the last collectible is taken
//!
//! Rendering is left to the caller, which draws the session after every
//! tick that leaves the controller running.

use macroquad::math::Vec3;
use rand::rngs::StdRng;
use rand::Rng;

use crate::collision::{hits_any, is_colliding, PICKUP_RANGE, WALL_CONTACT};
use super::event::{BlockedEvent, CollectedEvent, Events, LevelUpEvent};
use super::session::GameSession;
use super::timer::{Countdown, ROUND_SECONDS};

/// Input sampled for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub quit: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    TimeUp,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Running,
    /// Terminal; further ticks are ignored
    Ended(EndReason),
}

/// Resolve two opposing keys into -speed, +speed or 0.
/// The negative key is checked first and wins when both are held.
fn axis(negative: bool, positive: bool, speed: f32) -> f32 {
    if negative {
        -speed
    } else if positive {
        speed
    } else {
        0.0
    }
}

pub struct GameController<R: Rng = StdRng> {
    session: GameSession,
    countdown: Countdown,
    rng: R,
    state: GameState,
    /// Seconds left as of the last tick
    remaining: u32,
    pub events: Events,
}

impl<R: Rng> GameController<R> {
    /// Start a new round at time `now` (seconds)
    pub fn new(mut rng: R, now: f64) -> Self {
        let session = GameSession::new(&mut rng);
        Self::with_session(session, rng, now)
    }

    /// Start a round from an existing session layout
    pub fn with_session(session: GameSession, rng: R, now: f64) -> Self {
        Self {
            session,
            countdown: Countdown::start(ROUND_SECONDS, now),
            rng,
            state: GameState::Running,
            remaining: ROUND_SECONDS,
            events: Events::new(),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Whole seconds left on the clock as of the last tick
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Advance the round by one tick at time `now`
    pub fn tick(&mut self, now: f64, controls: &Controls) -> GameState {
        if self.state != GameState::Running {
            return self.state;
        }

        self.remaining = self.countdown.remaining(now);
        if self.remaining == 0 {
            self.state = GameState::Ended(EndReason::TimeUp);
            return self.state;
        }

        if controls.quit {
            self.state = GameState::Ended(EndReason::Quit);
            return self.state;
        }

        self.apply_movement(controls);

        let collected = self.collect_one();
        if collected && self.session.collectibles.is_empty() {
            self.session.level_up(&mut self.rng);
            self.events.level_up.send(LevelUpEvent {
                level: self.session.level,
                speed: self.session.speed,
                spawned: self.session.collectibles.len(),
            });
        }

        self.state
    }

    fn apply_movement(&mut self, controls: &Controls) {
        let speed = self.session.speed;
        let player = &mut self.session.player;

        // Flat maze: y never moves
        player.movement = Vec3::new(
            axis(controls.left, controls.right, speed),
            0.0,
            axis(controls.up, controls.down, speed),
        );
        let before = player.position;
        player.position += player.movement;

        // Rejected moves are undone completely, no sliding along walls
        if hits_any(player.position, &self.session.walls, WALL_CONTACT) {
            player.position = before;
            if player.movement != Vec3::ZERO {
                self.events.blocked.send(BlockedEvent {
                    position: player.position,
                    movement: player.movement,
                });
            }
        }
    }

    /// Pick up the first collectible in range, if any
    fn collect_one(&mut self) -> bool {
        let player = self.session.player.position;
        let hit = self
            .session
            .collectibles
            .iter()
            .position(|&c| is_colliding(player, c, PICKUP_RANGE));

        let Some(index) = hit else { return false };
        let position = self.session.collectibles.remove(index);
        self.session.score += 1;
        self.events.collected.send(CollectedEvent {
            position,
            score: self.session.score,
        });
        true
    }
}
