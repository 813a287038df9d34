//! Game session state
//!
//! Everything that changes while a round is played: the player cube, the
//! wall cubes, the collectibles, and the score/level/speed counters.

use macroquad::math::Vec3;
use rand::Rng;

/// Speed the player starts the first level with
pub const STARTING_SPEED: f32 = 0.1;

/// Speed gained on every level-up
pub const SPEED_STEP: f32 = 0.02;

/// Collectibles on the first level
pub const STARTING_COLLECTIBLES: usize = 5;

/// Spawn bounds (inclusive, whole units)
pub mod arena {
    pub const X_MIN: i32 = -5;
    pub const X_MAX: i32 = 5;
    pub const Z_MIN: i32 = -15;
    pub const Z_MAX: i32 = -5;
}

/// Hand-placed walls of the first level
pub const STARTING_WALLS: [Vec3; 5] = [
    Vec3::new(3.0, 0.0, -10.0),
    Vec3::new(-3.0, 0.0, -10.0),
    Vec3::new(0.0, 0.0, -5.0),
    Vec3::new(5.0, 0.0, -3.0),
    Vec3::new(0.0, 0.0, -3.0),
];

/// The player cube
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub position: Vec3,
    /// Movement intent for the current tick (x and z only)
    pub movement: Vec3,
}

impl Player {
    pub fn new(position: Vec3) -> Self {
        Self { position, movement: Vec3::ZERO }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

/// One round of play
#[derive(Debug, Clone)]
pub struct GameSession {
    pub player: Player,
    /// Wall positions; duplicates allowed
    pub walls: Vec<Vec3>,
    /// Collectibles in pickup-scan order
    pub collectibles: Vec<Vec3>,
    pub score: u32,
    /// Starts at 1
    pub level: u32,
    pub speed: f32,
}

impl GameSession {
    /// First level: fixed walls, random collectibles
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            player: Player::default(),
            walls: STARTING_WALLS.to_vec(),
            collectibles: spawn_positions(rng, STARTING_COLLECTIBLES),
            score: 0,
            level: 1,
            speed: STARTING_SPEED,
        }
    }

    /// Number of collectibles (and walls) spawned for `level`
    pub fn spawn_count(level: u32) -> usize {
        5 + level as usize
    }

    /// Advance to the next level, discarding and resampling walls and
    /// collectibles. Walls use the collectible count on purpose.
    pub fn level_up(&mut self, rng: &mut impl Rng) {
        self.level += 1;
        self.speed += SPEED_STEP;
        let count = Self::spawn_count(self.level);
        self.collectibles = spawn_positions(rng, count);
        self.walls = spawn_positions(rng, count);
    }
}

/// Sample `count` positions on the floor of the arena
pub fn spawn_positions(rng: &mut impl Rng, count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let x = rng.gen_range(arena::X_MIN..=arena::X_MAX);
            let z = rng.gen_range(arena::Z_MIN..=arena::Z_MAX);
            Vec3::new(x as f32, 0.0, z as f32)
        })
        .collect()
}
