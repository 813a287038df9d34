//! Collision System
//!
//! Point-distance collision: two entities touch when their centers are
//! closer than a fixed threshold. Walls block movement, collectibles get
//! picked up, both at the same range.

use macroquad::math::Vec3;

/// Center distance below which the player is blocked by a wall
pub const WALL_CONTACT: f32 = 2.0;

/// Center distance below which the player picks up a collectible
pub const PICKUP_RANGE: f32 = 2.0;

/// True iff `a` and `b` are strictly closer than `threshold`
pub fn is_colliding(a: Vec3, b: Vec3, threshold: f32) -> bool {
    a.distance(b) < threshold
}

/// True iff `point` collides with any of `others`
pub fn hits_any(point: Vec3, others: &[Vec3], threshold: f32) -> bool {
    others.iter().any(|&other| is_colliding(point, other, threshold))
}
