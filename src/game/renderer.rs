//! Game Renderer
//!
//! Draws a session in two passes: the 3D world (wireframe cubes seen
//! through a fixed perspective camera), then a 2D overlay with the timer,
//! score and level. Presenting the frame is the caller's job.

use macroquad::prelude::*;

use crate::geometry::cube_edges;
use super::session::GameSession;

pub const PLAYER_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const WALL_COLOR: Color = Color::new(0.0, 0.0, 1.0, 1.0);
pub const COLLECTIBLE_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);
pub const HUD_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);

pub const HUD_FONT_SIZE: f32 = 24.0;

/// Camera sits on +Z looking back at the origin, so the arena (negative Z)
/// lies in front of the player's start
const CAMERA_DISTANCE: f32 = 20.0;

/// Drawing surface used by the game and intro loops
pub trait Canvas {
    /// Clear the whole frame to black
    fn clear(&mut self);
    /// Start the 3D pass (clears the frame)
    fn begin_world(&mut self);
    /// Wireframe cube centered on `center`
    fn draw_cube(&mut self, center: Vec3, color: Color);
    /// Switch to screen-space drawing on top of the world
    fn begin_overlay(&mut self);
    /// Text with its top-left corner at (`x`, `y`) in screen pixels
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color);
    /// The logo image scaled to `size`, centered on screen and rotated
    /// counter-clockwise by `degrees`
    fn draw_logo(&mut self, size: Vec2, degrees: f32);
}

/// Canvas backed by macroquad's immediate-mode drawing
pub struct MacroquadCanvas {
    camera: Camera3D,
    font: Option<Font>,
    logo: Option<Texture2D>,
}

impl MacroquadCanvas {
    /// `font` of `None` uses macroquad's built-in font
    pub fn new(font: Option<Font>) -> Self {
        Self {
            camera: Camera3D {
                position: vec3(0.0, 0.0, CAMERA_DISTANCE),
                target: Vec3::ZERO,
                up: Vec3::Y,
                projection: Projection::Perspective,
                ..Default::default()
            },
            font,
            logo: None,
        }
    }

    /// Image drawn by [`Canvas::draw_logo`]; nothing is drawn until set
    pub fn set_logo(&mut self, logo: Texture2D) {
        self.logo = Some(logo);
    }
}

impl Canvas for MacroquadCanvas {
    fn clear(&mut self) {
        clear_background(BLACK);
    }

    fn begin_world(&mut self) {
        self.clear();
        set_camera(&self.camera);
    }

    fn draw_cube(&mut self, center: Vec3, color: Color) {
        for (a, b) in cube_edges(center) {
            draw_line_3d(a, b, color);
        }
    }

    fn begin_overlay(&mut self) {
        set_default_camera();
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        // macroquad places text by its baseline
        draw_text_ex(
            text,
            x,
            y + size,
            TextParams {
                font: self.font.as_ref(),
                font_size: size as u16,
                color,
                ..Default::default()
            },
        );
    }

    fn draw_logo(&mut self, size: Vec2, degrees: f32) {
        let Some(logo) = &self.logo else { return };
        draw_texture_ex(
            logo,
            screen_width() / 2.0 - size.x / 2.0,
            screen_height() / 2.0 - size.y / 2.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(size),
                // Screen Y points down, so negate for counter-clockwise
                rotation: -degrees.to_radians(),
                ..Default::default()
            },
        );
    }
}

/// HUD lines and their screen positions
pub fn hud_lines(session: &GameSession, remaining: u32) -> [(String, f32, f32); 3] {
    [
        (format!("Timer: {}s", remaining), 10.0, 10.0),
        (format!("Score: {}", session.score), 10.0, 40.0),
        (format!("Level: {}", session.level), 10.0, 70.0),
    ]
}

/// Draw one frame of the session: world pass, then overlay pass
pub fn draw_session(canvas: &mut impl Canvas, session: &GameSession, remaining: u32) {
    canvas.begin_world();
    canvas.draw_cube(session.player.position, PLAYER_COLOR);
    for &wall in &session.walls {
        canvas.draw_cube(wall, WALL_COLOR);
    }
    for &collectible in &session.collectibles {
        canvas.draw_cube(collectible, COLLECTIBLE_COLOR);
    }

    canvas.begin_overlay();
    for (text, x, y) in hud_lines(session, remaining) {
        canvas.draw_text(&text, x, y, HUD_FONT_SIZE, HUD_COLOR);
    }
}
