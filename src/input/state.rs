//! Input state management
//!
//! Polls the keyboard (macroquad) and gamepad (gilrs) once per frame,
//! combining them into a unified action-based API.

use macroquad::prelude::*;

use super::{button, Action, Gamepad};
use crate::game::Controls;

/// Unified input state that handles both keyboard and gamepad
pub struct InputState {
    gamepad: Gamepad,
    /// How far the stick must lean before it counts as a direction (0.0-1.0)
    pub stick_threshold: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            gamepad: Gamepad::new(),
            stick_threshold: 0.5,
        }
    }

    /// Call once per frame before checking actions
    pub fn poll(&mut self) {
        self.gamepad.poll();
    }

    pub fn has_gamepad(&self) -> bool {
        self.gamepad.has_gamepad()
    }

    /// The window was asked to close.
    /// Only reported when `prevent_quit` was called at startup.
    pub fn quit_requested(&self) -> bool {
        is_quit_requested()
    }

    /// Any key or gamepad button went down this frame
    pub fn any_pressed(&self) -> bool {
        get_last_key_pressed().is_some() || self.gamepad.any_button_pressed()
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        self.keyboard_down(action) || self.gamepad_down(action)
    }

    /// Snapshot of everything the game controller reads in one tick
    pub fn controls(&self) -> Controls {
        sample_controls(self.quit_requested(), |action| self.action_down(action))
    }

    fn keyboard_down(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => is_key_down(KeyCode::Left),
            Action::MoveRight => is_key_down(KeyCode::Right),
            Action::MoveForward => is_key_down(KeyCode::Up),
            Action::MoveBackward => is_key_down(KeyCode::Down),
        }
    }

    fn gamepad_down(&self, action: Action) -> bool {
        let dpad = match action {
            Action::MoveLeft => button::DPAD_LEFT,
            Action::MoveRight => button::DPAD_RIGHT,
            Action::MoveForward => button::DPAD_UP,
            Action::MoveBackward => button::DPAD_DOWN,
        };
        self.gamepad.is_button_down(dpad)
            || stick_leans(self.gamepad.left_stick(), action, self.stick_threshold)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a stick (down = +y) leans toward `action` past `threshold`
fn stick_leans(stick: Vec2, action: Action, threshold: f32) -> bool {
    match action {
        Action::MoveLeft => stick.x <= -threshold,
        Action::MoveRight => stick.x >= threshold,
        Action::MoveForward => stick.y <= -threshold,
        Action::MoveBackward => stick.y >= threshold,
    }
}

/// Build a [`Controls`] snapshot from a quit flag and an action query
fn sample_controls(quit: bool, down: impl Fn(Action) -> bool) -> Controls {
    Controls {
        quit,
        left: down(Action::MoveLeft),
        right: down(Action::MoveRight),
        up: down(Action::MoveForward),
        down: down(Action::MoveBackward),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stick_leans() {
        let up_left = vec2(-0.7, -0.6);
        assert!(stick_leans(up_left, Action::MoveLeft, 0.5));
        assert!(stick_leans(up_left, Action::MoveForward, 0.5));
        assert!(!stick_leans(up_left, Action::MoveRight, 0.5));
        assert!(!stick_leans(up_left, Action::MoveBackward, 0.5));

        for action in [Action::MoveLeft, Action::MoveRight, Action::MoveForward, Action::MoveBackward] {
            assert!(!stick_leans(Vec2::ZERO, action, 0.5));
        }
    }

    #[test]
    fn test_sample_controls_maps_actions() {
        let controls = sample_controls(false, |a| matches!(a, Action::MoveLeft | Action::MoveBackward));
        assert_eq!(
            controls,
            Controls { quit: false, left: true, right: false, up: false, down: true }
        );

        let quitting = sample_controls(true, |_| false);
        assert!(quitting.quit);
        assert_eq!(quitting, Controls { quit: true, ..Controls::default() });
    }
}
