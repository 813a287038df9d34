//! Gamepad support
//!
//! Native: uses gilrs for cross-platform gamepad input
//! WASM: no gamepad backend, keyboard only

use macroquad::math::Vec2;

// Standard gamepad button indices (Web Gamepad API standard mapping)
pub mod button {
    pub const DPAD_UP: u32 = 12;
    pub const DPAD_DOWN: u32 = 13;
    pub const DPAD_LEFT: u32 = 14;
    pub const DPAD_RIGHT: u32 = 15;
}

// ============================================================================
// Native Implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use super::*;
    use gilrs::{Axis, Button as GilrsButton, EventType, Gilrs};

    pub struct Gamepad {
        /// None when the platform has no gamepad backend
        gilrs: Option<Gilrs>,
        deadzone: f32,
        pressed_this_frame: bool,
    }

    impl Gamepad {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(gilrs) => Some(gilrs),
                Err(e) => {
                    log::warn!("Gamepad input unavailable: {}", e);
                    None
                }
            };
            Self {
                gilrs,
                deadzone: 0.15,
                pressed_this_frame: false,
            }
        }

        /// Drain pending gilrs events. Call once per frame.
        pub fn poll(&mut self) {
            self.pressed_this_frame = false;
            let Some(gilrs) = self.gilrs.as_mut() else { return };
            while let Some(event) = gilrs.next_event() {
                if let EventType::ButtonPressed(..) = event.event {
                    self.pressed_this_frame = true;
                }
            }
        }

        pub fn has_gamepad(&self) -> bool {
            self.active_gamepad().is_some()
        }

        fn active_gamepad(&self) -> Option<gilrs::Gamepad<'_>> {
            self.gilrs.as_ref()?.gamepads().next().map(|(_, gp)| gp)
        }

        pub fn is_button_down(&self, button: u32) -> bool {
            let Some(gp) = self.active_gamepad() else { return false };
            let mapped = match button {
                super::button::DPAD_UP => GilrsButton::DPadUp,
                super::button::DPAD_DOWN => GilrsButton::DPadDown,
                super::button::DPAD_LEFT => GilrsButton::DPadLeft,
                super::button::DPAD_RIGHT => GilrsButton::DPadRight,
                _ => return false,
            };
            gp.is_pressed(mapped)
        }

        /// Any button went down since the previous poll
        pub fn any_button_pressed(&self) -> bool {
            self.pressed_this_frame
        }

        pub fn left_stick(&self) -> Vec2 {
            let Some(gp) = self.active_gamepad() else { return Vec2::ZERO };
            let x = gp.value(Axis::LeftStickX);
            let y = -gp.value(Axis::LeftStickY); // Down is positive, like screen space
            apply_deadzone(x, y, self.deadzone)
        }
    }
}

// ============================================================================
// WASM Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    use super::*;

    pub struct Gamepad;

    impl Gamepad {
        pub fn new() -> Self {
            Self
        }

        pub fn poll(&mut self) {}

        pub fn has_gamepad(&self) -> bool {
            false
        }

        pub fn is_button_down(&self, _button: u32) -> bool {
            false
        }

        pub fn any_button_pressed(&self) -> bool {
            false
        }

        pub fn left_stick(&self) -> Vec2 {
            Vec2::ZERO
        }
    }
}

impl Default for Gamepad {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Shared utilities
// ============================================================================

/// Apply radial deadzone with linear rescaling
fn apply_deadzone(x: f32, y: f32, deadzone: f32) -> Vec2 {
    let len = (x * x + y * y).sqrt();
    if len < deadzone {
        return Vec2::ZERO;
    }
    // Rescale from deadzone..1.0 to 0.0..1.0
    let scale = (len - deadzone) / (1.0 - deadzone) / len;
    Vec2::new(x * scale, y * scale)
}

pub use platform::Gamepad;
