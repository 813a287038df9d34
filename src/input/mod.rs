//! Input handling with gamepad support
//!
//! Provides an action-based input layer over macroquad's keyboard state and
//! the window's quit request, plus gamepads where the platform has them.
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: Keyboard only

mod actions;
mod gamepad;
mod state;

pub use actions::*;
pub use gamepad::{Gamepad, button};
pub use state::*;
