//! Game Module
//!
//! The maze round itself: session state, the per-tick controller, the
//! countdown, gameplay events and the renderer that draws it all.
//!
//! Key concepts:
//! - Session: everything that changes while a round is played
//! - Controller: owns the session and advances it one tick at a time
//! - Event: what happened during a tick, drained by the frame loop
//! - Canvas: the drawing seam between the game and macroquad
//! - Frame: one tick plus its draw, as the play loop runs it

pub mod event;
pub mod session;
pub mod timer;
pub mod controller;
pub mod renderer;
pub mod frame;

// Re-export main types
pub use controller::{Controls, EndReason, GameController, GameState};
pub use event::Events;
pub use frame::{end_message, report_events, step};
pub use renderer::{draw_session, Canvas, MacroquadCanvas};
pub use session::GameSession;
