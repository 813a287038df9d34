//! Intro screen
//!
//! Spinning logo and a title card, shown once before the maze. Runs its own
//! 30 FPS loop until any key (or gamepad button) is pressed. Closing the
//! window here ends the whole program.

use macroquad::prelude::*;

use crate::game::Canvas;
use crate::input::InputState;
use crate::pacing::FpsLimit;

/// Logo is scaled to this size before rotating
pub const LOGO_SIZE: Vec2 = Vec2::new(300.0, 200.0);

/// Rotation added every intro tick
pub const SPIN_STEP_DEGREES: f32 = 2.0;

const TITLE: &str = "Welcome to Maze Adventure!";
const PROMPT: &str = "Press ANY key to start";
const INTRO_FONT_SIZE: f32 = 36.0;
const TITLE_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);
const PROMPT_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroOutcome {
    /// A key was pressed; start the game
    Start,
    /// The window was closed; exit without playing
    Quit,
}

/// Decide whether the intro is over. Quit wins over a same-frame key press.
pub fn resolve(quit: bool, key_pressed: bool) -> Option<IntroOutcome> {
    if quit {
        Some(IntroOutcome::Quit)
    } else if key_pressed {
        Some(IntroOutcome::Start)
    } else {
        None
    }
}

/// Logo rotation in degrees, counter-clockwise
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogoSpin {
    degrees: f32,
}

impl LogoSpin {
    pub fn degrees(&self) -> f32 {
        self.degrees
    }

    pub fn advance(&mut self) {
        self.degrees = (self.degrees + SPIN_STEP_DEGREES) % 360.0;
    }
}

/// One intro frame: cleared screen, the rotated logo, then both captions
pub fn draw_frame(canvas: &mut impl Canvas, spin: LogoSpin) {
    canvas.clear();
    canvas.begin_overlay();
    canvas.draw_logo(LOGO_SIZE, spin.degrees());
    canvas.draw_text(TITLE, 200.0, 100.0, INTRO_FONT_SIZE, TITLE_COLOR);
    canvas.draw_text(PROMPT, 250.0, 500.0, INTRO_FONT_SIZE, PROMPT_COLOR);
}

/// Show the intro until a key press or quit.
/// The logo is whatever image the canvas was given.
pub async fn run(canvas: &mut impl Canvas, input: &mut InputState) -> IntroOutcome {
    let mut spin = LogoSpin::default();

    loop {
        let frame_start = get_time();
        input.poll();

        draw_frame(canvas, spin);

        if let Some(outcome) = resolve(input.quit_requested(), input.any_pressed()) {
            return outcome;
        }

        next_frame().await;
        spin.advance();
        FpsLimit::Fps30.wait(frame_start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::renderer::tests::{Call, RecordingCanvas};

    #[test]
    fn test_resolve() {
        assert_eq!(resolve(false, false), None);
        assert_eq!(resolve(false, true), Some(IntroOutcome::Start));
        assert_eq!(resolve(true, false), Some(IntroOutcome::Quit));
        assert_eq!(resolve(true, true), Some(IntroOutcome::Quit));
    }

    #[test]
    fn test_spin_advances_and_wraps() {
        let mut spin = LogoSpin::default();
        spin.advance();
        assert_eq!(spin.degrees(), 2.0);

        for _ in 1..180 {
            spin.advance();
        }
        assert_eq!(spin.degrees(), 0.0);
    }

    #[test]
    fn test_frame_draws_logo_under_captions() {
        let mut canvas = RecordingCanvas::default();
        draw_frame(&mut canvas, LogoSpin::default());
        assert_eq!(
            canvas.calls,
            vec![
                Call::Clear,
                Call::BeginOverlay,
                Call::Logo(LOGO_SIZE, 0.0),
                Call::Text(TITLE.to_string(), 200.0, 100.0),
                Call::Text(PROMPT.to_string(), 250.0, 500.0),
            ]
        );
    }

    #[test]
    fn test_logo_follows_spin() {
        let mut spin = LogoSpin::default();
        for _ in 0..45 {
            spin.advance();
        }

        let mut canvas = RecordingCanvas::default();
        draw_frame(&mut canvas, spin);
        assert!(canvas.calls.contains(&Call::Logo(LOGO_SIZE, 90.0)));
    }
}
