//! Frame pacing
//!
//! Both loops run at a fixed tick rate: the intro at 30 FPS, the game at
//! 60 FPS. The limiter blocks at the end of a frame until the frame budget
//! is used up; it cannot be interrupted mid-wait.

use macroquad::time::get_time;

/// FPS limit setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FpsLimit {
    /// Intro screen
    Fps30,
    /// Gameplay
    Fps60,
}

impl FpsLimit {
    /// Target frame time in seconds
    pub fn frame_time(&self) -> f64 {
        match self {
            FpsLimit::Fps30 => 1.0 / 30.0,
            FpsLimit::Fps60 => 1.0 / 60.0,
        }
    }

    /// Block until `frame_time` has passed since `frame_start` (seconds, from `get_time`)
    pub fn wait(&self, frame_start: f64) {
        let target_frame_time = self.frame_time();
        if get_time() - frame_start >= target_frame_time {
            return;
        }

        // Native: use sleep for bulk, then spin-wait for precision
        #[cfg(not(target_arch = "wasm32"))]
        {
            let spin_margin = 0.002; // 2ms
            while get_time() - frame_start + spin_margin < target_frame_time {
                std::thread::sleep(std::time::Duration::from_millis(1));
            }
            while get_time() - frame_start < target_frame_time {
                std::hint::spin_loop();
            }
        }
        // WASM: no thread::sleep available
        #[cfg(target_arch = "wasm32")]
        {
            while get_time() - frame_start < target_frame_time {
                std::hint::spin_loop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_time() {
        assert!((FpsLimit::Fps30.frame_time() - 0.0333).abs() < 1e-3);
        assert!((FpsLimit::Fps60.frame_time() - 0.0167).abs() < 1e-3);
        assert!(FpsLimit::Fps30.frame_time() > FpsLimit::Fps60.frame_time());
    }
}
