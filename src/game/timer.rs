//! Round countdown

/// Length of a round in seconds
pub const ROUND_SECONDS: u32 = 60;

/// Counts whole seconds down from a fixed duration.
///
/// Elapsed time is supplied by the caller so the countdown never reads a
/// clock itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Countdown {
    duration: u32,
    started_at: f64,
}

impl Countdown {
    /// Start a countdown at `now` (seconds, any monotonic clock)
    pub fn start(duration: u32, now: f64) -> Self {
        Self { duration, started_at: now }
    }

    /// Seconds since the countdown started, clamped at zero
    pub fn elapsed(&self, now: f64) -> f64 {
        (now - self.started_at).max(0.0)
    }

    /// Whole seconds left: `max(0, duration - floor(elapsed))`
    pub fn remaining(&self, now: f64) -> u32 {
        let elapsed = self.elapsed(now).floor();
        if elapsed >= self.duration as f64 {
            0
        } else {
            self.duration - elapsed as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_truncates_to_whole_seconds() {
        let countdown = Countdown::start(ROUND_SECONDS, 10.0);
        assert_eq!(countdown.remaining(10.0), 60);
        assert_eq!(countdown.remaining(10.9), 60);
        assert_eq!(countdown.remaining(11.0), 59);
        assert_eq!(countdown.remaining(69.99), 1);
    }

    #[test]
    fn test_expires_at_exactly_sixty_seconds() {
        let countdown = Countdown::start(ROUND_SECONDS, 0.0);
        assert_eq!(countdown.remaining(59.999), 1);
        assert_eq!(countdown.remaining(60.0), 0);
        assert_eq!(countdown.remaining(500.0), 0);
    }

    #[test]
    fn test_remaining_never_increases() {
        let countdown = Countdown::start(ROUND_SECONDS, 0.0);
        let mut last = countdown.remaining(0.0);
        let mut now = 0.0;
        while now < 65.0 {
            let remaining = countdown.remaining(now);
            assert!(remaining <= last);
            last = remaining;
            now += 1.0 / 60.0;
        }
        assert_eq!(last, 0);
    }

    #[test]
    fn test_clock_before_start_counts_as_zero_elapsed() {
        let countdown = Countdown::start(ROUND_SECONDS, 5.0);
        assert_eq!(countdown.elapsed(4.0), 0.0);
        assert_eq!(countdown.remaining(4.0), 60);
    }
}
