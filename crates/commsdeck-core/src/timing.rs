//! Session clock seam and countdown formatting.

use std::time::{Duration, Instant};

/// Clock the console reads when rendering the evacuation countdown.
///
/// Timestamps are durations since session start, matching the server's
/// notion of game time. The model reads the clock on every countdown
/// refresh and never caches it.
pub trait GameClock {
    /// Current game time.
    fn current_time(&self) -> Duration;
}

/// Wall-clock implementation measured from process start.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose zero point is now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl GameClock for SystemClock {
    fn current_time(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Test clock that always reports the same time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Duration);

impl GameClock for FixedClock {
    fn current_time(&self) -> Duration {
        self.0
    }
}

/// Format a duration as `HH:MM:SS`.
///
/// Hours are not wrapped at 24; sub-second precision is truncated.
pub fn format_hms(d: Duration) -> String {
    let total = d.as_secs();
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_hms_zero() {
        assert_eq!(format_hms(Duration::ZERO), "00:00:00");
    }

    #[test]
    fn format_hms_does_not_wrap_hours() {
        assert_eq!(format_hms(Duration::from_secs(26 * 3600 + 61)), "26:01:01");
    }
}
