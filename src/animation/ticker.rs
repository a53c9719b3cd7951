// src/animation/ticker.rs
//
// Fixed-period tick source driven by the frame loop.
// Frames arrive at whatever rate the window runs at; the ticker turns the
// elapsed frame time into a whole number of fixed-length ticks.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AnimationTicker {
    interval: Duration,
    frame_timer: Duration,
    running: bool,
}

impl AnimationTicker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            frame_timer: Duration::ZERO,
            running: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts ticking. Returns false if the ticker was already running,
    /// in which case its phase is left alone.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.frame_timer = Duration::ZERO;
        true
    }

    /// Stops ticking and drops any partially elapsed tick.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.frame_timer = Duration::ZERO;
        true
    }

    /// Feeds `dt` of elapsed time and returns the number of ticks that came due.
    pub fn poll(&mut self, dt: Duration) -> u32 {
        if !self.running {
            return 0;
        }
        self.frame_timer += dt;
        let interval = self.interval.as_nanos();
        let elapsed = self.frame_timer.as_nanos();
        self.frame_timer = Duration::from_nanos((elapsed % interval) as u64);
        u32::try_from(elapsed / interval).unwrap_or(u32::MAX)
    }
}

impl Default for AnimationTicker {
    fn default() -> Self {
        Self::new(Duration::from_millis(50))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_stopped_ticker_never_fires() {
        let mut ticker = AnimationTicker::default();
        assert!(!ticker.is_running());
        assert_eq!(ticker.poll(ms(500)), 0);
    }

    #[test]
    fn test_fires_once_per_interval() {
        let mut ticker = AnimationTicker::new(ms(50));
        assert!(ticker.start());
        assert_eq!(ticker.poll(ms(30)), 0);
        assert_eq!(ticker.poll(ms(30)), 1);
        assert_eq!(ticker.poll(ms(40)), 1);
        assert_eq!(ticker.poll(ms(160)), 3);
    }

    #[test]
    fn test_double_start_keeps_single_schedule() {
        let mut ticker = AnimationTicker::new(ms(50));
        assert!(ticker.start());
        assert_eq!(ticker.poll(ms(40)), 0);
        assert!(!ticker.start());
        // Phase was not reset by the second start
        assert_eq!(ticker.poll(ms(10)), 1);
        assert_eq!(ticker.poll(ms(100)), 2);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut ticker = AnimationTicker::new(ms(50));
        assert!(!ticker.stop());
        ticker.start();
        ticker.poll(ms(40));
        assert!(ticker.stop());
        assert!(!ticker.stop());
        assert_eq!(ticker.poll(ms(100)), 0);

        // Restarting begins a fresh interval
        ticker.start();
        assert_eq!(ticker.poll(ms(10)), 0);
        assert_eq!(ticker.poll(ms(40)), 1);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut ticker = AnimationTicker::new(Duration::ZERO);
        assert_eq!(ticker.interval(), ms(1));
        ticker.start();
        assert_eq!(ticker.poll(ms(5)), 5);
    }
}
