//! Real-time tick pacing.
//!
//! The simulation itself never sleeps; the driver calls [`Pacer::wait`]
//! between ticks when it wants wall-clock pacing.

use std::time::{Duration, Instant};

/// Sleeps the calling thread so ticks land on a fixed wall-clock cadence.
pub struct Pacer {
    tick_duration: Duration,
    next_tick_time: Instant,
}

impl Pacer {
    /// Pacer for ticks of `dt` seconds. Non-positive `dt` disables sleeping.
    pub fn from_dt(dt: f32) -> Self {
        let tick_duration = if dt.is_finite() && dt > 0.0 {
            Duration::from_secs_f32(dt)
        } else {
            Duration::ZERO
        };
        Self {
            tick_duration,
            next_tick_time: Instant::now(),
        }
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    /// Sleep until the next tick is due.
    pub fn wait(&mut self) {
        self.next_tick_time += self.tick_duration;
        let now = Instant::now();
        if self.next_tick_time > now {
            std::thread::sleep(self.next_tick_time - now);
        } else if now - self.next_tick_time > self.tick_duration * 2 {
            // Too far behind: reset to avoid a catch-up spiral
            self.next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration_from_dt() {
        let pacer = Pacer::from_dt(0.016);
        assert_eq!(pacer.tick_duration().as_millis(), 16);
        assert_eq!(Pacer::from_dt(0.0).tick_duration(), Duration::ZERO);
        assert_eq!(Pacer::from_dt(f32::NAN).tick_duration(), Duration::ZERO);
    }

    #[test]
    fn test_wait_paces_ticks() {
        let mut pacer = Pacer::from_dt(0.005);
        let start = Instant::now();
        for _ in 0..4 {
            pacer.wait();
        }
        assert!(
            start.elapsed() >= Duration::from_millis(18),
            "4 ticks of 5ms took only {:?}",
            start.elapsed()
        );
    }

    #[test]
    fn test_falling_behind_resets_schedule() {
        let mut pacer = Pacer::from_dt(0.001);
        std::thread::sleep(Duration::from_millis(20));
        pacer.wait();
        // After the reset the next wait sleeps about one tick, not zero ticks forever.
        let before = Instant::now();
        pacer.wait();
        assert!(before.elapsed() < Duration::from_millis(20));
    }
}
