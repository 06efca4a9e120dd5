//! Frame clock
//!
//! Turns host frame timestamps (milliseconds) into simulation deltas.

/// Delta source for the chase loop
#[derive(Debug, Clone)]
pub struct GameClock {
    last_timestamp: Option<f64>,
    max_dt: f32,
}

impl GameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            last_timestamp: None,
            max_dt: max_dt.max(0.0),
        }
    }

    /// Seconds since the previous call, clamped to `[0, max_dt]`.
    /// The first call after creation or `reset` yields 0.
    pub fn tick(&mut self, timestamp_ms: f64) -> f32 {
        let dt = match self.last_timestamp {
            Some(last) => {
                let raw = (timestamp_ms - last) / 1000.0;
                if raw < 0.0 {
                    log::warn!("Frame timestamp went backwards by {:.1} ms", -raw * 1000.0);
                }
                (raw as f32).clamp(0.0, self.max_dt)
            }
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp_ms);
        dt
    }

    /// Forget the previous timestamp (new session, resume)
    pub fn reset(&mut self) {
        self.last_timestamp = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_zero() {
        let mut clock = GameClock::new(0.1);
        assert_eq!(clock.tick(123_456.0), 0.0);
    }

    #[test]
    fn test_regular_delta() {
        let mut clock = GameClock::new(0.1);
        clock.tick(1000.0);
        let dt = clock.tick(1016.0);
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_negative_delta_clamped() {
        let mut clock = GameClock::new(0.1);
        clock.tick(2000.0);
        assert_eq!(clock.tick(1500.0), 0.0);
        // The backwards stamp becomes the new reference
        let dt = clock.tick(1550.0);
        assert!((dt - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_large_delta_capped() {
        let mut clock = GameClock::new(0.1);
        clock.tick(0.0);
        assert_eq!(clock.tick(30_000.0), 0.1);
    }

    #[test]
    fn test_reset_forgets_previous() {
        let mut clock = GameClock::new(0.1);
        clock.tick(0.0);
        clock.reset();
        assert_eq!(clock.tick(50.0), 0.0);
    }
}
