//! Whole-second preparation countdown

/// Counts down from `total_secs`, one whole second at a time
#[derive(Debug, Clone, PartialEq)]
pub struct Countdown {
    total_secs: u32,
    elapsed: f64,
}

impl Countdown {
    pub fn new(total_secs: u32) -> Self {
        Self {
            total_secs,
            elapsed: 0.0,
        }
    }

    /// Advance by `secs` of wall time (negative values are ignored).
    /// Returns true on the call that runs the timer out.
    pub fn advance(&mut self, secs: f64) -> bool {
        let was_expired = self.is_expired();
        self.elapsed += secs.max(0.0);
        let expired = self.is_expired();
        if expired && !was_expired {
            log::info!("Preparation time is up");
        }
        expired && !was_expired
    }

    /// Seconds left as shown on screen
    pub fn remaining_secs(&self) -> u32 {
        let whole = self.elapsed.floor().min(self.total_secs as f64) as u32;
        self.total_secs - whole
    }

    /// Fraction of time remaining, 1.0 at start
    pub fn progress(&self) -> f32 {
        if self.total_secs == 0 {
            return 0.0;
        }
        self.remaining_secs() as f32 / self.total_secs as f32
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_secs() == 0
    }

    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_whole_seconds() {
        let mut c = Countdown::new(60);
        assert_eq!(c.remaining_secs(), 60);
        assert_eq!(c.progress(), 1.0);
        c.advance(0.9);
        assert_eq!(c.remaining_secs(), 60);
        c.advance(0.2);
        assert_eq!(c.remaining_secs(), 59);
    }

    #[test]
    fn test_expiry_reported_once() {
        let mut c = Countdown::new(60);
        assert!(!c.advance(59.5));
        assert!(c.advance(0.5));
        assert!(c.is_expired());
        assert!(!c.advance(10.0));
        assert_eq!(c.remaining_secs(), 0);
        assert_eq!(c.progress(), 0.0);
    }

    #[test]
    fn test_negative_advance_ignored() {
        let mut c = Countdown::new(60);
        c.advance(5.0);
        c.advance(-100.0);
        assert_eq!(c.remaining_secs(), 55);
    }

    #[test]
    fn test_restart() {
        let mut c = Countdown::new(3);
        c.advance(3.0);
        c.restart();
        assert_eq!(c.remaining_secs(), 3);
        assert!(!c.is_expired());
    }
}
