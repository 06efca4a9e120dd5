//! Preparation phase
//!
//! Before entering the complex the player has a fixed time to pack a small
//! loadout from the apartment.

pub mod catalog;
pub mod countdown;
pub mod loadout;

pub use catalog::{CATALOG, Item, find_item};
pub use countdown::Countdown;
pub use loadout::{Loadout, ToggleOutcome};

/// Preparation screen state: timer plus selection
#[derive(Debug, Clone, PartialEq)]
pub struct Preparation {
    pub countdown: Countdown,
    pub loadout: Loadout,
}

impl Default for Preparation {
    fn default() -> Self {
        Self::new()
    }
}

impl Preparation {
    pub fn new() -> Self {
        Self {
            countdown: Countdown::new(crate::consts::PREPARATION_SECONDS),
            loadout: Loadout::new(),
        }
    }

    /// Toggle an item; rejected once time has run out
    pub fn toggle(&mut self, id: &str) -> ToggleOutcome {
        if self.countdown.is_expired() {
            return ToggleOutcome::TimeUp;
        }
        self.loadout.toggle(id)
    }

    /// Ready to leave: time remains and something is packed
    pub fn can_depart(&self) -> bool {
        !self.countdown.is_expired() && self.loadout.can_depart()
    }

    /// Try again after time ran out: full timer, empty bag
    pub fn restart(&mut self) {
        self.countdown.restart();
        self.loadout.clear();
        log::info!("Preparation restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_blocked_after_timeout() {
        let mut prep = Preparation::new();
        assert_eq!(prep.toggle("radio"), ToggleOutcome::Added);
        assert!(prep.can_depart());

        prep.countdown.advance(61.0);
        assert!(!prep.can_depart());
        assert_eq!(prep.toggle("medkit"), ToggleOutcome::TimeUp);
        assert_eq!(prep.loadout.len(), 1);
    }

    #[test]
    fn test_restart_clears_everything() {
        let mut prep = Preparation::new();
        prep.toggle("radio");
        prep.countdown.advance(60.0);
        prep.restart();
        assert!(prep.loadout.is_empty());
        assert_eq!(prep.countdown.remaining_secs(), 60);
        assert!(!prep.countdown.is_expired());
    }
}
