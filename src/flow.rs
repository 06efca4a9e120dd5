//! Screen flow
//!
//! Landing → Preparation → Complex → Caught → Landing, with a TimeUp detour
//! when the player fails to pack in time. Requests that make no sense on the
//! current screen are ignored and return false.

use serde::Serialize;

use crate::prep::{Loadout, Preparation, ToggleOutcome};

/// Landing page copy
pub mod story {
    pub const TITLE: &str = "Shadows of Silence";
    pub const PREMISE: [&str; 3] = [
        "You play as Victor, a former employee of a Cold War era research complex, \
         who returns there searching for his missing daughter.",
        "After a failed experiment something broke loose, turning the complex \
         into a deadly place filled with strange shadows.",
        "Can you survive and find your daughter while avoiding the Shadow?",
    ];
    pub const BEGIN: &str = "Begin the story";
    pub const TIME_UP: &str = "Time's up! You did not pack in time. In a crisis you must act quickly and decisively.";
    pub const CAUGHT: &str = "The Shadow caught you.";
    pub const FOOTER: &str = "3D stealth horror with survival elements";
}

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Screen {
    #[default]
    Landing,
    Preparation,
    /// Preparation countdown ran out
    TimeUp,
    /// The chase corridor
    Complex,
    /// Chase ended with a catch
    Caught,
}

/// Top-level game flow between screens
#[derive(Debug, Clone, Default)]
pub struct GameFlow {
    screen: Screen,
    preparation: Preparation,
    /// Loadout carried into the complex
    carried: Loadout,
}

impl GameFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn preparation(&self) -> &Preparation {
        &self.preparation
    }

    pub fn carried(&self) -> &Loadout {
        &self.carried
    }

    fn go(&mut self, to: Screen) {
        log::info!("Screen {:?} -> {:?}", self.screen, to);
        self.screen = to;
    }

    /// Landing "begin story" button
    pub fn begin_story(&mut self) -> bool {
        if self.screen != Screen::Landing {
            return false;
        }
        self.preparation = Preparation::new();
        self.go(Screen::Preparation);
        true
    }

    /// Wall-clock time passing on the preparation screen
    pub fn advance_time(&mut self, secs: f64) {
        if self.screen == Screen::Preparation && self.preparation.countdown.advance(secs) {
            self.go(Screen::TimeUp);
        }
    }

    pub fn toggle_item(&mut self, id: &str) -> ToggleOutcome {
        match self.screen {
            Screen::Preparation => self.preparation.toggle(id),
            Screen::TimeUp => ToggleOutcome::TimeUp,
            _ => ToggleOutcome::Closed,
        }
    }

    /// "Head to the complex"
    pub fn depart(&mut self) -> bool {
        if self.screen != Screen::Preparation || !self.preparation.can_depart() {
            return false;
        }
        self.carried = self.preparation.loadout.clone();
        log::info!("Departing with {:?}", self.carried.items());
        self.go(Screen::Complex);
        true
    }

    /// "Try again" after the countdown ran out
    pub fn retry(&mut self) -> bool {
        if self.screen != Screen::TimeUp {
            return false;
        }
        self.preparation.restart();
        self.go(Screen::Preparation);
        true
    }

    /// The chase session reported a catch
    pub fn on_caught(&mut self) -> bool {
        if self.screen != Screen::Complex {
            return false;
        }
        self.go(Screen::Caught);
        true
    }

    /// Dismiss the caught message and go back to the start
    pub fn acknowledge(&mut self) -> bool {
        if self.screen != Screen::Caught {
            return false;
        }
        self.carried.clear();
        self.go(Screen::Landing);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_loop() {
        let mut flow = GameFlow::new();
        assert_eq!(flow.screen(), Screen::Landing);
        assert!(flow.begin_story());
        assert_eq!(flow.screen(), Screen::Preparation);

        assert!(!flow.depart());
        assert_eq!(flow.toggle_item("flashlight"), ToggleOutcome::Added);
        flow.advance_time(10.0);
        assert!(flow.depart());
        assert_eq!(flow.screen(), Screen::Complex);
        assert_eq!(flow.carried().items(), ["flashlight"]);

        assert!(flow.on_caught());
        assert_eq!(flow.screen(), Screen::Caught);
        assert!(flow.acknowledge());
        assert_eq!(flow.screen(), Screen::Landing);
        assert!(flow.carried().is_empty());
    }

    #[test]
    fn test_timeout_and_retry() {
        let mut flow = GameFlow::new();
        flow.begin_story();
        flow.toggle_item("radio");
        flow.advance_time(60.0);
        assert_eq!(flow.screen(), Screen::TimeUp);
        assert!(!flow.depart());
        assert_eq!(flow.toggle_item("food"), ToggleOutcome::TimeUp);

        assert!(flow.retry());
        assert_eq!(flow.screen(), Screen::Preparation);
        assert!(flow.preparation().loadout.is_empty());
        assert_eq!(flow.preparation().countdown.remaining_secs(), 60);
    }

    #[test]
    fn test_out_of_order_requests_ignored() {
        let mut flow = GameFlow::new();
        assert!(!flow.retry());
        assert!(!flow.on_caught());
        assert!(!flow.acknowledge());
        assert!(!flow.depart());
        assert_eq!(flow.screen(), Screen::Landing);

        flow.begin_story();
        assert!(!flow.begin_story());
    }

    #[test]
    fn test_toggle_off_preparation_is_closed() {
        let mut flow = GameFlow::new();
        assert_eq!(flow.toggle_item("flashlight"), ToggleOutcome::Closed);

        flow.begin_story();
        flow.toggle_item("flashlight");
        assert!(flow.depart());
        assert_eq!(flow.toggle_item("medkit"), ToggleOutcome::Closed);
        flow.on_caught();
        assert_eq!(flow.toggle_item("medkit"), ToggleOutcome::Closed);
        assert_eq!(flow.carried().items(), ["flashlight"]);
    }

    #[test]
    fn test_time_only_runs_on_preparation() {
        let mut flow = GameFlow::new();
        flow.advance_time(100.0);
        assert_eq!(flow.screen(), Screen::Landing);
        flow.begin_story();
        assert_eq!(flow.preparation().countdown.remaining_secs(), 60);
    }
}
