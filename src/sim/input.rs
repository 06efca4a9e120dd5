//! Held-action input sampling
//!
//! Keyboard and touch handlers write into `InputState`; the tick copies it
//! once at its top and never sees a half-applied update.

use serde::{Deserialize, Serialize};

/// Logical movement actions, independent of the input device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
}

const ACTION_COUNT: usize = 4;

impl Action {
    pub const ALL: [Action; ACTION_COUNT] = [
        Action::Forward,
        Action::Backward,
        Action::TurnLeft,
        Action::TurnRight,
    ];

    const fn index(self) -> usize {
        match self {
            Action::Forward => 0,
            Action::Backward => 1,
            Action::TurnLeft => 2,
            Action::TurnRight => 3,
        }
    }

    /// Wire name used by touch buttons (`data-action`) and scripted input
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Forward => "forward",
            Action::Backward => "backward",
            Action::TurnLeft => "turnLeft",
            Action::TurnRight => "turnRight",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Action::ALL.into_iter().find(|a| a.as_str() == name)
    }

    /// Map a `KeyboardEvent.key` value: WASD and the arrow keys
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Action::Forward),
            "ArrowDown" => Some(Action::Backward),
            "ArrowLeft" => Some(Action::TurnLeft),
            "ArrowRight" => Some(Action::TurnRight),
            _ => match key.to_ascii_lowercase().as_str() {
                "w" => Some(Action::Forward),
                "s" => Some(Action::Backward),
                "a" => Some(Action::TurnLeft),
                "d" => Some(Action::TurnRight),
                _ => None,
            },
        }
    }
}

/// Currently held actions (last write wins)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    held: [bool; ACTION_COUNT],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, action: Action, held: bool) {
        self.held[action.index()] = held;
    }

    /// Set by name; unknown names are ignored
    pub fn set_action(&mut self, name: &str, held: bool) {
        match Action::from_name(name) {
            Some(action) => self.set(action, held),
            None => log::debug!("Ignoring unknown action `{}`", name),
        }
    }

    /// Apply a key press/release; returns whether the key is bound
    pub fn handle_key(&mut self, key: &str, held: bool) -> bool {
        match Action::from_key(key) {
            Some(action) => {
                self.set(action, held);
                true
            }
            None => false,
        }
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held[action.index()]
    }

    pub fn any_held(&self) -> bool {
        self.held.iter().any(|&h| h)
    }

    /// Drop every held action (focus loss, session reset)
    pub fn release_all(&mut self) {
        self.held = [false; ACTION_COUNT];
    }

    /// Copy taken at the top of a tick
    pub fn snapshot(&self) -> InputState {
        *self
    }
}
