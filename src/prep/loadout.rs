//! Items the player takes into the complex

use serde::{Deserialize, Serialize};

use super::catalog::find_item;
use crate::consts::MAX_LOADOUT_ITEMS;

/// Result of clicking an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Bag already holds the maximum
    Full,
    /// Id not in the catalog
    Unknown,
    /// Preparation time is over
    TimeUp,
    /// Not on the preparation screen
    Closed,
}

/// Ordered selection of catalog ids, at most `MAX_LOADOUT_ITEMS`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loadout {
    items: Vec<String>,
}

impl Loadout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove if packed, otherwise pack if there is room
    pub fn toggle(&mut self, id: &str) -> ToggleOutcome {
        if let Some(pos) = self.items.iter().position(|i| i == id) {
            self.items.remove(pos);
            return ToggleOutcome::Removed;
        }
        if find_item(id).is_none() {
            log::debug!("Ignoring unknown item `{}`", id);
            return ToggleOutcome::Unknown;
        }
        if self.items.len() >= MAX_LOADOUT_ITEMS {
            return ToggleOutcome::Full;
        }
        self.items.push(id.to_string());
        ToggleOutcome::Added
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i == id)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn remaining_slots(&self) -> usize {
        MAX_LOADOUT_ITEMS.saturating_sub(self.items.len())
    }

    /// At least one item packed
    pub fn can_depart(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_add_remove() {
        let mut l = Loadout::new();
        assert!(!l.can_depart());
        assert_eq!(l.toggle("flashlight"), ToggleOutcome::Added);
        assert!(l.contains("flashlight"));
        assert_eq!(l.remaining_slots(), 2);
        assert_eq!(l.toggle("flashlight"), ToggleOutcome::Removed);
        assert!(l.is_empty());
    }

    #[test]
    fn test_capacity_is_three() {
        let mut l = Loadout::new();
        for id in ["flashlight", "medkit", "radio"] {
            assert_eq!(l.toggle(id), ToggleOutcome::Added);
        }
        assert_eq!(l.toggle("photo"), ToggleOutcome::Full);
        assert_eq!(l.len(), 3);
        assert_eq!(l.remaining_slots(), 0);

        // Removing still works when full
        assert_eq!(l.toggle("medkit"), ToggleOutcome::Removed);
        assert_eq!(l.toggle("photo"), ToggleOutcome::Added);
        assert_eq!(l.items(), ["flashlight", "radio", "photo"]);
    }

    #[test]
    fn test_unknown_ids_rejected() {
        let mut l = Loadout::new();
        assert_eq!(l.toggle("crowbar"), ToggleOutcome::Unknown);
        assert!(l.is_empty());
    }
}
