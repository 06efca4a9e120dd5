//! Apartment items available during preparation

use serde::Serialize;

/// A packable item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Stable id used by the UI and the loadout
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Everything on offer, in display order
pub static CATALOG: [Item; 6] = [
    Item {
        id: "flashlight",
        name: "Flashlight",
        description: "Your only light in the dark of the complex. Batteries are limited.",
    },
    Item {
        id: "medkit",
        name: "Medkit",
        description: "Restores health when used.",
    },
    Item {
        id: "food",
        name: "Canned food",
        description: "Takes the edge off hunger and keeps you moving.",
    },
    Item {
        id: "radio",
        name: "Radio",
        description: "Picks up fragments of messages and distress signals that hold clues.",
    },
    Item {
        id: "wrench",
        name: "Wrench",
        description: "Opens locked doors and fixes broken machinery.",
    },
    Item {
        id: "photo",
        name: "Family photo",
        description: "A morale boost that keeps panic down.",
    },
];

/// Shown for ids that are not in the catalog
pub static UNKNOWN_ITEM: Item = Item {
    id: "unknown",
    name: "Unknown item",
    description: "No description.",
};

pub fn find_item(id: &str) -> Option<&'static Item> {
    CATALOG.iter().find(|item| item.id == id)
}

/// Lookup for display, never fails
pub fn item_or_unknown(id: &str) -> &'static Item {
    find_item(id).unwrap_or(&UNKNOWN_ITEM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(find_item("wrench").map(|i| i.name), Some("Wrench"));
        assert!(find_item("crowbar").is_none());
        assert_eq!(item_or_unknown("crowbar").name, "Unknown item");
    }
}
