//! Player preferences
//!
//! Persisted in LocalStorage, separately from any tuning data.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Show on-screen movement buttons (touch devices)
    pub touch_controls: bool,
    /// Keep the player between the corridor walls
    pub confine_to_corridor: bool,
    /// Show positions and distance in the HUD
    pub show_debug_hud: bool,

    // === Accessibility ===
    /// Reduced motion (no shadow sway, steady light)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            touch_controls: true,
            confine_to_corridor: false,
            show_debug_hud: false,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "shadows_of_silence_settings";

    /// Parse settings, falling back to defaults on bad data
    pub fn from_json_or_default(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring stored settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Names accepted by [`Settings::toggle`], as used in the page markup
    pub const FLAGS: [&'static str; 4] = ["touch_controls", "confine_to_corridor", "show_debug_hud", "reduced_motion"];

    /// Flip a preference by name; returns the new value, or `None` for an unknown name
    pub fn toggle(&mut self, name: &str) -> Option<bool> {
        let flag = self.flag_mut(name)?;
        *flag = !*flag;
        log::info!("Setting `{}` is now {}", name, *flag);
        Some(*flag)
    }

    /// Current value of a named preference
    pub fn flag(&self, name: &str) -> Option<bool> {
        match name {
            "touch_controls" => Some(self.touch_controls),
            "confine_to_corridor" => Some(self.confine_to_corridor),
            "show_debug_hud" => Some(self.show_debug_hud),
            "reduced_motion" => Some(self.reduced_motion),
            _ => None,
        }
    }

    fn flag_mut(&mut self, name: &str) -> Option<&mut bool> {
        match name {
            "touch_controls" => Some(&mut self.touch_controls),
            "confine_to_corridor" => Some(&mut self.confine_to_corridor),
            "show_debug_hud" => Some(&mut self.show_debug_hud),
            "reduced_motion" => Some(&mut self.reduced_motion),
            _ => {
                log::debug!("Unknown setting `{}`", name);
                None
            }
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json_or_default(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::warn!("LocalStorage unavailable, settings not saved");
            return;
        };
        match self.to_json() {
            Ok(json) => {
                if storage.set_item(Self::STORAGE_KEY, &json).is_ok() {
                    log::info!("Settings saved");
                } else {
                    log::warn!("Failed to write settings");
                }
            }
            Err(e) => log::warn!("Failed to serialize settings: {}", e),
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
