//! Game settings and preferences
//!
//! Persisted in LocalStorage. Nothing here affects the simulation; these
//! only change what is drawn and which controls are shown.

use serde::{Deserialize, Serialize};

/// When to show the on-screen touch buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TouchControls {
    /// Show only on touch-capable devices
    #[default]
    Auto,
    Always,
    Never,
}

impl TouchControls {
    /// Resolve against the device's touch capability
    pub fn visible(&self, is_touch_device: bool) -> bool {
        match self {
            TouchControls::Auto => is_touch_device,
            TouchControls::Always => true,
            TouchControls::Never => false,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub touch_controls: TouchControls,

    // === Visual Effects ===
    /// Swinging arms and legs while running
    pub limb_animation: bool,
    /// Bubbles in the lava
    pub lava_bubbles: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Accessibility ===
    /// Reduced motion (disables limb animation)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            touch_controls: TouchControls::Auto,
            limb_animation: true,
            lava_bubbles: true,
            show_fps: false,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective limb animation (respects reduced_motion)
    pub fn effective_limb_animation(&self) -> bool {
        self.limb_animation && !self.reduced_motion
    }

    /// Flip a display preference bound to `key`
    ///
    /// Returns true if a setting changed and should be saved.
    pub fn apply_hotkey(&mut self, key: &str) -> bool {
        match key {
            "f" | "F" => self.show_fps = !self.show_fps,
            "b" | "B" => self.lava_bubbles = !self.lava_bubbles,
            "m" | "M" => self.reduced_motion = !self.reduced_motion,
            _ => return false,
        }
        true
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "lava_jumper_settings";

    /// Load settings from LocalStorage
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::warn!("LocalStorage unavailable, settings not saved");
            return;
        };
        match serde_json::to_string(self) {
            Ok(json) => match storage.set_item(Self::STORAGE_KEY, &json) {
                Ok(()) => log::info!("Settings saved"),
                Err(e) => log::warn!("Failed to save settings: {:?}", e),
            },
            Err(e) => log::warn!("Failed to serialize settings: {}", e),
        }
    }
}
