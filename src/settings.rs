//! Game settings and preferences
//!
//! Persisted to LocalStorage on the web. The credit balance is
//! deliberately NOT part of this - it resets every session.

use serde::{Deserialize, Serialize};

/// Player preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Sound effects on/off
    pub sfx_enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Value pre-filled in the bet field
    pub default_bet: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sfx_enabled: true,
            master_volume: 0.8,
            default_bet: 1.0,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    pub const STORAGE_KEY: &'static str = "earth_slots_settings";

    /// Effective SFX volume after the mute switch.
    pub fn effective_volume(&self) -> f32 {
        if self.sfx_enabled {
            self.master_volume.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.sfx_enabled);
        assert_eq!(settings.default_bet, 1.0);
    }

    #[test]
    fn test_mute_zeroes_volume() {
        let mut settings = Settings::default();
        settings.sfx_enabled = false;
        assert_eq!(settings.effective_volume(), 0.0);
    }

    #[test]
    fn test_settings_roundtrip_json() {
        let settings = Settings { sfx_enabled: false, master_volume: 0.5, default_bet: 2.5 };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.master_volume, 0.5);
        assert_eq!(back.default_bet, 2.5);
        assert!(!back.sfx_enabled);
    }
}
