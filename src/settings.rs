//! Game settings and preferences
//!
//! Consumed by the host's audio and HUD collaborators. The core does no
//! storage of its own; hosts persist the JSON wherever suits them.

use serde::{Deserialize, Serialize};

/// Host-facing preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute when the window loses focus
    pub mute_on_blur: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Accessibility ===
    /// Reduced motion (minimize flashes and shakes in the host renderer)
    pub reduced_motion: bool,
    /// High contrast mode
    pub high_contrast: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            mute_on_blur: true,
            show_fps: false,
            reduced_motion: false,
            high_contrast: false,
        }
    }
}

impl Settings {
    /// Effective cue volume for the audio collaborator
    pub fn effective_volume(&self) -> f32 {
        (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
    }

    /// Serialize for host-side storage.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse stored settings, falling back to defaults on any corruption.
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|err| {
            log::warn!("discarding unreadable settings: {err}");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut settings = Settings::default();
        settings.master_volume = 0.5;
        settings.show_fps = true;
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json), settings);
    }

    #[test]
    fn test_corrupt_json_falls_back_to_defaults() {
        assert_eq!(Settings::from_json("not json"), Settings::default());
    }

    #[test]
    fn test_effective_volume_is_clamped() {
        let mut settings = Settings::default();
        settings.master_volume = 2.0;
        settings.sfx_volume = 3.0;
        assert_eq!(settings.effective_volume(), 1.0);
    }
}
