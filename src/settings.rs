//! Page preferences
//!
//! Persisted in LocalStorage next to the submissions.

use serde::{Deserialize, Serialize};

use crate::consts::{NARROW_SCREEN_WIDTH, PARTICLE_COUNT, SETTINGS_KEY, TYPEWRITER_SPEED_MS};
use crate::storage::{KeyValueStorage, StorageError, load_json, save_json};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Background ===
    /// Draw the particle background
    pub particles: bool,
    /// Particles on a regular screen (halved on narrow screens)
    pub particle_count: usize,
    /// Viewport width (px) at or below which the screen counts as narrow
    pub narrow_screen_width: f32,

    // === Hero ===
    /// Type the hero title out character by character
    pub typewriter: bool,
    /// Per-character typing interval (ms)
    pub typewriter_speed_ms: u32,

    // === Accessibility ===
    /// Reduced motion (no typing, instant score reveal)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            particles: true,
            particle_count: PARTICLE_COUNT,
            narrow_screen_width: NARROW_SCREEN_WIDTH,

            typewriter: true,
            typewriter_speed_ms: TYPEWRITER_SPEED_MS,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Particle count for a viewport `width` px wide
    pub fn particle_count_for(&self, width: f32) -> usize {
        if !self.particles {
            0
        } else if width <= self.narrow_screen_width {
            self.particle_count / 2
        } else {
            self.particle_count
        }
    }

    /// Effective typewriter (respects reduced_motion)
    pub fn effective_typewriter(&self) -> bool {
        self.typewriter && !self.reduced_motion
    }

    /// Effective score count-up animation (respects reduced_motion)
    pub fn effective_count_up(&self) -> bool {
        !self.reduced_motion
    }

    /// Load settings; absent or unparsable data gives the defaults
    pub fn load(storage: &impl KeyValueStorage) -> Self {
        match load_json(storage, SETTINGS_KEY) {
            Some(settings) => {
                log::info!("Loaded settings from LocalStorage");
                settings
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, storage: &mut impl KeyValueStorage) -> Result<(), StorageError> {
        save_json(storage, SETTINGS_KEY, self)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_particle_count_halved_on_narrow_screens() {
        let settings = Settings::default();
        assert_eq!(settings.particle_count_for(1280.0), 50);
        assert_eq!(settings.particle_count_for(768.0), 25);
        assert_eq!(settings.particle_count_for(375.0), 25);
    }

    #[test]
    fn test_particles_disabled() {
        let settings = Settings {
            particles: false,
            ..Default::default()
        };
        assert_eq!(settings.particle_count_for(1280.0), 0);
    }

    #[test]
    fn test_reduced_motion() {
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        assert!(!settings.effective_typewriter());
        assert!(!settings.effective_count_up());
    }

    #[test]
    fn test_save_load() {
        let mut storage = MemoryStorage::new();
        let settings = Settings {
            particle_count: 80,
            ..Default::default()
        };
        settings.save(&mut storage).unwrap();
        assert_eq!(Settings::load(&storage), settings);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let mut storage = MemoryStorage::new();
        storage.set(SETTINGS_KEY, r#"{"reduced_motion": true}"#).unwrap();
        let settings = Settings::load(&storage);
        assert!(settings.reduced_motion);
        assert_eq!(settings.particle_count, PARTICLE_COUNT);
    }

    #[test]
    fn test_corrupt_settings_fall_back() {
        let mut storage = MemoryStorage::new();
        storage.set(SETTINGS_KEY, "][").unwrap();
        assert_eq!(Settings::load(&storage), Settings::default());
    }
}
