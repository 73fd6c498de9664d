//! Motion configuration resource.
//!
//! Gravity defaults loaded from an INI configuration file. The gravity
//! values are inert: the motion model carries them but never applies them
//! in any update path. They exist so games that want to complete the
//! feature start from a configurable place.
//!
//! # Configuration File Format
//!
//! ```ini
//! [gravity]
//! constant = 0.2
//! direction = 180.0
//! enabled = true
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::motion::{
    DEFAULT_GRAVITY_CONSTANT, DEFAULT_GRAVITY_DIRECTION, MotionApplier,
};

const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Gravity defaults for freshly created motion states.
///
/// On startup, [`load_from_file`](Self::load_from_file) pulls overrides from
/// the configuration file; missing keys keep their defaults.
#[derive(Resource, Debug, Clone)]
pub struct MotionConfig {
    /// Gravitational constant seeded into new motion states.
    pub gravity_constant: f32,
    /// Gravitational direction in degrees.
    pub gravity_direction: f32,
    /// Whether gravitational pull starts enabled.
    pub gravity_enabled: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionConfig {
    /// Create a configuration with the built-in defaults.
    pub fn new() -> Self {
        Self {
            gravity_constant: DEFAULT_GRAVITY_CONSTANT,
            gravity_direction: DEFAULT_GRAVITY_DIRECTION,
            gravity_enabled: true,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [gravity] section
        if let Some(constant) = config.getfloat("gravity", "constant").ok().flatten() {
            self.gravity_constant = constant as f32;
        }
        if let Some(direction) = config.getfloat("gravity", "direction").ok().flatten() {
            self.gravity_direction = direction as f32;
        }
        if let Some(enabled) = config.getbool("gravity", "enabled").ok().flatten() {
            self.gravity_enabled = enabled;
        }

        info!(
            "Loaded motion config: gravity constant={}, direction={}, enabled={}",
            self.gravity_constant, self.gravity_direction, self.gravity_enabled
        );

        Ok(())
    }

    /// Seed a motion state with the configured gravity values.
    pub fn apply_to(&self, motion: &mut MotionApplier) {
        motion.set_gravity_constant(self.gravity_constant);
        motion.set_gravity_direction(self.gravity_direction);
        motion.set_gravity_enabled(self.gravity_enabled);
    }
}
