//! Game settings and options
//!
//! Simulation tunables plus the options-menu preferences. Every field has a
//! default, so partial JSON files load cleanly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::sim::{InputMode, TickPolicy};

/// Errors raised while loading or validating settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read or write settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid snake color {0:?}, expected six hex digits")]
    InvalidColor(String),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Surface coefficients for the snake body, derived from its color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
}

/// An RGB color parsed from a hex string like "57BC57"
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnakeColor {
    pub rgb: [f32; 3],
}

impl SnakeColor {
    pub fn parse(hex: &str) -> Result<Self, SettingsError> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SettingsError::InvalidColor(hex.to_string()));
        }
        let mut rgb = [0.0; 3];
        for (i, channel) in rgb.iter_mut().enumerate() {
            let byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|_| SettingsError::InvalidColor(hex.to_string()))?;
            *channel = f32::from(byte) / 255.0;
        }
        Ok(Self { rgb })
    }

    /// Lighting coefficients: 20% ambient, 60% diffuse, 20% specular
    pub fn material(&self) -> Material {
        let scaled = |k: f32| self.rgb.map(|c| c * k);
        Material {
            ambient: scaled(0.2),
            diffuse: scaled(0.6),
            specular: scaled(0.2),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Simulation ===
    /// Ticks per second
    pub snake_speed: f32,
    /// Grid half-extent; reaching it on any axis is fatal
    pub grid_size: f32,
    /// Proximity tolerance for collisions, in grid units
    pub epsilon: f32,
    /// Growth ticks granted per consumable
    pub growth_reward: u32,
    /// Body segments at the start of a run
    pub initial_length: usize,
    /// Growth ticks pending at the start of a run
    pub initial_growth: u32,
    /// Consumables spawned on reset
    pub initial_consumables: usize,
    /// Consumables spawn within `-spawn_extent..=spawn_extent` on each axis
    pub spawn_extent: i32,
    /// Rejection-sampling attempts before a spawn is abandoned
    pub max_spawn_attempts: u32,
    pub input_mode: InputMode,
    pub tick_policy: TickPolicy,

    // === Camera ===
    /// How far behind the head the overview camera sits
    pub overview_distance: f32,
    /// How far above the head (along its up vector) the overview camera sits
    pub overview_lift: f32,

    // === Options menu ===
    /// Swap up/down controls
    pub invert_y: bool,
    pub music_enabled: bool,
    /// Body color as six hex digits
    pub snake_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            snake_speed: consts::SNAKE_SPEED,
            grid_size: consts::GRID_SIZE,
            epsilon: consts::EPSILON,
            growth_reward: consts::GROWTH_REWARD,
            initial_length: consts::INITIAL_LENGTH,
            initial_growth: consts::INITIAL_GROWTH,
            initial_consumables: consts::INITIAL_CONSUMABLES,
            spawn_extent: consts::SPAWN_EXTENT,
            max_spawn_attempts: consts::MAX_SPAWN_ATTEMPTS,
            input_mode: InputMode::default(),
            tick_policy: TickPolicy::default(),

            overview_distance: consts::OVERVIEW_DISTANCE,
            overview_lift: 0.0,

            invert_y: false,
            music_enabled: true,
            snake_color: consts::DEFAULT_SNAKE_COLOR.to_string(),
        }
    }
}

impl Settings {
    /// Restore the options-menu preferences, leaving tunables alone
    pub fn reset_options(&mut self) {
        let defaults = Self::default();
        self.invert_y = defaults.invert_y;
        self.music_enabled = defaults.music_enabled;
        self.snake_color = defaults.snake_color;
    }

    /// Check ranges that would otherwise make the simulation misbehave
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.snake_speed.is_finite() && self.snake_speed > 0.0) {
            return Err(SettingsError::Invalid {
                field: "snake_speed",
                reason: "must be a positive number",
            });
        }
        if !(self.grid_size.is_finite() && self.grid_size >= 1.0) {
            return Err(SettingsError::Invalid {
                field: "grid_size",
                reason: "must be at least 1",
            });
        }
        if !(self.epsilon > 0.0 && self.epsilon < 0.5) {
            return Err(SettingsError::Invalid {
                field: "epsilon",
                reason: "must lie strictly between 0 and 0.5",
            });
        }
        if self.spawn_extent < 0 || self.spawn_extent as f32 >= self.grid_size {
            return Err(SettingsError::Invalid {
                field: "spawn_extent",
                reason: "must be non-negative and inside the grid",
            });
        }
        if let InputMode::Queue { depth: 0 } = self.input_mode {
            return Err(SettingsError::Invalid {
                field: "input_mode",
                reason: "queue depth must be at least 1",
            });
        }
        self.color()?;
        Ok(())
    }

    pub fn color(&self) -> Result<SnakeColor, SettingsError> {
        SnakeColor::parse(&self.snake_color)
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings: {}", e);
                Self::default()
            }
        }
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved");
        Ok(())
    }
}
