//! Snake 3D - Snake on a cubic grid, seen from the snake's head
//!
//! Core modules:
//! - `sim`: Deterministic tick simulation (orientation frame, body, consumables)
//! - `camera`: Main and overview cameras interpolated between ticks
//! - `controls`: Keyboard and swipe mapping to steering commands
//! - `session`: Frame-by-frame driver tying simulation and cameras together
//! - `render`: GPU-ready view and instance data for the renderer
//! - `settings`: Tunables and options-menu preferences

pub mod camera;
pub mod controls;
pub mod render;
pub mod session;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use camera::{Camera, CameraPair, CameraRig};
pub use session::{FrameSnapshot, Session};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Ticks per second
    pub const SNAKE_SPEED: f32 = 3.5;
    /// Grid half-extent; the head dies on reaching it
    pub const GRID_SIZE: f32 = 20.0;
    /// Proximity tolerance in grid units
    pub const EPSILON: f32 = 0.1;

    /// Growth ticks granted per consumable
    pub const GROWTH_REWARD: u32 = 20;
    /// Body segments at the start of a run
    pub const INITIAL_LENGTH: usize = 1;
    /// Growth ticks pending at the start of a run
    pub const INITIAL_GROWTH: u32 = 20;

    /// Consumables on the field at the start of a run
    pub const INITIAL_CONSUMABLES: usize = 5;
    /// Consumables spawn within this many units of the origin on each axis
    pub const SPAWN_EXTENT: i32 = 10;
    pub const MAX_SPAWN_ATTEMPTS: u32 = 10_000;

    /// Overview camera distance behind the head
    pub const OVERVIEW_DISTANCE: f32 = 80.0;

    /// Polling interval of the outer game loop
    pub const FRAME_INTERVAL_MS: f64 = 30.0;

    pub const DEFAULT_SNAKE_COLOR: &str = "57BC57";
}
