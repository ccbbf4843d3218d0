//! Frame-by-frame game driver
//!
//! The outer loop (browser animation frame or a native sleep loop) calls
//! `Session::frame` once per iteration. Each call runs the simulation update
//! and then samples the cameras, so a renderer never sees state mid-update.

use glam::Vec3;

use crate::camera::{CameraPair, CameraRig};
use crate::controls::{self, ControlAction, SwipeTracker};
use crate::settings::{Settings, SettingsError, SnakeColor};
use crate::sim::{Command, GameEvent, GameState, TickResult};

/// Read-only view of one frame, handed to the renderer and HUD
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    pub cameras: CameraPair,
    /// Head position (reverted to the last safe cell after death)
    pub head: Vec3,
    /// Absolute body segment positions, nearest the head first
    pub body: Vec<Vec3>,
    pub consumables: Vec<Vec3>,
    pub dead: bool,
    pub score: usize,
    /// Outcome of this frame's update
    pub result: TickResult,
    /// Events raised during this frame's update
    pub events: Vec<GameEvent>,
}

/// A running game: simulation, camera rig and input plumbing
#[derive(Debug, Clone)]
pub struct Session {
    settings: Settings,
    state: GameState,
    rig: CameraRig,
    swipe: SwipeTracker,
}

impl Session {
    pub fn new(settings: Settings, seed: u64, now_ms: f64) -> Self {
        log::info!(
            "Starting session: speed {} ticks/s, grid ±{}, seed {:#x}",
            settings.snake_speed,
            settings.grid_size,
            seed
        );
        Self {
            rig: CameraRig::from_settings(&settings),
            state: GameState::new(settings.clone(), seed, now_ms),
            settings,
            swipe: SwipeTracker::default(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Options-menu toggle; takes effect on the next key or swipe
    pub fn set_invert_y(&mut self, invert_y: bool) {
        self.settings.invert_y = invert_y;
    }

    pub fn set_music_enabled(&mut self, enabled: bool) {
        self.settings.music_enabled = enabled;
    }

    /// Change the body color; the settings keep the previous color on error
    pub fn set_snake_color(&mut self, hex: &str) -> Result<SnakeColor, SettingsError> {
        let color = SnakeColor::parse(hex)?;
        self.settings.snake_color = hex.trim().trim_start_matches('#').to_string();
        Ok(color)
    }

    /// Options-menu "reset": restore preferences, keep the running game
    pub fn reset_options(&mut self) {
        self.settings.reset_options();
        log::info!("Options reset to defaults");
    }

    pub fn push_command(&mut self, command: Command) -> bool {
        self.state.push_command(command)
    }

    /// Handle a key code; returns the action it mapped to, if any
    pub fn handle_key(&mut self, code: u32, now_ms: f64) -> Option<ControlAction> {
        let action = controls::map_key(code, self.settings.invert_y)?;
        self.apply(action, now_ms);
        Some(action)
    }

    /// Handle a character key; returns the action it mapped to, if any
    pub fn handle_char(&mut self, c: char, now_ms: f64) -> Option<ControlAction> {
        let action = controls::map_char(c, self.settings.invert_y)?;
        self.apply(action, now_ms);
        Some(action)
    }

    pub fn touch_start(&mut self, x: f32, y: f32) {
        self.swipe.touch_start(x, y);
    }

    pub fn touch_move(&mut self, x: f32, y: f32) -> Option<Command> {
        let command = self.swipe.touch_move(x, y, self.settings.invert_y)?;
        self.push_command(command);
        Some(command)
    }

    fn apply(&mut self, action: ControlAction, now_ms: f64) {
        match action {
            ControlAction::Steer(command) => {
                self.push_command(command);
            }
            ControlAction::Restart => {
                if self.state.is_dead() {
                    self.restart(now_ms);
                }
            }
        }
    }

    /// Throw away the current run and start a new one
    pub fn restart(&mut self, now_ms: f64) {
        self.state.settings = self.settings.clone();
        self.state.reset(now_ms);
    }

    /// Update the simulation to `now_ms` and sample the result
    pub fn frame(&mut self, now_ms: f64) -> FrameSnapshot {
        let result = self.state.update(now_ms);
        FrameSnapshot {
            cameras: self.rig.sample(&self.state, now_ms),
            head: self.state.position,
            body: self.state.body_positions(),
            consumables: self.state.consumables.clone(),
            dead: self.state.is_dead(),
            score: self.state.score(),
            result,
            events: self.state.drain_events(),
        }
    }
}
