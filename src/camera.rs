//! Cameras interpolated between simulation ticks
//!
//! The snake moves in whole grid steps a few times per second, but the
//! cameras glide: each sample lerps from the last tick snapshot toward the
//! live head state by the fraction of the tick interval that has elapsed.
//! When a tick fires, the new snapshot equals the state the previous
//! interpolation had just reached, so the output is continuous in time.

use glam::{Mat4, Vec3};

use crate::sim::{GameState, OrientationFrame};

/// A look-at camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub center: Vec3,
    pub up: Vec3,
    /// World-to-view transform built from eye/center/up
    pub view: Mat4,
}

impl Camera {
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        Self {
            eye,
            center,
            up,
            view: Mat4::look_at_rh(eye, center, up),
        }
    }

    /// Unit viewing direction
    pub fn forward(&self) -> Vec3 {
        (self.center - self.eye).normalize_or_zero()
    }
}

/// The two views rendered each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPair {
    /// First-person view from the head
    pub main: Camera,
    /// Trailing view used for the minimap
    pub overview: Camera,
}

/// Builds camera pairs from simulation state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    /// Distance behind the head along the interpolated direction
    pub overview_distance: f32,
    /// Height above the head along the interpolated up vector
    pub overview_lift: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            overview_distance: crate::consts::OVERVIEW_DISTANCE,
            overview_lift: 0.0,
        }
    }
}

impl CameraRig {
    pub fn from_settings(settings: &crate::Settings) -> Self {
        Self {
            overview_distance: settings.overview_distance,
            overview_lift: settings.overview_lift,
        }
    }

    /// Head frame and position interpolated to `now_ms`
    pub fn interpolate(state: &GameState, now_ms: f64) -> (OrientationFrame, Vec3) {
        let percent = state.clock().progress(now_ms);
        let from = state.snapshot();
        (
            from.frame.lerp(&state.frame, percent),
            from.position.lerp(state.position, percent),
        )
    }

    /// Sample both cameras at `now_ms`
    pub fn sample(&self, state: &GameState, now_ms: f64) -> CameraPair {
        let (frame, position) = Self::interpolate(state, now_ms);

        let main = Camera::look_at(position, position + frame.direction, frame.up);

        // Offset in the snake's own basis so the overview follows turns
        let eye = position - frame.direction * self.overview_distance
            + frame.up * self.overview_lift;
        let overview = Camera::look_at(eye, eye + frame.direction, frame.up);

        CameraPair { main, overview }
    }
}
