//! Orientation frame of the snake's head
//!
//! The frame is the pair (direction, up). Together with the derived
//! `left = up × direction` it forms the snake's moving basis. Every command
//! is applied by swapping and negating these exact vectors, so the frame
//! stays orthonormal and axis-aligned with no floating-point drift.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::command::Command;

/// Heading and roll of the snake
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientationFrame {
    /// Unit heading; the head advances by this each tick
    pub direction: Vec3,
    /// Unit up vector, perpendicular to `direction`
    pub up: Vec3,
}

impl Default for OrientationFrame {
    fn default() -> Self {
        // Into the screen, with up pointing toward the viewer's top
        Self {
            direction: Vec3::Y,
            up: Vec3::NEG_Z,
        }
    }
}

impl OrientationFrame {
    pub fn new(direction: Vec3, up: Vec3) -> Self {
        Self { direction, up }
    }

    /// The snake's left. The world is treated as left-handed here, so this
    /// is `up × direction` rather than `direction × up`.
    #[inline]
    pub fn left(&self) -> Vec3 {
        self.up.cross(self.direction)
    }

    /// Return the frame after applying one command
    pub fn turned(&self, command: Command) -> Self {
        let left = self.left();
        match command {
            Command::Left => Self::new(left, self.up),
            Command::Right => Self::new(-left, self.up),
            Command::Up => Self::new(self.up, -self.direction),
            Command::Down => Self::new(-self.up, self.direction),
            Command::RotateLeft => Self::new(self.direction, left),
            Command::RotateRight => Self::new(self.direction, -left),
            Command::None => *self,
        }
    }

    /// Apply a command in place
    pub fn apply(&mut self, command: Command) {
        *self = self.turned(command);
    }

    /// Component-wise interpolation between two frames.
    ///
    /// The result is generally not unit length mid-turn; it is only meant
    /// for building cameras.
    pub fn lerp(&self, to: &Self, percent: f32) -> Self {
        Self {
            direction: self.direction.lerp(to.direction, percent),
            up: self.up.lerp(to.up, percent),
        }
    }

    /// Check unit length and perpendicularity within `tolerance`
    pub fn is_orthonormal(&self, tolerance: f32) -> bool {
        (self.direction.length() - 1.0).abs() <= tolerance
            && (self.up.length() - 1.0).abs() <= tolerance
            && self.direction.dot(self.up).abs() <= tolerance
    }
}
