//! Directional commands consumed by the simulation
//!
//! Commands are relative to the snake's current orientation frame, not to
//! world axes: `Left` always means "turn toward the snake's left".

use serde::{Deserialize, Serialize};

/// A single steering command, consumed at most once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Command {
    /// Yaw toward the snake's left
    Left,
    /// Yaw toward the snake's right
    Right,
    /// Pitch toward the snake's up vector
    Up,
    /// Pitch away from the snake's up vector
    Down,
    /// Roll so the old left becomes up
    RotateLeft,
    /// Roll so the old right becomes up
    RotateRight,
    /// Keep heading
    #[default]
    None,
}

impl Command {
    /// All steering commands (excludes `None`)
    pub const STEERING: [Command; 6] = [
        Command::Left,
        Command::Right,
        Command::Up,
        Command::Down,
        Command::RotateLeft,
        Command::RotateRight,
    ];

    /// The command that undoes this one when applied on the next tick
    pub fn inverse(self) -> Self {
        match self {
            Command::Left => Command::Right,
            Command::Right => Command::Left,
            Command::Up => Command::Down,
            Command::Down => Command::Up,
            Command::RotateLeft => Command::RotateRight,
            Command::RotateRight => Command::RotateLeft,
            Command::None => Command::None,
        }
    }

    pub fn is_none(self) -> bool {
        self == Command::None
    }
}
