//! Keyboard and touch mapping
//!
//! Event capture belongs to the platform layer. This module only turns the
//! raw values it hands over (key codes, swipe deltas) into commands.

use crate::sim::Command;

/// Key codes as reported by browser `keydown` events
pub mod keycode {
    pub const SPACE: u32 = 32;
    pub const ARROW_LEFT: u32 = 37;
    pub const ARROW_UP: u32 = 38;
    pub const ARROW_RIGHT: u32 = 39;
    pub const ARROW_DOWN: u32 = 40;
    pub const A: u32 = 65;
    pub const D: u32 = 68;
    pub const E: u32 = 69;
    pub const Q: u32 = 81;
    pub const S: u32 = 83;
    pub const W: u32 = 87;
}

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Steer(Command),
    /// Start a new run (only honoured on the death screen)
    Restart,
}

/// Pitch command for an "up" gesture, respecting the invert option
fn pitch(up: bool, invert_y: bool) -> Command {
    if up != invert_y {
        Command::Up
    } else {
        Command::Down
    }
}

/// Map a key code to an action; unknown keys map to nothing
pub fn map_key(code: u32, invert_y: bool) -> Option<ControlAction> {
    use keycode::*;

    let command = match code {
        A | ARROW_LEFT => Command::Left,
        D | ARROW_RIGHT => Command::Right,
        W | ARROW_UP => pitch(true, invert_y),
        S | ARROW_DOWN => pitch(false, invert_y),
        Q => Command::RotateLeft,
        E => Command::RotateRight,
        SPACE => return Some(ControlAction::Restart),
        _ => return None,
    };
    Some(ControlAction::Steer(command))
}

/// Map a character key (case-insensitive) to an action
pub fn map_char(c: char, invert_y: bool) -> Option<ControlAction> {
    if c == ' ' {
        return Some(ControlAction::Restart);
    }
    if !c.is_ascii_alphabetic() {
        return None;
    }
    map_key(c.to_ascii_uppercase() as u32, invert_y)
}

/// Map a swipe to a command.
///
/// `dx`/`dy` are start minus end in screen pixels, so positive `dx` is a
/// swipe to the left and positive `dy` a swipe upward. The dominant axis
/// wins; a zero-length swipe maps to nothing.
pub fn map_swipe(dx: f32, dy: f32, invert_y: bool) -> Option<Command> {
    if dx == 0.0 && dy == 0.0 {
        return None;
    }
    let command = if dx.abs() > dy.abs() {
        if dx > 0.0 { Command::Left } else { Command::Right }
    } else {
        pitch(dy > 0.0, invert_y)
    };
    Some(command)
}

/// Tracks a touch from start to first move, like a one-shot swipe detector
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start: Option<(f32, f32)>,
}

impl SwipeTracker {
    pub fn touch_start(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Returns a command for the first move after a start, then resets
    pub fn touch_move(&mut self, x: f32, y: f32, invert_y: bool) -> Option<Command> {
        let (x0, y0) = self.start.take()?;
        map_swipe(x0 - x, y0 - y, invert_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_and_arrows_agree() {
        for (letter, arrow) in [
            (keycode::A, keycode::ARROW_LEFT),
            (keycode::D, keycode::ARROW_RIGHT),
            (keycode::W, keycode::ARROW_UP),
            (keycode::S, keycode::ARROW_DOWN),
        ] {
            assert_eq!(map_key(letter, false), map_key(arrow, false));
            assert_eq!(map_key(letter, true), map_key(arrow, true));
        }
    }

    #[test]
    fn test_invert_y_swaps_pitch() {
        assert_eq!(map_key(keycode::W, false), Some(ControlAction::Steer(Command::Up)));
        assert_eq!(map_key(keycode::W, true), Some(ControlAction::Steer(Command::Down)));
        assert_eq!(map_key(keycode::S, true), Some(ControlAction::Steer(Command::Up)));
        // Roll and yaw are unaffected
        assert_eq!(map_key(keycode::Q, true), Some(ControlAction::Steer(Command::RotateLeft)));
        assert_eq!(map_key(keycode::D, true), Some(ControlAction::Steer(Command::Right)));
    }

    #[test]
    fn test_chars_and_unknown_keys() {
        assert_eq!(map_char('e', false), Some(ControlAction::Steer(Command::RotateRight)));
        assert_eq!(map_char(' ', false), Some(ControlAction::Restart));
        assert_eq!(map_char('z', false), None);
        assert_eq!(map_char('7', false), None);
        assert_eq!(map_key(13, false), None);
    }

    #[test]
    fn test_swipe_dominant_axis() {
        assert_eq!(map_swipe(50.0, 10.0, false), Some(Command::Left));
        assert_eq!(map_swipe(-50.0, 10.0, false), Some(Command::Right));
        assert_eq!(map_swipe(5.0, 40.0, false), Some(Command::Up));
        assert_eq!(map_swipe(5.0, -40.0, false), Some(Command::Down));
        assert_eq!(map_swipe(5.0, -40.0, true), Some(Command::Up));
        assert_eq!(map_swipe(0.0, 0.0, false), None);
    }

    #[test]
    fn test_swipe_tracker_fires_once() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.touch_move(0.0, 0.0, false), None);

        tracker.touch_start(100.0, 100.0);
        assert_eq!(tracker.touch_move(40.0, 95.0, false), Some(Command::Left));
        assert_eq!(tracker.touch_move(0.0, 95.0, false), None);
    }
}
