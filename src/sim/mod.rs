//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick interval only
//! - Seeded RNG only
//! - Caller-supplied timestamps, never a wall clock
//! - No rendering or platform dependencies

pub mod body;
pub mod clock;
pub mod command;
pub mod frame;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use body::Body;
pub use clock::{TickClock, TickPolicy};
pub use command::Command;
pub use frame::OrientationFrame;
pub use input::{InputMode, InputQueue};
pub use spawn::ConsumableSpawner;
pub use state::{DeathCause, GameEvent, GameState, TickResult, TickSnapshot};
pub use tick::{tick, update};
