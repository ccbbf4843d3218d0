//! Game state and core simulation types
//!
//! Everything a run needs lives in one `GameState`. A reset rebuilds it
//! wholesale rather than tearing pieces down.

use glam::Vec3;

use super::body::Body;
use super::clock::TickClock;
use super::command::Command;
use super::frame::OrientationFrame;
use super::input::InputQueue;
use super::spawn::ConsumableSpawner;
use crate::settings::Settings;

/// Outcome of an update or a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// No tick was due, or the snake is already dead
    NoOp,
    /// The snake moved one grid unit
    Advanced,
    /// The snake hit a wall or itself on this tick
    Died,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    /// Head reached the grid boundary
    Boundary,
    /// Head ran into a body segment
    SelfCollision,
}

/// Things that happened during a tick, for audio and menu collaborators
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    ConsumableEaten { position: Vec3 },
    Died { cause: DeathCause },
}

/// Head state captured at the start of a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSnapshot {
    pub frame: OrientationFrame,
    pub position: Vec3,
}

/// Complete game state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Tunables this run was created with
    pub settings: Settings,
    /// Seed for consumable placement
    pub seed: u64,
    /// Heading and roll of the head
    pub frame: OrientationFrame,
    /// Head position in grid units
    pub position: Vec3,
    /// Segments trailing the head
    pub body: Body,
    /// Ticks left during which the tail is not popped
    pub to_grow: u32,
    /// Consumable grid positions
    pub consumables: Vec<Vec3>,
    /// Completed ticks this run
    pub time_ticks: u64,
    pub(crate) snapshot: TickSnapshot,
    pub(crate) dead: Option<DeathCause>,
    pub(crate) input: InputQueue,
    pub(crate) clock: TickClock,
    pub(crate) spawner: ConsumableSpawner,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new run starting at `now_ms`
    pub fn new(settings: Settings, seed: u64, now_ms: f64) -> Self {
        let frame = OrientationFrame::default();
        let position = Vec3::ZERO;
        let mut state = Self {
            seed,
            frame,
            position,
            body: Body::straight(frame.direction, settings.initial_length),
            to_grow: settings.initial_growth,
            consumables: Vec::with_capacity(settings.initial_consumables),
            time_ticks: 0,
            snapshot: TickSnapshot { frame, position },
            dead: None,
            input: InputQueue::new(settings.input_mode),
            clock: TickClock::new(settings.snake_speed, now_ms, settings.tick_policy),
            spawner: ConsumableSpawner::new(
                seed,
                settings.spawn_extent,
                settings.max_spawn_attempts,
                settings.epsilon,
            ),
            events: Vec::new(),
            settings,
        };

        for _ in 0..state.settings.initial_consumables {
            state.spawn_consumable();
        }

        state
    }

    /// Start a fresh run with the same settings and the next seed
    pub fn reset(&mut self, now_ms: f64) {
        let seed = self.seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
        *self = Self::new(self.settings.clone(), seed, now_ms);
        log::info!("Game reset (seed {seed:#x})");
    }

    /// Queue a steering command for an upcoming tick
    pub fn push_command(&mut self, command: Command) -> bool {
        if self.is_dead() {
            return false;
        }
        self.input.push(command)
    }

    /// Advance the simulation to `now_ms`
    pub fn update(&mut self, now_ms: f64) -> TickResult {
        super::tick::update(self, now_ms)
    }

    /// Place one consumable at a free grid point, if any can be found
    pub fn spawn_consumable(&mut self) -> Option<Vec3> {
        let position = self.spawner.spawn(&self.body, self.position)?;
        self.consumables.push(position);
        Some(position)
    }

    pub fn is_dead(&self) -> bool {
        self.dead.is_some()
    }

    pub fn death_cause(&self) -> Option<DeathCause> {
        self.dead
    }

    /// Score is the body length
    pub fn score(&self) -> usize {
        self.body.len()
    }

    pub fn snapshot(&self) -> &TickSnapshot {
        &self.snapshot
    }

    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    pub fn pending_commands(&self) -> usize {
        self.input.len()
    }

    /// Absolute segment positions, nearest the head first
    pub fn body_positions(&self) -> Vec<Vec3> {
        self.body.positions(self.position).collect()
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
