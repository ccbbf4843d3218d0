//! Input buffering between asynchronous events and the fixed tick
//!
//! Events can arrive at any rate; the simulation consumes at most one
//! command per tick. Excess input is dropped, never blocked on.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::command::Command;

/// Default number of pending commands in queue mode
pub const DEFAULT_QUEUE_DEPTH: usize = 2;

/// How pending commands are buffered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMode {
    /// FIFO holding at most `depth` commands; pushes beyond that are dropped
    Queue { depth: usize },
    /// Single slot; a newer command overwrites an unconsumed one
    LastCommand,
}

impl Default for InputMode {
    fn default() -> Self {
        InputMode::Queue {
            depth: DEFAULT_QUEUE_DEPTH,
        }
    }
}

/// Pending commands awaiting the next tick
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputQueue {
    mode: InputMode,
    pending: VecDeque<Command>,
}

impl InputQueue {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            pending: VecDeque::new(),
        }
    }

    /// Buffer a command. Returns false if it was dropped.
    ///
    /// `Command::None` carries no intent and is never buffered.
    pub fn push(&mut self, command: Command) -> bool {
        if command.is_none() {
            return false;
        }
        match self.mode {
            InputMode::Queue { depth } => {
                if self.pending.len() >= depth {
                    log::trace!("Input queue full, dropping {:?}", command);
                    return false;
                }
                self.pending.push_back(command);
            }
            InputMode::LastCommand => {
                self.pending.clear();
                self.pending.push_back(command);
            }
        }
        true
    }

    /// Take the oldest pending command, or `Command::None` if empty
    pub fn pop_for_tick(&mut self) -> Command {
        self.pending.pop_front().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
