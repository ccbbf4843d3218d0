//! Consumable placement
//!
//! Candidates are drawn uniformly over the integer grid cube and rejected
//! while they land on the snake. Collisions are rare relative to the grid
//! volume, so the retry loop almost always exits on the first draw.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::Body;

/// Seeded spawner for consumables
#[derive(Debug, Clone)]
pub struct ConsumableSpawner {
    rng: Pcg32,
    /// Each axis is drawn from `-extent..=extent`
    extent: i32,
    max_attempts: u32,
    epsilon: f32,
}

impl ConsumableSpawner {
    pub fn new(seed: u64, extent: i32, max_attempts: u32, epsilon: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            extent: extent.max(0),
            max_attempts: max_attempts.max(1),
            epsilon,
        }
    }

    /// A uniformly random grid point, ignoring occupancy
    pub fn random_position(&mut self) -> Vec3 {
        // Symmetric about the origin; the browser game drew from -9..=10
        let range = -self.extent..=self.extent;
        Vec3::new(
            self.rng.random_range(range.clone()) as f32,
            self.rng.random_range(range.clone()) as f32,
            self.rng.random_range(range) as f32,
        )
    }

    /// Pick a free grid point for a new consumable.
    ///
    /// Returns `None` if every attempt landed on the snake, which only
    /// happens when the body fills most of the spawn cube.
    pub fn spawn(&mut self, body: &Body, head: Vec3) -> Option<Vec3> {
        for _ in 0..self.max_attempts {
            let candidate = self.random_position();
            if !body.occupies(head, candidate, self.epsilon) {
                return Some(candidate);
            }
        }
        log::warn!(
            "No free consumable position after {} attempts (body length {})",
            self.max_attempts,
            body.len()
        );
        None
    }
}
