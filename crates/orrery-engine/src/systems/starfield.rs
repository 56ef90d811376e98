//! Background starfield: points scattered uniformly in a cube around the
//! origin. Non-interactive backdrop, regenerated with fresh positions on
//! every scene rebuild.

use crate::systems::rng::Rng;

/// Default number of stars.
pub const STAR_COUNT: usize = 10_000;
/// Side length of the scatter cube, centered at the origin.
pub const STAR_SPREAD: f32 = 2000.0;
/// Point size forwarded to the host renderer.
pub const STAR_POINT_SIZE: f32 = 0.5;

/// Flat xyz position buffer for the star points.
pub struct Starfield {
    positions: Vec<f32>,
    count: usize,
    spread: f32,
}

impl Starfield {
    pub fn new(count: usize, spread: f32) -> Self {
        Self {
            positions: Vec::with_capacity(count * 3),
            count,
            spread,
        }
    }

    /// Scatter `count` fresh positions from the given seed, replacing any
    /// previous generation.
    pub fn regenerate(&mut self, seed: u64) {
        let mut rng = Rng::new(seed);
        self.positions.clear();
        for _ in 0..self.count {
            self.positions.push(rng.next_spread(self.spread));
            self.positions.push(rng.next_spread(self.spread));
            self.positions.push(rng.next_spread(self.spread));
        }
    }

    /// Drop all star positions. Part of scene teardown.
    pub fn clear(&mut self) {
        self.positions.clear();
    }

    /// Number of generated stars (0 before the first `regenerate`).
    pub fn star_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn positions_ptr(&self) -> *const f32 {
        self.positions.as_ptr()
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }
}
