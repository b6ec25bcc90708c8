//! RNG module - uniform random spawns
//!
//! Each spawn independently picks one of the seven kinds uniformly and a
//! uniform column such that the piece fits within the board width. There is
//! no bag; consecutive repeats are allowed.
//!
//! A small LCG keeps games reproducible from a seed.

use crate::shape::Shape;
use crate::types::{PieceKind, BOARD_WIDTH};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Maps through the high bits; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Where and what to spawn next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub kind: PieceKind,
    pub x: i8,
}

/// Uniform random spawn generator
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: SimpleRng,
    seed: u32,
}

impl Spawner {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// Pick the next kind and a column in `[0, 10 - width]`
    pub fn next_spawn(&mut self) -> Spawn {
        let kind = PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize];
        let width = Shape::template(kind).cols() as u32;
        let columns = BOARD_WIDTH as u32 - width + 1;
        let x = self.rng.next_range(columns) as i8;
        Spawn { kind, x }
    }

    /// Seed this spawner was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new(1)
    }
}
