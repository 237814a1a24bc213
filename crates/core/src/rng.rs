//! RNG module - engine-owned deterministic random source
//!
//! Tile spawning is the only non-deterministic step of the game. It draws from
//! one generator owned by the engine, so a fixed seed replays the exact same
//! spawn sequence (tests, bug reports, benchmarks).

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            state: Self::sanitize(seed),
        }
    }

    // Avoid 0 seed which would produce a degenerate first step
    fn sanitize(seed: u32) -> u32 {
        if seed == 0 {
            1
        } else {
            seed
        }
    }

    /// Restart the sequence from `seed`
    pub fn reseed(&mut self, seed: u32) {
        self.state = Self::sanitize(seed);
    }

    /// Current internal state (feeding it to `new` continues the same sequence)
    pub fn state(&self) -> u32 {
        self.state
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
    /// Uses the high bits (multiply-shift); the low bits of an LCG have short
    /// periods. `max` must be non-zero.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0, "next_range called with max == 0");
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// True with probability `1 / n`
    pub fn one_in(&mut self, n: u32) -> bool {
        self.next_range(n) == 0
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
