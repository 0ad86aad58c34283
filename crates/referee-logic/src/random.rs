//! Seeded pseudo-random number generator
//!
//! Deterministic PRNG for reproducible opponent play.
//! Uses a simple but effective xorshift algorithm and plugs into `rand`
//! through `RngCore`, so anything generic over `rand::Rng` accepts it.

use rand::RngCore;

/// Seeded random number generator
///
/// Deterministic: same seed = same sequence, on every platform.
#[derive(Clone, Debug)]
pub struct SeededRng {
    seed: u64,
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 64-bit seed
    pub fn new(seed: u64) -> Self {
        // xorshift must never hold a zero state
        let state = seed.wrapping_mul(0x517cc1b727220a95) ^ 0x9e3779b97f4a7c15;
        let state = if state == 0 { 0x9e3779b97f4a7c15 } else { state };

        // Warm up the generator
        let mut rng = Self { seed, state };
        for _ in 0..8 {
            rng.step();
        }

        rng
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn step(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
