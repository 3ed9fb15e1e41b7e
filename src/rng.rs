// ----------------------------- tiny RNG (no external crate) -----------------------------

/// Deterministic xorshift32 RNG for lightweight randomness.
/// Drives walker directions and the Perlin lattice.
#[derive(Debug, Clone)]
pub struct Rng32 { state: u32 }

impl Rng32 {
    pub fn from_seed(seed: u32) -> Self { Self { state: seed | 1 } }

    /// Seed from the wall clock; used by the interactive sketches.
    pub fn from_time() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
            .unwrap_or(0xC0FFEE);
        Self::from_seed(nanos)
    }

    #[inline] pub fn next_u32(&mut self) -> u32 {
        // Xorshift—fast and good enough for visual noise
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform [0,1)
    #[inline] pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / ((1u32 << 24) as f32)
    }

    /// Uniform in 0..n. The high bits are used; xorshift low bits are weaker.
    #[inline] pub fn below(&mut self, n: u32) -> u32 {
        ((self.next_u32() as u64 * n as u64) >> 32) as u32
    }
}
