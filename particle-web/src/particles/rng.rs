//! Small xorshift random source for particle placement

/// Fallback state; xorshift never leaves 0
const NONZERO_SEED: u32 = 0xDEAD_BEEF;

/// xorshift32 generator. State advances on every draw, so two generations
/// of the same template never repeat.
#[derive(Clone, Debug)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { NONZERO_SEED } else { seed },
        }
    }

    /// Seed from a millisecond timestamp (e.g. `Date.now()`)
    pub fn from_timestamp(millis: f64) -> Self {
        let bits = millis.to_bits();
        Self::new((bits ^ (bits >> 32)) as u32)
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() & 0x7F_FFFF) as f32 / 0x80_0000 as f32
    }

    /// Uniform in [lo, hi)
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_f32() * (hi - lo)
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new(NONZERO_SEED)
    }
}
