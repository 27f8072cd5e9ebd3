//! # Jitter Source
//!
//! A 16-bit xorshift generator with the shift triple (7, 9, 8). It is tiny,
//! fast on 8-bit targets and, for this triple, visits all 65535 non-zero states
//! before repeating.
//!
//! Zero is a fixed point of any xorshift (0 stays 0 forever), so the generator
//! can only be seeded with a [`NonZeroU16`]. From a non-zero state the
//! transition never produces zero.

use core::num::NonZeroU16;

/// Seed used when nothing else is configured.
pub const DEFAULT_SEED: u16 = 1;

/// Deterministic 16-bit noise source that drives all jitter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XorShift16 {
    state: u16,
}

impl XorShift16 {
    pub const fn new(seed: NonZeroU16) -> Self {
        Self { state: seed.get() }
    }

    /// Advance the generator and return the new state.
    ///
    /// # Example
    /// ```
    /// use sketch_clock_lib::prng::XorShift16;
    ///
    /// let mut prng = XorShift16::default();
    /// assert_eq!(prng.next(), 33153);
    /// assert_eq!(prng.next(), 24609);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u16 {
        let mut s = self.state;
        s ^= s << 7;
        s ^= s >> 9;
        s ^= s << 8;
        self.state = s;
        s
    }

    pub fn state(&self) -> u16 {
        self.state
    }
}

impl Default for XorShift16 {
    fn default() -> Self {
        Self { state: DEFAULT_SEED }
    }
}

/// Pull a value in {-1, 0, +1} out of `bits` starting at bit `shift`.
///
/// All jitter on the face is derived this way, several offsets per draw.
pub fn jitter(bits: u16, shift: u32) -> i8 {
    ((bits >> shift) % 3) as i8 - 1
}
