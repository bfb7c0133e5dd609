//! RNG module - seeded mulberry32 generator
//!
//! Board content is driven by one continuous stream of floats in `[0, 1)`.
//! The stream comes from a mulberry32 generator seeded with the hashed seed,
//! so a seed reproduces the same draws bit-for-bit on every platform.
//!
//! Every generation step takes the stream as `&mut impl BoardRng`, which keeps
//! the draw order explicit and lets tests script the stream.

/// Source of uniform floats in `[0, 1)` for board generation.
pub trait BoardRng {
    /// Advance and return the next float in `[0, 1)`
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..len`
    fn next_index(&mut self, len: usize) -> usize {
        (self.next_f64() * len as f64) as usize
    }

    /// Shuffle a slice using Fisher-Yates
    ///
    /// Walks from the last index down to 1 and swaps with a random index at or
    /// below it. Slices shorter than two elements consume no draws.
    fn shuffle<T>(&mut self, slice: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..slice.len()).rev() {
            let j = self.next_index(i + 1);
            slice.swap(i, j);
        }
    }
}

/// mulberry32 generator
///
/// State is a single `u32`; all arithmetic wraps at 32 bits.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    const INCREMENT: u32 = 0x6D2B_79F5;

    /// Create a new RNG with the given state. Zero is a valid state.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Create a generator from a seed string
    pub fn from_seed(seed: &str) -> Self {
        Self::new(crate::hash::hash_seed(seed))
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Current state (for replaying a stream from a known point)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl BoardRng for Mulberry32 {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}
