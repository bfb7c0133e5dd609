//! Seed hashing
//!
//! Turns an arbitrary seed string into the 32-bit PRNG state. The hash runs over
//! UTF-16 code units so that a seed shared as a link reproduces the same board
//! wherever it was created.

/// Rolling `hash * 31 + unit` over the seed's UTF-16 code units.
///
/// Arithmetic wraps as signed 32-bit at every step; the final value is
/// reinterpreted as unsigned. Total for every input, the empty string hashes to 0.
///
/// # Examples
///
/// ```
/// use speech_bingo_core::hash_seed;
///
/// assert_eq!(hash_seed(""), 0);
/// assert_eq!(hash_seed("abc"), 96354);
/// ```
pub fn hash_seed(seed: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in seed.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    hash as u32
}
