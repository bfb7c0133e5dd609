//! Fresh seeds for new boards
//!
//! This is the one place real entropy enters: a new board gets a short random
//! identifier, and everything after that is derived from it deterministically.
//! Kept apart from [`crate::rng::BoardRng`] so tests can script seeds without
//! touching board generation.

use uuid::Uuid;

/// Length of a generated seed
pub const SEED_LEN: usize = 8;

/// Source of seed strings for new boards
pub trait SeedSource {
    fn next_seed(&mut self) -> String;
}

/// Seeds from the first eight hex digits of a random v4 UUID
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidSeedSource;

impl SeedSource for UuidSeedSource {
    fn next_seed(&mut self) -> String {
        random_seed()
    }
}

/// A fresh random seed, e.g. `"3f9a1c2e"`
pub fn random_seed() -> String {
    let mut seed = Uuid::new_v4().simple().to_string();
    seed.truncate(SEED_LEN);
    seed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_seed_shape() {
        let seed = random_seed();
        assert_eq!(seed.len(), SEED_LEN);
        assert!(seed.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_uuid_source_varies() {
        let mut source = UuidSeedSource;
        let seeds: Vec<String> = (0..16).map(|_| source.next_seed()).collect();
        let first = &seeds[0];
        assert!(seeds.iter().any(|s| s != first));
    }
}
