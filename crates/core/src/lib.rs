//! Board generation core - pure, deterministic, and testable
//!
//! This crate contains the bingo board rules: seed hashing, the seeded PRNG,
//! layout, word drawing, bucket classification, board assembly and win
//! detection. Apart from loading the word pool file and minting fresh seeds it
//! does no I/O, which makes it:
//!
//! - **Deterministic**: Same seed, pool and config produce an identical board
//! - **Shareable**: A seed string in a link is enough to rebuild a board
//! - **Testable**: Every step takes its random source explicitly
//!
//! # Module Structure
//!
//! - [`hash`]: seed string to 32-bit state
//! - [`rng`]: mulberry32 generator and the [`BoardRng`] seam
//! - [`layout`]: which cells of the 3x4 grid are filled
//! - [`draw`]: jackpot, span and emergency word draws
//! - [`bucket`]: odds to display tier
//! - [`board`]: board assembly, marking and counts
//! - [`win`]: row, column and diagonal detection
//! - [`pool`]: word pool parsing and loading
//! - [`config`]: odds span configuration
//! - [`seed`]: fresh random seeds for new boards
//! - [`batch`]: many boards at once for printing
//!
//! # Example
//!
//! ```
//! use speech_bingo_core::{generate, GeneratorConfig, WordPool};
//!
//! let pool = WordPool::parse("ord;odds\nDanmark;1,5\nKlima;5\nTak;1,2\nEuropa;7,5\n\
//!     Fremtid;2,5\nForsvar;7\nUkraine;4,5\nFamilie;1,8\nSkål;101\n").unwrap();
//! let config = GeneratorConfig::default();
//!
//! let mut board = generate(&pool, "abc", &config);
//! assert_eq!(board, generate(&pool, "abc", &config));
//! assert!(!board.has_bingo());
//!
//! let first_filled = board.cells().iter().position(|c| !c.empty).unwrap();
//! assert!(board.toggle(first_filled));
//! ```

pub mod batch;
pub mod board;
pub mod bucket;
pub mod config;
pub mod draw;
pub mod hash;
pub mod layout;
pub mod pool;
pub mod rng;
pub mod seed;
pub mod win;

pub use speech_bingo_types as types;

// Re-export commonly used types for convenience
pub use batch::{generate_batch, PrintJob};
pub use board::{generate, generate_with_rng, Board, BoardError, BucketCounts};
pub use bucket::{classify, create_thresholds};
pub use config::GeneratorConfig;
pub use hash::hash_seed;
pub use layout::build_layout;
pub use pool::{PoolError, WordPool};
pub use rng::{BoardRng, Mulberry32};
pub use seed::{random_seed, SeedSource, UuidSeedSource};
pub use win::check_win;
