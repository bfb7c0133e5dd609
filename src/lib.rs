//! Speech bingo (workspace facade crate).
//!
//! Keeps a single `speech_bingo::{core,types}` public API for board consumers
//! (the online board and the print sheet) while the implementation lives in
//! dedicated crates under `crates/`.

pub use speech_bingo_core as core;
pub use speech_bingo_types as types;
