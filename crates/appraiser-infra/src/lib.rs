//! Infrastructure layer for Appraiser.
//!
//! Contains implementations of the ports defined in `appraiser-core`
//! (entropy-backed and seeded score sources) and the TOML config loader.

pub mod config;
pub mod score;
