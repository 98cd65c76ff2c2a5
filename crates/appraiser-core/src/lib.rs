//! Business logic and port definitions for Appraiser.
//!
//! This crate defines the `ScoreSource` port that the infrastructure layer
//! implements. It depends only on `appraiser-types` -- never on
//! `appraiser-infra` or any RNG crate.

pub mod service;
