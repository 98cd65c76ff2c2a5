//! Shared domain types for Appraiser.
//!
//! This crate contains the appraisal request/result types, the server
//! configuration shape, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod appraisal;
pub mod config;
pub mod error;
