//! ScoreSource trait for drawing random scores.
//!
//! Defined in appraiser-core so the appraisal service can draw scores without
//! coupling to a specific RNG. The entropy-backed and seeded adapters live in
//! appraiser-infra.

use std::ops::{Range, RangeInclusive};

/// Abstraction over the randomness consumed by an appraisal.
///
/// Implementations are shared across request handlers, so draws take `&self`
/// and any generator state must be thread-local or synchronized.
pub trait ScoreSource: Send + Sync {
    /// Draw an integer uniformly from `range` (both ends inclusive).
    fn next_int(&self, range: RangeInclusive<u8>) -> u8;

    /// Draw a decimal uniformly from `range` (end exclusive).
    fn next_decimal(&self, range: Range<f64>) -> f64;
}
