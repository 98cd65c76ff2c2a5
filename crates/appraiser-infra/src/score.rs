//! `ScoreSource` adapters backed by the `rand` crate.
//!
//! - [`ThreadScoreSource`]: draws from `rand::rng()`, the thread-local
//!   generator seeded from OS entropy. Stateless, so it needs no lock.
//! - [`SeededScoreSource`]: a single `StdRng` behind a mutex. Every handler
//!   shares one reproducible stream.

use std::ops::{Range, RangeInclusive};
use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use appraiser_core::service::score::ScoreSource;

/// Entropy-backed implementation of `ScoreSource`.
///
/// Each draw goes to the calling thread's generator, so concurrent handlers
/// on a multi-threaded runtime never contend.
pub struct ThreadScoreSource;

impl ThreadScoreSource {
    /// Create a new entropy-backed source.
    pub fn new() -> Self {
        Self
    }
}

impl Default for ThreadScoreSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreSource for ThreadScoreSource {
    fn next_int(&self, range: RangeInclusive<u8>) -> u8 {
        rand::rng().random_range(range)
    }

    fn next_decimal(&self, range: Range<f64>) -> f64 {
        rand::rng().random_range(range)
    }
}

/// Deterministic implementation of `ScoreSource` for a fixed seed.
pub struct SeededScoreSource {
    rng: Mutex<StdRng>,
}

impl SeededScoreSource {
    /// Create a source whose draws are fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, draw: impl FnOnce(&mut StdRng) -> T) -> T {
        // A panic mid-draw cannot leave the generator in an invalid state.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        draw(&mut rng)
    }
}

impl ScoreSource for SeededScoreSource {
    fn next_int(&self, range: RangeInclusive<u8>) -> u8 {
        self.with_rng(|rng| rng.random_range(range))
    }

    fn next_decimal(&self, range: Range<f64>) -> f64 {
        self.with_rng(|rng| rng.random_range(range))
    }
}

/// Pick the source for a run: seeded when `seed` is set, entropy otherwise.
pub fn build_score_source(seed: Option<u64>) -> Arc<dyn ScoreSource> {
    match seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded score source");
            Arc::new(SeededScoreSource::new(seed))
        }
        None => {
            tracing::debug!("Using entropy-backed score source");
            Arc::new(ThreadScoreSource::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use appraiser_core::service::appraisal::appraise;
    use appraiser_types::appraisal::{AppraisalRequest, DIMENSION_RANGE, OVERALL_RANGE};
    use std::collections::HashSet;

    const DRAWS: usize = 9_000;

    fn histogram(source: &dyn ScoreSource) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for _ in 0..DRAWS {
            let value = source.next_int(DIMENSION_RANGE);
            assert!(DIMENSION_RANGE.contains(&value), "out of range: {value}");
            counts[usize::from(value - 7)] += 1;
        }
        counts
    }

    fn assert_roughly_uniform(counts: [usize; 4]) {
        // Expected 2250 per bucket; a 15% band is far outside sampling noise.
        let expected = DRAWS / 4;
        for (offset, count) in counts.iter().enumerate() {
            assert!(
                count.abs_diff(expected) < expected * 15 / 100,
                "score {} drawn {count} times, expected about {expected}",
                offset + 7
            );
        }
    }

    #[test]
    fn test_thread_source_int_distribution() {
        assert_roughly_uniform(histogram(&ThreadScoreSource::new()));
    }

    #[test]
    fn test_seeded_source_int_distribution() {
        assert_roughly_uniform(histogram(&SeededScoreSource::new(42)));
    }

    #[test]
    fn test_thread_source_decimal_range() {
        let source = ThreadScoreSource::new();
        for _ in 0..DRAWS {
            let value = source.next_decimal(OVERALL_RANGE);
            assert!(OVERALL_RANGE.contains(&value), "out of range: {value}");
        }
    }

    #[test]
    fn test_seeded_source_is_deterministic() {
        let a = SeededScoreSource::new(1234);
        let b = SeededScoreSource::new(1234);
        let request = AppraisalRequest::new("ipfs://abc123");

        for _ in 0..50 {
            assert_eq!(appraise(&request, &a).unwrap(), appraise(&request, &b).unwrap());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a = SeededScoreSource::new(1);
        let b = SeededScoreSource::new(2);
        let draws_a: Vec<u8> = (0..32).map(|_| a.next_int(DIMENSION_RANGE)).collect();
        let draws_b: Vec<u8> = (0..32).map(|_| b.next_int(DIMENSION_RANGE)).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn test_overall_varies_across_appraisals() {
        let source = build_score_source(None);
        let request = AppraisalRequest::new("x");
        let overall: HashSet<String> = (0..1000)
            .map(|_| appraise(&request, source.as_ref()).unwrap().overall_score.to_string())
            .collect();
        assert!(overall.len() > 1);
    }

    #[test]
    fn test_seeded_source_shared_across_threads() {
        let source = build_score_source(Some(99));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let source = Arc::clone(&source);
                std::thread::spawn(move || {
                    (0..250)
                        .map(|_| source.next_int(DIMENSION_RANGE))
                        .all(|v| DIMENSION_RANGE.contains(&v))
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
