//! Application state shared by the HTTP handlers and the CLI.
//!
//! The only dependency the appraisal handler needs is the score source; it is
//! chosen once at startup (seeded or entropy-backed) and shared by reference.

use std::sync::Arc;

use appraiser_core::service::score::ScoreSource;
use appraiser_infra::score::build_score_source;

#[derive(Clone)]
pub struct AppState {
    pub score_source: Arc<dyn ScoreSource>,
}

impl AppState {
    /// Wrap an already-built score source.
    pub fn new(score_source: Arc<dyn ScoreSource>) -> Self {
        Self { score_source }
    }

    /// Wire the state for a run: seeded when `seed` is set, entropy otherwise.
    pub fn init(seed: Option<u64>) -> Self {
        Self::new(build_score_source(seed))
    }
}
