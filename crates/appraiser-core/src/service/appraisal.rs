//! The appraisal use case.
//!
//! `appraise` validates a request and produces a randomized placeholder
//! appraisal: nine independent dimension scores, an overall score, and a
//! fixed rationale. There is no valuation model behind the numbers.

use appraiser_types::appraisal::{
    AppraisalRequest, AppraisalResult, DIMENSION_COUNT, DIMENSION_RANGE, OVERALL_RANGE,
    OverallScore, RATIONALE,
};
use appraiser_types::error::AppraisalError;

use crate::service::score::ScoreSource;

/// Appraise one asset.
///
/// Fails with [`AppraisalError::InvalidInput`] when the content is missing or
/// empty; in that case nothing is drawn from `source`. Content is otherwise
/// opaque.
///
/// The overall score is a separate draw, not an aggregate of the dimension
/// scores. Whether it should be derived from them is unresolved, so the two
/// stay independent.
pub fn appraise<S>(
    request: &AppraisalRequest,
    source: &S,
) -> Result<AppraisalResult, AppraisalError>
where
    S: ScoreSource + ?Sized,
{
    match request.content.as_deref() {
        Some(content) if !content.is_empty() => {}
        _ => return Err(AppraisalError::InvalidInput),
    }

    let mut dimension_scores = [0u8; DIMENSION_COUNT];
    for score in &mut dimension_scores {
        *score = source.next_int(DIMENSION_RANGE);
    }

    let overall_score = OverallScore::from_decimal(source.next_decimal(OVERALL_RANGE));

    Ok(AppraisalResult {
        dimension_scores,
        overall_score,
        rationale: RATIONALE,
    })
}
