//! Appraisal request and result types.
//!
//! Field names on the wire (`nftContent`, `scores`, `overall`, `reason`) are
//! fixed by the HTTP contract; the Rust names describe what the values mean.

use std::fmt;
use std::ops::{Range, RangeInclusive};

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of anonymous dimension scores in every appraisal.
pub const DIMENSION_COUNT: usize = 9;

/// Closed range every dimension score is drawn from.
pub const DIMENSION_RANGE: RangeInclusive<u8> = 7..=10;

/// Half-open range the overall score is drawn from.
pub const OVERALL_RANGE: Range<f64> = 7.0..10.0;

/// Rationale attached to every successful appraisal.
pub const RATIONALE: &str = "Automated local appraisal complete";

/// Wire name of the request's content field.
const CONTENT_FIELD: &str = "nftContent";

/// Smallest and largest representable overall score, in tenths.
const MIN_TENTHS: u8 = 70;
const MAX_TENTHS: u8 = 99;

/// A request to appraise one asset.
///
/// `content` is whatever the caller uses to identify or describe the asset
/// (a URI, free text). Absence and JSON `null` both deserialize to `None`.
///
/// Only a JSON object is accepted; arrays and scalars fail to deserialize
/// rather than reaching validation. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppraisalRequest {
    pub content: Option<String>,
}

impl AppraisalRequest {
    /// Build a request carrying the given content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }
}

impl<'de> Deserialize<'de> for AppraisalRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RequestVisitor;

        impl<'de> Visitor<'de> for RequestVisitor {
            type Value = AppraisalRequest;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "an object with an optional `{CONTENT_FIELD}` string")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut content: Option<Option<String>> = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == CONTENT_FIELD {
                        if content.is_some() {
                            return Err(de::Error::duplicate_field(CONTENT_FIELD));
                        }
                        content = Some(map.next_value()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                Ok(AppraisalRequest {
                    content: content.flatten(),
                })
            }
        }

        deserializer.deserialize_map(RequestVisitor)
    }
}

/// The outcome of a successful appraisal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppraisalResult {
    /// Fixed-order, unlabeled sub-scores, each within [`DIMENSION_RANGE`].
    #[serde(rename = "scores")]
    pub dimension_scores: [u8; DIMENSION_COUNT],

    /// Summary score. Drawn independently of `dimension_scores`.
    #[serde(rename = "overall")]
    pub overall_score: OverallScore,

    #[serde(rename = "reason")]
    pub rationale: &'static str,
}

/// Overall score with exactly one fractional digit, in `[7.0, 10.0)`.
///
/// Stored as integer tenths so formatting never drifts (`83` is `"8.3"`).
/// Serializes as a JSON string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OverallScore(u8);

impl OverallScore {
    /// Quantize a raw draw to one decimal place.
    ///
    /// Truncates toward the lower tenth so a draw just under 10.0 never
    /// becomes `"10.0"`. Values outside the range are clamped onto it.
    pub fn from_decimal(value: f64) -> Self {
        let tenths = (value * 10.0).floor();
        let tenths = if tenths.is_nan() {
            f64::from(MIN_TENTHS)
        } else {
            tenths.clamp(f64::from(MIN_TENTHS), f64::from(MAX_TENTHS))
        };
        Self(tenths as u8)
    }
}

impl fmt::Display for OverallScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl Serialize for OverallScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
