//! Feedback ingestion: raw product payloads → normalized [`ProductFeedback`].

use serde::{Deserialize, Serialize};

use frostmart_core::lenient;

/// One user-submitted rating attached to a product.
///
/// `rating` is lenient: a malformed value becomes `None`. The entry still
/// exists (and counts toward totals); only its numeric contribution is gone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    #[serde(default, deserialize_with = "lenient::rating")]
    pub rating: Option<f64>,
}

impl FeedbackEntry {
    pub fn new(rating: f64) -> Self {
        Self {
            rating: Some(rating),
        }
    }

    pub fn unrated() -> Self {
        Self { rating: None }
    }
}

/// A product's feedback, normalized to one of two shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductFeedback {
    /// Individual entries, one per feedback.
    Explicit(Vec<FeedbackEntry>),
    /// Precomputed aggregate from the catalog service.
    Summary {
        average_rating: f64,
        feedback_count: u32,
    },
}

impl ProductFeedback {
    pub fn empty() -> Self {
        ProductFeedback::Explicit(Vec::new())
    }
}

/// Raw product document, as the catalog store ships it.
///
/// Only the feedback-bearing fields matter here; everything else in the
/// document is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
struct RawProductFeedback {
    #[serde(default)]
    feedbacks: Option<Vec<FeedbackEntry>>,
    #[serde(default)]
    reviews: Option<Vec<FeedbackEntry>>,
    #[serde(default, deserialize_with = "lenient::rating")]
    average_rating: Option<f64>,
    #[serde(default)]
    feedback_count: Option<u32>,
}

impl From<RawProductFeedback> for ProductFeedback {
    /// Shape resolution, in priority order: explicit `feedbacks` array, then
    /// `reviews` array, then the summary pair when `feedback_count > 0`,
    /// else empty.
    fn from(raw: RawProductFeedback) -> Self {
        if let Some(entries) = raw.feedbacks {
            return ProductFeedback::Explicit(entries);
        }
        if let Some(entries) = raw.reviews {
            return ProductFeedback::Explicit(entries);
        }
        match (raw.average_rating, raw.feedback_count) {
            (Some(average_rating), Some(feedback_count)) if feedback_count > 0 => {
                ProductFeedback::Summary {
                    average_rating,
                    feedback_count,
                }
            }
            _ => ProductFeedback::empty(),
        }
    }
}

impl<'de> Deserialize<'de> for ProductFeedback {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawProductFeedback::deserialize(deserializer)?;
        Ok(raw.into())
    }
}
