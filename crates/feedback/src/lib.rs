//! `frostmart-feedback` — supplier rating aggregation.
//!
//! Product payloads carry feedback in two shapes (an explicit entry list or
//! a precomputed summary). The shape is resolved **once** at the serde
//! boundary into [`ProductFeedback`]; the aggregator then operates on the
//! normalized form only.

pub mod ingest;
pub mod rating;

pub use ingest::{FeedbackEntry, ProductFeedback};
pub use rating::{RatingSummary, aggregate_rating};
