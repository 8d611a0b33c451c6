//! Lenient serde helpers for upstream payloads.
//!
//! Banner and feedback collections arrive from back-office stores this core
//! does not control, so individual fields can be missing, the wrong type, or
//! malformed. These helpers collapse every unusable value to `None` instead
//! of failing the whole payload. Callers pair them with `#[serde(default)]`
//! so absent fields take the same path as malformed ones.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Timestamps that may arrive as RFC 3339 strings, epoch milliseconds, or junk.
///
/// Use with `#[serde(default, deserialize_with = "lenient::timestamp")]`.
/// A value that cannot be interpreted becomes `None` (an unconstrained bound).
pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(timestamp_from_value))
}

fn timestamp_from_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|t| t.with_timezone(&Utc)),
        Value::Number(n) => n
            .as_i64()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        _ => None,
    }
}

/// Ratings that may arrive as numbers, numeric strings, or junk.
///
/// Use with `#[serde(default, deserialize_with = "lenient::rating")]`.
/// Non-numeric values become `None`; the aggregator decides how to count them.
pub fn rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(rating_from_value))
}

fn rating_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
