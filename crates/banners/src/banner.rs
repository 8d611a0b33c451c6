use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use frostmart_core::{BannerId, SupplierId, lenient};

/// Where a banner is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerScope {
    /// Marketplace home screen.
    Main,
    /// A specific supplier's storefront.
    Supplier,
}

/// Promotional banner, as delivered by the back-office store.
///
/// Window bounds and priority are optional: an absent bound is unconstrained
/// and an absent priority sorts as 0. Dates pass through the lenient
/// deserializers, so a malformed bound degrades to unconstrained instead of
/// failing the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub id: BannerId,
    pub is_active: bool,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: Option<i64>,
    #[serde(default)]
    pub supplier_id: Option<SupplierId>,
    pub scope: BannerScope,
}

impl Banner {
    /// Whether the banner is currently within its display window.
    ///
    /// `is_active` must hold and `now` must fall inside
    /// `[start_date, end_date]`; a missing bound does not constrain.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        if !self.is_active {
            return false;
        }
        if self.start_date.is_some_and(|start| now < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| now > end) {
            return false;
        }
        true
    }

    /// Priority used for ordering; missing priority sorts as 0.
    pub fn effective_priority(&self) -> i64 {
        self.priority.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn banner(is_active: bool, start: Option<i64>, end: Option<i64>) -> Banner {
        Banner {
            id: BannerId::new(),
            is_active,
            start_date: start.map(at),
            end_date: end.map(at),
            priority: None,
            supplier_id: None,
            scope: BannerScope::Main,
        }
    }

    #[test]
    fn inactive_flag_wins_over_open_window() {
        assert!(!banner(false, None, None).is_active_at(at(100)));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let b = banner(true, Some(100), Some(200));
        assert!(b.is_active_at(at(100)));
        assert!(b.is_active_at(at(200)));
        assert!(!b.is_active_at(at(99)));
        assert!(!b.is_active_at(at(201)));
    }

    #[test]
    fn missing_bounds_do_not_constrain() {
        assert!(banner(true, None, None).is_active_at(at(0)));
        assert!(banner(true, Some(100), None).is_active_at(at(1_000_000)));
        assert!(banner(true, None, Some(200)).is_active_at(at(0)));
    }

    #[test]
    fn malformed_dates_deserialize_as_unconstrained() {
        let b: Banner = serde_json::from_value(json!({
            "id": BannerId::new(),
            "is_active": true,
            "start_date": "whenever",
            "end_date": { "year": 2026 },
            "scope": "main",
        }))
        .unwrap();

        assert_eq!(b.start_date, None);
        assert_eq!(b.end_date, None);
        assert_eq!(b.priority, None);
        assert!(b.is_active_at(at(0)));
    }
}
