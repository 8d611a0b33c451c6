use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// Values outside the known set deserialize as `Unknown` and take the
/// zero-progress, least-privileged path everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Picking,
    Confirmed,
    Packing,
    PackingCompleted,
    InDelivery,
    Delivered,
    Cancelled,
    Returned,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Human-readable label for the status badge.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Picking => "Picking",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Packing => "Packing",
            OrderStatus::PackingCompleted => "Packing completed",
            OrderStatus::InDelivery => "In delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Returned => "Returned",
            OrderStatus::Unknown => "Unknown",
        }
    }

    /// Badge color token (hex).
    pub fn color(self) -> &'static str {
        match self {
            OrderStatus::Pending => "#F59E0B",
            OrderStatus::Picking => "#F59E0B",
            OrderStatus::Confirmed => "#3B82F6",
            OrderStatus::Packing => "#3B82F6",
            OrderStatus::PackingCompleted => "#6366F1",
            OrderStatus::InDelivery => "#8B5CF6",
            OrderStatus::Delivered => "#10B981",
            OrderStatus::Cancelled => "#EF4444",
            OrderStatus::Returned => "#EF4444",
            OrderStatus::Unknown => "#9CA3AF",
        }
    }

    /// Icon token consumed by the presentation layer.
    pub fn icon(self) -> &'static str {
        match self {
            OrderStatus::Pending => "clock",
            OrderStatus::Picking => "basket",
            OrderStatus::Confirmed => "check-circle",
            OrderStatus::Packing => "package",
            OrderStatus::PackingCompleted => "package-check",
            OrderStatus::InDelivery => "truck",
            OrderStatus::Delivered => "home-check",
            OrderStatus::Cancelled => "x-circle",
            OrderStatus::Returned => "rotate-ccw",
            OrderStatus::Unknown => "help-circle",
        }
    }

    /// Coarse lifecycle progress percentage for the order tracker bar.
    ///
    /// Fixed table; terminal failure states and anything unlisted sit at 0.
    pub fn progress(self) -> u8 {
        match self {
            OrderStatus::Confirmed => 33,
            OrderStatus::InDelivery => 66,
            OrderStatus::Delivered => 100,
            _ => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Picking => "PICKING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Packing => "PACKING",
            OrderStatus::PackingCompleted => "PACKING_COMPLETED",
            OrderStatus::InDelivery => "IN_DELIVERY",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Returned => "RETURNED",
            OrderStatus::Unknown => "UNKNOWN",
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = core::convert::Infallible;

    /// Total: anything outside the known set parses as `Unknown`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "PENDING" => OrderStatus::Pending,
            "PICKING" => OrderStatus::Picking,
            "CONFIRMED" => OrderStatus::Confirmed,
            "PACKING" => OrderStatus::Packing,
            "PACKING_COMPLETED" => OrderStatus::PackingCompleted,
            "IN_DELIVERY" => OrderStatus::InDelivery,
            "DELIVERED" => OrderStatus::Delivered,
            "CANCELLED" => OrderStatus::Cancelled,
            "RETURNED" => OrderStatus::Returned,
            _ => OrderStatus::Unknown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: [OrderStatus; 9] = [
        OrderStatus::Pending,
        OrderStatus::Picking,
        OrderStatus::Confirmed,
        OrderStatus::Packing,
        OrderStatus::PackingCompleted,
        OrderStatus::InDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
        OrderStatus::Returned,
    ];

    #[test]
    fn known_statuses_round_trip_through_str() {
        for status in KNOWN {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn unknown_strings_parse_to_unknown() {
        assert_eq!(
            "TELEPORTED".parse::<OrderStatus>().unwrap(),
            OrderStatus::Unknown
        );
        let from_json: OrderStatus = serde_json::from_str("\"TELEPORTED\"").unwrap();
        assert_eq!(from_json, OrderStatus::Unknown);
    }

    #[test]
    fn progress_follows_the_fixed_table() {
        assert_eq!(OrderStatus::Pending.progress(), 0);
        assert_eq!(OrderStatus::Confirmed.progress(), 33);
        assert_eq!(OrderStatus::InDelivery.progress(), 66);
        assert_eq!(OrderStatus::Delivered.progress(), 100);
        assert_eq!(OrderStatus::Cancelled.progress(), 0);
        assert_eq!(OrderStatus::Returned.progress(), 0);
        assert_eq!(OrderStatus::Unknown.progress(), 0);
    }

    #[test]
    fn every_status_has_display_tokens() {
        for status in KNOWN.into_iter().chain([OrderStatus::Unknown]) {
            assert!(!status.label().is_empty());
            assert!(status.color().starts_with('#'));
            assert!(!status.icon().is_empty());
        }
    }
}
