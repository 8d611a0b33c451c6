//! Role-gated order capabilities.
//!
//! Pure policy checks consumed by the presentation layer:
//! - No IO
//! - No panics
//! - Total over every `(status, role)` pair

use frostmart_auth::Role;

use crate::OrderStatus;

/// Whether `role` may cancel an order currently in `status`.
///
/// Clients may only cancel orders that have not started processing. Known
/// staff roles may cancel anything up to and including delivery. An
/// unrecognized role gets the client rule (least privileged), and an
/// unrecognized status is never cancelable.
pub fn can_cancel_order(status: OrderStatus, role: Role) -> bool {
    match role {
        Role::Client | Role::Unknown => status == OrderStatus::Pending,
        Role::Supplier | Role::Driver | Role::Employee | Role::Admin => matches!(
            status,
            OrderStatus::Pending | OrderStatus::Confirmed | OrderStatus::InDelivery
        ),
    }
}

/// Invoice downloads are a back-office capability.
pub fn can_download_invoice(role: Role) -> bool {
    role.is_back_office()
}

/// The processing-history timeline is a back-office capability.
pub fn can_view_processing_history(role: Role) -> bool {
    role.is_back_office()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_cancels_pending_only() {
        assert!(can_cancel_order(OrderStatus::Pending, Role::Client));
        assert!(!can_cancel_order(OrderStatus::Confirmed, Role::Client));
        assert!(!can_cancel_order(OrderStatus::InDelivery, Role::Client));
        assert!(!can_cancel_order(OrderStatus::Delivered, Role::Client));
    }

    #[test]
    fn staff_roles_cancel_through_delivery() {
        for role in [Role::Supplier, Role::Driver, Role::Employee, Role::Admin] {
            assert!(can_cancel_order(OrderStatus::Pending, role));
            assert!(can_cancel_order(OrderStatus::Confirmed, role));
            assert!(can_cancel_order(OrderStatus::InDelivery, role));
            assert!(!can_cancel_order(OrderStatus::Delivered, role));
            assert!(!can_cancel_order(OrderStatus::Cancelled, role));
        }
    }

    #[test]
    fn unknown_role_falls_back_to_the_client_rule() {
        assert!(can_cancel_order(OrderStatus::Pending, Role::Unknown));
        assert!(!can_cancel_order(OrderStatus::Confirmed, Role::Unknown));
    }

    #[test]
    fn unknown_status_is_never_cancelable() {
        for role in [
            Role::Client,
            Role::Supplier,
            Role::Driver,
            Role::Employee,
            Role::Admin,
            Role::Unknown,
        ] {
            assert!(!can_cancel_order(OrderStatus::Unknown, role));
        }
    }

    #[test]
    fn back_office_capabilities_are_admin_and_employee_only() {
        for role in [Role::Admin, Role::Employee] {
            assert!(can_download_invoice(role));
            assert!(can_view_processing_history(role));
        }
        for role in [Role::Client, Role::Supplier, Role::Driver, Role::Unknown] {
            assert!(!can_download_invoice(role));
            assert!(!can_view_processing_history(role));
        }
    }
}
