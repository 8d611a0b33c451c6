//! `frostmart-orders` — order status display and role policy.
//!
//! Pure derivations consumed by presentation layers: status → label/color/
//! icon/progress tables, plus role-gated capability checks.

pub mod policy;
pub mod status;

pub use policy::{can_cancel_order, can_download_invoice, can_view_processing_history};
pub use status::OrderStatus;
