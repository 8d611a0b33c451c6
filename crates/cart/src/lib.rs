//! `frostmart-cart` — cart data model and cart/auth reconciliation.
//!
//! The cart itself is owned elsewhere; this crate decides **when** an
//! anonymous cart must be merged into a freshly authenticated user's cart.
//! The merge algorithm lives behind [`CartMergeService`] and is someone
//! else's problem; the reconciler only watches session transitions.

pub mod line;
pub mod reconcile;
pub mod watcher;

pub use line::CartLine;
pub use reconcile::{CartMergeService, CartReconciler};
pub use watcher::SessionWatcher;
