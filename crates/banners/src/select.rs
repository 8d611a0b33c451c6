//! Banner selection.
//!
//! Pure policy over a banner collection:
//! - No IO
//! - No panics
//! - No mutation of the input collection

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;

use frostmart_core::SupplierId;

use crate::Banner;

/// Banners displayable at `now`, highest priority first.
///
/// Filters by `Banner::is_active_at` and sorts descending by effective
/// priority. The sort is stable, so banners with equal priority keep their
/// relative input order.
pub fn active_banners(banners: &[Banner], now: DateTime<Utc>) -> Vec<&Banner> {
    let mut active: Vec<&Banner> = banners.iter().filter(|b| b.is_active_at(now)).collect();
    active.sort_by(|a, b| b.effective_priority().cmp(&a.effective_priority()));
    active
}

/// Same as [`active_banners`], restricted to one supplier's storefront.
pub fn active_banners_for_supplier(
    banners: &[Banner],
    supplier_id: SupplierId,
    now: DateTime<Utc>,
) -> Vec<&Banner> {
    let mut active: Vec<&Banner> = banners
        .iter()
        .filter(|b| b.supplier_id == Some(supplier_id) && b.is_active_at(now))
        .collect();
    active.sort_by(|a, b| b.effective_priority().cmp(&a.effective_priority()));
    active
}

/// Pick the banner to display from an already-filtered set.
///
/// `None` on empty input, the sole element on a singleton, otherwise a
/// uniformly random element. The random pick is **deliberately
/// non-deterministic**: equal-priority campaigns rotate across renders
/// instead of the first one always winning.
pub fn pick_display_banner<'a>(active: &[&'a Banner]) -> Option<&'a Banner> {
    active.choose(&mut rand::thread_rng()).copied()
}
