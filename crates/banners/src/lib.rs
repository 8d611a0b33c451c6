//! `frostmart-banners` — promotional banner selection.
//!
//! Banners are created by the back office and read-only here. This crate
//! decides which banners are currently displayable (activity window +
//! priority) and which single banner to show.

pub mod banner;
pub mod select;

pub use banner::{Banner, BannerScope};
pub use select::{active_banners, active_banners_for_supplier, pick_display_banner};
