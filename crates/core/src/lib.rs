//! `frostmart-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! strongly-typed identifiers, the domain error model, and lenient serde
//! helpers for payloads arriving from upstream stores.

pub mod error;
pub mod id;
pub mod lenient;

pub use error::{DomainError, DomainResult};
pub use id::{BannerId, OrderId, ProductId, SupplierId, UserId};
