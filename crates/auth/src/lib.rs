//! `frostmart-auth` — session identity boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it models
//! who is signed in right now (`SessionSnapshot`), which role they act as
//! (`Role`), and a `SessionStore` that owns the current snapshot and
//! broadcasts every change to observers.

pub mod role;
pub mod session;

pub use role::Role;
pub use session::{SessionSnapshot, SessionStore};
