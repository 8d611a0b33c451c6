//! `frostmart-events` — in-process change streams.
//!
//! Store-state changes (session snapshots, most importantly) are distributed
//! to observers through an explicit subject object with
//! subscribe/unsubscribe/close lifecycle, rather than an implicit
//! module-level listener registry.

pub mod bus;
pub mod in_memory_bus;

pub use bus::{EventBus, SubscriberId, Subscription};
pub use in_memory_bus::InMemoryEventBus;
