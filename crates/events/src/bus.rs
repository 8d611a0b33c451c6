//! Observer/subject abstraction (mechanics only).
//!
//! This module provides the **subject side of the observer pattern**: a bus
//! that fans store-state changes out to any number of subscribers. The core
//! use case is the auth session change stream consumed by the cart
//! reconciler, but the bus is message-agnostic.
//!
//! ## Design
//!
//! - **Explicit lifecycle**: a bus is constructed once by whoever owns the
//!   store, and torn down with `close()` at shutdown. There is no implicit
//!   process-global registry.
//! - **Push semantics, pull consumption**: publishers push into per-subscriber
//!   channels; consumers pull from their `Subscription` at their own pace.
//! - **Broadcast**: every live subscriber receives a copy of every message
//!   published after it subscribed.
//! - **No persistence**: a subscription only sees changes from its creation
//!   onward. Observers that need the current value read it from the store
//!   first, then subscribe (the cart reconciler seeds itself this way).
//!
//! ## Delivery
//!
//! Delivery is in publish order per subscriber. Messages published between
//! two reads are all buffered; consumers that only care about the latest
//! value can drain and keep the last one (last-observed-wins).

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// Identifies one subscriber on one bus.
///
/// Used to `unsubscribe` explicitly. Dropping the `Subscription` also works;
/// the bus prunes dead subscribers on the next publish.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub(crate) u64);

/// A subscription to a change stream.
///
/// Designed for single-threaded consumption: one subscription, one consumer.
#[derive(Debug)]
pub struct Subscription<M> {
    id: SubscriberId,
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(id: SubscriberId, receiver: Receiver<M>) -> Self {
        Self { id, receiver }
    }

    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// Block until the next message is available.
    ///
    /// Errors when the bus has been closed (or dropped) with no buffered
    /// messages left.
    pub fn recv(&self) -> Result<M, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

/// Subject side of the observer pattern.
///
/// Implementations must be safe to share across threads; multiple publishers
/// may publish concurrently even though the intended topology is a single
/// store writing from one event loop.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    /// Fan a message out to all live subscribers.
    fn publish(&self, message: M) -> Result<(), Self::Error>;

    /// Register a new observer. Sees messages published from now on.
    fn subscribe(&self) -> Subscription<M>;

    /// Remove one observer. Its subscription disconnects once drained.
    fn unsubscribe(&self, id: SubscriberId);

    /// Tear the subject down. Subsequent publishes fail; existing
    /// subscriptions disconnect once their buffered messages are drained.
    fn close(&self);
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }

    fn unsubscribe(&self, id: SubscriberId) {
        (**self).unsubscribe(id)
    }

    fn close(&self) {
        (**self).close()
    }
}
