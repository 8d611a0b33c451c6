//! In-memory subject for single-process use.

use std::sync::{Mutex, mpsc};

use thiserror::Error;

use crate::bus::{EventBus, SubscriberId, Subscription};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InMemoryBusError {
    /// The bus was closed before this publish.
    #[error("bus is closed")]
    Closed,

    /// Publish failed due to internal lock poisoning.
    #[error("bus lock poisoned")]
    Poisoned,
}

#[derive(Debug)]
struct BusState<M> {
    next_id: u64,
    subscribers: Vec<(SubscriberId, mpsc::Sender<M>)>,
    closed: bool,
}

/// In-memory pub/sub subject.
///
/// - No IO / no async
/// - Best-effort fan-out; dead subscribers are pruned while publishing
/// - Explicit lifecycle: after `close()`, publishes fail and new
///   subscriptions come back already disconnected
#[derive(Debug)]
pub struct InMemoryEventBus<M> {
    state: Mutex<BusState<M>>,
}

impl<M> InMemoryEventBus<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently registered subscribers (test/diagnostic aid).
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().map(|s| s.subscribers.len()).unwrap_or(0)
    }
}

impl<M> Default for InMemoryEventBus<M> {
    fn default() -> Self {
        Self {
            state: Mutex::new(BusState {
                next_id: 0,
                subscribers: Vec::new(),
                closed: false,
            }),
        }
    }
}

impl<M> EventBus<M> for InMemoryEventBus<M>
where
    M: Clone + Send + 'static,
{
    type Error = InMemoryBusError;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        let mut state = self.state.lock().map_err(|_| InMemoryBusError::Poisoned)?;

        if state.closed {
            return Err(InMemoryBusError::Closed);
        }

        // Drop any dead subscribers while publishing.
        state
            .subscribers
            .retain(|(_, tx)| tx.send(message.clone()).is_ok());

        Ok(())
    }

    fn subscribe(&self) -> Subscription<M> {
        let (tx, rx) = mpsc::channel();

        match self.state.lock() {
            Ok(mut state) => {
                let id = SubscriberId(state.next_id);
                state.next_id += 1;

                // On a closed bus the sender is dropped here, so the
                // subscription reads as disconnected straight away.
                if !state.closed {
                    state.subscribers.push((id, tx));
                }

                Subscription::new(id, rx)
            }
            // Poisoned lock: hand out a dead subscription rather than panic.
            Err(_) => Subscription::new(SubscriberId(u64::MAX), rx),
        }
    }

    fn unsubscribe(&self, id: SubscriberId) {
        if let Ok(mut state) = self.state.lock() {
            state.subscribers.retain(|(sid, _)| *sid != id);
        }
    }

    fn close(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.closed = true;
            // Dropping the senders disconnects every subscription once its
            // buffered messages are drained.
            state.subscribers.clear();
        }
    }
}
