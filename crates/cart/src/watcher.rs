//! Session watcher: feeds the reconciler from a session change stream.

use std::sync::mpsc::TryRecvError;

use frostmart_auth::{SessionSnapshot, SessionStore};
use frostmart_events::Subscription;

use crate::reconcile::{CartMergeService, CartReconciler};

/// Owns a session subscription plus a [`CartReconciler`] and pumps snapshots
/// from one into the other.
///
/// Single-threaded by design: the hosting event loop calls [`drain`] after
/// store updates (or runs [`run_until_closed`] on a dedicated thread). When
/// the session store shuts down, the subscription disconnects and the
/// watcher is simply dropped with it.
///
/// [`drain`]: SessionWatcher::drain
/// [`run_until_closed`]: SessionWatcher::run_until_closed
pub struct SessionWatcher<S> {
    subscription: Subscription<SessionSnapshot>,
    reconciler: CartReconciler<S>,
}

impl<S> SessionWatcher<S>
where
    S: CartMergeService,
{
    /// Attach to a session store: read the current snapshot once to seed the
    /// reconciler (mount never fires a merge), then follow the change stream.
    pub fn attach(store: &SessionStore, merge: S) -> Self {
        let subscription = store.subscribe();
        let reconciler = CartReconciler::new(store.snapshot(), merge);
        Self {
            subscription,
            reconciler,
        }
    }

    pub fn reconciler(&self) -> &CartReconciler<S> {
        &self.reconciler
    }

    /// Apply every immediately available snapshot. Returns how many merges
    /// were triggered. Intermediate snapshots are still observed one by one;
    /// ordering races upstream resolve as last-observed-wins.
    pub fn drain(&mut self) -> usize {
        let mut fired = 0;
        loop {
            match self.subscription.try_recv() {
                Ok(snapshot) => {
                    if self.reconciler.observe(snapshot) {
                        fired += 1;
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return fired,
            }
        }
    }

    /// Block on the stream until the session store shuts down.
    pub fn run_until_closed(mut self) -> CartReconciler<S> {
        while let Ok(snapshot) = self.subscription.recv() {
            self.reconciler.observe(snapshot);
        }
        tracing::debug!("session stream closed, watcher stopping");
        self.reconciler
    }
}
