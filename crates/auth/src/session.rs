//! Session snapshots and the session store subject.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use frostmart_core::UserId;
use frostmart_events::{EventBus, InMemoryEventBus, Subscription};

/// Point-in-time view of the auth session.
///
/// Observers compare two snapshots (previous, current) to detect a
/// transition; equality is over the full `(is_authenticated, user_id)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub is_authenticated: bool,
    pub user_id: Option<UserId>,
}

impl SessionSnapshot {
    pub fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            user_id: None,
        }
    }

    pub fn authenticated(user_id: UserId) -> Self {
        Self {
            is_authenticated: true,
            user_id: Some(user_id),
        }
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::anonymous()
    }
}

/// Owns the current session snapshot and broadcasts every change.
///
/// This is the "auth store" collaborator: sign-in/sign-out mutate the
/// snapshot and publish the new value to subscribers (the cart reconciler
/// among them). Constructed once at startup; `shutdown()` tears the change
/// stream down.
#[derive(Debug)]
pub struct SessionStore {
    current: Mutex<SessionSnapshot>,
    changes: InMemoryEventBus<SessionSnapshot>,
}

impl SessionStore {
    /// Start anonymous.
    pub fn new() -> Self {
        Self::with_initial(SessionSnapshot::anonymous())
    }

    /// Start from a restored session (e.g. a persisted token).
    pub fn with_initial(initial: SessionSnapshot) -> Self {
        Self {
            current: Mutex::new(initial),
            changes: InMemoryEventBus::new(),
        }
    }

    /// Current snapshot. Observers read this once to seed themselves, then
    /// follow the change stream.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.current
            .lock()
            .map(|s| *s)
            .unwrap_or_else(|_| SessionSnapshot::anonymous())
    }

    /// Subscribe to snapshot changes (new values only, no replay).
    pub fn subscribe(&self) -> Subscription<SessionSnapshot> {
        self.changes.subscribe()
    }

    pub fn sign_in(&self, user_id: UserId) {
        self.transition(SessionSnapshot::authenticated(user_id));
    }

    pub fn sign_out(&self) {
        self.transition(SessionSnapshot::anonymous());
    }

    /// Tear down the change stream. Live subscriptions disconnect once
    /// drained; the snapshot itself stays readable.
    pub fn shutdown(&self) {
        self.changes.close();
    }

    fn transition(&self, next: SessionSnapshot) {
        if let Ok(mut current) = self.current.lock() {
            *current = next;
        }
        // Publish unconditionally; observers own their own dedup against
        // repeated identical snapshots. Failure just means shutdown raced
        // a transition, which observers see as a disconnected stream.
        if self.changes.publish(next).is_err() {
            tracing::debug!("session change dropped: store already shut down");
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
