//! Cart/auth reconciliation state machine.

use frostmart_auth::SessionSnapshot;

/// Collaborator that merges the anonymous cart into the user's cart.
///
/// Fire-and-forget from the reconciler's point of view: the service owns any
/// async work, retries, and failure reporting.
pub trait CartMergeService: Send + Sync {
    fn merge_carts_on_login(&self, was_authenticated: bool, now_authenticated: bool);
}

impl<S> CartMergeService for &S
where
    S: CartMergeService + ?Sized,
{
    fn merge_carts_on_login(&self, was_authenticated: bool, now_authenticated: bool) {
        (**self).merge_carts_on_login(was_authenticated, now_authenticated)
    }
}

impl<S> CartMergeService for std::sync::Arc<S>
where
    S: CartMergeService + ?Sized,
{
    fn merge_carts_on_login(&self, was_authenticated: bool, now_authenticated: bool) {
        (**self).merge_carts_on_login(was_authenticated, now_authenticated)
    }
}

/// Detects session transitions and triggers exactly one merge per transition.
///
/// States: the last observed [`SessionSnapshot`], seeded at construction
/// from whatever the session store reports. Seeding never fires; only a
/// later snapshot that differs from the held one does. A repeat of the held
/// snapshot is a no-op, so a transition can never double-fire.
#[derive(Debug)]
pub struct CartReconciler<S> {
    last: SessionSnapshot,
    merge: S,
}

impl<S> CartReconciler<S>
where
    S: CartMergeService,
{
    /// Seed the state machine with the snapshot current at mount time.
    pub fn new(initial: SessionSnapshot, merge: S) -> Self {
        Self {
            last: initial,
            merge,
        }
    }

    /// Last snapshot this reconciler has accepted.
    pub fn last_snapshot(&self) -> SessionSnapshot {
        self.last
    }

    /// Feed one observed snapshot. Returns whether a merge was triggered.
    pub fn observe(&mut self, next: SessionSnapshot) -> bool {
        if next == self.last {
            return false;
        }

        tracing::debug!(
            was_authenticated = self.last.is_authenticated,
            now_authenticated = next.is_authenticated,
            "session transition, triggering cart merge"
        );
        self.merge
            .merge_carts_on_login(self.last.is_authenticated, next.is_authenticated);
        self.last = next;
        true
    }
}
