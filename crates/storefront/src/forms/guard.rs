//! Per-client in-flight submission guard.
//!
//! The legacy client let a double-click fire the same form twice while the
//! first request was pending. Here a submission must hold a [`SubmitPermit`]
//! for its (client, form) pair; a second `begin` for the same pair is
//! refused until the permit drops (on success or failure alike). Different
//! clients never block each other.
//!
//! The client key is the session id. A first-time visitor has no id until
//! the session middleware persists one, so those submissions share the
//! `None` key; the double-click protection still applies to them.

use std::collections::HashSet;
use std::sync::Mutex;

use ofertmatch_core::ResourceKind;
use tower_sessions::session::Id;

type SubmitKey = (Option<Id>, ResourceKind);

/// Tracks which (client, form) pairs currently have a submission in flight.
#[derive(Debug, Default)]
pub struct SubmitGuard {
    active: Mutex<HashSet<SubmitKey>>,
}

impl SubmitGuard {
    /// Create an idle guard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Try to start a submission of `kind` for the client `session_id`.
    ///
    /// Returns `None` when the same client already has a submission of the
    /// same form in flight; the caller must reject the re-entrant submit.
    #[must_use]
    pub fn begin(&self, session_id: Option<Id>, kind: ResourceKind) -> Option<SubmitPermit<'_>> {
        let key = (session_id, kind);
        let mut active = match self.active.lock() {
            Ok(set) => set,
            Err(poisoned) => poisoned.into_inner(),
        };
        if active.insert(key) {
            Some(SubmitPermit { guard: self, key })
        } else {
            None
        }
    }

    fn release(&self, key: SubmitKey) {
        let mut active = match self.active.lock() {
            Ok(set) => set,
            Err(poisoned) => poisoned.into_inner(),
        };
        active.remove(&key);
    }
}

/// Held for the duration of one submission; releases its (client, form)
/// pair on drop.
#[derive(Debug)]
pub struct SubmitPermit<'a> {
    guard: &'a SubmitGuard,
    key: SubmitKey,
}

impl Drop for SubmitPermit<'_> {
    fn drop(&mut self) {
        self.guard.release(self.key);
    }
}
