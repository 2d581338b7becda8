//! View-state for chrome toggles.
//!
//! The cart drawer owns one [`ToggleState`] persisted in the session,
//! instead of a free-standing open/closed flag. Opening an open drawer or
//! closing a closed one is a no-op.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::models::keys;

/// Open/closed state of the cart drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleState {
    #[default]
    Closed,
    Open,
}

impl ToggleState {
    /// Transition to open; idempotent.
    #[must_use]
    pub const fn open(self) -> Self {
        Self::Open
    }

    /// Transition to closed; idempotent.
    #[must_use]
    pub const fn close(self) -> Self {
        Self::Closed
    }

    /// Flip the state.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    /// Whether the group is open.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Read the drawer state from the session, defaulting to closed.
    pub async fn load(session: &Session) -> Self {
        session
            .get::<Self>(keys::DRAWER)
            .await
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    /// Persist the drawer state.
    ///
    /// # Errors
    ///
    /// Returns the session store error if the write fails.
    pub async fn save(self, session: &Session) -> Result<(), tower_sessions::session::Error> {
        session.insert(keys::DRAWER, self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_and_close_are_idempotent() {
        assert_eq!(ToggleState::Closed.open(), ToggleState::Open);
        assert_eq!(ToggleState::Open.open(), ToggleState::Open);
        assert_eq!(ToggleState::Open.close(), ToggleState::Closed);
        assert_eq!(ToggleState::Closed.close(), ToggleState::Closed);
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(ToggleState::Closed.toggle(), ToggleState::Open);
        assert_eq!(ToggleState::Open.toggle(), ToggleState::Closed);
    }

    #[test]
    fn default_is_closed() {
        assert!(!ToggleState::default().is_open());
    }
}
