//! Session-stored types and keys.
//!
//! The session is the visitor's durable key-value store: it holds the cart
//! blob, the theme preference and the drawer view-state, nothing else.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

/// Session keys.
pub mod keys {
    /// JSON-encoded quantity mapping (the cart blob).
    pub const CART: &str = "cart";

    /// Theme preference, `"dark"` or `"light"`.
    pub const THEME: &str = "theme";

    /// Cart drawer open/closed state.
    pub const DRAWER: &str = "drawer";
}

/// Color theme preference.
///
/// Persisted under [`keys::THEME`] as the string `"dark"` or `"light"`.
/// Anything unreadable falls back to light.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Flip between light and dark.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether the dark theme is active.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// CSS class applied to `<body>`.
    #[must_use]
    pub const fn body_class(self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }

    /// Read the preference from the session, defaulting to light.
    pub async fn load(session: &Session) -> Self {
        session
            .get::<Self>(keys::THEME)
            .await
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    /// Persist the preference.
    ///
    /// # Errors
    ///
    /// Returns the session store error if the write fails.
    pub async fn save(self, session: &Session) -> Result<(), tower_sessions::session::Error> {
        session.insert(keys::THEME, self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_persists_as_the_legacy_strings() {
        assert_eq!(
            serde_json::to_string(&Theme::Dark).expect("serializes"),
            r#""dark""#
        );
        let theme: Theme = serde_json::from_str(r#""light""#).expect("deserializes");
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn body_class_matches_the_stylesheet() {
        assert_eq!(Theme::Dark.body_class(), "theme-dark");
        assert_eq!(Theme::Light.body_class(), "theme-light");
    }
}
