//! Application state shared across handlers.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::StorefrontConfig;
use crate::forms::SubmitGuard;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds configuration, the OfertMatch API
/// client and the per-form submission guard.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    api: ApiClient,
    submit_guard: SubmitGuard,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let api = ApiClient::new(&config);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                api,
                submit_guard: SubmitGuard::new(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the OfertMatch API client.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    /// Get a reference to the submission guard.
    #[must_use]
    pub fn submit_guard(&self) -> &SubmitGuard {
        &self.inner.submit_guard
    }
}
