//! OfertMatch API client.
//!
//! Thin wrapper over `reqwest` against the fixed remote endpoints. Every
//! response uses the `{ok, data?, msg?}` envelope; list reads are issued
//! with caching disabled.
//!
//! The client returns discriminated results instead of collapsing failures
//! into empty values: callers (the route layer) decide how a failure is
//! surfaced, and can tell "no data" apart from "request failed".

use ofertmatch_core::{Envelope, ResourceKind};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::instrument;
use url::Url;

use crate::config::StorefrontConfig;

/// Errors that can occur when talking to the OfertMatch API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, connect, timeout).
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx status. Carries the server message when the body parsed.
    #[error("HTTP {status}")]
    Http {
        status: StatusCode,
        msg: Option<String>,
    },

    /// 2xx response with `ok: false`.
    #[error("{0}")]
    Application(String),

    /// Response body was not valid JSON.
    #[error("non-JSON response")]
    MalformedResponse { raw: String },
}

impl ApiError {
    /// The toast text for this failure: the server-provided message where
    /// one exists, a generic fallback otherwise.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Falha de conexão.".to_string(),
            Self::Http { status, msg } => msg
                .clone()
                .unwrap_or_else(|| format!("Erro HTTP {}", status.as_u16())),
            Self::Application(msg) => msg.clone(),
            Self::MalformedResponse { raw } => {
                if raw.trim().is_empty() {
                    "Resposta não-JSON".to_string()
                } else {
                    raw.clone()
                }
            }
        }
    }
}

/// Client for the OfertMatch API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new API client from configuration.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_url.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url.join(path).map_err(|e| ApiError::Application(format!("endpoint inválido: {e}")))
    }

    /// Fetch the rows of a list endpoint, caching disabled.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, `ok ==
    /// false`, or an unparsable body.
    #[instrument(skip(self))]
    pub async fn fetch_rows<T: DeserializeOwned>(
        &self,
        kind: ResourceKind,
    ) -> Result<Vec<T>, ApiError> {
        let url = self.endpoint(kind.api_path())?;
        let response = self
            .http
            .get(url)
            .header("Cache-Control", "no-store")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        decode_list(status, &body)
    }

    /// POST a staged payload to a resource endpoint.
    ///
    /// The body is read as text first so an unparsable response can carry
    /// its raw text into the failure.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-2xx status, `ok ==
    /// false`, or an unparsable body.
    #[instrument(skip(self, payload))]
    pub async fn submit(
        &self,
        kind: ResourceKind,
        payload: &Value,
    ) -> Result<Envelope<Value>, ApiError> {
        let url = self.endpoint(kind.api_path())?;
        let response = self.http.post(url).json(payload).send().await?;

        let status = response.status();
        let body = response.text().await?;
        decode_submit(status, &body)
    }

    /// Ping `/api/health`; true when the API answered with `ok`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the API is unreachable or the body is not
    /// an envelope.
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<bool, ApiError> {
        let url = self.endpoint("/api/health")?;
        let response = self
            .http
            .get(url)
            .header("Cache-Control", "no-store")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let envelope: Envelope<Value> = serde_json::from_str(&body)
            .map_err(|_| ApiError::MalformedResponse { raw: body })?;
        Ok(status.is_success() && envelope.ok)
    }
}

// =============================================================================
// Response decoding
// =============================================================================

/// Decode a list-endpoint response.
fn decode_list<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<Vec<T>, ApiError> {
    let Ok(envelope) = serde_json::from_str::<Envelope<T>>(body) else {
        if status.is_success() {
            return Err(ApiError::MalformedResponse {
                raw: body.to_string(),
            });
        }
        return Err(ApiError::Http { status, msg: None });
    };

    if !status.is_success() {
        return Err(ApiError::Http {
            status,
            msg: envelope.msg,
        });
    }
    if !envelope.ok {
        return Err(ApiError::Application(
            envelope
                .msg
                .unwrap_or_else(|| "Erro ao buscar dados.".to_string()),
        ));
    }
    Ok(envelope.into_rows())
}

/// Decode a create-endpoint response.
fn decode_submit(status: StatusCode, body: &str) -> Result<Envelope<Value>, ApiError> {
    let Ok(envelope) = serde_json::from_str::<Envelope<Value>>(body) else {
        return Err(ApiError::MalformedResponse {
            raw: body.to_string(),
        });
    };

    if !status.is_success() {
        return Err(ApiError::Http {
            status,
            msg: envelope.msg,
        });
    }
    if !envelope.ok {
        return Err(ApiError::Application(
            envelope
                .msg
                .unwrap_or_else(|| format!("Erro HTTP {}", status.as_u16())),
        ));
    }
    Ok(envelope)
}
