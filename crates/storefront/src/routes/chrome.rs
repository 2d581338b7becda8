//! UI chrome handlers: theme toggle, cart drawer state, API status badge.
//!
//! Theme and drawer state are persisted in the session and applied on the
//! next full render; the handlers answer `HX-Refresh` so the page reloads
//! with the new state.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::models::Theme;
use crate::state::AppState;
use crate::ui::ToggleState;

/// API status badge (HTMX). Polled from the page header.
#[instrument(skip(state))]
pub async fn api_status(State(state): State<AppState>) -> Response {
    let text = match state.api().health().await {
        Ok(true) => "API online ✅",
        Ok(false) => "API respondeu, mas sem OK",
        Err(err) => {
            tracing::warn!(error = %err, "health check failed");
            "API offline (Render hibernado?) ⏳"
        }
    };
    text.into_response()
}

fn refresh() -> Response {
    ([("HX-Refresh", "true")], StatusCode::NO_CONTENT).into_response()
}

/// Flip the color theme (HTMX).
#[instrument(skip(session))]
pub async fn toggle_theme(session: Session) -> Result<Response> {
    let theme = Theme::load(&session).await.toggle();
    theme.save(&session).await?;
    Ok(refresh())
}

/// Flip the cart drawer (HTMX).
#[instrument(skip(session))]
pub async fn toggle_drawer(session: Session) -> Result<Response> {
    let drawer = ToggleState::load(&session).await.toggle();
    drawer.save(&session).await?;
    Ok(refresh())
}

/// Open the cart drawer; idempotent (HTMX).
#[instrument(skip(session))]
pub async fn open_drawer(session: Session) -> Result<Response> {
    let drawer = ToggleState::load(&session).await.open();
    drawer.save(&session).await?;
    Ok(refresh())
}

/// Close the cart drawer; idempotent (HTMX).
#[instrument(skip(session))]
pub async fn close_drawer(session: Session) -> Result<Response> {
    let drawer = ToggleState::load(&session).await.close();
    drawer.save(&session).await?;
    Ok(refresh())
}
