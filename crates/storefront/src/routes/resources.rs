//! Admin resource routes: list pages, table fragments and form submission.
//!
//! All three resource kinds share one set of handlers driven by the static
//! tables in `ofertmatch_core::ResourceKind`. Reads always hit the remote
//! API fresh; a failed read degrades to an empty table plus a toast instead
//! of an error page.
//!
//! Submissions arrive at `POST /forms/{form_id}` where `form_id` is the
//! legacy modal id (`modalEmpresa`, `modalProduto`, `modalOferta`). The
//! pipeline is guard, stage, POST: an unknown id or a submission already in
//! flight is rejected with a toast before any request is made.

use std::collections::BTreeMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{AppendHeaders, Html, IntoResponse, Response},
};
use serde_json::Value;
use tower_sessions::Session;
use tracing::instrument;

use ofertmatch_core::ResourceKind;

use crate::error::Result;
use crate::filters;
use crate::forms::{FormSchema, Staged, resolve_form, stage};
use crate::models::Theme;
use crate::state::AppState;

/// Validation toast shown when required fields are empty.
const MSG_REQUIRED_FIELDS: &str = "Por favor, preencha todos os campos obrigatórios.";

/// Toast shown when a form posts under an unknown id.
const MSG_NO_ENDPOINT: &str = "Formulário sem endpoint configurado.";

/// Toast shown when the same form already has a submission in flight.
const MSG_IN_FLIGHT: &str = "Aguarde, envio em andamento.";

/// Toast shown after a successful create.
const MSG_SAVED: &str = "Cadastro salvo com sucesso!";

// =============================================================================
// View models
// =============================================================================

/// One input of a create form, ready for rendering.
#[derive(Debug, Clone)]
pub struct FieldView {
    pub key: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub value: String,
    /// `campo-invalido`, `campo-ok` or empty.
    pub css_class: &'static str,
}

impl FieldView {
    /// Blank fields for a fresh form.
    fn blank(schema: &FormSchema) -> Vec<Self> {
        schema
            .fields
            .iter()
            .map(|field| Self {
                key: field.key,
                label: field.label,
                required: field.required,
                value: String::new(),
                css_class: "",
            })
            .collect()
    }

    /// Fields re-rendered after a rejected submission: every invalid field
    /// is marked, filled fields keep their value and get the ok mark.
    fn marked(
        schema: &FormSchema,
        missing: &[&'static str],
        entered: &BTreeMap<String, String>,
    ) -> Vec<Self> {
        schema
            .fields
            .iter()
            .map(|field| {
                let value = entered.get(field.key).cloned().unwrap_or_default();
                let css_class = if missing.contains(&field.key) {
                    "campo-invalido"
                } else if value.is_empty() {
                    ""
                } else {
                    "campo-ok"
                };
                Self {
                    key: field.key,
                    label: field.label,
                    required: field.required,
                    value,
                    css_class,
                }
            })
            .collect()
    }
}

/// Extract a cell as display text. Missing and null render empty; numbers
/// render in their wire form.
fn cell_text(row: &Value, key: &str) -> String {
    match row.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Project raw API rows onto the kind's column order.
fn build_rows(kind: ResourceKind, rows: &[Value]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            kind.columns()
                .iter()
                .map(|(key, _)| cell_text(row, key))
                .collect()
        })
        .collect()
}

fn column_headers(kind: ResourceKind) -> Vec<&'static str> {
    kind.columns().iter().map(|(_, header)| *header).collect()
}

// =============================================================================
// Templates
// =============================================================================

/// Resource list page template.
#[derive(Template, WebTemplate)]
#[template(path = "resources/index.html")]
pub struct ResourceIndexTemplate {
    pub theme: Theme,
    pub title: &'static str,
    pub slug: &'static str,
    pub form_id: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    pub fields: Vec<FieldView>,
    pub error: Option<String>,
    /// Unused on the full page; the include needs it in scope.
    pub oob: bool,
}

/// Resource table fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/resource_table.html")]
pub struct ResourceTableTemplate {
    pub slug: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    /// Render as an out-of-band swap targeting the table container.
    pub oob: bool,
}

/// Create form fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/resource_form.html")]
pub struct ResourceFormTemplate {
    pub form_id: &'static str,
    pub fields: Vec<FieldView>,
}

/// Toast fragment template, always swapped out-of-band into `#toast`.
#[derive(Template, WebTemplate)]
#[template(path = "partials/toast.html")]
pub struct ToastTemplate {
    pub message: String,
    /// `sucesso` or `erro`.
    pub kind: &'static str,
}

// =============================================================================
// List handlers
// =============================================================================

/// Shared list-page handler.
#[instrument(skip(state, session))]
async fn index(kind: ResourceKind, state: AppState, session: Session) -> Response {
    let theme = Theme::load(&session).await;
    let schema = crate::forms::schema_for(kind);

    let (rows, error) = match state.api().fetch_rows::<Value>(kind).await {
        Ok(rows) => (build_rows(kind, &rows), None),
        Err(err) => {
            tracing::warn!(resource = %kind, error = %err, "list fetch failed");
            (Vec::new(), Some(err.user_message()))
        }
    };

    ResourceIndexTemplate {
        theme,
        title: kind.title(),
        slug: kind.slug(),
        form_id: kind.form_id(),
        headers: column_headers(kind),
        rows,
        fields: FieldView::blank(schema),
        error,
        oob: false,
    }
    .into_response()
}

/// Shared table-fragment handler. A failed fetch answers an empty table
/// plus an error toast so the page keeps working.
#[instrument(skip(state))]
async fn table(kind: ResourceKind, state: AppState) -> Result<Response> {
    match state.api().fetch_rows::<Value>(kind).await {
        Ok(rows) => Ok(ResourceTableTemplate {
            slug: kind.slug(),
            headers: column_headers(kind),
            rows: build_rows(kind, &rows),
            oob: false,
        }
        .into_response()),
        Err(err) => {
            tracing::warn!(resource = %kind, error = %err, "list fetch failed");
            let table = ResourceTableTemplate {
                slug: kind.slug(),
                headers: column_headers(kind),
                rows: Vec::new(),
                oob: false,
            }
            .render()?;
            let toast = ToastTemplate {
                message: err.user_message(),
                kind: "erro",
            }
            .render()?;
            Ok(Html([table, toast].concat()).into_response())
        }
    }
}

pub async fn companies_index(State(state): State<AppState>, session: Session) -> Response {
    index(ResourceKind::Companies, state, session).await
}

pub async fn products_index(State(state): State<AppState>, session: Session) -> Response {
    index(ResourceKind::Products, state, session).await
}

pub async fn offers_index(State(state): State<AppState>, session: Session) -> Response {
    index(ResourceKind::Offers, state, session).await
}

pub async fn companies_table(State(state): State<AppState>) -> Result<Response> {
    table(ResourceKind::Companies, state).await
}

pub async fn products_table(State(state): State<AppState>) -> Result<Response> {
    table(ResourceKind::Products, state).await
}

pub async fn offers_table(State(state): State<AppState>) -> Result<Response> {
    table(ResourceKind::Offers, state).await
}

// =============================================================================
// Submission handler
// =============================================================================

/// A toast-only answer. `HX-Reswap: none` keeps the posting form in place,
/// the toast itself swaps out-of-band.
fn toast_only(message: &str, kind: &'static str) -> Result<Response> {
    let toast = ToastTemplate {
        message: message.to_string(),
        kind,
    }
    .render()?;
    Ok((AppendHeaders([("HX-Reswap", "none")]), Html(toast)).into_response())
}

/// Trimmed values the user entered, keyed by payload key. Used to keep the
/// form populated when the API rejects a structurally valid submission.
fn entered_values(schema: &FormSchema, inputs: &[(String, String)]) -> BTreeMap<String, String> {
    let mut entered = BTreeMap::new();
    for (name, value) in inputs {
        if let Some(key) = schema.resolve_key(name) {
            entered.insert(key.to_string(), value.trim().to_string());
        }
    }
    entered
}

/// Handle a create-form submission (HTMX).
///
/// Answer shapes:
/// - unknown form id or a duplicate in-flight submission: toast only
/// - validation failure: re-rendered form with marks, plus a toast
/// - API failure: form keeps its values, toast carries the API message
/// - success: blank form, success toast, refreshed table out-of-band and a
///   `close-modal` trigger
#[instrument(skip(state, session, inputs), fields(form_id = %form_id))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Path(form_id): Path<String>,
    Form(inputs): Form<Vec<(String, String)>>,
) -> Result<Response> {
    let Some(schema) = resolve_form(&form_id) else {
        tracing::warn!("submission from a form with no endpoint mapping");
        return toast_only(MSG_NO_ENDPOINT, "erro");
    };
    let kind = schema.kind;

    // One submission per (client, form) at a time; the permit releases on
    // drop. Other clients are not affected.
    let Some(_permit) = state.submit_guard().begin(session.id(), kind) else {
        return toast_only(MSG_IN_FLIGHT, "erro");
    };

    match stage(schema, &inputs) {
        Staged::Invalid { missing, entered } => {
            let form = ResourceFormTemplate {
                form_id: kind.form_id(),
                fields: FieldView::marked(schema, &missing, &entered),
            }
            .render()?;
            let toast = ToastTemplate {
                message: MSG_REQUIRED_FIELDS.to_string(),
                kind: "erro",
            }
            .render()?;
            Ok(Html([form, toast].concat()).into_response())
        }
        Staged::Ready { payload } => match state.api().submit(kind, &payload).await {
            Ok(envelope) => {
                tracing::info!(resource = %kind, id = envelope.id.as_deref(), "record created");

                // Refresh the table in the same answer; a failed re-read
                // leaves the old table alone rather than blanking it.
                let refreshed = match state.api().fetch_rows::<Value>(kind).await {
                    Ok(rows) => Some(
                        ResourceTableTemplate {
                            slug: kind.slug(),
                            headers: column_headers(kind),
                            rows: build_rows(kind, &rows),
                            oob: true,
                        }
                        .render()?,
                    ),
                    Err(err) => {
                        tracing::warn!(resource = %kind, error = %err, "refresh after create failed");
                        None
                    }
                };

                let form = ResourceFormTemplate {
                    form_id: kind.form_id(),
                    fields: FieldView::blank(schema),
                }
                .render()?;
                let toast = ToastTemplate {
                    message: MSG_SAVED.to_string(),
                    kind: "sucesso",
                }
                .render()?;

                let mut body = [form, toast].concat();
                if let Some(table) = refreshed {
                    body.push_str(&table);
                }
                Ok((AppendHeaders([("HX-Trigger", "close-modal")]), Html(body)).into_response())
            }
            Err(err) => {
                tracing::warn!(resource = %kind, error = %err, "create failed");
                let entered = entered_values(schema, &inputs);
                let form = ResourceFormTemplate {
                    form_id: kind.form_id(),
                    fields: FieldView::marked(schema, &[], &entered),
                }
                .render()?;
                let toast = ToastTemplate {
                    message: err.user_message(),
                    kind: "erro",
                }
                .render()?;
                Ok(Html([form, toast].concat()).into_response())
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rows_project_onto_the_column_order() {
        let raw = vec![json!({
            "nome": "Leite", "codigo": "L1", "estoque": 10,
            "categoria": "Laticínios", "marca": "Boa", "valor": 4.89
        })];
        let rows = build_rows(ResourceKind::Products, &raw);
        assert_eq!(
            rows[0],
            ["Leite", "L1", "10", "Laticínios", "Boa", "4.89", ""]
        );
    }

    #[test]
    fn missing_and_null_cells_render_empty() {
        let row = json!({"razao_social": "Empresa X", "cnpj": null});
        assert_eq!(cell_text(&row, "razao_social"), "Empresa X");
        assert_eq!(cell_text(&row, "cnpj"), "");
        assert_eq!(cell_text(&row, "endereco"), "");
    }

    #[test]
    fn marked_fields_flag_invalid_and_keep_entered_values() {
        let schema = crate::forms::schema_for(ResourceKind::Companies);
        let entered = BTreeMap::from([("endereco".to_string(), "Rua A".to_string())]);
        let fields = FieldView::marked(schema, &["razao_social", "cnpj"], &entered);

        let by_key = |key: &str| fields.iter().find(|f| f.key == key).expect("field exists");
        assert_eq!(by_key("razao_social").css_class, "campo-invalido");
        assert_eq!(by_key("endereco").css_class, "campo-ok");
        assert_eq!(by_key("endereco").value, "Rua A");
        assert_eq!(by_key("email").css_class, "");
    }

    #[test]
    fn blank_fields_carry_labels_and_required_marks() {
        let schema = crate::forms::schema_for(ResourceKind::Offers);
        let fields = FieldView::blank(schema);
        assert_eq!(fields.len(), schema.fields.len());
        assert!(fields.iter().all(|f| f.value.is_empty()));
        let validade = fields.iter().find(|f| f.key == "validade").expect("exists");
        assert!(!validade.required);
    }
}
