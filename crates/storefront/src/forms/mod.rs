//! Form-to-API submission pipeline.
//!
//! Each create form runs through the same per-submission state machine:
//!
//! ```text
//! Idle -> Validating -> (Invalid | Submitting) -> (Failed | Succeeded)
//! ```
//!
//! [`schema`] declares the static per-form configuration (payload keys,
//! required fields, the legacy placeholder-label table), [`pipeline`] is the
//! pure Validating step (key resolution, required checks, coercion), and
//! [`guard`] rejects a client's re-entrant submissions of the same form
//! while one is still in flight. The Submitting/Failed/Succeeded transitions live in the
//! submit route handler, which owns the network call and the re-render.

pub mod guard;
pub mod pipeline;
pub mod schema;

pub use guard::{SubmitGuard, SubmitPermit};
pub use pipeline::{Staged, stage};
pub use schema::{FieldSpec, FormSchema, resolve_form, schema_for};
