//! Custom Askama template filters and formatting helpers.

use std::fmt::Display;

use rust_decimal::Decimal;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Format a decimal amount as Brazilian currency ("R$ 6,99").
#[must_use]
pub fn format_brl(amount: Decimal) -> String {
    format!("R$ {amount:.2}").replace('.', ",")
}
