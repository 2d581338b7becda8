//! The Validating step of the submission pipeline.
//!
//! [`stage`] is a pure function from the submitted input pairs to either a
//! ready payload or the full set of invalid fields. It never touches the
//! network; the route handler decides what happens next.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::schema::{FormSchema, is_numeric};

/// Outcome of staging one submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Staged {
    /// At least one required field was empty or missing. Every offending
    /// field is listed, not just the first; no request may be sent.
    Invalid {
        missing: Vec<&'static str>,
        /// Trimmed values the user did enter, for re-rendering the form.
        entered: BTreeMap<String, String>,
    },
    /// All required fields present; payload is coerced and ready to POST.
    Ready { payload: Value },
}

/// Stage a submission: resolve keys, validate required fields, coerce.
///
/// Inputs with no resolvable key are ignored. Values are trimmed before
/// anything else. Required fields that are empty or absent all get flagged;
/// otherwise each resolved value is coerced per its key and assembled into
/// the payload object (empty optional values included, as the legacy client
/// sent them).
#[must_use]
pub fn stage(schema: &FormSchema, inputs: &[(String, String)]) -> Staged {
    let mut entered: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in inputs {
        if let Some(key) = schema.resolve_key(name) {
            entered.insert(key.to_string(), value.trim().to_string());
        }
    }

    let missing: Vec<&'static str> = schema
        .fields
        .iter()
        .filter(|field| field.required)
        .filter(|field| entered.get(field.key).is_none_or(|v| v.is_empty()))
        .map(|field| field.key)
        .collect();

    if !missing.is_empty() {
        return Staged::Invalid { missing, entered };
    }

    let mut payload = Map::new();
    for (key, value) in &entered {
        payload.insert(key.clone(), coerce(key, value));
    }
    Staged::Ready {
        payload: Value::Object(payload),
    }
}

/// Coerce a trimmed field value into its wire type.
///
/// Keys in the numeric subset parse as locale-decimal-comma numbers (a
/// literal comma is the decimal point); failure to parse coerces to 0.
/// Everything else passes through as the trimmed string.
#[must_use]
pub fn coerce(key: &str, value: &str) -> Value {
    if is_numeric(key) {
        coerce_number(value)
    } else {
        Value::String(value.to_string())
    }
}

fn coerce_number(value: &str) -> Value {
    let normalized = value.replacen(',', ".", 1);
    let n: f64 = normalized.parse().unwrap_or(0.0);
    let n = if n.is_finite() { n } else { 0.0 };

    // Whole values go on the wire as integers, matching what the legacy
    // client's Number() produced under JSON encoding.
    #[allow(clippy::cast_possible_truncation)]
    if n.fract() == 0.0 && n.abs() < 9e15 {
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::schema::schema_for;
    use ofertmatch_core::ResourceKind;

    fn inputs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn complete_company_form_stages_a_payload() {
        let schema = schema_for(ResourceKind::Companies);
        let staged = stage(
            schema,
            &inputs(&[
                ("razao_social", "  Mercado Bom Preço LTDA "),
                ("cnpj", "12.345.678/0001-90"),
                ("endereco", "Rua das Flores, 100"),
                ("email", "contato@bompreco.com.br"),
                ("responsavel", "Ana"),
            ]),
        );
        let Staged::Ready { payload } = staged else {
            panic!("expected Ready, got {staged:?}");
        };
        assert_eq!(payload["razao_social"], "Mercado Bom Preço LTDA");
        assert_eq!(payload["cnpj"], "12.345.678/0001-90");
    }

    #[test]
    fn all_empty_required_fields_are_flagged_not_just_the_first() {
        let schema = schema_for(ResourceKind::Companies);
        let staged = stage(
            schema,
            &inputs(&[
                ("razao_social", "   "),
                ("cnpj", ""),
                ("endereco", "Rua A"),
                ("email", "a@b.com"),
                ("responsavel", "Ana"),
            ]),
        );
        let Staged::Invalid { missing, entered } = staged else {
            panic!("expected Invalid, got {staged:?}");
        };
        assert_eq!(missing, ["razao_social", "cnpj"]);
        // What the user did type survives for the re-render.
        assert_eq!(entered.get("endereco").map(String::as_str), Some("Rua A"));
    }

    #[test]
    fn absent_required_fields_are_flagged_too() {
        let schema = schema_for(ResourceKind::Companies);
        let staged = stage(schema, &inputs(&[("razao_social", "Empresa X")]));
        let Staged::Invalid { missing, .. } = staged else {
            panic!("expected Invalid, got {staged:?}");
        };
        assert_eq!(missing, ["cnpj", "endereco", "email", "responsavel"]);
    }

    #[test]
    fn legacy_placeholder_names_resolve() {
        let schema = schema_for(ResourceKind::Companies);
        let staged = stage(
            schema,
            &inputs(&[
                ("Razão social", "Empresa X"),
                ("CNPJ", "123"),
                ("Endereço", "Rua A"),
                ("E-mail empresarial", "x@x.com"),
                ("Responsável", "Ana"),
            ]),
        );
        let Staged::Ready { payload } = staged else {
            panic!("expected Ready, got {staged:?}");
        };
        assert_eq!(payload["razao_social"], "Empresa X");
    }

    #[test]
    fn unresolvable_inputs_are_ignored() {
        let schema = schema_for(ResourceKind::Companies);
        let staged = stage(
            schema,
            &inputs(&[
                ("razao_social", "Empresa X"),
                ("cnpj", "123"),
                ("endereco", "Rua A"),
                ("email", "x@x.com"),
                ("responsavel", "Ana"),
                ("campo_misterioso", "ignorado"),
            ]),
        );
        let Staged::Ready { payload } = staged else {
            panic!("expected Ready, got {staged:?}");
        };
        assert!(payload.get("campo_misterioso").is_none());
    }

    #[test]
    fn comma_decimal_parses_and_garbage_coerces_to_zero() {
        assert_eq!(coerce("estoque", "10,5"), Value::from(10.5));
        assert_eq!(coerce("estoque", "abc"), Value::from(0));
        assert_eq!(coerce("valor", "8,19"), Value::from(8.19));
        assert_eq!(coerce("valor", ""), Value::from(0));
    }

    #[test]
    fn whole_numbers_serialize_as_integers() {
        assert_eq!(coerce("estoque", "10"), Value::from(10));
        assert_eq!(coerce("estoque", "10,0"), Value::from(10));
    }

    #[test]
    fn non_numeric_keys_pass_through_as_strings() {
        assert_eq!(coerce("cnpj", "12,5"), Value::from("12,5"));
    }

    #[test]
    fn optional_empty_values_still_reach_the_payload() {
        let schema = schema_for(ResourceKind::Products);
        let staged = stage(
            schema,
            &inputs(&[
                ("nome", "Leite"),
                ("codigo", "L1"),
                ("estoque", "10"),
                ("categoria", "Laticínios"),
                ("marca", "Boa"),
                ("valor", "4,89"),
                ("validade", ""),
            ]),
        );
        let Staged::Ready { payload } = staged else {
            panic!("expected Ready, got {staged:?}");
        };
        assert_eq!(payload["validade"], "");
        assert_eq!(payload["estoque"], Value::from(10));
        assert_eq!(payload["valor"], Value::from(4.89));
    }
}
