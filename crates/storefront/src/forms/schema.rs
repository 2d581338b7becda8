//! Static per-form configuration.
//!
//! Field keys and required sets mirror what the OfertMatch backend enforces
//! per resource. The legacy tables keep compatibility with old markup whose
//! inputs are named by their visible placeholder text instead of a payload
//! key; they are plain data so a form can be wired with a different table.

use ofertmatch_core::ResourceKind;

/// Payload keys coerced as locale-decimal-comma numbers. Fixed subset; every
/// other key passes through as a trimmed string.
pub const NUMERIC_KEYS: &[&str] = &["estoque", "valor"];

/// Whether `key` belongs to the numeric subset.
#[must_use]
pub fn is_numeric(key: &str) -> bool {
    NUMERIC_KEYS.contains(&key)
}

/// One input of a create form.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Payload key sent to the API.
    pub key: &'static str,
    /// Visible label, doubles as the input placeholder.
    pub label: &'static str,
    /// Whether an empty trimmed value blocks submission.
    pub required: bool,
}

/// Static configuration of one create form.
#[derive(Debug, Clone, Copy)]
pub struct FormSchema {
    /// Resource this form creates; also decides the target endpoint.
    pub kind: ResourceKind,
    /// Fields in display order.
    pub fields: &'static [FieldSpec],
    /// Legacy placeholder-text table: `(label, payload key)` pairs.
    pub legacy_labels: &'static [(&'static str, &'static str)],
}

impl FormSchema {
    /// Resolve a submitted input name to its payload key.
    ///
    /// Two tiers: an input named by the payload key itself resolves
    /// directly; otherwise the legacy placeholder table is consulted.
    /// `None` means the input carries no resolvable key and is ignored.
    #[must_use]
    pub fn resolve_key(&self, input_name: &str) -> Option<&'static str> {
        if let Some(field) = self.fields.iter().find(|f| f.key == input_name) {
            return Some(field.key);
        }
        self.legacy_labels
            .iter()
            .find(|(label, _)| *label == input_name)
            .map(|(_, key)| *key)
    }

    /// Look up a field spec by payload key.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }
}

const COMPANY_FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "razao_social", label: "Razão social", required: true },
    FieldSpec { key: "cnpj", label: "CNPJ", required: true },
    FieldSpec { key: "endereco", label: "Endereço", required: true },
    FieldSpec { key: "email", label: "E-mail empresarial", required: true },
    FieldSpec { key: "responsavel", label: "Responsável", required: true },
];

const COMPANY_LEGACY: &[(&str, &str)] = &[
    ("Razão social", "razao_social"),
    ("CNPJ", "cnpj"),
    ("Endereço", "endereco"),
    ("E-mail empresarial", "email"),
    ("Responsável", "responsavel"),
];

const PRODUCT_FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "nome", label: "Produto", required: true },
    FieldSpec { key: "codigo", label: "Código de produto", required: true },
    FieldSpec { key: "estoque", label: "Estoque", required: true },
    FieldSpec { key: "categoria", label: "Categoria", required: true },
    FieldSpec { key: "marca", label: "Marca", required: true },
    FieldSpec { key: "valor", label: "Valor", required: true },
    FieldSpec { key: "validade", label: "Validade", required: false },
];

const PRODUCT_LEGACY: &[(&str, &str)] = &[
    ("Produto", "nome"),
    ("Código de produto", "codigo"),
    ("Estoque", "estoque"),
    ("Categoria", "categoria"),
    ("Marca", "marca"),
    ("Valor", "valor"),
    ("Validade", "validade"),
];

const OFFER_FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "produto", label: "Produto", required: true },
    FieldSpec { key: "marca", label: "Marca", required: true },
    FieldSpec { key: "codigo", label: "Código do produto", required: true },
    FieldSpec { key: "estoque", label: "Estoque", required: true },
    FieldSpec { key: "categoria", label: "Categoria", required: true },
    FieldSpec { key: "valor", label: "Valor", required: true },
    FieldSpec { key: "validade", label: "Validade", required: false },
    FieldSpec { key: "data_inicio", label: "Data início", required: false },
    FieldSpec { key: "data_fim", label: "Data fim", required: false },
];

const OFFER_LEGACY: &[(&str, &str)] = &[
    ("Produto", "produto"),
    ("Marca", "marca"),
    ("Código do produto", "codigo"),
    ("Estoque", "estoque"),
    ("Categoria", "categoria"),
    ("Valor", "valor"),
    ("Validade", "validade"),
    ("Data início", "data_inicio"),
    ("Data fim", "data_fim"),
];

const COMPANY_FORM: FormSchema = FormSchema {
    kind: ResourceKind::Companies,
    fields: COMPANY_FIELDS,
    legacy_labels: COMPANY_LEGACY,
};

const PRODUCT_FORM: FormSchema = FormSchema {
    kind: ResourceKind::Products,
    fields: PRODUCT_FIELDS,
    legacy_labels: PRODUCT_LEGACY,
};

const OFFER_FORM: FormSchema = FormSchema {
    kind: ResourceKind::Offers,
    fields: OFFER_FIELDS,
    legacy_labels: OFFER_LEGACY,
};

/// Schema for a resource kind.
#[must_use]
pub const fn schema_for(kind: ResourceKind) -> &'static FormSchema {
    match kind {
        ResourceKind::Companies => &COMPANY_FORM,
        ResourceKind::Products => &PRODUCT_FORM,
        ResourceKind::Offers => &OFFER_FORM,
    }
}

/// Resolve a legacy modal id to its form schema.
///
/// `None` is the ConfigurationError case: the submission must be rejected
/// with a user-visible message and no request.
#[must_use]
pub fn resolve_form(form_id: &str) -> Option<&'static FormSchema> {
    ResourceKind::from_form_id(form_id).map(schema_for)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_key_tier_wins() {
        let schema = schema_for(ResourceKind::Companies);
        assert_eq!(schema.resolve_key("razao_social"), Some("razao_social"));
    }

    #[test]
    fn legacy_placeholder_tier_maps_labels() {
        let schema = schema_for(ResourceKind::Companies);
        assert_eq!(schema.resolve_key("Razão social"), Some("razao_social"));
        assert_eq!(schema.resolve_key("E-mail empresarial"), Some("email"));
    }

    #[test]
    fn unresolvable_names_are_ignored() {
        let schema = schema_for(ResourceKind::Products);
        assert_eq!(schema.resolve_key("telefone"), None);
    }

    #[test]
    fn offer_and_product_share_labels_but_not_keys() {
        // "Produto" maps to `nome` on the product form and `produto` on the
        // offer form; resolution is per-schema.
        let product = schema_for(ResourceKind::Products);
        let offer = schema_for(ResourceKind::Offers);
        assert_eq!(product.resolve_key("Produto"), Some("nome"));
        assert_eq!(offer.resolve_key("Produto"), Some("produto"));
    }

    #[test]
    fn required_sets_match_the_backend() {
        let required = |kind: ResourceKind| {
            schema_for(kind)
                .fields
                .iter()
                .filter(|f| f.required)
                .map(|f| f.key)
                .collect::<Vec<_>>()
        };
        assert_eq!(
            required(ResourceKind::Companies),
            ["razao_social", "cnpj", "endereco", "email", "responsavel"]
        );
        assert_eq!(
            required(ResourceKind::Products),
            ["nome", "codigo", "estoque", "categoria", "marca", "valor"]
        );
        assert_eq!(
            required(ResourceKind::Offers),
            ["produto", "marca", "codigo", "estoque", "categoria", "valor"]
        );
    }

    #[test]
    fn resolve_form_rejects_unknown_ids() {
        assert!(resolve_form("modalEmpresa").is_some());
        assert!(resolve_form("modalCliente").is_none());
    }

    #[test]
    fn numeric_subset_is_fixed() {
        assert!(is_numeric("estoque"));
        assert!(is_numeric("valor"));
        assert!(!is_numeric("cnpj"));
    }
}
