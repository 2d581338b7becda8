//! The three admin resource kinds and their static wiring.
//!
//! Companies, products and offers share one list/create surface; this table
//! drives endpoint dispatch, URL slugs, legacy modal-id resolution and the
//! list-view columns.

use std::fmt;

/// A resource kind served by the OfertMatch API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Companies,
    Products,
    Offers,
}

impl ResourceKind {
    /// All kinds, in navigation order.
    pub const ALL: [Self; 3] = [Self::Companies, Self::Products, Self::Offers];

    /// API path on the remote backend.
    #[must_use]
    pub const fn api_path(self) -> &'static str {
        match self {
            Self::Companies => "/api/empresas",
            Self::Products => "/api/produtos",
            Self::Offers => "/api/ofertas",
        }
    }

    /// URL slug used by the storefront's own list pages.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Companies => "empresas",
            Self::Products => "produtos",
            Self::Offers => "ofertas",
        }
    }

    /// Legacy modal id this kind's create form posts under.
    #[must_use]
    pub const fn form_id(self) -> &'static str {
        match self {
            Self::Companies => "modalEmpresa",
            Self::Products => "modalProduto",
            Self::Offers => "modalOferta",
        }
    }

    /// Page heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Companies => "Empresas",
            Self::Products => "Produtos",
            Self::Offers => "Ofertas",
        }
    }

    /// List-view columns as `(record key, column header)` pairs.
    #[must_use]
    pub const fn columns(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Companies => &[
                ("razao_social", "Razão social"),
                ("cnpj", "CNPJ"),
                ("endereco", "Endereço"),
                ("email", "E-mail"),
                ("responsavel", "Responsável"),
            ],
            Self::Products => &[
                ("nome", "Produto"),
                ("codigo", "Código"),
                ("estoque", "Estoque"),
                ("categoria", "Categoria"),
                ("marca", "Marca"),
                ("valor", "Valor"),
                ("validade", "Validade"),
            ],
            Self::Offers => &[
                ("produto", "Produto"),
                ("marca", "Marca"),
                ("codigo", "Código"),
                ("estoque", "Estoque"),
                ("categoria", "Categoria"),
                ("valor", "Valor"),
                ("validade", "Validade"),
                ("data_inicio", "Data início"),
                ("data_fim", "Data fim"),
            ],
        }
    }

    /// Resolve a storefront URL slug.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    /// Resolve a legacy modal id. `None` means the form has no configured
    /// endpoint and the submission must be rejected before any request.
    #[must_use]
    pub fn from_form_id(form_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.form_id() == form_id)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
