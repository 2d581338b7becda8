//! Static product catalog.
//!
//! The storefront sells a fixed set of offers defined at compile time; the
//! catalog is never mutated or persisted. Prices are stored in centavos and
//! exposed as [`rust_decimal::Decimal`] to keep currency math exact.

use rust_decimal::Decimal;

/// A catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    /// Unique product id (`p01`..`p08`).
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Unit price in centavos (non-negative).
    pub price_cents: i64,
    /// Display glyph shown in place of product photography.
    pub glyph: &'static str,
}

impl Product {
    /// Unit price as an exact decimal in reais.
    #[must_use]
    pub fn price(&self) -> Decimal {
        Decimal::new(self.price_cents, 2)
    }
}

/// The full offer catalog.
pub const CATALOG: &[Product] = &[
    Product {
        id: "p01",
        name: "Pão Bisnaguinha Tradicional Qualita Pacote 300g",
        price_cents: 699,
        glyph: "🥖",
    },
    Product {
        id: "p02",
        name: "Requeijão Cremoso TIROLEZ Copo 200g",
        price_cents: 819,
        glyph: "🧀",
    },
    Product {
        id: "p03",
        name: "Suco Uva e Maçã Natural One 900ml",
        price_cents: 1444,
        glyph: "🧃",
    },
    Product {
        id: "p04",
        name: "Coca-Cola Orig e Fanta 2l cada",
        price_cents: 1949,
        glyph: "🥤",
    },
    Product {
        id: "p05",
        name: "Leite UHT Integral 1L",
        price_cents: 489,
        glyph: "🥛",
    },
    Product {
        id: "p06",
        name: "Contra Filé em Bife Bandeja 600g",
        price_cents: 3834,
        glyph: "🥩",
    },
    Product {
        id: "p07",
        name: "Pizza Napolitana Perdigão 460g",
        price_cents: 1829,
        glyph: "🍕",
    },
    Product {
        id: "p08",
        name: "Cerveja Heineken Lata Sleek 350ml",
        price_cents: 599,
        glyph: "🍺",
    },
];

/// Placeholder shown when a cart entry references an id that is no longer
/// in the catalog. Rendering degrades instead of failing.
pub const FALLBACK_PRODUCT: Product = Product {
    id: "",
    name: "Item",
    price_cents: 0,
    glyph: "🛍️",
};

/// Look up a catalog entry by id.
#[must_use]
pub fn find(product_id: &str) -> Option<&'static Product> {
    CATALOG.iter().find(|p| p.id == product_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn prices_are_non_negative() {
        assert!(CATALOG.iter().all(|p| p.price_cents >= 0));
    }

    #[test]
    fn find_resolves_known_ids() {
        let product = find("p01").expect("p01 should exist");
        assert_eq!(product.price(), Decimal::new(699, 2));
        assert!(find("p99").is_none());
    }

    #[test]
    fn fallback_is_free_and_generic() {
        assert_eq!(FALLBACK_PRODUCT.price_cents, 0);
        assert_eq!(FALLBACK_PRODUCT.name, "Item");
    }
}
