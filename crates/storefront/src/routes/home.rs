//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Response};
use tower_sessions::Session;
use tracing::instrument;

use ofertmatch_core::CATALOG;

use crate::filters::{self, format_brl};
use crate::models::Theme;
use crate::routes::cart::{CartStore, CartView};
use crate::ui::ToggleState;

/// Product card display data for the catalog grid.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    pub id: &'static str,
    pub name: &'static str,
    pub glyph: &'static str,
    pub price: String,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub products: Vec<ProductCardView>,
    pub cart: CartView,
    pub theme: Theme,
    pub drawer: ToggleState,
}

/// Home page: catalog grid plus the cart drawer.
#[instrument(skip(session))]
pub async fn home(session: Session) -> Response {
    let cart = CartStore::new(&session).load().await;
    let theme = Theme::load(&session).await;
    let drawer = ToggleState::load(&session).await;

    let products = CATALOG
        .iter()
        .map(|product| ProductCardView {
            id: product.id,
            name: product.name,
            glyph: product.glyph,
            price: format_brl(product.price()),
        })
        .collect();

    HomeTemplate {
        products,
        cart: CartView::build(&cart),
        theme,
        drawer,
    }
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_product_gets_a_card() {
        let cards: Vec<ProductCardView> = CATALOG
            .iter()
            .map(|product| ProductCardView {
                id: product.id,
                name: product.name,
                glyph: product.glyph,
                price: format_brl(product.price()),
            })
            .collect();
        assert_eq!(cards.len(), CATALOG.len());
        assert_eq!(cards[0].price, "R$ 6,99");
    }
}
