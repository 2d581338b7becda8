//! Cart route handlers.
//!
//! Cart operations use HTMX fragments: every mutation loads the cart from
//! the session, applies the change, writes it back, and answers with a
//! freshly rendered fragment plus an `HX-Trigger: cart-updated` header so
//! the badge and drawer can refetch.
//!
//! The cart blob lives in the session under the `cart` key as a JSON
//! object; the write-back completes before the handler responds.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{AppendHeaders, IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use ofertmatch_core::{Cart, FALLBACK_PRODUCT, types::catalog};

use crate::error::Result;
use crate::filters::{self, format_brl};
use crate::models::{Theme, keys};

// =============================================================================
// Cart store (session-backed)
// =============================================================================

/// Session-backed cart storage.
///
/// `load` never fails: an absent or unparsable blob is an empty cart.
/// `save` is write-through; callers persist after every mutation.
pub struct CartStore<'a> {
    session: &'a Session,
}

impl<'a> CartStore<'a> {
    /// Wrap a session.
    #[must_use]
    pub const fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Load the persisted cart, tolerating missing or malformed data.
    pub async fn load(&self) -> Cart {
        self.session
            .get::<String>(keys::CART)
            .await
            .ok()
            .flatten()
            .map(|raw| Cart::from_json(&raw))
            .unwrap_or_default()
    }

    /// Persist the cart.
    ///
    /// # Errors
    ///
    /// Returns the session store error if the write fails.
    pub async fn save(&self, cart: &Cart) -> std::result::Result<(), tower_sessions::session::Error> {
        self.session.insert(keys::CART, cart.to_json()).await
    }
}

// =============================================================================
// View models
// =============================================================================

/// Cart item display data for templates.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub glyph: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

/// Cart display data for templates.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// Render the cart against the static catalog.
    ///
    /// Pure function of cart x catalog. Entries whose id is no longer in
    /// the catalog render as the fallback placeholder instead of failing.
    #[must_use]
    pub fn build(cart: &Cart) -> Self {
        let mut subtotal = Decimal::ZERO;
        let items = cart
            .iter()
            .map(|(id, quantity)| {
                let product = catalog::find(id).unwrap_or(&FALLBACK_PRODUCT);
                let line_total = product.price() * Decimal::from(quantity);
                subtotal += line_total;
                CartItemView {
                    id: id.to_string(),
                    name: product.name.to_string(),
                    glyph: product.glyph.to_string(),
                    quantity,
                    unit_price: format_brl(product.price()),
                    line_total: format_brl(line_total),
                }
            })
            .collect();

        Self {
            items,
            subtotal: format_brl(subtotal),
            item_count: cart.total_quantity(),
        }
    }
}

// =============================================================================
// Form payloads
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub product_id: String,
}

/// Change quantity form data.
#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    pub product_id: String,
    pub delta: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    pub product_id: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub theme: Theme,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Response {
    let store = CartStore::new(&session);
    let cart = store.load().await;
    let theme = Theme::load(&session).await;

    CartShowTemplate {
        cart: CartView::build(&cart),
        theme,
    }
    .into_response()
}

/// Cart items fragment (drawer and page body share it).
#[instrument(skip(session))]
pub async fn items(session: Session) -> Response {
    let cart = CartStore::new(&session).load().await;
    CartItemsTemplate {
        cart: CartView::build(&cart),
    }
    .into_response()
}

/// Add one unit of a product (HTMX).
///
/// Returns the refreshed badge count and triggers `cart-updated`.
#[instrument(skip(session))]
pub async fn add(session: Session, Form(form): Form<AddForm>) -> Result<Response> {
    let store = CartStore::new(&session);
    let mut cart = store.load().await;
    cart.add(&form.product_id);
    store.save(&cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: cart.total_quantity(),
        },
    )
        .into_response())
}

/// Adjust a product's quantity by a signed delta (HTMX).
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateForm>) -> Result<Response> {
    let store = CartStore::new(&session);
    let mut cart = store.load().await;
    cart.change_quantity(&form.product_id, form.delta);
    store.save(&cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::build(&cart),
        },
    )
        .into_response())
}

/// Remove a product entirely (HTMX).
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveForm>) -> Result<Response> {
    let store = CartStore::new(&session);
    let mut cart = store.load().await;
    cart.remove(&form.product_id);
    store.save(&cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::build(&cart),
        },
    )
        .into_response())
}

/// Empty the cart (HTMX).
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Response> {
    let store = CartStore::new(&session);
    let mut cart = store.load().await;
    cart.clear();
    store.save(&cart).await?;

    Ok((
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::build(&cart),
        },
    )
        .into_response())
}

/// Cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Response {
    let cart = CartStore::new(&session).load().await;
    CartCountTemplate {
        count: cart.total_quantity(),
    }
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_entry_renders_one_row_with_its_quantity() {
        let cart = Cart::from_json(r#"{"p01": 2}"#);
        let view = CartView::build(&cart);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].quantity, 2);
        assert_eq!(view.items[0].unit_price, "R$ 6,99");
        assert_eq!(view.items[0].line_total, "R$ 13,98");
        assert_eq!(view.subtotal, "R$ 13,98");
    }

    #[test]
    fn unknown_id_renders_the_fallback_row_instead_of_failing() {
        let cart = Cart::from_json(r#"{"pXX": 1}"#);
        let view = CartView::build(&cart);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].name, "Item");
        assert_eq!(view.items[0].glyph, "🛍️");
        assert_eq!(view.items[0].line_total, "R$ 0,00");
    }

    #[test]
    fn empty_cart_builds_an_empty_view() {
        let view = CartView::build(&Cart::new());
        assert!(view.items.is_empty());
        assert_eq!(view.item_count, 0);
        assert_eq!(view.subtotal, "R$ 0,00");
    }

    #[test]
    fn item_count_counts_units_not_rows() {
        let cart = Cart::from_json(r#"{"p01": 2, "p05": 3}"#);
        let view = CartView::build(&cart);
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.item_count, 5);
    }
}
