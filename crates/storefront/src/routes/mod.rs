//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (catalog grid + cart drawer)
//! GET  /health                 - Health check
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! GET  /cart/items             - Cart items fragment
//! POST /cart/add               - Add one unit (returns badge, triggers cart-updated)
//! POST /cart/update            - Change quantity by delta (returns cart_items fragment)
//! POST /cart/remove            - Remove item (returns cart_items fragment)
//! POST /cart/clear             - Empty the cart (returns cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Resource lists
//! GET  /empresas               - Company list page
//! GET  /empresas/tabela        - Company table fragment (HTMX)
//! GET  /produtos               - Product list page
//! GET  /produtos/tabela        - Product table fragment (HTMX)
//! GET  /ofertas                - Offer list page
//! GET  /ofertas/tabela         - Offer table fragment (HTMX)
//!
//! # Forms
//! POST /forms/{form_id}        - Create-form submission (legacy modal ids)
//!
//! # Chrome
//! GET  /status/api             - Remote API status badge (fragment)
//! POST /theme/toggle           - Flip color theme
//! POST /drawer/toggle          - Flip cart drawer
//! POST /drawer/open            - Open cart drawer
//! POST /drawer/close           - Close cart drawer
//! ```

pub mod cart;
pub mod chrome;
pub mod home;
pub mod resources;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/items", get(cart::items))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the resource list routes router.
pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/empresas", get(resources::companies_index))
        .route("/empresas/tabela", get(resources::companies_table))
        .route("/produtos", get(resources::products_index))
        .route("/produtos/tabela", get(resources::products_table))
        .route("/ofertas", get(resources::offers_index))
        .route("/ofertas/tabela", get(resources::offers_table))
}

/// Create the chrome routes router.
pub fn chrome_routes() -> Router<AppState> {
    Router::new()
        .route("/status/api", get(chrome::api_status))
        .route("/theme/toggle", post(chrome::toggle_theme))
        .route("/drawer/toggle", post(chrome::toggle_drawer))
        .route("/drawer/open", post(chrome::open_drawer))
        .route("/drawer/close", post(chrome::close_drawer))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Cart routes
        .nest("/cart", cart_routes())
        // Resource list pages and fragments
        .merge(resource_routes())
        // Create-form submissions
        .route("/forms/{form_id}", post(resources::submit))
        // Chrome
        .merge(chrome_routes())
}
