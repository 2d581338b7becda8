//! Integration tests for the OfertMatch storefront.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the session database and the storefront
//! docker compose up -d postgres
//! cargo run -p ofertmatch-storefront
//!
//! # Run integration tests
//! cargo test -p ofertmatch-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Session-backed cart behavior through the HTTP surface
//! - `form_submission` - Create-form pipeline responses
//!
//! Tests that need a running server are `#[ignore]`d so a plain
//! `cargo test` stays green without one. The base URL is configurable via
//! `STOREFRONT_BASE_URL` (default `http://localhost:3000`).
