//! Shared domain types for the OfertMatch storefront.
//!
//! This crate holds the pieces of the domain that carry no I/O: the
//! client-side shopping [`Cart`], the static product catalog, the wire
//! [`Envelope`] returned by every OfertMatch API endpoint, and the
//! [`ResourceKind`] table describing the three admin resources.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::cart::Cart;
pub use types::catalog::{CATALOG, FALLBACK_PRODUCT, Product};
pub use types::envelope::Envelope;
pub use types::resource::ResourceKind;
