//! Session-backed models.

pub mod session;

pub use session::{Theme, keys};
