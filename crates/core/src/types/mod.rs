//! Core type definitions.

pub mod cart;
pub mod catalog;
pub mod envelope;
pub mod resource;
