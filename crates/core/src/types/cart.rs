//! Client shopping cart state.
//!
//! A [`Cart`] maps product ids to positive quantities. It is persisted as a
//! plain JSON object (`{"p01": 2, ...}`) in the visitor's session under the
//! `cart` key, and written back after every mutation.
//!
//! Invariant: no entry ever holds a quantity of zero or below. Mutations
//! that would drive a quantity to zero delete the entry instead.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A shopping cart: product id -> quantity.
///
/// Serializes transparently as a JSON object so the persisted shape matches
/// the legacy `localStorage` blob.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: BTreeMap<String, u32>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Parse a persisted cart blob.
    ///
    /// Absent or malformed data is silently treated as an empty cart; this
    /// never fails. Entries that deserialize to a zero quantity are dropped
    /// so the invariant holds even for hand-edited storage.
    #[must_use]
    pub fn from_json(raw: &str) -> Self {
        let mut cart: Self = serde_json::from_str(raw).unwrap_or_default();
        cart.items.retain(|_, qty| *qty > 0);
        cart
    }

    /// Serialize the cart for persistence.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.items).unwrap_or_else(|_| "{}".to_string())
    }

    /// Increment the quantity for `product_id` by one, creating the entry
    /// at 1 if absent.
    pub fn add(&mut self, product_id: &str) {
        *self.items.entry(product_id.to_string()).or_insert(0) += 1;
    }

    /// Add `delta` (positive or negative) to the current quantity, floored
    /// at zero. An entry that reaches zero is removed. The sum saturates,
    /// so extreme deltas clamp instead of overflowing.
    pub fn change_quantity(&mut self, product_id: &str, delta: i64) {
        let current = i64::from(self.quantity(product_id));
        let next = current.saturating_add(delta).max(0);
        if next == 0 {
            self.items.remove(product_id);
        } else {
            let qty = u32::try_from(next).unwrap_or(u32::MAX);
            self.items.insert(product_id.to_string(), qty);
        }
    }

    /// Delete the entry unconditionally.
    pub fn remove(&mut self, product_id: &str) {
        self.items.remove(product_id);
    }

    /// Replace the cart with an empty one.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Quantity for `product_id`, zero if absent.
    #[must_use]
    pub fn quantity(&self, product_id: &str) -> u32 {
        self.items.get(product_id).copied().unwrap_or(0)
    }

    /// Total number of units across all entries.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items.values().sum()
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over `(product_id, quantity)` entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(id, qty)| (id.as_str(), *qty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_creates_entry_at_one() {
        let mut cart = Cart::new();
        cart.add("p01");
        assert_eq!(cart.quantity("p01"), 1);
        cart.add("p01");
        assert_eq!(cart.quantity("p01"), 2);
    }

    #[test]
    fn change_quantity_floors_at_zero_and_removes() {
        let mut cart = Cart::new();
        cart.add("p01");
        cart.change_quantity("p01", 2);
        assert_eq!(cart.quantity("p01"), 3);

        cart.change_quantity("p01", -3);
        assert_eq!(cart.quantity("p01"), 0);
        assert!(cart.is_empty());

        // Going below zero on a missing entry stays empty
        cart.change_quantity("p01", -5);
        assert!(cart.is_empty());
    }

    #[test]
    fn no_sequence_of_mutations_stores_nonpositive_quantities() {
        let mut cart = Cart::new();
        let ops: &[(&str, i64)] = &[
            ("p01", 1),
            ("p02", 3),
            ("p01", -2),
            ("p03", -1),
            ("p02", -3),
            ("p01", 4),
        ];
        for (id, delta) in ops {
            cart.change_quantity(id, *delta);
            assert!(cart.iter().all(|(_, qty)| qty > 0));
        }
    }

    #[test]
    fn extreme_deltas_clamp_instead_of_overflowing() {
        let mut cart = Cart::new();
        cart.add("p01");

        // The sum saturates; the quantity clamps to the u32 ceiling.
        cart.change_quantity("p01", i64::MAX);
        assert_eq!(cart.quantity("p01"), u32::MAX);

        cart.change_quantity("p01", i64::MIN);
        assert!(cart.is_empty());
    }

    #[test]
    fn remove_deletes_unconditionally() {
        let mut cart = Cart::new();
        cart.add("p01");
        cart.add("p01");
        cart.remove("p01");
        assert_eq!(cart.quantity("p01"), 0);
        // Removing an absent entry is a no-op
        cart.remove("p99");
        assert!(cart.is_empty());
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add("p01");
        cart.add("p02");
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn json_round_trip_is_lossless() {
        let mut cart = Cart::new();
        cart.add("p01");
        cart.add("p01");
        cart.add("p05");

        let restored = Cart::from_json(&cart.to_json());
        assert_eq!(restored, cart);
    }

    #[test]
    fn malformed_storage_loads_as_empty() {
        assert!(Cart::from_json("").is_empty());
        assert!(Cart::from_json("not json").is_empty());
        assert!(Cart::from_json("[1,2,3]").is_empty());
        assert!(Cart::from_json(r#"{"p01": "two"}"#).is_empty());
    }

    #[test]
    fn zero_entries_in_storage_are_dropped_on_load() {
        let cart = Cart::from_json(r#"{"p01": 0, "p02": 2}"#);
        assert_eq!(cart.quantity("p01"), 0);
        assert_eq!(cart.quantity("p02"), 2);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn total_quantity_sums_entries() {
        let cart = Cart::from_json(r#"{"p01": 2, "p02": 5}"#);
        assert_eq!(cart.total_quantity(), 7);
    }
}
