//! Shopping cart model and mutation rules.
//!
//! # Design
//! - Lines are keyed by `id`; adding an existing id merges into that line.
//! - A line never holds a zero quantity: dropping to zero removes it.
//! - Aggregates (`subtotal`, `item_count`) are computed on read, never stored.
//! - Operations on unknown ids are no-ops so repeated UI events stay harmless.
//! - Quantities are capped so every line total stays representable; the
//!   subtotal saturates at `Decimal::MAX` instead of overflowing.
//! - Deserialized carts go through `add_item`, so JSON fixtures obey the same
//!   rules as live mutations.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by cart mutations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The item failed validation and was not added.
    #[error("invalid cart item `{id}`: {reason}")]
    InvalidItem {
        /// Identifier of the rejected item.
        id: String,
        /// Machine-readable reason for the rejection.
        reason: &'static str,
    },
}

/// One product line in the cart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Stable product identifier, unique within a cart.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
    /// Display asset reference.
    pub image: String,
    /// Number of units on this line.
    pub quantity: u32,
}

impl CartItem {
    /// Build a line item.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        image: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            quantity,
        }
    }

    /// Check the item can enter a cart.
    ///
    /// # Errors
    /// Returns [`CartError::InvalidItem`] when the id is blank, the quantity is
    /// zero, the price is negative, or the line total does not fit a `Decimal`.
    pub fn validate(&self) -> Result<(), CartError> {
        let reason = if self.id.trim().is_empty() {
            Some("id must not be empty")
        } else if self.quantity == 0 {
            Some("quantity must be at least 1")
        } else if self.price.is_sign_negative() && !self.price.is_zero() {
            Some("price must not be negative")
        } else if self.quantity > max_quantity(self.price) {
            Some("line total is too large")
        } else {
            None
        };
        reason.map_or(Ok(()), |reason| {
            Err(CartError::InvalidItem {
                id: self.id.clone(),
                reason,
            })
        })
    }

    /// Price multiplied by quantity.
    ///
    /// Saturates at `Decimal::MAX`; lines held by a [`Cart`] never reach it.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price
            .checked_mul(Decimal::from(self.quantity))
            .unwrap_or(Decimal::MAX)
    }
}

/// Largest quantity whose line total at `price` fits a `Decimal`.
fn max_quantity(price: Decimal) -> u32 {
    if price.is_zero() {
        return u32::MAX;
    }
    Decimal::MAX
        .checked_div(price)
        .and_then(|limit| limit.floor().to_u32())
        .map_or(u32::MAX, |limit| {
            // Division rounds; step down until the product is exact.
            let mut limit = limit;
            while limit > 0 && price.checked_mul(Decimal::from(limit)).is_none() {
                limit -= 1;
            }
            limit
        })
}

/// Ordered collection of cart lines.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CartLines")]
pub struct Cart {
    items: Vec<CartItem>,
}

/// Wire shape of a [`Cart`] before its lines are validated.
#[derive(Deserialize)]
struct CartLines {
    items: Vec<CartItem>,
}

impl TryFrom<CartLines> for Cart {
    type Error = CartError;

    fn try_from(lines: CartLines) -> Result<Self, Self::Error> {
        let mut cart = Self::new();
        for item in lines.items {
            if cart.get(&item.id).is_some() {
                return Err(CartError::InvalidItem {
                    id: item.id,
                    reason: "duplicate line id",
                });
            }
            cart.add_item(item)?;
        }
        Ok(cart)
    }
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Look up a line by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add an item, merging quantities when the id is already present.
    ///
    /// # Errors
    /// Returns [`CartError::InvalidItem`] when the item fails validation; the
    /// cart is left untouched in that case.
    pub fn add_item(&mut self, item: CartItem) -> Result<(), CartError> {
        item.validate()?;
        if let Some(existing) = self.items.iter_mut().find(|line| line.id == item.id) {
            existing.quantity = existing
                .quantity
                .saturating_add(item.quantity)
                .min(max_quantity(existing.price));
        } else {
            self.items.push(item);
        }
        Ok(())
    }

    /// Remove the line with `id`. Returns whether a line was removed.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Set the quantity of the line with `id`; zero or less removes the line.
    ///
    /// Large values are capped at `u32::MAX` or at the largest quantity whose
    /// line total is representable, whichever is smaller.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = u32::try_from(quantity)
                .unwrap_or(u32::MAX)
                .min(max_quantity(item.price));
        }
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of `price * quantity` across all lines, saturating at `Decimal::MAX`.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items
            .iter()
            .map(CartItem::line_total)
            .try_fold(Decimal::ZERO, Decimal::checked_add)
            .unwrap_or(Decimal::MAX)
    }
}

/// Render a price for display with two decimal places.
#[must_use]
pub fn format_price(value: Decimal) -> String {
    format!("${:.2}", value.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(quantity: u32) -> CartItem {
        CartItem::new("a", "Widget", Decimal::from(10), "x", quantity)
    }

    #[test]
    fn merge_then_zero_quantity_walkthrough() {
        let mut cart = Cart::new();
        cart.add_item(widget(2)).expect("valid item");
        assert_eq!(cart.subtotal(), Decimal::from(20));

        cart.add_item(widget(1)).expect("valid item");
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.get("a").map(|item| item.quantity), Some(3));
        assert_eq!(cart.subtotal(), Decimal::from(30));

        cart.update_quantity("a", 0);
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Decimal::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn subtotal_sums_distinct_lines() {
        let mut cart = Cart::new();
        let lines = [
            CartItem::new("a", "Mug", Decimal::new(1250, 2), "mug.png", 2),
            CartItem::new("b", "Shirt", Decimal::new(1999, 2), "shirt.png", 1),
            CartItem::new("c", "Sticker", Decimal::ZERO, "sticker.png", 5),
        ];
        for line in lines.iter().cloned() {
            cart.add_item(line).expect("valid item");
        }
        let expected: Decimal = lines.iter().map(CartItem::line_total).sum();
        assert_eq!(cart.subtotal(), expected);
        assert_eq!(cart.subtotal(), Decimal::new(4499, 2));
        assert_eq!(cart.item_count(), 8);
        assert_eq!(cart.line_count(), 3);
    }

    #[test]
    fn add_rejects_invalid_items_without_mutating() {
        let mut cart = Cart::new();
        cart.add_item(widget(1)).expect("valid item");
        let snapshot = cart.clone();

        let zero = cart.add_item(widget(0));
        assert!(matches!(
            zero,
            Err(CartError::InvalidItem { reason, .. }) if reason.contains("quantity")
        ));

        let negative = cart.add_item(CartItem::new("b", "Refund", Decimal::from(-1), "x", 1));
        assert!(matches!(
            negative,
            Err(CartError::InvalidItem { reason, .. }) if reason.contains("price")
        ));

        let blank = cart.add_item(CartItem::new("  ", "Blank", Decimal::ONE, "x", 1));
        assert!(blank.is_err());

        assert_eq!(cart, snapshot);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut cart = Cart::new();
        cart.add_item(widget(1)).expect("valid item");
        assert!(cart.remove_item("a"));
        assert!(!cart.remove_item("a"));
        assert!(cart.is_empty());
    }

    #[test]
    fn update_quantity_ignores_unknown_ids_and_removes_negatives() {
        let mut cart = Cart::new();
        cart.add_item(widget(1)).expect("valid item");
        cart.update_quantity("missing", 4);
        assert_eq!(cart.item_count(), 1);

        cart.update_quantity("a", 4);
        assert_eq!(cart.item_count(), 4);

        cart.update_quantity("a", -3);
        assert!(cart.get("a").is_none());
    }

    #[test]
    fn update_quantity_saturates_large_values() {
        let mut cart = Cart::new();
        cart.add_item(widget(1)).expect("valid item");
        cart.update_quantity("a", i64::MAX);
        assert_eq!(cart.get("a").map(|item| item.quantity), Some(u32::MAX));
    }

    fn pricey(id: &str) -> CartItem {
        CartItem::new(
            id,
            "Yacht",
            Decimal::from_i128_with_scale(100_000_000_000_000_000_000, 0),
            "x",
            1,
        )
    }

    #[test]
    fn large_quantities_keep_line_totals_representable() {
        let mut cart = Cart::new();
        cart.add_item(pricey("a")).expect("valid item");
        cart.update_quantity("a", i64::MAX);

        let quantity = cart.get("a").map_or(0, |item| item.quantity);
        assert!(quantity > 1 && quantity < u32::MAX);
        let price = Decimal::from_i128_with_scale(100_000_000_000_000_000_000, 0);
        assert!(price.checked_mul(Decimal::from(quantity)).is_some());
        assert_eq!(cart.subtotal(), price * Decimal::from(quantity));

        cart.add_item(pricey("a")).expect("merge stays capped");
        assert_eq!(cart.get("a").map(|item| item.quantity), Some(quantity));
    }

    #[test]
    fn subtotal_saturates_instead_of_overflowing() {
        let mut cart = Cart::new();
        cart.add_item(pricey("a")).expect("valid item");
        cart.add_item(pricey("b")).expect("valid item");
        cart.update_quantity("a", i64::MAX);
        cart.update_quantity("b", i64::MAX);
        assert_eq!(cart.subtotal(), Decimal::MAX);
    }

    #[test]
    fn add_rejects_unrepresentable_line_totals() {
        let mut cart = Cart::new();
        let result = cart.add_item(CartItem::new("a", "Yacht", Decimal::MAX, "x", 2));
        assert!(matches!(
            result,
            Err(CartError::InvalidItem { reason, .. }) if reason.contains("too large")
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn clear_resets_aggregates() {
        let mut cart = Cart::new();
        cart.add_item(widget(3)).expect("valid item");
        cart.clear();
        cart.clear();
        assert!(cart.items().is_empty());
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn format_price_uses_two_decimals() {
        assert_eq!(format_price(Decimal::from(30)), "$30.00");
        assert_eq!(format_price(Decimal::new(1999, 2)), "$19.99");
    }

    #[test]
    fn cart_serializes_with_items() {
        let mut cart = Cart::new();
        cart.add_item(widget(2)).expect("valid item");
        let value = serde_json::to_value(&cart).expect("serialize cart");
        assert_eq!(value["items"][0]["id"], "a");
        assert_eq!(value["items"][0]["quantity"], 2);
        let restored: Cart = serde_json::from_value(value).expect("deserialize cart");
        assert_eq!(restored, cart);
    }

    #[test]
    fn deserializing_applies_cart_rules() {
        let invalid = serde_json::json!({
            "items": [
                { "id": "a", "name": "Refund", "price": "-5", "image": "x", "quantity": 0 },
                { "id": "a", "name": "Widget", "price": "1", "image": "x", "quantity": 1 },
            ]
        });
        let err = serde_json::from_value::<Cart>(invalid).expect_err("invalid line");
        assert!(err.to_string().contains("quantity must be at least 1"));

        let duplicate = serde_json::json!({
            "items": [
                { "id": "a", "name": "Widget", "price": "1", "image": "x", "quantity": 1 },
                { "id": "a", "name": "Widget", "price": "1", "image": "x", "quantity": 2 },
            ]
        });
        let err = serde_json::from_value::<Cart>(duplicate).expect_err("duplicate id");
        assert!(err.to_string().contains("duplicate line id"));

        let valid = serde_json::json!({
            "items": [
                { "id": "a", "name": "Widget", "price": "1.50", "image": "x", "quantity": 2 },
            ]
        });
        let cart: Cart = serde_json::from_value(valid).expect("valid cart");
        assert_eq!(cart.subtotal(), Decimal::new(300, 2));
    }
}
