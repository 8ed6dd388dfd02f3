//! Cart store and the handle UI code mutates it through.
//!
//! # Design
//! - The cart lives in a yewdux store scoped to an explicit `Context`, so each
//!   provider (and each test) owns an isolated cart.
//! - Mutations go through crate-private `CartAction` reducers; [`CartHandle`]
//!   is the only way in and validates before dispatch, so rejected items never
//!   reach the store.
//! - Subscribers are notified by yewdux after every state change.

use std::rc::Rc;

use rust_decimal::Decimal;
use yewdux::context::Context;
use yewdux::dispatch::Dispatch;
use yewdux::store::{Reducer, Store};

use crate::core::cart::{Cart, CartError, CartItem};

/// Shared cart state for the storefront.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct CartStore {
    /// The session cart.
    pub cart: Cart,
}

/// Reducer messages accepted by [`CartStore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum CartAction {
    /// Add (or merge) a validated item.
    Add(CartItem),
    /// Remove the line with the given id.
    Remove(String),
    /// Set the quantity for a line; zero or less removes it.
    UpdateQuantity {
        /// Line identifier.
        id: String,
        /// Requested quantity.
        quantity: i64,
    },
    /// Empty the cart.
    Clear,
}

impl Reducer<CartStore> for CartAction {
    fn apply(self, mut state: Rc<CartStore>) -> Rc<CartStore> {
        let store = Rc::make_mut(&mut state);
        match self {
            Self::Add(item) => {
                // Only `CartHandle::add_item` builds this variant, after validation;
                // an invalid item is ignored and the cart keeps its lines.
                store.cart.add_item(item).ok();
            }
            Self::Remove(id) => {
                store.cart.remove_item(&id);
            }
            Self::UpdateQuantity { id, quantity } => store.cart.update_quantity(&id, quantity),
            Self::Clear => store.cart.clear(),
        }
        state
    }
}

/// Context object exposing the cart contract to components.
#[derive(Clone)]
pub struct CartHandle {
    dispatch: Dispatch<CartStore>,
}

impl CartHandle {
    /// Bind a handle to the cart held by `cx`.
    #[must_use]
    pub fn new(cx: &Context) -> Self {
        Self {
            dispatch: Dispatch::new(cx),
        }
    }

    /// Current store snapshot.
    #[must_use]
    pub fn state(&self) -> Rc<CartStore> {
        self.dispatch.get()
    }

    /// Add an item, merging with an existing line of the same id.
    ///
    /// # Errors
    /// Returns [`CartError::InvalidItem`] without touching the store when the
    /// item fails validation.
    pub fn add_item(&self, item: CartItem) -> Result<(), CartError> {
        item.validate()?;
        self.dispatch.apply(CartAction::Add(item));
        Ok(())
    }

    /// Remove a line; unknown ids are ignored.
    pub fn remove_item(&self, id: impl Into<String>) {
        self.dispatch.apply(CartAction::Remove(id.into()));
    }

    /// Set a line's quantity; zero or less removes the line.
    pub fn update_quantity(&self, id: impl Into<String>, quantity: i64) {
        self.dispatch.apply(CartAction::UpdateQuantity {
            id: id.into(),
            quantity,
        });
    }

    /// Empty the cart.
    pub fn clear_cart(&self) {
        self.dispatch.apply(CartAction::Clear);
    }

    /// Total units in the cart.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.state().cart.item_count()
    }

    /// Current subtotal.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.state().cart.subtotal()
    }

    /// Register a change listener. The listener stays active while the
    /// returned dispatch is alive.
    #[must_use]
    pub fn subscribe<F>(&self, on_change: F) -> Dispatch<CartStore>
    where
        F: Fn(Rc<CartStore>) + 'static,
    {
        self.dispatch.clone().subscribe(on_change)
    }
}

impl From<Dispatch<CartStore>> for CartHandle {
    fn from(dispatch: Dispatch<CartStore>) -> Self {
        Self { dispatch }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn widget(quantity: u32) -> CartItem {
        CartItem::new("a", "Widget", Decimal::from(10), "x", quantity)
    }

    #[test]
    fn handle_walkthrough_matches_cart_contract() {
        let cx = Context::new();
        let cart = CartHandle::new(&cx);

        cart.add_item(widget(2)).expect("valid item");
        assert_eq!(cart.subtotal(), Decimal::from(20));

        cart.add_item(widget(1)).expect("valid item");
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal(), Decimal::from(30));
        assert_eq!(cart.state().cart.line_count(), 1);

        cart.update_quantity("a", 0);
        assert!(cart.state().cart.is_empty());
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn rejected_items_leave_store_untouched() {
        let cx = Context::new();
        let cart = CartHandle::new(&cx);
        cart.add_item(widget(1)).expect("valid item");
        let before = cart.state();

        let result = cart.add_item(widget(0));
        assert!(matches!(result, Err(CartError::InvalidItem { .. })));
        assert_eq!(*cart.state(), *before);
    }

    #[test]
    fn remove_and_clear_are_idempotent() {
        let cx = Context::new();
        let cart = CartHandle::new(&cx);
        cart.add_item(widget(2)).expect("valid item");

        cart.remove_item("a");
        cart.remove_item("a");
        assert_eq!(cart.item_count(), 0);

        cart.add_item(widget(2)).expect("valid item");
        cart.clear_cart();
        cart.clear_cart();
        assert!(cart.state().cart.items().is_empty());
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn contexts_hold_independent_carts() {
        let first = CartHandle::new(&Context::new());
        let second = CartHandle::new(&Context::new());

        first.add_item(widget(4)).expect("valid item");
        assert_eq!(first.item_count(), 4);
        assert_eq!(second.item_count(), 0);
    }

    #[test]
    fn subscribers_observe_post_mutation_state() {
        let cx = Context::new();
        let cart = CartHandle::new(&cx);
        let seen = Rc::new(RefCell::new(Vec::<Decimal>::new()));
        let sink = Rc::clone(&seen);
        let _subscription = cart.subscribe(move |state: Rc<CartStore>| {
            sink.borrow_mut().push(state.cart.subtotal());
        });

        cart.add_item(widget(2)).expect("valid item");
        assert_eq!(seen.borrow().last().copied(), Some(Decimal::from(20)));

        cart.update_quantity("a", 5);
        assert_eq!(seen.borrow().last().copied(), Some(Decimal::from(50)));

        cart.clear_cart();
        assert_eq!(seen.borrow().last().copied(), Some(Decimal::ZERO));
    }

    #[test]
    fn reducer_applies_actions_directly() {
        let state = Rc::new(CartStore::default());
        let state = CartAction::Add(widget(2)).apply(state);
        let state = CartAction::UpdateQuantity {
            id: "a".to_string(),
            quantity: 7,
        }
        .apply(state);
        assert_eq!(state.cart.item_count(), 7);
        let state = CartAction::Remove("a".to_string()).apply(state);
        assert!(state.cart.is_empty());
    }

    #[test]
    fn reducer_leaves_state_unchanged_for_invalid_add() {
        let state = CartAction::Add(widget(1)).apply(Rc::new(CartStore::default()));
        let after = CartAction::Add(widget(0)).apply(Rc::clone(&state));
        assert_eq!(*after, *state);
        assert_eq!(after.cart.item_count(), 1);
    }
}
