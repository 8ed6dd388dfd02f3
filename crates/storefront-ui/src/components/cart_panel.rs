//! Cart summary with quantity controls.
//!
//! # Design
//! - Reads the store snapshot once per render; aggregates come from the cart.
//! - Quantity buttons go through `update_quantity`, so dropping to zero removes the line.

use yew::prelude::*;

use crate::components::use_cart::use_cart;
use crate::core::cart::{CartItem, format_price};
use crate::core::store::CartHandle;

#[function_component(CartPanel)]
pub(crate) fn cart_panel() -> Html {
    let (store, cart) = use_cart();
    let on_clear = {
        let cart = cart.clone();
        Callback::from(move |_: MouseEvent| cart.clear_cart())
    };

    if store.cart.is_empty() {
        return html! {
            <aside class="rounded-lg bg-sidebar p-6 text-sidebar-foreground">
                <h2 class="text-lg font-semibold">{"Your cart"}</h2>
                <p class="mt-2 opacity-70">{"Your cart is empty."}</p>
            </aside>
        };
    }

    html! {
        <aside class="rounded-lg bg-sidebar p-6 text-sidebar-foreground">
            <h2 class="text-lg font-semibold">
                {format!("Your cart ({})", store.cart.item_count())}
            </h2>
            <ul class="mt-4 divide-y divide-sidebar-border">
                { for store.cart.items().iter().map(|item| html! {
                    <CartLine key={item.id.clone()} item={item.clone()} cart={cart.clone()} />
                }) }
            </ul>
            <div class="mt-4 flex items-center justify-between font-semibold">
                <span>{"Subtotal"}</span>
                <span>{format_price(store.cart.subtotal())}</span>
            </div>
            <button class="mt-4 text-sm underline" onclick={on_clear}>{"Clear cart"}</button>
        </aside>
    }
}

#[derive(Properties)]
struct CartLineProps {
    item: CartItem,
    cart: CartHandle,
}

impl PartialEq for CartLineProps {
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item
    }
}

#[function_component(CartLine)]
fn cart_line(props: &CartLineProps) -> Html {
    let item = &props.item;
    let quantity = i64::from(item.quantity);
    let step = |delta: i64| {
        let cart = props.cart.clone();
        let id = item.id.clone();
        Callback::from(move |_: MouseEvent| cart.update_quantity(id.clone(), quantity + delta))
    };
    let on_remove = {
        let cart = props.cart.clone();
        let id = item.id.clone();
        Callback::from(move |_: MouseEvent| cart.remove_item(id.clone()))
    };
    html! {
        <li class="flex items-center gap-3 py-3">
            <img class="h-12 w-12 rounded object-cover" src={item.image.clone()} alt={item.name.clone()} />
            <div class="flex-1">
                <p class="font-medium">{item.name.clone()}</p>
                <p class="text-sm opacity-70">{format_price(item.line_total())}</p>
            </div>
            <div class="flex items-center gap-2">
                <button class="rounded border border-sidebar-border px-2" onclick={step(-1)}>{"−"}</button>
                <span>{item.quantity}</span>
                <button class="rounded border border-sidebar-border px-2" onclick={step(1)}>{"+"}</button>
            </div>
            <button class="text-sm text-sidebar-accent-foreground underline" onclick={on_remove}>{"Remove"}</button>
        </li>
    }
}
