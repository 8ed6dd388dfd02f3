//! Product cards with add-to-cart actions.

use gloo::console;
use yew::prelude::*;

use crate::components::use_cart::use_cart;
use crate::core::cart::format_price;
use crate::core::catalog::Product;

#[derive(Properties, PartialEq)]
pub(crate) struct ProductGridProps {
    pub products: &'static [Product],
}

#[function_component(ProductGrid)]
pub(crate) fn product_grid(props: &ProductGridProps) -> Html {
    html! {
        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
            { for props.products.iter().map(|product| html! {
                <ProductCard key={product.id} product={product.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProductCardProps {
    product: Product,
}

#[function_component(ProductCard)]
fn product_card(props: &ProductCardProps) -> Html {
    let (_, cart) = use_cart();
    let on_add = {
        let product = props.product.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(err) = cart.add_item(product.to_cart_item(1)) {
                console::error!("add to cart rejected", err.to_string());
            }
        })
    };
    let product = &props.product;
    html! {
        <article class="rounded-lg border border-sidebar-border bg-white p-4 shadow-sm">
            <img class="aspect-square w-full rounded object-cover" src={product.image} alt={product.name} />
            <h3 class="mt-3 font-semibold">{product.name}</h3>
            <p class="text-brand-blue">{format_price(product.price())}</p>
            <button class="mt-3 w-full rounded bg-brand-yellow px-3 py-2 font-medium" onclick={on_add}>
                {"Add to cart"}
            </button>
        </article>
    }
}
