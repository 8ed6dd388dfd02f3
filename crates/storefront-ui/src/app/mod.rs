//! Storefront shell: provider boundary, navigation, and routed pages.
//!
//! # Design
//! - `YewduxRoot` is the cart provider; everything below it shares one cart.
//! - Pages are thin compositions of components; state lives in the store.

use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::YewduxRoot;

use crate::components::cart_panel::CartPanel;
use crate::components::container::Container;
use crate::components::product_grid::ProductGrid;
use crate::components::use_cart::use_cart;
use crate::core::catalog::DEMO_CATALOG;

pub(crate) use routes::Route;

mod routes;

#[function_component(StorefrontApp)]
fn storefront_app() -> Html {
    html! {
        <YewduxRoot>
            <BrowserRouter>
                <NavBar />
                <main class="py-8">
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        </YewduxRoot>
    }
}

#[function_component(NavBar)]
fn nav_bar() -> Html {
    let (store, _) = use_cart();
    html! {
        <header class="bg-brand-blue text-white">
            <Container class="flex h-16 items-center justify-between">
                <Link<Route> to={Route::Shop} classes="text-xl font-bold">{"Storefront"}</Link<Route>>
                <Link<Route> to={Route::Cart} classes="rounded bg-brand-yellow px-3 py-1 text-black">
                    {format!("Cart ({})", store.cart.item_count())}
                </Link<Route>>
            </Container>
        </header>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Shop => html! {
            <Container class="grid gap-8 lg:grid-cols-[1fr_20rem]">
                <ProductGrid products={DEMO_CATALOG} />
                <CartPanel />
            </Container>
        },
        Route::Cart => html! {
            <Container>
                <div class="mx-auto max-w-2xl">
                    <CartPanel />
                </div>
            </Container>
        },
        Route::NotFound => html! {
            <Container fluid={true} class="py-24 text-center">
                <h1 class="text-2xl font-semibold">{"Page not found"}</h1>
            </Container>
        },
    }
}

/// Mount the storefront into `#root`, or the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<StorefrontApp>::with_root(root).render();
    } else {
        yew::Renderer::<StorefrontApp>::new().render();
    }
}
