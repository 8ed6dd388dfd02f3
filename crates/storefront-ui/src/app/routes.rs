//! Routing definitions for the storefront UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Shop,
    #[at("/cart")]
    Cart,
    #[not_found]
    #[at("/404")]
    NotFound,
}
