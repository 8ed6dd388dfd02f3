//! Hook exposing the cart handle provided by the nearest `YewduxRoot`.

use std::rc::Rc;

use yew::prelude::*;
use yewdux::prelude::use_store;

use crate::core::store::{CartHandle, CartStore};

#[hook]
pub(crate) fn use_cart() -> (Rc<CartStore>, CartHandle) {
    let (store, dispatch) = use_store::<CartStore>();
    (store, CartHandle::from(dispatch))
}
