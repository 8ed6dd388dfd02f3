pub(crate) mod cart_panel;
pub(crate) mod container;
pub(crate) mod product_grid;
pub(crate) mod use_cart;
