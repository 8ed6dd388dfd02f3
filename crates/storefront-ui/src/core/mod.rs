//! Core, DOM-free primitives and helpers for the storefront UI.
pub mod cart;
pub mod catalog;
pub mod layout;
pub mod store;
pub mod theme;
