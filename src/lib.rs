//! Trolley
//!
//! Trolley is a small shopping-cart engine: an ordered list of line items with
//! validated entry, quantity adjustment, removal and an always-consistent total.
//! UI hosts drive it through [`commands::Command`] and render [`view::CartView`].

pub mod cart;
pub mod commands;
pub mod items;
pub mod prelude;
pub mod pricing;
pub mod receipt;
pub mod validation;
pub mod view;
