//! View models
//!
//! Plain, display-ready snapshots of a [`Cart`] for UI layers to render.

use crate::{
    cart::Cart,
    items::LineItemKey,
    pricing::{format_amount, format_money},
};

/// Render model for a line in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineView {
    /// Handle used for remove and quantity actions on this line.
    pub key: LineItemKey,

    /// One-based position in display order.
    pub position: usize,

    /// Product name.
    pub name: String,

    /// Unit price with currency symbol.
    pub unit_price: String,

    /// Current quantity.
    pub quantity: u32,

    /// Unit price times quantity, two decimals. Empty if it overflows.
    pub line_total: String,
}

/// Render model for the whole cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Lines in insertion order.
    pub lines: Vec<LineView>,

    /// Cart total, two decimals.
    pub total: String,
}

impl CartView {
    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether there are no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Cart {
    /// Build the render model for the current state.
    pub fn view(&self) -> CartView {
        let lines = self
            .entries()
            .enumerate()
            .map(|(index, (key, item))| LineView {
                key,
                position: index + 1,
                name: item.name().to_string(),
                unit_price: format_money(item.unit_price(), self.currency()),
                quantity: item.quantity(),
                line_total: item.line_total().map(format_amount).unwrap_or_default(),
            })
            .collect();

        CartView {
            lines,
            total: self.formatted_total(),
        }
    }
}
