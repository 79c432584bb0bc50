//! Items

use rust_decimal::Decimal;
use slotmap::new_key_type;

new_key_type! {
    /// Handle to a line item in a cart.
    pub struct LineItemKey;
}

/// A single product entry in the cart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineItem {
    name: String,
    unit_price: Decimal,
    quantity: u32,
}

impl LineItem {
    /// Creates a new line item with a quantity of one.
    ///
    /// The name and price are expected to be validated already, see
    /// [`crate::validation`].
    #[must_use]
    pub fn new(name: String, unit_price: Decimal) -> Self {
        Self {
            name,
            unit_price,
            quantity: 1,
        }
    }

    /// Returns the product name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Returns the quantity
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns a copy of this item with a different quantity.
    pub(crate) fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// Unit price multiplied by quantity, or `None` if the product overflows.
    pub fn line_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }
}

/// Clamps a requested quantity to the smallest allowed quantity of one.
pub fn clamp_quantity(requested: i64) -> u32 {
    u32::try_from(requested.max(1)).unwrap_or(u32::MAX)
}
