//! Commands
//!
//! The explicit command interface UI bindings drive a [`Cart`] through.

use crate::{
    cart::{Cart, CartError},
    items::{LineItem, LineItemKey},
};

/// A user action against the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a product from raw form text.
    Add {
        /// Raw product name
        name: String,

        /// Raw unit price
        price: String,
    },

    /// Remove a line item.
    Remove(LineItemKey),

    /// Change the quantity of a line item. Values below one are clamped.
    SetQuantity {
        /// Line item handle
        key: LineItemKey,

        /// Requested quantity
        quantity: i64,
    },
}

/// The outcome of a successfully applied [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// A new line item was appended.
    Added(LineItemKey),

    /// A line item was removed.
    Removed(LineItem),

    /// A quantity was set to the (possibly clamped) value.
    QuantitySet {
        /// Line item handle
        key: LineItemKey,

        /// Quantity now stored on the item
        quantity: u32,
    },
}

impl Applied {
    /// Whether the product entry form should be cleared.
    pub fn clears_inputs(&self) -> bool {
        matches!(self, Applied::Added(_))
    }
}

impl Cart {
    /// Apply a command to the cart.
    ///
    /// # Errors
    ///
    /// Returns the [`CartError`] of the underlying operation; the cart is unchanged on error.
    pub fn apply(&mut self, command: Command) -> Result<Applied, CartError> {
        match command {
            Command::Add { name, price } => self.add(&name, &price).map(Applied::Added),
            Command::Remove(key) => self.remove(key).map(Applied::Removed),
            Command::SetQuantity { key, quantity } => self
                .set_quantity(key, quantity)
                .map(|quantity| Applied::QuantitySet { key, quantity }),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::validation::ValidationError;

    use super::*;

    fn add(name: &str, price: &str) -> Command {
        Command::Add {
            name: name.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn add_command_clears_inputs() -> TestResult {
        let mut cart = Cart::default();

        let applied = cart.apply(add("Apple", "1.50"))?;

        assert!(matches!(applied, Applied::Added(_)));
        assert!(applied.clears_inputs());

        Ok(())
    }

    #[test]
    fn failed_add_command_reports_validation_error() {
        let mut cart = Cart::default();

        let result = cart.apply(add("Apple", "free"));

        assert!(matches!(
            result,
            Err(CartError::Validation(ValidationError::InvalidPrice(_)))
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn remove_command_returns_removed_item() -> TestResult {
        let mut cart = Cart::default();
        let key = cart.add("Apple", "1.50")?;

        let applied = cart.apply(Command::Remove(key))?;

        match applied {
            Applied::Removed(item) => assert_eq!(item.name(), "Apple"),
            other => return Err(format!("expected Removed, got {other:?}").into()),
        }

        assert_eq!(
            cart.apply(Command::Remove(key)),
            Err(CartError::ItemNotFound(key))
        );

        Ok(())
    }

    #[test]
    fn set_quantity_command_reports_clamped_value() -> TestResult {
        let mut cart = Cart::default();
        let key = cart.add("Milk", "3.25")?;

        let applied = cart.apply(Command::SetQuantity { key, quantity: -1 })?;

        assert_eq!(applied, Applied::QuantitySet { key, quantity: 1 });
        assert!(!applied.clears_inputs());

        Ok(())
    }
}
