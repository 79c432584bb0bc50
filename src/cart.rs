//! Cart

use rust_decimal::Decimal;
use rusty_money::iso::{Currency, USD};
use slotmap::SlotMap;
use thiserror::Error;

use crate::{
    items::{LineItem, LineItemKey, clamp_quantity},
    pricing::{format_amount, sum_line_totals},
    validation::{ValidationError, parse_price, validate_name},
};

/// Errors related to cart mutations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    /// The "add product" inputs were rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The handle does not refer to an item in this cart.
    #[error("Item {0:?} not found")]
    ItemNotFound(LineItemKey),

    /// The cart total would exceed the representable decimal range.
    #[error("Cart total overflowed")]
    TotalOverflow,
}

/// Ordered collection of line items with a running total.
///
/// Items keep their insertion order. The total is recomputed from scratch
/// whenever the items change, and a mutation is only committed once its new
/// total has been computed successfully.
#[derive(Debug, Clone)]
pub struct Cart {
    items: SlotMap<LineItemKey, LineItem>,
    order: Vec<LineItemKey>,
    total: Decimal,
    currency: &'static Currency,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(USD)
    }
}

impl Cart {
    /// Create a new, empty cart that displays prices in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            items: SlotMap::with_key(),
            order: Vec::new(),
            total: Decimal::ZERO,
            currency,
        }
    }

    /// Validate the raw inputs and append a new line item with quantity one.
    ///
    /// A successful add is the caller's signal to clear its input fields.
    ///
    /// # Errors
    ///
    /// - [`CartError::Validation`]: the name is blank or the price is not a positive number.
    /// - [`CartError::TotalOverflow`]: the new total cannot be represented.
    pub fn add(&mut self, name: &str, price_text: &str) -> Result<LineItemKey, CartError> {
        let name = validate_name(name)?;
        let unit_price = parse_price(price_text)?;
        let item = LineItem::new(name, unit_price);

        let total =
            sum_line_totals(self.iter().chain([&item])).ok_or(CartError::TotalOverflow)?;

        let key = self.items.insert(item);

        self.order.push(key);
        self.total = total;

        Ok(key)
    }

    /// Remove a line item, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] if the handle is stale; the cart is unchanged.
    pub fn remove(&mut self, key: LineItemKey) -> Result<LineItem, CartError> {
        if !self.items.contains_key(key) {
            return Err(CartError::ItemNotFound(key));
        }

        let total = sum_line_totals(
            self.order
                .iter()
                .filter(|&&other| other != key)
                .filter_map(|&other| self.items.get(other)),
        )
        .ok_or(CartError::TotalOverflow)?;

        let item = self
            .items
            .remove(key)
            .ok_or(CartError::ItemNotFound(key))?;

        self.order.retain(|&other| other != key);
        self.total = total;

        Ok(item)
    }

    /// Set the quantity of a line item, clamping anything below one to one.
    ///
    /// Returns the quantity that was applied.
    ///
    /// # Errors
    ///
    /// - [`CartError::ItemNotFound`]: the handle is stale.
    /// - [`CartError::TotalOverflow`]: the new total cannot be represented.
    pub fn set_quantity(&mut self, key: LineItemKey, requested: i64) -> Result<u32, CartError> {
        let quantity = clamp_quantity(requested);

        let updated = self
            .items
            .get(key)
            .ok_or(CartError::ItemNotFound(key))?
            .with_quantity(quantity);

        let total = sum_line_totals(self.order.iter().filter_map(|&other| {
            if other == key {
                Some(&updated)
            } else {
                self.items.get(other)
            }
        }))
        .ok_or(CartError::TotalOverflow)?;

        self.items
            .get_mut(key)
            .ok_or(CartError::ItemNotFound(key))?
            .set_quantity(quantity);

        self.total = total;

        Ok(quantity)
    }

    /// Recompute the total from the current items.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::TotalOverflow`] if the sum cannot be represented.
    pub fn recalc_total(&self) -> Result<Decimal, CartError> {
        sum_line_totals(self.iter()).ok_or(CartError::TotalOverflow)
    }

    /// The total as of the last mutation, at full precision.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// The total formatted for display with two fractional digits.
    pub fn formatted_total(&self) -> String {
        format_amount(self.total)
    }

    /// Get a line item by handle.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] if the handle is stale.
    pub fn get(&self, key: LineItemKey) -> Result<&LineItem, CartError> {
        self.items.get(key).ok_or(CartError::ItemNotFound(key))
    }

    /// Handle of the item at a zero-based position in display order.
    pub fn key_at(&self, position: usize) -> Option<LineItemKey> {
        self.order.get(position).copied()
    }

    /// Handles in display order.
    pub fn keys(&self) -> impl Iterator<Item = LineItemKey> + '_ {
        self.order.iter().copied()
    }

    /// Iterate over the items in display order.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.order.iter().filter_map(|&key| self.items.get(key))
    }

    /// Iterate over handles and items in display order.
    pub fn entries(&self) -> impl Iterator<Item = (LineItemKey, &LineItem)> {
        self.order
            .iter()
            .filter_map(|&key| self.items.get(key).map(|item| (key, item)))
    }

    /// Get the number of items in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Get the display currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}
