//! Trolley prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError},
    commands::{Applied, Command},
    items::{LineItem, LineItemKey},
    pricing::{currency_from_code, format_amount, format_money},
    receipt::{Receipt, ReceiptError},
    validation::{ValidationError, parse_price, parse_quantity, validate_name},
    view::{CartView, LineView},
};
