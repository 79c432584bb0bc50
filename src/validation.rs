//! Validation
//!
//! Turns raw form text into the values a [`crate::items::LineItem`] is built
//! from. The error messages are the text shown to the user.

use std::str::FromStr;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use thiserror::Error;

/// Errors raised while validating the "add product" inputs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The product name was empty after trimming.
    #[error("Please enter a product name.")]
    EmptyName,

    /// The price could not be parsed or was not greater than zero (raw input).
    #[error("Please enter a valid price greater than 0.")]
    InvalidPrice(String),
}

/// Trims a product name, rejecting names that are blank.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyName`] if nothing is left after trimming.
pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    Ok(trimmed.to_string())
}

/// Parse a unit price from the number at the start of the text (e.g. "2.99",
/// "1e2" or "1.50 GBP").
///
/// Anything after the leading number is ignored.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidPrice`] if the text does not start with a
/// decimal number or if the number is zero or negative.
pub fn parse_price(text: &str) -> Result<Decimal, ValidationError> {
    let number = leading_number(text.trim());

    let price = Decimal::from_str(number)
        .or_else(|_err| Decimal::from_scientific(number))
        .map_err(|_err| ValidationError::InvalidPrice(text.to_string()))?;

    if price <= Decimal::ZERO {
        return Err(ValidationError::InvalidPrice(text.to_string()));
    }

    Ok(price.normalize())
}

/// The longest prefix of `text` that reads as a signed decimal number with an
/// optional exponent. Empty when no digits lead the text.
fn leading_number(text: &str) -> &str {
    let bytes = text.as_bytes();
    let digits_from = |from: usize| {
        bytes.get(from..).map_or(0, |rest| {
            rest.iter().take_while(|byte| byte.is_ascii_digit()).count()
        })
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let integer_digits = digits_from(end);
    end += integer_digits;

    let mut fraction_digits = 0;

    if bytes.get(end) == Some(&b'.') {
        fraction_digits = digits_from(end + 1);

        if fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }

    if integer_digits + fraction_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent_digits = digits_from(end + 1 + sign);

        if exponent_digits > 0 {
            end += 1 + sign + exponent_digits;
        }
    }

    text.get(..end).unwrap_or_default()
}

/// Interpret the text of a quantity control.
///
/// Whole numbers are returned as is and fractional numbers are truncated.
/// Blank or unreadable text reads as `0`, which the cart clamps to one.
pub fn parse_quantity(text: &str) -> i64 {
    let trimmed = text.trim();

    if let Ok(quantity) = trimmed.parse::<i64>() {
        return quantity;
    }

    Decimal::from_str(trimmed)
        .ok()
        .and_then(|value| value.trunc().to_i64())
        .unwrap_or(0)
}
