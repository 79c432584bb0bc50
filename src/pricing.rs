//! Pricing

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};

use crate::items::LineItem;

/// Number of fractional digits shown for amounts.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Sums the line totals of the given items.
///
/// Returns `None` if any line total or the running sum overflows.
pub fn sum_line_totals<'a>(items: impl IntoIterator<Item = &'a LineItem>) -> Option<Decimal> {
    items
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.line_total()?))
}

/// Formats an amount with exactly two fractional digits (e.g. "3.50").
///
/// Midpoints are rounded away from zero. Only the returned text is rounded.
/// Padding happens in the text, so amounts whose integer part fills the
/// decimal's 96-bit mantissa still show two places.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(
        DISPLAY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    );

    format!("{rounded:.2}")
}

/// Formats an amount with the currency symbol (e.g. "$1.50").
///
/// Amounts too large to express in minor units are written as the currency
/// symbol followed by [`format_amount`].
pub fn format_money(amount: Decimal, currency: &'static Currency) -> String {
    to_minor_units(amount).map_or_else(
        || format!("{}{}", currency.symbol, format_amount(amount)),
        |minor_units| format!("{}", Money::from_minor(minor_units, currency)),
    )
}

/// Converts an amount to minor units (pence/cents), rounding to the nearest unit.
pub fn to_minor_units(amount: Decimal) -> Option<i64> {
    amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| {
            value
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i64()
        })
}

/// Looks up a display currency by its ISO code (`GBP`, `USD` or `EUR`).
pub fn currency_from_code(code: &str) -> Option<&'static Currency> {
    match code.trim().to_ascii_uppercase().as_str() {
        "GBP" => Some(GBP),
        "USD" => Some(USD),
        "EUR" => Some(EUR),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn item(price: Decimal, quantity: u32) -> LineItem {
        LineItem::new("Item".to_string(), price).with_quantity(quantity)
    }

    #[test]
    fn sum_line_totals_multiplies_and_adds() {
        let items = [item(dec!(1.50), 1), item(dec!(3.25), 3)];

        assert_eq!(sum_line_totals(&items), Some(dec!(11.25)));
    }

    #[test]
    fn sum_line_totals_of_nothing_is_zero() {
        let items: [LineItem; 0] = [];

        assert_eq!(sum_line_totals(&items), Some(Decimal::ZERO));
    }

    #[test]
    fn sum_line_totals_overflow_is_none() {
        let items = [item(Decimal::MAX, 1), item(Decimal::MAX, 1)];

        assert_eq!(sum_line_totals(&items), None);
    }

    #[test]
    fn sum_line_totals_does_not_drift() {
        let items: Vec<LineItem> = (0..10).map(|_| item(dec!(0.1), 1)).collect();

        assert_eq!(sum_line_totals(&items), Some(dec!(1.0)));
    }

    #[test]
    fn format_amount_pads_to_two_places() {
        assert_eq!(format_amount(dec!(3.5)), "3.50");
        assert_eq!(format_amount(dec!(2)), "2.00");
        assert_eq!(format_amount(Decimal::ZERO), "0.00");
    }

    #[test]
    fn format_amount_pads_amounts_without_room_for_a_scale() {
        assert_eq!(
            format_amount(dec!(1000000000000000000000000000)),
            "1000000000000000000000000000.00"
        );
        assert_eq!(
            format_amount(Decimal::MAX),
            "79228162514264337593543950335.00"
        );
    }

    #[test]
    fn format_amount_rounds_midpoint_away_from_zero() {
        assert_eq!(format_amount(dec!(1.005)), "1.01");
        assert_eq!(format_amount(dec!(1.004)), "1.00");
        assert_eq!(format_amount(dec!(0.999)), "1.00");
    }

    #[test]
    fn format_money_uses_currency_symbol() {
        assert_eq!(format_money(dec!(1.5), USD), "$1.50");
        assert_eq!(format_money(dec!(12.50), GBP), "£12.50");
    }

    #[test]
    fn format_money_keeps_symbol_beyond_minor_units() {
        assert_eq!(
            format_money(Decimal::MAX, USD),
            "$79228162514264337593543950335.00"
        );
        assert_eq!(
            format_money(dec!(1000000000000000000000000000), GBP),
            "£1000000000000000000000000000.00"
        );
    }

    #[test]
    fn to_minor_units_rounds_to_nearest_unit() {
        assert_eq!(to_minor_units(dec!(1.50)), Some(150));
        assert_eq!(to_minor_units(dec!(0.125)), Some(13));
        assert_eq!(to_minor_units(Decimal::MAX), None);
    }

    #[test]
    fn currency_from_code_accepts_known_codes() {
        assert_eq!(currency_from_code("USD"), Some(USD));
        assert_eq!(currency_from_code(" gbp "), Some(GBP));
        assert_eq!(currency_from_code("EUR"), Some(EUR));
        assert_eq!(currency_from_code("ABC"), None);
    }
}
