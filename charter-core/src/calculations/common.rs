//! Shared helpers for money values.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a price to whole currency units, half away from zero.
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a price the way the booking screens show it: a dollar sign,
/// whole units and comma thousands separators.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use charter_core::calculations::common::format_currency;
///
/// assert_eq!(format_currency(dec!(500)), "$500");
/// assert_eq!(format_currency(dec!(1250)), "$1,250");
/// assert_eq!(format_currency(dec!(1234567.4)), "$1,234,567");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_whole(value);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_whole tests
    // =========================================================================

    #[test]
    fn round_whole_rounds_down_below_midpoint() {
        assert_eq!(round_whole(dec!(149.49)), dec!(149));
    }

    #[test]
    fn round_whole_rounds_up_at_midpoint() {
        assert_eq!(round_whole(dec!(149.50)), dec!(150));
    }

    // =========================================================================
    // format_currency tests
    // =========================================================================

    #[test]
    fn format_currency_small_amount() {
        assert_eq!(format_currency(dec!(50)), "$50");
    }

    #[test]
    fn format_currency_exact_thousand() {
        assert_eq!(format_currency(dec!(1000)), "$1,000");
    }

    #[test]
    fn format_currency_zero() {
        assert_eq!(format_currency(Decimal::ZERO), "$0");
    }

    #[test]
    fn format_currency_negative() {
        assert_eq!(format_currency(dec!(-1500)), "-$1,500");
    }

    #[test]
    fn format_currency_drops_trailing_scale() {
        assert_eq!(format_currency(dec!(2050.00)), "$2,050");
    }
}
