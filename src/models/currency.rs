//! Currency formatting for display.

use rust_decimal::Decimal;

/// Formats an amount as whole currency units with thousands separators.
///
/// The amount is rounded to the nearest unit (ties to even) before
/// formatting, and negative amounts carry the sign before the symbol.
///
/// # Example
///
/// ```
/// use invest_calc::models::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::from(164_699), "₹"), "₹164,699");
/// assert_eq!(format_currency(Decimal::from(-1_500), "₹"), "-₹1,500");
/// ```
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round();
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}{}", symbol, grouped)
    } else {
        format!("{}{}", symbol, grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_small_amount_has_no_separator() {
        assert_eq!(format_currency(dec("500"), "₹"), "₹500");
    }

    #[test]
    fn test_groups_by_thousands() {
        assert_eq!(format_currency(dec("1000"), "₹"), "₹1,000");
        assert_eq!(format_currency(dec("2522880"), "₹"), "₹2,522,880");
        assert_eq!(format_currency(dec("10000000"), "₹"), "₹10,000,000");
    }

    #[test]
    fn test_rounds_fractional_amounts() {
        assert_eq!(format_currency(dec("164698.74"), "₹"), "₹164,699");
        assert_eq!(format_currency(dec("0.4"), "₹"), "₹0");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_currency(dec("-44699"), "₹"), "-₹44,699");
    }

    #[test]
    fn test_negative_amount_rounding_to_zero_has_no_sign() {
        assert_eq!(format_currency(dec("-0.2"), "$"), "$0");
    }

    #[test]
    fn test_custom_symbol() {
        assert_eq!(format_currency(dec("1234567"), "$"), "$1,234,567");
    }
}
