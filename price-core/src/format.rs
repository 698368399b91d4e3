//! Display formatting for predicted prices and distances.
//!
//! Prices are shown in Indian Rupees with Indian digit grouping (the last
//! three digits, then groups of two) and no fractional digits.

use rust_decimal::{Decimal, RoundingStrategy};

const RUPEE_SIGN: char = '₹';

/// Rounds a decimal value to whole rupees using half-up rounding.
///
/// Values at exactly .5 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use price_core::format::round_to_rupee;
///
/// assert_eq!(round_to_rupee(dec!(1234.49)), dec!(1234));
/// assert_eq!(round_to_rupee(dec!(1234.5)), dec!(1235));
/// assert_eq!(round_to_rupee(dec!(-1234.5)), dec!(-1235)); // Away from zero
/// ```
pub fn round_to_rupee(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as Indian Rupees with zero fractional digits.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use price_core::format::format_inr;
///
/// assert_eq!(format_inr(dec!(450000)), "₹4,50,000");
/// assert_eq!(format_inr(dec!(1234567.8)), "₹12,34,568");
/// assert_eq!(format_inr(dec!(-1000)), "-₹1,000");
/// ```
pub fn format_inr(value: Decimal) -> String {
    let rounded = round_to_rupee(value);
    let digits = rounded.abs().trunc().to_string();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{sign}{RUPEE_SIGN}{}", group_indian(&digits))
}

/// Groups a whole number with thousands separators (`15000` → `15,000`).
pub fn group_thousands(value: u64) -> String {
    group_digits(&value.to_string(), 3)
}

/// Inserts Indian separators into a string of ASCII digits.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    format!("{},{tail}", group_digits(head, 2))
}

/// Inserts a comma every `width` digits, counting from the right.
fn group_digits(
    digits: &str,
    width: usize,
) -> String {
    let lead = match digits.len() % width {
        0 => width,
        n => n,
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / width);
    out.push_str(&digits[..lead.min(digits.len())]);
    let mut rest = &digits[lead.min(digits.len())..];
    while !rest.is_empty() {
        let (group, remaining) = rest.split_at(width);
        out.push(',');
        out.push_str(group);
        rest = remaining;
    }
    out
}
