//! Display formatting for operand text.
//!
//! Formatting is presentation only. The grouped strings produced here are
//! never parsed back into arithmetic.

use super::number::parse_integer_part;

/// Default thousands separator.
pub const DEFAULT_GROUP_SEPARATOR: &str = ",";

/// Format operand text for display with `,` thousands grouping.
///
/// The text is split on the first `.`. The integer half is grouped; the
/// fractional half is reattached verbatim, even when empty (`"12."`). An
/// integer half that is not a number renders as empty text.
pub fn format_for_display(value: &str) -> String {
    format_with_separator(value, DEFAULT_GROUP_SEPARATOR)
}

/// Same as [`format_for_display`] with a caller-chosen group separator.
pub fn format_with_separator(value: &str, separator: &str) -> String {
    let (integer_digits, decimal_digits) = match value.split_once('.') {
        Some((int_part, dec_part)) => (int_part, Some(dec_part)),
        None => (value, None),
    };

    let integer_display = parse_integer_part(integer_digits)
        .map(|n| group_integer(n, separator))
        .unwrap_or_default();

    match decimal_digits {
        Some(decimals) => format!("{}.{}", integer_display, decimals),
        None => integer_display,
    }
}

/// Render a whole number with separators between groups of three digits.
fn group_integer(value: f64, separator: &str) -> String {
    // Shortest round-trip digits, so the display never shows binary noise
    // beyond what the stored text carries.
    let digits = format!("{}", value.abs());

    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push_str(separator);
        }
        result.push(c);
    }

    if value.is_sign_negative() {
        format!("-{}", result)
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousand_separators() {
        assert_eq!(format_for_display("1234567"), "1,234,567");
        assert_eq!(format_for_display("1000"), "1,000");
        assert_eq!(format_for_display("999"), "999");
        assert_eq!(format_for_display("0"), "0");
    }

    #[test]
    fn test_fraction_reattached_verbatim() {
        assert_eq!(format_for_display("1234.5"), "1,234.5");
        assert_eq!(format_for_display("12."), "12.");
        assert_eq!(format_for_display("0.000"), "0.000");
        assert_eq!(format_for_display("1234.5678"), "1,234.5678");
    }

    #[test]
    fn test_leading_zeros_collapse() {
        assert_eq!(format_for_display("007"), "7");
        assert_eq!(format_for_display("0012.50"), "12.50");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_for_display("-1234"), "-1,234");
        assert_eq!(format_for_display("-16.5"), "-16.5");
    }

    #[test]
    fn test_unparseable_integer_part() {
        assert_eq!(format_for_display(""), "");
        assert_eq!(format_for_display(".5"), ".5");
        assert_eq!(format_for_display("."), ".");
        assert_eq!(format_for_display("Cannot divide by zero"), "");
    }

    #[test]
    fn test_large_values_keep_every_digit() {
        assert_eq!(
            format_for_display("1000000000000000000000"),
            "1,000,000,000,000,000,000,000"
        );
    }

    #[test]
    fn test_large_values_use_shortest_digits() {
        assert_eq!(
            format_for_display("12345678901234567890"),
            "12,345,678,901,234,567,000"
        );
        assert_eq!(
            format_for_display("999999999999999900000"),
            "999,999,999,999,999,900,000"
        );
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(format_with_separator("1234567.25", " "), "1 234 567.25");
        assert_eq!(format_with_separator("1234", "'"), "1'234");
    }
}
