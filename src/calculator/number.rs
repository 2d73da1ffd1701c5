//! Operand text parsing and result rounding.
//!
//! Operands live as text until an operator is applied. This module decides
//! which texts count as numbers and turns computed values back into text.

use lazy_static::lazy_static;
use regex::Regex;

/// Results are rounded to this many decimal places.
pub const DECIMAL_PLACES: i32 = 8;

lazy_static! {
    /// A plain decimal literal: optional minus, digits with an optional
    /// point, or a point followed by digits. No exponents, no `inf`/`NaN`.
    static ref DECIMAL_LITERAL: Regex = Regex::new(
        r"^-?(\d+\.?\d*|\.\d+)$"
    ).unwrap();

    /// The integer half of a display split: optional minus and digits.
    static ref INTEGER_LITERAL: Regex = Regex::new(
        r"^-?\d+$"
    ).unwrap();
}

/// Parse operand text as a decimal number.
///
/// Returns `None` for empty text, a lone point, error messages, and anything
/// `f64::from_str` would accept but a keypad could never produce.
pub fn parse_operand(text: &str) -> Option<f64> {
    if !DECIMAL_LITERAL.is_match(text) {
        return None;
    }
    text.parse().ok()
}

/// Parse the integer half of a display split.
pub fn parse_integer_part(text: &str) -> Option<f64> {
    if !INTEGER_LITERAL.is_match(text) {
        return None;
    }
    text.parse().ok()
}

/// Check whether operand text holds a number rather than a message.
pub fn is_numeric(text: &str) -> bool {
    parse_operand(text).is_some()
}

/// Round a finite value to [`DECIMAL_PLACES`] to hide binary noise.
///
/// Values too large to scale are already integral and are returned as-is.
pub fn round_result(value: f64) -> f64 {
    let scale = 10f64.powi(DECIMAL_PLACES);
    let scaled = round_half_up((value + f64::EPSILON) * scale);
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled / scale;
    // Avoid storing "-0" for results like -0.000000001.
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Round to the nearest integer, with halves going toward +∞.
///
/// `f64::round` sends halves away from zero, which puts negative results one
/// unit too low at the last kept place.
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Render a rounded value as operand text.
///
/// Integral values have no fractional part ("2", not "2.0") and no exponent
/// form is ever produced.
pub fn value_to_text(value: f64) -> String {
    format!("{}", value)
}
