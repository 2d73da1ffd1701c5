//! Calculator module: the accumulator state machine and its formatting.
//!
//! This module provides:
//! - The [`Calculator`] state machine driven by keypad events
//! - Operand text parsing and result rounding
//! - Grouped-digit display formatting

mod format;
mod number;
mod operator;
mod state;

pub use format::{DEFAULT_GROUP_SEPARATOR, format_for_display, format_with_separator};
pub use number::{DECIMAL_PLACES, is_numeric, parse_operand, round_result};
pub use operator::{Applied, Operator, UnknownOperator};
pub use state::{Calculator, DIVIDE_BY_ZERO_MESSAGE, POINT, Phase, RESULT_TOO_LARGE_MESSAGE};
