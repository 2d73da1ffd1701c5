//! The accumulator state machine.
//!
//! A running accumulator with a single pending operator. Every input event
//! mutates the four fields below in place; no operation can fail. Arithmetic
//! faults become displayable messages instead of errors.

use tracing::{debug, trace};

use super::number::{is_numeric, parse_operand, round_result, value_to_text};
use super::operator::{Applied, Operator};

/// Message shown when the divisor is zero.
pub const DIVIDE_BY_ZERO_MESSAGE: &str = "Cannot divide by zero";

/// Message shown when a result overflows `f64`.
pub const RESULT_TOO_LARGE_MESSAGE: &str = "Result too large";

/// The decimal point token.
pub const POINT: char = '.';

/// Where the calculator is in an entry cycle, derived from its fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing entered.
    Empty,
    /// Typing the left operand.
    EnteringFirst,
    /// An operator is pending and the right operand is still empty.
    OperatorChosen,
    /// Typing the right operand.
    EnteringSecond,
    /// Showing a computed value.
    Result,
    /// Showing an error message.
    Error,
}

/// Calculator state for one session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Calculator {
    current_operand: String,
    previous_operand: String,
    operation: Option<Operator>,
    should_reset_display: bool,
}

impl Calculator {
    /// Create an empty calculator.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    pub fn previous_operand(&self) -> &str {
        &self.previous_operand
    }

    pub fn operation(&self) -> Option<Operator> {
        self.operation
    }

    pub fn should_reset_display(&self) -> bool {
        self.should_reset_display
    }

    /// Classify the current field combination.
    pub fn phase(&self) -> Phase {
        if self.operation.is_some() {
            if self.current_operand.is_empty() {
                Phase::OperatorChosen
            } else {
                Phase::EnteringSecond
            }
        } else if self.should_reset_display {
            if is_numeric(&self.current_operand) {
                Phase::Result
            } else {
                Phase::Error
            }
        } else if self.current_operand.is_empty() {
            Phase::Empty
        } else {
            Phase::EnteringFirst
        }
    }

    /// Clear everything.
    pub fn reset(&mut self) {
        *self = Self::default();
        debug!("calculator reset");
    }

    /// Remove the last typed character.
    ///
    /// Does nothing while a result or error is displayed.
    pub fn delete_last_char(&mut self) {
        if self.should_reset_display {
            trace!("delete ignored on finalized display");
            return;
        }
        self.current_operand.pop();
    }

    /// Append a digit or the decimal point to the current operand.
    ///
    /// After a result or error the new token starts a fresh operand. A second
    /// decimal point is rejected, as is any token that is neither a digit nor
    /// a point.
    pub fn append_digit_or_point(&mut self, token: char) {
        if !token.is_ascii_digit() && token != POINT {
            trace!(?token, "ignoring non-digit token");
            return;
        }

        if self.should_reset_display {
            self.current_operand.clear();
            self.should_reset_display = false;
        }

        if token == POINT && self.current_operand.contains(POINT) {
            trace!("second decimal point rejected");
            return;
        }

        self.current_operand.push(token);
    }

    /// Select the pending operator.
    ///
    /// With no current operand this only swaps an already pending operator.
    /// With both operands and an operator present, the pending operation is
    /// folded first, strictly left to right.
    pub fn choose_operator(&mut self, op: Operator) {
        if self.current_operand.is_empty() {
            if !self.previous_operand.is_empty() {
                debug!(%op, "pending operator replaced");
                self.operation = Some(op);
            }
            return;
        }

        if !self.previous_operand.is_empty() && self.operation.is_some() {
            self.compute();
        }

        debug!(%op, operand = %self.current_operand, "operator chosen");
        self.operation = Some(op);
        self.previous_operand = std::mem::take(&mut self.current_operand);
    }

    /// Apply the pending operator to both operands.
    ///
    /// Unparseable operands and a missing operator leave the state untouched.
    pub fn compute(&mut self) {
        let (Some(previous), Some(current)) = (
            parse_operand(&self.previous_operand),
            parse_operand(&self.current_operand),
        ) else {
            trace!(
                previous = %self.previous_operand,
                current = %self.current_operand,
                "compute skipped: operand is not a number"
            );
            return;
        };

        let Some(op) = self.operation else {
            trace!("compute skipped: no pending operator");
            return;
        };

        let value = match op.apply(previous, current) {
            Applied::Value(value) => value,
            Applied::DivideByZero => {
                self.display_error(DIVIDE_BY_ZERO_MESSAGE);
                return;
            }
        };

        if !value.is_finite() {
            self.display_error(RESULT_TOO_LARGE_MESSAGE);
            return;
        }

        self.current_operand = value_to_text(round_result(value));
        self.operation = None;
        self.previous_operand.clear();
        self.should_reset_display = true;
        debug!(%previous, %op, %current, result = %self.current_operand, "computed");
    }

    /// Replace the display with an error message.
    pub fn display_error(&mut self, message: &str) {
        debug!(error = message, "error displayed");
        self.current_operand = message.to_string();
        self.previous_operand.clear();
        self.operation = None;
        self.should_reset_display = true;
    }
}
