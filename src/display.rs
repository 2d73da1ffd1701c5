//! The two display lines rendered from calculator state.

use serde::Serialize;

use crate::calculator::{Calculator, Phase, format_with_separator, is_numeric};
use crate::config::DisplayConfig;

/// Text for the previous-operand line and the current-operand line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DisplayLines {
    /// Previous operand and pending operator, e.g. `"1,250 ×"`.
    pub previous: String,
    /// Live input, a result, or an error message.
    pub current: String,
    /// Whether `current` holds an error message.
    pub is_error: bool,
}

impl DisplayLines {
    /// Render both lines from a calculator.
    pub fn render(calc: &Calculator, config: &DisplayConfig) -> Self {
        Self {
            previous: previous_line(calc, config),
            current: current_line(calc, config),
            is_error: calc.phase() == Phase::Error,
        }
    }
}

/// Current line: placeholder when empty, messages as-is, numbers grouped.
fn current_line(calc: &Calculator, config: &DisplayConfig) -> String {
    let current = calc.current_operand();
    if current.is_empty() {
        config.empty_current.clone()
    } else if !is_numeric(current) {
        current.to_string()
    } else {
        format_with_separator(current, &config.group_separator)
    }
}

/// Previous line: `"<previous> <op>"` while an operator is pending.
fn previous_line(calc: &Calculator, config: &DisplayConfig) -> String {
    match calc.operation() {
        Some(op) => format!(
            "{} {}",
            format_with_separator(calc.previous_operand(), &config.group_separator),
            config.operator_symbol(op)
        ),
        None => String::new(),
    }
}

impl Calculator {
    /// Render both display lines with the default configuration.
    pub fn display_lines(&self) -> DisplayLines {
        DisplayLines::render(self, &DisplayConfig::default())
    }

    /// Displayable text for the current line.
    pub fn current_display(&self) -> String {
        current_line(self, &DisplayConfig::default())
    }

    /// Displayable text for the previous line with its pending operator.
    pub fn previous_display(&self) -> String {
        previous_line(self, &DisplayConfig::default())
    }
}
