//! Binary operators the accumulator can hold pending.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A pending arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

/// Outcome of applying an operator to two operands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Applied {
    Value(f64),
    DivideByZero,
}

/// Text that does not name an operator.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown operator: {0:?}")]
pub struct UnknownOperator(pub String);

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Operator; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// The ASCII symbol used for input (`+`, `-`, `*`, `/`).
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Map an input character to an operator.
    pub fn from_symbol(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == c)
    }

    /// Apply `previous <op> current`.
    pub fn apply(self, previous: f64, current: f64) -> Applied {
        match self {
            Self::Add => Applied::Value(previous + current),
            Self::Sub => Applied::Value(previous - current),
            Self::Mul => Applied::Value(previous * current),
            Self::Div if current == 0.0 => Applied::DivideByZero,
            Self::Div => Applied::Value(previous / current),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_symbol(c).ok_or_else(|| UnknownOperator(s.to_string())),
            _ => Err(UnknownOperator(s.to_string())),
        }
    }
}
