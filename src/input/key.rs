//! Platform-independent keypad keys.

use thiserror::Error;
use tracing::trace;

use crate::calculator::{Calculator, Operator, POINT};

/// A keypad key or its keyboard equivalent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// `0` through `9`.
    Digit(char),
    /// The decimal point.
    Point,
    /// `+`, `-`, `*`, `/`.
    Operator(Operator),
    /// `=` or Enter.
    Equals,
    /// Escape or `c`.
    Clear,
    /// Backspace.
    Delete,
}

/// Errors from reading key scripts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("unknown key {key:?} at position {position}")]
    Unknown { key: char, position: usize },
}

impl Key {
    /// Map a single typed character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(Key::Digit(c)),
            POINT => Some(Key::Point),
            '=' | '\r' | '\n' => Some(Key::Equals),
            'c' | 'C' => Some(Key::Clear),
            '\u{8}' | '\u{7f}' => Some(Key::Delete),
            _ => Operator::from_symbol(c).map(Key::Operator),
        }
    }

    /// Map a keyboard key name (`"7"`, `"Enter"`, `"Escape"`, `"Backspace"`).
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Enter" => Some(Key::Equals),
            "Escape" => Some(Key::Clear),
            "Backspace" => Some(Key::Delete),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c),
                    _ => None,
                }
            }
        }
    }
}

/// Parse a key script such as `"12+3="`.
///
/// Spaces and tabs are skipped; a line break counts as Enter.
///
/// # Errors
///
/// Returns [`KeyError::Unknown`] for the first character that is not a key.
pub fn parse_script(script: &str) -> Result<Vec<Key>, KeyError> {
    script
        .chars()
        .enumerate()
        .filter(|(_, c)| *c == '\r' || *c == '\n' || !c.is_whitespace())
        .map(|(position, c)| Key::from_char(c).ok_or(KeyError::Unknown { key: c, position }))
        .collect()
}

impl Calculator {
    /// Dispatch a key to the matching operation.
    pub fn press(&mut self, key: Key) {
        trace!(?key, "key pressed");
        match key {
            Key::Digit(d) => self.append_digit_or_point(d),
            Key::Point => self.append_digit_or_point(POINT),
            Key::Operator(op) => self.choose_operator(op),
            Key::Equals => self.compute(),
            Key::Clear => self.reset(),
            Key::Delete => self.delete_last_char(),
        }
    }

    /// Dispatch every key in order.
    pub fn press_all(&mut self, keys: impl IntoIterator<Item = Key>) {
        for key in keys {
            self.press(key);
        }
    }
}
