//! Keypad calculator core.
//!
//! A running accumulator with one pending operator, driven by discrete key
//! events and rendered to a two-line display. The [`Calculator`] state
//! machine has no knowledge of any input or rendering technology; the
//! [`input`], [`display`] and [`session`] modules are thin callers around it.

pub mod calculator;
pub mod cli;
pub mod config;
pub mod display;
pub mod input;
pub mod session;

pub use calculator::{Calculator, Operator, Phase, format_for_display};
pub use config::{ConfigError, DisplayConfig};
pub use display::DisplayLines;
pub use input::{Key, KeyError, parse_script};
pub use session::{OutputFormat, Session};
