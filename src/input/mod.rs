//! Input mapping from keys and key scripts to calculator operations.

mod key;

pub use key::{Key, KeyError, parse_script};
