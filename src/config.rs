//! Display configuration loaded from TOML.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculator::{DEFAULT_GROUP_SEPARATOR, Operator};

const CONFIG_DIR_NAME: &str = "deskcalc";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// How the two display lines are rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Thousands separator for the integer part.
    pub group_separator: String,
    /// Symbol shown for a pending multiplication.
    pub multiply_symbol: String,
    /// Symbol shown for a pending division.
    pub divide_symbol: String,
    /// Text shown on the current line when nothing is entered.
    pub empty_current: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            group_separator: DEFAULT_GROUP_SEPARATOR.to_string(),
            multiply_symbol: "×".to_string(),
            divide_symbol: "/".to_string(),
            empty_current: "0".to_string(),
        }
    }
}

impl DisplayConfig {
    /// Symbol shown after the previous operand for a pending operator.
    pub fn operator_symbol(&self, op: Operator) -> String {
        match op {
            Operator::Mul => self.multiply_symbol.clone(),
            Operator::Div => self.divide_symbol.clone(),
            Operator::Add | Operator::Sub => op.symbol().to_string(),
        }
    }

    /// Default config location: `$XDG_CONFIG_HOME/deskcalc/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Parse a config from TOML text.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a config file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text, path)?;
        debug!(path = %path.display(), "loaded display config");
        Ok(config)
    }

    /// Load an explicit config, or the default location if it exists.
    ///
    /// A missing file at the default location yields the defaults; an
    /// explicit path must exist.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            Some(path) => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            None => {
                warn!("no config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.group_separator, ",");
        assert_eq!(config.operator_symbol(Operator::Mul), "×");
        assert_eq!(config.operator_symbol(Operator::Div), "/");
        assert_eq!(config.operator_symbol(Operator::Add), "+");
        assert_eq!(config.operator_symbol(Operator::Sub), "-");
        assert_eq!(config.empty_current, "0");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config =
            DisplayConfig::from_toml("group_separator = \" \"\n", Path::new("inline")).unwrap();
        assert_eq!(config.group_separator, " ");
        assert_eq!(config.multiply_symbol, "×");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "multiply_symbol = \"x\"").unwrap();
        writeln!(file, "divide_symbol = \"÷\"").unwrap();

        let config = DisplayConfig::resolve(Some(file.path())).unwrap();
        assert_eq!(config.operator_symbol(Operator::Mul), "x");
        assert_eq!(config.operator_symbol(Operator::Div), "÷");
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "group_separator = ").unwrap();

        let err = DisplayConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_explicit_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DisplayConfig::resolve(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
