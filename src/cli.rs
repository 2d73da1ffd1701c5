//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::session::OutputFormat;

/// Keypad calculator with a two-line display.
#[derive(Parser, Debug, Clone)]
#[command(name = "deskcalc")]
#[command(about = "Keypad calculator: running accumulator with one pending operator")]
#[command(version)]
pub struct Cli {
    /// Display config file (defaults to the user config directory).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Run a key script such as "12+3=" and print the final display.
    #[arg(long)]
    pub keys: Option<String>,

    /// Print display lines as JSON.
    #[arg(long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let cli = Cli::parse_from(["deskcalc"]);
        assert!(cli.config.is_none());
        assert!(cli.keys.is_none());
        assert_eq!(cli.output_format(), OutputFormat::Text);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_key_script_and_json() {
        let cli = Cli::parse_from(["deskcalc", "--keys", "5+3*2=", "--json"]);
        assert_eq!(cli.keys.as_deref(), Some("5+3*2="));
        assert_eq!(cli.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_config_path() {
        let cli = Cli::parse_from(["deskcalc", "--config", "/tmp/calc.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/calc.toml")));
    }
}
