//! Line-oriented terminal session around one calculator.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::calculator::Calculator;
use crate::config::DisplayConfig;
use crate::display::DisplayLines;
use crate::input::{Key, parse_script};

/// Output style for rendered display lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Two plain text lines.
    #[default]
    Text,
    /// One JSON object per render.
    Json,
}

/// A calculator owned by a terminal session.
#[derive(Debug)]
pub struct Session {
    calculator: Calculator,
    config: DisplayConfig,
    format: OutputFormat,
}

impl Session {
    pub fn new(config: DisplayConfig, format: OutputFormat) -> Self {
        Self {
            calculator: Calculator::new(),
            config,
            format,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Current rendering of both display lines.
    pub fn lines(&self) -> DisplayLines {
        DisplayLines::render(&self.calculator, &self.config)
    }

    /// Apply one input line: a key name (`Enter`, `Escape`, `Backspace`)
    /// or a key script such as `12+3=`.
    ///
    /// Returns `false` when the line asks to end the session.
    pub fn handle_line(&mut self, line: &str) -> anyhow::Result<bool> {
        let line = line.trim();
        match line {
            "" => return Ok(true),
            "quit" | "exit" => return Ok(false),
            _ => {}
        }

        if let Some(key) = Key::from_key_name(line) {
            self.calculator.press(key);
            return Ok(true);
        }

        let keys = parse_script(line)?;
        self.calculator.press_all(keys);
        Ok(true)
    }

    /// Write the display lines in the configured format.
    pub fn render_to(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let lines = self.lines();
        match self.format {
            OutputFormat::Text => {
                writeln!(out, "{}", lines.previous)?;
                writeln!(out, "{}", lines.current)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &lines)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// Read lines until EOF or `quit`, rendering after each one.
    ///
    /// Unknown keys are reported on `out` and the session continues.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
        self.render_to(out)?;
        for line in input.lines() {
            let line = line?;
            match self.handle_line(&line) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    warn!(error = %e, "rejected input line");
                    writeln!(out, "error: {}", e)?;
                    continue;
                }
            }
            self.render_to(out)?;
        }
        info!("session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_text(input: &str) -> String {
        let mut session = Session::new(DisplayConfig::default(), OutputFormat::Text);
        let mut out = Vec::new();
        session.run(Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_handle_key_names() {
        let mut session = Session::new(DisplayConfig::default(), OutputFormat::Text);
        assert!(session.handle_line("12+3").unwrap());
        assert!(session.handle_line("Enter").unwrap());
        assert_eq!(session.calculator().current_operand(), "15");
        assert!(session.handle_line("Escape").unwrap());
        assert_eq!(session.calculator(), &Calculator::new());
        assert!(!session.handle_line("quit").unwrap());
    }

    #[test]
    fn test_run_renders_after_each_line() {
        let output = run_text("1250\n*\n");
        assert_eq!(output, "\n0\n\n1,250\n1,250 ×\n0\n");
    }

    #[test]
    fn test_run_reports_unknown_keys() {
        let output = run_text("2^3\n");
        assert!(output.contains("error: unknown key '^' at position 1"));
    }

    #[test]
    fn test_run_stops_at_quit() {
        let output = run_text("7\nquit\n8\n");
        assert_eq!(output, "\n0\n\n7\n");
    }

    #[test]
    fn test_json_output() {
        let mut session = Session::new(DisplayConfig::default(), OutputFormat::Json);
        session.handle_line("6/3=").unwrap();
        let mut out = Vec::new();
        session.render_to(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"previous\":\"\",\"current\":\"2\",\"is_error\":false}\n"
        );
    }
}
