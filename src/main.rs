//! deskcalc binary.
//!
//! Runs a key script once with `--keys`, or an interactive session reading
//! one key name or key script per line from stdin.

use std::io;

use tracing_subscriber::EnvFilter;

use deskcalc::cli::Cli;
use deskcalc::{DisplayConfig, Session};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    // Logs go to stderr; stdout carries the display.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    tracing::info!("deskcalc v{}", env!("CARGO_PKG_VERSION"));

    let config = DisplayConfig::resolve(cli.config.as_deref())?;
    let mut session = Session::new(config, cli.output_format());
    let mut stdout = io::stdout().lock();

    match &cli.keys {
        Some(script) => {
            session.handle_line(script)?;
            session.render_to(&mut stdout)?;
        }
        None => session.run(io::stdin().lock(), &mut stdout)?,
    }

    Ok(())
}
