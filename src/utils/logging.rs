//! Diagnostic logging (tracing) for the CLI.
//!
//! Silent by default so the terminal only shows the user-facing messages from
//! `ui::messages`. `--verbose` turns on debug events for this crate, otherwise
//! `RUST_LOG` is honoured.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub fn enable_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(format!(
            "{}={}",
            env!("CARGO_PKG_NAME").replace('-', "_"),
            LevelFilter::DEBUG
        ))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"))
    };

    // A second init (tests, the shell re-entering) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
