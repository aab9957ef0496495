//! Command Line Interface for the gazetteer index schema.

pub mod args;
pub mod commands;
pub mod output;

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*, registry};

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use output::*;

/// Map the CLI verbosity level to a log level.
pub fn log_level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Install the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flags when set.
pub fn configure_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbosity).to_string()));

    let _ = registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0), Level::ERROR);
        assert_eq!(log_level(1), Level::WARN);
        assert_eq!(log_level(2), Level::INFO);
        assert_eq!(log_level(5), Level::DEBUG);
    }
}
