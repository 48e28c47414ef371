//! Tracing subscriber setup.
//!
//! The terminal interface owns standard output, so logs only go to a file there. Headless runs log
//! to standard error.

use std::{fs::File, io, sync::Mutex};

use color_eyre::eyre::{eyre, Result};
use tracing_subscriber::EnvFilter;

use crate::config::{Config, Mode};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "off,mazetuine=info";

/// Builds the log filter from the environment, falling back to [`DEFAULT_FILTER`].
///
/// # Errors
///
/// This function may return an error if the fallback directive fails to parse.
pub fn filter() -> Result<EnvFilter> {
    Ok(EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?)
}

/// Installs the global tracing subscriber for `config`.
///
/// # Errors
///
/// This function may return errors if:
/// - The log file cannot be created
/// - A global subscriber is already installed
pub fn init(config: &Config) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(filter()?);

    let installed = match (&config.log_file, config.mode) {
        (Some(path), _) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(File::create(path)?))
            .try_init(),
        (None, Mode::Headless) => builder.with_writer(io::stderr).try_init(),
        (None, Mode::Interactive) => return Ok(()),
    };

    installed.map_err(|err| eyre!("failed to install the tracing subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn test_interactive_without_file_installs_nothing() {
        let config = Config::default();

        assert!(init(&config).is_ok());
    }
}
