//! tracing-subscriber setup

use std::io;

use prodboard_domain::{LoggingConfig, ProdboardError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` wins, otherwise the configured directive.
///
/// # Errors
/// Returns `ProdboardError::Config` if the configured directive is invalid.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.filter).map_err(|e| {
            ProdboardError::Config(format!("Invalid log filter '{}': {e}", config.filter))
        }),
    }
}

/// Install the global subscriber writing to stderr, so stdout stays free for
/// command output.
///
/// # Errors
/// Returns `ProdboardError::Config` for an invalid filter and
/// `ProdboardError::Internal` if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr);

    let installed = if config.json {
        builder.json().with_current_span(false).try_init()
    } else {
        builder.with_target(false).compact().try_init()
    };

    installed.map_err(|e| ProdboardError::Internal(format!("Logging already initialised: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_directive_is_config_error() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggingConfig { filter: "prodboard=loud".into(), json: false };
        assert!(matches!(env_filter(&config), Err(ProdboardError::Config(_))));
    }

    #[test]
    fn default_directive_parses() {
        assert!(env_filter(&LoggingConfig::default()).is_ok());
    }
}
