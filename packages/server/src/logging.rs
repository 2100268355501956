//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::error::ServerError;

/// Install a global `fmt` subscriber filtered by `directives`.
pub fn init(directives: &str) -> Result<(), ServerError> {
    let filter = EnvFilter::try_new(directives).map_err(|e| ServerError::Logging {
        message: format!("invalid log filter '{}': {}", directives, e),
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| ServerError::Logging {
            message: e.to_string(),
        })
}
