//! Logging setup for the Mavvrik MCP server.
//!
//! The MCP transport owns stdout, so every log line goes to stderr. Level
//! defaults to INFO and can be raised with `--verbose` or overridden
//! entirely through `RUST_LOG`.

use tracing_subscriber::EnvFilter;

use crate::error::{MavvrikError, Result};

/// Initialize the tracing subscriber. Call once at startup.
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| MavvrikError::Configuration(format!("failed to init logging: {e}")))
}
