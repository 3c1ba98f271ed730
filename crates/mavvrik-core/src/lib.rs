//! # mavvrik-core
//!
//! Shared foundation for the Mavvrik cost intelligence MCP server:
//!
//! - [`MavvrikError`] - classified failure taxonomy for the query pipeline
//! - [`Settings`] - process-wide configuration, built once at startup
//! - [`init_logging`] - stderr tracing setup (stdout belongs to MCP)

pub mod config;
pub mod error;
pub mod logging;

pub use config::Settings;
pub use error::{MavvrikError, Result};
pub use logging::init_logging;
