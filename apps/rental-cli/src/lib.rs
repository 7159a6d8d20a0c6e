//! # rental-cli
//!
//! Terminal front end for the tool rental counter.
//!
//! ## Layout
//! - [`config`] - Environment variables and flags
//! - [`session`] - The prompt loop
//! - [`error`] - Terminal and configuration failures
//!
//! `main.rs` only wires these together: it loads configuration, installs
//! the tracing subscriber and runs a [`Session`] over stdin/stdout.

pub mod config;
pub mod error;
pub mod session;

pub use config::{CliConfig, ConfigError, Invocation, OutputFormat};
pub use error::{CliError, CliResult};
pub use session::Session;
