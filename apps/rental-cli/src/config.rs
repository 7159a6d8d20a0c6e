//! # CLI Configuration
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, then adjusted by command-line flags.
//!
//! ## Environment Variables
//! - `TOOL_RENTAL_LOG`: tracing filter directive (default: `warn`)
//! - `TOOL_RENTAL_OUTPUT`: `text` or `json` (default: `text`)
//!
//! ## Flags
//! - `--json`: same as `TOOL_RENTAL_OUTPUT=json`
//! - `--help`, `-h`: print usage and exit

use std::env;
use std::str::FromStr;

pub const LOG_ENV: &str = "TOOL_RENTAL_LOG";
pub const OUTPUT_ENV: &str = "TOOL_RENTAL_OUTPUT";

/// How the finished agreement is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Itemized `Label: value` lines
    #[default]
    Text,
    /// Pretty-printed JSON object
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue(OUTPUT_ENV.to_string())),
        }
    }
}

/// Terminal app configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,

    /// Agreement output format
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            log_filter: "warn".to_string(),
            output: OutputFormat::Text,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run(CliConfig),
    Help,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = CliConfig::default();

        if let Some(filter) = lookup(LOG_ENV) {
            if filter.trim().is_empty() {
                return Err(ConfigError::InvalidValue(LOG_ENV.to_string()));
            }
            config.log_filter = filter;
        }

        if let Some(output) = lookup(OUTPUT_ENV) {
            config.output = output.parse()?;
        }

        Ok(config)
    }

    /// Applies command-line flags on top of this configuration.
    pub fn with_args<I, S>(mut self, args: I) -> Result<Invocation, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            match arg.as_ref() {
                "--json" => self.output = OutputFormat::Json,
                "--help" | "-h" => return Ok(Invocation::Help),
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
        }

        Ok(Invocation::Run(self))
    }
}

/// Usage text for `--help`.
pub const USAGE: &str = "\
Tool Rental Checkout

Usage: tool-rental [OPTIONS]

Options:
  --json       Print the rental agreement as JSON
  -h, --help   Show this help message

Environment:
  TOOL_RENTAL_LOG     Log filter written to stderr (default: warn)
  TOOL_RENTAL_OUTPUT  text | json (default: text)
";

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
}
