//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    API_TIMEOUT_SECS, DEFAULT_DNS_CONCURRENCY, DEFAULT_EDGERC_FILE, DEFAULT_EDGERC_SECTION,
    DNS_ATTEMPTS, DNS_TIMEOUT_SECS, EDGERC_ENV, EDGERC_SECTION_ENV, SWITCH_KEY_ENV,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Format of the final run summary written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Labeled hostname lists
    Plain,
    /// Pretty-printed JSON document
    Json,
}

/// Exit code policy applied after a completed audit.
///
/// Fatal errors (credentials, group listing) always exit with 1; this only
/// decides whether a finished run exits with 0 or 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 once the summary is printed
    Never,
    /// Exit 2 when any hostname got no verdict or any listing call failed
    Unresolved,
    /// Exit 2 when no hostname matched the edge hostname
    NoMatch,
}

/// Audit configuration.
///
/// Parsed from the command line (with environment fallbacks) by the binary, or
/// built programmatically by library callers.
///
/// # Examples
///
/// ```no_run
/// use edge_cname_audit::Config;
///
/// let config = Config {
///     edge_hostname: "www.example.com.edgekey.net".to_string(),
///     switch_key: "1-ABCDE:1-2RBL".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "edge_cname_audit",
    version,
    about = "Finds every property hostname CNAMEd to an edge hostname within an account"
)]
pub struct Config {
    /// Edge hostname the property hostnames are expected to CNAME to
    pub edge_hostname: String,

    /// Account switch key (empty for the credential's own account)
    #[arg(long, env = SWITCH_KEY_ENV, default_value = "", hide_env_values = true)]
    pub switch_key: String,

    /// Path to the .edgerc credentials file (defaults to ~/.edgerc)
    #[arg(long, env = EDGERC_ENV)]
    pub edgerc: Option<PathBuf>,

    /// Section of the .edgerc file holding the API credentials
    #[arg(long, env = EDGERC_SECTION_ENV, default_value = DEFAULT_EDGERC_SECTION)]
    pub section: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Summary output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output_format: OutputFormat,

    /// Number of hostnames resolved at once (1 = sequential)
    #[arg(long, default_value_t = DEFAULT_DNS_CONCURRENCY)]
    pub dns_concurrency: usize,

    /// DNS query timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub dns_timeout_secs: u64,

    /// DNS attempts per query
    #[arg(long, default_value_t = DNS_ATTEMPTS)]
    pub dns_attempts: usize,

    /// Management API request timeout in seconds
    #[arg(long, default_value_t = API_TIMEOUT_SECS)]
    pub api_timeout_secs: u64,

    /// Exit code policy for a completed audit
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            edge_hostname: String::new(),
            switch_key: String::new(),
            edgerc: None,
            section: DEFAULT_EDGERC_SECTION.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output_format: OutputFormat::Plain,
            dns_concurrency: DEFAULT_DNS_CONCURRENCY,
            dns_timeout_secs: DNS_TIMEOUT_SECS,
            dns_attempts: DNS_ATTEMPTS,
            api_timeout_secs: API_TIMEOUT_SECS,
            fail_on: FailOn::Never,
        }
    }
}

/// A configuration value that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is accepted
    pub message: String,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigValidationError {}

impl Config {
    /// Resolves the credentials file path.
    ///
    /// An explicit `--edgerc` (or `AKAMAI_EDGERC`) wins; otherwise the file is
    /// looked up as `.edgerc` in the user's home directory. When no home
    /// directory is known the bare file name is used relative to the working
    /// directory.
    pub fn edgerc_path(&self) -> PathBuf {
        if let Some(path) = &self.edgerc {
            return path.clone();
        }
        std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(|home| PathBuf::from(home).join(DEFAULT_EDGERC_FILE))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EDGERC_FILE))
    }

    /// Checks option ranges before any network work starts.
    ///
    /// # Errors
    ///
    /// Returns the first field found out of range.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.edge_hostname.trim().is_empty() {
            return Err(ConfigValidationError {
                field: "edge_hostname",
                message: "must not be empty (e.g. www.example.com.edgekey.net)".to_string(),
            });
        }
        if self.dns_concurrency == 0 {
            return Err(ConfigValidationError {
                field: "dns_concurrency",
                message: "must be greater than 0 (use 1 for sequential lookups)".to_string(),
            });
        }
        if self.dns_timeout_secs == 0 {
            return Err(ConfigValidationError {
                field: "dns_timeout_secs",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.dns_attempts == 0 {
            return Err(ConfigValidationError {
                field: "dns_attempts",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.api_timeout_secs == 0 {
            return Err(ConfigValidationError {
                field: "api_timeout_secs",
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
