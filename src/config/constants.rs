//! Configuration constants.
//!
//! This module defines the defaults and fixed values used throughout the audit,
//! including timeouts, environment variable names and API paths.

// Network operation timeouts
/// DNS query timeout in seconds.
/// Most CNAME queries complete in well under a second; 5s leaves room for slow
/// authoritative servers without stalling a sequential run for long.
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// Number of attempts the resolver makes per query before reporting a timeout.
pub const DNS_ATTEMPTS: usize = 2;
/// Per-request timeout for management API calls in seconds.
pub const API_TIMEOUT_SECS: u64 = 30;
/// Number of hostnames resolved at once (1 = strictly sequential).
pub const DEFAULT_DNS_CONCURRENCY: usize = 1;

// Credentials discovery
/// Environment variable naming the credentials file.
pub const EDGERC_ENV: &str = "AKAMAI_EDGERC";
/// Environment variable naming the credentials section.
pub const EDGERC_SECTION_ENV: &str = "AKAMAI_EDGERC_SECTION";
/// Environment variable holding the account switch key.
pub const SWITCH_KEY_ENV: &str = "AKAMAI_ACCOUNT_SWITCH_KEY";
/// Credentials file name looked up in the home directory.
pub const DEFAULT_EDGERC_FILE: &str = ".edgerc";
/// Section used when neither the CLI nor the environment names one.
pub const DEFAULT_EDGERC_SECTION: &str = "default";

// Property Manager API
pub const PAPI_GROUPS_PATH: &str = "/papi/v1/groups";
pub const PAPI_PROPERTIES_PATH: &str = "/papi/v1/properties";
/// Header asking PAPI to return prefixed identifiers (`grp_`, `ctr_`, `prp_`).
pub const PAPI_USE_PREFIXES_HEADER: &str = "PAPI-Use-Prefixes";

// Error message size limits
/// Maximum response body length kept in error messages (in characters).
/// Error pages can be large HTML documents; the head is enough to diagnose.
pub const MAX_ERROR_BODY_CHARS: usize = 2000;
