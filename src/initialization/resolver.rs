//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the DNS resolver for CNAME lookups.
///
/// Uses the system resolver configuration (`/etc/resolv.conf` or the platform
/// equivalent) so answers match what the operator's own tools see. If the system
/// configuration cannot be read, falls back to the library defaults (Google DNS:
/// 8.8.8.8, 8.8.4.4) and logs a warning.
///
/// Timeout and attempts come from the configuration; they are the only timeout
/// control a run has over DNS.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the options are unusable.
pub fn init_resolver(config: &Config) -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    if config.dns_attempts == 0 {
        return Err(InitializationError::DnsResolverError(
            "at least one attempt per query is required".to_string(),
        ));
    }

    let (resolver_config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            log::warn!(
                "Failed to read system DNS configuration ({}); using default resolvers",
                e
            );
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    opts.timeout = Duration::from_secs(config.dns_timeout_secs);
    opts.attempts = config.dns_attempts;
    // Property hostnames are fully qualified; never append search domains
    opts.ndots = 0;

    Ok(Arc::new(TokioAsyncResolver::tokio(resolver_config, opts)))
}
