//! edge_cname_audit library: finds the property hostnames CNAMEd to an edge hostname
//!
//! This library walks every group, contract and property of a CDN account
//! through the Property Manager API, collects the hostnames bound to each
//! property's latest version, and resolves their CNAME records to see which of
//! them point at a given edge hostname.
//!
//! # Example
//!
//! ```no_run
//! use edge_cname_audit::{render_plain, run_audit, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     edge_hostname: "www.example.com.edgekey.net".to_string(),
//!     ..Default::default()
//! };
//!
//! let summary = run_audit(&config).await?;
//! print!("{}", render_plain(&summary));
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod api;
pub mod config;
pub mod credentials;
pub mod dns;
pub mod enumerate;
pub mod error_handling;
pub mod initialization;
pub mod summary;

// Re-export public API
pub use config::{Config, FailOn, LogFormat, LogLevel, OutputFormat};
pub use run::{audit_account, run_audit};
pub use summary::{exit_code, render_json, render_plain, RunSummary};

// Internal run module (contains the pipeline orchestration)
mod run {
    use anyhow::{Context, Result};
    use log::info;

    use crate::api::PapiClient;
    use crate::config::Config;
    use crate::credentials::Credentials;
    use crate::dns::{classify_all, CnameResolver};
    use crate::enumerate::{collect_all, enumerate_objects};
    use crate::error_handling::AuditError;
    use crate::initialization::{init_client, init_resolver};
    use crate::summary::RunSummary;

    /// Runs an audit with the provided configuration.
    ///
    /// This is the main entry point for the library. It loads the credentials,
    /// sets up the HTTP client and DNS resolver, and runs the full pipeline.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The configuration is out of range
    /// - The credentials file or section cannot be read
    /// - The HTTP client or DNS resolver cannot be initialized
    /// - The initial group listing fails
    ///
    /// Per-hostname DNS failures and failed nested listings are not errors;
    /// they are reported in the returned summary.
    pub async fn run_audit(config: &Config) -> Result<RunSummary> {
        config.validate().context("Invalid configuration")?;

        let edgerc = config.edgerc_path();
        let credentials = Credentials::from_edgerc(&edgerc, &config.section)
            .context("Failed to load API credentials")?;
        info!(
            "Using credentials from section [{}] of {}",
            config.section,
            edgerc.display()
        );

        let http = init_client(config).context("Failed to initialize HTTP client")?;
        let client = PapiClient::new(http, &credentials, &config.switch_key)
            .context("Failed to initialize API client")?;
        let resolver = init_resolver(config).context("Failed to initialize DNS resolver")?;

        let summary = audit_account(
            &client,
            resolver.as_ref(),
            &config.edge_hostname,
            config.dns_concurrency,
        )
        .await?;
        Ok(summary)
    }

    /// Runs the enumeration and classification pipeline.
    ///
    /// Walks the account with `client`, then classifies every candidate hostname
    /// with `resolver`, `dns_concurrency` lookups at a time.
    ///
    /// # Errors
    ///
    /// Returns `AuditError` if the group listing fails. No DNS lookup is made in
    /// that case.
    pub async fn audit_account<R: CnameResolver + ?Sized>(
        client: &PapiClient,
        resolver: &R,
        edge_hostname: &str,
        dns_concurrency: usize,
    ) -> Result<RunSummary, AuditError> {
        let mut summary = RunSummary::new(edge_hostname, client.switch_key());

        let descriptors = enumerate_objects(client, &mut summary).await?;
        let candidates = collect_all(client, &descriptors, &mut summary).await;

        info!("Proceeding with DNS (CNAME record) resolution of all property hostnames...");
        classify_all(
            resolver,
            &candidates,
            edge_hostname,
            dns_concurrency,
            &mut summary,
        )
        .await;
        info!(
            "Resolved {} hostnames: {} matching, {} without a verdict",
            summary.classified_count(),
            summary.matches.len(),
            summary.unresolved_count()
        );

        Ok(summary)
    }
}
