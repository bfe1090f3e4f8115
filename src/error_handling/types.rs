//! Error type definitions.
//!
//! This module defines the error types used throughout the audit, one enum per
//! concern: initialization, credentials, API calls, and the audit pipeline.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Error types for loading EdgeGrid credentials from an `.edgerc` file.
#[derive(Error, Debug)]
pub enum CredentialsError {
    /// The credentials file could not be read.
    #[error("Failed to read credentials file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid INI.
    #[error("Failed to parse credentials file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: ::config::ConfigError,
    },

    /// The requested section does not exist in the file.
    #[error("Section [{section}] not found in credentials file {}", .path.display())]
    MissingSection { path: PathBuf, section: String },

    /// A required key is absent or empty in the section.
    #[error("Key '{key}' is missing from section [{section}] of {}", .path.display())]
    MissingKey {
        path: PathBuf,
        section: String,
        key: &'static str,
    },
}

/// Error types for a single management API call.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (connect, timeout, TLS...).
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: ReqwestError,
    },

    /// The API answered with a non-success status.
    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The body was not the JSON document we expected.
    #[error("Failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// The request URL could not be built.
    #[error("Invalid API URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// HTTP status of the failed call, when the API answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors that abort the whole audit before any DNS work happens.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The initial group listing answered with a non-success status.
    #[error("Group listing failed with HTTP {status}: {body}")]
    GroupListing { status: u16, body: String },

    /// The initial group listing could not be completed or decoded.
    #[error("Group listing failed: {0}")]
    Api(#[source] ApiError),
}

impl From<ApiError> for AuditError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { status, body, .. } => AuditError::GroupListing { status, body },
            other => AuditError::Api(other),
        }
    }
}
