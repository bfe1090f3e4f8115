//! Error handling.
//!
//! This module provides the error types for every fallible stage of an audit.
//!
//! Errors are split into:
//! - **Fatal**: unreadable credentials and a failed group listing stop the run
//! - **Recoverable**: failed per-contract or per-property listings, recorded in
//!   the run summary as enumeration failures while the walk continues
//!
//! DNS outcomes are never errors; see [`crate::dns::CnameLookup`].

mod types;

// Re-export public API
pub use types::{ApiError, AuditError, CredentialsError, InitializationError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_converts_to_group_listing() {
        let err = ApiError::Status {
            endpoint: "/papi/v1/groups".to_string(),
            status: 403,
            body: "{\"title\":\"Forbidden\"}".to_string(),
        };
        assert_eq!(err.status(), Some(403));
        match AuditError::from(err) {
            AuditError::GroupListing { status, body } => {
                assert_eq!(status, 403);
                assert!(body.contains("Forbidden"));
            }
            other => panic!("Expected GroupListing, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_error_stays_api_error() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ApiError::Decode {
            endpoint: "/papi/v1/groups".to_string(),
            source,
        };
        assert_eq!(err.status(), None);
        assert!(matches!(AuditError::from(err), AuditError::Api(_)));
    }

    #[test]
    fn test_credentials_error_messages_name_the_file() {
        let err = CredentialsError::MissingKey {
            path: "/home/user/.edgerc".into(),
            section: "default".to_string(),
            key: "client_secret",
        };
        let msg = err.to_string();
        assert!(msg.contains("client_secret"));
        assert!(msg.contains("[default]"));
        assert!(msg.contains("/home/user/.edgerc"));
    }
}
