//! DNS resolution and classification.
//!
//! This module provides async CNAME lookups using `hickory-resolver` and the
//! classifier that sorts each candidate hostname into exactly one bucket:
//! - Match / NoMatch when the lookup produced a verdict
//! - Timeout, UnsupportedRecordType, NoSuchDomain, NoNameservers otherwise

mod classify;
mod lookup;

// Re-export public API
pub use classify::{classify, classify_all, classify_lookup, cname_matches, Bucket, Outcome};
pub use lookup::{categorize_resolve_error, categorize_response_code, CnameLookup, CnameResolver};
