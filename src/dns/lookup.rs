//! CNAME record lookups.
//!
//! Resolver failures that are really answers (no record, NXDOMAIN, timeout)
//! are folded into the closed [`CnameLookup`] enum so callers can `match`
//! exhaustively instead of inspecting error chains.

use async_trait::async_trait;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::error::ProtoErrorKind;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

/// Result of one CNAME query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CnameLookup {
    /// CNAME targets returned for the name, as presented by the resolver
    Records(Vec<String>),
    /// The name exists but has no CNAME record
    NoAnswer,
    /// No response within the resolver's timeout and attempts
    Timeout,
    /// The server does not support the query type
    UnsupportedRecordType,
    /// NXDOMAIN
    NoSuchDomain,
    /// No nameserver produced a usable answer
    NoNameservers,
}

/// Anything that can answer "what does this name CNAME to".
#[async_trait]
pub trait CnameResolver: Send + Sync {
    async fn lookup_cname(&self, hostname: &str) -> CnameLookup;
}

#[async_trait]
impl CnameResolver for TokioAsyncResolver {
    async fn lookup_cname(&self, hostname: &str) -> CnameLookup {
        match self.lookup(hostname, RecordType::CNAME).await {
            Ok(lookup) => {
                let targets: Vec<String> = lookup
                    .iter()
                    .filter_map(|rdata| {
                        if let RData::CNAME(cname) = rdata {
                            Some(cname.0.to_utf8())
                        } else {
                            None
                        }
                    })
                    .collect();
                if targets.is_empty() {
                    CnameLookup::NoAnswer
                } else {
                    CnameLookup::Records(targets)
                }
            }
            Err(e) => {
                let outcome = categorize_resolve_error(&e);
                log::debug!("CNAME lookup for {hostname} failed ({outcome:?}): {e}");
                outcome
            }
        }
    }
}

/// Maps a resolver error onto a lookup outcome.
pub fn categorize_resolve_error(err: &ResolveError) -> CnameLookup {
    match err.kind() {
        ResolveErrorKind::Timeout => CnameLookup::Timeout,
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            categorize_response_code(*response_code)
        }
        ResolveErrorKind::Proto(proto) => match proto.kind() {
            ProtoErrorKind::Timeout => CnameLookup::Timeout,
            ProtoErrorKind::UnknownRecordTypeValue(_) => CnameLookup::UnsupportedRecordType,
            _ => CnameLookup::NoNameservers,
        },
        ResolveErrorKind::NoConnections => CnameLookup::NoNameservers,
        _ => CnameLookup::NoNameservers,
    }
}

/// Maps the response code of an answer-less response onto a lookup outcome.
pub fn categorize_response_code(code: ResponseCode) -> CnameLookup {
    match code {
        ResponseCode::NoError => CnameLookup::NoAnswer,
        ResponseCode::NXDomain => CnameLookup::NoSuchDomain,
        ResponseCode::NotImp => CnameLookup::UnsupportedRecordType,
        // SERVFAIL, REFUSED and friends: every server failed us
        _ => CnameLookup::NoNameservers,
    }
}
