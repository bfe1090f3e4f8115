//! Hostname classification against the target edge hostname.

use futures::stream::{self, StreamExt};
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

use super::lookup::{CnameLookup, CnameResolver};
use crate::summary::RunSummary;

/// The disjoint result buckets of a run, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Match,
    NoMatch,
    Timeout,
    UnsupportedRecordType,
    NoSuchDomain,
    NoNameservers,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Match => "CNAMEd to the edge hostname",
            Bucket::NoMatch => "not CNAMEd to the edge hostname",
            Bucket::Timeout => "DNS resolution timed out",
            Bucket::UnsupportedRecordType => "DNS resolution failed with an unsupported record type",
            Bucket::NoSuchDomain => "DNS resolution returned NXDOMAIN",
            Bucket::NoNameservers => "DNS resolution found no usable nameservers",
        }
    }

    /// True for buckets whose hostnames received no match/no-match verdict.
    pub fn is_failure(&self) -> bool {
        !matches!(self, Bucket::Match | Bucket::NoMatch)
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of one candidate hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Match(String),
    NoMatch(String),
    Timeout(String),
    UnsupportedRecordType(String),
    NoSuchDomain(String),
    NoNameservers(String),
}

impl Outcome {
    pub fn bucket(&self) -> Bucket {
        match self {
            Outcome::Match(_) => Bucket::Match,
            Outcome::NoMatch(_) => Bucket::NoMatch,
            Outcome::Timeout(_) => Bucket::Timeout,
            Outcome::UnsupportedRecordType(_) => Bucket::UnsupportedRecordType,
            Outcome::NoSuchDomain(_) => Bucket::NoSuchDomain,
            Outcome::NoNameservers(_) => Bucket::NoNameservers,
        }
    }

    pub fn hostname(&self) -> &str {
        match self {
            Outcome::Match(h)
            | Outcome::NoMatch(h)
            | Outcome::Timeout(h)
            | Outcome::UnsupportedRecordType(h)
            | Outcome::NoSuchDomain(h)
            | Outcome::NoNameservers(h) => h,
        }
    }

    pub fn into_hostname(self) -> String {
        match self {
            Outcome::Match(h)
            | Outcome::NoMatch(h)
            | Outcome::Timeout(h)
            | Outcome::UnsupportedRecordType(h)
            | Outcome::NoSuchDomain(h)
            | Outcome::NoNameservers(h) => h,
        }
    }
}

/// Compares a CNAME target with the edge hostname.
///
/// DNS names are case-insensitive and may or may not carry the root dot, so
/// both sides are lowercased and stripped of one trailing dot.
pub fn cname_matches(target: &str, edge_hostname: &str) -> bool {
    normalize_name(target) == normalize_name(edge_hostname)
}

fn normalize_name(name: &str) -> String {
    let name = name.trim();
    name.strip_suffix('.').unwrap_or(name).to_ascii_lowercase()
}

/// Turns a lookup result into an outcome for `hostname`.
pub fn classify_lookup(hostname: &str, lookup: CnameLookup, edge_hostname: &str) -> Outcome {
    let hostname = hostname.to_string();
    match lookup {
        CnameLookup::Timeout => Outcome::Timeout(hostname),
        CnameLookup::UnsupportedRecordType => Outcome::UnsupportedRecordType(hostname),
        CnameLookup::NoSuchDomain => Outcome::NoSuchDomain(hostname),
        CnameLookup::NoNameservers => Outcome::NoNameservers(hostname),
        CnameLookup::NoAnswer => Outcome::NoMatch(hostname),
        CnameLookup::Records(targets) => {
            if targets.iter().any(|t| cname_matches(t, edge_hostname)) {
                Outcome::Match(hostname)
            } else {
                Outcome::NoMatch(hostname)
            }
        }
    }
}

/// Looks up and classifies one candidate hostname.
pub async fn classify<R: CnameResolver + ?Sized>(
    resolver: &R,
    hostname: &str,
    edge_hostname: &str,
) -> Outcome {
    let lookup = resolver.lookup_cname(hostname).await;
    let outcome = classify_lookup(hostname, lookup, edge_hostname);
    log::debug!("{} -> {:?}", outcome.hostname(), outcome.bucket());
    outcome
}

/// Classifies every candidate and records the outcomes in `summary`.
///
/// Up to `concurrency` lookups run at once; outcomes are recorded in candidate
/// order whatever the concurrency, and one failed lookup never stops the rest.
pub async fn classify_all<R: CnameResolver + ?Sized>(
    resolver: &R,
    candidates: &[String],
    edge_hostname: &str,
    concurrency: usize,
    summary: &mut RunSummary,
) {
    let outcomes: Vec<Outcome> = stream::iter(candidates)
        .map(|hostname| classify(resolver, hostname, edge_hostname))
        .buffered(concurrency.max(1))
        .collect()
        .await;

    for outcome in outcomes {
        summary.record(outcome);
    }
}
