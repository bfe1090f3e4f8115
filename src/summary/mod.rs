//! Run summary accumulated across the audit stages.
//!
//! The walker and collector fill in the counters and enumeration failures, the
//! classifier appends every outcome to its bucket, and the reporter renders the
//! finished value.

mod report;

use serde::Serialize;

use crate::config::FailOn;
use crate::dns::{Bucket, Outcome};

pub use report::{render_json, render_plain};

/// Where in the hierarchy a listing call failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum FailureScope {
    /// Listing the properties of a (contract, group) pair failed.
    Contract {
        group_id: String,
        contract_id: String,
    },
    /// Listing the hostnames of a property version failed.
    Property {
        property_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        property_name: Option<String>,
        version: u32,
        contract_id: String,
        group_id: String,
    },
}

impl std::fmt::Display for FailureScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureScope::Contract {
                group_id,
                contract_id,
            } => write!(f, "properties of contract {contract_id} in group {group_id}"),
            FailureScope::Property {
                property_id,
                property_name: Some(name),
                version,
                ..
            } => write!(
                f,
                "hostnames of property {name} ({property_id}) version {version}"
            ),
            FailureScope::Property {
                property_id,
                property_name: None,
                version,
                ..
            } => write!(f, "hostnames of property {property_id} version {version}"),
        }
    }
}

/// A listing call that failed without aborting the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumerationFailure {
    #[serde(flatten)]
    pub scope: FailureScope,
    /// HTTP status, when the API answered at all
    pub status: Option<u16>,
    pub reason: String,
}

/// Everything one audit run found.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub edge_hostname: String,
    pub switch_key: String,
    pub groups: usize,
    pub contracts: usize,
    pub properties: usize,
    pub hostnames: usize,
    pub matches: Vec<String>,
    pub no_match: Vec<String>,
    pub timeout: Vec<String>,
    pub unsupported_record_type: Vec<String>,
    pub no_such_domain: Vec<String>,
    pub no_nameservers: Vec<String>,
    pub enumeration_failures: Vec<EnumerationFailure>,
}

impl RunSummary {
    pub fn new(edge_hostname: &str, switch_key: &str) -> Self {
        Self {
            edge_hostname: edge_hostname.to_string(),
            switch_key: switch_key.to_string(),
            ..Default::default()
        }
    }

    /// Appends an outcome's hostname to its bucket.
    pub fn record(&mut self, outcome: Outcome) {
        let bucket = outcome.bucket();
        self.bucket_mut(bucket).push(outcome.into_hostname());
    }

    pub fn bucket(&self, bucket: Bucket) -> &[String] {
        match bucket {
            Bucket::Match => &self.matches,
            Bucket::NoMatch => &self.no_match,
            Bucket::Timeout => &self.timeout,
            Bucket::UnsupportedRecordType => &self.unsupported_record_type,
            Bucket::NoSuchDomain => &self.no_such_domain,
            Bucket::NoNameservers => &self.no_nameservers,
        }
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut Vec<String> {
        match bucket {
            Bucket::Match => &mut self.matches,
            Bucket::NoMatch => &mut self.no_match,
            Bucket::Timeout => &mut self.timeout,
            Bucket::UnsupportedRecordType => &mut self.unsupported_record_type,
            Bucket::NoSuchDomain => &mut self.no_such_domain,
            Bucket::NoNameservers => &mut self.no_nameservers,
        }
    }

    /// Number of hostnames that received no match/no-match verdict.
    pub fn unresolved_count(&self) -> usize {
        self.timeout.len()
            + self.unsupported_record_type.len()
            + self.no_such_domain.len()
            + self.no_nameservers.len()
    }

    /// Number of hostnames recorded in any bucket.
    pub fn classified_count(&self) -> usize {
        self.matches.len() + self.no_match.len() + self.unresolved_count()
    }

    /// True when the verdict needs a caveat: some hostnames went unresolved or
    /// some part of the account could not be enumerated.
    pub fn is_partial(&self) -> bool {
        self.unresolved_count() > 0 || !self.enumeration_failures.is_empty()
    }
}

/// Exit code for a completed run under the given policy.
pub fn exit_code(fail_on: FailOn, summary: &RunSummary) -> i32 {
    match fail_on {
        FailOn::Never => 0,
        FailOn::Unresolved => {
            if summary.is_partial() {
                2
            } else {
                0
            }
        }
        FailOn::NoMatch => {
            if summary.matches.is_empty() {
                2
            } else {
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_new_summary_is_empty() {
        let summary = RunSummary::new("edge.example.net", "");
        for bucket in Bucket::iter() {
            assert!(summary.bucket(bucket).is_empty());
        }
        assert_eq!(summary.classified_count(), 0);
        assert!(!summary.is_partial());
    }

    #[test]
    fn test_record_routes_each_outcome_to_one_bucket() {
        let mut summary = RunSummary::new("edge.example.net", "");
        summary.record(Outcome::Match("a.example.com".into()));
        summary.record(Outcome::NoMatch("b.example.com".into()));
        summary.record(Outcome::Timeout("c.example.com".into()));
        summary.record(Outcome::UnsupportedRecordType("d.example.com".into()));
        summary.record(Outcome::NoSuchDomain("e.example.com".into()));
        summary.record(Outcome::NoNameservers("f.example.com".into()));

        for bucket in Bucket::iter() {
            assert_eq!(summary.bucket(bucket).len(), 1, "bucket {:?}", bucket);
        }
        assert_eq!(summary.classified_count(), 6);
        assert_eq!(summary.unresolved_count(), 4);
        assert!(summary.is_partial());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut summary = RunSummary::new("edge.example.net", "");
        summary.record(Outcome::Match("a.example.com".into()));
        summary.record(Outcome::Match("a.example.com".into()));
        assert_eq!(summary.matches, vec!["a.example.com", "a.example.com"]);
    }

    #[test]
    fn test_enumeration_failure_makes_run_partial() {
        let mut summary = RunSummary::new("edge.example.net", "");
        summary.enumeration_failures.push(EnumerationFailure {
            scope: FailureScope::Contract {
                group_id: "grp_1".into(),
                contract_id: "ctr_1".into(),
            },
            status: Some(500),
            reason: "boom".into(),
        });
        assert!(summary.is_partial());
        assert_eq!(summary.unresolved_count(), 0);
    }

    #[test]
    fn test_exit_code_policies() {
        let mut summary = RunSummary::new("edge.example.net", "");
        assert_eq!(exit_code(FailOn::Never, &summary), 0);
        assert_eq!(exit_code(FailOn::Unresolved, &summary), 0);
        assert_eq!(exit_code(FailOn::NoMatch, &summary), 2);

        summary.record(Outcome::Match("a.example.com".into()));
        summary.record(Outcome::Timeout("b.example.com".into()));
        assert_eq!(exit_code(FailOn::Never, &summary), 0);
        assert_eq!(exit_code(FailOn::Unresolved, &summary), 2);
        assert_eq!(exit_code(FailOn::NoMatch, &summary), 0);
    }

    #[test]
    fn test_failure_scope_display() {
        let scope = FailureScope::Property {
            property_id: "prp_1".into(),
            property_name: None,
            version: 4,
            contract_id: "ctr_1".into(),
            group_id: "grp_1".into(),
        };
        assert_eq!(scope.to_string(), "hostnames of property prp_1 version 4");

        let named = FailureScope::Property {
            property_id: "prp_1".into(),
            property_name: Some("www.example.com".into()),
            version: 4,
            contract_id: "ctr_1".into(),
            group_id: "grp_1".into(),
        };
        assert_eq!(
            named.to_string(),
            "hostnames of property www.example.com (prp_1) version 4"
        );
    }
}
