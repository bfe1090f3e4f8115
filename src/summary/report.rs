//! Rendering of the run summary.
//!
//! The plain report is deterministic: buckets appear in a fixed order and each
//! bucket lists hostnames in the order they were enumerated.

use std::fmt;

use strum::IntoEnumIterator;

use super::RunSummary;
use crate::dns::Bucket;

/// Buckets listed ahead of the verdict, in declaration order.
fn failure_buckets() -> impl Iterator<Item = Bucket> {
    Bucket::iter().filter(|bucket| bucket.is_failure())
}

/// Renders the human-readable report.
pub fn render_plain(summary: &RunSummary) -> String {
    PlainReport(summary).to_string()
}

/// Renders the whole summary as pretty-printed JSON.
///
/// # Errors
///
/// Returns a `serde_json::Error` if serialization fails.
pub fn render_json(summary: &RunSummary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

struct PlainReport<'a>(&'a RunSummary);

impl fmt::Display for PlainReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        let account = if s.switch_key.is_empty() {
            "the account".to_string()
        } else {
            format!("the {} account", s.switch_key)
        };

        writeln!(
            f,
            "There are {}, {} and {} in {}.",
            plural(s.groups, "group", "groups"),
            plural(s.contracts, "contract", "contracts"),
            plural(s.properties, "property", "properties"),
            account
        )?;
        writeln!(
            f,
            "There are {} in {}.",
            plural(s.hostnames, "property hostname", "property hostnames"),
            account
        )?;

        if !s.enumeration_failures.is_empty() {
            writeln!(f)?;
            writeln!(f, "Enumeration failed for:")?;
            for failure in &s.enumeration_failures {
                match failure.status {
                    Some(status) => writeln!(f, "{} (HTTP {})", failure.scope, status)?,
                    None => writeln!(f, "{} ({})", failure.scope, failure.reason)?,
                }
            }
        }

        for bucket in failure_buckets() {
            let hostnames = s.bucket(bucket);
            if hostnames.is_empty() {
                continue;
            }
            writeln!(f)?;
            writeln!(f, "{} for:", bucket)?;
            for hostname in hostnames {
                writeln!(f, "{hostname}")?;
            }
        }

        writeln!(f)?;
        let edge = &s.edge_hostname;
        if s.is_partial() {
            if s.unresolved_count() > 0 {
                writeln!(
                    f,
                    "The DNS (CNAME record) resolution partially failed: it was not successful for the hostnames listed above."
                )?;
            }
            if !s.enumeration_failures.is_empty() {
                writeln!(
                    f,
                    "The enumeration partially failed: hostnames under the entries listed above were not checked."
                )?;
            }
            if s.matches.is_empty() {
                writeln!(
                    f,
                    "Apart from these, there are no property hostnames CNAMEd to {edge}."
                )?;
            } else {
                writeln!(
                    f,
                    "Apart from these, the following property hostname(s) is/are CNAMEd to {edge}:"
                )?;
            }
        } else if s.matches.is_empty() {
            writeln!(f, "There are no property hostnames CNAMEd to {edge}.")?;
        } else {
            writeln!(
                f,
                "The following property hostname(s) is/are CNAMEd to {edge}:"
            )?;
        }
        for hostname in &s.matches {
            writeln!(f, "{hostname}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::Outcome;
    use crate::summary::{EnumerationFailure, FailureScope};

    #[test]
    fn test_empty_run_reports_no_matches() {
        let summary = RunSummary::new("edge.example.net", "");
        let report = render_plain(&summary);
        assert!(report.contains("There are 0 groups, 0 contracts and 0 properties in the account."));
        assert!(report.contains("There are no property hostnames CNAMEd to edge.example.net."));
        assert!(!report.contains("partially failed"));
    }

    #[test]
    fn test_partial_failure_lists_bucket_and_match() {
        let mut summary = RunSummary::new("edge.example.net", "1-ABC");
        summary.groups = 1;
        summary.contracts = 1;
        summary.properties = 1;
        summary.hostnames = 2;
        summary.record(Outcome::Match("a.example.com".into()));
        summary.record(Outcome::Timeout("b.example.com".into()));

        let report = render_plain(&summary);
        assert!(report.contains("1 group, 1 contract and 1 property in the 1-ABC account"));
        assert!(report.contains("DNS resolution timed out for:\nb.example.com\n"));
        assert!(report.contains("partially failed"));
        assert!(report.ends_with(
            "Apart from these, the following property hostname(s) is/are CNAMEd to edge.example.net:\na.example.com\n"
        ));
    }

    #[test]
    fn test_failure_buckets_render_in_fixed_order() {
        let mut summary = RunSummary::new("edge.example.net", "");
        summary.record(Outcome::NoNameservers("d.example.com".into()));
        summary.record(Outcome::NoSuchDomain("c.example.com".into()));
        summary.record(Outcome::Timeout("a.example.com".into()));

        let report = render_plain(&summary);
        let timeout = report.find("timed out").unwrap();
        let nx = report.find("NXDOMAIN").unwrap();
        let ns = report.find("no usable nameservers").unwrap();
        assert!(timeout < nx && nx < ns);
        assert!(!report.contains("unsupported record type"));
    }

    #[test]
    fn test_every_failure_bucket_is_reported() {
        let mut summary = RunSummary::new("edge.example.net", "");
        let failures: Vec<Bucket> = failure_buckets().collect();
        assert_eq!(
            failures,
            vec![
                Bucket::Timeout,
                Bucket::UnsupportedRecordType,
                Bucket::NoSuchDomain,
                Bucket::NoNameservers,
            ]
        );

        summary.record(Outcome::Timeout("a.example.com".into()));
        summary.record(Outcome::UnsupportedRecordType("b.example.com".into()));
        summary.record(Outcome::NoSuchDomain("c.example.com".into()));
        summary.record(Outcome::NoNameservers("d.example.com".into()));
        let report = render_plain(&summary);
        for bucket in failures {
            assert!(
                report.contains(&format!("{} for:\n", bucket)),
                "missing section for {:?}",
                bucket
            );
        }
        assert!(!report.contains(&format!("{} for:", Bucket::NoMatch)));
    }

    #[test]
    fn test_enumeration_failures_are_listed() {
        let mut summary = RunSummary::new("edge.example.net", "");
        summary.enumeration_failures.push(EnumerationFailure {
            scope: FailureScope::Contract {
                group_id: "grp_1".into(),
                contract_id: "ctr_1".into(),
            },
            status: Some(500),
            reason: "Internal Server Error".into(),
        });
        let report = render_plain(&summary);
        assert!(report.contains("Enumeration failed for:\nproperties of contract ctr_1 in group grp_1 (HTTP 500)"));
        assert!(report.contains("The enumeration partially failed"));
        assert!(report.contains("Apart from these, there are no property hostnames CNAMEd to edge.example.net."));
    }

    #[test]
    fn test_render_json_includes_buckets_and_failures() {
        let mut summary = RunSummary::new("edge.example.net", "");
        summary.record(Outcome::NoSuchDomain("gone.example.com".into()));
        summary.enumeration_failures.push(EnumerationFailure {
            scope: FailureScope::Property {
                property_id: "prp_1".into(),
                property_name: Some("www.example.com".into()),
                version: 2,
                contract_id: "ctr_1".into(),
                group_id: "grp_1".into(),
            },
            status: None,
            reason: "timed out".into(),
        });

        let json = render_json(&summary).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["no_such_domain"][0], "gone.example.com");
        assert_eq!(value["enumeration_failures"][0]["scope"], "property");
        assert_eq!(value["enumeration_failures"][0]["property_id"], "prp_1");
        assert_eq!(
            value["enumeration_failures"][0]["property_name"],
            "www.example.com"
        );
        assert!(value["enumeration_failures"][0]["status"].is_null());
    }
}
