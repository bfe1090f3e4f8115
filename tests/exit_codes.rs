//! Tests for exit code policies (--fail-on flag)

use edge_cname_audit::dns::Outcome;
use edge_cname_audit::summary::{EnumerationFailure, FailureScope};
use edge_cname_audit::{exit_code, FailOn, RunSummary};

fn summary_with(outcomes: Vec<Outcome>) -> RunSummary {
    let mut summary = RunSummary::new("edge.example.net", "");
    summary.hostnames = outcomes.len();
    for outcome in outcomes {
        summary.record(outcome);
    }
    summary
}

#[test]
fn test_fail_on_never_always_returns_zero() {
    let summary = summary_with(vec![
        Outcome::Timeout("a.example.com".into()),
        Outcome::NoSuchDomain("b.example.com".into()),
    ]);
    assert_eq!(exit_code(FailOn::Never, &summary), 0);
}

#[test]
fn test_fail_on_unresolved() {
    let clean = summary_with(vec![
        Outcome::Match("a.example.com".into()),
        Outcome::NoMatch("b.example.com".into()),
    ]);
    assert_eq!(exit_code(FailOn::Unresolved, &clean), 0);

    let with_timeout = summary_with(vec![
        Outcome::Match("a.example.com".into()),
        Outcome::Timeout("b.example.com".into()),
    ]);
    assert_eq!(exit_code(FailOn::Unresolved, &with_timeout), 2);
}

#[test]
fn test_fail_on_unresolved_counts_enumeration_failures() {
    let mut summary = summary_with(vec![Outcome::Match("a.example.com".into())]);
    summary.enumeration_failures.push(EnumerationFailure {
        scope: FailureScope::Contract {
            group_id: "grp_1".into(),
            contract_id: "ctr_1".into(),
        },
        status: Some(403),
        reason: "Forbidden".into(),
    });
    assert_eq!(exit_code(FailOn::Unresolved, &summary), 2);
}

#[test]
fn test_fail_on_no_match() {
    let none = summary_with(vec![Outcome::NoMatch("a.example.com".into())]);
    assert_eq!(exit_code(FailOn::NoMatch, &none), 2);

    let empty = summary_with(vec![]);
    assert_eq!(exit_code(FailOn::NoMatch, &empty), 2);

    let some = summary_with(vec![
        Outcome::Match("a.example.com".into()),
        Outcome::NoNameservers("b.example.com".into()),
    ]);
    assert_eq!(exit_code(FailOn::NoMatch, &some), 0);
}
