//! Property version → hostname collection.

use log::{debug, info, warn};

use super::PropertyDescriptor;
use crate::api::PapiClient;
use crate::error_handling::ApiError;
use crate::summary::{EnumerationFailure, FailureScope, RunSummary};

/// Returns the `cnameFrom` of every hostname binding of one property version.
///
/// A version without bindings yields an empty list. Bindings without a
/// `cnameFrom` are skipped.
///
/// # Errors
///
/// Returns `ApiError` if the hostname listing call fails.
pub async fn collect_hostnames(
    client: &PapiClient,
    descriptor: &PropertyDescriptor,
) -> Result<Vec<String>, ApiError> {
    let items = client
        .list_hostnames(
            &descriptor.property_id,
            descriptor.latest_version,
            &descriptor.contract_id,
            &descriptor.group_id,
        )
        .await?;

    let hostnames = items
        .into_iter()
        .filter_map(|item| {
            if item.cname_from.is_none() {
                debug!(
                    "Skipping hostname binding without cnameFrom on {}",
                    descriptor.property_id
                );
            }
            item.cname_from
        })
        .collect();
    Ok(hostnames)
}

/// Collects the candidate hostnames of every descriptor, in order.
///
/// Duplicates across properties are kept: every binding is resolved and
/// reported on its own. Failed listings are recorded in `summary`.
pub async fn collect_all(
    client: &PapiClient,
    descriptors: &[PropertyDescriptor],
    summary: &mut RunSummary,
) -> Vec<String> {
    info!("Getting the list of all property hostnames...");
    let mut candidates = Vec::new();
    for descriptor in descriptors {
        match collect_hostnames(client, descriptor).await {
            Ok(hostnames) => candidates.extend(hostnames),
            Err(e) => {
                warn!(
                    "Failed to list hostnames of property {} version {}: {}",
                    descriptor.property_id, descriptor.latest_version, e
                );
                summary.enumeration_failures.push(EnumerationFailure {
                    scope: FailureScope::Property {
                        property_id: descriptor.property_id.clone(),
                        property_name: descriptor.property_name.clone(),
                        version: descriptor.latest_version,
                        contract_id: descriptor.contract_id.clone(),
                        group_id: descriptor.group_id.clone(),
                    },
                    status: e.status(),
                    reason: e.to_string(),
                });
            }
        }
    }

    summary.hostnames = candidates.len();
    info!("There are {} property hostnames", summary.hostnames);
    candidates
}
