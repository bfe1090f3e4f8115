//! Group → contract → property traversal.

use log::{info, warn};

use super::PropertyDescriptor;
use crate::api::PapiClient;
use crate::error_handling::AuditError;
use crate::summary::{EnumerationFailure, FailureScope, RunSummary};

/// Lists every property of the account at its latest version.
///
/// The group listing is a single call; each (group, contract) pair then gets
/// one property listing call. Group and contract counters are updated in
/// `summary` as they are visited.
///
/// # Errors
///
/// Returns `AuditError` if the group listing fails; nothing is enumerated in
/// that case. A failed property listing is recorded in `summary` and the walk
/// moves on to the next contract.
pub async fn enumerate_objects(
    client: &PapiClient,
    summary: &mut RunSummary,
) -> Result<Vec<PropertyDescriptor>, AuditError> {
    info!("Getting the list of all groups and all associated contracts...");
    let groups = client.list_groups().await?;

    info!("Getting the list of all properties...");
    let mut descriptors = Vec::new();
    for group in &groups {
        summary.groups += 1;
        for contract_id in &group.contract_ids {
            summary.contracts += 1;
            match client.list_properties(contract_id, &group.group_id).await {
                Ok(items) => {
                    log::debug!(
                        "{} properties under contract {} in group {}",
                        items.len(),
                        contract_id,
                        group.group_id
                    );
                    descriptors.extend(items.into_iter().map(|item| PropertyDescriptor {
                        property_id: item.property_id,
                        property_name: item.property_name,
                        latest_version: item.latest_version,
                        contract_id: contract_id.clone(),
                        group_id: group.group_id.clone(),
                    }));
                }
                Err(e) => {
                    warn!(
                        "Failed to list properties of contract {} in group {}: {}",
                        contract_id, group.group_id, e
                    );
                    summary.enumeration_failures.push(EnumerationFailure {
                        scope: FailureScope::Contract {
                            group_id: group.group_id.clone(),
                            contract_id: contract_id.clone(),
                        },
                        status: e.status(),
                        reason: e.to_string(),
                    });
                }
            }
        }
    }

    summary.properties = descriptors.len();
    info!(
        "There are {} groups, {} contracts and {} properties",
        summary.groups, summary.contracts, summary.properties
    );
    Ok(descriptors)
}
