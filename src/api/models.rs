//! Property Manager API response bodies.
//!
//! Only the fields the audit reads are modeled; everything else in the
//! responses is ignored by serde.

use serde::Deserialize;

/// The `{ "items": [...] }` envelope PAPI wraps every collection in.
#[derive(Debug, Deserialize)]
pub struct ItemList<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> Default for ItemList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

/// `GET /papi/v1/groups`
#[derive(Debug, Deserialize)]
pub struct GroupsResponse {
    pub groups: ItemList<Group>,
}

/// A group and the contracts it is associated with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub group_id: String,
    #[serde(default)]
    pub contract_ids: Vec<String>,
}

/// `GET /papi/v1/properties?contractId=..&groupId=..`
#[derive(Debug, Deserialize)]
pub struct PropertiesResponse {
    pub properties: ItemList<PropertyItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyItem {
    pub property_id: String,
    pub property_name: Option<String>,
    pub latest_version: u32,
}

/// `GET /papi/v1/properties/{id}/versions/{version}/hostnames`
///
/// A property version without hostnames may omit the collection entirely.
#[derive(Debug, Default, Deserialize)]
pub struct HostnamesResponse {
    #[serde(default)]
    pub hostnames: ItemList<HostnameItem>,
}

/// One hostname binding of a property version.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostnameItem {
    pub cname_from: Option<String>,
}
