//! Signed Property Manager API client.

use log::debug;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use url::Url;

use super::auth::EdgeGridSigner;
use super::models::{
    Group, GroupsResponse, HostnameItem, HostnamesResponse, PropertiesResponse, PropertyItem,
};
use crate::config::{
    MAX_ERROR_BODY_CHARS, PAPI_GROUPS_PATH, PAPI_PROPERTIES_PATH, PAPI_USE_PREFIXES_HEADER,
};
use crate::credentials::Credentials;
use crate::error_handling::ApiError;

/// Client for the three PAPI listing endpoints the audit walks.
///
/// Bundles the HTTP client, the API base URL, the request signer and the
/// account switch key; it is immutable for the whole run.
pub struct PapiClient {
    http: reqwest::Client,
    base_url: Url,
    signer: EdgeGridSigner,
    switch_key: String,
}

impl PapiClient {
    /// Creates a client for the host named in `credentials`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Url` if the credentials host is not a valid host name.
    pub fn new(
        http: reqwest::Client,
        credentials: &Credentials,
        switch_key: &str,
    ) -> Result<Self, ApiError> {
        Self::with_base_url(http, &credentials.base_url(), credentials, switch_key)
    }

    /// Creates a client against an explicit base URL.
    pub fn with_base_url(
        http: reqwest::Client,
        base_url: &str,
        credentials: &Credentials,
        switch_key: &str,
    ) -> Result<Self, ApiError> {
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
            signer: EdgeGridSigner::new(credentials),
            switch_key: switch_key.to_string(),
        })
    }

    pub fn switch_key(&self) -> &str {
        &self.switch_key
    }

    /// Lists every group visible to the credentials, with its contract ids.
    pub async fn list_groups(&self) -> Result<Vec<Group>, ApiError> {
        let response: GroupsResponse = self.get_json(PAPI_GROUPS_PATH, &[]).await?;
        Ok(response.groups.items)
    }

    /// Lists the properties owned by a (contract, group) pair.
    pub async fn list_properties(
        &self,
        contract_id: &str,
        group_id: &str,
    ) -> Result<Vec<PropertyItem>, ApiError> {
        let response: PropertiesResponse = self
            .get_json(
                PAPI_PROPERTIES_PATH,
                &[("contractId", contract_id), ("groupId", group_id)],
            )
            .await?;
        Ok(response.properties.items)
    }

    /// Lists the hostname bindings of one property version.
    ///
    /// Hostname validation is disabled: the stored bindings are what we audit.
    pub async fn list_hostnames(
        &self,
        property_id: &str,
        version: u32,
        contract_id: &str,
        group_id: &str,
    ) -> Result<Vec<HostnameItem>, ApiError> {
        let path = format!("{PAPI_PROPERTIES_PATH}/{property_id}/versions/{version}/hostnames");
        let response: HostnamesResponse = self
            .get_json(
                &path,
                &[
                    ("contractId", contract_id),
                    ("groupId", group_id),
                    ("validateHostnames", "false"),
                ],
            )
            .await?;
        Ok(response.hostnames.items)
    }

    /// Builds the full request URL, appending the account switch key if set.
    fn build_url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, ApiError> {
        let mut url = self.base_url.join(path)?;
        let mut pairs: Vec<(&str, &str)> = query.to_vec();
        if !self.switch_key.is_empty() {
            pairs.push(("accountSwitchKey", self.switch_key.as_str()));
        }
        // An untouched query_pairs_mut() would still leave a bare '?'
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    /// Issues a signed GET and decodes a successful JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.build_url(path, query)?;
        let authorization = self.signer.authorization("GET", &url);
        debug!("GET {}", url);

        let transport = |source| ApiError::Transport {
            endpoint: path.to_string(),
            source,
        };
        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, authorization)
            .header(PAPI_USE_PREFIXES_HEADER, "true")
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.text().await.map_err(transport)?;
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            endpoint: path.to_string(),
            source,
        })
    }
}

/// Truncates a response body for error messages, noting the original length.
fn truncate_body(body: &str) -> String {
    let total = body.chars().count();
    if total <= MAX_ERROR_BODY_CHARS {
        return body.to_string();
    }
    let head: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    format!("{head}... (truncated, {total} characters total)")
}
