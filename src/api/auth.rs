//! EdgeGrid request signing.
//!
//! Every management API request carries an `Authorization` header of the form
//!
//! ```text
//! EG1-HMAC-SHA256 client_token=..;access_token=..;timestamp=..;nonce=..;signature=..
//! ```
//!
//! The signature is an HMAC-SHA256 over the request line, keyed by an HMAC of
//! the timestamp under the client secret. Only `GET` requests are issued, so the
//! content hash and the canonical signed headers are always empty.

use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use url::Url;
use uuid::Uuid;

use crate::credentials::Credentials;

type HmacSha256 = Hmac<Sha256>;

const SIGNING_ALGORITHM: &str = "EG1-HMAC-SHA256";

/// Signs requests with one set of client credentials.
#[derive(Clone)]
pub struct EdgeGridSigner {
    client_token: String,
    client_secret: String,
    access_token: String,
}

impl EdgeGridSigner {
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            client_token: credentials.client_token.clone(),
            client_secret: credentials.client_secret.clone(),
            access_token: credentials.access_token.clone(),
        }
    }

    /// Builds the `Authorization` header value for a request issued now.
    pub fn authorization(&self, method: &str, url: &Url) -> String {
        let timestamp = edgegrid_timestamp(Utc::now());
        let nonce = Uuid::new_v4().to_string();
        self.authorization_with(method, url, &timestamp, &nonce)
    }

    /// Builds the header value for a fixed timestamp and nonce.
    pub fn authorization_with(&self, method: &str, url: &Url, timestamp: &str, nonce: &str) -> String {
        let auth_prefix = format!(
            "{SIGNING_ALGORITHM} client_token={};access_token={};timestamp={timestamp};nonce={nonce};",
            self.client_token, self.access_token
        );
        let signing_key = hmac_base64(self.client_secret.as_bytes(), timestamp.as_bytes());
        let data_to_sign = data_to_sign(method, url, &auth_prefix);
        let signature = hmac_base64(signing_key.as_bytes(), data_to_sign.as_bytes());
        format!("{auth_prefix}signature={signature}")
    }
}

/// Formats a timestamp the way EdgeGrid expects: `20140321T19:34:21+0000`.
pub fn edgegrid_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y%m%dT%H:%M:%S+0000").to_string()
}

/// Tab-joined request description covered by the signature.
fn data_to_sign(method: &str, url: &Url, auth_prefix: &str) -> String {
    let host = match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    };
    let relative = match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    };
    [
        method.to_ascii_uppercase().as_str(),
        url.scheme(),
        host.as_str(),
        relative.as_str(),
        "", // canonicalized headers
        "", // content hash
        auth_prefix,
    ]
    .join("\t")
}

fn hmac_base64(key: &[u8], message: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(message);
    general_purpose::STANDARD.encode(mac.finalize().into_bytes())
}
