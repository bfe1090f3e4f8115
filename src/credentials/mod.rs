//! EdgeGrid credentials loading.
//!
//! Credentials live in an INI-style `.edgerc` file:
//!
//! ```text
//! [default]
//! client_secret = abcdEcSnaAt7VvkJa8vjGcYwvNMMebV4nr3ENtz63kGg=
//! host = akab-xxxxxxxxxxxxxxxx-xxxxxxxxxxxxxxxx.luna.akamaiapis.net
//! access_token = akab-access-token-xxx-xxxxxxxxxxxxxxxx
//! client_token = akab-client-token-xxx-xxxxxxxxxxxxxxxx
//! ```
//!
//! The file is read with the `config` crate's INI format. As with the Python
//! `configparser`-based tooling, `key: value` and `key = value` lines are both
//! accepted, `#`/`;` lines are comments, key names are case-insensitive and keys
//! other than the four required ones (e.g. `max-body`) are ignored.

use std::collections::HashMap;
use std::path::Path;

use ::config::{Config as IniConfig, File, FileFormat, Value};

use crate::error_handling::CredentialsError;

/// API client credentials from one `.edgerc` section.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// API host without scheme, e.g. `akab-xxx.luna.akamaiapis.net`
    pub host: String,
    pub client_token: String,
    pub client_secret: String,
    pub access_token: String,
}

// Keep secrets out of debug logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("host", &self.host)
            .field("client_token", &"***")
            .field("client_secret", &"***")
            .field("access_token", &"***")
            .finish()
    }
}

impl Credentials {
    /// Reads `section` from the credentials file at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`CredentialsError`] if the file cannot be read or parsed, the
    /// section is absent, or one of `host`, `client_token`, `client_secret`,
    /// `access_token` is missing or empty.
    pub fn from_edgerc(path: &Path, section: &str) -> Result<Self, CredentialsError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| CredentialsError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(&contents, path, section)
    }

    /// Parses credentials from the text of an `.edgerc` file.
    ///
    /// `path` is only used in error messages.
    pub fn parse(contents: &str, path: &Path, section: &str) -> Result<Self, CredentialsError> {
        let mut sections = read_sections(contents).map_err(|source| CredentialsError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        let values = take_section(&mut sections, section)
            .ok_or_else(|| CredentialsError::MissingSection {
                path: path.to_path_buf(),
                section: section.to_string(),
            })?;

        let required = |key: &'static str| -> Result<String, CredentialsError> {
            values
                .get(key)
                .filter(|v| !v.is_empty())
                .cloned()
                .ok_or_else(|| CredentialsError::MissingKey {
                    path: path.to_path_buf(),
                    section: section.to_string(),
                    key,
                })
        };

        Ok(Self {
            host: normalize_host(&required("host")?),
            client_token: required("client_token")?,
            client_secret: required("client_secret")?,
            access_token: required("access_token")?,
        })
    }

    /// Base URL of the management API for these credentials.
    pub fn base_url(&self) -> String {
        format!("https://{}", self.host)
    }
}

/// Strips a scheme and trailing slashes some users paste into `host`.
fn normalize_host(host: &str) -> String {
    let host = host
        .strip_prefix("https://")
        .or_else(|| host.strip_prefix("http://"))
        .unwrap_or(host);
    host.trim_end_matches('/').to_string()
}

/// Reads INI text into its top-level table of sections.
fn read_sections(contents: &str) -> Result<HashMap<String, Value>, ::config::ConfigError> {
    IniConfig::builder()
        .add_source(File::from_str(contents, FileFormat::Ini))
        .build()?
        .try_deserialize::<HashMap<String, Value>>()
}

/// Removes `section` from the parsed file and returns its keys, lowercased.
///
/// An exact section name wins; otherwise the first case-insensitive match is
/// used. Entries outside any section are not sections and never match.
fn take_section(
    sections: &mut HashMap<String, Value>,
    section: &str,
) -> Option<HashMap<String, String>> {
    let name = if sections.contains_key(section) {
        section.to_string()
    } else {
        sections
            .keys()
            .find(|name| name.eq_ignore_ascii_case(section))?
            .clone()
    };
    let table = sections.remove(&name)?.into_table().ok()?;

    let mut values = HashMap::new();
    for (key, value) in table {
        match value.into_string() {
            Ok(value) => {
                values.insert(key.to_ascii_lowercase(), value.trim().to_string());
            }
            Err(e) => log::debug!("Ignoring .edgerc key {key} in [{name}]: {e}"),
        }
    }
    Some(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
# Credentials for the audit tool
[default]
client_secret = secret-default=
host = akab-default.luna.akamaiapis.net
access_token = akab-access-default
client_token = akab-client-default
max-body = 131072

; second section with quoted values and a pasted URL
[papi]
client_secret = "secret-papi="
host = https://akab-papi.luna.akamaiapis.net/
access_token = 'akab-access-papi'
client_token = akab-client-papi

[broken]
host = akab-broken.luna.akamaiapis.net
client_token = akab-client-broken
access_token =
"#;

    #[test]
    fn test_parse_default_section() {
        let creds = Credentials::parse(SAMPLE, Path::new(".edgerc"), "default")
            .expect("default section should parse");
        assert_eq!(creds.host, "akab-default.luna.akamaiapis.net");
        assert_eq!(creds.client_secret, "secret-default=");
        assert_eq!(creds.access_token, "akab-access-default");
        assert_eq!(creds.client_token, "akab-client-default");
        assert_eq!(creds.base_url(), "https://akab-default.luna.akamaiapis.net");
    }

    #[test]
    fn test_parse_strips_quotes_and_scheme() {
        let creds = Credentials::parse(SAMPLE, Path::new(".edgerc"), "papi")
            .expect("papi section should parse");
        assert_eq!(creds.host, "akab-papi.luna.akamaiapis.net");
        assert_eq!(creds.client_secret, "secret-papi=");
        assert_eq!(creds.access_token, "akab-access-papi");
    }

    #[test]
    fn test_missing_section() {
        let err = Credentials::parse(SAMPLE, Path::new(".edgerc"), "nope").unwrap_err();
        assert!(matches!(err, CredentialsError::MissingSection { ref section, .. } if section == "nope"));
    }

    #[test]
    fn test_missing_or_empty_key() {
        let err = Credentials::parse(SAMPLE, Path::new(".edgerc"), "broken").unwrap_err();
        // client_secret is checked before access_token, and is absent entirely
        assert!(matches!(
            err,
            CredentialsError::MissingKey {
                key: "client_secret",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_colon_separated_keys() {
        let contents = "[default]\nhost: akab-colon.luna.akamaiapis.net\nclient_token: ct\nclient_secret: cs=\naccess_token: at\n";
        let creds = Credentials::parse(contents, Path::new(".edgerc"), "default")
            .expect("colon form should parse");
        assert_eq!(creds.host, "akab-colon.luna.akamaiapis.net");
        assert_eq!(creds.client_token, "ct");
        assert_eq!(creds.client_secret, "cs=");
        assert_eq!(creds.access_token, "at");
    }

    #[test]
    fn test_parse_key_names_are_case_insensitive() {
        let contents = "[default]\nHost = akab-upper.luna.akamaiapis.net\nCLIENT_TOKEN = ct\nClient_Secret = cs\naccess_token = at\n";
        let creds = Credentials::parse(contents, Path::new(".edgerc"), "default")
            .expect("mixed-case keys should parse");
        assert_eq!(creds.host, "akab-upper.luna.akamaiapis.net");
        assert_eq!(creds.client_token, "ct");
        assert_eq!(creds.client_secret, "cs");
    }

    #[test]
    fn test_parse_section_name_falls_back_to_case_insensitive_match() {
        let contents = "[Papi]\nhost = akab-p.luna.akamaiapis.net\nclient_token = ct\nclient_secret = cs\naccess_token = at\n";
        let creds = Credentials::parse(contents, Path::new(".edgerc"), "papi")
            .expect("section should be found");
        assert_eq!(creds.host, "akab-p.luna.akamaiapis.net");
    }

    #[test]
    fn test_parse_malformed_file() {
        let err = Credentials::parse("[default\nhost = akab-x\n", Path::new(".edgerc"), "default")
            .unwrap_err();
        assert!(matches!(err, CredentialsError::Malformed { .. }));
        assert!(err.to_string().contains(".edgerc"));
    }

    #[test]
    fn test_from_edgerc_reads_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, "{}", SAMPLE).expect("Failed to write credentials");
        file.flush().expect("Failed to flush file");

        let creds = Credentials::from_edgerc(file.path(), "default").expect("should load");
        assert_eq!(creds.client_token, "akab-client-default");
    }

    #[test]
    fn test_from_edgerc_unreadable_file() {
        let err = Credentials::from_edgerc(Path::new("/definitely/not/here/.edgerc"), "default")
            .unwrap_err();
        assert!(matches!(err, CredentialsError::Unreadable { .. }));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = Credentials::parse(SAMPLE, Path::new(".edgerc"), "default").unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("secret-default"));
        assert!(debug.contains("akab-default.luna.akamaiapis.net"));
    }
}
