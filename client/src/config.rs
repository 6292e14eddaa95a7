use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ConnectWiseError, Result};
use crate::responses::PaginationSignal;

/// Connection settings for a ConnectWise Manage instance.
///
/// Settings can come from a TOML or JSON file (picked by extension) and be
/// overridden by `CWM_*` environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Company identifier used at login, e.g. `mycompany`
    pub company_id: String,
    /// Manage host, e.g. `na.myconnectwise.net`. A leading `http://` or
    /// `https://` is kept as given.
    pub manage_url: String,
    /// Release path prefix such as `v4_6_release/`. Looked up from the
    /// company info endpoint when absent.
    pub codebase: Option<String>,
    /// Integrator client id sent in the `clientId` header
    pub client_id: String,
    /// API member public key
    pub public_key: String,
    /// API member private key
    pub private_key: String,
    /// Value of the `version` parameter in the `Accept` header
    pub api_version: String,
    /// Request timeout in seconds
    pub request_timeout_seconds: u64,
    /// How a paginated response decides whether another page exists
    pub pagination: PaginationSignal,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            company_id: String::new(),
            manage_url: "na.myconnectwise.net".to_string(),
            codebase: None,
            client_id: String::new(),
            public_key: String::new(),
            private_key: String::new(),
            api_version: "2022.1".to_string(),
            request_timeout_seconds: 30,
            pagination: PaginationSignal::default(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        if is_json {
            serde_json::from_str(&content)
                .map_err(|e| ConnectWiseError::Config(format!("{}: {e}", path.display())))
        } else {
            toml::from_str(&content)
                .map_err(|e| ConnectWiseError::Config(format!("{}: {e}", path.display())))
        }
    }

    /// Builds a configuration from defaults and `CWM_*` environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Overrides fields with any `CWM_*` environment variables that are set.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Overrides fields from an arbitrary variable lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("CWM_COMPANY_ID") {
            self.company_id = v;
        }
        if let Some(v) = lookup("CWM_MANAGE_URL") {
            self.manage_url = v;
        }
        if let Some(v) = lookup("CWM_CODEBASE") {
            self.codebase = Some(v);
        }
        if let Some(v) = lookup("CWM_CLIENT_ID") {
            self.client_id = v;
        }
        if let Some(v) = lookup("CWM_PUBLIC_KEY") {
            self.public_key = v;
        }
        if let Some(v) = lookup("CWM_PRIVATE_KEY") {
            self.private_key = v;
        }
        if let Some(v) = lookup("CWM_API_VERSION") {
            self.api_version = v;
        }
        if let Some(v) = lookup("CWM_TIMEOUT_SECONDS") {
            match v.parse() {
                Ok(secs) => self.request_timeout_seconds = secs,
                Err(_) => log::warn!("Ignoring invalid CWM_TIMEOUT_SECONDS value: {v}"),
            }
        }
    }

    /// Validates the configuration, collecting every problem found.
    pub fn validate(&self) -> std::result::Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.company_id.is_empty() {
            errors.push("company_id cannot be empty".to_string());
        }
        if self.manage_url.is_empty() {
            errors.push("manage_url cannot be empty".to_string());
        }
        if self.client_id.is_empty() {
            errors.push("client_id cannot be empty".to_string());
        }
        if self.public_key.is_empty() || self.private_key.is_empty() {
            errors.push("public_key and private_key are both required".to_string());
        }
        if self.request_timeout_seconds == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Scheme and host of the Manage instance, without a trailing slash.
    pub fn manage_origin(&self) -> String {
        let host = self.manage_url.trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{host}")
        }
    }

    /// Base URL of the REST API for a given codebase.
    pub fn api_base_url(&self, codebase: &str) -> String {
        let codebase = codebase.trim_matches('/');
        if codebase.is_empty() {
            format!("{}/apis/3.0", self.manage_origin())
        } else {
            format!("{}/{codebase}/apis/3.0", self.manage_origin())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn complete() -> ClientConfig {
        ClientConfig {
            company_id: "acme".to_string(),
            client_id: "client".to_string(),
            public_key: "pub".to_string(),
            private_key: "priv".to_string(),
            ..ClientConfig::default()
        }
    }

    #[test]
    fn test_default_config_fails_validation() {
        let errors = ClientConfig::default().validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_complete_config_validates() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn test_api_base_url() {
        let config = complete();
        assert_eq!(
            config.api_base_url("v4_6_release/"),
            "https://na.myconnectwise.net/v4_6_release/apis/3.0"
        );

        let local = ClientConfig {
            manage_url: "http://127.0.0.1:8080/".to_string(),
            ..complete()
        };
        assert_eq!(local.api_base_url(""), "http://127.0.0.1:8080/apis/3.0");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("CWM_COMPANY_ID", "other"),
            ("CWM_CODEBASE", "v2025_1/"),
            ("CWM_TIMEOUT_SECONDS", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let mut config = complete();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.company_id, "other");
        assert_eq!(config.codebase.as_deref(), Some("v2025_1/"));
        assert_eq!(config.request_timeout_seconds, 30);
        assert_eq!(config.client_id, "client");
    }

    #[test]
    fn test_load_toml_and_json() {
        let mut toml_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            toml_file,
            "company_id = \"acme\"\npagination = \"full_page\"\nrequest_timeout_seconds = 5"
        )
        .unwrap();
        let config = ClientConfig::load(toml_file.path()).unwrap();
        assert_eq!(config.company_id, "acme");
        assert_eq!(config.pagination, PaginationSignal::FullPage);
        assert_eq!(config.request_timeout_seconds, 5);
        assert_eq!(config.api_version, "2022.1");

        let mut json_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(json_file, r#"{{"company_id": "acme", "codebase": "v4_6_release/"}}"#).unwrap();
        let config = ClientConfig::load(json_file.path()).unwrap();
        assert_eq!(config.codebase.as_deref(), Some("v4_6_release/"));
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let config = ClientConfig::load("/nonexistent/connectwise.toml").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_load_invalid_file_is_config_error() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "not json").unwrap();
        let err = ClientConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConnectWiseError::Config(_)));
    }
}
