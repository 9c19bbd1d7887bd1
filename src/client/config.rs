use std::env;
use std::time::Duration;

use log::info;
use url::Url;

use crate::common::error::ConfigError;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_VARS: [&str; 3] = ["GEMINI_API_KEY", "FIREBASE_API_KEY", "VITE_FIREBASE_API_KEY"];
const PROJECT_VARS: [&str; 3] = ["GOOGLE_CLOUD_PROJECT", "FIREBASE_PROJECT_ID", "VITE_FIREBASE_PROJECT_ID"];

#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub model: String,
    pub api_base_url: Url,
    pub project_id: Option<String>,
    /// Unset means calls wait as long as the service takes.
    pub request_timeout: Option<Duration>,
}

// Debug output never includes the API key.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url.as_str())
            .field("project_id", &self.project_id)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Reads the process environment. Binaries load `.env` before calling this.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::from_lookup(|name| env::var(name).ok())?;

        info!("Client configuration loaded:");
        info!("  Model: {}", config.model);
        info!("  API base URL: {}", config.api_base_url);
        info!("  Project: {}", config.project_id.as_deref().unwrap_or("(none)"));
        match config.request_timeout {
            Some(t) => info!("  Request timeout: {}s", t.as_secs()),
            None => info!("  Request timeout: none"),
        }

        Ok(config)
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let first_of = |names: &[&str]| names.iter().find_map(|n| non_empty(*n));

        let api_key = first_of(&API_KEY_VARS).ok_or(ConfigError::MissingApiKey)?;

        let model = non_empty("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let raw_url = non_empty("GEMINI_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let api_base_url = parse_base_url(&raw_url)?;

        // 0 or unset: no timeout
        let request_timeout = match non_empty("GEMINI_TIMEOUT_SECS") {
            Some(v) => {
                let secs: u64 = v.parse().map_err(|_| ConfigError::InvalidNumber {
                    var: "GEMINI_TIMEOUT_SECS",
                    value: v.clone(),
                })?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            api_key,
            model,
            api_base_url,
            project_id: first_of(&PROJECT_VARS),
            request_timeout,
        })
    }
}

// A trailing slash keeps `Url::join` from dropping the last path segment (e.g. `v1beta`).
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let with_slash = if raw.ends_with('/') { raw.to_string() } else { format!("{}/", raw) };
    Url::parse(&with_slash).map_err(|source| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })
}
