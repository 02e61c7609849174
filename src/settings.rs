//! Client settings resolver
//!
//! Resolves the immutable configuration object consumed by the browser
//! application: which API base URL to call, plus fixed request parameters.
//! Evaluated once per process; absent or malformed environment values fall
//! through to defaults, there are no error conditions.

use serde::Serialize;

/// Explicit API base URL override, used verbatim when non-empty.
pub const API_BASE_URL_VAR: &str = "API_BASE_URL";

/// Deployment mode indicator; only the value `production` (case-insensitive)
/// switches away from development defaults.
pub const APP_ENV_VAR: &str = "APP_ENV";

// Production uses a relative path so the reverse proxy in front of the
// frontend can route /api to the backend.
const PROD_API_BASE_URL: &str = "/api";
const DEV_API_BASE_URL: &str = "http://localhost:5000/api";

const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_RETRY_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Development,
    Production,
}

impl Mode {
    /// Anything other than `production` (including `None`) is development.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("production") => Self::Production,
            _ => Self::Development,
        }
    }
}

/// Resolved client settings, immutable after construction.
///
/// Serializes with camelCase field names, matching the object shape the
/// frontend bundle exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    pub retry_attempts: u32,
}

impl Settings {
    /// Resolve settings from explicit inputs.
    ///
    /// Precedence for `api_base_url`, highest first: a non-empty override is
    /// used verbatim, then the production relative path, then the
    /// development localhost URL. Timeout and retry counts are fixed.
    pub fn resolve(mode: Mode, override_url: Option<&str>) -> Self {
        let api_base_url = match override_url {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => match mode {
                Mode::Production => PROD_API_BASE_URL.to_string(),
                Mode::Development => DEV_API_BASE_URL.to_string(),
            },
        };

        Self {
            api_base_url,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
        }
    }

    /// Read the environment once and resolve.
    pub fn from_env() -> Self {
        let mode = Mode::parse(std::env::var(APP_ENV_VAR).ok().as_deref());
        let override_url = std::env::var(API_BASE_URL_VAR).ok();
        Self::resolve(mode, override_url.as_deref())
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
