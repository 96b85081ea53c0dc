//! # Strike Configuration
//!
//! Connection parameters for the Strike API. A config is captured
//! once, then passed to [`crate::StrikeClient`]; holding two configs
//! (mainnet and testnet) in one process is plain data, not global
//! state.

use charge_core::{ChargeError, ChargeResult};
use std::env;

/// Production Strike host
pub const MAINNET_HOST: &str = "api.strike.acinq.co";

/// Sandbox Strike host (testnet coins)
pub const TESTNET_HOST: &str = "api.dev.strike.acinq.co";

/// Default API base path
pub const DEFAULT_API_BASE: &str = "/api/v1/";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Strike API configuration
#[derive(Debug, Clone)]
pub struct StrikeConfig {
    /// Secret API key tied to a Strike account
    pub api_key: String,

    /// Host name of the Strike deployment (mainnet or testnet)
    pub api_host: String,

    /// Base path of the API on that host (e.g. "/api/v1/")
    pub api_base: String,

    /// Scheme + authority requests are sent to. Defaults to
    /// `https://{api_host}`; overridable for testing against a local
    /// mock server.
    pub api_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StrikeConfig {
    /// Capture a configuration. Pure; no network call is made.
    ///
    /// `api_key` must be non-empty, `api_host` a bare host name
    /// (optionally with a port), and `api_base` a path prefix, which
    /// is normalized to carry leading and trailing slashes.
    pub fn new(
        api_key: impl Into<String>,
        api_host: impl Into<String>,
        api_base: impl Into<String>,
    ) -> ChargeResult<Self> {
        let api_key = api_key.into();
        let api_host = api_host.into();
        let api_base = api_base.into();

        if api_key.trim().is_empty() {
            return Err(ChargeError::Configuration(
                "api_key must not be empty".to_string(),
            ));
        }

        if api_host.is_empty()
            || api_host.contains("://")
            || api_host.contains('/')
            || api_host.contains(char::is_whitespace)
        {
            return Err(ChargeError::Configuration(format!(
                "api_host must be a bare host name, got {api_host:?}"
            )));
        }

        let api_base = normalize_base(&api_base)?;
        let api_url = format!("https://{api_host}");

        Ok(Self {
            api_key,
            api_host,
            api_base,
            api_url,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `STRIKE_API_KEY`
    ///
    /// Optional env vars:
    /// - `STRIKE_API_HOST` (default: production host)
    /// - `STRIKE_API_BASE` (default: `/api/v1/`)
    pub fn from_env() -> ChargeResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_key = env::var("STRIKE_API_KEY")
            .map_err(|_| ChargeError::Configuration("STRIKE_API_KEY not set".to_string()))?;

        let api_host = env::var("STRIKE_API_HOST").unwrap_or_else(|_| MAINNET_HOST.to_string());
        let api_base = env::var("STRIKE_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Self::new(api_key, api_host, api_base)
    }

    /// Check if pointed at the Strike testnet deployment
    pub fn is_testnet(&self) -> bool {
        self.api_host == TESTNET_HOST
    }

    /// Builder: override scheme + authority (for testing against a
    /// local mock server over plain HTTP)
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder: set the request timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// URL of the charge-creation endpoint
    pub fn charges_url(&self) -> String {
        format!("{}{}charges", self.api_url, self.api_base)
    }

    /// URL of the retrieval endpoint for one charge
    pub fn charge_url(&self, charge_id: &str) -> String {
        format!("{}/{}", self.charges_url(), charge_id)
    }
}

/// Normalize a base path to `/segment/.../` form.
fn normalize_base(base: &str) -> ChargeResult<String> {
    if base.contains(char::is_whitespace) || base.contains("://") {
        return Err(ChargeError::Configuration(format!(
            "api_base must be a URL path prefix, got {base:?}"
        )));
    }

    let trimmed = base.trim_matches('/');
    if trimmed.is_empty() {
        return Ok("/".to_string());
    }
    Ok(format!("/{trimmed}/"))
}
