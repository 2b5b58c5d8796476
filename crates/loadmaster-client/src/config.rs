//! Configuration for the LoadMaster client
//!
//! Supports environment-based configuration with defaults suited to an
//! appliance reachable over its management interface.

use crate::common::Credentials;
use crate::error::{LoadMasterError, Result};
use std::env;
use std::time::Duration;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Appliance base URL (e.g. `https://10.0.0.1`)
    pub base_url: String,
    /// API key or username/password
    pub credentials: Credentials,
    /// Request timeout
    pub timeout: Duration,
    /// Accept self-signed or otherwise invalid TLS certificates
    pub accept_invalid_certs: bool,
}

impl ClientConfig {
    /// Configuration with default timeout and TLS settings
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
            timeout: DEFAULT_TIMEOUT,
            // Appliances ship with a self-signed management certificate
            accept_invalid_certs: true,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Require a valid TLS certificate chain
    pub fn with_certificate_validation(mut self) -> Self {
        self.accept_invalid_certs = false;
        self
    }

    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `LOADMASTER_URL`: full base URL, or
    /// - `LOADMASTER_IP`: appliance address, reached over `https://`
    /// - `LOADMASTER_API_KEY`: API key
    /// - `LOADMASTER_USER` / `LOADMASTER_PASSWORD`: username and password
    /// - `LOADMASTER_TIMEOUT_SECS`: request timeout in seconds
    /// - `LOADMASTER_INSECURE`: `false` or `0` enforces certificate validation
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = get("LOADMASTER_URL")
            .or_else(|| get("LOADMASTER_IP").map(|ip| format!("https://{}", ip.trim())))
            .ok_or_else(|| {
                LoadMasterError::InvalidConfig(
                    "LOADMASTER_URL or LOADMASTER_IP must be set".to_string(),
                )
            })?;

        let credentials = Credentials {
            api_key: get("LOADMASTER_API_KEY"),
            username: get("LOADMASTER_USER"),
            password: get("LOADMASTER_PASSWORD"),
        };

        let mut config = Self::new(base_url, credentials);

        if let Some(secs) = get("LOADMASTER_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                LoadMasterError::InvalidConfig(format!(
                    "LOADMASTER_TIMEOUT_SECS must be a number of seconds, got {:?}",
                    secs
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(insecure) = get("LOADMASTER_INSECURE") {
            config.accept_invalid_certs =
                !matches!(insecure.trim().to_lowercase().as_str(), "false" | "0" | "no");
        }

        Ok(config)
    }
}
