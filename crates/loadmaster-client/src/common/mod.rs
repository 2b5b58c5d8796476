//! Common utilities for the LoadMaster API client
//!
//! Holds the request dispatcher shared by every resource module: credential
//! injection, the POST to `accessv2` and status mapping.

pub mod auth;
pub mod command;

use crate::error::{LoadMasterError, Result};
use crate::models::ApiResponse;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, info};

pub use auth::{Auth, Credentials};
pub use command::Command;

/// Path of the JSON management endpoint
pub const ACCESS_PATH: &str = "/accessv2";

/// Encode file contents (certificates, rule files, backups) for upload
pub fn encode_payload(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode a base64 payload returned by the appliance
pub fn decode_payload(data: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(data.trim())?)
}

/// HTTP client wrapper with authentication
pub struct HttpClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl HttpClient {
    /// Create a new HTTP client wrapper
    pub fn new(client: Client, base_url: &str, credentials: Credentials) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL from a path
    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a command and decode the typed response
    ///
    /// HTTP statuses >= 400 and envelopes whose `code` is >= 400 both become
    /// [`LoadMasterError::Api`].
    pub async fn send<R>(&self, command: Command) -> Result<R>
    where
        R: DeserializeOwned + ApiResponse,
    {
        let cmd = command.name();
        let url = self.build_url(ACCESS_PATH);
        info!(cmd, url = %url, "Sending command to LoadMaster API");

        let auth = self.credentials.resolve().inspect_err(|e| {
            error!(cmd, error = %e, "Cannot authenticate command");
        })?;

        let mut body = command.into_body();
        debug!(cmd, fields = ?body.keys().collect::<Vec<_>>(), "Command payload built");
        auth.inject(&mut body);

        let response = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(cmd, error = %e, "Error sending request");
                LoadMasterError::Http(e)
            })?;

        let status = response.status();
        let text = response.text().await?;

        if status.as_u16() >= 400 {
            error!(cmd, status = %status, bytes = text.len(), "Error in response");
            return Err(LoadMasterError::api(status.as_u16(), text));
        }
        debug!(cmd, status = %status, bytes = text.len(), "Response received");

        let parsed: R = match serde_json::from_str(&text) {
            Ok(parsed) => parsed,
            Err(e) => {
                if let Some(err) = rejected_envelope(&text) {
                    error!(cmd, error = %err, "Command rejected");
                    return Err(err);
                }
                // serde messages can quote body values; log the position only
                error!(
                    cmd,
                    category = ?e.classify(),
                    line = e.line(),
                    column = e.column(),
                    bytes = text.len(),
                    "Error decoding response body"
                );
                return Err(LoadMasterError::Serialization(e));
            }
        };

        let envelope = parsed.envelope();
        if envelope.code >= 400 {
            error!(cmd, code = envelope.code, message = %envelope.message, "Command rejected");
            return Err(LoadMasterError::api(envelope.code, envelope.message.clone()));
        }

        Ok(parsed)
    }
}

/// Read an error envelope out of a body the typed model could not decode
///
/// The appliance may repeat keys in failure replies; the last one wins.
fn rejected_envelope(text: &str) -> Option<LoadMasterError> {
    let value: Value = serde_json::from_str(text).ok()?;
    let code = value.get("code").and_then(Value::as_u64).filter(|c| *c >= 400)?;
    let message = value.get("message").and_then(Value::as_str).unwrap_or_default();
    Some(LoadMasterError::api(
        u16::try_from(code).unwrap_or(u16::MAX),
        message,
    ))
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}
