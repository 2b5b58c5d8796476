//! API key management, backup and restore

use super::LoadMasterClient;
use crate::common::Command;
use crate::error::Result;
use crate::models::*;
use tracing::{debug, info};

impl LoadMasterClient {
    /// List the API keys of the authenticated user
    pub async fn list_api_keys(&self) -> Result<ApiKeysResponse> {
        debug!("Listing API keys");
        self.send(Command::new("listapikeys")).await
    }

    /// Generate a new API key; the response lists every key including the new one
    pub async fn generate_api_key(&self) -> Result<ApiKeysResponse> {
        debug!("Generating API key");
        self.send(Command::new("addapikey")).await
    }

    /// Revoke an API key
    pub async fn delete_api_key(&self, key: &str) -> Result<ApiKeysResponse> {
        debug!("Deleting API key");
        self.send(Command::new("delapikey").arg("key", key)).await
    }

    /// Download a configuration backup
    ///
    /// The archive is base64 encoded in `data`; see [`DataResponse::decode`].
    pub async fn backup(&self) -> Result<DataResponse> {
        info!("Creating configuration backup");
        self.send(Command::new("backup")).await
    }

    /// Restore a configuration backup
    ///
    /// # Arguments
    /// * `data` - Base64 encoded archive as returned by [`Self::backup`]
    /// * `restore_type` - The appliance's restore selector, a bit set of
    ///   configuration areas
    pub async fn restore(&self, data: &str, restore_type: u32) -> Result<LoadMasterResponse> {
        info!(restore_type, bytes = data.len(), "Restoring configuration backup");
        let command = Command::new("restore")
            .arg("data", data)
            .arg("type", restore_type.to_string());
        self.send(command).await
    }
}
