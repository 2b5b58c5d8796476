//! Certificate operations

use super::LoadMasterClient;
use crate::common::Command;
use crate::error::Result;
use crate::models::*;
use tracing::debug;

impl LoadMasterClient {
    /// List installed certificates
    pub async fn list_certificates(&self) -> Result<ListCertificateResponse> {
        debug!("Listing certificates");
        self.send(Command::new("listcert")).await
    }

    /// List installed intermediate certificates
    pub async fn list_intermediate_certificates(&self) -> Result<ListCertificateResponse> {
        debug!("Listing intermediate certificates");
        self.send(Command::new("listintermediate")).await
    }

    /// Read a certificate
    pub async fn show_certificate(&self, name: &str) -> Result<ShowCertificateResponse> {
        debug!(name, "Showing certificate");
        self.send(Command::new("readcert").arg("cert", name)).await
    }

    /// Read an intermediate certificate
    pub async fn show_intermediate_certificate(&self, name: &str) -> Result<ShowCertificateResponse> {
        debug!(name, "Showing intermediate certificate");
        self.send(Command::new("readintermediate").arg("cert", name)).await
    }

    /// Upload a certificate
    ///
    /// # Arguments
    /// * `name` - Name the certificate is stored under
    /// * `password` - Passphrase of an encrypted key or PFX bundle
    /// * `data` - Base64 encoded certificate and key, see [`crate::encode_payload`]
    pub async fn add_certificate(&self, name: &str, password: Option<&str>, data: &str) -> Result<LoadMasterResponse> {
        debug!(name, encrypted = password.is_some(), "Adding certificate");
        let command = Command::new("addcert")
            .arg("cert", name)
            .arg("data", data)
            .opt_arg("password", password);
        self.send(command).await
    }

    /// Upload an intermediate certificate
    pub async fn add_intermediate_certificate(&self, name: &str, data: &str) -> Result<LoadMasterResponse> {
        debug!(name, "Adding intermediate certificate");
        let command = Command::new("addintermediate").arg("cert", name).arg("data", data);
        self.send(command).await
    }

    /// Delete a certificate
    pub async fn delete_certificate(&self, name: &str) -> Result<LoadMasterResponse> {
        debug!(name, "Deleting certificate");
        self.send(Command::new("delcert").arg("cert", name)).await
    }

    /// Delete an intermediate certificate
    pub async fn delete_intermediate_certificate(&self, name: &str) -> Result<LoadMasterResponse> {
        debug!(name, "Deleting intermediate certificate");
        self.send(Command::new("delintermediate").arg("cert", name)).await
    }
}
