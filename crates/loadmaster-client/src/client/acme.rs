//! ACME account and certificate operations

use super::LoadMasterClient;
use crate::common::Command;
use crate::error::Result;
use crate::models::*;
use tracing::debug;

impl LoadMasterClient {
    /// Register a Let's Encrypt account, optionally bound to a contact email
    pub async fn register_lets_encrypt_account(&self, email: Option<&str>) -> Result<LoadMasterResponse> {
        debug!(with_email = email.is_some(), "Registering Let's Encrypt account");
        let command = Command::new("registeracmeaccount")
            .opt_arg("email", email)
            .arg("acmetype", AcmeType::LetsEncrypt.as_str());
        self.send(command).await
    }

    /// Import an existing Let's Encrypt account
    ///
    /// # Arguments
    /// * `password` - Passphrase of the account key
    /// * `data` - Base64 encoded account key
    pub async fn fetch_lets_encrypt_account(&self, password: &str, data: &str) -> Result<LoadMasterResponse> {
        debug!("Fetching Let's Encrypt account");
        let command = Command::new("fetchleaccount")
            .arg("password", password)
            .arg("data", data);
        self.send(command).await
    }

    /// Set the DigiCert external account key identifier
    pub async fn set_digicert_key_id(&self, kid: &str) -> Result<LoadMasterResponse> {
        debug!("Setting DigiCert key id");
        let command = Command::new("setacmekid")
            .arg("kid", kid)
            .arg("acmetype", AcmeType::DigiCert.as_str());
        self.send(command).await
    }

    /// Set the DigiCert external account HMAC key
    pub async fn set_digicert_hmac(&self, hmac: &str) -> Result<LoadMasterResponse> {
        debug!("Setting DigiCert HMAC key");
        let command = Command::new("setacmehmac")
            .arg("hmac", hmac)
            .arg("acmetype", AcmeType::DigiCert.as_str());
        self.send(command).await
    }

    /// Request a certificate from an ACME authority
    ///
    /// # Arguments
    /// * `name` - Name the certificate is stored under
    /// * `common_name` - Subject common name
    /// * `vs` - Virtual service answering the HTTP-01 challenge
    /// * `acme_type` - Issuing authority
    /// * `params` - Subject fields and DNS challenge settings
    pub async fn request_acme_certificate(
        &self,
        name: &str,
        common_name: &str,
        vs: &str,
        acme_type: AcmeType,
        params: Option<&AcmeCertificateParameters>,
    ) -> Result<LoadMasterResponse> {
        debug!(name, common_name, vs, acme_type = %acme_type, "Requesting ACME certificate");
        let mut command = Command::new("addacmecert")
            .arg("cert", name)
            .arg("cn", common_name)
            .arg("vid", vs)
            .arg("acmetype", acme_type.as_str());
        if let Some(params) = params {
            command = command.params(params)?;
        }
        self.send(command).await
    }

    /// Delete an ACME issued certificate
    pub async fn delete_acme_certificate(&self, name: &str, acme_type: AcmeType) -> Result<LoadMasterResponse> {
        debug!(name, acme_type = %acme_type, "Deleting ACME certificate");
        let command = Command::new("delacmecert")
            .arg("cert", name)
            .arg("acmetype", acme_type.as_str());
        self.send(command).await
    }
}
