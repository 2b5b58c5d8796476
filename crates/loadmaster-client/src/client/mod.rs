//! LoadMaster API client
//!
//! Every operation builds a [`Command`], hands it to the shared dispatcher and
//! returns the typed response. Operations are grouped by resource in the
//! submodules; the [`LoadMasterClientTrait`] delegation lives at the bottom
//! of this file.

mod acl;
mod acme;
mod administration;
mod certificate;
mod real_server;
mod rule;
mod virtual_service;
mod waf;

use crate::common::{Command, Credentials, HttpClient};
use crate::config::ClientConfig;
use crate::error::{LoadMasterError, Result};
use crate::loadmaster_trait::LoadMasterClientTrait;
use crate::models::*;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

/// LoadMaster API client
#[derive(Debug)]
pub struct LoadMasterClient {
    http: HttpClient,
}

impl LoadMasterClient {
    /// Create a client from a full configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        debug!(
            base_url = %config.base_url,
            timeout_secs = config.timeout.as_secs(),
            accept_invalid_certs = config.accept_invalid_certs,
            "Creating LoadMaster client"
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(LoadMasterError::Http)?;

        Ok(Self {
            http: HttpClient::new(client, &config.base_url, config.credentials),
        })
    }

    /// Create a client authenticating with an API key
    ///
    /// # Arguments
    /// * `base_url` - Appliance URL (e.g., "https://10.0.0.1")
    /// * `api_key` - Key generated on the appliance
    pub fn with_api_key(base_url: &str, api_key: &str) -> Result<Self> {
        Self::new(ClientConfig::new(base_url, Credentials::api_key(api_key)))
    }

    /// Create a client authenticating with a username and password
    pub fn with_username_password(base_url: &str, username: &str, password: &str) -> Result<Self> {
        Self::new(ClientConfig::new(
            base_url,
            Credentials::username_password(username, password),
        ))
    }

    /// Create a client from `LOADMASTER_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Send an arbitrary command
    ///
    /// Escape hatch for commands without a typed wrapper. The response type
    /// decides how much of the body is decoded; [`LoadMasterResponse`] reads
    /// only the status envelope.
    pub async fn send<R>(&self, command: Command) -> Result<R>
    where
        R: DeserializeOwned + ApiResponse,
    {
        self.http.send(command).await
    }
}

#[async_trait::async_trait]
impl LoadMasterClientTrait for LoadMasterClient {
    fn base_url(&self) -> &str {
        self.base_url()
    }

    // Virtual services
    async fn list_virtual_services(&self) -> Result<ListVirtualServiceResponse> {
        self.list_virtual_services().await
    }

    async fn show_virtual_service(&self, vs: &str) -> Result<VirtualServiceResponse> {
        self.show_virtual_service(vs).await
    }

    async fn add_virtual_service(
        &self,
        address: &str,
        port: &str,
        protocol: &str,
        params: &VirtualServiceParameters,
    ) -> Result<VirtualServiceResponse> {
        self.add_virtual_service(address, port, protocol, params).await
    }

    async fn modify_virtual_service(
        &self,
        vs: &str,
        params: &VirtualServiceParameters,
    ) -> Result<VirtualServiceResponse> {
        self.modify_virtual_service(vs, params).await
    }

    async fn delete_virtual_service(&self, vs: &str) -> Result<LoadMasterResponse> {
        self.delete_virtual_service(vs).await
    }

    // Sub virtual services
    async fn show_sub_virtual_service(&self, id: &str) -> Result<SubVirtualServiceResponse> {
        self.show_sub_virtual_service(id).await
    }

    async fn add_sub_virtual_service(
        &self,
        parent: &str,
        params: &VirtualServiceParameters,
    ) -> Result<SubVirtualServiceResponse> {
        self.add_sub_virtual_service(parent, params).await
    }

    async fn modify_sub_virtual_service(
        &self,
        id: &str,
        params: &VirtualServiceParameters,
    ) -> Result<SubVirtualServiceResponse> {
        self.modify_sub_virtual_service(id, params).await
    }

    async fn delete_sub_virtual_service(&self, id: &str) -> Result<LoadMasterResponse> {
        self.delete_sub_virtual_service(id).await
    }

    // Real servers
    async fn add_real_server(
        &self,
        vs: &str,
        address: &str,
        port: &str,
        params: &RealServerParameters,
    ) -> Result<RealServerResponse> {
        self.add_real_server(vs, address, port, params).await
    }

    async fn show_real_server(&self, vs: &str, rs: &str) -> Result<RealServerResponse> {
        self.show_real_server(vs, rs).await
    }

    async fn modify_real_server(
        &self,
        vs: &str,
        rs: &str,
        params: &RealServerParameters,
    ) -> Result<RealServerResponse> {
        self.modify_real_server(vs, rs, params).await
    }

    async fn delete_real_server(&self, vs: &str, rs: &str) -> Result<LoadMasterResponse> {
        self.delete_real_server(vs, rs).await
    }

    async fn add_real_server_rule(&self, vs: &str, rs: &str, rule: &str) -> Result<LoadMasterResponse> {
        self.add_real_server_rule(vs, rs, rule).await
    }

    async fn delete_real_server_rule(&self, vs: &str, rs: &str, rule: &str) -> Result<LoadMasterResponse> {
        self.delete_real_server_rule(vs, rs, rule).await
    }

    async fn show_real_server_rule(&self, vs: &str, rs: &str, rule: &str) -> Result<RealServer> {
        self.show_real_server_rule(vs, rs, rule).await
    }

    // Content rules
    async fn list_rules(&self) -> Result<RuleResponse> {
        self.list_rules().await
    }

    async fn show_rule(&self, name: &str) -> Result<RuleResponse> {
        self.show_rule(name).await
    }

    async fn add_rule(&self, rule_type: RuleType, name: &str, rule: &GeneralRule) -> Result<RuleResponse> {
        self.add_rule(rule_type, name, rule).await
    }

    async fn modify_rule(&self, name: &str, rule: &GeneralRule) -> Result<RuleResponse> {
        self.modify_rule(name, rule).await
    }

    async fn delete_rule(&self, name: &str) -> Result<LoadMasterResponse> {
        self.delete_rule(name).await
    }

    // Certificates
    async fn list_certificates(&self) -> Result<ListCertificateResponse> {
        self.list_certificates().await
    }

    async fn list_intermediate_certificates(&self) -> Result<ListCertificateResponse> {
        self.list_intermediate_certificates().await
    }

    async fn show_certificate(&self, name: &str) -> Result<ShowCertificateResponse> {
        self.show_certificate(name).await
    }

    async fn show_intermediate_certificate(&self, name: &str) -> Result<ShowCertificateResponse> {
        self.show_intermediate_certificate(name).await
    }

    async fn add_certificate(&self, name: &str, password: Option<&str>, data: &str) -> Result<LoadMasterResponse> {
        self.add_certificate(name, password, data).await
    }

    async fn add_intermediate_certificate(&self, name: &str, data: &str) -> Result<LoadMasterResponse> {
        self.add_intermediate_certificate(name, data).await
    }

    async fn delete_certificate(&self, name: &str) -> Result<LoadMasterResponse> {
        self.delete_certificate(name).await
    }

    async fn delete_intermediate_certificate(&self, name: &str) -> Result<LoadMasterResponse> {
        self.delete_intermediate_certificate(name).await
    }

    // ACME
    async fn register_lets_encrypt_account(&self, email: Option<&str>) -> Result<LoadMasterResponse> {
        self.register_lets_encrypt_account(email).await
    }

    async fn fetch_lets_encrypt_account(&self, password: &str, data: &str) -> Result<LoadMasterResponse> {
        self.fetch_lets_encrypt_account(password, data).await
    }

    async fn set_digicert_key_id(&self, kid: &str) -> Result<LoadMasterResponse> {
        self.set_digicert_key_id(kid).await
    }

    async fn set_digicert_hmac(&self, hmac: &str) -> Result<LoadMasterResponse> {
        self.set_digicert_hmac(hmac).await
    }

    async fn request_acme_certificate(
        &self,
        name: &str,
        common_name: &str,
        vs: &str,
        acme_type: AcmeType,
        params: Option<&AcmeCertificateParameters>,
    ) -> Result<LoadMasterResponse> {
        self.request_acme_certificate(name, common_name, vs, acme_type, params).await
    }

    async fn delete_acme_certificate(&self, name: &str, acme_type: AcmeType) -> Result<LoadMasterResponse> {
        self.delete_acme_certificate(name, acme_type).await
    }

    // Access control lists
    async fn list_global_acl(&self, list: AclList) -> Result<AclResponse> {
        self.list_global_acl(list).await
    }

    async fn add_global_acl(&self, list: AclList, address: &str) -> Result<LoadMasterResponse> {
        self.add_global_acl(list, address).await
    }

    async fn delete_global_acl(&self, list: AclList, address: &str) -> Result<LoadMasterResponse> {
        self.delete_global_acl(list, address).await
    }

    async fn list_virtual_service_acl(&self, vs: &str, list: AclList) -> Result<AclResponse> {
        self.list_virtual_service_acl(vs, list).await
    }

    async fn add_virtual_service_acl(&self, vs: &str, list: AclList, address: &str) -> Result<LoadMasterResponse> {
        self.add_virtual_service_acl(vs, list, address).await
    }

    async fn delete_virtual_service_acl(&self, vs: &str, list: AclList, address: &str) -> Result<LoadMasterResponse> {
        self.delete_virtual_service_acl(vs, list, address).await
    }

    // WAF
    async fn show_waf_rule(&self, filename: &str) -> Result<DataResponse> {
        self.show_waf_rule(filename).await
    }

    async fn add_waf_rule(&self, filename: &str, data: &str) -> Result<LoadMasterResponse> {
        self.add_waf_rule(filename, data).await
    }

    async fn delete_waf_rule(&self, filename: &str) -> Result<LoadMasterResponse> {
        self.delete_waf_rule(filename).await
    }

    async fn show_waf_data(&self, filename: &str) -> Result<DataResponse> {
        self.show_waf_data(filename).await
    }

    async fn add_waf_data(&self, filename: &str, data: &str) -> Result<LoadMasterResponse> {
        self.add_waf_data(filename, data).await
    }

    async fn delete_waf_data(&self, filename: &str) -> Result<LoadMasterResponse> {
        self.delete_waf_data(filename).await
    }

    // OWASP
    async fn add_owasp_custom_rule(&self, filename: &str, data: &str) -> Result<LoadMasterResponse> {
        self.add_owasp_custom_rule(filename, data).await
    }

    async fn delete_owasp_custom_rule(&self, filename: &str) -> Result<LoadMasterResponse> {
        self.delete_owasp_custom_rule(filename).await
    }

    async fn show_owasp_custom_rule(&self, filename: &str) -> Result<DataResponse> {
        self.show_owasp_custom_rule(filename).await
    }

    async fn add_owasp_custom_data(&self, filename: &str, data: &str) -> Result<LoadMasterResponse> {
        self.add_owasp_custom_data(filename, data).await
    }

    async fn delete_owasp_custom_data(&self, filename: &str) -> Result<LoadMasterResponse> {
        self.delete_owasp_custom_data(filename).await
    }

    async fn show_owasp_custom_data(&self, filename: &str) -> Result<DataResponse> {
        self.show_owasp_custom_data(filename).await
    }

    async fn add_virtual_service_owasp_custom_rule(
        &self,
        vs: &str,
        rule: &str,
        run_first: bool,
    ) -> Result<LoadMasterResponse> {
        self.add_virtual_service_owasp_custom_rule(vs, rule, run_first).await
    }

    async fn delete_virtual_service_owasp_custom_rule(&self, vs: &str, rule: &str) -> Result<LoadMasterResponse> {
        self.delete_virtual_service_owasp_custom_rule(vs, rule).await
    }

    async fn show_virtual_service_owasp_rule(&self, vs: &str, rule: &str) -> Result<OwaspRuleResponse> {
        self.show_virtual_service_owasp_rule(vs, rule).await
    }

    async fn add_virtual_service_owasp_rule(&self, vs: &str, rule: &str) -> Result<LoadMasterResponse> {
        self.add_virtual_service_owasp_rule(vs, rule).await
    }

    async fn delete_virtual_service_owasp_rule(&self, vs: &str, rule: &str) -> Result<LoadMasterResponse> {
        self.delete_virtual_service_owasp_rule(vs, rule).await
    }

    // API keys
    async fn list_api_keys(&self) -> Result<ApiKeysResponse> {
        self.list_api_keys().await
    }

    async fn generate_api_key(&self) -> Result<ApiKeysResponse> {
        self.generate_api_key().await
    }

    async fn delete_api_key(&self, key: &str) -> Result<ApiKeysResponse> {
        self.delete_api_key(key).await
    }

    // Administration
    async fn backup(&self) -> Result<DataResponse> {
        self.backup().await
    }

    async fn restore(&self, data: &str, restore_type: u32) -> Result<LoadMasterResponse> {
        self.restore(data, restore_type).await
    }
}
