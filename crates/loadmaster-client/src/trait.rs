//! LoadMasterClient trait for mocking
//!
//! This trait abstracts the LoadMasterClient to enable mocking in unit tests.
//! The concrete LoadMasterClient implements this trait, and tests can use
//! [`crate::MockLoadMasterClient`] (feature `test-util`).

use crate::error::Result;
use crate::models::*;

/// Trait for LoadMaster API operations
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait LoadMasterClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    // Virtual services
    async fn list_virtual_services(&self) -> Result<ListVirtualServiceResponse>;
    async fn show_virtual_service(&self, vs: &str) -> Result<VirtualServiceResponse>;
    async fn add_virtual_service(&self, address: &str, port: &str, protocol: &str, params: &VirtualServiceParameters) -> Result<VirtualServiceResponse>;
    async fn modify_virtual_service(&self, vs: &str, params: &VirtualServiceParameters) -> Result<VirtualServiceResponse>;
    async fn delete_virtual_service(&self, vs: &str) -> Result<LoadMasterResponse>;

    // Sub virtual services
    async fn show_sub_virtual_service(&self, id: &str) -> Result<SubVirtualServiceResponse>;
    async fn add_sub_virtual_service(&self, parent: &str, params: &VirtualServiceParameters) -> Result<SubVirtualServiceResponse>;
    async fn modify_sub_virtual_service(&self, id: &str, params: &VirtualServiceParameters) -> Result<SubVirtualServiceResponse>;
    async fn delete_sub_virtual_service(&self, id: &str) -> Result<LoadMasterResponse>;

    // Real servers
    async fn add_real_server(&self, vs: &str, address: &str, port: &str, params: &RealServerParameters) -> Result<RealServerResponse>;
    async fn show_real_server(&self, vs: &str, rs: &str) -> Result<RealServerResponse>;
    async fn modify_real_server(&self, vs: &str, rs: &str, params: &RealServerParameters) -> Result<RealServerResponse>;
    async fn delete_real_server(&self, vs: &str, rs: &str) -> Result<LoadMasterResponse>;
    async fn add_real_server_rule(&self, vs: &str, rs: &str, rule: &str) -> Result<LoadMasterResponse>;
    async fn delete_real_server_rule(&self, vs: &str, rs: &str, rule: &str) -> Result<LoadMasterResponse>;
    async fn show_real_server_rule(&self, vs: &str, rs: &str, rule: &str) -> Result<RealServer>;

    // Content rules
    async fn list_rules(&self) -> Result<RuleResponse>;
    async fn show_rule(&self, name: &str) -> Result<RuleResponse>;
    async fn add_rule(&self, rule_type: RuleType, name: &str, rule: &GeneralRule) -> Result<RuleResponse>;
    async fn modify_rule(&self, name: &str, rule: &GeneralRule) -> Result<RuleResponse>;
    async fn delete_rule(&self, name: &str) -> Result<LoadMasterResponse>;

    // Certificates
    async fn list_certificates(&self) -> Result<ListCertificateResponse>;
    async fn list_intermediate_certificates(&self) -> Result<ListCertificateResponse>;
    async fn show_certificate(&self, name: &str) -> Result<ShowCertificateResponse>;
    async fn show_intermediate_certificate(&self, name: &str) -> Result<ShowCertificateResponse>;
    async fn add_certificate(&self, name: &str, password: Option<&str>, data: &str) -> Result<LoadMasterResponse>;
    async fn add_intermediate_certificate(&self, name: &str, data: &str) -> Result<LoadMasterResponse>;
    async fn delete_certificate(&self, name: &str) -> Result<LoadMasterResponse>;
    async fn delete_intermediate_certificate(&self, name: &str) -> Result<LoadMasterResponse>;

    // ACME
    async fn register_lets_encrypt_account(&self, email: Option<&str>) -> Result<LoadMasterResponse>;
    async fn fetch_lets_encrypt_account(&self, password: &str, data: &str) -> Result<LoadMasterResponse>;
    async fn set_digicert_key_id(&self, kid: &str) -> Result<LoadMasterResponse>;
    async fn set_digicert_hmac(&self, hmac: &str) -> Result<LoadMasterResponse>;
    async fn request_acme_certificate(&self, name: &str, common_name: &str, vs: &str, acme_type: AcmeType, params: Option<&AcmeCertificateParameters>) -> Result<LoadMasterResponse>;
    async fn delete_acme_certificate(&self, name: &str, acme_type: AcmeType) -> Result<LoadMasterResponse>;

    // Access control lists
    async fn list_global_acl(&self, list: AclList) -> Result<AclResponse>;
    async fn add_global_acl(&self, list: AclList, address: &str) -> Result<LoadMasterResponse>;
    async fn delete_global_acl(&self, list: AclList, address: &str) -> Result<LoadMasterResponse>;
    async fn list_virtual_service_acl(&self, vs: &str, list: AclList) -> Result<AclResponse>;
    async fn add_virtual_service_acl(&self, vs: &str, list: AclList, address: &str) -> Result<LoadMasterResponse>;
    async fn delete_virtual_service_acl(&self, vs: &str, list: AclList, address: &str) -> Result<LoadMasterResponse>;

    // WAF
    async fn show_waf_rule(&self, filename: &str) -> Result<DataResponse>;
    async fn add_waf_rule(&self, filename: &str, data: &str) -> Result<LoadMasterResponse>;
    async fn delete_waf_rule(&self, filename: &str) -> Result<LoadMasterResponse>;
    async fn show_waf_data(&self, filename: &str) -> Result<DataResponse>;
    async fn add_waf_data(&self, filename: &str, data: &str) -> Result<LoadMasterResponse>;
    async fn delete_waf_data(&self, filename: &str) -> Result<LoadMasterResponse>;

    // OWASP
    async fn add_owasp_custom_rule(&self, filename: &str, data: &str) -> Result<LoadMasterResponse>;
    async fn delete_owasp_custom_rule(&self, filename: &str) -> Result<LoadMasterResponse>;
    async fn show_owasp_custom_rule(&self, filename: &str) -> Result<DataResponse>;
    async fn add_owasp_custom_data(&self, filename: &str, data: &str) -> Result<LoadMasterResponse>;
    async fn delete_owasp_custom_data(&self, filename: &str) -> Result<LoadMasterResponse>;
    async fn show_owasp_custom_data(&self, filename: &str) -> Result<DataResponse>;
    async fn add_virtual_service_owasp_custom_rule(&self, vs: &str, rule: &str, run_first: bool) -> Result<LoadMasterResponse>;
    async fn delete_virtual_service_owasp_custom_rule(&self, vs: &str, rule: &str) -> Result<LoadMasterResponse>;
    async fn show_virtual_service_owasp_rule(&self, vs: &str, rule: &str) -> Result<OwaspRuleResponse>;
    async fn add_virtual_service_owasp_rule(&self, vs: &str, rule: &str) -> Result<LoadMasterResponse>;
    async fn delete_virtual_service_owasp_rule(&self, vs: &str, rule: &str) -> Result<LoadMasterResponse>;

    // API keys
    async fn list_api_keys(&self) -> Result<ApiKeysResponse>;
    async fn generate_api_key(&self) -> Result<ApiKeysResponse>;
    async fn delete_api_key(&self, key: &str) -> Result<ApiKeysResponse>;

    // Administration
    async fn backup(&self) -> Result<DataResponse>;
    async fn restore(&self, data: &str, restore_type: u32) -> Result<LoadMasterResponse>;
}
