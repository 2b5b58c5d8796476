//! Mock LoadMasterClient for unit testing
//!
//! This module provides a mock implementation of LoadMasterClientTrait that
//! can be used in unit tests without a reachable appliance.
//!
//! The mock is organized into domain-specific modules:
//! - `virtual_service.rs` - virtual services and sub virtual services
//! - `real_server.rs` - real servers and real server rule assignment
//! - `rule.rs` - content rules
//! - `certificate.rs` - certificates and ACME
//! - `acl.rs` - global and per virtual service access lists
//! - `waf.rs` - WAF files, OWASP files and OWASP rule assignment
//! - `administration.rs` - API keys, backup and restore
//!
//! Lookups of missing entries fail with `Api { code: 422 }`, the status the
//! appliance uses for rejected commands.

mod acl;
mod administration;
mod certificate;
mod real_server;
mod rule;
mod virtual_service;
mod waf;

#[cfg(test)]
mod mock_test;

use crate::error::{LoadMasterError, Result};
use crate::loadmaster_trait::LoadMasterClientTrait;
use crate::models::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Status code the appliance answers rejected commands with
pub const UNPROCESSABLE: u16 = 422;

/// Mock LoadMasterClient for testing
///
/// Stores every resource in memory. Clones share the same state.
#[derive(Debug, Clone)]
pub struct MockLoadMasterClient {
    pub(crate) base_url: String,
    pub(crate) state: Arc<Mutex<MockState>>,
}

/// Everything the mock appliance knows; serialized whole by `backup`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct MockState {
    pub(crate) next_index: i32,
    pub(crate) virtual_services: BTreeMap<i32, VirtualService>,
    pub(crate) sub_virtual_services: BTreeMap<i32, SubVirtualService>,
    pub(crate) real_servers: BTreeMap<i32, RealServer>,
    pub(crate) rules: BTreeMap<String, StoredRule>,
    pub(crate) certificates: BTreeMap<String, String>,
    pub(crate) intermediate_certificates: BTreeMap<String, String>,
    pub(crate) acme: AcmeState,
    pub(crate) global_acl: AclEntries,
    pub(crate) virtual_service_acl: BTreeMap<i32, AclEntries>,
    pub(crate) waf_rules: BTreeMap<String, String>,
    pub(crate) waf_data: BTreeMap<String, String>,
    pub(crate) owasp_rules: BTreeMap<String, String>,
    pub(crate) owasp_data: BTreeMap<String, String>,
    pub(crate) owasp_assignments: BTreeMap<i32, BTreeMap<String, OwaspRule>>,
    pub(crate) api_keys: Vec<String>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            next_index: 1,
            virtual_services: BTreeMap::new(),
            sub_virtual_services: BTreeMap::new(),
            real_servers: BTreeMap::new(),
            rules: BTreeMap::new(),
            certificates: BTreeMap::new(),
            intermediate_certificates: BTreeMap::new(),
            acme: AcmeState::default(),
            global_acl: AclEntries::default(),
            virtual_service_acl: BTreeMap::new(),
            waf_rules: BTreeMap::new(),
            waf_data: BTreeMap::new(),
            owasp_rules: BTreeMap::new(),
            owasp_data: BTreeMap::new(),
            owasp_assignments: BTreeMap::new(),
            api_keys: Vec::new(),
        }
    }
}

impl MockState {
    pub(crate) fn next_index(&mut self) -> i32 {
        let current = self.next_index;
        self.next_index += 1;
        current
    }

    /// Index of a virtual service or sub virtual service
    pub(crate) fn service_index(&self, vs: &str) -> Result<i32> {
        vs.trim()
            .parse::<i32>()
            .ok()
            .filter(|i| self.virtual_services.contains_key(i) || self.sub_virtual_services.contains_key(i))
            .ok_or_else(|| unprocessable(format!("Unknown VS {}", vs)))
    }
}

/// A content rule as it was submitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct StoredRule {
    pub(crate) rule_type: RuleType,
    pub(crate) rule: GeneralRule,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct AcmeState {
    pub(crate) lets_encrypt_registered: bool,
    pub(crate) lets_encrypt_email: Option<String>,
    pub(crate) digicert_kid: Option<String>,
    pub(crate) digicert_hmac: Option<String>,
    pub(crate) certificates: BTreeMap<String, AcmeType>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct AclEntries {
    pub(crate) allow: BTreeSet<String>,
    pub(crate) block: BTreeSet<String>,
}

impl AclEntries {
    pub(crate) fn list(&self, list: AclList) -> &BTreeSet<String> {
        match list {
            AclList::Allow => &self.allow,
            AclList::Block => &self.block,
        }
    }

    pub(crate) fn list_mut(&mut self, list: AclList) -> &mut BTreeSet<String> {
        match list {
            AclList::Allow => &mut self.allow,
            AclList::Block => &mut self.block,
        }
    }
}

/// Error the appliance returns for a rejected command
pub(crate) fn unprocessable(message: impl Into<String>) -> LoadMasterError {
    LoadMasterError::api(UNPROCESSABLE, message)
}

/// Overlay the set fields of `update` onto `current`
pub(crate) fn merge<T>(current: &T, update: &T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let mut merged = serde_json::to_value(current)?;
    if let (Value::Object(fields), Value::Object(updates)) = (&mut merged, serde_json::to_value(update)?) {
        for (key, value) in updates {
            fields.insert(key, value);
        }
    }
    Ok(serde_json::from_value(merged)?)
}

impl MockLoadMasterClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Add an API key to the mock store (for test setup)
    pub fn add_api_key(&self, key: impl Into<String>) {
        self.state().api_keys.push(key.into());
    }

    /// Number of virtual services, sub virtual services included
    pub fn virtual_service_count(&self) -> usize {
        let state = self.state();
        state.virtual_services.len() + state.sub_virtual_services.len()
    }

    pub(crate) fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait::async_trait]
impl LoadMasterClientTrait for MockLoadMasterClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    // Virtual services - delegated to virtual_service module
    async fn list_virtual_services(&self) -> Result<ListVirtualServiceResponse> {
        virtual_service::list_virtual_services(self)
    }

    async fn show_virtual_service(&self, vs: &str) -> Result<VirtualServiceResponse> {
        virtual_service::show_virtual_service(self, vs)
    }

    async fn add_virtual_service(
        &self,
        address: &str,
        port: &str,
        protocol: &str,
        params: &VirtualServiceParameters,
    ) -> Result<VirtualServiceResponse> {
        virtual_service::add_virtual_service(self, address, port, protocol, params)
    }

    async fn modify_virtual_service(&self, vs: &str, params: &VirtualServiceParameters) -> Result<VirtualServiceResponse> {
        virtual_service::modify_virtual_service(self, vs, params)
    }

    async fn delete_virtual_service(&self, vs: &str) -> Result<LoadMasterResponse> {
        virtual_service::delete_virtual_service(self, vs)
    }

    async fn show_sub_virtual_service(&self, id: &str) -> Result<SubVirtualServiceResponse> {
        virtual_service::show_sub_virtual_service(self, id)
    }

    async fn add_sub_virtual_service(&self, parent: &str, params: &VirtualServiceParameters) -> Result<SubVirtualServiceResponse> {
        virtual_service::add_sub_virtual_service(self, parent, params)
    }

    async fn modify_sub_virtual_service(&self, id: &str, params: &VirtualServiceParameters) -> Result<SubVirtualServiceResponse> {
        virtual_service::modify_sub_virtual_service(self, id, params)
    }

    async fn delete_sub_virtual_service(&self, id: &str) -> Result<LoadMasterResponse> {
        virtual_service::delete_sub_virtual_service(self, id)
    }

    // Real servers - delegated to real_server module
    async fn add_real_server(
        &self,
        vs: &str,
        address: &str,
        port: &str,
        params: &RealServerParameters,
    ) -> Result<RealServerResponse> {
        real_server::add_real_server(self, vs, address, port, params)
    }

    async fn show_real_server(&self, vs: &str, rs: &str) -> Result<RealServerResponse> {
        real_server::show_real_server(self, vs, rs)
    }

    async fn modify_real_server(&self, vs: &str, rs: &str, params: &RealServerParameters) -> Result<RealServerResponse> {
        real_server::modify_real_server(self, vs, rs, params)
    }

    async fn delete_real_server(&self, vs: &str, rs: &str) -> Result<LoadMasterResponse> {
        real_server::delete_real_server(self, vs, rs)
    }

    async fn add_real_server_rule(&self, vs: &str, rs: &str, rule: &str) -> Result<LoadMasterResponse> {
        real_server::add_real_server_rule(self, vs, rs, rule)
    }

    async fn delete_real_server_rule(&self, vs: &str, rs: &str, rule: &str) -> Result<LoadMasterResponse> {
        real_server::delete_real_server_rule(self, vs, rs, rule)
    }

    async fn show_real_server_rule(&self, vs: &str, rs: &str, rule: &str) -> Result<RealServer> {
        real_server::show_real_server_rule(self, vs, rs, rule)
    }

    // Content rules - delegated to rule module
    async fn list_rules(&self) -> Result<RuleResponse> {
        rule::list_rules(self)
    }

    async fn show_rule(&self, name: &str) -> Result<RuleResponse> {
        rule::show_rule(self, name)
    }

    async fn add_rule(&self, rule_type: RuleType, name: &str, rule: &GeneralRule) -> Result<RuleResponse> {
        rule::add_rule(self, rule_type, name, rule)
    }

    async fn modify_rule(&self, name: &str, rule: &GeneralRule) -> Result<RuleResponse> {
        rule::modify_rule(self, name, rule)
    }

    async fn delete_rule(&self, name: &str) -> Result<LoadMasterResponse> {
        rule::delete_rule(self, name)
    }

    // Certificates and ACME - delegated to certificate module
    async fn list_certificates(&self) -> Result<ListCertificateResponse> {
        certificate::list_certificates(self, false)
    }

    async fn list_intermediate_certificates(&self) -> Result<ListCertificateResponse> {
        certificate::list_certificates(self, true)
    }

    async fn show_certificate(&self, name: &str) -> Result<ShowCertificateResponse> {
        certificate::show_certificate(self, name, false)
    }

    async fn show_intermediate_certificate(&self, name: &str) -> Result<ShowCertificateResponse> {
        certificate::show_certificate(self, name, true)
    }

    async fn add_certificate(&self, name: &str, _password: Option<&str>, data: &str) -> Result<LoadMasterResponse> {
        certificate::add_certificate(self, name, data, false)
    }

    async fn add_intermediate_certificate(&self, name: &str, data: &str) -> Result<LoadMasterResponse> {
        certificate::add_certificate(self, name, data, true)
    }

    async fn delete_certificate(&self, name: &str) -> Result<LoadMasterResponse> {
        certificate::delete_certificate(self, name, false)
    }

    async fn delete_intermediate_certificate(&self, name: &str) -> Result<LoadMasterResponse> {
        certificate::delete_certificate(self, name, true)
    }

    async fn register_lets_encrypt_account(&self, email: Option<&str>) -> Result<LoadMasterResponse> {
        certificate::register_lets_encrypt_account(self, email)
    }

    async fn fetch_lets_encrypt_account(&self, password: &str, data: &str) -> Result<LoadMasterResponse> {
        certificate::fetch_lets_encrypt_account(self, password, data)
    }

    async fn set_digicert_key_id(&self, kid: &str) -> Result<LoadMasterResponse> {
        certificate::set_digicert_key_id(self, kid)
    }

    async fn set_digicert_hmac(&self, hmac: &str) -> Result<LoadMasterResponse> {
        certificate::set_digicert_hmac(self, hmac)
    }

    async fn request_acme_certificate(
        &self,
        name: &str,
        common_name: &str,
        vs: &str,
        acme_type: AcmeType,
        _params: Option<&AcmeCertificateParameters>,
    ) -> Result<LoadMasterResponse> {
        certificate::request_acme_certificate(self, name, common_name, vs, acme_type)
    }

    async fn delete_acme_certificate(&self, name: &str, acme_type: AcmeType) -> Result<LoadMasterResponse> {
        certificate::delete_acme_certificate(self, name, acme_type)
    }

    // Access control lists - delegated to acl module
    async fn list_global_acl(&self, list: AclList) -> Result<AclResponse> {
        acl::list_acl(self, None, list)
    }

    async fn add_global_acl(&self, list: AclList, address: &str) -> Result<LoadMasterResponse> {
        acl::add_acl(self, None, list, address)
    }

    async fn delete_global_acl(&self, list: AclList, address: &str) -> Result<LoadMasterResponse> {
        acl::delete_acl(self, None, list, address)
    }

    async fn list_virtual_service_acl(&self, vs: &str, list: AclList) -> Result<AclResponse> {
        acl::list_acl(self, Some(vs), list)
    }

    async fn add_virtual_service_acl(&self, vs: &str, list: AclList, address: &str) -> Result<LoadMasterResponse> {
        acl::add_acl(self, Some(vs), list, address)
    }

    async fn delete_virtual_service_acl(&self, vs: &str, list: AclList, address: &str) -> Result<LoadMasterResponse> {
        acl::delete_acl(self, Some(vs), list, address)
    }

    // WAF and OWASP - delegated to waf module
    async fn show_waf_rule(&self, filename: &str) -> Result<DataResponse> {
        waf::show_file(self, waf::FileStore::WafRules, filename)
    }

    async fn add_waf_rule(&self, filename: &str, data: &str) -> Result<LoadMasterResponse> {
        waf::add_file(self, waf::FileStore::WafRules, filename, data)
    }

    async fn delete_waf_rule(&self, filename: &str) -> Result<LoadMasterResponse> {
        waf::delete_file(self, waf::FileStore::WafRules, filename)
    }

    async fn show_waf_data(&self, filename: &str) -> Result<DataResponse> {
        waf::show_file(self, waf::FileStore::WafData, filename)
    }

    async fn add_waf_data(&self, filename: &str, data: &str) -> Result<LoadMasterResponse> {
        waf::add_file(self, waf::FileStore::WafData, filename, data)
    }

    async fn delete_waf_data(&self, filename: &str) -> Result<LoadMasterResponse> {
        waf::delete_file(self, waf::FileStore::WafData, filename)
    }

    async fn add_owasp_custom_rule(&self, filename: &str, data: &str) -> Result<LoadMasterResponse> {
        waf::add_file(self, waf::FileStore::OwaspRules, filename, data)
    }

    async fn delete_owasp_custom_rule(&self, filename: &str) -> Result<LoadMasterResponse> {
        waf::delete_file(self, waf::FileStore::OwaspRules, filename)
    }

    async fn show_owasp_custom_rule(&self, filename: &str) -> Result<DataResponse> {
        waf::show_file(self, waf::FileStore::OwaspRules, filename)
    }

    async fn add_owasp_custom_data(&self, filename: &str, data: &str) -> Result<LoadMasterResponse> {
        waf::add_file(self, waf::FileStore::OwaspData, filename, data)
    }

    async fn delete_owasp_custom_data(&self, filename: &str) -> Result<LoadMasterResponse> {
        waf::delete_file(self, waf::FileStore::OwaspData, filename)
    }

    async fn show_owasp_custom_data(&self, filename: &str) -> Result<DataResponse> {
        waf::show_file(self, waf::FileStore::OwaspData, filename)
    }

    async fn add_virtual_service_owasp_custom_rule(&self, vs: &str, rule: &str, run_first: bool) -> Result<LoadMasterResponse> {
        waf::add_custom_rule_assignment(self, vs, rule, run_first)
    }

    async fn delete_virtual_service_owasp_custom_rule(&self, vs: &str, rule: &str) -> Result<LoadMasterResponse> {
        waf::delete_custom_rule_assignment(self, vs, rule)
    }

    async fn show_virtual_service_owasp_rule(&self, vs: &str, rule: &str) -> Result<OwaspRuleResponse> {
        waf::show_rule_assignment(self, vs, rule)
    }

    async fn add_virtual_service_owasp_rule(&self, vs: &str, rule: &str) -> Result<LoadMasterResponse> {
        waf::set_rule_assignment(self, vs, rule, true)
    }

    async fn delete_virtual_service_owasp_rule(&self, vs: &str, rule: &str) -> Result<LoadMasterResponse> {
        waf::set_rule_assignment(self, vs, rule, false)
    }

    // API keys and administration - delegated to administration module
    async fn list_api_keys(&self) -> Result<ApiKeysResponse> {
        administration::list_api_keys(self)
    }

    async fn generate_api_key(&self) -> Result<ApiKeysResponse> {
        administration::generate_api_key(self)
    }

    async fn delete_api_key(&self, key: &str) -> Result<ApiKeysResponse> {
        administration::delete_api_key(self, key)
    }

    async fn backup(&self) -> Result<DataResponse> {
        administration::backup(self)
    }

    async fn restore(&self, data: &str, restore_type: u32) -> Result<LoadMasterResponse> {
        administration::restore(self, data, restore_type)
    }
}
