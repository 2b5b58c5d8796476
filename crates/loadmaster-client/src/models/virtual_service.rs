//! Virtual service models
//!
//! A virtual service's settings are grouped the way the appliance's UI groups
//! them. Every group is flattened into the same JSON object, both in requests
//! (`addvs`/`modvs`) and in responses (`showvs`/`listvs`).

use super::{LoadMasterResponse, impl_api_response};
use serde::{Deserialize, Serialize};

/// A virtual service as reported by `showvs` / `listvs`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualService {
    #[serde(rename = "Index")]
    pub index: i32,
    #[serde(rename = "Protocol")]
    pub protocol: String,
    #[serde(rename = "VSAddress")]
    pub address: String,
    #[serde(rename = "VSPort")]
    pub port: String,
    #[serde(rename = "MasterVS", skip_serializing_if = "Option::is_none")]
    pub master_vs: Option<i32>,
    #[serde(rename = "MasterVSID", skip_serializing_if = "Option::is_none")]
    pub master_vs_id: Option<i32>,
    #[serde(rename = "MatchRules", skip_serializing_if = "Vec::is_empty")]
    pub match_rules: Vec<String>,
    #[serde(rename = "MatchBodyRules", skip_serializing_if = "Vec::is_empty")]
    pub match_body_rules: Vec<String>,
    #[serde(flatten)]
    pub parameters: VirtualServiceParameters,
}

/// A sub virtual service nested inside a parent virtual service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubVirtualService {
    #[serde(flatten)]
    pub virtual_service: VirtualService,
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Forward", default, skip_serializing_if = "Option::is_none")]
    pub forward: Option<String>,
    #[serde(rename = "VSIndex", default, skip_serializing_if = "Option::is_none")]
    pub vs_index: Option<i32>,
}

/// Settings accepted by `addvs` / `modvs`
///
/// Only the fields that are set are sent; everything else keeps the
/// appliance's current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VirtualServiceParameters {
    #[serde(flatten)]
    pub basic: BasicProperties,
    #[serde(flatten)]
    pub standard: StandardOptions,
    #[serde(flatten)]
    pub ssl: SslProperties,
    #[serde(flatten)]
    pub advanced: AdvancedProperties,
    #[serde(flatten)]
    pub waf: WafSettings,
    #[serde(flatten)]
    pub esp: EspOptions,
    #[serde(flatten)]
    pub real_servers: RealServerSettings,
    #[serde(flatten)]
    pub misc: Miscellaneous,
}

impl VirtualServiceParameters {
    /// Parameters setting only the service type (`gen`, `http`, `http2`, `ts`, `tls`, `log`)
    pub fn with_type(vs_type: impl Into<String>) -> Self {
        let mut params = Self::default();
        params.basic.vs_type = Some(vs_type.into());
        params
    }

    /// Parameters setting only the nickname
    pub fn with_nickname(nickname: impl Into<String>) -> Self {
        let mut params = Self::default();
        params.basic.nick_name = Some(nickname.into());
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BasicProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    #[serde(rename = "VStype", default, skip_serializing_if = "Option::is_none")]
    pub vs_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StandardOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie: Option<String>,
    #[serde(rename = "ForceL7", default, skip_serializing_if = "Option::is_none")]
    pub force_l7: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idletime: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_originating: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persist_timeout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refreshpersist: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(rename = "showadaptive", default, skip_serializing_if = "Option::is_none")]
    pub show_adaptive: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adaptive_interval: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adaptive_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adaptive_port: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adaptive_min_percent: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_init: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transparent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_for_snat: Option<bool>,
    #[serde(rename = "QoS", default, skip_serializing_if = "Option::is_none")]
    pub qos: Option<i32>,
    #[serde(rename = "StartTLSMode", default, skip_serializing_if = "Option::is_none")]
    pub start_tls_mode: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_ports: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SslProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ciphers: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cipher_set: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls13_cipher_set: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_cert: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_cipher: Option<bool>,
    #[serde(rename = "SSLReencrypt", default, skip_serializing_if = "Option::is_none")]
    pub ssl_reencrypt: Option<bool>,
    #[serde(rename = "PassSNI", default, skip_serializing_if = "Option::is_none")]
    pub pass_sni: Option<bool>,
    #[serde(rename = "SSLReverse", default, skip_serializing_if = "Option::is_none")]
    pub ssl_reverse: Option<bool>,
    #[serde(rename = "SSLRewrite", default, skip_serializing_if = "Option::is_none")]
    pub ssl_rewrite: Option<String>,
    #[serde(rename = "ReverseSNIHostname", default, skip_serializing_if = "Option::is_none")]
    pub reverse_sni_hostname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_header_options: Option<i32>,
    #[serde(rename = "SSLAcceleration", default, skip_serializing_if = "Option::is_none")]
    pub ssl_acceleration: Option<bool>,
    #[serde(rename = "OCSPVerify", default, skip_serializing_if = "Option::is_none")]
    pub ocsp_verify: Option<bool>,
    #[serde(rename = "TLSType", default, skip_serializing_if = "Option::is_none")]
    pub tls_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub need_host_name: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intermediate_certs: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdvancedProperties {
    #[serde(rename = "HTTPReschedule", default, skip_serializing_if = "Option::is_none")]
    pub http_reschedule: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy_hdr_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy_hdr_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_via: Option<i32>,
    #[serde(rename = "AllowHTTP2", default, skip_serializing_if = "Option::is_none")]
    pub allow_http2: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compress: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_percent: Option<i32>,
    #[serde(rename = "DefaultGW", default, skip_serializing_if = "Option::is_none")]
    pub default_gw: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_follow: Option<i32>,
    #[serde(rename = "FollowVSID", default, skip_serializing_if = "Option::is_none")]
    pub follow_vs_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_bind_addrs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_request_rules: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_response_rules: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_rules: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_rules: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standby_addr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standby_port: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_local_sorry_server: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_proc_precedence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_proc_precedence_pos: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_precedence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_precedence_pos: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_precedence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_precedence_pos: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_body_precedence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_body_precedence_pos: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_status_remap: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_remap_msg_map: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_remap_msg_format: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_remap_code_map: Option<String>,
}

/// Web application firewall settings of a virtual service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WafSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intercept: Option<bool>,
    /// 0 = legacy, 1 = OWASP paranoia disabled, 2 = OWASP
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intercept_mode: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intercept_opts: Option<Vec<String>>,
    #[serde(rename = "InterceptPOSTOtherContentTypes", default, skip_serializing_if = "Option::is_none")]
    pub intercept_post_other_content_types: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_threshold: Option<i32>,
}

/// Edge security pack (pre-authentication) options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EspOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_hosts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_directories: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logoff: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_auth_header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_pub_priv: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_password_form: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captcha: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captcha_public_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captcha_private_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captcha_access_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captcha_verify_url: Option<String>,
    #[serde(rename = "ESPLogs", default, skip_serializing_if = "Option::is_none")]
    pub esp_logs: Option<i32>,
    #[serde(rename = "SMTPAllowedDomains", default, skip_serializing_if = "Option::is_none")]
    pub smtp_allowed_domains: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_directories: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub esp_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_auth_mode: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_auth_mode: Option<i32>,
    #[serde(rename = "TokenServerFQDN", default, skip_serializing_if = "Option::is_none")]
    pub token_server_fqdn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_fba_path: Option<String>,
    #[serde(rename = "ServerFBAPost", default, skip_serializing_if = "Option::is_none")]
    pub server_fba_post: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_fba_username_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_conf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_sign_on_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_sign_on_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_groups: Option<String>,
    #[serde(rename = "GroupSIDs", default, skip_serializing_if = "Option::is_none")]
    pub group_sids: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_nested_groups: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steering_groups: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_bearer: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_certificate_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_domains: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_domains: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub same_site: Option<i32>,
    #[serde(rename = "UserPwdChangeURL", default, skip_serializing_if = "Option::is_none")]
    pub user_pwd_change_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pwd_change_msg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pwd_expiry_warn: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_pwd_expiry_warn_days: Option<i32>,
}

/// Real server scheduling and health check settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RealServerSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ldap_endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_codes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_headers: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_len: Option<i32>,
    #[serde(rename = "CheckUse1.1", default, skip_serializing_if = "Option::is_none")]
    pub check_use_http11: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_port: Option<String>,
    #[serde(rename = "NumberOfRSs", default, skip_serializing_if = "Option::is_none")]
    pub number_of_rss: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_rules: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_list: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_use_get: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_hdr_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_hdr_value: Option<String>,
    #[serde(rename = "SubVS", default, skip_serializing_if = "Option::is_none")]
    pub sub_vs: Option<Vec<SubVirtualService>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_post_data: Option<String>,
    #[serde(rename = "RSRulePrecedence", default, skip_serializing_if = "Option::is_none")]
    pub rs_rule_precedence: Option<String>,
    #[serde(rename = "RSRulePrecedencePos", default, skip_serializing_if = "Option::is_none")]
    pub rs_rule_precedence_pos: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhanced_healthchecks: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rs_minimum: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Miscellaneous {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adaptive: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_connect: Option<bool>,
    #[serde(rename = "non_local", default, skip_serializing_if = "Option::is_none")]
    pub non_local: Option<bool>,
}

/// `listvs` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListVirtualServiceResponse {
    #[serde(flatten)]
    pub response: LoadMasterResponse,
    #[serde(rename = "VS", default)]
    pub virtual_services: Vec<VirtualService>,
}

/// `showvs` / `addvs` / `modvs` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VirtualServiceResponse {
    #[serde(flatten)]
    pub response: LoadMasterResponse,
    #[serde(flatten)]
    pub virtual_service: VirtualService,
}

/// Response for commands addressing a sub virtual service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubVirtualServiceResponse {
    #[serde(flatten)]
    pub response: LoadMasterResponse,
    #[serde(flatten)]
    pub sub_virtual_service: SubVirtualService,
}

impl_api_response!(
    ListVirtualServiceResponse,
    VirtualServiceResponse,
    SubVirtualServiceResponse,
);
