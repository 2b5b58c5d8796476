//! OWASP rule assignment models

use super::{LoadMasterResponse, impl_api_response};
use serde::{Deserialize, Serialize};

/// State of an OWASP rule or custom rule set on a virtual service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OwaspRule {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "Type", default, skip_serializing_if = "String::is_empty")]
    pub rule_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// `Yes` / `No` as reported by the appliance
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub enabled: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub runfirst: String,
}

impl OwaspRule {
    pub fn is_enabled(&self) -> bool {
        self.enabled.eq_ignore_ascii_case("yes")
    }
}

/// `owasprules` response when querying a single rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwaspRuleResponse {
    #[serde(flatten)]
    pub response: LoadMasterResponse,
    #[serde(rename = "Rule", default)]
    pub rule: OwaspRule,
}

impl_api_response!(OwaspRuleResponse);
