//! Real server models

use super::{LoadMasterResponse, impl_api_response};
use serde::{Deserialize, Serialize};

/// Settings accepted by `addrs` / `modrs`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RealServerParameters {
    #[serde(rename = "Addr", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_name: Option<String>,
    /// `nat` or `route`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nrules: Option<i32>,
}

/// A real server attached to a virtual service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealServer {
    #[serde(rename = "VSIndex", default)]
    pub vs_index: i32,
    #[serde(rename = "RSIndex", default)]
    pub rs_index: i32,
    #[serde(flatten)]
    pub parameters: RealServerParameters,
    #[serde(rename = "MatchRules", default, skip_serializing_if = "Vec::is_empty")]
    pub match_rules: Vec<String>,
}

impl RealServer {
    /// Whether the content rule `name` is assigned to this real server
    pub fn has_rule(&self, name: &str) -> bool {
        self.match_rules.iter().any(|r| r == name)
    }
}

/// `addrs` / `showrs` / `modrs` response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealServerResponse {
    #[serde(flatten)]
    pub response: LoadMasterResponse,
    #[serde(rename = "Rs", default)]
    pub real_servers: Vec<RealServer>,
}

impl_api_response!(RealServerResponse);
