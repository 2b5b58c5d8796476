//! API key models

use super::{LoadMasterResponse, impl_api_response};
use serde::{Deserialize, Serialize};

/// `listapikeys` / `addapikey` / `delapikey` response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeysResponse {
    #[serde(flatten)]
    pub response: LoadMasterResponse,
    #[serde(rename = "apikeys", default)]
    pub api_keys: Vec<String>,
}

impl std::fmt::Display for ApiKeysResponse {
    // Keys are secrets; only their count is rendered
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} API key(s)", self.api_keys.len())
    }
}

impl_api_response!(ApiKeysResponse);
