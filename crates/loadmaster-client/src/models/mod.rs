//! LoadMaster API models
//!
//! Field names follow the appliance's JSON exactly, including its mixed
//! casing, so every field carries an explicit `rename`.

mod acl;
mod administration;
mod certificate;
mod owasp;
mod real_server;
mod rule;
mod virtual_service;

pub use acl::*;
pub use administration::*;
pub use certificate::*;
pub use owasp::*;
pub use real_server::*;
pub use rule::*;
pub use virtual_service::*;

use crate::common::decode_payload;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Status envelope present in every accessv2 response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadMasterResponse {
    pub code: u16,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

impl LoadMasterResponse {
    /// Successful envelope as returned by the appliance
    pub fn ok() -> Self {
        Self {
            code: 200,
            message: String::new(),
            status: "ok".to_string(),
        }
    }

    /// Whether the envelope reports success
    pub fn is_success(&self) -> bool {
        self.code < 400
    }
}

/// Access to the status envelope of a typed response
pub trait ApiResponse {
    fn envelope(&self) -> &LoadMasterResponse;
}

impl ApiResponse for LoadMasterResponse {
    fn envelope(&self) -> &LoadMasterResponse {
        self
    }
}

/// Implements [`ApiResponse`] for types with a flattened `response` field
macro_rules! impl_api_response {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::models::ApiResponse for $ty {
                fn envelope(&self) -> &$crate::models::LoadMasterResponse {
                    &self.response
                }
            }
        )+
    };
}
pub(crate) use impl_api_response;

/// Response carrying a file or archive in `data`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataResponse {
    #[serde(flatten)]
    pub response: LoadMasterResponse,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub data: String,
}

impl DataResponse {
    /// Decode `data` as standard base64
    pub fn decode(&self) -> Result<Vec<u8>> {
        decode_payload(&self.data)
    }
}

impl_api_response!(DataResponse);
