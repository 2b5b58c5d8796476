//! Certificate and ACME models

use super::{LoadMasterResponse, impl_api_response};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary of an installed certificate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertInfo {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub cert_type: String,
    #[serde(default)]
    pub modulus: String,
}

/// `listcert` / `listintermediate` response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCertificateResponse {
    #[serde(flatten)]
    pub response: LoadMasterResponse,
    #[serde(rename = "cert", default)]
    pub certificates: Vec<CertInfo>,
}

impl ListCertificateResponse {
    pub fn contains(&self, name: &str) -> bool {
        self.certificates.iter().any(|c| c.name == name)
    }
}

/// `readcert` / `readintermediate` response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowCertificateResponse {
    #[serde(flatten)]
    pub response: LoadMasterResponse,
    #[serde(default)]
    pub certificate: String,
}

impl_api_response!(ListCertificateResponse, ShowCertificateResponse);

/// ACME certificate authority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcmeType {
    #[serde(rename = "1")]
    LetsEncrypt,
    #[serde(rename = "2")]
    DigiCert,
}

impl AcmeType {
    /// Wire value sent as `acmetype`
    pub fn as_str(&self) -> &'static str {
        match self {
            AcmeType::LetsEncrypt => "1",
            AcmeType::DigiCert => "2",
        }
    }
}

impl fmt::Display for AcmeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional subject and DNS challenge settings for `addacmecert`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcmeCertificateParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_size: Option<u32>,
    /// DNS provider used for the DNS-01 challenge
    #[serde(rename = "dnsapi", default, skip_serializing_if = "Option::is_none")]
    pub dns_api: Option<String>,
    #[serde(rename = "dnsapiparams", default, skip_serializing_if = "Option::is_none")]
    pub dns_api_params: Option<String>,
}
