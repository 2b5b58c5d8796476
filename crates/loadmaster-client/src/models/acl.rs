//! Access control list models

use super::{LoadMasterResponse, impl_api_response};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which access list an `aclcontrol` command addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AclList {
    Allow,
    Block,
}

impl AclList {
    pub fn as_str(&self) -> &'static str {
        match self {
            AclList::Allow => "allow",
            AclList::Block => "block",
        }
    }
}

impl fmt::Display for AclList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An address or network on an access list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclAddress {
    #[serde(rename = "addr", default)]
    pub address: String,
    #[serde(default)]
    pub comment: String,
}

/// Listing of a global or per-virtual-service access list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclResponse {
    #[serde(flatten)]
    pub response: LoadMasterResponse,
    #[serde(default)]
    pub list: String,
    #[serde(rename = "IP", default)]
    pub addresses: Vec<AclAddress>,
}

impl AclResponse {
    pub fn contains(&self, address: &str) -> bool {
        self.addresses.iter().any(|a| a.address == address)
    }
}

impl_api_response!(AclResponse);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_acl_list_wire_values() {
        assert_eq!(serde_json::to_value(AclList::Allow).unwrap(), json!("allow"));
        assert_eq!(AclList::Block.to_string(), "block");
    }

    #[test]
    fn test_acl_response() {
        let r: AclResponse = serde_json::from_value(json!({
            "code": 200,
            "status": "ok",
            "list": "block",
            "IP": [{"addr": "192.0.2.0/24", "comment": ""}]
        }))
        .unwrap();
        assert_eq!(r.list, "block");
        assert!(r.contains("192.0.2.0/24"));
    }

    #[test]
    fn test_empty_acl_response() {
        let r: AclResponse =
            serde_json::from_str(r#"{"code": 200, "status": "ok", "list": "allow"}"#).unwrap();
        assert!(r.addresses.is_empty());
    }
}
