//! Access control list operations
//!
//! Every list operation is the `aclcontrol` command; the field carrying the
//! list name selects the action (`list`, `add`, `del`, and `listvs`, `addvs`,
//! `delvs` for per virtual service lists).

use super::LoadMasterClient;
use crate::common::Command;
use crate::error::Result;
use crate::models::*;
use tracing::debug;

const ACL_COMMAND: &str = "aclcontrol";

impl LoadMasterClient {
    /// List the global allow or block list
    pub async fn list_global_acl(&self, list: AclList) -> Result<AclResponse> {
        debug!(list = %list, "Listing global ACL");
        self.send(Command::new(ACL_COMMAND).arg("list", list.as_str())).await
    }

    /// Add an address or network to a global list
    pub async fn add_global_acl(&self, list: AclList, address: &str) -> Result<LoadMasterResponse> {
        debug!(list = %list, address, "Adding global ACL entry");
        let command = Command::new(ACL_COMMAND)
            .arg("add", list.as_str())
            .arg("addr", address);
        self.send(command).await
    }

    /// Remove an address or network from a global list
    pub async fn delete_global_acl(&self, list: AclList, address: &str) -> Result<LoadMasterResponse> {
        debug!(list = %list, address, "Deleting global ACL entry");
        let command = Command::new(ACL_COMMAND)
            .arg("del", list.as_str())
            .arg("addr", address);
        self.send(command).await
    }

    /// List a virtual service's allow or block list
    pub async fn list_virtual_service_acl(&self, vs: &str, list: AclList) -> Result<AclResponse> {
        debug!(vs, list = %list, "Listing virtual service ACL");
        let command = Command::new(ACL_COMMAND)
            .arg("listvs", list.as_str())
            .arg("vs", vs);
        self.send(command).await
    }

    /// Add an address or network to a virtual service's list
    pub async fn add_virtual_service_acl(&self, vs: &str, list: AclList, address: &str) -> Result<LoadMasterResponse> {
        debug!(vs, list = %list, address, "Adding virtual service ACL entry");
        let command = Command::new(ACL_COMMAND)
            .arg("addvs", list.as_str())
            .arg("vsip", vs)
            .arg("addr", address);
        self.send(command).await
    }

    /// Remove an address or network from a virtual service's list
    pub async fn delete_virtual_service_acl(&self, vs: &str, list: AclList, address: &str) -> Result<LoadMasterResponse> {
        debug!(vs, list = %list, address, "Deleting virtual service ACL entry");
        let command = Command::new(ACL_COMMAND)
            .arg("delvs", list.as_str())
            .arg("vsip", vs)
            .arg("addr", address);
        self.send(command).await
    }
}
