//! Virtual service and sub virtual service operations

use super::LoadMasterClient;
use crate::common::Command;
use crate::error::Result;
use crate::models::*;
use tracing::debug;

impl LoadMasterClient {
    /// List every virtual service, sub virtual services included
    pub async fn list_virtual_services(&self) -> Result<ListVirtualServiceResponse> {
        debug!("Listing virtual services");
        self.send(Command::new("listvs")).await
    }

    /// Show a virtual service
    ///
    /// # Arguments
    /// * `vs` - Virtual service index, or `address/port/protocol` triple
    pub async fn show_virtual_service(&self, vs: &str) -> Result<VirtualServiceResponse> {
        debug!(vs, "Showing virtual service");
        self.send(Command::new("showvs").arg("vs", vs)).await
    }

    /// Create a virtual service
    ///
    /// # Arguments
    /// * `address` - Listening address
    /// * `port` - Listening port
    /// * `protocol` - `tcp` or `udp`
    /// * `params` - Settings applied at creation
    pub async fn add_virtual_service(
        &self,
        address: &str,
        port: &str,
        protocol: &str,
        params: &VirtualServiceParameters,
    ) -> Result<VirtualServiceResponse> {
        debug!(address, port, protocol, "Adding virtual service");
        let command = Command::new("addvs")
            .arg("vs", address)
            .arg("port", port)
            .arg("prot", protocol)
            .params(params)?;
        self.send(command).await
    }

    /// Change settings of a virtual service
    pub async fn modify_virtual_service(
        &self,
        vs: &str,
        params: &VirtualServiceParameters,
    ) -> Result<VirtualServiceResponse> {
        debug!(vs, "Modifying virtual service");
        let command = Command::new("modvs").arg("vs", vs).params(params)?;
        self.send(command).await
    }

    /// Delete a virtual service and its real servers
    pub async fn delete_virtual_service(&self, vs: &str) -> Result<LoadMasterResponse> {
        debug!(vs, "Deleting virtual service");
        self.send(Command::new("delvs").arg("vs", vs)).await
    }

    /// Show a sub virtual service by its own index
    pub async fn show_sub_virtual_service(&self, id: &str) -> Result<SubVirtualServiceResponse> {
        debug!(id, "Showing sub virtual service");
        self.send(Command::new("showvs").arg("vs", id)).await
    }

    /// Create a sub virtual service under `parent`
    ///
    /// The appliance answers with the parent; the new sub virtual service is
    /// the last entry of its `SubVS` list.
    pub async fn add_sub_virtual_service(
        &self,
        parent: &str,
        params: &VirtualServiceParameters,
    ) -> Result<SubVirtualServiceResponse> {
        debug!(parent, "Adding sub virtual service");
        let command = Command::new("modvs")
            .arg("vs", parent)
            .arg("createsubvs", "")
            .params(params)?;
        self.send(command).await
    }

    /// Change settings of a sub virtual service
    pub async fn modify_sub_virtual_service(
        &self,
        id: &str,
        params: &VirtualServiceParameters,
    ) -> Result<SubVirtualServiceResponse> {
        debug!(id, "Modifying sub virtual service");
        let command = Command::new("modvs").arg("vs", id).params(params)?;
        self.send(command).await
    }

    /// Delete a sub virtual service
    pub async fn delete_sub_virtual_service(&self, id: &str) -> Result<LoadMasterResponse> {
        debug!(id, "Deleting sub virtual service");
        self.send(Command::new("delvs").arg("vs", id)).await
    }
}
