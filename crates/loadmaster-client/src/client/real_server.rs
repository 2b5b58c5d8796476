//! Real server operations and real server rule assignment

use super::LoadMasterClient;
use crate::common::Command;
use crate::error::{LoadMasterError, Result};
use crate::models::*;
use tracing::debug;

impl LoadMasterClient {
    /// Attach a real server to a virtual service
    ///
    /// # Arguments
    /// * `vs` - Virtual service identifier
    /// * `address` - Real server address
    /// * `port` - Real server port
    /// * `params` - Settings applied at creation
    pub async fn add_real_server(
        &self,
        vs: &str,
        address: &str,
        port: &str,
        params: &RealServerParameters,
    ) -> Result<RealServerResponse> {
        debug!(vs, address, port, "Adding real server");
        let command = Command::new("addrs")
            .arg("vs", vs)
            .arg("rs", address)
            .arg("rsport", port)
            .params(params)?;
        self.send(command).await
    }

    /// Show a real server
    ///
    /// `rs` is the real server address, or `!<index>` to address it by index.
    pub async fn show_real_server(&self, vs: &str, rs: &str) -> Result<RealServerResponse> {
        debug!(vs, rs, "Showing real server");
        self.send(Command::new("showrs").arg("vs", vs).arg("rs", rs)).await
    }

    /// Change settings of a real server
    pub async fn modify_real_server(
        &self,
        vs: &str,
        rs: &str,
        params: &RealServerParameters,
    ) -> Result<RealServerResponse> {
        debug!(vs, rs, "Modifying real server");
        let command = Command::new("modrs").arg("vs", vs).arg("rs", rs).params(params)?;
        self.send(command).await
    }

    /// Detach a real server from a virtual service
    pub async fn delete_real_server(&self, vs: &str, rs: &str) -> Result<LoadMasterResponse> {
        debug!(vs, rs, "Deleting real server");
        self.send(Command::new("delrs").arg("vs", vs).arg("rs", rs)).await
    }

    /// Assign a content rule to a real server
    pub async fn add_real_server_rule(&self, vs: &str, rs: &str, rule: &str) -> Result<LoadMasterResponse> {
        debug!(vs, rs, rule, "Adding real server rule");
        let command = Command::new("addrsrule")
            .arg("vs", vs)
            .arg("rs", rs)
            .arg("name", rule);
        self.send(command).await
    }

    /// Remove a content rule from a real server
    pub async fn delete_real_server_rule(&self, vs: &str, rs: &str, rule: &str) -> Result<LoadMasterResponse> {
        debug!(vs, rs, rule, "Deleting real server rule");
        let command = Command::new("delrsrule")
            .arg("vs", vs)
            .arg("rs", rs)
            .arg("name", rule);
        self.send(command).await
    }

    /// Find the real server that has `rule` assigned
    ///
    /// There is no dedicated command; this reads the real server and checks
    /// its `MatchRules`. Fails with [`LoadMasterError::NotFound`] when the
    /// rule is not assigned.
    pub async fn show_real_server_rule(&self, vs: &str, rs: &str, rule: &str) -> Result<RealServer> {
        debug!(vs, rs, rule, "Showing real server rule");
        let response = self.show_real_server(vs, rs).await?;
        response
            .real_servers
            .into_iter()
            .find(|server| server.has_rule(rule))
            .ok_or_else(|| {
                LoadMasterError::NotFound(format!(
                    "rule {} is not assigned to real server {} of virtual service {}",
                    rule, rs, vs
                ))
            })
    }
}
