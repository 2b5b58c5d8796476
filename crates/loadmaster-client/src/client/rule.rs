//! Content rule operations

use super::LoadMasterClient;
use crate::common::Command;
use crate::error::Result;
use crate::models::*;
use tracing::debug;

impl LoadMasterClient {
    /// List every content rule
    pub async fn list_rules(&self) -> Result<RuleResponse> {
        debug!("Listing rules");
        self.send(Command::new("showrule")).await
    }

    /// Show a single content rule
    pub async fn show_rule(&self, name: &str) -> Result<RuleResponse> {
        debug!(name, "Showing rule");
        self.send(Command::new("showrule").arg("name", name)).await
    }

    /// Create a content rule
    pub async fn add_rule(&self, rule_type: RuleType, name: &str, rule: &GeneralRule) -> Result<RuleResponse> {
        debug!(name, rule_type = %rule_type, "Adding rule");
        let command = Command::new("addrule")
            .arg("type", rule_type.as_str())
            .arg("name", name)
            .params(rule)?;
        self.send(command).await
    }

    /// Change a content rule
    pub async fn modify_rule(&self, name: &str, rule: &GeneralRule) -> Result<RuleResponse> {
        debug!(name, "Modifying rule");
        let command = Command::new("modrule").arg("name", name).params(rule)?;
        self.send(command).await
    }

    /// Delete a content rule
    pub async fn delete_rule(&self, name: &str) -> Result<LoadMasterResponse> {
        debug!(name, "Deleting rule");
        self.send(Command::new("delrule").arg("name", name)).await
    }
}
