//! WAF and OWASP rule operations
//!
//! Rule and data files travel base64 encoded in `data`.

use super::LoadMasterClient;
use crate::common::Command;
use crate::error::Result;
use crate::models::*;
use tracing::debug;

const OWASP_RULES_COMMAND: &str = "owasprules";

fn file_command(cmd: &'static str, filename: &str) -> Command {
    Command::new(cmd).arg("filename", filename)
}

fn upload_command(cmd: &'static str, filename: &str, data: &str) -> Command {
    file_command(cmd, filename).arg("data", data)
}

fn owasp_assignment(vs: &str, rule: &str, enable: bool) -> Command {
    Command::new(OWASP_RULES_COMMAND)
        .arg("vs", vs)
        .arg("rule", rule)
        .arg("enable", if enable { "yes" } else { "no" })
}

impl LoadMasterClient {
    /// Download a legacy WAF custom rule file
    pub async fn show_waf_rule(&self, filename: &str) -> Result<DataResponse> {
        debug!(filename, "Showing WAF rule");
        self.send(file_command("downloadwafcustomrule", filename)).await
    }

    /// Upload a legacy WAF custom rule file
    pub async fn add_waf_rule(&self, filename: &str, data: &str) -> Result<LoadMasterResponse> {
        debug!(filename, bytes = data.len(), "Adding WAF rule");
        self.send(upload_command("addwafcustomrule", filename, data)).await
    }

    /// Delete a legacy WAF custom rule file
    pub async fn delete_waf_rule(&self, filename: &str) -> Result<LoadMasterResponse> {
        debug!(filename, "Deleting WAF rule");
        self.send(file_command("delwafcustomrule", filename)).await
    }

    /// Download a legacy WAF custom data file
    pub async fn show_waf_data(&self, filename: &str) -> Result<DataResponse> {
        debug!(filename, "Showing WAF data");
        self.send(file_command("downloadwafcustomdata", filename)).await
    }

    /// Upload a legacy WAF custom data file
    pub async fn add_waf_data(&self, filename: &str, data: &str) -> Result<LoadMasterResponse> {
        debug!(filename, bytes = data.len(), "Adding WAF data");
        self.send(upload_command("addwafcustomdata", filename, data)).await
    }

    /// Delete a legacy WAF custom data file
    pub async fn delete_waf_data(&self, filename: &str) -> Result<LoadMasterResponse> {
        debug!(filename, "Deleting WAF data");
        self.send(file_command("delwafcustomdata", filename)).await
    }

    /// Upload an OWASP custom rule set
    pub async fn add_owasp_custom_rule(&self, filename: &str, data: &str) -> Result<LoadMasterResponse> {
        debug!(filename, bytes = data.len(), "Adding OWASP custom rule");
        self.send(upload_command("addowaspcustomrule", filename, data)).await
    }

    /// Delete an OWASP custom rule set
    pub async fn delete_owasp_custom_rule(&self, filename: &str) -> Result<LoadMasterResponse> {
        debug!(filename, "Deleting OWASP custom rule");
        self.send(file_command("delowaspcustomrule", filename)).await
    }

    /// Download an OWASP custom rule set
    pub async fn show_owasp_custom_rule(&self, filename: &str) -> Result<DataResponse> {
        debug!(filename, "Showing OWASP custom rule");
        self.send(file_command("downloadowaspcustomrule", filename)).await
    }

    /// Upload an OWASP custom data file
    ///
    /// `filename` includes the extension (e.g. `blocklist.data`).
    pub async fn add_owasp_custom_data(&self, filename: &str, data: &str) -> Result<LoadMasterResponse> {
        debug!(filename, bytes = data.len(), "Adding OWASP custom data");
        self.send(upload_command("addowaspcustomdata", filename, data)).await
    }

    /// Delete an OWASP custom data file
    ///
    /// `filename` is given without the extension used on upload.
    pub async fn delete_owasp_custom_data(&self, filename: &str) -> Result<LoadMasterResponse> {
        debug!(filename, "Deleting OWASP custom data");
        self.send(file_command("delowaspcustomdata", filename)).await
    }

    /// Download an OWASP custom data file
    pub async fn show_owasp_custom_data(&self, filename: &str) -> Result<DataResponse> {
        debug!(filename, "Showing OWASP custom data");
        self.send(file_command("downloadowaspcustomdata", filename)).await
    }

    /// Enable a custom rule set on a virtual service
    ///
    /// `run_first` evaluates the set before the built-in OWASP rules.
    pub async fn add_virtual_service_owasp_custom_rule(
        &self,
        vs: &str,
        rule: &str,
        run_first: bool,
    ) -> Result<LoadMasterResponse> {
        debug!(vs, rule, run_first, "Adding OWASP custom rule to virtual service");
        let command = owasp_assignment(vs, rule, true).arg("runfirst", if run_first { "1" } else { "0" });
        self.send(command).await
    }

    /// Disable a custom rule set on a virtual service
    pub async fn delete_virtual_service_owasp_custom_rule(&self, vs: &str, rule: &str) -> Result<LoadMasterResponse> {
        debug!(vs, rule, "Deleting OWASP custom rule from virtual service");
        self.send(owasp_assignment(vs, rule, false)).await
    }

    /// Show the state of an OWASP rule on a virtual service
    pub async fn show_virtual_service_owasp_rule(&self, vs: &str, rule: &str) -> Result<OwaspRuleResponse> {
        debug!(vs, rule, "Showing virtual service OWASP rule");
        let command = Command::new(OWASP_RULES_COMMAND).arg("vs", vs).arg("rule", rule);
        self.send(command).await
    }

    /// Enable a built-in OWASP rule on a virtual service
    pub async fn add_virtual_service_owasp_rule(&self, vs: &str, rule: &str) -> Result<LoadMasterResponse> {
        debug!(vs, rule, "Adding OWASP rule to virtual service");
        self.send(owasp_assignment(vs, rule, true)).await
    }

    /// Disable a built-in OWASP rule on a virtual service
    pub async fn delete_virtual_service_owasp_rule(&self, vs: &str, rule: &str) -> Result<LoadMasterResponse> {
        debug!(vs, rule, "Deleting OWASP rule from virtual service");
        self.send(owasp_assignment(vs, rule, false)).await
    }
}
