//! WAF and OWASP operations for MockLoadMasterClient

use super::{MockLoadMasterClient, MockState, unprocessable};
use crate::common::decode_payload;
use crate::error::Result;
use crate::models::*;
use std::collections::BTreeMap;

/// Which uploaded file set an operation addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FileStore {
    WafRules,
    WafData,
    OwaspRules,
    OwaspData,
}

fn files(state: &mut MockState, store: FileStore) -> &mut BTreeMap<String, String> {
    match store {
        FileStore::WafRules => &mut state.waf_rules,
        FileStore::WafData => &mut state.waf_data,
        FileStore::OwaspRules => &mut state.owasp_rules,
        FileStore::OwaspData => &mut state.owasp_data,
    }
}

fn stem(filename: &str) -> &str {
    filename.rsplit_once('.').map_or(filename, |(stem, _)| stem)
}

/// Stored name of `filename`, accepting the name without its extension
fn find_file(files: &BTreeMap<String, String>, filename: &str) -> Option<String> {
    if files.contains_key(filename) {
        return Some(filename.to_string());
    }
    files.keys().find(|name| stem(name) == filename).cloned()
}

pub(crate) fn show_file(client: &MockLoadMasterClient, store: FileStore, filename: &str) -> Result<DataResponse> {
    let mut state = client.state();
    let files = files(&mut state, store);
    let data = find_file(files, filename)
        .and_then(|name| files.get(&name).cloned())
        .ok_or_else(|| unprocessable(format!("File {} not found", filename)))?;

    Ok(DataResponse {
        response: LoadMasterResponse::ok(),
        data,
    })
}

pub(crate) fn add_file(client: &MockLoadMasterClient, store: FileStore, filename: &str, data: &str) -> Result<LoadMasterResponse> {
    if filename.is_empty() {
        return Err(unprocessable("Filename required"));
    }
    if decode_payload(data).is_err() {
        return Err(unprocessable("Invalid file data"));
    }
    files(&mut client.state(), store).insert(filename.to_string(), data.to_string());
    Ok(LoadMasterResponse::ok())
}

pub(crate) fn delete_file(client: &MockLoadMasterClient, store: FileStore, filename: &str) -> Result<LoadMasterResponse> {
    let mut state = client.state();
    let files = files(&mut state, store);
    let name = find_file(files, filename).ok_or_else(|| unprocessable(format!("File {} not found", filename)))?;
    files.remove(&name);
    Ok(LoadMasterResponse::ok())
}

fn yes_no(value: bool) -> String {
    String::from(if value { "Yes" } else { "No" })
}

pub(crate) fn add_custom_rule_assignment(
    client: &MockLoadMasterClient,
    vs: &str,
    rule: &str,
    run_first: bool,
) -> Result<LoadMasterResponse> {
    let mut state = client.state();
    let index = state.service_index(vs)?;
    if find_file(&state.owasp_rules, rule).is_none() {
        return Err(unprocessable(format!("Unknown rule set {}", rule)));
    }

    state.owasp_assignments.entry(index).or_default().insert(
        rule.to_string(),
        OwaspRule {
            rule_type: "custom".to_string(),
            name: rule.to_string(),
            enabled: yes_no(true),
            runfirst: yes_no(run_first),
            ..Default::default()
        },
    );
    Ok(LoadMasterResponse::ok())
}

pub(crate) fn delete_custom_rule_assignment(client: &MockLoadMasterClient, vs: &str, rule: &str) -> Result<LoadMasterResponse> {
    let mut state = client.state();
    let index = state.service_index(vs)?;
    let removed = state
        .owasp_assignments
        .get_mut(&index)
        .and_then(|rules| rules.remove(rule));
    if removed.is_none() {
        return Err(unprocessable(format!("Rule set {} not assigned", rule)));
    }
    Ok(LoadMasterResponse::ok())
}

/// Built-in rules are known to the appliance by their numeric id and are
/// reported disabled until enabled on the service
pub(crate) fn show_rule_assignment(client: &MockLoadMasterClient, vs: &str, rule: &str) -> Result<OwaspRuleResponse> {
    let state = client.state();
    let index = state.service_index(vs)?;
    let assigned = state
        .owasp_assignments
        .get(&index)
        .and_then(|rules| rules.get(rule))
        .cloned();

    let rule = match assigned {
        Some(assigned) => assigned,
        None if rule.parse::<u32>().is_ok() => OwaspRule {
            id: rule.to_string(),
            rule_type: "owasp".to_string(),
            enabled: yes_no(false),
            ..Default::default()
        },
        None => return Err(unprocessable(format!("Unknown rule {}", rule))),
    };

    Ok(OwaspRuleResponse {
        response: LoadMasterResponse::ok(),
        rule,
    })
}

pub(crate) fn set_rule_assignment(client: &MockLoadMasterClient, vs: &str, rule: &str, enable: bool) -> Result<LoadMasterResponse> {
    if rule.parse::<u32>().is_err() {
        return Err(unprocessable(format!("Unknown rule {}", rule)));
    }

    let mut state = client.state();
    let index = state.service_index(vs)?;
    state.owasp_assignments.entry(index).or_default().insert(
        rule.to_string(),
        OwaspRule {
            id: rule.to_string(),
            rule_type: "owasp".to_string(),
            enabled: yes_no(enable),
            ..Default::default()
        },
    );
    Ok(LoadMasterResponse::ok())
}
