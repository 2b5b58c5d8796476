//! Content rule operations for MockLoadMasterClient

use super::{MockLoadMasterClient, MockState, StoredRule, merge, unprocessable};
use crate::error::Result;
use crate::models::*;

/// Add a stored rule to the response list of its kind
fn render_into(response: &mut RuleResponse, name: &str, stored: &StoredRule) {
    let rule = &stored.rule;
    let name = name.to_string();
    let replacement = rule.replacement.clone().unwrap_or_default();
    let pattern = rule.pattern.clone().unwrap_or_default();

    match stored.rule_type {
        RuleType::MatchContent => response.match_content_rules.push(MatchContentRule {
            name,
            match_type: rule.match_type.clone().unwrap_or_else(|| "regex".to_string()),
            include_host: rule.include_host,
            case_independent: rule.case_independent.or(rule.no_case),
            negate: rule.negate,
            include_query: rule.include_query,
            header: rule.header.clone(),
            pattern,
            set_on_match: rule.set_on_match,
            only_on_flag: rule.only_on_flag,
            only_on_no_flag: rule.only_on_no_flag,
            must_fail: rule.must_fail,
        }),
        RuleType::AddHeader => response.add_header_rules.push(AddHeaderRule {
            name,
            header: rule.header.clone(),
            replacement,
            only_on_flag: rule.only_on_flag,
            only_on_no_flag: rule.only_on_no_flag,
        }),
        RuleType::DeleteHeader => response.delete_header_rules.push(DeleteHeaderRule {
            name,
            pattern,
            only_on_flag: rule.only_on_flag,
            only_on_no_flag: rule.only_on_no_flag,
        }),
        RuleType::ReplaceHeader => response.replace_header_rules.push(ReplaceHeaderRule {
            name,
            header: rule.header.clone(),
            replacement,
            pattern,
            only_on_flag: rule.only_on_flag,
            only_on_no_flag: rule.only_on_no_flag,
        }),
        RuleType::ModifyUrl => response.modify_url_rules.push(ModifyUrlRule {
            name,
            replacement,
            pattern,
            only_on_flag: rule.only_on_flag,
            only_on_no_flag: rule.only_on_no_flag,
        }),
        RuleType::ReplaceBody => response.replace_body_rules.push(ReplaceBodyRule {
            name,
            replacement,
            pattern,
            only_on_flag: rule.only_on_flag,
            only_on_no_flag: rule.only_on_no_flag,
            case_independent: rule.case_independent,
        }),
    }
}

fn respond_with(state: &MockState, name: &str) -> Result<RuleResponse> {
    let stored = state
        .rules
        .get(name)
        .ok_or_else(|| unprocessable(format!("Rule {} not found", name)))?;
    let mut response = RuleResponse {
        response: LoadMasterResponse::ok(),
        ..Default::default()
    };
    render_into(&mut response, name, stored);
    Ok(response)
}

pub fn list_rules(client: &MockLoadMasterClient) -> Result<RuleResponse> {
    let state = client.state();
    let mut response = RuleResponse {
        response: LoadMasterResponse::ok(),
        ..Default::default()
    };
    for (name, stored) in &state.rules {
        render_into(&mut response, name, stored);
    }
    Ok(response)
}

pub fn show_rule(client: &MockLoadMasterClient, name: &str) -> Result<RuleResponse> {
    respond_with(&client.state(), name)
}

pub fn add_rule(client: &MockLoadMasterClient, rule_type: RuleType, name: &str, rule: &GeneralRule) -> Result<RuleResponse> {
    if name.is_empty() || name.contains(char::is_whitespace) {
        return Err(unprocessable(format!("Invalid rule name {:?}", name)));
    }

    let mut state = client.state();
    if state.rules.contains_key(name) {
        return Err(unprocessable(format!("Rule {} already exists", name)));
    }
    state.rules.insert(
        name.to_string(),
        StoredRule {
            rule_type,
            rule: rule.clone(),
        },
    );
    respond_with(&state, name)
}

pub fn modify_rule(client: &MockLoadMasterClient, name: &str, rule: &GeneralRule) -> Result<RuleResponse> {
    let mut state = client.state();
    let stored = state
        .rules
        .get_mut(name)
        .ok_or_else(|| unprocessable(format!("Rule {} not found", name)))?;
    stored.rule = merge(&stored.rule, rule)?;
    respond_with(&state, name)
}

pub fn delete_rule(client: &MockLoadMasterClient, name: &str) -> Result<LoadMasterResponse> {
    let mut state = client.state();
    if !state.rules.contains_key(name) {
        return Err(unprocessable(format!("Rule {} not found", name)));
    }
    if state.real_servers.values().any(|rs| rs.has_rule(name)) {
        return Err(unprocessable(format!("Rule {} is in use", name)));
    }
    state.rules.remove(name);
    Ok(LoadMasterResponse::ok())
}
