//! Real server operations for MockLoadMasterClient

use super::{MockLoadMasterClient, MockState, merge, unprocessable};
use crate::error::{LoadMasterError, Result};
use crate::models::*;

/// Key of the real server `rs` (address or `!<index>`) on service `vs_index`
fn real_server_key(state: &MockState, vs_index: i32, rs: &str) -> Result<i32> {
    let found = match rs.strip_prefix('!') {
        Some(index) => index
            .parse::<i32>()
            .ok()
            .filter(|i| state.real_servers.get(i).is_some_and(|r| r.vs_index == vs_index)),
        None => state
            .real_servers
            .values()
            .find(|r| r.vs_index == vs_index && r.parameters.address.as_deref() == Some(rs))
            .map(|r| r.rs_index),
    };
    found.ok_or_else(|| unprocessable(format!("Unknown RS {}", rs)))
}

fn respond(state: &MockState, key: i32) -> RealServerResponse {
    RealServerResponse {
        response: LoadMasterResponse::ok(),
        real_servers: state.real_servers.get(&key).cloned().into_iter().collect(),
    }
}

pub fn add_real_server(
    client: &MockLoadMasterClient,
    vs: &str,
    address: &str,
    port: &str,
    params: &RealServerParameters,
) -> Result<RealServerResponse> {
    let port: i32 = port
        .parse::<u16>()
        .ok()
        .filter(|p| *p != 0)
        .map(i32::from)
        .ok_or_else(|| unprocessable(format!("Invalid port {}", port)))?;
    if address.is_empty() {
        return Err(unprocessable("Invalid real server address"));
    }

    let mut state = client.state();
    let vs_index = state.service_index(vs)?;
    let duplicate = state.real_servers.values().any(|r| {
        r.vs_index == vs_index && r.parameters.address.as_deref() == Some(address) && r.parameters.port == Some(port)
    });
    if duplicate {
        return Err(unprocessable("Duplicate real server"));
    }

    let mut parameters = params.clone();
    parameters.address = Some(address.to_string());
    parameters.port = Some(port);
    parameters.forward.get_or_insert_with(|| "nat".to_string());
    parameters.weight.get_or_insert(1000);
    parameters.enable.get_or_insert(true);
    parameters.critical.get_or_insert(false);

    let rs_index = state.next_index();
    state.real_servers.insert(
        rs_index,
        RealServer {
            vs_index,
            rs_index,
            parameters,
            match_rules: Vec::new(),
        },
    );

    Ok(respond(&state, rs_index))
}

pub fn show_real_server(client: &MockLoadMasterClient, vs: &str, rs: &str) -> Result<RealServerResponse> {
    let state = client.state();
    let vs_index = state.service_index(vs)?;
    let key = real_server_key(&state, vs_index, rs)?;
    Ok(respond(&state, key))
}

pub fn modify_real_server(
    client: &MockLoadMasterClient,
    vs: &str,
    rs: &str,
    params: &RealServerParameters,
) -> Result<RealServerResponse> {
    let mut state = client.state();
    let vs_index = state.service_index(vs)?;
    let key = real_server_key(&state, vs_index, rs)?;

    if let Some(server) = state.real_servers.get_mut(&key) {
        server.parameters = merge(&server.parameters, params)?;
    }

    Ok(respond(&state, key))
}

pub fn delete_real_server(client: &MockLoadMasterClient, vs: &str, rs: &str) -> Result<LoadMasterResponse> {
    let mut state = client.state();
    let vs_index = state.service_index(vs)?;
    let key = real_server_key(&state, vs_index, rs)?;
    state.real_servers.remove(&key);
    Ok(LoadMasterResponse::ok())
}

pub fn add_real_server_rule(client: &MockLoadMasterClient, vs: &str, rs: &str, rule: &str) -> Result<LoadMasterResponse> {
    let mut state = client.state();
    let vs_index = state.service_index(vs)?;
    let key = real_server_key(&state, vs_index, rs)?;
    if !state.rules.contains_key(rule) {
        return Err(unprocessable(format!("Rule {} not found", rule)));
    }

    if let Some(server) = state.real_servers.get_mut(&key) {
        if server.has_rule(rule) {
            return Err(unprocessable(format!("Rule {} already assigned", rule)));
        }
        server.match_rules.push(rule.to_string());
        server.parameters.nrules = i32::try_from(server.match_rules.len()).ok();
    }

    Ok(LoadMasterResponse::ok())
}

pub fn delete_real_server_rule(client: &MockLoadMasterClient, vs: &str, rs: &str, rule: &str) -> Result<LoadMasterResponse> {
    let mut state = client.state();
    let vs_index = state.service_index(vs)?;
    let key = real_server_key(&state, vs_index, rs)?;

    if let Some(server) = state.real_servers.get_mut(&key) {
        if !server.has_rule(rule) {
            return Err(unprocessable(format!("Rule {} not assigned", rule)));
        }
        server.match_rules.retain(|r| r != rule);
        server.parameters.nrules = i32::try_from(server.match_rules.len()).ok();
    }

    Ok(LoadMasterResponse::ok())
}

pub fn show_real_server_rule(client: &MockLoadMasterClient, vs: &str, rs: &str, rule: &str) -> Result<RealServer> {
    show_real_server(client, vs, rs)?
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
