//! Virtual service operations for MockLoadMasterClient
//!
//! Parents and sub virtual services share one index sequence, like on the
//! appliance.

use super::{MockLoadMasterClient, MockState, merge, unprocessable};
use crate::error::Result;
use crate::models::*;

const PROTOCOLS: &[&str] = &["tcp", "udp"];

fn with_defaults(params: &VirtualServiceParameters) -> VirtualServiceParameters {
    let mut params = params.clone();
    params.basic.enable.get_or_insert(true);
    params.basic.vs_type.get_or_insert_with(|| "gen".to_string());
    // Sub virtual services are tracked separately and attached on render
    params.real_servers.sub_vs = None;
    params
}

/// A stored virtual service with its sub virtual services and real server count
pub(crate) fn render(state: &MockState, index: i32) -> Option<VirtualService> {
    if let Some(sub) = state.sub_virtual_services.get(&index) {
        return Some(with_real_server_count(state, sub.virtual_service.clone()));
    }

    let mut vs = state.virtual_services.get(&index)?.clone();
    let subs: Vec<SubVirtualService> = state
        .sub_virtual_services
        .values()
        .filter(|sub| sub.virtual_service.master_vs_id == Some(index))
        .cloned()
        .collect();
    if !subs.is_empty() {
        vs.parameters.real_servers.sub_vs = Some(subs);
    }
    Some(with_real_server_count(state, vs))
}

fn with_real_server_count(state: &MockState, mut vs: VirtualService) -> VirtualService {
    let count = state
        .real_servers
        .values()
        .filter(|rs| rs.vs_index == vs.index)
        .count();
    vs.parameters.real_servers.number_of_rss = i32::try_from(count).ok();
    vs
}

fn render_sub(state: &MockState, index: i32) -> Option<SubVirtualService> {
    let sub = state.sub_virtual_services.get(&index)?;
    Some(SubVirtualService {
        virtual_service: render(state, index)?,
        ..sub.clone()
    })
}

fn parent_index(state: &MockState, vs: &str) -> Result<i32> {
    let index = state.service_index(vs)?;
    if state.virtual_services.contains_key(&index) {
        Ok(index)
    } else {
        Err(unprocessable(format!("VS {} is a SubVS", vs)))
    }
}

fn sub_index(state: &MockState, id: &str) -> Result<i32> {
    let index = state.service_index(id)?;
    if state.sub_virtual_services.contains_key(&index) {
        Ok(index)
    } else {
        Err(unprocessable(format!("VS {} is not a SubVS", id)))
    }
}

/// Remove a service and everything attached to it
fn remove_service(state: &mut MockState, index: i32) {
    state.virtual_services.remove(&index);
    state.sub_virtual_services.remove(&index);
    state.real_servers.retain(|_, rs| rs.vs_index != index);
    state.virtual_service_acl.remove(&index);
    state.owasp_assignments.remove(&index);
}

pub fn list_virtual_services(client: &MockLoadMasterClient) -> Result<ListVirtualServiceResponse> {
    let state = client.state();
    let virtual_services = state
        .virtual_services
        .keys()
        .chain(state.sub_virtual_services.keys())
        .filter_map(|index| render(&state, *index))
        .collect();

    Ok(ListVirtualServiceResponse {
        response: LoadMasterResponse::ok(),
        virtual_services,
    })
}

pub fn show_virtual_service(client: &MockLoadMasterClient, vs: &str) -> Result<VirtualServiceResponse> {
    let state = client.state();
    let index = state.service_index(vs)?;
    let virtual_service = render(&state, index).ok_or_else(|| unprocessable(format!("Unknown VS {}", vs)))?;

    Ok(VirtualServiceResponse {
        response: LoadMasterResponse::ok(),
        virtual_service,
    })
}

pub fn add_virtual_service(
    client: &MockLoadMasterClient,
    address: &str,
    port: &str,
    protocol: &str,
    params: &VirtualServiceParameters,
) -> Result<VirtualServiceResponse> {
    if !PROTOCOLS.contains(&protocol) {
        return Err(unprocessable(format!("Invalid protocol {}", protocol)));
    }
    if port.parse::<u16>().map_or(true, |p| p == 0) {
        return Err(unprocessable(format!("Invalid port {}", port)));
    }

    let mut state = client.state();
    let duplicate = state
        .virtual_services
        .values()
        .any(|vs| vs.address == address && vs.port == port && vs.protocol == protocol);
    if duplicate {
        return Err(unprocessable("Virtual service already exists"));
    }

    let index = state.next_index();
    let virtual_service = VirtualService {
        index,
        protocol: protocol.to_string(),
        address: address.to_string(),
        port: port.to_string(),
        parameters: with_defaults(params),
        ..Default::default()
    };
    state.virtual_services.insert(index, virtual_service);

    Ok(VirtualServiceResponse {
        response: LoadMasterResponse::ok(),
        virtual_service: render(&state, index).unwrap_or_default(),
    })
}

pub fn modify_virtual_service(
    client: &MockLoadMasterClient,
    vs: &str,
    params: &VirtualServiceParameters,
) -> Result<VirtualServiceResponse> {
    let mut state = client.state();
    let index = state.service_index(vs)?;
    let mut update = params.clone();
    update.real_servers.sub_vs = None;

    if let Some(stored) = state.virtual_services.get_mut(&index) {
        stored.parameters = merge(&stored.parameters, &update)?;
    } else if let Some(sub) = state.sub_virtual_services.get_mut(&index) {
        sub.virtual_service.parameters = merge(&sub.virtual_service.parameters, &update)?;
    }

    Ok(VirtualServiceResponse {
        response: LoadMasterResponse::ok(),
        virtual_service: render(&state, index).unwrap_or_default(),
    })
}

pub fn delete_virtual_service(client: &MockLoadMasterClient, vs: &str) -> Result<LoadMasterResponse> {
    let mut state = client.state();
    let index = state.service_index(vs)?;

    let subs: Vec<i32> = state
        .sub_virtual_services
        .iter()
        .filter(|(_, sub)| sub.virtual_service.master_vs_id == Some(index))
        .map(|(i, _)| *i)
        .collect();
    for sub in subs {
        remove_service(&mut state, sub);
    }
    remove_service(&mut state, index);

    Ok(LoadMasterResponse::ok())
}

pub fn show_sub_virtual_service(client: &MockLoadMasterClient, id: &str) -> Result<SubVirtualServiceResponse> {
    let state = client.state();
    let index = sub_index(&state, id)?;
    let sub_virtual_service = render_sub(&state, index).unwrap_or_default();

    Ok(SubVirtualServiceResponse {
        response: LoadMasterResponse::ok(),
        sub_virtual_service,
    })
}

/// Creates the sub virtual service and answers with the parent, whose last
/// `SubVS` entry is the new service
pub fn add_sub_virtual_service(
    client: &MockLoadMasterClient,
    parent: &str,
    params: &VirtualServiceParameters,
) -> Result<SubVirtualServiceResponse> {
    let mut state = client.state();
    let parent_index = parent_index(&state, parent)?;
    let Some(parent_vs) = state.virtual_services.get(&parent_index).cloned() else {
        return Err(unprocessable(format!("Unknown VS {}", parent)));
    };

    let index = state.next_index();
    let parameters = with_defaults(params);
    let sub = SubVirtualService {
        virtual_service: VirtualService {
            index,
            protocol: parent_vs.protocol.clone(),
            address: parent_vs.address.clone(),
            port: parent_vs.port.clone(),
            master_vs_id: Some(parent_index),
            parameters,
            ..Default::default()
        },
        name: params.basic.nick_name.clone().or_else(|| Some("-".to_string())),
        forward: Some("nat".to_string()),
        vs_index: Some(index),
    };
    state.sub_virtual_services.insert(index, sub);

    Ok(SubVirtualServiceResponse {
        response: LoadMasterResponse::ok(),
        sub_virtual_service: SubVirtualService {
            virtual_service: render(&state, parent_index).unwrap_or_default(),
            ..Default::default()
        },
    })
}

pub fn modify_sub_virtual_service(
    client: &MockLoadMasterClient,
    id: &str,
    params: &VirtualServiceParameters,
) -> Result<SubVirtualServiceResponse> {
    let mut state = client.state();
    let index = sub_index(&state, id)?;
    let mut update = params.clone();
    update.real_servers.sub_vs = None;

    if let Some(sub) = state.sub_virtual_services.get_mut(&index) {
        sub.virtual_service.parameters = merge(&sub.virtual_service.parameters, &update)?;
        if let Some(nickname) = &params.basic.nick_name {
            sub.name = Some(nickname.clone());
        }
    }

    Ok(SubVirtualServiceResponse {
        response: LoadMasterResponse::ok(),
        sub_virtual_service: render_sub(&state, index).unwrap_or_default(),
    })
}

pub fn delete_sub_virtual_service(client: &MockLoadMasterClient, id: &str) -> Result<LoadMasterResponse> {
    let mut state = client.state();
    let index = sub_index(&state, id)?;
    remove_service(&mut state, index);
    Ok(LoadMasterResponse::ok())
}
