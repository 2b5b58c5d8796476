//! Access control list operations for MockLoadMasterClient
//!
//! `None` addresses the global lists, `Some(vs)` a virtual service's lists.

use super::{AclEntries, MockLoadMasterClient, MockState, unprocessable};
use crate::error::Result;
use crate::models::*;

fn entries<'a>(state: &'a mut MockState, vs: Option<&str>) -> Result<&'a mut AclEntries> {
    match vs {
        None => Ok(&mut state.global_acl),
        Some(vs) => {
            let index = state.service_index(vs)?;
            Ok(state.virtual_service_acl.entry(index).or_default())
        }
    }
}

pub fn list_acl(client: &MockLoadMasterClient, vs: Option<&str>, list: AclList) -> Result<AclResponse> {
    let mut state = client.state();
    let addresses = entries(&mut state, vs)?
        .list(list)
        .iter()
        .map(|address| AclAddress {
            address: address.clone(),
            comment: String::new(),
        })
        .collect();

    Ok(AclResponse {
        response: LoadMasterResponse::ok(),
        list: list.to_string(),
        addresses,
    })
}

pub fn add_acl(client: &MockLoadMasterClient, vs: Option<&str>, list: AclList, address: &str) -> Result<LoadMasterResponse> {
    if address.trim().is_empty() {
        return Err(unprocessable("Invalid address"));
    }

    let mut state = client.state();
    if !entries(&mut state, vs)?.list_mut(list).insert(address.to_string()) {
        return Err(unprocessable(format!("{} is already on the {} list", address, list)));
    }
    Ok(LoadMasterResponse::ok())
}

pub fn delete_acl(client: &MockLoadMasterClient, vs: Option<&str>, list: AclList, address: &str) -> Result<LoadMasterResponse> {
    let mut state = client.state();
    if !entries(&mut state, vs)?.list_mut(list).remove(address) {
        return Err(unprocessable(format!("{} is not on the {} list", address, list)));
    }
    Ok(LoadMasterResponse::ok())
}
