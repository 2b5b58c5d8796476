//! API key, backup and restore operations for MockLoadMasterClient
//!
//! A backup is the whole mock state as base64 encoded JSON.

use super::{MockLoadMasterClient, MockState, unprocessable};
use crate::common::{decode_payload, encode_payload};
use crate::error::Result;
use crate::models::*;

fn keys_response(state: &MockState) -> ApiKeysResponse {
    ApiKeysResponse {
        response: LoadMasterResponse::ok(),
        api_keys: state.api_keys.clone(),
    }
}

pub fn list_api_keys(client: &MockLoadMasterClient) -> Result<ApiKeysResponse> {
    Ok(keys_response(&client.state()))
}

pub fn generate_api_key(client: &MockLoadMasterClient) -> Result<ApiKeysResponse> {
    let mut state = client.state();
    let serial = state.next_index();
    state.api_keys.push(format!("mock{:028x}", serial));
    Ok(keys_response(&state))
}

pub fn delete_api_key(client: &MockLoadMasterClient, key: &str) -> Result<ApiKeysResponse> {
    let mut state = client.state();
    let before = state.api_keys.len();
    state.api_keys.retain(|k| k != key);
    if state.api_keys.len() == before {
        return Err(unprocessable("Unknown API key"));
    }
    Ok(keys_response(&state))
}

pub fn backup(client: &MockLoadMasterClient) -> Result<DataResponse> {
    let archive = serde_json::to_vec(&*client.state())?;
    Ok(DataResponse {
        response: LoadMasterResponse::ok(),
        data: encode_payload(&archive),
    })
}

pub fn restore(client: &MockLoadMasterClient, data: &str, restore_type: u32) -> Result<LoadMasterResponse> {
    if restore_type == 0 {
        return Err(unprocessable("Invalid restore type"));
    }
    let archive = decode_payload(data).map_err(|_| unprocessable("Invalid backup file"))?;
    let restored: MockState =
        serde_json::from_slice(&archive).map_err(|_| unprocessable("Invalid backup file"))?;

    *client.state() = restored;
    Ok(LoadMasterResponse::ok())
}
