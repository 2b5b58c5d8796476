//! Certificate and ACME operations for MockLoadMasterClient

use super::{MockLoadMasterClient, MockState, unprocessable};
use crate::common::decode_payload;
use crate::error::Result;
use crate::models::*;
use std::collections::BTreeMap;

fn store(state: &mut MockState, intermediate: bool) -> &mut BTreeMap<String, String> {
    if intermediate {
        &mut state.intermediate_certificates
    } else {
        &mut state.certificates
    }
}

pub fn list_certificates(client: &MockLoadMasterClient, intermediate: bool) -> Result<ListCertificateResponse> {
    let mut state = client.state();
    let certificates = store(&mut state, intermediate)
        .keys()
        .map(|name| CertInfo {
            name: name.clone(),
            ..Default::default()
        })
        .collect();

    Ok(ListCertificateResponse {
        response: LoadMasterResponse::ok(),
        certificates,
    })
}

pub fn show_certificate(client: &MockLoadMasterClient, name: &str, intermediate: bool) -> Result<ShowCertificateResponse> {
    let mut state = client.state();
    let certificate = store(&mut state, intermediate)
        .get(name)
        .cloned()
        .ok_or_else(|| unprocessable(format!("Certificate {} not found", name)))?;

    Ok(ShowCertificateResponse {
        response: LoadMasterResponse::ok(),
        certificate,
    })
}

pub fn add_certificate(client: &MockLoadMasterClient, name: &str, data: &str, intermediate: bool) -> Result<LoadMasterResponse> {
    if name.is_empty() {
        return Err(unprocessable("Certificate name required"));
    }
    if data.is_empty() || decode_payload(data).is_err() {
        return Err(unprocessable("Invalid certificate data"));
    }

    let mut state = client.state();
    let certificates = store(&mut state, intermediate);
    if certificates.contains_key(name) {
        return Err(unprocessable(format!("Certificate {} already exists", name)));
    }
    certificates.insert(name.to_string(), data.to_string());
    Ok(LoadMasterResponse::ok())
}

pub fn delete_certificate(client: &MockLoadMasterClient, name: &str, intermediate: bool) -> Result<LoadMasterResponse> {
    let mut state = client.state();
    if store(&mut state, intermediate).remove(name).is_none() {
        return Err(unprocessable(format!("Certificate {} not found", name)));
    }
    if !intermediate {
        state.acme.certificates.remove(name);
    }
    Ok(LoadMasterResponse::ok())
}

pub fn register_lets_encrypt_account(client: &MockLoadMasterClient, email: Option<&str>) -> Result<LoadMasterResponse> {
    let mut state = client.state();
    if state.acme.lets_encrypt_registered {
        return Err(unprocessable("Let's Encrypt account already registered"));
    }
    state.acme.lets_encrypt_registered = true;
    state.acme.lets_encrypt_email = email.map(str::to_string);
    Ok(LoadMasterResponse::ok())
}

pub fn fetch_lets_encrypt_account(client: &MockLoadMasterClient, password: &str, data: &str) -> Result<LoadMasterResponse> {
    if password.is_empty() {
        return Err(unprocessable("Password required"));
    }
    if decode_payload(data).is_err() {
        return Err(unprocessable("Invalid account data"));
    }
    client.state().acme.lets_encrypt_registered = true;
    Ok(LoadMasterResponse::ok())
}

pub fn set_digicert_key_id(client: &MockLoadMasterClient, kid: &str) -> Result<LoadMasterResponse> {
    if kid.is_empty() {
        return Err(unprocessable("Key id required"));
    }
    client.state().acme.digicert_kid = Some(kid.to_string());
    Ok(LoadMasterResponse::ok())
}

pub fn set_digicert_hmac(client: &MockLoadMasterClient, hmac: &str) -> Result<LoadMasterResponse> {
    if hmac.is_empty() {
        return Err(unprocessable("HMAC key required"));
    }
    client.state().acme.digicert_hmac = Some(hmac.to_string());
    Ok(LoadMasterResponse::ok())
}

pub fn request_acme_certificate(
    client: &MockLoadMasterClient,
    name: &str,
    common_name: &str,
    vs: &str,
    acme_type: AcmeType,
) -> Result<LoadMasterResponse> {
    if name.is_empty() || common_name.is_empty() {
        return Err(unprocessable("Certificate name and common name required"));
    }

    let mut state = client.state();
    let account_ready = match acme_type {
        AcmeType::LetsEncrypt => state.acme.lets_encrypt_registered,
        AcmeType::DigiCert => state.acme.digicert_kid.is_some() && state.acme.digicert_hmac.is_some(),
    };
    if !account_ready {
        return Err(unprocessable("ACME account not registered"));
    }
    state.service_index(vs)?;
    if state.certificates.contains_key(name) {
        return Err(unprocessable(format!("Certificate {} already exists", name)));
    }

    state.acme.certificates.insert(name.to_string(), acme_type);
    state.certificates.insert(name.to_string(), String::new());
    Ok(LoadMasterResponse::ok())
}

pub fn delete_acme_certificate(client: &MockLoadMasterClient, name: &str, acme_type: AcmeType) -> Result<LoadMasterResponse> {
    let mut state = client.state();
    if state.acme.certificates.get(name) != Some(&acme_type) {
        return Err(unprocessable(format!("ACME certificate {} not found", name)));
    }
    state.acme.certificates.remove(name);
    state.certificates.remove(name);
    Ok(LoadMasterResponse::ok())
}
