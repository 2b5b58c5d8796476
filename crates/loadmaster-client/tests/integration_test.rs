//! Integration tests for LoadMaster client
//!
//! These tests require a reachable LoadMaster appliance.
//! Set LOADMASTER_IP and LOADMASTER_API_KEY environment variables to run.
//! Each test takes a backup first and restores it when done.

use anyhow::Context;
use loadmaster_client::{LoadMasterClient, VirtualServiceParameters};

/// Restore type covering the full configuration
const FULL_RESTORE: u32 = 14;

async fn connect() -> anyhow::Result<(LoadMasterClient, String)> {
    let ip = std::env::var("LOADMASTER_IP").context("LOADMASTER_IP environment variable must be set")?;
    let api_key =
        std::env::var("LOADMASTER_API_KEY").context("LOADMASTER_API_KEY environment variable must be set")?;

    let client = LoadMasterClient::with_api_key(&format!("https://{}", ip), &api_key)
        .context("Failed to create client")?;
    let backup = client.backup().await.context("Failed to take backup")?;
    Ok((client, backup.data))
}

async fn client_with_backup() -> (LoadMasterClient, String) {
    connect().await.expect("Failed to connect to LoadMaster")
}

async fn restore(client: &LoadMasterClient, backup: &str) {
    client
        .restore(backup, FULL_RESTORE)
        .await
        .expect("Failed to restore backup");
}

#[tokio::test]
#[ignore] // Requires running LoadMaster appliance
async fn test_client_creation() {
    let (client, backup) = client_with_backup().await;

    let services = client.list_virtual_services().await;
    assert!(services.is_ok(), "Failed to list virtual services");

    restore(&client, &backup).await;
}

#[tokio::test]
#[ignore]
async fn test_virtual_service_lifecycle() {
    let (client, backup) = client_with_backup().await;

    let created = client
        .add_virtual_service("10.0.0.4", "30001", "tcp", &VirtualServiceParameters::default())
        .await
        .expect("Failed to add virtual service");
    assert_eq!(created.response.status, "ok");
    assert_eq!(created.virtual_service.parameters.basic.vs_type.as_deref(), Some("gen"));
    let vs = created.virtual_service.index.to_string();

    let modified = client
        .modify_virtual_service(&vs, &VirtualServiceParameters::with_nickname("integration"))
        .await
        .expect("Failed to modify virtual service");
    assert_eq!(
        modified.virtual_service.parameters.basic.nick_name.as_deref(),
        Some("integration")
    );

    client.delete_virtual_service(&vs).await.expect("Failed to delete virtual service");
    restore(&client, &backup).await;
}

#[tokio::test]
#[ignore]
async fn test_sub_virtual_service() {
    let (client, backup) = client_with_backup().await;

    let vs = client
        .add_virtual_service("10.0.0.4", "30000", "tcp", &VirtualServiceParameters::default())
        .await
        .expect("Failed to add virtual service");
    let parent = vs.virtual_service.index.to_string();

    let created = client
        .add_sub_virtual_service(&parent, &VirtualServiceParameters::with_type("http"))
        .await
        .expect("Failed to add sub virtual service");
    assert_eq!(created.sub_virtual_service.virtual_service.address, "10.0.0.4");
    assert_eq!(created.sub_virtual_service.virtual_service.port, "30000");

    let sub_id = created
        .sub_virtual_service
        .virtual_service
        .parameters
        .real_servers
        .sub_vs
        .and_then(|subs| subs.last().and_then(|sub| sub.vs_index))
        .expect("No sub virtual service in response")
        .to_string();
    assert_ne!(sub_id, parent);

    let shown = client
        .show_sub_virtual_service(&sub_id)
        .await
        .expect("Failed to show sub virtual service");
    assert_eq!(
        shown.sub_virtual_service.virtual_service.parameters.basic.vs_type.as_deref(),
        Some("http")
    );

    let modified = client
        .modify_sub_virtual_service(&sub_id, &VirtualServiceParameters::with_nickname("subvs2"))
        .await
        .expect("Failed to modify sub virtual service");
    assert_eq!(modified.sub_virtual_service.virtual_service.protocol, "tcp");

    client
        .delete_sub_virtual_service(&sub_id)
        .await
        .expect("Failed to delete sub virtual service");
    restore(&client, &backup).await;
}

#[tokio::test]
#[ignore]
async fn test_list_api_keys() {
    let (client, backup) = client_with_backup().await;

    let keys = client.list_api_keys().await.expect("Failed to list API keys");
    println!("Found {} API keys", keys.api_keys.len());
    assert!(!keys.api_keys.is_empty());

    restore(&client, &backup).await;
}
