//! Client tests against a fake appliance
//!
//! Check the command bodies each operation posts and how responses and
//! failures are mapped.

mod common;

use axum::http::StatusCode;
use common::{FakeAppliance, ok_envelope, ok_with};
use loadmaster_client::*;
use serde_json::json;
use std::io::Write;
use std::sync::{Arc, Mutex};

#[tokio::test]
async fn test_list_virtual_services_posts_command_with_api_key() {
    let fake = FakeAppliance::start(ok_with(json!({
        "VS": [
            { "Index": 1, "Protocol": "tcp", "VSAddress": "10.0.0.4", "VSPort": "80", "VStype": "http", "Enable": true },
            { "Index": 2, "Protocol": "udp", "VSAddress": "10.0.0.4", "VSPort": "53", "NumberOfRSs": 2 }
        ]
    })))
    .await;

    let response = fake.client().list_virtual_services().await.unwrap();

    assert_eq!(response.virtual_services.len(), 2);
    assert_eq!(response.virtual_services[0].parameters.basic.vs_type.as_deref(), Some("http"));
    assert_eq!(response.virtual_services[1].parameters.real_servers.number_of_rss, Some(2));
    assert_eq!(fake.last_request(), json!({ "cmd": "listvs", "apikey": "test-key" }));
}

#[tokio::test]
async fn test_add_virtual_service_sends_parameters() {
    let fake = FakeAppliance::start(ok_with(json!({
        "Index": 7, "Protocol": "tcp", "VSAddress": "10.0.0.4", "VSPort": "443", "NickName": "web"
    })))
    .await;

    let mut params = VirtualServiceParameters::with_nickname("web");
    params.ssl.ssl_acceleration = Some(true);
    let response = fake
        .client()
        .add_virtual_service("10.0.0.4", "443", "tcp", &params)
        .await
        .unwrap();

    assert_eq!(response.virtual_service.index, 7);
    let body = fake.last_request();
    assert_eq!(body["cmd"], "addvs");
    assert_eq!(body["vs"], "10.0.0.4");
    assert_eq!(body["port"], "443");
    assert_eq!(body["prot"], "tcp");
    assert_eq!(body["NickName"], "web");
    assert_eq!(body["SSLAcceleration"], true);
    // unset parameters are not sent
    assert!(body.get("Enable").is_none());
}

#[tokio::test]
async fn test_add_sub_virtual_service_uses_createsubvs() {
    let fake = FakeAppliance::start(ok_with(json!({
        "Index": 1, "VSAddress": "10.0.0.4", "VSPort": "80", "Protocol": "tcp",
        "SubVS": [ { "VSIndex": 5, "Name": "-", "Forward": "nat" } ]
    })))
    .await;

    let response = fake
        .client()
        .add_sub_virtual_service("1", &VirtualServiceParameters::default())
        .await
        .unwrap();

    let subs = response
        .sub_virtual_service
        .virtual_service
        .parameters
        .real_servers
        .sub_vs
        .unwrap();
    assert_eq!(subs[0].vs_index, Some(5));
    assert_eq!(
        fake.last_request(),
        json!({ "cmd": "modvs", "vs": "1", "createsubvs": "", "apikey": "test-key" })
    );
}

#[tokio::test]
async fn test_real_server_commands() {
    let fake = FakeAppliance::start(ok_with(json!({
        "Rs": [ { "VSIndex": 1, "RSIndex": 3, "Addr": "10.0.0.10", "Port": 8080, "Weight": 1000 } ]
    })))
    .await;
    let client = fake.client();

    let params = RealServerParameters {
        weight: Some(1000),
        ..Default::default()
    };
    let response = client.add_real_server("1", "10.0.0.10", "8080", &params).await.unwrap();
    assert_eq!(response.real_servers[0].rs_index, 3);
    assert_eq!(response.real_servers[0].parameters.port, Some(8080));

    client.add_real_server_rule("1", "!3", "api").await.unwrap();

    let requests = fake.requests();
    assert_eq!(requests[0]["cmd"], "addrs");
    assert_eq!(requests[0]["rs"], "10.0.0.10");
    assert_eq!(requests[0]["rsport"], "8080");
    assert_eq!(requests[0]["Weight"], 1000);
    assert_eq!(
        requests[1],
        json!({ "cmd": "addrsrule", "vs": "1", "rs": "!3", "name": "api", "apikey": "test-key" })
    );
}

#[tokio::test]
async fn test_show_real_server_rule_filters_match_rules() {
    let fake = FakeAppliance::start(ok_with(json!({
        "Rs": [ { "VSIndex": 1, "RSIndex": 3, "Addr": "10.0.0.10", "MatchRules": ["api"] } ]
    })))
    .await;
    let client = fake.client();

    let server = client.show_real_server_rule("1", "!3", "api").await.unwrap();
    assert_eq!(server.rs_index, 3);

    let err = client.show_real_server_rule("1", "!3", "static").await.unwrap_err();
    assert!(matches!(err, LoadMasterError::NotFound(_)));
    assert!(fake.requests().iter().all(|r| r["cmd"] == "showrs"));
}

#[tokio::test]
async fn test_add_rule_sends_type_and_fields() {
    let fake = FakeAppliance::start(ok_with(json!({
        "MatchContentRule": [ { "name": "api", "matchtype": "regex", "pattern": "/api" } ]
    })))
    .await;

    let rule = GeneralRule {
        pattern: Some("/api".to_string()),
        no_case: Some(true),
        ..Default::default()
    };
    fake.client().add_rule(RuleType::MatchContent, "api", &rule).await.unwrap();

    assert_eq!(
        fake.last_request(),
        json!({
            "cmd": "addrule",
            "type": "0",
            "name": "api",
            "pattern": "/api",
            "nocase": true,
            "apikey": "test-key"
        })
    );
}

#[tokio::test]
async fn test_certificate_upload_with_password() {
    let fake = FakeAppliance::start(ok_envelope()).await;
    let data = encode_payload(b"-----BEGIN CERTIFICATE-----");
    let client = fake.client();

    client.add_certificate("web", Some("secret"), &data).await.unwrap();
    client.add_certificate("plain", None, &data).await.unwrap();

    let requests = fake.requests();
    assert_eq!(requests[0]["cmd"], "addcert");
    assert_eq!(requests[0]["cert"], "web");
    assert_eq!(requests[0]["password"], "secret");
    assert_eq!(requests[0]["data"], data.as_str());
    assert!(requests[1].get("password").is_none());
}

#[tokio::test]
async fn test_acme_request_merges_parameters() {
    let fake = FakeAppliance::start(ok_envelope()).await;

    let params = AcmeCertificateParameters {
        email: Some("ops@example.com".to_string()),
        key_size: Some(4096),
        ..Default::default()
    };
    fake.client()
        .request_acme_certificate("site", "example.com", "1", AcmeType::DigiCert, Some(&params))
        .await
        .unwrap();

    assert_eq!(
        fake.last_request(),
        json!({
            "cmd": "addacmecert",
            "cert": "site",
            "cn": "example.com",
            "vid": "1",
            "acmetype": "2",
            "email": "ops@example.com",
            "key_size": 4096,
            "apikey": "test-key"
        })
    );
}

#[tokio::test]
async fn test_acl_commands() {
    let fake = FakeAppliance::start(ok_with(json!({
        "list": "block",
        "IP": [ { "addr": "192.0.2.0/24", "comment": "" } ]
    })))
    .await;
    let client = fake.client();

    let listed = client.list_global_acl(AclList::Block).await.unwrap();
    assert!(listed.contains("192.0.2.0/24"));
    client.add_virtual_service_acl("1", AclList::Allow, "198.51.100.7").await.unwrap();

    let requests = fake.requests();
    assert_eq!(requests[0], json!({ "cmd": "aclcontrol", "list": "block", "apikey": "test-key" }));
    assert_eq!(
        requests[1],
        json!({ "cmd": "aclcontrol", "addvs": "allow", "vsip": "1", "addr": "198.51.100.7", "apikey": "test-key" })
    );
}

#[tokio::test]
async fn test_owasp_custom_rule_assignment() {
    let fake = FakeAppliance::start(ok_envelope()).await;

    fake.client()
        .add_virtual_service_owasp_custom_rule("1", "custom", true)
        .await
        .unwrap();

    assert_eq!(
        fake.last_request(),
        json!({
            "cmd": "owasprules",
            "vs": "1",
            "rule": "custom",
            "enable": "yes",
            "runfirst": "1",
            "apikey": "test-key"
        })
    );
}

#[tokio::test]
async fn test_backup_and_restore() {
    let archive = encode_payload(b"backup-archive");
    let fake = FakeAppliance::start(ok_with(json!({ "data": archive }))).await;
    let client = fake.client();

    let backup = client.backup().await.unwrap();
    assert_eq!(backup.decode().unwrap(), b"backup-archive");

    client.restore(&backup.data, 14).await.unwrap();
    let requests = fake.requests();
    assert_eq!(requests[1]["cmd"], "restore");
    assert_eq!(requests[1]["type"], "14");
    assert_eq!(requests[1]["data"], archive.as_str());
}

#[tokio::test]
async fn test_username_password_takes_precedence() {
    let fake = FakeAppliance::start(ok_envelope()).await;
    let credentials = Credentials {
        api_key: Some("ignored".to_string()),
        username: Some("bal".to_string()),
        password: Some("1fourall".to_string()),
    };

    fake.client_with(credentials).delete_virtual_service("1").await.unwrap();

    assert_eq!(
        fake.last_request(),
        json!({ "cmd": "delvs", "vs": "1", "apiuser": "bal", "apipass": "1fourall" })
    );
}

#[tokio::test]
async fn test_missing_credentials_send_nothing() {
    let fake = FakeAppliance::start(ok_envelope()).await;
    let credentials = Credentials {
        username: Some("bal".to_string()),
        ..Default::default()
    };

    let err = fake.client_with(credentials).list_api_keys().await.unwrap_err();

    assert!(matches!(err, LoadMasterError::MissingAuthentication));
    assert!(fake.requests().is_empty());
}

#[tokio::test]
async fn test_http_error_status_maps_to_api_error() {
    let fake = FakeAppliance::start_raw(
        StatusCode::UNAUTHORIZED,
        json!({ "code": 401, "message": "Authorization required", "status": "fail" }).to_string(),
    )
    .await;

    let err = fake.client().list_virtual_services().await.unwrap_err();

    assert_eq!(err.code(), Some(401));
    assert!(err.to_string().contains("Authorization required"));
}

#[tokio::test]
async fn test_envelope_error_code_maps_to_api_error() {
    let fake = FakeAppliance::start(json!({ "code": 422, "message": "Unknown VS 99", "status": "fail" })).await;

    let err = fake.client().show_virtual_service("99").await.unwrap_err();

    match err {
        LoadMasterError::Api { code, message } => {
            assert_eq!(code, 422);
            assert_eq!(message, "Unknown VS 99");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_maps_to_serialization_error() {
    let fake = FakeAppliance::start_raw(StatusCode::OK, "<html>not json</html>").await;

    let err = fake.client().list_rules().await.unwrap_err();

    assert!(matches!(err, LoadMasterError::Serialization(_)));
}

#[tokio::test]
async fn test_duplicate_message_keys_map_to_api_error() {
    let fake =
        FakeAppliance::start_raw(StatusCode::OK, r#"{"code": 400, "message": "NOK", "message": "error"}"#).await;
    let client = fake.client();

    let err = client.delete_virtual_service("1").await.unwrap_err();
    assert_eq!(err.code(), Some(400));
    assert!(matches!(&err, LoadMasterError::Api { message, .. } if message == "error"));

    // flattened responses take the same path
    let err = client.show_real_server("1", "!3").await.unwrap_err();
    assert_eq!(err.code(), Some(400));
}

/// Writer collecting formatted log lines
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_logs_never_contain_credentials() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter("loadmaster_client=trace")
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let fake = FakeAppliance::start(ok_envelope()).await;
    let data = encode_payload(b"-----BEGIN CERTIFICATE-----");
    fake.client_with(Credentials::api_key("key-7f3a9c"))
        .add_certificate("web", Some("cert-pass-51d2"), &data)
        .await
        .unwrap();
    fake.client_with(Credentials::username_password("bal", "pass-e8b4d0"))
        .delete_virtual_service("1")
        .await
        .unwrap();

    let failing = FakeAppliance::start_raw(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "code": 500, "apikeys": ["stored-key-0c61"] }).to_string(),
    )
    .await;
    failing.client_with(Credentials::api_key("key-7f3a9c")).list_api_keys().await.unwrap_err();

    let undecodable = FakeAppliance::start_raw(StatusCode::OK, r#"{"apikeys": "stored-key-0c61", "code": "x"}"#).await;
    undecodable.client().list_api_keys().await.unwrap_err();

    let output = logs.contents();
    assert!(output.contains("Sending command to LoadMaster API"));
    for secret in ["key-7f3a9c", "cert-pass-51d2", "pass-e8b4d0", "stored-key-0c61"] {
        assert!(!output.contains(secret), "{secret} leaked into logs:\n{output}");
    }
}
