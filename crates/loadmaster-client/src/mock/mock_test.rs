use super::*;
use crate::common::encode_payload;

fn mock() -> MockLoadMasterClient {
    MockLoadMasterClient::new("https://mock-loadmaster")
}

async fn add_vs(client: &MockLoadMasterClient, port: &str) -> String {
    client
        .add_virtual_service("10.0.0.4", port, "tcp", &VirtualServiceParameters::default())
        .await
        .unwrap()
        .virtual_service
        .index
        .to_string()
}

#[tokio::test]
async fn test_virtual_service_lifecycle() {
    let client = mock();
    let created = client
        .add_virtual_service(
            "10.0.0.4",
            "8080",
            "tcp",
            &VirtualServiceParameters::with_nickname("web"),
        )
        .await
        .unwrap();

    assert_eq!(created.response.code, 200);
    let vs = created.virtual_service;
    assert_eq!(vs.address, "10.0.0.4");
    assert_eq!(vs.port, "8080");
    assert_eq!(vs.parameters.basic.nick_name.as_deref(), Some("web"));
    assert_eq!(vs.parameters.basic.vs_type.as_deref(), Some("gen"));
    assert_eq!(vs.parameters.basic.enable, Some(true));

    let id = vs.index.to_string();
    let mut params = VirtualServiceParameters::with_type("http");
    params.standard.idletime = Some(900);
    let modified = client.modify_virtual_service(&id, &params).await.unwrap();
    assert_eq!(modified.virtual_service.parameters.basic.vs_type.as_deref(), Some("http"));
    assert_eq!(modified.virtual_service.parameters.standard.idletime, Some(900));
    // unset fields keep their value
    assert_eq!(modified.virtual_service.parameters.basic.nick_name.as_deref(), Some("web"));

    let list = client.list_virtual_services().await.unwrap();
    assert_eq!(list.virtual_services.len(), 1);

    client.delete_virtual_service(&id).await.unwrap();
    let err = client.show_virtual_service(&id).await.unwrap_err();
    assert_eq!(err.code(), Some(UNPROCESSABLE));
}

#[tokio::test]
async fn test_add_virtual_service_rejects_duplicates_and_bad_input() {
    let client = mock();
    add_vs(&client, "443").await;
    let params = VirtualServiceParameters::default();

    let err = client.add_virtual_service("10.0.0.4", "443", "tcp", &params).await.unwrap_err();
    assert_eq!(err.code(), Some(UNPROCESSABLE));
    assert!(client.add_virtual_service("10.0.0.4", "443", "sctp", &params).await.is_err());
    assert!(client.add_virtual_service("10.0.0.4", "70000", "tcp", &params).await.is_err());
    assert_eq!(client.virtual_service_count(), 1);
}

#[tokio::test]
async fn test_sub_virtual_services() {
    let client = mock();
    let parent = add_vs(&client, "30000").await;

    let response = client
        .add_sub_virtual_service(&parent, &VirtualServiceParameters::with_type("http"))
        .await
        .unwrap();
    let subs = response
        .sub_virtual_service
        .virtual_service
        .parameters
        .real_servers
        .sub_vs
        .unwrap();
    let sub_id = subs.last().unwrap().vs_index.unwrap().to_string();
    assert_ne!(sub_id, parent);

    let shown = client.show_sub_virtual_service(&sub_id).await.unwrap();
    let sub_vs = &shown.sub_virtual_service.virtual_service;
    assert_eq!(sub_vs.parameters.basic.vs_type.as_deref(), Some("http"));
    assert_eq!(sub_vs.protocol, "tcp");
    assert_eq!(sub_vs.master_vs_id.map(|i| i.to_string()), Some(parent.clone()));

    let modified = client
        .modify_sub_virtual_service(&sub_id, &VirtualServiceParameters::with_nickname("subvs2"))
        .await
        .unwrap();
    assert_eq!(modified.sub_virtual_service.name.as_deref(), Some("subvs2"));

    // a parent is not a sub virtual service
    assert!(client.delete_sub_virtual_service(&parent).await.is_err());

    client.delete_sub_virtual_service(&sub_id).await.unwrap();
    assert!(client.show_sub_virtual_service(&sub_id).await.is_err());
    assert_eq!(client.virtual_service_count(), 1);
}

#[tokio::test]
async fn test_deleting_parent_removes_sub_services_and_real_servers() {
    let client = mock();
    let parent = add_vs(&client, "8443").await;
    client
        .add_sub_virtual_service(&parent, &VirtualServiceParameters::default())
        .await
        .unwrap();
    client
        .add_real_server(&parent, "10.0.0.10", "80", &RealServerParameters::default())
        .await
        .unwrap();

    client.delete_virtual_service(&parent).await.unwrap();
    assert_eq!(client.virtual_service_count(), 0);
    assert!(client.state().real_servers.is_empty());
}

#[tokio::test]
async fn test_real_servers_and_rules() {
    let client = mock();
    let vs = add_vs(&client, "80").await;

    let added = client
        .add_real_server(&vs, "10.0.0.10", "8080", &RealServerParameters::default())
        .await
        .unwrap();
    let rs = &added.real_servers[0];
    assert_eq!(rs.parameters.weight, Some(1000));
    assert_eq!(rs.parameters.forward.as_deref(), Some("nat"));
    let rs_id = format!("!{}", rs.rs_index);

    // addressable by index or by address
    client.show_real_server(&vs, &rs_id).await.unwrap();
    client.show_real_server(&vs, "10.0.0.10").await.unwrap();

    let params = RealServerParameters {
        weight: Some(500),
        ..Default::default()
    };
    let modified = client.modify_real_server(&vs, &rs_id, &params).await.unwrap();
    assert_eq!(modified.real_servers[0].parameters.weight, Some(500));
    assert_eq!(modified.real_servers[0].parameters.port, Some(8080));

    // assigning an unknown rule fails
    let err = client.add_real_server_rule(&vs, &rs_id, "api").await.unwrap_err();
    assert_eq!(err.code(), Some(UNPROCESSABLE));

    let rule = GeneralRule {
        pattern: Some("/api".to_string()),
        ..Default::default()
    };
    client.add_rule(RuleType::MatchContent, "api", &rule).await.unwrap();
    client.add_real_server_rule(&vs, &rs_id, "api").await.unwrap();

    let found = client.show_real_server_rule(&vs, &rs_id, "api").await.unwrap();
    assert!(found.has_rule("api"));
    assert_eq!(found.parameters.nrules, Some(1));

    // rules in use cannot be deleted
    assert!(client.delete_rule("api").await.is_err());

    client.delete_real_server_rule(&vs, &rs_id, "api").await.unwrap();
    let err = client.show_real_server_rule(&vs, &rs_id, "api").await.unwrap_err();
    assert!(matches!(err, LoadMasterError::NotFound(_)));

    client.delete_real_server(&vs, &rs_id).await.unwrap();
    assert!(client.show_real_server(&vs, &rs_id).await.is_err());
}

#[tokio::test]
async fn test_content_rules_by_kind() {
    let client = mock();
    let header = GeneralRule {
        header: Some("X-Served-By".to_string()),
        replacement: Some("lb1".to_string()),
        ..Default::default()
    };
    let body = GeneralRule {
        pattern: Some("http://".to_string()),
        replacement: Some("https://".to_string()),
        ..Default::default()
    };
    client.add_rule(RuleType::AddHeader, "served_by", &header).await.unwrap();
    client.add_rule(RuleType::ReplaceBody, "https_links", &body).await.unwrap();

    let all = client.list_rules().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all.add_header_rules[0].replacement, "lb1");
    assert_eq!(all.replace_body_rules[0].pattern, "http://");

    let update = GeneralRule {
        replacement: Some("lb2".to_string()),
        ..Default::default()
    };
    let modified = client.modify_rule("served_by", &update).await.unwrap();
    assert_eq!(modified.add_header_rules[0].replacement, "lb2");
    assert_eq!(modified.add_header_rules[0].header.as_deref(), Some("X-Served-By"));

    assert!(client.add_rule(RuleType::AddHeader, "served_by", &header).await.is_err());
    client.delete_rule("served_by").await.unwrap();
    assert!(client.show_rule("served_by").await.is_err());
}

#[tokio::test]
async fn test_certificates() {
    let client = mock();
    let pem = encode_payload(b"-----BEGIN CERTIFICATE-----");

    client.add_certificate("web", None, &pem).await.unwrap();
    client.add_intermediate_certificate("chain", &pem).await.unwrap();
    assert!(client.add_certificate("web", None, &pem).await.is_err());
    assert!(client.add_certificate("bad", None, "not base64!").await.is_err());

    assert!(client.list_certificates().await.unwrap().contains("web"));
    assert!(!client.list_certificates().await.unwrap().contains("chain"));
    assert!(client.list_intermediate_certificates().await.unwrap().contains("chain"));
    assert_eq!(client.show_certificate("web").await.unwrap().certificate, pem);

    client.delete_certificate("web").await.unwrap();
    client.delete_intermediate_certificate("chain").await.unwrap();
    assert!(client.show_certificate("web").await.is_err());
    assert!(client.show_intermediate_certificate("chain").await.is_err());
}

#[tokio::test]
async fn test_acme_requires_account() {
    let client = mock();
    let vs = add_vs(&client, "80").await;

    let err = client
        .request_acme_certificate("site", "example.com", &vs, AcmeType::LetsEncrypt, None)
        .await
        .unwrap_err();
    assert_eq!(err.code(), Some(UNPROCESSABLE));

    client.register_lets_encrypt_account(Some("ops@example.com")).await.unwrap();
    client
        .request_acme_certificate("site", "example.com", &vs, AcmeType::LetsEncrypt, None)
        .await
        .unwrap();
    assert!(client.list_certificates().await.unwrap().contains("site"));

    // DigiCert needs both key id and HMAC
    client.set_digicert_key_id("kid").await.unwrap();
    assert!(
        client
            .request_acme_certificate("dc", "example.org", &vs, AcmeType::DigiCert, None)
            .await
            .is_err()
    );
    client.set_digicert_hmac("hmac").await.unwrap();
    client
        .request_acme_certificate("dc", "example.org", &vs, AcmeType::DigiCert, None)
        .await
        .unwrap();

    assert!(client.delete_acme_certificate("site", AcmeType::DigiCert).await.is_err());
    client.delete_acme_certificate("site", AcmeType::LetsEncrypt).await.unwrap();
    assert!(!client.list_certificates().await.unwrap().contains("site"));
}

#[tokio::test]
async fn test_acl_lists() {
    let client = mock();
    let vs = add_vs(&client, "80").await;

    client.add_global_acl(AclList::Block, "192.0.2.0/24").await.unwrap();
    assert!(client.add_global_acl(AclList::Block, "192.0.2.0/24").await.is_err());
    let block = client.list_global_acl(AclList::Block).await.unwrap();
    assert_eq!(block.list, "block");
    assert!(block.contains("192.0.2.0/24"));
    assert!(client.list_global_acl(AclList::Allow).await.unwrap().addresses.is_empty());

    client.add_virtual_service_acl(&vs, AclList::Allow, "198.51.100.7").await.unwrap();
    assert!(client.list_virtual_service_acl(&vs, AclList::Allow).await.unwrap().contains("198.51.100.7"));
    // per service lists are separate from the global ones
    assert!(!client.list_global_acl(AclList::Allow).await.unwrap().contains("198.51.100.7"));

    client.delete_virtual_service_acl(&vs, AclList::Allow, "198.51.100.7").await.unwrap();
    assert!(client.delete_virtual_service_acl(&vs, AclList::Allow, "198.51.100.7").await.is_err());
    client.delete_global_acl(AclList::Block, "192.0.2.0/24").await.unwrap();
    assert!(client.list_virtual_service_acl("999", AclList::Allow).await.is_err());
}

#[tokio::test]
async fn test_waf_and_owasp_files() {
    let client = mock();
    let data = encode_payload(b"SecRule ARGS \"@rx attack\" \"id:1000,deny\"");

    client.add_waf_rule("legacy.conf", &data).await.unwrap();
    assert_eq!(client.show_waf_rule("legacy.conf").await.unwrap().data, data);
    client.delete_waf_rule("legacy.conf").await.unwrap();
    assert!(client.show_waf_rule("legacy.conf").await.is_err());

    client.add_waf_data("legacy.data", &data).await.unwrap();
    client.show_waf_data("legacy.data").await.unwrap();
    client.delete_waf_data("legacy.data").await.unwrap();

    client.add_owasp_custom_rule("custom.conf", &data).await.unwrap();
    assert_eq!(client.show_owasp_custom_rule("custom.conf").await.unwrap().decode().unwrap(), b"SecRule ARGS \"@rx attack\" \"id:1000,deny\"");

    // data files are deleted by name without extension
    client.add_owasp_custom_data("blocklist.data", &data).await.unwrap();
    client.show_owasp_custom_data("blocklist.data").await.unwrap();
    client.delete_owasp_custom_data("blocklist").await.unwrap();
    assert!(client.show_owasp_custom_data("blocklist.data").await.is_err());

    client.delete_owasp_custom_rule("custom.conf").await.unwrap();
}

#[tokio::test]
async fn test_owasp_rule_assignment() {
    let client = mock();
    let vs = add_vs(&client, "443").await;
    let data = encode_payload(b"SecRule");

    assert!(client.add_virtual_service_owasp_custom_rule(&vs, "custom", true).await.is_err());
    client.add_owasp_custom_rule("custom.conf", &data).await.unwrap();
    client.add_virtual_service_owasp_custom_rule(&vs, "custom", true).await.unwrap();

    let shown = client.show_virtual_service_owasp_rule(&vs, "custom").await.unwrap();
    assert!(shown.rule.is_enabled());
    assert_eq!(shown.rule.runfirst, "Yes");

    client.delete_virtual_service_owasp_custom_rule(&vs, "custom").await.unwrap();
    assert!(client.show_virtual_service_owasp_rule(&vs, "custom").await.is_err());

    assert!(!client.show_virtual_service_owasp_rule(&vs, "920100").await.unwrap().rule.is_enabled());
    client.add_virtual_service_owasp_rule(&vs, "920100").await.unwrap();
    assert!(client.show_virtual_service_owasp_rule(&vs, "920100").await.unwrap().rule.is_enabled());
    client.delete_virtual_service_owasp_rule(&vs, "920100").await.unwrap();
    assert!(!client.show_virtual_service_owasp_rule(&vs, "920100").await.unwrap().rule.is_enabled());
}

#[tokio::test]
async fn test_api_keys() {
    let client = mock();
    client.add_api_key("seed");

    let generated = client.generate_api_key().await.unwrap();
    assert_eq!(generated.api_keys.len(), 2);
    let new_key = generated.api_keys[1].clone();
    assert_ne!(new_key, "seed");

    let remaining = client.delete_api_key(&new_key).await.unwrap();
    assert_eq!(remaining.api_keys, vec!["seed"]);
    assert!(client.delete_api_key(&new_key).await.is_err());
    assert_eq!(client.list_api_keys().await.unwrap().api_keys, vec!["seed"]);
}

#[tokio::test]
async fn test_backup_and_restore_roundtrip_state() {
    let client = mock();
    let vs = add_vs(&client, "80").await;
    client
        .add_real_server(&vs, "10.0.0.10", "80", &RealServerParameters::default())
        .await
        .unwrap();
    client.add_global_acl(AclList::Allow, "10.0.0.0/8").await.unwrap();

    let backup = client.backup().await.unwrap();
    assert!(!backup.decode().unwrap().is_empty());

    client.delete_virtual_service(&vs).await.unwrap();
    client.delete_global_acl(AclList::Allow, "10.0.0.0/8").await.unwrap();
    client
        .add_virtual_service("10.0.0.5", "81", "udp", &VirtualServiceParameters::default())
        .await
        .unwrap();

    client.restore(&backup.data, 14).await.unwrap();

    let list = client.list_virtual_services().await.unwrap();
    assert_eq!(list.virtual_services.len(), 1);
    assert_eq!(list.virtual_services[0].port, "80");
    assert_eq!(list.virtual_services[0].parameters.real_servers.number_of_rss, Some(1));
    assert!(client.list_global_acl(AclList::Allow).await.unwrap().contains("10.0.0.0/8"));
}

#[tokio::test]
async fn test_restore_rejects_garbage() {
    let client = mock();
    let err = client.restore("not base64!", 14).await.unwrap_err();
    assert_eq!(err.code(), Some(UNPROCESSABLE));
    let err = client.restore(&encode_payload(b"{}"), 14).await.unwrap_err();
    assert_eq!(err.code(), Some(UNPROCESSABLE));
}
