use bigip_http_profile::domain::model::EnforcementConfig;
use bigip_http_profile::{
    HttpProfileConfig, HttpProfileResource, IControlClient, NoopReporter, ProfileError,
    ResourceState,
};
use httpmock::prelude::*;
use httpmock::Method::PATCH;

const ITEM_PATH: &str = "/mgmt/tm/ltm/profile/http/~Common~http-prof-1";
const COLLECTION_PATH: &str = "/mgmt/tm/ltm/profile/http";

fn resource_for(server: &MockServer) -> HttpProfileResource<IControlClient, NoopReporter> {
    let client = IControlClient::new(&server.base_url(), "admin", "admin", true).unwrap();
    HttpProfileResource::new(client, NoopReporter)
}

#[tokio::test]
async fn test_create_then_read_round_trips_declared_fields() {
    let server = MockServer::start();

    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path(COLLECTION_PATH)
            // Omitted fallback host is explicitly cleared on the wire.
            .json_body_partial(
                r#"{"name": "/Common/http-prof-1", "proxyType": "reverse", "fallbackHost": ""}"#,
            );
        then.status(200);
    });

    let read_mock = server.mock(|when, then| {
        when.method(GET).path(ITEM_PATH);
        then.status(200).json_body(serde_json::json!({
            "name": "/Common/http-prof-1",
            "proxyType": "reverse",
            "defaultsFrom": "/Common/http",
            "description": "frontend profile",
            "fallbackHost": "",
            "serverAgentName": "BigIP",
            "lwsWidth": 80
        }));
    });

    let resource = resource_for(&server);
    let mut state = ResourceState::new(HttpProfileConfig {
        name: "/Common/http-prof-1".to_string(),
        proxy_type: Some("reverse".to_string()),
        description: Some("frontend profile".to_string()),
        ..Default::default()
    });

    resource.create(&mut state).await.unwrap();

    create_mock.assert();
    read_mock.assert();

    assert_eq!(state.id.as_deref(), Some("/Common/http-prof-1"));
    assert_eq!(state.attrs.proxy_type.as_deref(), Some("reverse"));
    assert_eq!(state.attrs.description.as_deref(), Some("frontend profile"));
    // Never declared, so the device's computed values stay out of the view.
    assert!(state.attrs.fallback_host.is_none());
    assert!(state.attrs.server_agent_name.is_none());
    assert!(state.attrs.lws_width.is_none());
}

#[tokio::test]
async fn test_read_absent_profile_clears_identity() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(ITEM_PATH);
        then.status(404)
            .json_body(serde_json::json!({"code": 404, "message": "not found"}));
    });

    let resource = resource_for(&server);
    let mut state = ResourceState::imported("/Common/http-prof-1");

    resource.read(&mut state).await.unwrap();
    assert!(state.id.is_none());
}

#[tokio::test]
async fn test_update_is_keyed_by_identity_not_config_name() {
    let server = MockServer::start();

    let modify_mock = server.mock(|when, then| {
        when.method(PATCH)
            .path(ITEM_PATH)
            .json_body_partial(r#"{"name": "/Common/http-prof-1", "description": "updated"}"#);
        then.status(200);
    });

    let read_mock = server.mock(|when, then| {
        when.method(GET).path(ITEM_PATH);
        then.status(200).json_body(serde_json::json!({
            "name": "/Common/http-prof-1",
            "proxyType": "reverse",
            "description": "updated"
        }));
    });

    let resource = resource_for(&server);
    let mut state = ResourceState::new(HttpProfileConfig {
        // Renamed in the declaration; the payload must still carry the
        // original identity.
        name: "/Common/renamed".to_string(),
        description: Some("updated".to_string()),
        ..Default::default()
    });
    state.id = Some("/Common/http-prof-1".to_string());

    resource.update(&mut state).await.unwrap();

    modify_mock.assert();
    read_mock.assert();
    assert_eq!(state.id.as_deref(), Some("/Common/http-prof-1"));
}

#[tokio::test]
async fn test_delete_clears_identity_on_success() {
    let server = MockServer::start();
    let delete_mock = server.mock(|when, then| {
        when.method(DELETE).path(ITEM_PATH);
        then.status(200);
    });

    let resource = resource_for(&server);
    let mut state = ResourceState::imported("/Common/http-prof-1");

    resource.delete(&mut state).await.unwrap();

    delete_mock.assert();
    assert!(state.id.is_none());
}

#[tokio::test]
async fn test_delete_missing_profile_surfaces_device_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path(ITEM_PATH);
        then.status(404).json_body(
            serde_json::json!({"code": 404, "message": "01020036: object does not exist"}),
        );
    });

    let resource = resource_for(&server);
    let mut state = ResourceState::imported("/Common/http-prof-1");

    let err = resource.delete(&mut state).await.unwrap_err();
    assert!(matches!(err, ProfileError::DeviceError { code: 404, .. }));
    // Unlike Read, Delete never treats absence as success.
    assert!(state.id.is_some());
}

#[tokio::test]
async fn test_enforcement_block_reads_back_with_computed_size() {
    let server = MockServer::start();

    let create_mock = server.mock(|when, then| {
        when.method(POST).path(COLLECTION_PATH).json_body_partial(
            r#"{"enforcement": {"maxHeaderCount": 64, "unknownMethod": "reject"}}"#,
        );
        then.status(200);
    });

    let read_mock = server.mock(|when, then| {
        when.method(GET).path(ITEM_PATH);
        then.status(200).json_body(serde_json::json!({
            "name": "/Common/http-prof-1",
            "proxyType": "reverse",
            "enforcement": {
                "knownMethods": ["CONNECT", "DELETE", "GET"],
                "maxHeaderCount": 64,
                "maxHeaderSize": 32768,
                "unknownMethod": "reject"
            }
        }));
    });

    let resource = resource_for(&server);
    let mut state = ResourceState::new(HttpProfileConfig {
        name: "/Common/http-prof-1".to_string(),
        enforcement: Some(EnforcementConfig {
            max_header_count: Some(64),
            unknown_method: Some("reject".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    });

    resource.create(&mut state).await.unwrap();

    create_mock.assert();
    read_mock.assert();

    let enforcement = state.attrs.enforcement.unwrap();
    assert_eq!(enforcement.max_header_count, Some(64));
    assert_eq!(enforcement.unknown_method.as_deref(), Some("reject"));
    // Server-computed limit joins the reconstructed block.
    assert_eq!(enforcement.max_header_size, Some(32768));
    // No method list was pinned, so none is adopted from the device.
    assert!(enforcement.known_methods.is_empty());
}
