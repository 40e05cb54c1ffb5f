//! End-to-end reconcile flow against a mock control plane

use ccloudsync::{
    ApiKeyConfig, CcloudClient, CcloudError, Cluster, Durability, EnvironmentConfig, Reconciler,
};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn cluster_json(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "account_id": "env-new",
        "name": name,
        "service_provider": "aws",
        "region": "us-east-1",
        "network_ingress": 100,
        "network_egress": 100,
        "storage": 5000,
        "durability": "LOW",
        "organization_id": 99,
        "endpoint": "SASL_SSL://pkc-1.us-east-1.aws.confluent.cloud:9092",
        "api_endpoint": "https://pkac-1.us-east-1.aws.confluent.cloud"
    })
}

async fn mount_login(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/sessions"))
        .and(body_json(serde_json::json!({
            "email": "ops@example.com",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "token-abc",
            "user": {
                "id": 7,
                "email": "ops@example.com",
                "first_name": "Ops",
                "last_name": "Bot",
                "organization_id": 99
            }
        })))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn full_environment_cluster_api_key_lifecycle() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;

    // Environment creation defaults the organization from the session
    Mock::given(method("POST"))
        .and(path("/accounts"))
        .and(body_json(serde_json::json!({
            "account": { "name": "staging", "organization_id": 99 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "account": { "id": "env-new", "name": "staging", "organization_id": 99 }
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/clusters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cluster": cluster_json("lkc-123", "orders")
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api_keys"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "api_key": { "id": 9001, "key": "ABCDEF", "secret": "only-now" }
        })))
        .mount(&mock_server)
        .await;

    let client = CcloudClient::with_base_url(&mock_server.uri());
    let session = client.login("ops@example.com", "hunter2").await.unwrap();
    let reconciler = Reconciler::new(&client, &session);

    let environment = reconciler
        .apply_environment(
            &EnvironmentConfig {
                name: "staging".to_string(),
            },
            None,
        )
        .await
        .unwrap();
    assert_eq!(environment.id, "env-new");
    assert_eq!(environment.organization_id, 99);

    let desired_cluster = Cluster {
        id: String::new(),
        environment_id: environment.id.clone(),
        name: "orders".to_string(),
        cloud_provider: "aws".to_string(),
        cloud_region: "us-east-1".to_string(),
        network_ingress: 100,
        network_egress: 100,
        storage: 5000,
        durability: Durability::Low,
        organization_id: 0,
        cluster_endpoint: String::new(),
        api_endpoint: String::new(),
    };
    let cluster = reconciler.apply_cluster(&desired_cluster, None).await.unwrap();
    assert_eq!(cluster.id, "lkc-123");
    assert!(!cluster.cluster_endpoint.is_empty());

    // The creation snapshot is the only place the secret appears
    let api_key = reconciler
        .apply_api_key(
            &ApiKeyConfig {
                environment_id: environment.id.clone(),
                cluster_id: cluster.id.clone(),
            },
            None,
        )
        .await
        .unwrap();
    assert_eq!(api_key.secret, "only-now");
}

#[tokio::test]
async fn delete_then_read_reports_absent() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;

    Mock::given(method("DELETE"))
        .and(path("/accounts/env-1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/accounts/env-1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = CcloudClient::with_base_url(&mock_server.uri());
    let session = client.login("ops@example.com", "hunter2").await.unwrap();
    let reconciler = Reconciler::new(&client, &session);

    let environment = ccloudsync::Environment {
        id: "env-1".to_string(),
        name: "staging".to_string(),
        organization_id: 99,
    };
    reconciler.destroy_environment(&environment).await.unwrap();

    let snapshot = reconciler.refresh_environment("env-1").await.unwrap();
    assert!(snapshot.is_none());
}

#[tokio::test]
async fn immutable_provider_change_is_rejected_before_any_call() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;

    let client = CcloudClient::with_base_url(&mock_server.uri());
    let session = client.login("ops@example.com", "hunter2").await.unwrap();
    let reconciler = Reconciler::new(&client, &session);

    let known: Cluster = serde_json::from_value(cluster_json("lkc-123", "orders")).unwrap();
    let mut desired = known.clone();
    desired.cloud_provider = "gcp".to_string();
    desired.cloud_region = "us-central1".to_string();

    let result = reconciler.apply_cluster(&desired, Some(&known)).await;
    match result.unwrap_err() {
        CcloudError::ImmutableField { field } => assert_eq!(field, "cloud_provider"),
        other => panic!("Expected ImmutableField, got {:?}", other),
    }

    // Only the login request reached the server
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/sessions");
}

#[tokio::test]
async fn remote_error_surfaces_with_envelope_message() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;

    Mock::given(method("POST"))
        .and(path("/clusters"))
        .respond_with(ResponseTemplate::new(402).set_body_json(serde_json::json!({
            "error": { "code": 402, "message": "cluster quota exceeded for organization" }
        })))
        .mount(&mock_server)
        .await;

    let client = CcloudClient::with_base_url(&mock_server.uri());
    let session = client.login("ops@example.com", "hunter2").await.unwrap();
    let reconciler = Reconciler::new(&client, &session);

    let mut desired: Cluster = serde_json::from_value(cluster_json("", "orders")).unwrap();
    desired.id = String::new();
    desired.organization_id = 0;

    let result = reconciler.apply_cluster(&desired, None).await;
    match result.unwrap_err() {
        CcloudError::Api { status, message } => {
            assert_eq!(status, 402);
            assert!(message.contains("cluster quota exceeded"));
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn lookup_by_name_finds_first_exact_match() {
    let mock_server = MockServer::start().await;
    mount_login(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/clusters"))
        .and(query_param("account_id", "env-new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "clusters": [cluster_json("lkc-1", "orders"), cluster_json("lkc-2", "orders")]
        })))
        .mount(&mock_server)
        .await;

    let client = CcloudClient::with_base_url(&mock_server.uri());
    let session = client.login("ops@example.com", "hunter2").await.unwrap();

    let found = client
        .cluster_by_name(&session, "env-new", "orders")
        .await
        .unwrap()
        .unwrap();
    // Duplicate names: first listed wins
    assert_eq!(found.id, "lkc-1");
}
