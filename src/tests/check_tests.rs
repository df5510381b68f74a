use crate::{CheckConfig, CheckConfigBuilder, ServiceState, run};
use std::time::Duration;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

const STORAGE_DOMAINS: &str = "/ovirt-engine/api/storagedomains";

fn config_builder(server_url: &str) -> CheckConfigBuilder {
    CheckConfig::builder()
        .url(server_url)
        .auth_token("HjezghdLjfhjHarepCkldqerogsmvYkchslpamd")
}

async fn mount_domains(mock_server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(STORAGE_DOMAINS))
        .and(header(
            "Authorization",
            "Basic HjezghdLjfhjHarepCkldqerogsmvYkchslpamd",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(mock_server)
        .await;
}

fn data1_listing() -> serde_json::Value {
    serde_json::json!({
        "storage_domain": [
            {
                "name": "hosted_storage",
                "used": "64424509440",
                "available": "42949672960"
            },
            {
                "name": "DATA1",
                "used": "107374182400",
                "available": "53687091200"
            }
        ]
    })
}

#[tokio::test]
async fn test_missing_argument() {
    let mock_server = MockServer::start().await;
    let config = config_builder(&mock_server.uri()).build().unwrap();

    for argument in [None, Some(""), Some("   ")] {
        let result = run(&config, argument).await;
        assert_eq!(
            result.message(),
            "CRITICAL! Please provide the storage domain name."
        );
        assert_eq!(result.exit_code(), 2);
    }

    // No request is made without a name
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_domain_found_case_insensitive() {
    let mock_server = MockServer::start().await;
    mount_domains(&mock_server, data1_listing()).await;
    let config = config_builder(&mock_server.uri()).build().unwrap();

    let result = run(&config, Some("data1")).await;
    assert_eq!(result.state(), ServiceState::Ok);
    assert_eq!(result.exit_code(), 0);
    assert_eq!(
        result.message(),
        "Storage Domain data1 available space 50.0 GB and used space 100.0 GB | \
         available_space=50.0GB;;;; used_space=100.0GB;;;;"
    );
}

#[tokio::test]
async fn test_domain_not_found() {
    let mock_server = MockServer::start().await;
    mount_domains(&mock_server, data1_listing()).await;
    let config = config_builder(&mock_server.uri()).build().unwrap();

    let result = run(&config, Some("DATA2")).await;
    assert_eq!(result.message(), "CRITICAL: Storage Domain DATA2 not found");
    assert_eq!(result.exit_code(), 2);
}

#[tokio::test]
async fn test_malformed_other_domain_does_not_matter() {
    let mock_server = MockServer::start().await;
    mount_domains(
        &mock_server,
        serde_json::json!({
            "storage_domain": [
                {"name": "DATA1", "used": "107374182400", "available": "53687091200"},
                {"name": "ISO", "used": "unknown"}
            ]
        }),
    )
    .await;
    let config = config_builder(&mock_server.uri()).build().unwrap();

    let result = run(&config, Some("DATA1")).await;
    assert_eq!(result.exit_code(), 0);
    assert_eq!(
        result.message(),
        "Storage Domain DATA1 available space 50.0 GB and used space 100.0 GB | \
         available_space=50.0GB;;;; used_space=100.0GB;;;;"
    );

    let result = run(&config, Some("iso")).await;
    assert_eq!(result.state(), ServiceState::Unknown);
}

#[tokio::test]
async fn test_name_is_reported_as_given() {
    let mock_server = MockServer::start().await;
    mount_domains(&mock_server, data1_listing()).await;
    let config = config_builder(&mock_server.uri()).build().unwrap();

    let result = run(&config, Some(" DATA1 ")).await;
    assert_eq!(result.message(), "CRITICAL: Storage Domain  DATA1  not found");
}

#[tokio::test]
async fn test_server_error_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STORAGE_DOMAINS))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    let config = config_builder(&mock_server.uri()).build().unwrap();

    let result = run(&config, Some("DATA1")).await;
    assert_eq!(result.message(), "CRITICAL: 500 Internal Server Error");
    assert_eq!(result.exit_code(), 2);
}

#[tokio::test]
async fn test_unparseable_listing() {
    let mock_server = MockServer::start().await;
    mount_domains(&mock_server, serde_json::json!({})).await;
    let config = config_builder(&mock_server.uri()).build().unwrap();

    let result = run(&config, Some("DATA1")).await;
    assert_eq!(result.message(), "CRITICAL: 200 Cannot parse storage_domain.");
    assert_eq!(result.exit_code(), 2);
}

#[tokio::test]
async fn test_timeout() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(STORAGE_DOMAINS))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(data1_listing())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;
    let config = config_builder(&mock_server.uri())
        .timeout_seconds(1)
        .build()
        .unwrap();

    let result = run(&config, Some("DATA1")).await;
    assert_eq!(
        result.message(),
        "CRITICAL: Request has timed out after 1 seconds."
    );
    assert_eq!(result.exit_code(), 2);
}

#[tokio::test]
async fn test_available_space_thresholds() {
    let mock_server = MockServer::start().await;
    mount_domains(&mock_server, data1_listing()).await;

    let config = config_builder(&mock_server.uri())
        .warning(60.0)
        .critical(20.0)
        .build()
        .unwrap();
    let result = run(&config, Some("DATA1")).await;
    assert_eq!(result.exit_code(), 1);
    assert_eq!(
        result.message(),
        "WARNING: Storage Domain DATA1 available space 50.0 GB and used space 100.0 GB | \
         available_space=50.0GB;60.0:;20.0:;; used_space=100.0GB;;;;"
    );

    let config = config_builder(&mock_server.uri())
        .warning(40.0)
        .build()
        .unwrap();
    assert_eq!(run(&config, Some("DATA1")).await.exit_code(), 0);
}

#[tokio::test]
async fn test_missing_ca_file_is_unknown() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = config_builder(&mock_server.uri())
        .ca_file(dir.path().join("ca.pem"))
        .build()
        .unwrap();

    let result = run(&config, Some("DATA1")).await;
    assert_eq!(result.state(), ServiceState::Unknown);
    assert_eq!(result.exit_code(), 3);
    assert!(result.message().starts_with("UNKNOWN: "));
}

#[tokio::test]
async fn test_repeated_runs_are_identical() {
    let mock_server = MockServer::start().await;
    mount_domains(&mock_server, data1_listing()).await;
    let config = config_builder(&mock_server.uri()).build().unwrap();

    let first = run(&config, Some("DATA1")).await;
    let second = run(&config, Some("DATA1")).await;
    assert_eq!(first, second);
}
