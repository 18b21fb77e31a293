//! Integration tests for multipart package uploads.

mod common;

use std::path::PathBuf;

use cdn_api::rest::resources::package::UpdatePackageInput;
use cdn_api::{ApiError, EncodeError, FileSource, ValidationError};
use common::client_for;
use serde_json::json;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn package_response() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "pkg1",
        "service_id": "abc",
        "version": 4,
        "metadata": {"name": "edge-app", "size": 11, "hashsum": "f00d"}
    }))
}

fn temp_archive(name: &str, contents: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("cdn-api-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

async fn upload_body(server: &MockServer) -> String {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8_lossy(&requests[0].body).into_owned();
    assert!(body.starts_with("--"), "not a multipart body: {body}");
    body
}

// ============================================================================
// Multipart Upload Tests
// ============================================================================

#[tokio::test]
async fn test_upload_from_path_streams_the_file() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/service/abc/version/4/package"))
        .respond_with(package_response())
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);
    let archive = temp_archive("app.tar.gz", b"hello world");

    let package = client
        .execute(&UpdatePackageInput {
            service_id: "abc".to_string(),
            service_version: 4,
            source: Some(FileSource::Path(archive.clone())),
        })
        .await
        .unwrap();
    assert_eq!(package.id.as_deref(), Some("pkg1"));
    assert_eq!(package.metadata.unwrap().size, Some(11));

    let body = upload_body(&server).await;
    assert!(body.contains(r#"form-data; name="package""#));
    assert!(body.contains("filename=\""));
    assert!(body.contains("app.tar.gz"));
    assert!(body.contains("hello world"));

    std::fs::remove_file(archive).ok();
}

#[tokio::test]
async fn test_upload_from_memory() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/service/abc/version/4/package"))
        .respond_with(package_response())
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    client
        .execute(&UpdatePackageInput {
            service_id: "abc".to_string(),
            service_version: 4,
            source: Some(FileSource::Memory(b"in-memory archive")),
        })
        .await
        .unwrap();

    let body = upload_body(&server).await;
    assert!(body.contains(r#"form-data; name="package""#));
    assert!(body.contains("in-memory archive"));
}

// ============================================================================
// Pre-flight Failure Tests
// ============================================================================

#[tokio::test]
async fn test_unreadable_path_fails_before_sending() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(package_response())
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);
    let missing = std::env::temp_dir().join("cdn-api-does-not-exist/app.tar.gz");

    let error = client
        .execute(&UpdatePackageInput {
            service_id: "abc".to_string(),
            service_version: 4,
            source: Some(FileSource::Path(missing.clone())),
        })
        .await
        .unwrap_err();
    let ApiError::Encode(EncodeError::Io { path, .. }) = error else {
        panic!("expected an I/O encode error");
    };
    assert_eq!(path, missing);
}

#[tokio::test]
async fn test_missing_package_is_a_validation_error() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(package_response())
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let error = client
        .execute(&UpdatePackageInput {
            service_id: "abc".to_string(),
            service_version: 4,
            source: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        ApiError::Validation(ValidationError::MissingPackage)
    ));
    assert!(error.is_validation());
}
