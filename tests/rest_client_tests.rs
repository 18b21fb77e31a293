//! Integration tests for running operations through `RestClient`.

mod common;

use cdn_api::rest::resources::backend::{BackendSettings, CreateBackendInput};
use cdn_api::rest::resources::cache_setting::{
    CacheSettingAction, CreateCacheSettingInput, DeleteCacheSettingInput, GetCacheSettingInput,
    ListCacheSettingsInput, UpdateCacheSettingInput,
};
use cdn_api::rest::resources::kv_store::{CreateKvStoreInput, DeleteKvStoreInput};
use cdn_api::rest::resources::product::{EnableProductInput, ProductId};
use cdn_api::rest::resources::rate_limiter::GetRateLimiterInput;
use cdn_api::{ApiError, Compatibool, HttpError, RequestOptions, ValidationError};
use common::{client_for, form_pairs, EchoForm};
use serde_json::json;
use wiremock::matchers::{any, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Pre-flight Validation Tests
// ============================================================================

#[tokio::test]
async fn test_validation_failure_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let missing_everything = GetCacheSettingInput::default();
    let result = client.execute(&missing_everything).await;
    assert!(matches!(
        result,
        Err(ApiError::Validation(ValidationError::MissingServiceId))
    ));

    let missing_version = GetCacheSettingInput {
        service_id: "abc".to_string(),
        ..Default::default()
    };
    let result = client.execute(&missing_version).await;
    assert!(matches!(
        result,
        Err(ApiError::Validation(ValidationError::MissingServiceVersion))
    ));

    let missing_name = GetCacheSettingInput {
        service_id: "abc".to_string(),
        service_version: 1,
        name: String::new(),
    };
    let result = client.execute(&missing_name).await;
    assert!(matches!(
        result,
        Err(ApiError::Validation(ValidationError::MissingName))
    ));

    let missing_id = GetRateLimiterInput { id: String::new() };
    let result = client.execute(&missing_id).await;
    assert!(matches!(
        result,
        Err(ApiError::Validation(ValidationError::MissingId))
    ));
}

// ============================================================================
// Request Encoding and Round Trip Tests
// ============================================================================

#[tokio::test]
async fn test_create_then_read_cache_setting_round_trips_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/service/abc/version/3/cache_settings"))
        .respond_with(EchoForm {
            extra: json!({"service_id": "abc", "version": 3}),
        })
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/service/abc/version/3/cache_settings/static%20assets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "static assets",
            "action": "pass",
            "ttl": "3600",
            "service_id": "abc",
            "version": "3",
            "created_at": "2024-01-15T10:30:00Z",
            "deleted_at": null,
            "some_new_field": {"ignored": true}
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let created = client
        .execute(&CreateCacheSettingInput {
            service_id: "abc".to_string(),
            service_version: 3,
            name: Some("static assets".to_string()),
            action: Some(CacheSettingAction::Pass),
            ttl: Some(3600),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.name.as_deref(), Some("static assets"));
    assert_eq!(created.action, Some(CacheSettingAction::Pass));
    assert_eq!(created.ttl, Some(3600));
    assert_eq!(created.service_version, Some(3));

    let fetched = client
        .execute(&GetCacheSettingInput {
            service_id: "abc".to_string(),
            service_version: 3,
            name: "static assets".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(fetched.name, created.name);
    assert!(fetched.created_at.is_some());
    assert!(fetched.deleted_at.is_none());
}

#[tokio::test]
async fn test_update_sends_new_name_as_name() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/service/abc/version/3/cache_settings/old"))
        .and(body_string("name=new&stale_ttl=0"))
        .respond_with(EchoForm { extra: json!({}) })
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let updated = client
        .execute(&UpdateCacheSettingInput {
            service_id: "abc".to_string(),
            service_version: 3,
            name: "old".to_string(),
            new_name: Some("new".to_string()),
            stale_ttl: Some(0),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.name.as_deref(), Some("new"));
    assert_eq!(updated.stale_ttl, Some(0));
}

#[tokio::test]
async fn test_list_is_sorted_by_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/service/abc/version/1/cache_settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "zeta"},
            {"name": "alpha"},
            {"name": "mu"}
        ])))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let settings = client
        .execute(&ListCacheSettingsInput {
            service_id: "abc".to_string(),
            service_version: 1,
        })
        .await
        .unwrap();
    let names: Vec<_> = settings.iter().filter_map(|s| s.name.as_deref()).collect();
    assert_eq!(names, vec!["alpha", "mu", "zeta"]);
}

// ============================================================================
// Error Classification Tests
// ============================================================================

#[tokio::test]
async fn test_not_found_is_reported_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"msg": "Record not found", "detail": "Couldn't find CacheSetting"}))
                .insert_header("fastly-request-id", "req-404"),
        )
        .mount(&server)
        .await;
    let client = client_for(&server);

    let error = client
        .execute(&GetCacheSettingInput {
            service_id: "abc".to_string(),
            service_version: 1,
            name: "gone".to_string(),
        })
        .await
        .unwrap_err();
    assert!(error.is_not_found());
    assert_eq!(error.status_code(), Some(404));
    let ApiError::Http(HttpError::Response(response)) = error else {
        panic!("expected a response error");
    };
    assert_eq!(response.request_id.as_deref(), Some("req-404"));
    assert!(response.message.contains("Record not found"));
}

#[tokio::test]
async fn test_compat_bool_is_sent_only_when_set() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/service/abc/version/2/backend"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .respond_with(EchoForm { extra: json!({}) })
        .expect(2)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let disabled = client
        .execute(&CreateBackendInput {
            service_id: "abc".to_string(),
            service_version: 2,
            name: Some("origin".to_string()),
            settings: BackendSettings {
                use_ssl: Some(Compatibool(false)),
                ..Default::default()
            },
        })
        .await
        .unwrap();
    assert_eq!(disabled.use_ssl, Some(Compatibool(false)));

    let unset = client
        .execute(&CreateBackendInput {
            service_id: "abc".to_string(),
            service_version: 2,
            name: Some("origin".to_string()),
            settings: BackendSettings::default(),
        })
        .await
        .unwrap();
    assert_eq!(unset.use_ssl, None);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        form_pairs(&requests[0].body),
        vec![
            ("name".to_string(), "origin".to_string()),
            ("use_ssl".to_string(), "0".to_string()),
        ]
    );
    assert_eq!(
        form_pairs(&requests[1].body),
        vec![("name".to_string(), "origin".to_string())]
    );
}

#[tokio::test]
async fn test_status_envelope_error_is_not_acknowledged() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/service/abc/version/1/cache_settings/edge"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "error", "message": "version is locked"})),
        )
        .mount(&server)
        .await;
    let client = client_for(&server);

    let error = client
        .execute(&DeleteCacheSettingInput {
            service_id: "abc".to_string(),
            service_version: 1,
            name: "edge".to_string(),
        })
        .await
        .unwrap_err();
    let ApiError::NotAcknowledged { status, message } = error else {
        panic!("expected NotAcknowledged");
    };
    assert_eq!(status.as_deref(), Some("error"));
    assert_eq!(message.as_deref(), Some("version is locked"));
}

#[tokio::test]
async fn test_status_envelope_ok_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    client
        .execute(&DeleteCacheSettingInput {
            service_id: "abc".to_string(),
            service_version: 1,
            name: "edge".to_string(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_enabling_twice_reports_already_enabled() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/enabled-products/fanout/services/abc"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({"msg": "Conflict"})))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let error = client
        .execute(&EnableProductInput {
            product: ProductId::Fanout,
            service_id: "abc".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        ApiError::AlreadyEnabled { product: "fanout" }
    ));
    assert_eq!(error.status_code(), Some(409));
}

// ============================================================================
// JSON Body Tests
// ============================================================================

#[tokio::test]
async fn test_kv_store_create_sends_json_and_location() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/resources/stores/kv"))
        .and(query_param("location", "EU"))
        .and(header("content-type", "application/json"))
        .and(body_string(r#"{"name":"sessions"}"#))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "kv123",
            "name": "sessions",
            "created_at": "2024-03-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/resources/stores/kv/kv123"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let store = client
        .execute(&CreateKvStoreInput {
            name: "sessions".to_string(),
            location: Some("EU".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(store.id.as_deref(), Some("kv123"));

    client
        .execute(&DeleteKvStoreInput {
            store_id: "kv123".to_string(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_malformed_success_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"name": 42}"#))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let error = client
        .execute(&GetCacheSettingInput {
            service_id: "abc".to_string(),
            service_version: 1,
            name: "edge".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(error, ApiError::Decode(_)));
}

// ============================================================================
// Headers and Request Options Tests
// ============================================================================

#[tokio::test]
async fn test_request_options_and_default_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/service/abc/version/1/cache_settings"))
        .and(header("fastly-key", "test-token"))
        .and(header("x-trace", "on"))
        .and(query_param("filter", "edge"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let options = RequestOptions::new()
        .header("X-Trace", "on")
        .param("filter", "edge");
    let settings = client
        .execute_with(
            &ListCacheSettingsInput {
                service_id: "abc".to_string(),
                service_version: 1,
            },
            &options,
        )
        .await
        .unwrap();
    assert!(settings.is_empty());
}

#[tokio::test]
async fn test_per_call_header_replaces_default_ignoring_case() {
    let server = MockServer::start().await;
    // the header matcher compares the full value list, so a leftover
    // default would make this mock miss
    Mock::given(method("GET"))
        .and(path("/service/abc/version/1/cache_settings"))
        .and(header("fastly-key", "per-call-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let options = RequestOptions::new().header("fastly-key", "per-call-token");
    client
        .execute_with(
            &ListCacheSettingsInput {
                service_id: "abc".to_string(),
                service_version: 1,
            },
            &options,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_rate_limit_headers_are_parsed() {
    use cdn_api::{HttpMethod, HttpRequest};

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .insert_header("fastly-ratelimit-remaining", "998")
                .insert_header("fastly-ratelimit-reset", "1700000000"),
        )
        .mount(&server)
        .await;
    let client = client_for(&server);

    let request = HttpRequest::builder(HttpMethod::Get, "/service/abc/version/1/backend")
        .build()
        .unwrap();
    let response = client.http_client().request(request).await.unwrap();
    let limit = response.rate_limit.unwrap();
    assert_eq!(limit.remaining, 998);
    assert_eq!(limit.reset.unwrap().timestamp(), 1_700_000_000);
}
