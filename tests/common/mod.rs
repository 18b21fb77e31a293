//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use cdn_api::{ClientConfig, HostUrl, RestClient};
use serde_json::{json, Map, Value};
use wiremock::{MockServer, Request, Respond, ResponseTemplate};

/// Builds a client pointed at the mock server.
pub fn client_for(server: &MockServer) -> RestClient {
    let config = ClientConfig::builder()
        .api_host(HostUrl::new(server.uri()).unwrap())
        .default_header("Fastly-Key", "test-token")
        .build()
        .unwrap();
    RestClient::new(&config).unwrap()
}

/// Decodes an `application/x-www-form-urlencoded` body into pairs.
pub fn form_pairs(body: &[u8]) -> Vec<(String, String)> {
    let body = String::from_utf8_lossy(body);
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let decode = |s: &str| {
                urlencoding::decode(&s.replace('+', " "))
                    .unwrap()
                    .into_owned()
            };
            (decode(key), decode(value))
        })
        .collect()
}

/// Answers with the submitted form fields as a JSON object, the way the
/// API echoes a created or updated resource.
pub struct EchoForm {
    /// Fields merged into every answer.
    pub extra: Value,
}

impl Respond for EchoForm {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut object = Map::new();
        for (key, value) in form_pairs(&request.body) {
            object.insert(key, Value::String(value));
        }
        if let Value::Object(extra) = &self.extra {
            for (key, value) in extra {
                object.insert(key.clone(), value.clone());
            }
        }
        ResponseTemplate::new(200).set_body_json(Value::Object(object))
    }
}

/// Serves `items` as a cursor listing. The cursor is the offset of the
/// next page, and `limit` comes from the query string.
#[derive(Clone)]
pub struct PagedFixture {
    pub items: Vec<Value>,
    pub hits: Arc<AtomicUsize>,
}

impl PagedFixture {
    pub fn new(names: &[&str]) -> Self {
        Self {
            items: names
                .iter()
                .map(|name| json!({"id": format!("id-{name}"), "name": name}))
                .collect(),
            hits: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Respond for PagedFixture {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        self.hits.fetch_add(1, Ordering::SeqCst);
        let query: HashMap<String, String> = request.url.query_pairs().into_owned().collect();
        let start: usize = query
            .get("cursor")
            .and_then(|c| c.parse().ok())
            .unwrap_or(0);
        let limit: usize = query
            .get("limit")
            .and_then(|l| l.parse().ok())
            .unwrap_or(self.items.len());
        let end = (start + limit).min(self.items.len());
        let next_cursor = (end < self.items.len()).then(|| end.to_string());
        ResponseTemplate::new(200).set_body_json(json!({
            "data": self.items[start..end].to_vec(),
            "meta": {"next_cursor": next_cursor, "limit": limit},
        }))
    }
}
