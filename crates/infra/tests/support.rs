//! Shared helpers for integration tests against a mock management API.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use logto_domain::LogtoConfig;
use logto_infra::LogtoClient;
use serde_json::{json, Map, Value};
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{basic_auth, bearer_token, method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const APP_ID: &str = "app-id";
pub const APP_SECRET: &str = "app-secret";
pub const TOKEN: &str = "integration-token";

/// Install a test subscriber once; set `RUST_LOG` to see client logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Configuration pointing at `server` over plain HTTP.
pub fn config_for(server: &MockServer) -> LogtoConfig {
    LogtoConfig::new(server.address().to_string(), APP_ID, APP_SECRET)
        .expect("valid config")
        .with_scheme("http")
}

/// Serve [`TOKEN`] from `oidc/token` for the test application credentials.
pub async fn mount_token_endpoint(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oidc/token"))
        .and(basic_auth(APP_ID, APP_SECRET))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TOKEN,
            "expires_in": 3600,
            "token_type": "Bearer",
            "scope": "all"
        })))
        .mount(server)
        .await;
}

/// Client with a working token endpoint already mounted on `server`.
pub async fn client_for(server: &MockServer) -> LogtoClient {
    init_tracing();
    mount_token_endpoint(server).await;
    LogtoClient::new(config_for(server)).expect("client")
}

/// Serve a CRUD collection at `/{prefix}` backed by an in-memory map.
pub async fn mount_collection(server: &MockServer, collection: InMemoryCollection) {
    let pattern = format!("^/{}(/[^/]+)?$", regex_escape(&collection.prefix));
    Mock::given(path_regex(pattern))
        .and(bearer_token(TOKEN))
        .respond_with(collection)
        .mount(server)
        .await;
}

fn regex_escape(raw: &str) -> String {
    raw.chars()
        .flat_map(|c| {
            if c.is_ascii_alphanumeric() || c == '/' || c == '_' {
                vec![c]
            } else {
                vec!['\\', c]
            }
        })
        .collect()
}

/// Stateful fake of one REST collection.
///
/// `POST /{prefix}` stores the body with a generated `id` and `tenantId`;
/// `GET`, `PATCH` and `DELETE /{prefix}/{id}` behave like the real API,
/// answering 404 for unknown ids.
pub struct InMemoryCollection {
    prefix: String,
    id_prefix: String,
    create_status: u16,
    items: Mutex<BTreeMap<String, Value>>,
    next_id: AtomicUsize,
}

impl InMemoryCollection {
    pub fn new(prefix: &str, id_prefix: &str, create_status: u16) -> Self {
        Self {
            prefix: prefix.trim_matches('/').to_string(),
            id_prefix: id_prefix.to_string(),
            create_status,
            items: Mutex::new(BTreeMap::new()),
            next_id: AtomicUsize::new(1),
        }
    }

    fn body(request: &Request) -> Map<String, Value> {
        match serde_json::from_slice(&request.body) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

impl Respond for InMemoryCollection {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let full_path = request.url.path().trim_start_matches('/');
        let id = full_path.strip_prefix(&self.prefix).unwrap_or_default().trim_start_matches('/');
        let mut items = self.items.lock().expect("collection lock");

        match (request.method.as_str(), id.is_empty()) {
            ("GET", true) => {
                ResponseTemplate::new(200).set_body_json(items.values().collect::<Vec<_>>())
            }
            ("POST", true) => {
                let n = self.next_id.fetch_add(1, Ordering::SeqCst);
                let id = format!("{}-{n}", self.id_prefix);
                let mut body = Self::body(request);
                body.insert("id".into(), Value::String(id.clone()));
                body.insert("tenantId".into(), Value::String("default".into()));
                let stored = Value::Object(body);
                items.insert(id, stored.clone());
                ResponseTemplate::new(self.create_status).set_body_json(stored)
            }
            ("GET", false) => match items.get(id) {
                Some(item) => ResponseTemplate::new(200).set_body_json(item),
                None => ResponseTemplate::new(404).set_body_string("entity not found"),
            },
            ("PATCH", false) => match items.get_mut(id) {
                Some(Value::Object(existing)) => {
                    existing.extend(Self::body(request));
                    ResponseTemplate::new(200).set_body_json(Value::Object(existing.clone()))
                }
                _ => ResponseTemplate::new(404).set_body_string("entity not found"),
            },
            ("DELETE", false) => match items.remove(id) {
                Some(_) => ResponseTemplate::new(204),
                None => ResponseTemplate::new(404).set_body_string("entity not found"),
            },
            _ => ResponseTemplate::new(405),
        }
    }
}
