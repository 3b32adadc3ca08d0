#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header::AUTHORIZATION},
};
use chrono::Utc;
use serde_json::{Value, json};
use spotact::{
    actions::ActionContext, config::Settings, management::TokenManager, spotify::MusicClient,
    utils,
};

pub const TEST_TOKEN: &str = "test-access-token";

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: String,
    pub body: String,
    pub authorization: Option<String>,
}

struct Rule {
    method: Method,
    path: String,
    query_contains: Option<String>,
    status: StatusCode,
    body: Value,
}

#[derive(Default)]
struct FakeState {
    rules: Mutex<Vec<Rule>>,
    requests: Mutex<Vec<Recorded>>,
}

/// In-process stand-in for the Spotify Web API and token endpoint.
///
/// Responses are registered per method and path (optionally narrowed by a
/// query substring); the first matching rule answers. Unmatched requests get
/// a 404. Every request is recorded.
pub struct FakeSpotify {
    pub base_url: String,
    state: Arc<FakeState>,
}

impl FakeSpotify {
    pub async fn start() -> Self {
        let state = Arc::new(FakeState::default());
        let app = Router::new()
            .fallback(handle)
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake spotify");
        let addr = listener.local_addr().expect("fake spotify address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake spotify server");
        });

        FakeSpotify {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn on(&self, method: Method, path: &str, status: u16, body: Value) -> &Self {
        self.push_rule(method, path, None, status, body)
    }

    pub fn on_query(
        &self,
        method: Method,
        path: &str,
        query_contains: &str,
        status: u16,
        body: Value,
    ) -> &Self {
        self.push_rule(method, path, Some(query_contains.to_string()), status, body)
    }

    fn push_rule(
        &self,
        method: Method,
        path: &str,
        query_contains: Option<String>,
        status: u16,
        body: Value,
    ) -> &Self {
        self.state.rules.lock().unwrap().push(Rule {
            method,
            path: path.to_string(),
            query_contains,
            status: StatusCode::from_u16(status).unwrap(),
            body,
        });
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, method: Method, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests_to(method, path).len()
    }

    pub fn settings(&self) -> Settings {
        Settings {
            api_url: format!("{}/v1", self.base_url),
            token_url: format!("{}/api/token", self.base_url),
            refresh_token: "refresh-secret".to_string(),
            client_credential: utils::encode_client_credential("client", "secret"),
            market: "RU".to_string(),
            server_addr: "127.0.0.1:0".to_string(),
            http_timeout: Duration::from_secs(5),
        }
    }

    /// Action context whose token cache already holds a valid token.
    pub fn context(&self) -> ActionContext {
        let settings = self.settings();
        let http = utils::build_http_client(settings.http_timeout).unwrap();
        let tokens = TokenManager::new(http.clone(), &settings)
            .with_token(TEST_TOKEN, Utc::now() + chrono::Duration::hours(1));
        ActionContext::from_parts(http, Arc::new(tokens), &settings)
    }

    pub fn music_client(&self) -> MusicClient {
        let settings = self.settings();
        let http = utils::build_http_client(settings.http_timeout).unwrap();
        MusicClient::new(http, &settings.api_url, TEST_TOKEN.to_string())
    }
}

async fn handle(
    State(state): State<Arc<FakeState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let path = uri.path().to_string();
    let query = uri.query().unwrap_or_default().to_string();

    state.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        query: query.clone(),
        body,
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });

    let rules = state.rules.lock().unwrap();
    let rule = rules.iter().find(|r| {
        r.method == method
            && r.path == path
            && r.query_contains
                .as_ref()
                .is_none_or(|needle| query.contains(needle.as_str()))
    });

    match rule {
        Some(rule) if rule.body.is_null() => (rule.status, String::new()),
        Some(rule) => (rule.status, rule.body.to_string()),
        None => (
            StatusCode::NOT_FOUND,
            json!({"error": {"status": 404, "message": "not mocked"}}).to_string(),
        ),
    }
}

pub fn devices(ids: &[&str]) -> Value {
    json!({
        "devices": ids.iter().map(|id| json!({
            "id": id,
            "is_active": true,
            "name": format!("device {}", id),
            "type": "Computer"
        })).collect::<Vec<_>>()
    })
}

pub fn track_page(uris: &[&str]) -> Value {
    json!({
        "tracks": {
            "items": uris.iter().map(|uri| json!({"id": "t", "name": "track", "uri": uri})).collect::<Vec<_>>()
        }
    })
}

pub fn playlist_page(uris: &[&str]) -> Value {
    json!({
        "playlists": {
            "items": uris.iter().map(|uri| json!({"id": "p", "name": "playlist", "uri": uri})).collect::<Vec<_>>()
        }
    })
}
