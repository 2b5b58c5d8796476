//! Fake LoadMaster appliance for client tests
//!
//! Serves `/accessv2` on a random local port, records every posted JSON body
//! and answers with a configured status and body.

#![allow(dead_code)]

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use loadmaster_client::{ClientConfig, Credentials, LoadMasterClient};
use serde_json::Value;
use std::sync::{Arc, Mutex};

#[derive(Debug)]
struct Reply {
    status: StatusCode,
    body: String,
}

#[derive(Debug, Clone)]
struct FakeState {
    requests: Arc<Mutex<Vec<Value>>>,
    reply: Arc<Reply>,
}

/// A running fake appliance
#[derive(Debug)]
pub struct FakeAppliance {
    pub url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl FakeAppliance {
    /// Start a fake answering every command with `200` and `body`
    pub async fn start(body: Value) -> Self {
        Self::start_raw(StatusCode::OK, body.to_string()).await
    }

    /// Start a fake answering with a raw status and body
    pub async fn start_raw(status: StatusCode, body: impl Into<String>) -> Self {
        init_tracing();

        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            requests: requests.clone(),
            reply: Arc::new(Reply {
                status,
                body: body.into(),
            }),
        };
        let app = Router::new().route("/accessv2", post(handle)).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}", addr),
            requests,
        }
    }

    /// Client using an API key
    pub fn client(&self) -> LoadMasterClient {
        LoadMasterClient::with_api_key(&self.url, "test-key").unwrap()
    }

    /// Client with explicit credentials
    pub fn client_with(&self, credentials: Credentials) -> LoadMasterClient {
        LoadMasterClient::new(ClientConfig::new(&self.url, credentials)).unwrap()
    }

    /// Bodies posted so far
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }

    /// The single body posted so far
    pub fn last_request(&self) -> Value {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0].clone()
    }
}

async fn handle(State(state): State<FakeState>, body: String) -> (StatusCode, [(&'static str, &'static str); 1], String) {
    let parsed = serde_json::from_str(&body).unwrap_or(Value::String(body));
    state.requests.lock().unwrap().push(parsed);
    (
        state.reply.status,
        [("content-type", "application/json")],
        state.reply.body.clone(),
    )
}

/// Successful status envelope
pub fn ok_envelope() -> Value {
    serde_json::json!({ "code": 200, "message": "Command successfully executed", "status": "ok" })
}

/// Successful envelope extended with `fields`
pub fn ok_with(fields: Value) -> Value {
    let mut body = ok_envelope();
    if let (Some(body), Value::Object(fields)) = (body.as_object_mut(), fields) {
        body.extend(fields);
    }
    body
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
