#![allow(dead_code)]

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use jd_union_rs::{response_field_name, JdUnionClient, Sign};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const APP_KEY: &str = "test-app-key";
pub const SECRET: &str = "test-secret";

/// A parsed call as the stub server received it.
#[derive(Debug, Clone)]
pub struct ReceivedCall {
    /// Query parameters in the order they were sent.
    pub query: Vec<(String, String)>,
}

impl ReceivedCall {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn method(&self) -> &str {
        self.get("method").unwrap_or_default()
    }

    pub fn param_json(&self) -> Value {
        serde_json::from_str(self.get("360buy_param_json").unwrap_or("null")).unwrap()
    }

    /// Recomputes the signature the way the vendor does and compares it to `sign`.
    pub fn sign_is_valid(&self, secret: &str) -> bool {
        let unsigned: BTreeMap<&str, &str> = self
            .query
            .iter()
            .filter(|(k, _)| k != "sign")
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        let mut canonical = String::from(secret);
        for (key, value) in unsigned {
            canonical.push_str(key);
            canonical.push_str(value);
        }
        canonical.push_str(secret);
        Some(Sign::from_canonical(&canonical).hash.as_str()) == self.get("sign")
    }
}

/// What the stub answers with.
pub struct Reply {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl Reply {
    pub fn json(body: Value) -> Self {
        Reply {
            status: 200,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Reply {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Answers every call with the success envelope of its own method, echoing the method,
/// the business parameters and whether the signature checked out.
pub fn echo(call: &ReceivedCall) -> Reply {
    let mut body = serde_json::Map::new();
    body.insert(
        response_field_name(call.method()),
        json!({
            "code": "0",
            "method": call.method(),
            "param_json": call.param_json(),
            "sign_ok": call.sign_is_valid(SECRET),
        }),
    );
    Reply::json(Value::Object(body))
}

type Handler = Arc<dyn Fn(&ReceivedCall) -> Reply + Send + Sync>;

/// An in-process router endpoint answering each call through a handler.
pub struct StubServer {
    addr: SocketAddr,
}

impl StubServer {
    pub async fn start<F>(handler: F) -> StubServer
    where
        F: Fn(&ReceivedCall) -> Reply + Send + Sync + 'static,
    {
        let handler: Handler = Arc::new(handler);
        let app = Router::new()
            .route("/routerjson", get(routerjson))
            .with_state(handler);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        StubServer { addr }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/routerjson", self.addr)
    }

    pub fn client(&self) -> JdUnionClient {
        JdUnionClient::builder()
            .app_key(APP_KEY)
            .secret(SECRET)
            .endpoint(&self.endpoint())
            .timeout(Duration::from_secs(5))
            .build()
    }
}

async fn routerjson(
    State(handler): State<Handler>,
    Query(query): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    let reply = handler(&ReceivedCall { query });
    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }

    let status = StatusCode::from_u16(reply.status).unwrap();
    (
        status,
        [(header::CONTENT_TYPE, "application/json;charset=utf-8")],
        reply.body,
    )
}
