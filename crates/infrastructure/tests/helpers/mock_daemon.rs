#![allow(dead_code)]
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::Value;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, RwLock};

#[derive(Clone)]
struct Reply {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
}

#[derive(Clone, Default)]
struct MockState {
    replies: Arc<RwLock<HashMap<String, Reply>>>,
    received: Arc<RwLock<Vec<Value>>>,
}

/// In-process stand-in for the coin daemon's `/json_rpc` endpoint.
///
/// Replies are configured per JSON-RPC method; unknown methods get a
/// "Method not found" error envelope.
pub struct MockDaemon {
    addr: SocketAddr,
    state: MockState,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDaemon {
    pub async fn start() -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let state = MockState::default();

        let app = Router::new()
            .route("/json_rpc", post(handle))
            .with_state(state.clone());

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(Self {
            addr,
            state,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}/json_rpc", self.addr)
    }

    pub async fn reply(&self, method: &str, status: StatusCode, body: Value) {
        self.reply_raw(method, status, body.to_string()).await;
    }

    pub async fn reply_raw(&self, method: &str, status: StatusCode, body: impl Into<String>) {
        self.state.replies.write().await.insert(
            method.to_string(),
            Reply {
                status,
                body: body.into(),
                delay: None,
            },
        );
    }

    pub async fn reply_after(&self, method: &str, delay: Duration, body: Value) {
        self.state.replies.write().await.insert(
            method.to_string(),
            Reply {
                status: StatusCode::OK,
                body: body.to_string(),
                delay: Some(delay),
            },
        );
    }

    pub async fn received(&self) -> Vec<Value> {
        self.state.received.read().await.clone()
    }
}

impl Drop for MockDaemon {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn handle(State(state): State<MockState>, Json(request): Json<Value>) -> (StatusCode, String) {
    let method = request
        .get("method")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    state.received.write().await.push(request);

    let reply = state.replies.read().await.get(&method).cloned();
    match reply {
        Some(reply) => {
            if let Some(delay) = reply.delay {
                tokio::time::sleep(delay).await;
            }
            (reply.status, reply.body)
        }
        None => (
            StatusCode::OK,
            serde_json::json!({
                "jsonrpc": "2.0",
                "id": "0",
                "error": {"code": -32601, "message": "Method not found"}
            })
            .to_string(),
        ),
    }
}
