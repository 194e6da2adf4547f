#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use notes_api_rust::auth::{generate_jwt, Claims};
use notes_api_rust::database::MemoryNoteStore;
use notes_api_rust::{app, AppState};

pub const TEST_JWT_SECRET: &str = "notes-integration-secret";

// ---------------------------------------------------------------------------
// In-process router
// ---------------------------------------------------------------------------

/// Router over a fresh in-memory store
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryNoteStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(MemoryNoteStore::new());
        let router = app(AppState::new(store.clone(), TEST_JWT_SECRET));
        Self { router, store }
    }

    /// Send a request and decode the JSON body (Null when empty)
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Result<(StatusCode, Value)> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        Ok((status, value))
    }
}

/// A user identity plus a bearer token for it
pub struct TestUser {
    pub id: Uuid,
    pub token: String,
}

impl TestUser {
    pub fn new(name: &str) -> Self {
        let id = Uuid::new_v4();
        let claims = Claims::new(id, name, 1).expect("valid test expiry");
        let token = generate_jwt(&claims, TEST_JWT_SECRET).expect("failed to sign test token");
        Self { id, token }
    }
}

// ---------------------------------------------------------------------------
// Spawned server binary
// ---------------------------------------------------------------------------

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // In-memory store so the smoke test needs no database
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_notes-api-rust"));
        cmd.env("NOTES_API_PORT", port.to_string())
            .env("NOTES_API_HOST", "127.0.0.1")
            .env("NOTES_STORE", "memory")
            .env("JWT_SECRET", TEST_JWT_SECRET)
            .env("APP_ENV", "development")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == reqwest::StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Spawn the server binary and wait for /health; killed when dropped
pub async fn spawn_server() -> Result<TestServer> {
    let server = TestServer::spawn()?;
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}
