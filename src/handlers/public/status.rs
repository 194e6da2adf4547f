use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

/// GET / - service name, version and endpoint map
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Notes API (Rust)",
            "version": version,
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "fetchallnotes": "GET /api/notes/fetchallnotes (protected)",
                "addnote": "POST /api/notes/addnote (protected)",
                "updatenote": "PUT /api/notes/updatenote/:id (protected)",
                "deletenote": "DELETE /api/notes/deletenote/:id (protected)",
            }
        }
    }))
}

/// GET /health - 200 when the note store answers, 503 otherwise
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    if let Err(e) = state.store().ping().await {
        tracing::error!("Health check failed: {}", e);
        return Err(ApiError::service_unavailable("Note store unavailable"));
    }

    Ok(Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
            "store": "ok"
        }
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use crate::testing::{FailingNoteStore, TestContext};

    #[tokio::test]
    async fn root_lists_note_endpoints() {
        let Json(body) = root().await;
        assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
        assert!(body["data"]["endpoints"]["addnote"].is_string());
    }

    #[tokio::test]
    async fn health_is_ok_for_memory_store() {
        let ctx = TestContext::new();
        let Json(body) = health(State(ctx.state)).await.unwrap();
        assert_eq!(body["data"]["status"], "ok");
    }

    #[tokio::test]
    async fn health_is_unavailable_when_store_fails() {
        let err = health(State(FailingNoteStore::state())).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.error_code(), "SERVICE_UNAVAILABLE");
    }
}
