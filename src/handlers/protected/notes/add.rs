use axum::{
    extract::{Extension, State},
    Json,
};
use serde::Deserialize;

use crate::database::{NewNote, Note};
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// Body of POST /api/notes/addnote. Any other field, `user` included, is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct AddNoteRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub tag: Option<String>,
}

/// POST /api/notes/addnote - create a note owned by the caller
pub async fn add_note(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    JsonBody(body): JsonBody<AddNoteRequest>,
) -> Result<Json<Note>, ApiError> {
    let candidate = NewNote::new(auth.user_id, body.title, body.description, body.tag);
    candidate
        .validate()
        .map_err(|fields| ApiError::validation_error("Validation failed", Some(fields)))?;

    let note = state.store().create(candidate).await?;
    tracing::debug!("User {} ({}) created note {}", auth.user, auth.user_id, note.id);

    Ok(Json(note))
}
