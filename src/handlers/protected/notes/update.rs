use axum::{
    extract::{Extension, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::database::{Note, NoteChanges};
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::middleware::AuthUser;
use crate::state::AppState;

use super::utils::{load_owned_note, not_found};

/// Body of PUT /api/notes/updatenote/:id. Absent, null and empty fields are skipped.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tag: Option<String>,
}

impl From<UpdateNoteRequest> for NoteChanges {
    fn from(body: UpdateNoteRequest) -> Self {
        NoteChanges::from_fields(body.title, body.description, body.tag)
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateNoteResponse {
    pub note: Note,
}

/// PUT /api/notes/updatenote/:id - partially update one of the caller's notes
pub async fn update_note(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<UpdateNoteRequest>,
) -> Result<Json<UpdateNoteResponse>, ApiError> {
    let changes = NoteChanges::from(body);

    let note = load_owned_note(state.store(), &id, &auth).await?;
    if changes.is_empty() {
        return Ok(Json(UpdateNoteResponse { note }));
    }

    // A concurrent delete can remove the note between lookup and update
    let note = state
        .store()
        .update_by_id(note.id, changes)
        .await?
        .ok_or_else(not_found)?;
    tracing::debug!("User {} ({}) updated note {}", auth.user, auth.user_id, note.id);

    Ok(Json(UpdateNoteResponse { note }))
}
