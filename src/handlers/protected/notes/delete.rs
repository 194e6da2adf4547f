use axum::{
    extract::{Extension, Path, State},
    Json,
};
use serde::Serialize;

use crate::database::Note;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

use super::utils::{load_owned_note, not_found};

#[derive(Debug, Serialize)]
pub struct DeleteNoteResponse {
    #[serde(rename = "Success")]
    pub success: &'static str,
    pub note: Note,
}

/// DELETE /api/notes/deletenote/:id - remove one of the caller's notes
pub async fn delete_note(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<DeleteNoteResponse>, ApiError> {
    let note = load_owned_note(state.store(), &id, &auth).await?;

    let note = state
        .store()
        .delete_by_id(note.id)
        .await?
        .ok_or_else(not_found)?;
    tracing::debug!("User {} ({}) deleted note {}", auth.user, auth.user_id, note.id);

    Ok(Json(DeleteNoteResponse {
        success: "Note has been deleted",
        note,
    }))
}
