use axum::{
    extract::{Extension, State},
    Json,
};

use crate::database::Note;
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /api/notes/fetchallnotes - every note owned by the caller
pub async fn fetch_all_notes(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = state.store().find_by_user(auth.user_id).await?;
    Ok(Json(notes))
}
