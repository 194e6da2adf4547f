use crate::database::{Note, NoteStore};
use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::types::{NoteId, UserId};

pub fn not_found() -> ApiError {
    ApiError::not_found("Not Found")
}

/// Only the owner may change or remove a note
pub fn ensure_owner(note: &Note, requester: UserId) -> Result<(), ApiError> {
    if note.user == requester {
        Ok(())
    } else {
        Err(ApiError::unauthorized("Not Allowed"))
    }
}

/// Look a note up by its path id and check the caller owns it.
///
/// An id that is not a UUID cannot name a note, so it is reported as missing.
pub async fn load_owned_note(
    store: &dyn NoteStore,
    raw_id: &str,
    requester: &AuthUser,
) -> Result<Note, ApiError> {
    let id: NoteId = raw_id.parse().map_err(|_| not_found())?;
    let note = store.find_by_id(id).await?.ok_or_else(not_found)?;

    if let Err(err) = ensure_owner(&note, requester.user_id) {
        tracing::warn!(
            "User {} ({}) denied access to note {}",
            requester.user,
            requester.user_id,
            note.id
        );
        return Err(err);
    }

    Ok(note)
}
