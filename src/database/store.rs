use async_trait::async_trait;

use crate::database::manager::DatabaseError;
use crate::database::models::note::{NewNote, Note, NoteChanges};
use crate::types::{NoteId, UserId};

/// Persistence operations the note handlers depend on.
///
/// Implementations own their concurrency control: each call is atomic on its
/// own, and nothing here spans more than one note.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// All notes owned by `user`, oldest first
    async fn find_by_user(&self, user: UserId) -> Result<Vec<Note>, DatabaseError>;

    async fn find_by_id(&self, id: NoteId) -> Result<Option<Note>, DatabaseError>;

    /// Persist a new note, assigning its id and date
    async fn create(&self, note: NewNote) -> Result<Note, DatabaseError>;

    /// Apply `changes` and return the updated note, or `None` if it no longer exists
    async fn update_by_id(
        &self,
        id: NoteId,
        changes: NoteChanges,
    ) -> Result<Option<Note>, DatabaseError>;

    /// Remove the note and return it, or `None` if it did not exist
    async fn delete_by_id(&self, id: NoteId) -> Result<Option<Note>, DatabaseError>;

    /// Cheap liveness probe for `/health`
    async fn ping(&self) -> Result<(), DatabaseError>;
}
