use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::database::{DatabaseError, MemoryNoteStore, NewNote, Note, NoteChanges, NoteStore};
use crate::types::{NoteId, UserId};
use crate::middleware::AuthUser;
use crate::state::AppState;

pub const TEST_JWT_SECRET: &str = "notes-test-secret";

/// Handler test fixture over an in-memory store
pub struct TestContext {
    pub store: Arc<MemoryNoteStore>,
    pub state: AppState,
}

impl TestContext {
    pub fn new() -> Self {
        let store = Arc::new(MemoryNoteStore::new());
        let state = AppState::new(store.clone(), TEST_JWT_SECRET);
        Self { store, state }
    }

    /// A fresh authenticated identity
    pub fn user(&self, name: &str) -> AuthUser {
        AuthUser {
            user_id: Uuid::new_v4().into(),
            user: name.to_string(),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Store whose every call fails the way an exhausted connection pool does
#[derive(Debug, Default)]
pub struct FailingNoteStore;

impl FailingNoteStore {
    /// Handler state backed by this store
    pub fn state() -> AppState {
        AppState::new(Arc::new(Self), TEST_JWT_SECRET)
    }
}

fn pool_timeout() -> DatabaseError {
    DatabaseError::Sqlx(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl NoteStore for FailingNoteStore {
    async fn find_by_user(&self, _user: UserId) -> Result<Vec<Note>, DatabaseError> {
        Err(pool_timeout())
    }

    async fn find_by_id(&self, _id: NoteId) -> Result<Option<Note>, DatabaseError> {
        Err(pool_timeout())
    }

    async fn create(&self, _note: NewNote) -> Result<Note, DatabaseError> {
        Err(pool_timeout())
    }

    async fn update_by_id(
        &self,
        _id: NoteId,
        _changes: NoteChanges,
    ) -> Result<Option<Note>, DatabaseError> {
        Err(pool_timeout())
    }

    async fn delete_by_id(&self, _id: NoteId) -> Result<Option<Note>, DatabaseError> {
        Err(pool_timeout())
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Err(pool_timeout())
    }
}
