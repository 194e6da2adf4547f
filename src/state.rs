//! Application state shared across handlers.

use std::sync::Arc;

use crate::database::NoteStore;

/// Cloneable state extracted in handlers with `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn NoteStore>,
    jwt_secret: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn NoteStore>, jwt_secret: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            jwt_secret: jwt_secret.into(),
        }
    }

    pub fn store(&self) -> &dyn NoteStore {
        self.store.as_ref()
    }

    /// HS256 secret used to verify bearer tokens
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
