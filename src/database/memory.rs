use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::database::manager::DatabaseError;
use crate::database::models::note::{NewNote, Note, NoteChanges};
use crate::database::store::NoteStore;
use crate::types::{NoteId, UserId};

/// In-process note store, kept in creation order.
///
/// Used by the development profile when no `DATABASE_URL` is configured, and
/// as the store behind the handler and router tests.
#[derive(Debug, Default)]
pub struct MemoryNoteStore {
    notes: RwLock<Vec<Note>>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.notes.read().await.is_empty()
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn find_by_user(&self, user: UserId) -> Result<Vec<Note>, DatabaseError> {
        let notes = self.notes.read().await;
        Ok(notes.iter().filter(|n| n.user == user).cloned().collect())
    }

    async fn find_by_id(&self, id: NoteId) -> Result<Option<Note>, DatabaseError> {
        let notes = self.notes.read().await;
        Ok(notes.iter().find(|n| n.id == id).cloned())
    }

    async fn create(&self, note: NewNote) -> Result<Note, DatabaseError> {
        // Stamp under the lock so insertion order matches date order
        let mut notes = self.notes.write().await;
        let note = Note {
            id: NoteId::new_v4(),
            user: note.user,
            title: note.title,
            description: note.description,
            tag: note.tag,
            date: Utc::now(),
        };
        notes.push(note.clone());
        Ok(note)
    }

    async fn update_by_id(
        &self,
        id: NoteId,
        changes: NoteChanges,
    ) -> Result<Option<Note>, DatabaseError> {
        let mut notes = self.notes.write().await;
        Ok(notes.iter_mut().find(|n| n.id == id).map(|note| {
            changes.apply_to(note);
            note.clone()
        }))
    }

    async fn delete_by_id(&self, id: NoteId) -> Result<Option<Note>, DatabaseError> {
        let mut notes = self.notes.write().await;
        let index = notes.iter().position(|n| n.id == id);
        Ok(index.map(|index| notes.remove(index)))
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn user() -> UserId {
        UserId::from(Uuid::new_v4())
    }

    fn new_note(user: UserId, title: &str) -> NewNote {
        NewNote::new(user, title.to_string(), "Some description".to_string(), None)
    }

    #[tokio::test]
    async fn create_assigns_id_and_keeps_owner() {
        let store = MemoryNoteStore::new();
        let owner = user();

        let a = store.create(new_note(owner, "First")).await.unwrap();
        let b = store.create(new_note(owner, "Second")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.user, owner);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn find_by_user_filters_and_keeps_creation_order() {
        let store = MemoryNoteStore::new();
        let alice = user();
        let bob = user();

        store.create(new_note(alice, "one")).await.unwrap();
        store.create(new_note(bob, "two")).await.unwrap();
        store.create(new_note(alice, "three")).await.unwrap();

        let titles: Vec<String> = store
            .find_by_user(alice)
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["one", "three"]);
        assert!(store.find_by_user(user()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn concurrent_creates_keep_date_order() {
        let store = std::sync::Arc::new(MemoryNoteStore::new());
        let owner = user();

        let tasks: Vec<_> = (0..20)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create(new_note(owner, &format!("note {}", i))).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let notes = store.find_by_user(owner).await.unwrap();
        assert_eq!(notes.len(), 20);
        assert!(notes.windows(2).all(|pair| pair[0].date <= pair[1].date));
    }

    #[tokio::test]
    async fn update_applies_only_supplied_fields() {
        let store = MemoryNoteStore::new();
        let note = store.create(new_note(user(), "Groceries")).await.unwrap();

        let changes = NoteChanges::from_fields(None, None, Some("home".into()));
        let updated = store.update_by_id(note.id, changes).await.unwrap().unwrap();

        assert_eq!(updated.tag, "home");
        assert_eq!(updated.title, note.title);
        assert_eq!(updated.description, note.description);
        assert_eq!(store.find_by_id(note.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn update_unknown_id_returns_none() {
        let store = MemoryNoteStore::new();
        let result = store
            .update_by_id(NoteId::new_v4(), NoteChanges::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_removes_once() {
        let store = MemoryNoteStore::new();
        let note = store.create(new_note(user(), "Groceries")).await.unwrap();

        let deleted = store.delete_by_id(note.id).await.unwrap();
        assert_eq!(deleted.map(|n| n.id), Some(note.id));
        assert!(store.delete_by_id(note.id).await.unwrap().is_none());
        assert!(store.find_by_id(note.id).await.unwrap().is_none());
        assert!(store.is_empty().await);
    }
}
