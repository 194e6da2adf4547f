use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::note::{NewNote, Note, NoteChanges, NoteRow};
use crate::database::store::NoteStore;
use crate::types::{NoteId, UserId};

const NOTE_COLUMNS: &str = "id, user_id, title, description, tag, date";

/// PostgreSQL-backed note store
#[derive(Debug, Clone)]
pub struct PgNoteStore {
    pool: PgPool,
}

impl PgNoteStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteStore for PgNoteStore {
    async fn find_by_user(&self, user: UserId) -> Result<Vec<Note>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM notes WHERE user_id = $1 ORDER BY date, id",
            NOTE_COLUMNS
        );
        let rows = sqlx::query_as::<_, NoteRow>(&sql)
            .bind(user.as_uuid())
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Note::from).collect())
    }

    async fn find_by_id(&self, id: NoteId) -> Result<Option<Note>, DatabaseError> {
        let sql = format!("SELECT {} FROM notes WHERE id = $1", NOTE_COLUMNS);
        let row = sqlx::query_as::<_, NoteRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Note::from))
    }

    async fn create(&self, note: NewNote) -> Result<Note, DatabaseError> {
        let sql = format!(
            "INSERT INTO notes (id, user_id, title, description, tag) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            NOTE_COLUMNS
        );
        let row = sqlx::query_as::<_, NoteRow>(&sql)
            .bind(NoteId::new_v4().as_uuid())
            .bind(note.user.as_uuid())
            .bind(note.title)
            .bind(note.description)
            .bind(note.tag)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn update_by_id(
        &self,
        id: NoteId,
        changes: NoteChanges,
    ) -> Result<Option<Note>, DatabaseError> {
        // One statement, so a concurrent update lands whole or not at all
        let sql = format!(
            "UPDATE notes SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                tag = COALESCE($4, tag) \
             WHERE id = $1 RETURNING {}",
            NOTE_COLUMNS
        );
        let row = sqlx::query_as::<_, NoteRow>(&sql)
            .bind(id.as_uuid())
            .bind(changes.title)
            .bind(changes.description)
            .bind(changes.tag)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Note::from))
    }

    async fn delete_by_id(&self, id: NoteId) -> Result<Option<Note>, DatabaseError> {
        let sql = format!("DELETE FROM notes WHERE id = $1 RETURNING {}", NOTE_COLUMNS);
        let row = sqlx::query_as::<_, NoteRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Note::from))
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
