pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;

pub use manager::{DatabaseError, DatabaseManager};
pub use memory::MemoryNoteStore;
pub use models::note::{NewNote, Note, NoteChanges};
pub use postgres::PgNoteStore;
pub use store::NoteStore;
