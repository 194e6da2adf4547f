// handlers/protected/notes - the four note endpoints mounted under /api/notes
//
// Every handler here runs behind jwt_auth_middleware and receives the caller
// as Extension<AuthUser>. Update and delete share the lookup-then-ownership
// sequence in utils.rs.

pub mod add;
pub mod delete;
pub mod fetch_all;
pub mod update;
pub mod utils;

// Re-export handler functions for use in routing
pub use add::add_note;
pub use delete::delete_note;
pub use fetch_all::fetch_all_notes;
pub use update::update_note;
