// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Route Prefix: / and /health

pub mod status;

pub use status::{health, root};
