// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Route Prefix: /api/notes/*
// Middleware: jwt_auth_middleware inserts AuthUser into request extensions

pub mod notes;

pub use notes::*;
