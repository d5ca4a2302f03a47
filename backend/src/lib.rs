//! SoloPro Backend service

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Document store client
pub mod document_store;

/// Route handlers
pub mod routes;

/// HTTP server setup
pub mod server;

/// Shared types
pub mod types;
