//! trivia-server: HTTP API over a question store
//!
//! Wires the pure selection logic from `trivia-core` to a store
//! (Postgres or in-memory) and exposes it as a JSON API.

pub mod db;
pub mod http;
pub mod store;

pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
pub use store::{MemoryStore, PgStore, StoreError, TriviaStore, DEFAULT_CATEGORIES};
