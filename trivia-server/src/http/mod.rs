//! HTTP server layer
//!
//! Axum server with:
//! - CORS (any origin, trivia methods and headers)
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses for every failure, including unknown routes

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
