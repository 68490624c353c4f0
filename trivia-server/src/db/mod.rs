//! Database layer - connection pool, schema and repositories
//!
//! - Connection pool (default 5 connections)
//! - Every list query is ORDER BY id so pagination is stable
//! - Rely on DB constraints (foreign key, unique type), no check-then-insert

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::{CategoryRepo, QuestionRepo};
