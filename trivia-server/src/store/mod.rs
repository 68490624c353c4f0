//! Question store abstraction
//!
//! Every listing comes back in ascending id order. Pagination and quiz
//! selection rely on that ordering being stable.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use trivia_core::{Category, CategoryFilter, NewQuestion, Question};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Categories created by `trivia seed` and the in-memory store.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Persistence operations the HTTP layer depends on.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// Questions passing `filter`, ascending by id.
    async fn list_questions(&self, filter: CategoryFilter) -> Result<Vec<Question>, StoreError>;

    /// All categories, ascending by id.
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    /// A single category, if it exists.
    async fn get_category(&self, id: i64) -> Result<Option<Category>, StoreError>;

    /// Insert a question. Fails with `NotFound` when its category does not exist.
    async fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError>;

    /// Delete a question, returning whether it existed.
    async fn delete_question(&self, id: i64) -> Result<bool, StoreError>;
}
