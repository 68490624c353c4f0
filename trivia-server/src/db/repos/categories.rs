//! Category repository

use sqlx::{FromRow, PgPool};
use trivia_core::Category;

use crate::store::StoreError;

/// Category record from database
#[derive(Debug, Clone, FromRow)]
struct CategoryRow {
    id: i64,
    #[sqlx(rename = "type")]
    kind: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            kind: row.kind,
        }
    }
}

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all categories, ascending by id.
    pub async fn list(&self) -> Result<Vec<Category>, StoreError> {
        let rows: Vec<CategoryRow> = sqlx::query_as("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    /// Get a single category by id.
    pub async fn get(&self, id: i64) -> Result<Option<Category>, StoreError> {
        let row: Option<CategoryRow> = sqlx::query_as("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.map(Category::from))
    }
}
