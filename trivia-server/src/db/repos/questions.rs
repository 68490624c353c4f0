//! Question repository
//!
//! - list: ORDER BY id, optional category predicate
//! - insert: RETURNING the assigned id; FK violation means unknown category
//! - delete: reports whether a row was removed

use sqlx::{FromRow, PgPool};
use trivia_core::{CategoryFilter, NewQuestion, Question};

use crate::store::StoreError;

/// Question record from database
#[derive(Debug, Clone, FromRow)]
struct QuestionRow {
    id: i64,
    question: String,
    answer: String,
    category: i64,
    difficulty: i32,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Self {
            id: row.id,
            question: row.question,
            answer: row.answer,
            category: row.category,
            difficulty: row.difficulty,
        }
    }
}

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List questions passing `filter`, ascending by id.
    pub async fn list(&self, filter: CategoryFilter) -> Result<Vec<Question>, StoreError> {
        let rows: Vec<QuestionRow> = match filter {
            CategoryFilter::All => {
                sqlx::query_as(
                    r#"
                    SELECT id, question, answer, category, difficulty
                    FROM questions
                    ORDER BY id
                    "#,
                )
                .fetch_all(self.pool)
                .await?
            }
            CategoryFilter::Id(category) => {
                sqlx::query_as(
                    r#"
                    SELECT id, question, answer, category, difficulty
                    FROM questions
                    WHERE category = $1
                    ORDER BY id
                    "#,
                )
                .bind(category)
                .fetch_all(self.pool)
                .await?
            }
        };

        Ok(rows.into_iter().map(Question::from).collect())
    }

    /// Insert a question and return it with its assigned id.
    pub async fn insert(&self, new: NewQuestion) -> Result<Question, StoreError> {
        let row: QuestionRow = sqlx::query_as(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(new.question())
        .bind(new.answer())
        .bind(new.category())
        .bind(new.difficulty())
        .fetch_one(self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => StoreError::NotFound {
                resource: "category",
                id: new.category().to_string(),
            },
            other => StoreError::Sqlx(other),
        })?;

        tracing::debug!(id = row.id, category = row.category, "question inserted");
        Ok(row.into())
    }

    /// Delete a question by id. Returns `false` when no row matched.
    pub async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
