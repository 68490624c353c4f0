//! Postgres-backed store

use async_trait::async_trait;
use sqlx::PgPool;
use trivia_core::{Category, CategoryFilter, NewQuestion, Question};

use super::{StoreError, TriviaStore};
use crate::db::{CategoryRepo, QuestionRepo};

/// Store over a shared connection pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn list_questions(&self, filter: CategoryFilter) -> Result<Vec<Question>, StoreError> {
        QuestionRepo::new(&self.pool).list(filter).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        CategoryRepo::new(&self.pool).list().await
    }

    async fn get_category(&self, id: i64) -> Result<Option<Category>, StoreError> {
        CategoryRepo::new(&self.pool).get(id).await
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError> {
        QuestionRepo::new(&self.pool).insert(new).await
    }

    async fn delete_question(&self, id: i64) -> Result<bool, StoreError> {
        QuestionRepo::new(&self.pool).delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, migrations};

    // Run with: DATABASE_URL=postgres://... cargo test -p trivia-server -- --ignored

    async fn store() -> PgStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        migrations::seed_categories(&pool).await.expect("seed failed");
        PgStore::new(pool)
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_delete_round_trip() {
        let store = store().await;
        let category = store.list_categories().await.unwrap()[0].id;
        let new = NewQuestion::new("Who painted the Mona Lisa?", "Da Vinci", category, 3).unwrap();

        let question = store.insert_question(new).await.unwrap();
        let listed = store.list_questions(CategoryFilter::Id(category)).await.unwrap();
        assert!(listed.iter().any(|q| q.id == question.id));

        assert!(store.delete_question(question.id).await.unwrap());
        assert!(!store.delete_question(question.id).await.unwrap());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unknown_category_is_not_found() {
        let store = store().await;
        let new = NewQuestion::new("q", "a", i64::MAX, 1).unwrap();
        let err = store.insert_question(new).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { resource: "category", .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn listings_are_ascending() {
        let store = store().await;
        let ids: Vec<i64> = store
            .list_questions(CategoryFilter::All)
            .await
            .unwrap()
            .iter()
            .map(|q| q.id)
            .collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
