//! In-process store backed by ordered maps
//!
//! Used by `trivia serve --in-memory` and by the HTTP tests. Ids are
//! assigned sequentially starting at 1 and are never reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use trivia_core::{Category, CategoryFilter, NewQuestion, Question};

use super::{StoreError, TriviaStore, DEFAULT_CATEGORIES};

#[derive(Debug, Default)]
struct MemoryState {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    last_category_id: i64,
    last_question_id: i64,
}

impl MemoryState {
    fn add_category(&mut self, kind: &str) -> Category {
        self.last_category_id += 1;
        let category = Category {
            id: self.last_category_id,
            kind: kind.to_owned(),
        };
        self.categories.insert(category.id, category.clone());
        category
    }
}

/// In-memory question store
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    /// Empty store with no categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the six default categories (ids 1..=6).
    pub fn with_default_categories() -> Self {
        let mut state = MemoryState::default();
        for kind in DEFAULT_CATEGORIES {
            state.add_category(kind);
        }
        Self {
            state: RwLock::new(state),
        }
    }

    /// Add a category and return it with its assigned id.
    pub async fn add_category(&self, kind: &str) -> Category {
        self.state.write().await.add_category(kind)
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_questions(&self, filter: CategoryFilter) -> Result<Vec<Question>, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .questions
            .values()
            .filter(|q| filter.admits(q))
            .cloned()
            .collect())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.state.read().await.categories.values().cloned().collect())
    }

    async fn get_category(&self, id: i64) -> Result<Option<Category>, StoreError> {
        Ok(self.state.read().await.categories.get(&id).cloned())
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError> {
        let mut state = self.state.write().await;
        if !state.categories.contains_key(&new.category()) {
            return Err(StoreError::NotFound {
                resource: "category",
                id: new.category().to_string(),
            });
        }

        state.last_question_id += 1;
        let question = new.into_question(state.last_question_id);
        state.questions.insert(question.id, question.clone());
        tracing::debug!(id = question.id, category = question.category, "question inserted");
        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.state.write().await.questions.remove(&id).is_some())
    }
}
