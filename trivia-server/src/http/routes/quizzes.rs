//! Quiz endpoint

use std::collections::HashSet;
use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use trivia_core::{next_question, CategoryFilter, Question};

use crate::http::error::ApiError;
use crate::http::extractors::{lenient_int, ApiJson};
use crate::http::server::AppState;

/// Quiz category as sent by clients: `{"id": 0, "type": "click"}`
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "lenient_int")]
    pub id: i64,
}

/// Next-question request. Missing fields mean a fresh, unfiltered quiz.
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

impl QuizRequest {
    pub fn filter(&self) -> CategoryFilter {
        self.quiz_category
            .as_ref()
            .map(|c| CategoryFilter::from_id(c.id))
            .unwrap_or_default()
    }
}

/// Next question, or `null` once the pool is exhausted
#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// POST /quizzes - first question not yet seen in this session
async fn next_quiz_question(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let filter = req.filter();
    let candidates = state.store.list_questions(filter).await?;
    let seen: HashSet<i64> = req.previous_questions.iter().copied().collect();

    let question = next_question(&candidates, &seen).cloned();
    if question.is_none() {
        tracing::debug!(?filter, seen = seen.len(), "quiz pool exhausted");
    }

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_quiz_question))
}
