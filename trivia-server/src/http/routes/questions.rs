//! Question endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use trivia_core::{paginate, search, CategoryFilter, NewQuestion, PageRequest, PaginationParams, Question};

use super::common::{category_map, CategoryMap};
use crate::http::error::ApiError;
use crate::http::extractors::{lenient_int, ApiJson, ApiPath, ApiQuery};
use crate::http::server::AppState;
use crate::store::StoreError;

/// Create question request
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "lenient_int")]
    pub category: i64,
    #[serde(deserialize_with = "lenient_int")]
    pub difficulty: i32,
}

/// Search request
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// `POST /questions` carries either a search or a new question.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum QuestionsPost {
    Search(SearchRequest),
    Create(CreateQuestionRequest),
}

/// Paginated question listing
#[derive(Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Option<String>,
}

/// Search results
#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

/// Result of creating a question
#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub question_id: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Result of deleting a question
#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted_id: i64,
}

/// GET /questions - paginated questions plus every category
async fn list_questions(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let questions = state.store.list_questions(CategoryFilter::All).await?;
    let categories = category_map(state.store.list_categories().await?);
    let page = PageRequest::from(params);

    Ok(Json(QuestionsResponse {
        success: true,
        questions: paginate(&questions, page).to_vec(),
        total_questions: questions.len(),
        categories,
        current_category: None,
    }))
}

/// POST /questions - create a question, or search when `searchTerm` is present
async fn post_questions(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<PaginationParams>,
    ApiJson(body): ApiJson<QuestionsPost>,
) -> Result<Response, ApiError> {
    let page = PageRequest::from(params);
    match body {
        QuestionsPost::Search(req) => Ok(run_search(&state, &req.search_term, page)
            .await?
            .into_response()),
        QuestionsPost::Create(req) => Ok(create_question(&state, req, page).await?.into_response()),
    }
}

/// POST /questions/search - case-insensitive substring search
async fn search_questions(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<PaginationParams>,
    ApiJson(req): ApiJson<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    run_search(&state, &req.search_term, PageRequest::from(params)).await
}

/// DELETE /questions/{id}
async fn delete_question(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<DeletedResponse>, ApiError> {
    if !state.store.delete_question(id).await? {
        return Err(ApiError::NotFound {
            resource: "question",
            id: id.to_string(),
        });
    }

    tracing::info!(id, "question deleted");
    Ok(Json(DeletedResponse {
        success: true,
        deleted_id: id,
    }))
}

async fn run_search(
    state: &AppState,
    term: &str,
    page: PageRequest,
) -> Result<Json<SearchResponse>, ApiError> {
    let questions = state.store.list_questions(CategoryFilter::All).await?;
    let matches: Vec<Question> = search(&questions, term).into_iter().cloned().collect();

    Ok(Json(SearchResponse {
        success: true,
        questions: paginate(&matches, page).to_vec(),
        total_questions: matches.len(),
        current_category: None,
    }))
}

/// Any failure to create, including an unknown category, is a 422.
async fn create_question(
    state: &AppState,
    req: CreateQuestionRequest,
    page: PageRequest,
) -> Result<Json<CreatedResponse>, ApiError> {
    let new = NewQuestion::new(&req.question, &req.answer, req.category, req.difficulty)?;

    let created = state.store.insert_question(new).await.map_err(|e| match e {
        StoreError::NotFound { resource, id } => ApiError::Unprocessable {
            reason: format!("{resource} '{id}' does not exist"),
        },
        other => ApiError::Internal(other),
    })?;
    tracing::info!(id = created.id, category = created.category, "question created");

    let questions = state.store.list_questions(CategoryFilter::All).await?;

    Ok(Json(CreatedResponse {
        success: true,
        question_id: created.id,
        questions: paginate(&questions, page).to_vec(),
        total_questions: questions.len(),
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(post_questions))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
}
