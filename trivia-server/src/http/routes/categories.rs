//! Category endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use trivia_core::{paginate, CategoryFilter, PageRequest, PaginationParams, Question};

use super::common::{category_map, CategoryMap};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiPath, ApiQuery};
use crate::http::server::AppState;

/// Category listing response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
    pub total_categories: usize,
}

/// Questions in one category
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

/// GET /categories - all categories keyed by id
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = category_map(state.store.list_categories().await?);

    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}

/// GET /categories/{id}/questions - paginated questions for a category
///
/// An unknown category is a client error (400), not a missing resource.
async fn category_questions(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let category = state
        .store
        .get_category(id)
        .await?
        .ok_or_else(|| ApiError::BadRequest {
            reason: format!("category {id} does not exist"),
        })?;

    let questions = state.store.list_questions(CategoryFilter::Id(id)).await?;
    let page = PageRequest::from(params);

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: paginate(&questions, page).to_vec(),
        total_questions: questions.len(),
        current_category: category.kind,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(category_questions))
}
