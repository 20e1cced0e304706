//! Category API handlers: listing and category-scoped browsing.

use std::collections::BTreeMap;

use actix_web::{get, web};
use pagination::paginate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::error::ApiResult;
use crate::api::schemas::{PageQuery, QuestionDto, category_map, page_request};
use crate::api::state::HttpState;
use crate::domain::CategoryId;

/// Every category, keyed by id.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListResponse {
    /// Category id → display label.
    pub categories: BTreeMap<i64, String>,
    /// Number of categories.
    pub total_categories: usize,
}

/// One page of a single category's questions.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryQuestionsResponse {
    /// Questions on the requested page, in catalog order.
    pub questions: Vec<QuestionDto>,
    /// Total number of questions in this category.
    pub total_questions: usize,
    /// Display label of the browsed category.
    pub current_category: String,
}

/// List every category.
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "All categories", body = CategoryListResponse),
        (status = 503, description = "Record store unavailable")
    ),
    tags = ["categories"]
)]
#[get("/api/categories")]
pub async fn list_categories(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<CategoryListResponse>> {
    let labels = state.categories.label_map().await?;
    let categories = category_map(labels);
    Ok(web::Json(CategoryListResponse {
        total_categories: categories.len(),
        categories,
    }))
}

/// List one category's questions a page at a time.
///
/// An existing category with zero questions is an empty page, not a 404.
#[utoipa::path(
    get,
    path = "/api/categories/{id}/questions",
    params(
        ("id" = i64, Path, description = "Category id"),
        ("page" = Option<usize>, Query, description = "1-indexed page number, defaults to 1")
    ),
    responses(
        (status = 200, description = "One page of the category's questions", body = CategoryQuestionsResponse),
        (status = 404, description = "No category with that id"),
        (status = 503, description = "Record store unavailable")
    ),
    tags = ["categories"]
)]
#[get("/api/categories/{id}/questions")]
pub async fn questions_by_category(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<CategoryQuestionsResponse>> {
    let category_id = CategoryId::new(path.into_inner());
    let request = page_request(query.page)?;

    let questions = state.questions.by_category(category_id).await?;
    let current_category = state.categories.label_of(category_id).await?;

    let page = paginate(&questions, request);
    Ok(web::Json(CategoryQuestionsResponse {
        questions: page.items.into_iter().map(QuestionDto::from).collect(),
        total_questions: page.total,
        current_category,
    }))
}
