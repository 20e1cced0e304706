//! Question catalog API handlers: listing, creation, deletion, and search.

use std::collections::BTreeMap;

use actix_web::{delete, get, post, web};
use pagination::paginate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::error::ApiResult;
use crate::api::schemas::{PageQuery, QuestionDto, category_map, page_request};
use crate::api::state::HttpState;
use crate::domain::{CategoryId, QuestionDraft, QuestionId};

/// One page of the catalog plus the category map the list view renders.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionListResponse {
    /// Questions on the requested page, in catalog order.
    pub questions: Vec<QuestionDto>,
    /// Total number of questions in the catalog.
    pub total_questions: usize,
    /// Category id → display label.
    pub categories: BTreeMap<i64, String>,
}

/// Payload for creating a question.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateQuestionRequest {
    /// Prompt text; must not be blank.
    pub question: String,
    /// Answer text; must not be blank.
    pub answer: String,
    /// Id of an existing category.
    pub category: i64,
    /// Difficulty rating, 1-5.
    pub difficulty: u8,
}

/// The stored record created from a [`CreateQuestionRequest`].
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionResponse {
    /// Id assigned by the store.
    pub created: i64,
    /// The full stored record.
    pub question: QuestionDto,
}

/// Acknowledgement of a deletion.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteQuestionResponse {
    /// Id of the removed question.
    pub deleted: i64,
}

/// Search payload.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct SearchRequest {
    /// Substring to match against question text, case-insensitively.
    pub search_term: String,
}

/// One page of search matches.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Matches on the requested page, in catalog order.
    pub questions: Vec<QuestionDto>,
    /// Total number of matches across all pages.
    pub total_questions: usize,
}

/// List the catalog a page at a time.
#[utoipa::path(
    get,
    path = "/api/questions",
    params(("page" = Option<usize>, Query, description = "1-indexed page number, defaults to 1")),
    responses(
        (status = 200, description = "One page of questions", body = QuestionListResponse),
        (status = 422, description = "Invalid page number"),
        (status = 503, description = "Record store unavailable")
    ),
    tags = ["questions"]
)]
#[get("/api/questions")]
pub async fn list_questions(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<QuestionListResponse>> {
    let request = page_request(query.page)?;
    let questions = state.questions.list_all().await?;
    let categories = state.categories.label_map().await?;

    let page = paginate(&questions, request);
    Ok(web::Json(QuestionListResponse {
        questions: page.items.into_iter().map(QuestionDto::from).collect(),
        total_questions: page.total,
        categories: category_map(categories),
    }))
}

/// Create a question.
#[utoipa::path(
    post,
    path = "/api/questions",
    request_body = CreateQuestionRequest,
    responses(
        (status = 200, description = "Question stored", body = CreateQuestionResponse),
        (status = 422, description = "Validation failed"),
        (status = 503, description = "Record store unavailable")
    ),
    tags = ["questions"]
)]
#[post("/api/questions")]
pub async fn create_question(
    state: web::Data<HttpState>,
    payload: web::Json<CreateQuestionRequest>,
) -> ApiResult<web::Json<CreateQuestionResponse>> {
    let payload = payload.into_inner();
    let created = state
        .questions
        .create(QuestionDraft {
            text: payload.question,
            answer: payload.answer,
            category_id: CategoryId::new(payload.category),
            difficulty: payload.difficulty,
        })
        .await?;

    Ok(web::Json(CreateQuestionResponse {
        created: created.id.value(),
        question: created.into(),
    }))
}

/// Delete a question by id.
#[utoipa::path(
    delete,
    path = "/api/questions/{id}",
    params(("id" = i64, Path, description = "Question id")),
    responses(
        (status = 200, description = "Question removed", body = DeleteQuestionResponse),
        (status = 404, description = "No question with that id"),
        (status = 503, description = "Record store unavailable")
    ),
    tags = ["questions"]
)]
#[delete("/api/questions/{id}")]
pub async fn delete_question(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<DeleteQuestionResponse>> {
    let id = QuestionId::new(path.into_inner());
    state.questions.delete(id).await?;
    Ok(web::Json(DeleteQuestionResponse { deleted: id.value() }))
}

/// Search question text for a case-insensitive substring.
#[utoipa::path(
    post,
    path = "/api/questions/search",
    request_body = SearchRequest,
    params(("page" = Option<usize>, Query, description = "1-indexed page number, defaults to 1")),
    responses(
        (status = 200, description = "One page of matches", body = SearchResponse),
        (status = 422, description = "Blank search term"),
        (status = 503, description = "Record store unavailable")
    ),
    tags = ["questions"]
)]
#[post("/api/questions/search")]
pub async fn search_questions(
    state: web::Data<HttpState>,
    query: web::Query<PageQuery>,
    payload: web::Json<SearchRequest>,
) -> ApiResult<web::Json<SearchResponse>> {
    let request = page_request(query.page)?;
    let matches = state.search.search(&payload.search_term).await?;

    let page = paginate(&matches, request);
    Ok(web::Json(SearchResponse {
        questions: page.items.into_iter().map(QuestionDto::from).collect(),
        total_questions: page.total,
    }))
}
