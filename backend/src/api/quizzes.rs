//! Quiz API handler: draw the next non-repeating question.
//!
//! Session state lives on the wire: each request carries the ids already
//! served in this play-through, and the handler reconstructs the session
//! from them before drawing. The exhaustion signal is a `null` question,
//! never an error status.

use std::collections::HashSet;

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::error::ApiResult;
use crate::api::schemas::QuestionDto;
use crate::api::state::HttpState;
use crate::domain::{CategoryId, QuestionId, QuizDraw, QuizScope};

/// Category filter as posted by quiz clients.
#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct QuizCategoryRef {
    /// Category id; 0 selects the whole catalog.
    pub id: i64,
}

/// Payload for drawing the next quiz question.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct QuizRequest {
    /// Ids of the questions already served in this play-through.
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    /// Category filter; omitted or id 0 draws from the whole catalog.
    pub quiz_category: Option<QuizCategoryRef>,
}

/// The drawn question, or `null` once the play-through is exhausted.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    /// Next question to present; `null` signals exhaustion.
    pub question: Option<QuestionDto>,
}

/// Draw one random, previously-unserved question.
#[utoipa::path(
    post,
    path = "/api/quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "Next question, or null when exhausted", body = QuizResponse),
        (status = 422, description = "Unknown category"),
        (status = 503, description = "Record store unavailable")
    ),
    tags = ["quizzes"]
)]
#[post("/api/quizzes")]
pub async fn draw_quiz_question(
    state: web::Data<HttpState>,
    payload: web::Json<QuizRequest>,
) -> ApiResult<web::Json<QuizResponse>> {
    let payload = payload.into_inner();

    let scope = match payload.quiz_category {
        None => QuizScope::Any,
        Some(category) if category.id == 0 => QuizScope::Any,
        Some(category) => QuizScope::Category(CategoryId::new(category.id)),
    };
    let already_served: HashSet<QuestionId> = payload
        .previous_questions
        .into_iter()
        .map(QuestionId::new)
        .collect();

    let session = state.quiz.start_session(scope, already_served).await?;
    let question = match session.next().await? {
        QuizDraw::Question(question) => Some(QuestionDto::from(question)),
        QuizDraw::Exhausted => None,
    };

    Ok(web::Json(QuizResponse { question }))
}
