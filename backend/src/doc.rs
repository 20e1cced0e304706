//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API. The
//! generated document backs Swagger UI in debug builds.

use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trivia backend API",
        description = "HTTP interface for browsing, searching, authoring, and playing the trivia catalog."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::api::categories::list_categories,
        crate::api::categories::questions_by_category,
        crate::api::questions::list_questions,
        crate::api::questions::create_question,
        crate::api::questions::delete_question,
        crate::api::questions::search_questions,
        crate::api::quizzes::draw_quiz_question,
        crate::api::health::ready,
        crate::api::health::live,
    ),
    components(schemas(
        crate::api::error::ApiError,
        crate::api::schemas::QuestionDto,
        crate::api::categories::CategoryListResponse,
        crate::api::categories::CategoryQuestionsResponse,
        crate::api::questions::QuestionListResponse,
        crate::api::questions::CreateQuestionRequest,
        crate::api::questions::CreateQuestionResponse,
        crate::api::questions::DeleteQuestionResponse,
        crate::api::questions::SearchRequest,
        crate::api::questions::SearchResponse,
        crate::api::quizzes::QuizCategoryRef,
        crate::api::quizzes::QuizRequest,
        crate::api::quizzes::QuizResponse,
    )),
    tags(
        (name = "categories", description = "Category listing and browsing"),
        (name = "questions", description = "Catalog listing, authoring, and search"),
        (name = "quizzes", description = "Non-repeating quiz draws"),
        (name = "health", description = "Probes for orchestration")
    )
)]
pub struct ApiDoc;
