//! HTTP-level behaviour of the quiz endpoint.

mod support;

use std::collections::HashSet;
use std::sync::Arc;

use actix_web::{App, http::StatusCode, test};
use async_trait::async_trait;
use serde_json::{Value, json};

use backend::api::HttpState;
use backend::domain::ports::{
    CategoryRepository, CategoryRepositoryError, QuestionRepository, QuestionRepositoryError,
};
use backend::domain::{Category, CategoryId, NewQuestion, Question, QuestionId};
use backend::server::configure_app;
use support::{ready_health, scenario_store, state_over};

macro_rules! scenario_app {
    () => {
        test::init_service(
            App::new().configure(configure_app(state_over(scenario_store()), ready_health())),
        )
        .await
    };
}

async fn draw(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    category: Option<i64>,
    previous: &HashSet<i64>,
) -> Value {
    let mut payload = json!({ "previousQuestions": previous.iter().collect::<Vec<_>>() });
    if let Some(id) = category {
        payload["quizCategory"] = json!({ "id": id });
    }
    let req = test::TestRequest::post()
        .uri("/api/quizzes")
        .set_json(payload)
        .to_request();
    test::call_and_read_body_json(app, req).await
}

#[actix_web::test]
async fn a_scoped_play_through_never_repeats_and_then_signals_exhaustion() {
    let app = scenario_app!();
    let mut served = HashSet::new();

    // Category 1 holds two questions; the third draw must signal the end.
    for _ in 0..2 {
        let body = draw(&app, Some(1), &served).await;
        let id = body["question"]["id"].as_i64().expect("question drawn");
        assert!(served.insert(id), "question {id} repeated");
        assert_eq!(body["question"]["category"], 1);
    }

    let body = draw(&app, Some(1), &served).await;
    assert!(body["question"].is_null(), "pool should be exhausted");
    assert_eq!(served, HashSet::from([1, 2]));
}

#[actix_web::test]
async fn category_zero_draws_from_the_whole_catalog() {
    let app = scenario_app!();
    let mut served = HashSet::new();

    for _ in 0..3 {
        let body = draw(&app, Some(0), &served).await;
        let id = body["question"]["id"].as_i64().expect("question drawn");
        assert!(served.insert(id), "question {id} repeated");
    }

    let body = draw(&app, Some(0), &served).await;
    assert!(body["question"].is_null(), "whole catalog exhausts too");
    assert_eq!(served, HashSet::from([1, 2, 3]));
}

#[actix_web::test]
async fn an_omitted_category_also_means_any() {
    let app = scenario_app!();
    let body = draw(&app, None, &HashSet::new()).await;
    assert!(body["question"].is_object());
}

#[actix_web::test]
async fn an_unknown_category_is_rejected_before_the_first_draw() {
    let app = scenario_app!();
    let req = test::TestRequest::post()
        .uri("/api/quizzes")
        .set_json(json!({ "previousQuestions": [], "quizCategory": { "id": 9 } }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "invalid_request");
}

#[actix_web::test]
async fn previously_served_ids_stay_excluded_even_after_deletion() {
    let app = scenario_app!();

    // Serve question 1, then delete it; the remaining pool is exactly {2}.
    let req = test::TestRequest::delete()
        .uri("/api/questions/1")
        .to_request();
    test::call_service(&app, req).await;

    let served = HashSet::from([1]);
    let body = draw(&app, Some(1), &served).await;
    assert_eq!(body["question"]["id"], 2);

    let served = HashSet::from([1, 2]);
    let body = draw(&app, Some(1), &served).await;
    assert!(body["question"].is_null());
}

/// Record store that refuses every call, standing in for an outage.
struct UnavailableStore;

#[async_trait]
impl QuestionRepository for UnavailableStore {
    async fn fetch_all(&self) -> Result<Vec<Question>, QuestionRepositoryError> {
        Err(QuestionRepositoryError::connection("record store offline"))
    }

    async fn fetch_by_id(
        &self,
        _id: QuestionId,
    ) -> Result<Option<Question>, QuestionRepositoryError> {
        Err(QuestionRepositoryError::connection("record store offline"))
    }

    async fn fetch_by_category(
        &self,
        _category_id: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        Err(QuestionRepositoryError::connection("record store offline"))
    }

    async fn insert(&self, _question: NewQuestion) -> Result<Question, QuestionRepositoryError> {
        Err(QuestionRepositoryError::connection("record store offline"))
    }

    async fn delete(&self, _id: QuestionId) -> Result<bool, QuestionRepositoryError> {
        Err(QuestionRepositoryError::connection("record store offline"))
    }
}

#[async_trait]
impl CategoryRepository for UnavailableStore {
    async fn fetch_all(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        Err(CategoryRepositoryError::connection("record store offline"))
    }

    async fn fetch_by_id(
        &self,
        _id: CategoryId,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        Err(CategoryRepositoryError::connection("record store offline"))
    }
}

#[actix_web::test]
async fn a_store_outage_maps_to_503_not_404() {
    let store = Arc::new(UnavailableStore);
    let questions: Arc<dyn QuestionRepository> = store.clone();
    let categories: Arc<dyn CategoryRepository> = store;
    let app = test::init_service(App::new().configure(configure_app(
        HttpState::new(questions, categories),
        ready_health(),
    )))
    .await;

    for uri in ["/api/questions", "/api/categories"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "service_unavailable");
    }

    let req = test::TestRequest::post()
        .uri("/api/quizzes")
        .set_json(json!({ "previousQuestions": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}
