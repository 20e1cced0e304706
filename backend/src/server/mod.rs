//! Server construction and middleware wiring.
//!
//! `configure_app` is shared between the binary and the HTTP integration
//! tests so both exercise the exact same routing table.

mod config;

pub use config::ServerConfig;

use actix_web::middleware::DefaultHeaders;
use actix_web::web;

use crate::api::error::not_found_fallback;
use crate::api::health::{HealthState, live, ready};
use crate::api::{HttpState, categories, questions, quizzes};

/// Permissive CORS response headers for the browser front end.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Headers", "Content-Type,Authorization"))
        .add(("Access-Control-Allow-Methods", "GET,POST,DELETE,OPTIONS"))
}

/// Register every route, the shared state, and the JSON 404 fallback.
pub fn configure_app(
    state: HttpState,
    health: web::Data<HealthState>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state))
            .app_data(health)
            .service(categories::list_categories)
            .service(categories::questions_by_category)
            .service(questions::list_questions)
            .service(questions::create_question)
            .service(questions::delete_question)
            .service(questions::search_questions)
            .service(quizzes::draw_quiz_question)
            .service(ready)
            .service(live)
            .default_service(web::route().to(not_found_fallback));
    }
}
