//! Shared fixtures for the HTTP integration tests.

use std::sync::Arc;

use actix_web::web;
use backend::api::HttpState;
use backend::api::health::HealthState;
use backend::domain::ports::{CategoryRepository, QuestionRepository};
use backend::domain::{Category, CategoryId, QuestionDraft};
use backend::outbound::persistence::MemoryTriviaStore;

/// Build a creation draft without ceremony.
pub fn draft(text: &str, answer: &str, category: i64, difficulty: u8) -> QuestionDraft {
    QuestionDraft {
        text: text.to_owned(),
        answer: answer.to_owned(),
        category_id: CategoryId::new(category),
        difficulty,
    }
}

/// Categories {1: Science, 2: Art}; questions 1 and 2 in Science, 3 in Art.
pub fn scenario_store() -> Arc<MemoryTriviaStore> {
    Arc::new(MemoryTriviaStore::seeded(
        vec![Category::new(1, "Science"), Category::new(2, "Art")],
        vec![
            draft("What is the boiling point of water?", "100C", 1, 1),
            draft("What planet is closest to the sun?", "Mercury", 1, 2),
            draft("Who painted the Mona Lisa?", "Da Vinci", 2, 3),
        ],
    ))
}

/// Wire the service bundle over one store.
pub fn state_over(store: Arc<MemoryTriviaStore>) -> HttpState {
    let questions: Arc<dyn QuestionRepository> = store.clone();
    let categories: Arc<dyn CategoryRepository> = store;
    HttpState::new(questions, categories)
}

/// Health state already marked ready, as it is once startup completes.
pub fn ready_health() -> web::Data<HealthState> {
    let health = HealthState::new();
    health.mark_ready();
    web::Data::new(health)
}
