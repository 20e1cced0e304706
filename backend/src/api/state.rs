//! Shared state handed to the HTTP handlers.

use std::sync::Arc;

use crate::domain::ports::{CategoryRepository, QuestionRepository};
use crate::domain::{CategoryIndex, QuestionService, QuizService, SearchService};

/// Cloneable bundle of the domain services the handlers drive.
#[derive(Clone)]
pub struct HttpState {
    /// Question catalog access.
    pub questions: QuestionService,
    /// Category id → label resolution.
    pub categories: CategoryIndex,
    /// Substring search over question text.
    pub search: SearchService,
    /// Quiz session construction.
    pub quiz: QuizService,
}

impl HttpState {
    /// Assemble the service bundle over the given repositories.
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        let index = CategoryIndex::new(categories);
        Self {
            questions: QuestionService::new(Arc::clone(&questions), index.clone()),
            categories: index.clone(),
            search: SearchService::new(Arc::clone(&questions)),
            quiz: QuizService::new(questions, index),
        }
    }
}
