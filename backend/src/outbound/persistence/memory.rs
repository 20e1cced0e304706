//! In-memory record store implementing both repository ports.
//!
//! Records live in insertion-ordered `Vec`s behind an `RwLock`; single
//! record create/delete is atomic under the write lock, which is all the
//! atomicity the domain asks of its store. A poisoned lock is reported as a
//! store fault rather than panicking the caller.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{
    CategoryRepository, CategoryRepositoryError, QuestionRepository, QuestionRepositoryError,
};
use crate::domain::{Category, CategoryId, NewQuestion, Question, QuestionDraft, QuestionId};

const POISONED: &str = "record store lock poisoned";

struct StoreState {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_question_id: i64,
}

/// In-memory trivia record store.
pub struct MemoryTriviaStore {
    state: RwLock<StoreState>,
}

impl MemoryTriviaStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                categories: Vec::new(),
                questions: Vec::new(),
                next_question_id: 1,
            }),
        }
    }

    /// A store pre-populated with the given categories and questions.
    ///
    /// Question ids are assigned in order starting at 1, exactly as if the
    /// drafts had been inserted through the port one by one.
    ///
    /// # Panics
    /// Panics when a seed draft fails question validation; seed data is
    /// compile-time known and must be valid.
    pub fn seeded(categories: Vec<Category>, questions: Vec<QuestionDraft>) -> Self {
        let mut state = StoreState {
            categories,
            questions: Vec::new(),
            next_question_id: 1,
        };
        for draft in questions {
            let new = match NewQuestion::try_from(draft) {
                Ok(new) => new,
                Err(err) => panic!("seed question must satisfy validation: {err}"),
            };
            let id = QuestionId::new(state.next_question_id);
            state.next_question_id += 1;
            state.questions.push(new.into_question(id));
        }
        Self {
            state: RwLock::new(state),
        }
    }

    /// A store carrying the bundled example catalog.
    pub fn with_example_data() -> Self {
        Self::seeded(
            super::example_categories(),
            super::example_questions(),
        )
    }
}

impl Default for MemoryTriviaStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionRepository for MemoryTriviaStore {
    async fn fetch_all(&self) -> Result<Vec<Question>, QuestionRepositoryError> {
        let state = self
            .state
            .read()
            .map_err(|_| QuestionRepositoryError::connection(POISONED))?;
        Ok(state.questions.clone())
    }

    async fn fetch_by_id(
        &self,
        id: QuestionId,
    ) -> Result<Option<Question>, QuestionRepositoryError> {
        let state = self
            .state
            .read()
            .map_err(|_| QuestionRepositoryError::connection(POISONED))?;
        Ok(state
            .questions
            .iter()
            .find(|question| question.id == id)
            .cloned())
    }

    async fn fetch_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        let state = self
            .state
            .read()
            .map_err(|_| QuestionRepositoryError::connection(POISONED))?;
        Ok(state
            .questions
            .iter()
            .filter(|question| question.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question, QuestionRepositoryError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| QuestionRepositoryError::connection(POISONED))?;
        let id = QuestionId::new(state.next_question_id);
        state.next_question_id += 1;
        let question = question.into_question(id);
        state.questions.push(question.clone());
        Ok(question)
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| QuestionRepositoryError::connection(POISONED))?;
        let before = state.questions.len();
        state.questions.retain(|question| question.id != id);
        Ok(state.questions.len() < before)
    }
}

#[async_trait]
impl CategoryRepository for MemoryTriviaStore {
    async fn fetch_all(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        let state = self
            .state
            .read()
            .map_err(|_| CategoryRepositoryError::connection(POISONED))?;
        Ok(state.categories.clone())
    }

    async fn fetch_by_id(
        &self,
        id: CategoryId,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        let state = self
            .state
            .read()
            .map_err(|_| CategoryRepositoryError::connection(POISONED))?;
        Ok(state
            .categories
            .iter()
            .find(|category| category.id == id)
            .cloned())
    }
}
