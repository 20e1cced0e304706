//! Question catalog domain service.
//!
//! Single point of access to question records. Field-local validation lives
//! on [`NewQuestion`]; this service adds the checks the record store cannot
//! make on its own (category existence, not-found mapping) and translates
//! store faults into the domain error taxonomy.

use std::sync::Arc;

use serde_json::json;

use crate::domain::Error;
use crate::domain::ports::{QuestionRepository, QuestionRepositoryError};
use crate::domain::{CategoryId, CategoryIndex, NewQuestion, Question, QuestionDraft, QuestionId};

/// Store faults are never conflated with "no data": both port variants map
/// to `ServiceUnavailable` so callers can choose their own retry policy.
pub(crate) fn map_question_repository_error(error: QuestionRepositoryError) -> Error {
    match error {
        QuestionRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("question store unavailable: {message}"))
        }
        QuestionRepositoryError::Query { message } => {
            Error::service_unavailable(format!("question store failed: {message}"))
        }
    }
}

/// Mediates all read/write access to question records.
#[derive(Clone)]
pub struct QuestionService {
    questions: Arc<dyn QuestionRepository>,
    categories: CategoryIndex,
}

impl QuestionService {
    /// Create a service over the question repository and category index.
    pub fn new(questions: Arc<dyn QuestionRepository>, categories: CategoryIndex) -> Self {
        Self {
            questions,
            categories,
        }
    }

    /// Every stored question in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Question>, Error> {
        self.questions
            .fetch_all()
            .await
            .map_err(map_question_repository_error)
    }

    /// One question by id, `NotFound` when absent.
    pub async fn get_by_id(&self, id: QuestionId) -> Result<Question, Error> {
        self.questions
            .fetch_by_id(id)
            .await
            .map_err(map_question_repository_error)?
            .ok_or_else(|| Error::not_found(format!("no question with id {id}")))
    }

    /// Questions belonging to one category, in insertion order.
    ///
    /// Fails `NotFound` only when the category itself does not exist; an
    /// existing category with zero questions is an empty list.
    pub async fn by_category(&self, category_id: CategoryId) -> Result<Vec<Question>, Error> {
        if !self.categories.contains(category_id).await? {
            return Err(
                Error::not_found(format!("no category with id {category_id}")).with_details(
                    json!({ "categoryId": category_id.value(), "code": "unknown_category" }),
                ),
            );
        }
        self.questions
            .fetch_by_category(category_id)
            .await
            .map_err(map_question_repository_error)
    }

    /// Validate and store a new question, returning the record with its
    /// freshly assigned id.
    pub async fn create(&self, draft: QuestionDraft) -> Result<Question, Error> {
        let new = NewQuestion::try_from(draft)
            .map_err(|err| Error::invalid_request(format!("invalid question payload: {err}")))?;

        if !self.categories.contains(new.category_id()).await? {
            return Err(Error::invalid_request(format!(
                "category {} does not exist",
                new.category_id()
            ))
            .with_details(
                json!({ "categoryId": new.category_id().value(), "code": "unknown_category" }),
            ));
        }

        self.questions
            .insert(new)
            .await
            .map_err(map_question_repository_error)
    }

    /// Delete one question by id.
    ///
    /// Fails `NotFound` when no record with that id exists; repeating a
    /// delete after success therefore fails rather than reporting success.
    pub async fn delete(&self, id: QuestionId) -> Result<(), Error> {
        let removed = self
            .questions
            .delete(id)
            .await
            .map_err(map_question_repository_error)?;
        if !removed {
            return Err(Error::not_found(format!("no question with id {id}")));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "question_service_tests.rs"]
mod tests;
