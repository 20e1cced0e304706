//! Substring search over question text.
//!
//! Matching is pure and stateless per call: the candidate set is rebuilt
//! from a fresh `fetch_all` every time, which is acceptable at this
//! catalog's scale. A production-scale catalog would maintain an
//! incremental index instead.

use std::sync::Arc;

use crate::domain::Error;
use crate::domain::Question;
use crate::domain::ports::QuestionRepository;
use crate::domain::question_service::map_question_repository_error;

/// Case-insensitive substring search over question prompts.
#[derive(Clone)]
pub struct SearchService {
    questions: Arc<dyn QuestionRepository>,
}

impl SearchService {
    /// Create a search service over the question repository.
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// Questions whose text contains `term` case-insensitively, in catalog
    /// order.
    ///
    /// A blank or whitespace-only term fails `InvalidRequest` before the
    /// store is touched. Zero matches for a valid term is a successful empty
    /// result, never an error; callers wanting "no matches means not found"
    /// semantics decide that at their own boundary.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>, Error> {
        if term.trim().is_empty() {
            return Err(Error::invalid_request("search term must not be blank"));
        }
        let needle = term.to_lowercase();

        Ok(self
            .questions
            .fetch_all()
            .await
            .map_err(map_question_repository_error)?
            .into_iter()
            .filter(|question| question.text.to_lowercase().contains(&needle))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{MockQuestionRepository, QuestionRepositoryError};
    use crate::domain::{CategoryId, Difficulty, QuestionId};
    use actix_rt::System;
    use rstest::rstest;

    fn question(id: i64, text: &str) -> Question {
        Question {
            id: QuestionId::new(id),
            text: text.to_owned(),
            answer: "answer".to_owned(),
            category_id: CategoryId::new(1),
            difficulty: Difficulty::new(2).expect("valid difficulty"),
        }
    }

    fn service_returning(questions: Vec<Question>) -> SearchService {
        let mut repo = MockQuestionRepository::new();
        repo.expect_fetch_all().returning(move || Ok(questions.clone()));
        SearchService::new(Arc::new(repo))
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_terms_fail_validation_before_the_store(#[case] term: &str) {
        let mut repo = MockQuestionRepository::new();
        repo.expect_fetch_all().never();
        let service = SearchService::new(Arc::new(repo));

        System::new().block_on(async move {
            let err = service.search(term).await.expect_err("blank term");
            assert_eq!(err.code(), ErrorCode::InvalidRequest);
        });
    }

    #[rstest]
    fn matching_is_case_insensitive_and_complete() {
        let service = service_returning(vec![
            question(1, "What is the largest lake in Africa?"),
            question(2, "Which lake borders three countries?"),
            question(3, "Who painted the Mona Lisa?"),
        ]);

        System::new().block_on(async move {
            let matches = service.search("LAKE").await.expect("valid search");
            let ids: Vec<i64> = matches.iter().map(|q| q.id.value()).collect();
            assert_eq!(ids, vec![1, 2]);
        });
    }

    #[rstest]
    fn zero_matches_is_a_successful_empty_result() {
        let service = service_returning(vec![question(1, "What is the capital of Peru?")]);

        System::new().block_on(async move {
            let matches = service.search("volcano").await.expect("valid search");
            assert!(matches.is_empty());
        });
    }

    #[rstest]
    fn store_failures_surface_as_service_unavailable() {
        let mut repo = MockQuestionRepository::new();
        repo.expect_fetch_all()
            .returning(|| Err(QuestionRepositoryError::connection("refused")));
        let service = SearchService::new(Arc::new(repo));

        System::new().block_on(async move {
            let err = service.search("lake").await.expect_err("store down");
            assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
        });
    }
}
