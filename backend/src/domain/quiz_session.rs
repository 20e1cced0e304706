//! Quiz session state machine: non-repeating random question selection.
//!
//! A [`QuizSession`] is owned by exactly one play-through. Its exclusion set
//! and RNG sit behind a per-session mutex so concurrent `next()` calls on a
//! shared session cannot serve the same question twice or corrupt the set.
//! The candidate pool is re-read from the store on every draw; session state
//! is only mutated after that read succeeds, so an aborted store call leaves
//! the session unchanged.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IteratorRandom;
use serde_json::json;

use crate::domain::Error;
use crate::domain::ports::QuestionRepository;
use crate::domain::question_service::map_question_repository_error;
use crate::domain::{CategoryId, CategoryIndex, Question, QuestionId};

/// Which questions a session draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    /// The whole catalog.
    Any,
    /// Only questions in one category.
    Category(CategoryId),
}

/// Outcome of one draw: a question, or the well-defined end of the session.
///
/// Exhaustion is not an error. It is the terminal state reached once the
/// candidate pool (in-scope questions minus already-served ids) is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizDraw {
    /// The next question to present.
    Question(Question),
    /// No unserved question remains in scope.
    Exhausted,
}

struct SessionState {
    excluded: HashSet<QuestionId>,
    rng: SmallRng,
    exhausted: bool,
}

/// One play-through's worth of non-repeating random selection.
pub struct QuizSession {
    scope: QuizScope,
    questions: Arc<dyn QuestionRepository>,
    state: Mutex<SessionState>,
}

impl std::fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizSession")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

impl QuizSession {
    fn new(
        scope: QuizScope,
        already_served: HashSet<QuestionId>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            scope,
            questions,
            state: Mutex::new(SessionState {
                excluded: already_served,
                rng: SmallRng::from_entropy(),
                exhausted: false,
            }),
        }
    }

    /// The category filter this session was started with.
    pub fn scope(&self) -> QuizScope {
        self.scope
    }

    /// Draw one uniformly random question from the current candidate pool
    /// and add it to the exclusion set.
    ///
    /// The pool is {in-scope questions} minus {already-served ids},
    /// evaluated fresh against the store on every call so concurrently
    /// created or deleted questions are reflected. Exclusion is by id
    /// membership unconditionally; ids stay excluded even if the underlying
    /// record has since been deleted. Once exhaustion is signalled the
    /// session latches: every later call returns [`QuizDraw::Exhausted`]
    /// without touching the store.
    pub async fn next(&self) -> Result<QuizDraw, Error> {
        if self.lock_state()?.exhausted {
            return Ok(QuizDraw::Exhausted);
        }

        let pool = match self.scope {
            QuizScope::Any => self.questions.fetch_all().await,
            QuizScope::Category(category_id) => {
                self.questions.fetch_by_category(category_id).await
            }
        }
        .map_err(map_question_repository_error)?;

        let mut state = self.lock_state()?;
        let SessionState {
            excluded,
            rng,
            exhausted,
        } = &mut *state;

        match pool
            .into_iter()
            .filter(|question| !excluded.contains(&question.id))
            .choose(rng)
        {
            Some(question) => {
                excluded.insert(question.id);
                Ok(QuizDraw::Question(question))
            }
            None => {
                *exhausted = true;
                Ok(QuizDraw::Exhausted)
            }
        }
    }

    fn lock_state(&self) -> Result<MutexGuard<'_, SessionState>, Error> {
        self.state
            .lock()
            .map_err(|_| Error::internal("quiz session state poisoned"))
    }
}

/// Starts quiz sessions, validating the category filter up front.
#[derive(Clone)]
pub struct QuizService {
    questions: Arc<dyn QuestionRepository>,
    categories: CategoryIndex,
}

impl QuizService {
    /// Create a service over the question repository and category index.
    pub fn new(questions: Arc<dyn QuestionRepository>, categories: CategoryIndex) -> Self {
        Self {
            questions,
            categories,
        }
    }

    /// Start a session scoped to `scope`, seeded with the ids already served
    /// in this play-through.
    ///
    /// A specific category is validated here, at session creation, never
    /// deferred to the first draw.
    pub async fn start_session(
        &self,
        scope: QuizScope,
        already_served: HashSet<QuestionId>,
    ) -> Result<QuizSession, Error> {
        if let QuizScope::Category(category_id) = scope {
            if !self.categories.contains(category_id).await? {
                return Err(Error::invalid_request(format!(
                    "category {category_id} does not exist"
                ))
                .with_details(
                    json!({ "categoryId": category_id.value(), "code": "unknown_category" }),
                ));
            }
        }
        Ok(QuizSession::new(
            scope,
            already_served,
            Arc::clone(&self.questions),
        ))
    }
}

#[cfg(test)]
#[path = "quiz_session_tests.rs"]
mod tests;
