//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with the record store.
//! Each trait exposes strongly typed errors so adapters map their failures
//! into predictable variants instead of returning `anyhow::Result`. "No
//! data" is an `Ok` value (`None` or an empty `Vec`); error variants are
//! reserved for the store failing to answer.

use async_trait::async_trait;
use thiserror::Error;

use super::{Category, CategoryId, NewQuestion, Question, QuestionId};

/// Errors surfaced by question record store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionRepositoryError {
    /// Store connectivity failures.
    #[error("question store connection failed: {message}")]
    Connection {
        /// Adapter-supplied failure description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("question store query failed: {message}")]
    Query {
        /// Adapter-supplied failure description.
        message: String,
    },
}

impl QuestionRepositoryError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Errors surfaced by category record store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryRepositoryError {
    /// Store connectivity failures.
    #[error("category store connection failed: {message}")]
    Connection {
        /// Adapter-supplied failure description.
        message: String,
    },
    /// Query failed during execution.
    #[error("category store query failed: {message}")]
    Query {
        /// Adapter-supplied failure description.
        message: String,
    },
}

impl CategoryRepositoryError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence port for question records.
///
/// Ordering contract: `fetch_all` and `fetch_by_category` return records in
/// insertion order, stable across calls absent mutation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Fetch every stored question in insertion order.
    async fn fetch_all(&self) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Fetch one question by id, `None` when absent.
    async fn fetch_by_id(
        &self,
        id: QuestionId,
    ) -> Result<Option<Question>, QuestionRepositoryError>;

    /// Fetch the questions belonging to one category, in insertion order.
    /// An unknown category simply yields an empty list; existence checks are
    /// the caller's concern.
    async fn fetch_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Persist a validated question, assigning it a fresh unique id.
    async fn insert(&self, question: NewQuestion) -> Result<Question, QuestionRepositoryError>;

    /// Delete one question by id. Returns whether a record was removed.
    async fn delete(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError>;
}

/// Persistence port for category records. Read-only: categories are seeded
/// and managed outside this service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Fetch every category in store order.
    async fn fetch_all(&self) -> Result<Vec<Category>, CategoryRepositoryError>;

    /// Fetch one category by id, `None` when absent.
    async fn fetch_by_id(
        &self,
        id: CategoryId,
    ) -> Result<Option<Category>, CategoryRepositoryError>;
}
