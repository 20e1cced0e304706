//! Domain primitives, ports, and services.
//!
//! Purpose: the question retrieval and quiz selection engine. Entities carry
//! documented invariants, ports describe the record store, and the services
//! are what the HTTP adapters drive. Everything here is transport agnostic;
//! adapters translate [`Error`] into their own envelopes.
//!
//! Public surface:
//! - [`Question`] / [`Category`]: entities with validated construction.
//! - [`ports`]: record store traits and their error enums.
//! - [`CategoryIndex`], [`QuestionService`], [`SearchService`],
//!   [`QuizService`]: the driving services.
//! - [`Error`] / [`ErrorCode`]: the failure taxonomy adapters map from.

pub mod category;
pub mod category_index;
pub mod error;
pub mod ports;
pub mod question;
pub mod question_service;
pub mod quiz_session;
pub mod search_service;

pub use self::category::{Category, CategoryId};
pub use self::category_index::CategoryIndex;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::question::{
    Difficulty, NewQuestion, Question, QuestionDraft, QuestionId, QuestionValidationError,
};
pub use self::question_service::QuestionService;
pub use self::quiz_session::{QuizDraw, QuizScope, QuizService, QuizSession};
pub use self::search_service::SearchService;
