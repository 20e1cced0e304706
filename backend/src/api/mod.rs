//! REST API modules.

pub mod categories;
pub mod error;
pub mod health;
pub mod questions;
pub mod quizzes;
pub mod schemas;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::HttpState;
