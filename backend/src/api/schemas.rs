//! Wire schemas shared across endpoints.

use std::collections::BTreeMap;

use pagination::PageRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::{CategoryId, Error, Question};

/// A question as serialised on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct QuestionDto {
    /// Store-assigned identifier.
    #[schema(example = 7)]
    pub id: i64,
    /// Prompt shown to players.
    pub question: String,
    /// Answer revealed after the player responds.
    pub answer: String,
    /// Owning category id.
    pub category: i64,
    /// Rated difficulty, 1 (easiest) to 5 (hardest).
    pub difficulty: u8,
}

impl From<Question> for QuestionDto {
    fn from(value: Question) -> Self {
        Self {
            id: value.id.value(),
            question: value.text,
            answer: value.answer,
            category: value.category_id.value(),
            difficulty: value.difficulty.value(),
        }
    }
}

/// Optional 1-indexed page number accepted by the listing endpoints.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    /// Page to return; defaults to the first.
    pub page: Option<usize>,
}

pub(crate) fn page_request(page: Option<usize>) -> ApiResult<PageRequest> {
    PageRequest::with_default_size(page.unwrap_or(1))
        .map_err(|err| ApiError::from(Error::invalid_request(err.to_string())))
}

pub(crate) fn category_map(labels: BTreeMap<CategoryId, String>) -> BTreeMap<i64, String> {
    labels
        .into_iter()
        .map(|(id, label)| (id.value(), label))
        .collect()
}
