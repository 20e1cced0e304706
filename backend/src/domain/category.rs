//! Category read-model entity.
//!
//! Categories are seeded and managed outside this service; the domain only
//! ever reads them, so there is no draft/validation machinery here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a [`Category`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CategoryId(i64);

impl CategoryId {
    /// Wrap a raw identifier.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The raw identifier value.
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for CategoryId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named grouping that every question belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier.
    pub id: CategoryId,
    /// Display label, e.g. "Science".
    pub label: String,
}

impl Category {
    /// Convenience constructor used by seeds and tests.
    pub fn new(id: impl Into<CategoryId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}
