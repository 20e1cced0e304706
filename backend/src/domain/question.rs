//! Question entity and creation payload validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::CategoryId;

/// Identifier of a [`Question`]. Assigned by the record store on insert and
/// immutable thereafter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct QuestionId(i64);

impl QuestionId {
    /// Wrap a raw identifier.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The raw identifier value.
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for QuestionId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Question difficulty, bounded to the inclusive range 1-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    /// Easiest rating accepted.
    pub const MIN: u8 = 1;
    /// Hardest rating accepted.
    pub const MAX: u8 = 5;

    /// Validate and wrap a raw rating.
    pub const fn new(value: u8) -> Result<Self, QuestionValidationError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(QuestionValidationError::DifficultyOutOfRange { value });
        }
        Ok(Self(value))
    }

    /// The raw rating value.
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = QuestionValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Difficulty> for u8 {
    fn from(value: Difficulty) -> Self {
        value.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation failures raised while constructing a [`NewQuestion`].
///
/// Category existence is validated by the question service against the
/// category index; only field-local rules live here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionValidationError {
    /// Prompt text was empty or whitespace-only.
    #[error("question text must not be blank")]
    BlankText,
    /// Answer text was empty or whitespace-only.
    #[error("answer text must not be blank")]
    BlankAnswer,
    /// Difficulty fell outside the accepted 1-5 range.
    #[error("difficulty {value} is outside the accepted range 1-5")]
    DifficultyOutOfRange {
        /// The rejected rating.
        value: u8,
    },
}

/// A stored trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Store-assigned unique identifier.
    pub id: QuestionId,
    /// Prompt shown to players.
    pub text: String,
    /// Answer revealed after the player responds.
    pub answer: String,
    /// The category this question belongs to.
    pub category_id: CategoryId,
    /// Rated difficulty, 1 (easiest) to 5 (hardest).
    pub difficulty: Difficulty,
}

/// Input payload for [`NewQuestion::try_from`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct QuestionDraft {
    /// Prompt text; must not be blank.
    pub text: String,
    /// Answer text; must not be blank.
    pub answer: String,
    /// Referenced category; existence is checked by the service.
    pub category_id: CategoryId,
    /// Raw difficulty rating; must fall in 1-5.
    pub difficulty: u8,
}

/// A validated question awaiting an identifier from the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    text: String,
    answer: String,
    category_id: CategoryId,
    difficulty: Difficulty,
}

impl NewQuestion {
    /// Prompt text.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Answer text.
    pub fn answer(&self) -> &str {
        self.answer.as_str()
    }

    /// Referenced category.
    pub fn category_id(&self) -> CategoryId {
        self.category_id
    }

    /// Validated difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Promote into a stored [`Question`] once the store has assigned an id.
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            text: self.text,
            answer: self.answer,
            category_id: self.category_id,
            difficulty: self.difficulty,
        }
    }
}

impl TryFrom<QuestionDraft> for NewQuestion {
    type Error = QuestionValidationError;

    fn try_from(draft: QuestionDraft) -> Result<Self, Self::Error> {
        if draft.text.trim().is_empty() {
            return Err(QuestionValidationError::BlankText);
        }
        if draft.answer.trim().is_empty() {
            return Err(QuestionValidationError::BlankAnswer);
        }
        let difficulty = Difficulty::new(draft.difficulty)?;

        Ok(Self {
            text: draft.text,
            answer: draft.answer,
            category_id: draft.category_id,
            difficulty,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn draft(text: &str, answer: &str, difficulty: u8) -> QuestionDraft {
        QuestionDraft {
            text: text.to_owned(),
            answer: answer.to_owned(),
            category_id: CategoryId::new(1),
            difficulty,
        }
    }

    #[rstest]
    #[case("", "Paris", 2, QuestionValidationError::BlankText)]
    #[case("   ", "Paris", 2, QuestionValidationError::BlankText)]
    #[case("Capital of France?", "", 2, QuestionValidationError::BlankAnswer)]
    #[case("Capital of France?", "  ", 2, QuestionValidationError::BlankAnswer)]
    #[case(
        "Capital of France?",
        "Paris",
        0,
        QuestionValidationError::DifficultyOutOfRange { value: 0 }
    )]
    #[case(
        "Capital of France?",
        "Paris",
        6,
        QuestionValidationError::DifficultyOutOfRange { value: 6 }
    )]
    fn drafts_violating_field_rules_are_rejected(
        #[case] text: &str,
        #[case] answer: &str,
        #[case] difficulty: u8,
        #[case] expected: QuestionValidationError,
    ) {
        let err = NewQuestion::try_from(draft(text, answer, difficulty)).expect_err("rejected");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(5)]
    fn boundary_difficulties_are_accepted(#[case] difficulty: u8) {
        let new = NewQuestion::try_from(draft("Capital of France?", "Paris", difficulty))
            .expect("valid draft");
        assert_eq!(new.difficulty().value(), difficulty);
    }

    #[rstest]
    fn promotion_preserves_fields() {
        let new =
            NewQuestion::try_from(draft("Capital of France?", "Paris", 2)).expect("valid draft");
        let question = new.into_question(QuestionId::new(42));
        assert_eq!(question.id, QuestionId::new(42));
        assert_eq!(question.text, "Capital of France?");
        assert_eq!(question.answer, "Paris");
        assert_eq!(question.category_id, CategoryId::new(1));
        assert_eq!(question.difficulty.value(), 2);
    }
}
