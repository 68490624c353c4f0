//! Questions, categories and the category filter.

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Maximum length for question and answer text
const MAX_TEXT_LEN: usize = 1000;

/// Allowed difficulty range (inclusive)
const MIN_DIFFICULTY: i32 = 1;
const MAX_DIFFICULTY: i32 = 5;

/// A stored trivia question. Identifiers are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

/// A question category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Which questions a listing or quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category restriction
    #[default]
    All,
    /// Only questions in this category
    Id(i64),
}

impl CategoryFilter {
    /// Map a wire category id to a filter. `0` means every category.
    pub fn from_id(id: i64) -> Self {
        if id == 0 {
            Self::All
        } else {
            Self::Id(id)
        }
    }

    /// Whether `question` passes this filter.
    pub fn admits(&self, question: &Question) -> bool {
        match self {
            Self::All => true,
            Self::Id(id) => question.category == *id,
        }
    }
}

/// Validated payload for creating a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: i64,
    difficulty: i32,
}

impl NewQuestion {
    /// Create a new question payload, validating every field.
    ///
    /// # Rules
    /// - question and answer are trimmed, non-empty, at most 1000 characters
    /// - category is a positive identifier
    /// - difficulty is in 1..=5
    ///
    /// # Example
    /// ```
    /// use trivia_core::NewQuestion;
    ///
    /// assert!(NewQuestion::new("Largest planet?", "Jupiter", 1, 2).is_ok());
    /// assert!(NewQuestion::new("  ", "Jupiter", 1, 2).is_err());
    /// assert!(NewQuestion::new("Largest planet?", "Jupiter", 1, 7).is_err());
    /// ```
    pub fn new(
        question: &str,
        answer: &str,
        category: i64,
        difficulty: i32,
    ) -> Result<Self, ValidationError> {
        let question = validate_text("question", question)?;
        let answer = validate_text("answer", answer)?;

        if category < 1 {
            return Err(ValidationError::OutOfRange {
                field: "category",
                min: 1,
                max: i64::MAX,
                value: category,
            });
        }

        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(ValidationError::OutOfRange {
                field: "difficulty",
                min: MIN_DIFFICULTY.into(),
                max: MAX_DIFFICULTY.into(),
                value: difficulty.into(),
            });
        }

        Ok(Self {
            question,
            answer,
            category,
            difficulty,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> i64 {
        self.category
    }

    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }

    /// Attach a store-assigned identifier.
    pub fn into_question(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

fn validate_text(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if trimmed.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_TEXT_LEN,
        });
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, category: i64) -> Question {
        Question {
            id,
            question: format!("question {id}"),
            answer: format!("answer {id}"),
            category,
            difficulty: 1,
        }
    }

    #[test]
    fn zero_means_all_categories() {
        assert_eq!(CategoryFilter::from_id(0), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_id(4), CategoryFilter::Id(4));
    }

    #[test]
    fn filter_admits() {
        let q = question(1, 3);
        assert!(CategoryFilter::All.admits(&q));
        assert!(CategoryFilter::Id(3).admits(&q));
        assert!(!CategoryFilter::Id(2).admits(&q));
    }

    #[test]
    fn category_serializes_kind_as_type() {
        let json = serde_json::to_value(Category {
            id: 1,
            kind: "Science".into(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "type": "Science"}));
    }

    #[test]
    fn new_question_trims_text() {
        let q = NewQuestion::new("  Who? ", " Me ", 2, 3).unwrap();
        assert_eq!(q.question(), "Who?");
        assert_eq!(q.answer(), "Me");

        let stored = q.into_question(42);
        assert_eq!(stored.id, 42);
        assert_eq!(stored.category, 2);
        assert_eq!(stored.difficulty, 3);
    }

    #[test]
    fn rejects_empty_text() {
        let err = NewQuestion::new("", "a", 1, 1).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "question" });

        let err = NewQuestion::new("q", "   ", 1, 1).unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "answer" });
    }

    #[test]
    fn rejects_long_text() {
        let long = "x".repeat(1001);
        let err = NewQuestion::new(&long, "a", 1, 1).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 1000, .. }));

        let exact = "x".repeat(1000);
        assert!(NewQuestion::new(&exact, "a", 1, 1).is_ok());
    }

    #[test]
    fn rejects_bad_numbers() {
        let err = NewQuestion::new("q", "a", 0, 1).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "category", .. }));

        let err = NewQuestion::new("q", "a", 1, 0).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "difficulty", .. }));

        let err = NewQuestion::new("q", "a", 1, 6).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { value: 6, .. }));
    }
}
