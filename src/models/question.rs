// src/models/question.rs

use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::prelude::FromRow;
use validator::Validate;

/// Represents the 'questions' table in the database.
/// Serializes as the flat `{id, question, answer, category, difficulty}` projection.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text of the question.
    pub question: String,

    pub answer: String,

    /// Foreign key to `categories.id`.
    pub category: i64,

    pub difficulty: i64,
}

/// DTO for creating a new question.
/// `category` and `difficulty` accept numbers or numeric strings.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 1000), custom(function = not_blank))]
    pub question: String,
    #[validate(length(min = 1, max = 1000), custom(function = not_blank))]
    pub answer: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    #[validate(range(min = 1))]
    pub category: i64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    #[validate(range(min = 1, max = 5))]
    pub difficulty: i64,
}

fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

/// DTO for the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

impl SearchRequest {
    /// Case-insensitive literal substring match with Unicode lower-casing,
    /// so results do not depend on how the backend implements `LOWER`.
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase()
            .contains(&self.search_term.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(term: &str) -> SearchRequest {
        SearchRequest {
            search_term: term.to_string(),
        }
    }

    #[test]
    fn search_ignores_case_beyond_ascii() {
        let text = "Where is ZÜRICH?";

        assert!(search("zürich").matches(text));
        assert!(search("ZÜRICH").matches(text));
        assert!(search("Zürich").matches(text));
        assert!(search("zibra").matches("Who or what is a Zibra Ani"));
        assert!(!search("zurich").matches(text));
    }

    #[test]
    fn search_takes_wildcards_literally() {
        assert!(search("%").matches("What % of the Earth is water?"));
        assert!(!search("%").matches("Question number 2"));
        assert!(!search("_").matches("Question number 2"));
        assert!(search("").matches("anything"));
    }

    #[test]
    fn create_request_accepts_numeric_strings() {
        let req: CreateQuestionRequest = serde_json::from_value(serde_json::json!({
            "question": "Who or what is a Zibra Ani",
            "answer": "a striped animal",
            "category": "2",
            "difficulty": 3
        }))
        .unwrap();

        assert_eq!(req.category, 2);
        assert_eq!(req.difficulty, 3);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn create_request_rejects_blank_and_out_of_range() {
        let req = CreateQuestionRequest {
            question: "   ".to_string(),
            answer: "yes".to_string(),
            category: 1,
            difficulty: 9,
        };

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("question"));
        assert!(fields.contains_key("difficulty"));
        assert!(!fields.contains_key("answer"));
    }
}
