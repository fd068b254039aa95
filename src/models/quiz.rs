// src/models/quiz.rs

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

/// Category selector sent by the quiz client. `id == 0` means "all categories".
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub id: i64,
}

/// DTO for requesting the next quiz question.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: QuizCategory,

    /// Ids already presented in this quiz session. Absent or null means none.
    pub previous_questions: Option<Vec<i64>>,
}

impl QuizRequest {
    /// Treats "all categories" as no filter.
    pub fn category_filter(&self) -> Option<i64> {
        match self.quiz_category.id {
            0 => None,
            id => Some(id),
        }
    }
}
