// src/handlers/quiz.rs

use std::collections::HashSet;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use rand::{Rng, seq::SliceRandom};
use serde_json::json;
use sqlx::AnyPool;

use crate::{
    error::AppError,
    handlers::categories::fetch_category,
    models::{question::Question, quiz::QuizRequest},
};

/// Picks a question whose id is not in `previous`, uniformly among the remaining ones.
/// Returns `None` once every candidate has been seen (or there are none).
pub fn pick_next_question<R: Rng + ?Sized>(
    candidates: Vec<Question>,
    previous: &HashSet<i64>,
    rng: &mut R,
) -> Option<Question> {
    let remaining: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    remaining.choose(rng).cloned()
}

/// Serves the next quiz question.
///
/// * `quiz_category.id == 0` draws from every question.
/// * Otherwise the category must exist.
/// * Answers `{success: true}` without a question once the scope is exhausted.
pub async fn next_question(
    State(pool): State<AnyPool>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let candidates = match req.category_filter() {
        None => {
            sqlx::query_as::<_, Question>(
                r#"
                SELECT id, question, answer, category, difficulty
                FROM questions
                ORDER BY id
                "#,
            )
            .fetch_all(&pool)
            .await?
        }
        Some(category_id) => {
            if fetch_category(&pool, category_id).await?.is_none() {
                return Err(AppError::BadRequest(format!(
                    "Unknown quiz category {}",
                    category_id
                )));
            }

            sqlx::query_as::<_, Question>(
                r#"
                SELECT id, question, answer, category, difficulty
                FROM questions
                WHERE category = $1
                ORDER BY id
                "#,
            )
            .bind(category_id)
            .fetch_all(&pool)
            .await?
        }
    };

    let previous: HashSet<i64> = req.previous_questions.unwrap_or_default().into_iter().collect();

    let next = pick_next_question(candidates, &previous, &mut rand::thread_rng());

    match next {
        Some(question) => Ok(Json(json!({
            "success": true,
            "question": question,
        }))),
        None => {
            tracing::debug!("Quiz exhausted after {} questions", previous.len());
            Ok(Json(json!({ "success": true })))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn question(id: i64, category: i64) -> Question {
        Question {
            id,
            question: format!("Question {}", id),
            answer: "A".to_string(),
            category,
            difficulty: 1,
        }
    }

    fn geography() -> Vec<Question> {
        (10..16).map(|id| question(id, 3)).collect()
    }

    #[test]
    fn never_returns_a_previous_question() {
        let mut rng = StdRng::seed_from_u64(7);
        let previous: HashSet<i64> = [13, 14].into_iter().collect();

        for _ in 0..200 {
            let picked = pick_next_question(geography(), &previous, &mut rng).unwrap();
            assert!(!previous.contains(&picked.id));
            assert_eq!(picked.category, 3);
        }
    }

    #[test]
    fn reaches_every_remaining_question() {
        let mut rng = StdRng::seed_from_u64(42);
        let previous: HashSet<i64> = [10, 11].into_iter().collect();

        let seen: HashSet<i64> = (0..500)
            .filter_map(|_| pick_next_question(geography(), &previous, &mut rng))
            .map(|q| q.id)
            .collect();

        assert_eq!(seen, [12, 13, 14, 15].into_iter().collect());
    }

    #[test]
    fn returns_last_unseen_question() {
        let mut rng = StdRng::seed_from_u64(1);
        let previous: HashSet<i64> = [10, 11, 12, 13, 15].into_iter().collect();

        let picked = pick_next_question(geography(), &previous, &mut rng).unwrap();
        assert_eq!(picked.id, 14);
    }

    #[test]
    fn exhausted_when_everything_was_seen() {
        let mut rng = StdRng::seed_from_u64(3);
        let previous: HashSet<i64> = (10..16).collect();

        assert!(pick_next_question(geography(), &previous, &mut rng).is_none());
    }

    #[test]
    fn exhausted_when_there_are_no_candidates() {
        let mut rng = StdRng::seed_from_u64(3);

        assert!(pick_next_question(Vec::new(), &HashSet::new(), &mut rng).is_none());
    }

    #[test]
    fn ids_from_other_categories_do_not_count_as_seen() {
        let mut rng = StdRng::seed_from_u64(9);
        // Same count as the candidate set, but only half of them overlap.
        let previous: HashSet<i64> = [10, 11, 12, 100, 101, 102].into_iter().collect();

        let picked = pick_next_question(geography(), &previous, &mut rng).unwrap();
        assert!([13, 14, 15].contains(&picked.id));
    }
}
