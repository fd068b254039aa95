// src/handlers/questions.rs

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    response::IntoResponse,
};
use serde_json::json;
use sqlx::AnyPool;
use validator::Validate;

use crate::{
    error::AppError,
    handlers::categories::fetch_categories,
    models::{
        category,
        question::{CreateQuestionRequest, Question, SearchRequest},
    },
    utils::pagination::{PageParams, paginate},
};

/// Lists questions page by page (`?page=N`, 10 per page) together with all categories.
/// An empty page is reported as 404.
pub async fn list_questions(
    State(pool): State<AnyPool>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let page = params.map(|Query(p)| p).unwrap_or_default().page();

    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        ORDER BY id
        "#,
    )
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to list questions: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    let total_questions = questions.len();
    let current_questions = paginate(questions, page);

    if current_questions.is_empty() {
        return Err(AppError::NotFound(format!("Page {} is empty", page)));
    }

    let categories = fetch_categories(&pool).await?;

    Ok(Json(json!({
        "success": true,
        "questions": current_questions,
        "total_questions": total_questions,
        "categories": category::to_map(categories),
        "current_category": null,
    })))
}

/// Deletes a question by ID.
/// An id that does not exist is unprocessable rather than not-found.
pub async fn delete_question(
    State(pool): State<AnyPool>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path.map_err(|e| AppError::NotFound(e.body_text()))?;

    let mut tx = pool
        .begin()
        .await
        .map_err(|e| AppError::Unprocessable(e.to_string()))?;

    let result = sqlx::query(r#"DELETE FROM questions WHERE id = $1"#)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete question {}: {:?}", id, e);
            AppError::Unprocessable(e.to_string())
        })?;

    if result.rows_affected() == 0 {
        return Err(AppError::Unprocessable(format!("Question {} does not exist", id)));
    }

    tx.commit()
        .await
        .map_err(|e| AppError::Unprocessable(e.to_string()))?;

    tracing::info!("Deleted question {}", id);

    Ok(Json(json!({
        "success": true,
        "deleted": id,
    })))
}

/// Creates a new question.
/// Any missing or invalid field, or an unknown category, is unprocessable.
pub async fn create_question(
    State(pool): State<AnyPool>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::Unprocessable(e.body_text()))?;

    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::Unprocessable(validation_errors.to_string()));
    }

    let mut tx = pool.begin().await?;

    let category_exists = sqlx::query_scalar::<_, i64>(r#"SELECT id FROM categories WHERE id = $1"#)
        .bind(payload.category)
        .fetch_optional(&mut *tx)
        .await?
        .is_some();

    if !category_exists {
        return Err(AppError::Unprocessable(format!(
            "Category {} does not exist",
            payload.category
        )));
    }

    let id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO questions (question, answer, category, difficulty)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(&payload.question)
    .bind(&payload.answer)
    .bind(payload.category)
    .bind(payload.difficulty)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create question: {:?}", e);
        AppError::Unprocessable(e.to_string())
    })?;

    tx.commit()
        .await
        .map_err(|e| AppError::Unprocessable(e.to_string()))?;

    tracing::info!("Created question {} in category {}", id, payload.category);

    Ok(Json(json!({
        "success": true,
        "question": payload.question,
    })))
}

/// Case-insensitive substring search over question text.
/// Matching happens in Rust; SQLite's `LOWER` only folds ASCII.
pub async fn search_questions(
    State(pool): State<AnyPool>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::Unprocessable(e.body_text()))?;

    let questions: Vec<Question> = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        ORDER BY id
        "#,
    )
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to search questions: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?
    .into_iter()
    .filter(|q| payload.matches(&q.question))
    .collect();

    Ok(Json(json!({
        "success": true,
        "total_questions": questions.len(),
        "questions": questions,
        "current_category": null,
    })))
}
