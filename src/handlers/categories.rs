// src/handlers/categories.rs

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
};
use serde_json::json;
use sqlx::AnyPool;

use crate::{
    error::AppError,
    models::{
        category::{self, Category},
        question::Question,
    },
};

/// Loads every category ordered by id.
pub(crate) async fn fetch_categories(pool: &AnyPool) -> Result<Vec<Category>, AppError> {
    let categories = sqlx::query_as::<_, Category>(r#"SELECT id, type FROM categories ORDER BY id"#)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch categories: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

    Ok(categories)
}

/// Loads one category, `None` when the id is unknown.
pub(crate) async fn fetch_category(pool: &AnyPool, id: i64) -> Result<Option<Category>, AppError> {
    let category = sqlx::query_as::<_, Category>(r#"SELECT id, type FROM categories WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(category)
}

/// Lists all categories as an `{id: type}` map.
pub async fn list_categories(State(pool): State<AnyPool>) -> Result<impl IntoResponse, AppError> {
    let categories = fetch_categories(&pool).await?;

    if categories.is_empty() {
        return Err(AppError::NotFound("No categories".to_string()));
    }

    Ok(Json(json!({
        "success": true,
        "categories": category::to_map(categories),
    })))
}

/// Lists every question of one category, ordered by id.
pub async fn list_category_questions(
    State(pool): State<AnyPool>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(category_id) = path.map_err(|e| AppError::NotFound(e.body_text()))?;

    let category = fetch_category(&pool, category_id)
        .await
        .map_err(|e| AppError::NotFound(e.to_string()))?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", category_id)))?;

    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty
        FROM questions
        WHERE category = $1
        ORDER BY id
        "#,
    )
    .bind(category_id)
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch questions for category {}: {:?}", category_id, e);
        AppError::NotFound(e.to_string())
    })?;

    Ok(Json(json!({
        "success": true,
        "total_questions": questions.len(),
        "questions": questions,
        "current_category": category.category_type,
    })))
}
