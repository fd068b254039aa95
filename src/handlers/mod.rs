// src/handlers/mod.rs

use crate::error::AppError;

pub mod categories;
pub mod questions;
pub mod quiz;

/// Fallback for paths no route matches.
pub async fn not_found() -> AppError {
    AppError::NotFound("No route".to_string())
}

/// Fallback for a known path hit with a verb it does not serve.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
