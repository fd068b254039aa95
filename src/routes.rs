// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{delete, get, post},
};
use sqlx::AnyPool;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::handlers::{self, categories, method_not_allowed, questions, quiz};

const ALLOWED_METHODS: &str = "GET,PUT,POST,DELETE,OPTIONS,PATCH";
const ALLOWED_HEADERS: &str = "Content-Type,Authorization";

/// Assembles the main application router.
///
/// * Every path answers unsupported verbs with a JSON 405.
/// * Unknown paths answer with a JSON 404.
/// * Applies global middleware (Trace, CORS) and injects the database pool.
pub fn create_router(pool: AnyPool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
            Method::PATCH,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        // CorsLayer only fills these in on preflight; clients expect them everywhere.
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(cors);

    Router::new()
        .route(
            "/categories",
            get(categories::list_categories).fallback(method_not_allowed),
        )
        .route(
            "/categories/{id}/questions",
            get(categories::list_category_questions).fallback(method_not_allowed),
        )
        .route(
            "/questions",
            get(questions::list_questions)
                .post(questions::create_question)
                .fallback(method_not_allowed),
        )
        .route(
            "/questions/search",
            post(questions::search_questions).fallback(method_not_allowed),
        )
        .route(
            "/questions/{id}",
            delete(questions::delete_question).fallback(method_not_allowed),
        )
        .route(
            "/quizzes",
            post(quiz::next_question).fallback(method_not_allowed),
        )
        .fallback(handlers::not_found)
        .layer(middleware)
        .with_state(pool)
}
