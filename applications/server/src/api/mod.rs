/// API route modules
pub mod docs;
pub mod health;
pub mod users;

use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router with all `/api` routes
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api", get(users::list_users))
        .route("/api/health", get(health::health))
        .route("/api/users", post(users::create_user))
        .route("/api/users/:uuid", get(users::get_user))
        .route("/api/:id", delete(users::delete_user))
        .route(docs::OPENAPI_PATH, get(docs::openapi))
        .route("/swagger-ui", get(docs::swagger_ui))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
