//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs
/// first): the request ID middleware runs before the logging middleware, so
/// every log line carries the id.
///
/// # Routes
/// - `/users` - User CRUD operations
/// - `/restaurants` - Restaurant CRUD operations
/// - `/reviews` - Review CRUD operations
/// - `/health` - Health probes
/// - `/swagger-ui` - Interactive API documentation
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(handlers::health::health_routes())
        .nest("/users", handlers::users::user_routes())
        .nest("/restaurants", handlers::restaurants::restaurant_routes())
        .nest("/reviews", handlers::reviews::review_routes())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        // Middleware is applied in reverse order - last added runs first
        // So logging runs after request_id has set the ID
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
