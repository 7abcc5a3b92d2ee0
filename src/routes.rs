// src/routes.rs

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    handlers::{api, page, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Page routes render the active view; every action POSTs and redirects back to `/`.
/// * `/api/session` exposes a read-only JSON snapshot.
/// * Applies global middleware (Trace) and injects the shared state.
pub fn create_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route("/", get(page::index))
        .route("/generate", post(page::generate))
        .route("/view/material", post(page::show_material))
        .route("/view/quiz", post(page::show_quiz))
        .route("/back", post(page::back))
        .route("/new", post(page::generate_new));

    let quiz_routes = Router::new()
        .route("/answer", post(quiz::select_answer))
        .route("/submit", post(quiz::submit));

    let api_routes = Router::new().route("/session", get(api::session_snapshot));

    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .merge(page_routes)
        .nest("/quiz", quiz_routes)
        .nest("/api", api_routes)
        .route("/health", get(page::health))
        .nest_service("/static", static_files)
        .fallback(page::not_found)
        // Global Middleware (applied from outside in)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
