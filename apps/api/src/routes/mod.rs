pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post, put},
    Router,
};

use crate::state::AppState;
use crate::wizard::handlers;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/locale/:lang", get(handlers::handle_get_locale))
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route("/api/v1/sessions/:id", get(handlers::handle_get_session))
        .route("/api/v1/sessions/:id/start", post(handlers::handle_start))
        .route(
            "/api/v1/sessions/:id/intake",
            patch(handlers::handle_update_intake),
        )
        .route(
            "/api/v1/sessions/:id/intake/submit",
            post(handlers::handle_submit_intake),
        )
        .route("/api/v1/sessions/:id/back", post(handlers::handle_back))
        .route(
            "/api/v1/sessions/:id/contract",
            put(handlers::handle_set_contract).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/v1/sessions/:id/contract/upload",
            post(handlers::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/sessions/:id/analyze", post(handlers::handle_analyze))
        .route("/api/v1/sessions/:id/restart", post(handlers::handle_restart))
        .route(
            "/api/v1/sessions/:id/language",
            put(handlers::handle_set_language),
        )
        .route("/api/v1/sessions/:id/report", get(handlers::handle_get_report))
        .route(
            "/api/v1/sessions/:id/report/print",
            get(handlers::handle_print_report),
        )
        .with_state(state)
}
