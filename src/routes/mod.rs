use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::errors::AppError;
use crate::state::AppState;

pub mod chat_routes;
pub mod contact_routes;
pub mod page_routes;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Page routes
        .route("/", get(page_routes::index_handler))
        .route("/portfolio", get(page_routes::portfolio_handler))
        // Chat widget (HTMX fragments)
        .route("/chat/session", post(chat_routes::start_chat_handler))
        .route("/chat/session/{id}/message", post(chat_routes::chat_message_handler))
        .route("/chat/session/{id}/regenerate", post(chat_routes::chat_regenerate_handler))
        .route("/chat/session/{id}/confirm", post(chat_routes::chat_confirm_handler))
        // Contact form (HTMX fragments)
        .route("/contact", post(contact_routes::contact_submit_handler))
        .route("/contact/form", get(contact_routes::contact_form_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ── Shared helpers ───────────────────────────────────────────────────────────

pub(crate) fn render(tmpl: impl Template) -> Response {
    render_with_status(StatusCode::OK, tmpl)
}

pub(crate) fn render_with_status(status: StatusCode, tmpl: impl Template) -> Response {
    match tmpl.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Template error: {e}"),
        )
            .into_response(),
    }
}

#[derive(Template)]
#[template(path = "error_fragment.html")]
struct ErrorFragmentTemplate {
    error_message: String,
}

/// Maps an [`AppError`] to a status code and renders it as a fragment the
/// widget can swap in place.
pub(crate) fn error_response(err: &AppError) -> Response {
    let status = if err.is_validation() {
        StatusCode::BAD_REQUEST
    } else if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else if err.is_busy()
        || matches!(err, AppError::SessionCompleted { .. } | AppError::WrongPhase { .. })
    {
        StatusCode::CONFLICT
    } else if err.is_agent_unavailable() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    let tmpl = ErrorFragmentTemplate { error_message: err.to_string() };
    match tmpl.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(_) => (status, err.to_string()).into_response(),
    }
}
