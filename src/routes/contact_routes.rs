use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::Form;

use crate::routes::{render, render_with_status};
use crate::service::contact_service::{ContactOutcome, ContactSubmission};
use crate::state::AppState;

// ── Form input ────────────────────────────────────────────────────────────────

#[derive(serde::Deserialize)]
pub struct ContactFormInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

// ── Template structs ──────────────────────────────────────────────────────────

#[derive(Template, Default)]
#[template(path = "contact_form.html")]
struct ContactFormTemplate {
    name: String,
    email: String,
    message: String,
    name_error: Option<&'static str>,
    email_error: Option<&'static str>,
    message_error: Option<&'static str>,
    banner: Option<String>,
}

#[derive(Template)]
#[template(path = "contact_success.html")]
struct ContactSuccessTemplate;

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST `/contact` — validates and forwards the message. Invalid input
/// re-renders the form with the typed values and field errors; a failed
/// delivery re-renders it with a banner; success swaps in the success
/// panel.
pub async fn contact_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<ContactFormInput>,
) -> Response {
    let submission = ContactSubmission {
        name: form.name,
        email: form.email,
        message: form.message,
    };

    match state.contact.submit(submission.clone()).await {
        ContactOutcome::Invalid(errors) => render_with_status(
            StatusCode::BAD_REQUEST,
            ContactFormTemplate {
                name: submission.name,
                email: submission.email,
                message: submission.message,
                name_error: errors.name,
                email_error: errors.email,
                message_error: errors.message,
                banner: None,
            },
        ),
        ContactOutcome::Rejected { banner } => render(ContactFormTemplate {
            name: submission.name,
            email: submission.email,
            message: submission.message,
            banner: Some(banner),
            ..ContactFormTemplate::default()
        }),
        ContactOutcome::Sent => render(ContactSuccessTemplate),
    }
}

/// GET `/contact/form` — a blank form. The success panel requests this
/// both from its dismiss button and from its timed auto-reset, so hitting
/// it twice is harmless.
pub async fn contact_form_handler() -> Response {
    render(ContactFormTemplate::default())
}
