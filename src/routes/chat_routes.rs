use askama::Template;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Form;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::Message;
use crate::report;
use crate::routes::{error_response, render};
use crate::service::chat_service::SessionView;
use crate::session::ChatStatus;
use crate::state::AppState;

// ── Form input ────────────────────────────────────────────────────────────────

#[derive(serde::Deserialize)]
pub struct ChatMessageForm {
    #[serde(default)]
    pub message: String,
}

// ── Template structs ──────────────────────────────────────────────────────────

/// View model for a transcript entry, flattened for askama template use.
pub struct MessageView {
    pub id: String,
    pub sender: String,
    pub text: String,
    pub has_report: bool,
}

impl From<&Message> for MessageView {
    fn from(m: &Message) -> Self {
        Self {
            id: m.id.clone(),
            sender: m.sender.as_str().to_string(),
            text: m.text.clone(),
            has_report: report::mentions_report(&m.text),
        }
    }
}

#[derive(Template)]
#[template(path = "chat_widget.html")]
struct ChatWidgetTemplate {
    session_id: String,
    messages: Vec<MessageView>,
    is_chatting: bool,
    is_reviewing: bool,
    is_completed: bool,
    notice: Option<String>,
}

impl From<&SessionView> for ChatWidgetTemplate {
    fn from(view: &SessionView) -> Self {
        Self {
            session_id: view.id.to_string(),
            messages: view.messages.iter().map(MessageView::from).collect(),
            is_chatting: view.status == ChatStatus::Chatting,
            is_reviewing: view.status == ChatStatus::Reviewing,
            is_completed: view.status == ChatStatus::Completed,
            notice: view.notice.clone(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST `/chat/session` — opens a session, returns the widget fragment.
pub async fn start_chat_handler(State(state): State<AppState>) -> Response {
    match state.chat.start_session() {
        Ok(view) => render(ChatWidgetTemplate::from(&view)),
        Err(err) => error_response(&err),
    }
}

/// POST `/chat/session/{id}/message` — one visitor turn.
pub async fn chat_message_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Form(form): Form<ChatMessageForm>,
) -> Response {
    let Ok(session_id) = Uuid::parse_str(&id) else {
        return error_response(&AppError::SessionNotFound { id });
    };
    match state.chat.submit(session_id, &form.message).await {
        Ok(view) => render(ChatWidgetTemplate::from(&view)),
        Err(err) => error_response(&err),
    }
}

/// POST `/chat/session/{id}/regenerate` — asks for a reworked report.
pub async fn chat_regenerate_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Response {
    let Ok(session_id) = Uuid::parse_str(&id) else {
        return error_response(&AppError::SessionNotFound { id });
    };
    match state.chat.regenerate(session_id).await {
        Ok(view) => render(ChatWidgetTemplate::from(&view)),
        Err(err) => error_response(&err),
    }
}

/// POST `/chat/session/{id}/confirm` — mails the pending report.
pub async fn chat_confirm_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Response {
    let Ok(session_id) = Uuid::parse_str(&id) else {
        return error_response(&AppError::SessionNotFound { id });
    };
    match state.chat.confirm(session_id).await {
        Ok(view) => render(ChatWidgetTemplate::from(&view)),
        Err(err) => error_response(&err),
    }
}
