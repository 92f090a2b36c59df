use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{Duration, Utc};
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::agent::ConversationModel;
use crate::content;
use crate::errors::AppError;
use crate::mail::{EmailPayload, Mailer};
use crate::models::Message;
use crate::prompt;
use crate::report;
use crate::session::{ChatSession, ChatStatus, SessionPhase};

const MAX_MESSAGE_LENGTH: usize = 8000;
const SESSION_IDLE_MINUTES: i64 = 30;

/// Snapshot of a session handed to the HTTP layer for rendering. Taken
/// under the store lock and owned by the caller afterwards.
#[derive(Debug, Clone)]
pub struct SessionView {
    pub id: Uuid,
    pub messages: Vec<Message>,
    pub status: ChatStatus,
    pub busy: bool,
    /// Visitor-facing notice for a failed confirmation mail.
    pub notice: Option<String>,
}

enum ExchangeKind {
    Submit,
    Regenerate,
}

/// Orchestrates chat sessions: holds the in-memory store, runs model
/// exchanges and mails confirmed reports.
///
/// The store lock is never held across an await. Each operation locks to
/// mutate the session, releases the lock for the slow call, then locks
/// again to settle; the phase flags set in the first step keep concurrent
/// requests for the same session out.
#[derive(Clone)]
pub struct ChatService {
    model: Option<Arc<dyn ConversationModel>>,
    mailer: Arc<dyn Mailer>,
    sessions: Arc<Mutex<HashMap<Uuid, ChatSession>>>,
}

impl ChatService {
    pub fn new(model: Option<Arc<dyn ConversationModel>>, mailer: Arc<dyn Mailer>) -> Self {
        Self { model, mailer, sessions: Arc::new(Mutex::new(HashMap::new())) }
    }

    /// Opens a session seeded with the greeting. No model call is made;
    /// the greeting is fixed wording.
    pub fn start_session(&self) -> Result<SessionView, AppError> {
        if self.model.is_none() {
            return Err(AppError::AssistantNotConfigured);
        }
        let session = ChatSession::new(Message::assistant(prompt::GREETING));
        let mut sessions = self.lock_sessions()?;
        Self::sweep_idle(&mut sessions);
        let view = Self::view_of(&session, None);
        sessions.insert(session.id(), session);
        Ok(view)
    }

    /// Runs one visitor turn: validates, appends the message, asks the
    /// model and settles the reply into the session.
    pub async fn submit(&self, id: Uuid, text: &str) -> Result<SessionView, AppError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AppError::EmptyField { field_name: "message".to_string() });
        }
        if trimmed.len() > MAX_MESSAGE_LENGTH {
            return Err(AppError::FieldTooLong {
                field_name: "message".to_string(),
                max_length: MAX_MESSAGE_LENGTH,
                actual_length: trimmed.len(),
            });
        }
        self.exchange(id, trimmed, ExchangeKind::Submit).await
    }

    /// Asks the model to rework the pending report by replaying the fixed
    /// revision request through the ordinary exchange path.
    pub async fn regenerate(&self, id: Uuid) -> Result<SessionView, AppError> {
        self.exchange(id, prompt::REVISION_REQUEST, ExchangeKind::Regenerate).await
    }

    async fn exchange(
        &self,
        id: Uuid,
        text: &str,
        kind: ExchangeKind,
    ) -> Result<SessionView, AppError> {
        let model = self.model.clone().ok_or(AppError::AssistantNotConfigured)?;

        // History snapshot excludes the just-appended visitor message; the
        // model receives that one as the current turn.
        let history = {
            let mut sessions = self.lock_sessions()?;
            Self::sweep_idle(&mut sessions);
            let session = Self::resolve(&mut sessions, id)?;
            let message = Message::user(text);
            match kind {
                ExchangeKind::Submit => session.begin_submit(message)?,
                ExchangeKind::Regenerate => session.begin_regenerate(message)?,
            }
            session.touch();
            let transcript = session.transcript();
            transcript[..transcript.len() - 1].to_vec()
        };

        let result = model.reply(&history, text).await;

        let mut sessions = self.lock_sessions()?;
        let session = Self::resolve(&mut sessions, id).map_err(|e| {
            warn!("Chat session {id} vanished while a reply was in flight");
            e
        })?;
        match result {
            Ok(reply) => {
                let reply = if reply.trim().is_empty() {
                    prompt::EMPTY_REPLY_FALLBACK.to_string()
                } else {
                    reply
                };
                let detected = match report::extract(&reply) {
                    Ok(found) => found,
                    Err(e) => {
                        warn!("Ignoring malformed report block in session {id}: {e}");
                        None
                    }
                };
                session.settle_reply(Message::assistant(reply), detected)?;
            }
            Err(e) => {
                error!("Model request failed for session {id}: {e}");
                session.settle_failure(Message::assistant(prompt::CONNECTIVITY_FALLBACK))?;
            }
        }
        session.touch();
        Ok(Self::view_of(session, None))
    }

    /// Mails the pending report. On success the session completes; on a
    /// failed delivery it returns to reviewing with a notice so the
    /// visitor can retry.
    pub async fn confirm(&self, id: Uuid) -> Result<SessionView, AppError> {
        let pending = {
            let mut sessions = self.lock_sessions()?;
            let session = Self::resolve(&mut sessions, id)?;
            let report = session.begin_confirm()?;
            session.touch();
            report
        };

        let payload = EmailPayload {
            from_name: content::ASSISTANT_SENDER_NAME.to_string(),
            from_email: content::CONTACT_EMAIL.to_string(),
            message: pending.to_delimited_block(),
            to_name: Some(content::OWNER_NAME.to_string()),
        };
        let outcome = self.mailer.send(&payload).await;

        let mut sessions = self.lock_sessions()?;
        let session = Self::resolve(&mut sessions, id).map_err(|e| {
            warn!("Chat session {id} vanished while its report was being mailed");
            e
        })?;
        if outcome.success {
            session.finish_confirm_success()?;
            session.touch();
            Ok(Self::view_of(session, None))
        } else {
            session.finish_confirm_failure()?;
            session.touch();
            Ok(Self::view_of(session, Some(outcome.message)))
        }
    }

    fn resolve(
        sessions: &mut HashMap<Uuid, ChatSession>,
        id: Uuid,
    ) -> Result<&mut ChatSession, AppError> {
        sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::SessionNotFound { id: id.to_string() })
    }

    fn lock_sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, ChatSession>>, AppError> {
        self.sessions.lock().map_err(|_| {
            error!("Chat session store lock poisoned");
            AppError::Unexpected("chat session store lock poisoned".to_string())
        })
    }

    fn sweep_idle(sessions: &mut HashMap<Uuid, ChatSession>) {
        let cutoff = Utc::now() - Duration::minutes(SESSION_IDLE_MINUTES);
        let before = sessions.len();
        sessions.retain(|_, session| !session.idle_since(cutoff));
        let removed = before - sessions.len();
        if removed > 0 {
            debug!("Swept {removed} idle chat session(s)");
        }
    }

    fn view_of(session: &ChatSession, notice: Option<String>) -> SessionView {
        let busy = matches!(
            session.phase(),
            SessionPhase::Chatting { awaiting_reply: true }
                | SessionPhase::Reviewing { sending: true, .. }
        );
        SessionView {
            id: session.id(),
            messages: session.transcript().to_vec(),
            status: session.status(),
            busy,
            notice,
        }
    }
}
