//! In-memory chat session state.
//!
//! A session is a transcript plus a phase. The phase is a tagged union so
//! that per-phase data only exists while it is meaningful: a pending report
//! exists only while reviewing, and the in-flight flags exist only in the
//! phases that can actually have work in flight. A completed session that
//! is somehow still "busy" is unrepresentable.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::Message;
use crate::report::LeadReport;

#[derive(Debug, Clone)]
pub enum SessionPhase {
    /// Free conversation. `awaiting_reply` is set while a model request is
    /// in flight for this session.
    Chatting { awaiting_reply: bool },
    /// A report was produced and the visitor decides what happens to it.
    /// `sending` is set while the confirmation mail is in flight.
    Reviewing { report: LeadReport, sending: bool },
    /// Terminal. The mailed report is kept for rendering.
    Completed { report: LeadReport },
}

impl SessionPhase {
    pub fn name(&self) -> &'static str {
        match self {
            SessionPhase::Chatting { .. } => "chatting",
            SessionPhase::Reviewing { .. } => "reviewing",
            SessionPhase::Completed { .. } => "completed",
        }
    }
}

/// Phase collapsed to the three-valued flag external surfaces care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatStatus {
    Chatting,
    Reviewing,
    Completed,
}

impl From<&SessionPhase> for ChatStatus {
    fn from(phase: &SessionPhase) -> Self {
        match phase {
            SessionPhase::Chatting { .. } => ChatStatus::Chatting,
            SessionPhase::Reviewing { .. } => ChatStatus::Reviewing,
            SessionPhase::Completed { .. } => ChatStatus::Completed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    id: Uuid,
    transcript: Vec<Message>,
    phase: SessionPhase,
    started_at: DateTime<Utc>,
    last_activity: DateTime<Utc>,
}

impl ChatSession {
    pub fn new(greeting: Message) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            transcript: vec![greeting],
            phase: SessionPhase::Chatting { awaiting_reply: false },
            started_at: now,
            last_activity: now,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn status(&self) -> ChatStatus {
        ChatStatus::from(&self.phase)
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }

    pub fn idle_since(&self, cutoff: DateTime<Utc>) -> bool {
        self.last_activity < cutoff
    }

    #[cfg(test)]
    pub(crate) fn backdate(&mut self, by: chrono::Duration) {
        self.last_activity = self.last_activity - by;
    }

    /// Records a visitor message and marks a model request as in flight.
    /// Only legal while chatting with nothing else in flight.
    pub fn begin_submit(&mut self, user_message: Message) -> Result<(), AppError> {
        match &mut self.phase {
            SessionPhase::Chatting { awaiting_reply } => {
                if *awaiting_reply {
                    return Err(self.busy());
                }
                *awaiting_reply = true;
                self.transcript.push(user_message);
                Ok(())
            }
            SessionPhase::Reviewing { sending, .. } => {
                if *sending {
                    return Err(self.busy());
                }
                Err(AppError::WrongPhase { phase: "reviewing" })
            }
            SessionPhase::Completed { .. } => Err(self.completed()),
        }
    }

    /// Records the canned revision request and drops back to chatting with a
    /// model request in flight. Only legal while reviewing idle.
    pub fn begin_regenerate(&mut self, user_message: Message) -> Result<(), AppError> {
        match &self.phase {
            SessionPhase::Reviewing { sending: false, .. } => {
                self.phase = SessionPhase::Chatting { awaiting_reply: true };
                self.transcript.push(user_message);
                Ok(())
            }
            SessionPhase::Reviewing { sending: true, .. } => Err(self.busy()),
            SessionPhase::Chatting { awaiting_reply: true } => Err(self.busy()),
            SessionPhase::Chatting { awaiting_reply: false } => {
                Err(AppError::WrongPhase { phase: "chatting" })
            }
            SessionPhase::Completed { .. } => Err(self.completed()),
        }
    }

    /// Records the assistant reply for the in-flight request. With a report
    /// the session moves to reviewing, otherwise it stays chatting.
    pub fn settle_reply(
        &mut self,
        assistant_message: Message,
        report: Option<LeadReport>,
    ) -> Result<(), AppError> {
        match self.phase {
            SessionPhase::Chatting { awaiting_reply: true } => {
                self.transcript.push(assistant_message);
                self.phase = match report {
                    Some(report) => SessionPhase::Reviewing { report, sending: false },
                    None => SessionPhase::Chatting { awaiting_reply: false },
                };
                Ok(())
            }
            _ => Err(AppError::WrongPhase { phase: self.phase.name() }),
        }
    }

    /// Records the connectivity fallback for a failed request and returns
    /// the session to idle chatting.
    pub fn settle_failure(&mut self, fallback_message: Message) -> Result<(), AppError> {
        match self.phase {
            SessionPhase::Chatting { awaiting_reply: true } => {
                self.transcript.push(fallback_message);
                self.phase = SessionPhase::Chatting { awaiting_reply: false };
                Ok(())
            }
            _ => Err(AppError::WrongPhase { phase: self.phase.name() }),
        }
    }

    /// Marks the pending report as being mailed and hands it out.
    pub fn begin_confirm(&mut self) -> Result<LeadReport, AppError> {
        match &mut self.phase {
            SessionPhase::Reviewing { report, sending } => {
                if *sending {
                    return Err(self.busy());
                }
                *sending = true;
                Ok(report.clone())
            }
            SessionPhase::Chatting { awaiting_reply: true } => Err(self.busy()),
            SessionPhase::Chatting { awaiting_reply: false } => {
                Err(AppError::WrongPhase { phase: "chatting" })
            }
            SessionPhase::Completed { .. } => Err(self.completed()),
        }
    }

    /// The confirmation mail went out; the session is done.
    pub fn finish_confirm_success(&mut self) -> Result<(), AppError> {
        match &self.phase {
            SessionPhase::Reviewing { report, sending: true } => {
                let report = report.clone();
                self.phase = SessionPhase::Completed { report };
                Ok(())
            }
            _ => Err(AppError::WrongPhase { phase: self.phase.name() }),
        }
    }

    /// The confirmation mail failed; the report stays up for another try.
    pub fn finish_confirm_failure(&mut self) -> Result<(), AppError> {
        match &mut self.phase {
            SessionPhase::Reviewing { sending, .. } if *sending => {
                *sending = false;
                Ok(())
            }
            _ => Err(AppError::WrongPhase { phase: self.phase.name() }),
        }
    }

    fn busy(&self) -> AppError {
        AppError::SessionBusy { id: self.id.to_string() }
    }

    fn completed(&self) -> AppError {
        AppError::SessionCompleted { id: self.id.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report;

    fn fresh() -> ChatSession {
        ChatSession::new(Message::assistant("Merhaba!"))
    }

    fn sample_report() -> LeadReport {
        let text = format!(
            "{}\n**Kategori:** Düğün\n{}",
            report::REPORT_START,
            report::REPORT_END
        );
        report::extract(&text).unwrap().unwrap()
    }

    fn reviewing() -> ChatSession {
        let mut s = fresh();
        s.begin_submit(Message::user("merhaba")).unwrap();
        s.settle_reply(Message::assistant("rapor"), Some(sample_report()))
            .unwrap();
        s
    }

    #[test]
    fn new_session_starts_chatting_with_the_greeting() {
        let s = fresh();
        assert_eq!(s.status(), ChatStatus::Chatting);
        assert_eq!(s.transcript().len(), 1);
    }

    #[test]
    fn submit_appends_and_marks_in_flight() {
        let mut s = fresh();
        s.begin_submit(Message::user("selam")).unwrap();
        assert_eq!(s.transcript().len(), 2);
        assert!(matches!(s.phase(), SessionPhase::Chatting { awaiting_reply: true }));
    }

    #[test]
    fn overlapping_submit_is_rejected() {
        let mut s = fresh();
        s.begin_submit(Message::user("bir")).unwrap();
        let err = s.begin_submit(Message::user("iki")).unwrap_err();
        assert!(err.is_busy());
        // The rejected message must not leak into the transcript.
        assert_eq!(s.transcript().len(), 2);
    }

    #[test]
    fn reply_without_report_stays_chatting() {
        let mut s = fresh();
        s.begin_submit(Message::user("selam")).unwrap();
        s.settle_reply(Message::assistant("tabii"), None).unwrap();
        assert!(matches!(s.phase(), SessionPhase::Chatting { awaiting_reply: false }));
        assert_eq!(s.transcript().len(), 3);
    }

    #[test]
    fn reply_with_report_enters_reviewing() {
        let s = reviewing();
        assert!(matches!(s.phase(), SessionPhase::Reviewing { sending: false, .. }));
    }

    #[test]
    fn failure_settles_back_to_idle_chatting() {
        let mut s = fresh();
        s.begin_submit(Message::user("selam")).unwrap();
        s.settle_failure(Message::assistant("üzgünüm")).unwrap();
        assert!(matches!(s.phase(), SessionPhase::Chatting { awaiting_reply: false }));
        assert_eq!(s.transcript().len(), 3);
    }

    #[test]
    fn free_text_is_rejected_while_reviewing() {
        let mut s = reviewing();
        let err = s.begin_submit(Message::user("bu arada")).unwrap_err();
        assert!(matches!(err, AppError::WrongPhase { phase: "reviewing" }));
    }

    #[test]
    fn regenerate_returns_to_chatting_in_flight() {
        let mut s = reviewing();
        s.begin_regenerate(Message::user("tekrar bakalım")).unwrap();
        assert!(matches!(s.phase(), SessionPhase::Chatting { awaiting_reply: true }));
        assert_eq!(s.transcript().len(), 4);
    }

    #[test]
    fn regenerate_is_only_legal_while_reviewing() {
        let mut s = fresh();
        let err = s.begin_regenerate(Message::user("tekrar")).unwrap_err();
        assert!(matches!(err, AppError::WrongPhase { phase: "chatting" }));
    }

    #[test]
    fn confirm_hands_out_the_report_and_marks_sending() {
        let mut s = reviewing();
        let report = s.begin_confirm().unwrap();
        assert!(report.body().contains("Düğün"));
        assert!(matches!(s.phase(), SessionPhase::Reviewing { sending: true, .. }));
    }

    #[test]
    fn confirm_while_sending_is_rejected() {
        let mut s = reviewing();
        s.begin_confirm().unwrap();
        assert!(s.begin_confirm().unwrap_err().is_busy());
    }

    #[test]
    fn confirm_success_is_terminal() {
        let mut s = reviewing();
        s.begin_confirm().unwrap();
        s.finish_confirm_success().unwrap();
        assert_eq!(s.status(), ChatStatus::Completed);

        assert!(matches!(
            s.begin_submit(Message::user("bir şey daha")),
            Err(AppError::SessionCompleted { .. })
        ));
        assert!(matches!(
            s.begin_regenerate(Message::user("tekrar")),
            Err(AppError::SessionCompleted { .. })
        ));
        assert!(matches!(s.begin_confirm(), Err(AppError::SessionCompleted { .. })));
    }

    #[test]
    fn confirm_failure_keeps_the_report_for_retry() {
        let mut s = reviewing();
        let before = s.begin_confirm().unwrap();
        s.finish_confirm_failure().unwrap();
        assert!(matches!(s.phase(), SessionPhase::Reviewing { sending: false, .. }));
        let again = s.begin_confirm().unwrap();
        assert_eq!(before, again);
    }

    #[test]
    fn settle_is_rejected_when_nothing_is_in_flight() {
        let mut s = fresh();
        let err = s.settle_reply(Message::assistant("geç kaldım"), None).unwrap_err();
        assert!(matches!(err, AppError::WrongPhase { .. }));
    }

    #[test]
    fn idle_check_uses_last_activity() {
        let mut s = fresh();
        assert!(!s.idle_since(Utc::now() - chrono::Duration::minutes(5)));
        s.touch();
        assert!(s.idle_since(Utc::now() + chrono::Duration::minutes(5)));
    }
}
