use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::warn;

use crate::content;
use crate::mail::{EmailPayload, Mailer};

pub const NAME_ERROR: &str = "İsim en az 2 karakter olmalıdır";
pub const EMAIL_ERROR: &str = "Geçerli bir e-posta adresi giriniz";
pub const MESSAGE_ERROR: &str = "Mesajınız en az 10 karakter olmalıdır";

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

/// Raw contact form input, exactly as the visitor typed it.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Field-scoped validation messages. `None` means the field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// Checks the minimum lengths and the e-mail shape. Lengths are counted in
/// characters of the trimmed value, so whitespace padding buys nothing;
/// the submitted values themselves are left untouched.
pub fn validate(submission: &ContactSubmission) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    if submission.name.trim().chars().count() < MIN_NAME_CHARS {
        errors.name = Some(NAME_ERROR);
    }
    if !EMAIL_PATTERN.is_match(submission.email.trim()) {
        errors.email = Some(EMAIL_ERROR);
    }
    if submission.message.trim().chars().count() < MIN_MESSAGE_CHARS {
        errors.message = Some(MESSAGE_ERROR);
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[derive(Debug, Clone)]
pub enum ContactOutcome {
    /// Validation failed; nothing was sent.
    Invalid(FieldErrors),
    /// The mail adapter reported a failed delivery.
    Rejected { banner: String },
    Sent,
}

/// Validates contact submissions and forwards them through the mailer.
#[derive(Clone)]
pub struct ContactService {
    mailer: Arc<dyn Mailer>,
}

impl ContactService {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }

    pub async fn submit(&self, submission: ContactSubmission) -> ContactOutcome {
        if let Err(errors) = validate(&submission) {
            return ContactOutcome::Invalid(errors);
        }

        let payload = EmailPayload {
            message: format_contact_block(&submission),
            from_name: submission.name,
            from_email: submission.email,
            to_name: Some(content::OWNER_NAME.to_string()),
        };
        let outcome = self.mailer.send(&payload).await;
        if outcome.success {
            ContactOutcome::Sent
        } else {
            warn!("Contact form delivery failed: {}", outcome.message);
            ContactOutcome::Rejected { banner: format!("Mesaj gönderilemedi: {}", outcome.message) }
        }
    }
}

/// The fixed header block mailed for contact submissions. The visitor's
/// message is embedded verbatim.
fn format_contact_block(submission: &ContactSubmission) -> String {
    format!(
        "--- WEB SİTESİ İLETİŞİM FORMU ---\nGönderen: {}\nE-posta: {}\n\nMesaj:\n{}",
        submission.name, submission.email, submission.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::MailOutcome;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StubMailer {
        fail_with: Option<&'static str>,
        sent: Mutex<Vec<EmailPayload>>,
    }

    impl StubMailer {
        fn new() -> Arc<Self> {
            Arc::new(Self { fail_with: None, sent: Mutex::new(Vec::new()) })
        }

        fn failing(message: &'static str) -> Arc<Self> {
            Arc::new(Self { fail_with: Some(message), sent: Mutex::new(Vec::new()) })
        }

        fn sent(&self) -> Vec<EmailPayload> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Mailer for StubMailer {
        async fn send(&self, payload: &EmailPayload) -> MailOutcome {
            self.sent.lock().unwrap().push(payload.clone());
            match self.fail_with {
                Some(message) => MailOutcome::failed(message),
                None => MailOutcome::delivered(),
            }
        }
    }

    fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn one_character_name_is_rejected() {
        let errors = validate(&submission("A", "ada@example.com", "On kelimelik bir site istiyorum"))
            .unwrap_err();
        assert_eq!(errors.name, Some(NAME_ERROR));
        assert!(errors.email.is_none());
        assert!(errors.message.is_none());
    }

    #[test]
    fn two_characters_satisfy_the_name_minimum() {
        assert!(validate(&submission("İş", "ada@example.com", "Yeterince uzun bir mesaj")).is_ok());
    }

    #[test]
    fn whitespace_padding_does_not_satisfy_minimums() {
        let errors = validate(&submission("  A  ", "ada@example.com", "Yeterince uzun bir mesaj"))
            .unwrap_err();
        assert_eq!(errors.name, Some(NAME_ERROR));
    }

    #[test]
    fn malformed_addresses_are_rejected() {
        for email in ["adaexample.com", "ada@examplecom", "ada @example.com", "@example.com", ""] {
            let errors = validate(&submission("Ada", email, "Yeterince uzun bir mesaj")).unwrap_err();
            assert_eq!(errors.email, Some(EMAIL_ERROR), "accepted {email:?}");
        }
    }

    #[test]
    fn message_minimum_sits_between_nine_and_ten_characters() {
        let errors = validate(&submission("Ada", "ada@example.com", "dokuz ch.")).unwrap_err();
        assert_eq!(errors.message, Some(MESSAGE_ERROR));
        // "on karakte" is exactly ten characters.
        assert!(validate(&submission("Ada", "ada@example.com", "on karakte")).is_ok());
    }

    #[tokio::test]
    async fn invalid_submission_sends_nothing() {
        let mailer = StubMailer::new();
        let svc = ContactService::new(mailer.clone() as Arc<dyn Mailer>);

        let outcome = svc.submit(submission("A", "kötü-adres", "kısa")).await;
        assert!(matches!(outcome, ContactOutcome::Invalid(_)));
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn valid_submission_mails_one_formatted_block() {
        let mailer = StubMailer::new();
        let svc = ContactService::new(mailer.clone() as Arc<dyn Mailer>);

        let outcome = svc
            .submit(submission(
                "Ada Lovelace",
                "ada@example.com",
                "Please build me a ten-word website.",
            ))
            .await;
        assert!(matches!(outcome, ContactOutcome::Sent));

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].message.contains("Please build me a ten-word website."));
        assert!(sent[0].message.contains("Gönderen: Ada Lovelace"));
        assert!(sent[0].message.contains("E-posta: ada@example.com"));
        assert_eq!(sent[0].from_email, "ada@example.com");
        assert_eq!(sent[0].to_name.as_deref(), Some("Haluk İnal"));
    }

    #[tokio::test]
    async fn failed_delivery_surfaces_a_banner() {
        let mailer = StubMailer::failing("E-posta gönderilirken bir hata oluştu.");
        let svc = ContactService::new(mailer as Arc<dyn Mailer>);

        let outcome = svc
            .submit(submission("Ada", "ada@example.com", "Yeterince uzun bir mesaj"))
            .await;
        match outcome {
            ContactOutcome::Rejected { banner } => {
                assert_eq!(banner, "Mesaj gönderilemedi: E-posta gönderilirken bir hata oluştu.");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }
}
