//! Outgoing mail. Two interchangeable adapters sit behind [`Mailer`]: an
//! SMTP relay and the EmailJS REST API. Which one runs is a deployment
//! decision made in [`crate::config::MailConfig`]; callers never know which
//! adapter they talk to.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::MailConfig;
use crate::errors::AppError;

mod emailjs;
mod smtp;

pub use emailjs::EmailJsMailer;
pub use smtp::SmtpMailer;

const SENT_MESSAGE: &str = "E-posta başarıyla gönderildi.";

/// Flat field set handed to an adapter. Assembled per send, never stored.
#[derive(Debug, Clone)]
pub struct EmailPayload {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_name: Option<String>,
}

/// Delivery result. Adapters never raise; every failure is folded into a
/// `success: false` outcome with a visitor-facing message.
#[derive(Debug, Clone)]
pub struct MailOutcome {
    pub success: bool,
    pub message: String,
}

impl MailOutcome {
    pub fn delivered() -> Self {
        Self { success: true, message: SENT_MESSAGE.to_string() }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, payload: &EmailPayload) -> MailOutcome;
}

/// Builds the adapter selected by configuration.
pub fn build_mailer(config: &MailConfig) -> Result<Arc<dyn Mailer>, AppError> {
    match config {
        MailConfig::Smtp(cfg) => Ok(Arc::new(SmtpMailer::new(cfg)?)),
        MailConfig::EmailJs(cfg) => Ok(Arc::new(EmailJsMailer::new(cfg.clone()))),
    }
}
