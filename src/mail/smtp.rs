use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message as MailMessage, Tokio1Executor};
use tracing::error;

use crate::config::SmtpConfig;
use crate::content::{ASSISTANT_SENDER_NAME, REPORT_RECIPIENT};
use crate::errors::AppError;
use crate::mail::{EmailPayload, MailOutcome, Mailer};

const SUBJECT: &str = "🚀 Yeni Proje Raporu (Web Asistanı)";
const DELIVERY_ERROR: &str = "E-posta gönderilirken bir hata oluştu.";

/// [`Mailer`] that hands the payload to an SMTP relay over STARTTLS.
/// Messages go out from the configured account to the fixed report inbox;
/// the visitor's own address is kept as the reply-to.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, AppError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| AppError::Unexpected(format!("Failed to configure SMTP relay: {e}")))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        let from = format!("{ASSISTANT_SENDER_NAME} <{}>", config.username)
            .parse()
            .map_err(|_| AppError::InvalidEnv {
                name: "SMTP_EMAIL",
                value: config.username.clone(),
            })?;
        let to = REPORT_RECIPIENT
            .parse()
            .map_err(|e| AppError::Unexpected(format!("Bad report recipient address: {e}")))?;

        Ok(Self { transport, from, to })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, payload: &EmailPayload) -> MailOutcome {
        let mut builder = MailMessage::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(SUBJECT);
        // Keeps "reply" in the mail client going to the visitor, not to the
        // relay account. Skipped when the visitor address does not parse.
        if let Ok(reply_to) = payload_mailbox(payload) {
            builder = builder.reply_to(reply_to);
        }

        let email = match builder.multipart(MultiPart::alternative_plain_html(
            payload.message.clone(),
            html_body(&payload.message),
        )) {
            Ok(email) => email,
            Err(e) => {
                error!("Failed to assemble report e-mail: {e}");
                return MailOutcome::failed(DELIVERY_ERROR);
            }
        };

        match self.transport.send(email).await {
            Ok(_) => MailOutcome::delivered(),
            Err(e) => {
                error!("SMTP delivery failed: {e}");
                MailOutcome::failed(DELIVERY_ERROR)
            }
        }
    }
}

fn payload_mailbox(payload: &EmailPayload) -> Result<Mailbox, lettre::address::AddressError> {
    format!("{} <{}>", payload.from_name, payload.from_email).parse()
}

/// HTML rendition of the payload text: escaped, with line breaks preserved,
/// inside a short notification wrapper.
fn html_body(message: &str) -> String {
    let content = escape_html(message).replace('\n', "<br>");
    format!(
        r#"<div style="font-family: Arial, sans-serif; padding: 20px; color: #333;">
  <h2 style="color: #2563eb;">Yeni Bir Müşteri Raporu Var!</h2>
  <p>Web sitendeki AI asistan üzerinden yeni bir proje özeti oluşturuldu.</p>
  <hr style="border: 1px solid #eee; margin: 20px 0;" />
  <div style="background-color: #f8f9fa; padding: 15px; border-radius: 5px; white-space: pre-wrap;">{content}</div>
  <p style="font-size: 12px; color: #888; margin-top: 20px;">Bu mesaj otomatik olarak gönderilmiştir.</p>
</div>"#
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
