use async_trait::async_trait;
use serde::Serialize;
use tracing::error;

use crate::config::EmailJsConfig;
use crate::mail::{EmailPayload, MailOutcome, Mailer};

const API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
const DELIVERY_ERROR: &str = "E-posta gönderilemedi. Lütfen daha sonra tekrar deneyin.";

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    from_email: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    to_name: Option<&'a str>,
}

/// [`Mailer`] that posts the payload to the EmailJS send endpoint. The
/// actual recipient and layout live in the EmailJS template referenced by
/// the configured template id.
pub struct EmailJsMailer {
    client: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJsMailer {
    pub fn new(config: EmailJsConfig) -> Self {
        Self { client: reqwest::Client::new(), config }
    }
}

#[async_trait]
impl Mailer for EmailJsMailer {
    async fn send(&self, payload: &EmailPayload) -> MailOutcome {
        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: TemplateParams {
                from_name: &payload.from_name,
                from_email: &payload.from_email,
                message: &payload.message,
                to_name: payload.to_name.as_deref(),
            },
        };

        let response = match self.client.post(API_URL).json(&request).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("EmailJS request failed: {e}");
                return MailOutcome::failed(DELIVERY_ERROR);
            }
        };

        if response.status().is_success() {
            return MailOutcome::delivered();
        }

        let status = response.status();
        let detail = response.text().await.unwrap_or_default();
        error!("EmailJS rejected the request ({status}): {detail}");
        MailOutcome::failed(DELIVERY_ERROR)
    }
}
