use crate::errors::AppError;

/// Runtime configuration, read once at startup from the environment
/// (`.env` is loaded beforehand in `main` as a development convenience).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Absent key leaves the site up with the chat assistant disabled.
    pub gemini_api_key: Option<String>,
    pub mail: MailConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty());

        Ok(Self { port, gemini_api_key, mail: MailConfig::from_env()? })
    }
}

/// Which delivery adapter handles outgoing mail, with its credentials.
#[derive(Debug, Clone)]
pub enum MailConfig {
    Smtp(SmtpConfig),
    EmailJs(EmailJsConfig),
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl MailConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let provider = std::env::var("MAIL_PROVIDER").unwrap_or_else(|_| "smtp".to_string());
        match provider.as_str() {
            "smtp" => Ok(MailConfig::Smtp(SmtpConfig {
                host: require("SMTP_HOST")?,
                port: port_or("SMTP_PORT", 587)?,
                username: require("SMTP_EMAIL")?,
                password: require("SMTP_PASSWORD")?,
            })),
            "emailjs" => Ok(MailConfig::EmailJs(EmailJsConfig {
                service_id: require("EMAILJS_SERVICE_ID")?,
                template_id: require("EMAILJS_TEMPLATE_ID")?,
                public_key: require("EMAILJS_PUBLIC_KEY")?,
            })),
            _ => Err(AppError::UnknownMailProvider { value: provider }),
        }
    }

    pub fn provider_name(&self) -> &'static str {
        match self {
            MailConfig::Smtp(_) => "smtp",
            MailConfig::EmailJs(_) => "emailjs",
        }
    }
}

fn require(name: &'static str) -> Result<String, AppError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(AppError::MissingEnv { name })
}

fn port_or(name: &'static str, default: u16) -> Result<u16, AppError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidEnv { name, value: raw }),
        Err(_) => Ok(default),
    }
}
