use std::sync::Arc;

use tracing::{info, warn};

use halukinal_medya::agent::{ConversationModel, GeminiAgentService};
use halukinal_medya::config::AppConfig;
use halukinal_medya::mail;
use halukinal_medya::routes::build_router;
use halukinal_medya::service::chat_service::ChatService;
use halukinal_medya::service::contact_service::ContactService;
use halukinal_medya::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Initialise tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "halukinal_medya=debug,tower_http=debug".into()),
        )
        .init();

    let config = AppConfig::from_env()?;

    // ── Dependency wiring ─────────────────────────────────────────────────────
    let model: Option<Arc<dyn ConversationModel>> = match &config.gemini_api_key {
        Some(key) => Some(Arc::new(GeminiAgentService::new(key)?)),
        None => {
            warn!("GEMINI_API_KEY is not set; the site runs without the chat assistant");
            None
        }
    };

    let mailer = mail::build_mailer(&config.mail)?;
    info!(
        "Project reports go out through the {} mail adapter",
        config.mail.provider_name()
    );

    let state = AppState {
        chat: ChatService::new(model, Arc::clone(&mailer)),
        contact: ContactService::new(mailer),
    };

    let app = build_router(state);

    // ── Listen ────────────────────────────────────────────────────────────────
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr}/");

    axum::serve(listener, app).await?;
    Ok(())
}
