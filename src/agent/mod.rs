use async_trait::async_trait;
use rig::completion::Chat;
use rig::message::Message as RigMessage;
use rig::prelude::CompletionClient;
use rig::providers::gemini;
use tracing::error;

use crate::errors::AppError;
use crate::models::{Message, Sender};
use crate::prompt::SYSTEM_INSTRUCTION;

const MODEL: &str = "gemini-2.5-flash";
const TEMPERATURE: f64 = 0.7;

/// One chat turn against the language model. Implementations replay the
/// transcript so the model sees the whole conversation on every turn; the
/// system instruction stays out of the transcript and is attached by the
/// implementation itself.
#[async_trait]
pub trait ConversationModel: Send + Sync {
    async fn reply(&self, history: &[Message], user_message: &str) -> Result<String, AppError>;
}

/// Builds a rig [`RigMessage`] history list from transcript [`Message`]s.
fn to_rig_history(messages: &[Message]) -> Vec<RigMessage> {
    messages
        .iter()
        .map(|m| match m.sender {
            Sender::User => RigMessage::user(&m.text),
            Sender::Assistant => RigMessage::assistant(&m.text),
        })
        .collect()
}

/// [`ConversationModel`] backed by the rig [`gemini::Client`]. A fresh agent
/// is built per request so each turn replays the stored history.
#[derive(Clone)]
pub struct GeminiAgentService {
    client: gemini::Client,
}

impl GeminiAgentService {
    pub fn new(api_key: &str) -> Result<Self, AppError> {
        let client = gemini::Client::builder()
            .api_key(api_key)
            .build()
            .map_err(|e| AppError::Unexpected(format!("Failed to build Gemini client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ConversationModel for GeminiAgentService {
    async fn reply(&self, history: &[Message], user_message: &str) -> Result<String, AppError> {
        let agent = self
            .client
            .agent(MODEL)
            .preamble(SYSTEM_INSTRUCTION)
            .temperature(TEMPERATURE)
            .build();

        let rig_history = to_rig_history(history);

        agent.chat(user_message, rig_history).await.map_err(|e| {
            error!("Gemini inference failed: {e}");
            let msg = e.to_string();
            if msg.contains("Connection refused") || msg.contains("connect") || msg.contains("timed out") {
                AppError::ModelUnreachable { message: msg }
            } else {
                AppError::InferenceError { message: msg }
            }
        })
    }
}
