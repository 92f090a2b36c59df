use crate::service::chat_service::ChatService;
use crate::service::contact_service::ContactService;

/// Shared handler state. Both services are cheap to clone; the session
/// store inside [`ChatService`] is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub chat: ChatService,
    pub contact: ContactService,
}
