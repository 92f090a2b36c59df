pub mod chat_service;
pub mod contact_service;
