//! Portfolio site for the media producer Haluk İnal: static marketing
//! sections, an LLM lead-qualification chat widget and a validated contact
//! form, all rendered server-side and driven by HTMX fragment swaps.

pub mod agent;
pub mod config;
pub mod content;
pub mod errors;
pub mod mail;
pub mod models;
pub mod prompt;
pub mod report;
pub mod routes;
pub mod service;
pub mod session;
pub mod state;
