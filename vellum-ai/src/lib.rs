mod config;
mod error;
mod gemini;
mod openai;
mod provider;
mod service;

pub use crate::config::{
    ConfigStore, MemoryConfigStore, PROVIDER_ENTRY, api_key, api_key_entry,
    selected_provider_name, set_api_key, set_provider,
};
pub use crate::error::{AiError, ConfigStoreError};
pub use crate::provider::Provider;
pub use crate::service::{
    AiService, create_ai_service, gemini_service, validate_api_key,
};
