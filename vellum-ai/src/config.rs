use std::collections::BTreeMap;
use std::sync::Mutex;

use secrecy::SecretString;

use crate::error::ConfigStoreError;
use crate::provider::Provider;

/// Persisted entry naming the selected provider.
pub const PROVIDER_ENTRY: &str = "ai-provider";

/// Key-value access to persisted client configuration.
pub trait ConfigStore: Send + Sync {
    /// Return the stored value for the given entry, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value under the given entry.
    fn set(&self, key: &str, value: &str) -> Result<(), ConfigStoreError>;
}

/// Return the storage entry holding the given provider's API key.
pub fn api_key_entry(provider_name: &str) -> String {
    format!("{provider_name}-api-key")
}

/// Return the persisted provider name, defaulting to gemini when unset.
pub fn selected_provider_name(store: &dyn ConfigStore) -> String {
    store
        .get(PROVIDER_ENTRY)
        .unwrap_or_else(|| String::from(Provider::Gemini.name()))
}

/// Persist the selected provider.
pub fn set_provider(
    store: &dyn ConfigStore,
    provider: Provider,
) -> Result<(), ConfigStoreError> {
    store.set(PROVIDER_ENTRY, provider.name())
}

/// Return the stored API key for the given provider, if any.
pub fn api_key(
    store: &dyn ConfigStore,
    provider_name: &str,
) -> Option<SecretString> {
    store
        .get(&api_key_entry(provider_name))
        .filter(|key| !key.is_empty())
        .map(SecretString::from)
}

/// Persist an API key for the given provider.
pub fn set_api_key(
    store: &dyn ConfigStore,
    provider_name: &str,
    key: &str,
) -> Result<(), ConfigStoreError> {
    store.set(&api_key_entry(provider_name), key)
}

/// In-memory configuration store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.entries.lock() {
            Ok(entries) => entries.get(key).cloned(),
            Err(_) => None,
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ConfigStoreError> {
        match self.entries.lock() {
            Ok(mut entries) => {
                entries.insert(String::from(key), String::from(value));
                Ok(())
            },
            Err(_) => Err(ConfigStoreError::Io(std::io::Error::other(
                "config store lock poisoned",
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::{
        ConfigStore, MemoryConfigStore, api_key, api_key_entry,
        selected_provider_name, set_api_key, set_provider,
    };
    use crate::provider::Provider;

    #[test]
    fn given_empty_store_when_reading_provider_then_defaults_to_gemini() {
        let store = MemoryConfigStore::default();

        assert_eq!(selected_provider_name(&store), "gemini");
    }

    #[test]
    fn given_persisted_provider_when_reading_then_returns_stored_name() {
        let store = MemoryConfigStore::default();
        set_provider(&store, Provider::OpenAi)
            .expect("provider should persist");

        assert_eq!(selected_provider_name(&store), "openai");
    }

    #[test]
    fn given_provider_name_when_building_key_entry_then_appends_suffix() {
        assert_eq!(api_key_entry("gemini"), "gemini-api-key");
        assert_eq!(api_key_entry("openai"), "openai-api-key");
    }

    #[test]
    fn given_stored_key_when_reading_then_round_trips() {
        let store = MemoryConfigStore::default();
        set_api_key(&store, "gemini", "g-123").expect("key should persist");

        let key = api_key(&store, "gemini").expect("key should be present");
        assert_eq!(key.expose_secret(), "g-123");
    }

    #[test]
    fn given_missing_or_empty_key_when_reading_then_returns_none() {
        let store = MemoryConfigStore::default();
        assert!(api_key(&store, "gemini").is_none());

        store
            .set("gemini-api-key", "")
            .expect("empty key should persist");
        assert!(api_key(&store, "gemini").is_none());
    }
}
