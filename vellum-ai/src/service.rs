use secrecy::{ExposeSecret, SecretString};

use crate::config::{self, ConfigStore};
use crate::error::AiError;
use crate::provider::Provider;
use crate::{gemini, openai};

const VALIDATION_PROMPT: &str = "Hi";
const EMPTY_RESPONSE_PLACEHOLDER: &str = "No response generated.";

/// Generation client bound to one persisted provider selection.
///
/// The provider name is kept unresolved so that a client can always be
/// constructed from stored configuration; an unknown name fails at the
/// first generation attempt, before any network traffic.
#[derive(Debug)]
pub struct AiService {
    client: reqwest::Client,
    provider_name: String,
    api_key: SecretString,
}

impl AiService {
    pub fn new(provider_name: String, api_key: SecretString) -> Self {
        Self {
            client: reqwest::Client::new(),
            provider_name,
            api_key,
        }
    }

    /// Return the persisted provider name this client was built from.
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    /// Generate a completion for the prompt, with optional leading context.
    ///
    /// An empty extraction yields a fixed placeholder rather than an error;
    /// a non-success response surfaces the provider's message when present.
    pub async fn generate_content(
        &self,
        prompt: &str,
        context: Option<&str>,
    ) -> Result<String, AiError> {
        let provider = self.resolved_provider()?;
        let endpoint = provider_endpoint(provider);

        self.generate_with(provider, endpoint, prompt, context).await
    }

    /// Streaming facade over [`AiService::generate_content`].
    ///
    /// Delivers the full result as a single chunk to the optional callback
    /// before returning it. Callers relying on at-most-one invocation and
    /// the return value equalling the full text stay correct if this ever
    /// becomes a true streaming call.
    pub async fn stream_content<F>(
        &self,
        prompt: &str,
        context: Option<&str>,
        on_chunk: Option<F>,
    ) -> Result<String, AiError>
    where
        F: FnMut(&str),
    {
        let text = self.generate_content(prompt, context).await?;
        Ok(deliver_single_chunk(text, on_chunk))
    }

    async fn generate_with(
        &self,
        provider: Provider,
        endpoint: &str,
        prompt: &str,
        context: Option<&str>,
    ) -> Result<String, AiError> {
        let prompt = combined_prompt(prompt, context);
        let api_key = self.api_key.expose_secret();

        let text = match provider {
            Provider::Gemini => {
                gemini::generate(&self.client, endpoint, api_key, &prompt)
                    .await?
            },
            Provider::OpenAi => {
                openai::generate(&self.client, endpoint, api_key, &prompt)
                    .await?
            },
        };

        Ok(text.unwrap_or_else(|| String::from(EMPTY_RESPONSE_PLACEHOLDER)))
    }

    fn resolved_provider(&self) -> Result<Provider, AiError> {
        Provider::from_name(&self.provider_name).ok_or_else(|| {
            AiError::UnsupportedProvider(self.provider_name.clone())
        })
    }
}

/// Build a client from stored configuration.
///
/// Yields a client only when both a provider entry and a matching API key
/// are persisted; absence of either is "no client", not an error.
pub fn create_ai_service(store: &dyn ConfigStore) -> Option<AiService> {
    let provider_name = store.get(config::PROVIDER_ENTRY)?;
    let api_key = config::api_key(store, &provider_name)?;

    Some(AiService::new(provider_name, api_key))
}

/// Build a client fixed to the Gemini provider, ignoring the stored
/// provider selection.
pub fn gemini_service(store: &dyn ConfigStore) -> Option<AiService> {
    let provider_name = String::from(Provider::Gemini.name());
    let api_key = config::api_key(store, &provider_name)?;

    Some(AiService::new(provider_name, api_key))
}

/// Check a key against the provider with a minimal generation request.
///
/// Any failure, network or remote, yields `false`; nothing propagates.
pub async fn validate_api_key(provider: Provider, api_key: &str) -> bool {
    let client = reqwest::Client::new();
    validate_at(&client, provider, provider_endpoint(provider), api_key).await
}

async fn validate_at(
    client: &reqwest::Client,
    provider: Provider,
    endpoint: &str,
    api_key: &str,
) -> bool {
    let outcome = match provider {
        Provider::Gemini => {
            gemini::generate(client, endpoint, api_key, VALIDATION_PROMPT)
                .await
        },
        Provider::OpenAi => {
            openai::generate(client, endpoint, api_key, VALIDATION_PROMPT)
                .await
        },
    };

    match outcome {
        Ok(_) => true,
        Err(err) => {
            log::warn!(
                "api key validation failed for {}: {err}",
                provider.name()
            );
            false
        },
    }
}

fn provider_endpoint(provider: Provider) -> &'static str {
    match provider {
        Provider::Gemini => gemini::GEMINI_API_BASE,
        Provider::OpenAi => openai::OPENAI_API_URL,
    }
}

/// Prepend a labeled context block when context is supplied.
fn combined_prompt(prompt: &str, context: Option<&str>) -> String {
    match context {
        Some(context) if !context.is_empty() => {
            format!("Context:\n{context}\n\n{prompt}")
        },
        _ => String::from(prompt),
    }
}

fn deliver_single_chunk<F>(text: String, on_chunk: Option<F>) -> String
where
    F: FnMut(&str),
{
    if let Some(mut on_chunk) = on_chunk {
        on_chunk(&text);
    }

    text
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::{
        AiService, combined_prompt, create_ai_service, deliver_single_chunk,
        gemini_service, validate_at,
    };
    use crate::config::{
        ConfigStore, MemoryConfigStore, set_api_key, set_provider,
    };
    use crate::error::AiError;
    use crate::provider::Provider;

    fn service(provider_name: &str) -> AiService {
        AiService::new(
            String::from(provider_name),
            SecretString::from(String::from("test-key")),
        )
    }

    #[test]
    fn given_context_when_combining_then_prepends_labeled_header() {
        let prompt = combined_prompt("Explain this", Some("fn main() {}"));

        assert_eq!(prompt, "Context:\nfn main() {}\n\nExplain this");
    }

    #[test]
    fn given_no_context_when_combining_then_prompt_is_unchanged() {
        assert_eq!(combined_prompt("Explain this", None), "Explain this");
        assert_eq!(combined_prompt("Explain this", Some("")), "Explain this");
    }

    #[test]
    fn given_callback_when_delivering_then_invoked_once_with_full_text() {
        let mut chunks: Vec<String> = Vec::new();

        let text = deliver_single_chunk(
            String::from("Hi there"),
            Some(|chunk: &str| chunks.push(String::from(chunk))),
        );

        assert_eq!(text, "Hi there");
        assert_eq!(chunks, vec![String::from("Hi there")]);
    }

    #[test]
    fn given_no_callback_when_delivering_then_returns_text() {
        let on_chunk: Option<fn(&str)> = None;

        assert_eq!(
            deliver_single_chunk(String::from("Hi there"), on_chunk),
            "Hi there",
        );
    }

    #[tokio::test]
    async fn given_unknown_provider_when_generating_then_fails_at_once() {
        let service = service("anthropic");

        let error = service
            .generate_content("Hello", None)
            .await
            .expect_err("unknown provider should fail");

        match error {
            AiError::UnsupportedProvider(name) => assert_eq!(name, "anthropic"),
            other => panic!("expected unsupported provider, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn given_unreachable_endpoint_when_validating_then_returns_false() {
        let client = reqwest::Client::new();

        let valid = validate_at(
            &client,
            Provider::Gemini,
            "http://127.0.0.1:9",
            "test-key",
        )
        .await;

        assert!(!valid);
    }

    #[test]
    fn given_empty_store_when_creating_service_then_returns_none() {
        let store = MemoryConfigStore::default();

        assert!(create_ai_service(&store).is_none());
    }

    #[test]
    fn given_provider_without_key_when_creating_service_then_returns_none() {
        let store = MemoryConfigStore::default();
        set_provider(&store, Provider::OpenAi)
            .expect("provider should persist");
        set_api_key(&store, "gemini", "g-123").expect("key should persist");

        assert!(create_ai_service(&store).is_none());
    }

    #[test]
    fn given_provider_and_key_when_creating_service_then_returns_client() {
        let store = MemoryConfigStore::default();
        set_provider(&store, Provider::OpenAi)
            .expect("provider should persist");
        set_api_key(&store, "openai", "o-123").expect("key should persist");

        let service =
            create_ai_service(&store).expect("service should be created");

        assert_eq!(service.provider_name(), "openai");
    }

    #[test]
    fn given_unknown_stored_provider_when_creating_then_constructs() {
        let store = MemoryConfigStore::default();
        store
            .set("ai-provider", "anthropic")
            .expect("provider should persist");
        set_api_key(&store, "anthropic", "a-123").expect("key should persist");

        let service =
            create_ai_service(&store).expect("service should be created");

        assert_eq!(service.provider_name(), "anthropic");
    }

    #[test]
    fn given_gemini_key_when_creating_legacy_service_then_fixes_provider() {
        let store = MemoryConfigStore::default();
        set_provider(&store, Provider::OpenAi)
            .expect("provider should persist");
        set_api_key(&store, "gemini", "g-123").expect("key should persist");

        let service =
            gemini_service(&store).expect("service should be created");

        assert_eq!(service.provider_name(), "gemini");
        assert!(create_ai_service(&store).is_none());
    }
}
