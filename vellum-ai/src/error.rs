use serde::Deserialize;
use thiserror::Error;

/// Errors emitted while talking to an AI provider.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("unsupported AI provider '{0}'")]
    UnsupportedProvider(String),
    #[error("AI request failed")]
    Request(#[from] reqwest::Error),
    #[error("AI provider returned {status}: {message}")]
    Remote { status: u16, message: String },
}

impl AiError {
    /// Build a remote error from a non-success response body.
    pub(crate) fn remote(status: reqwest::StatusCode, body: &str) -> Self {
        let message = remote_error_message(body)
            .unwrap_or_else(|| String::from("generation request failed"));

        AiError::Remote {
            status: status.as_u16(),
            message,
        }
    }
}

/// Errors emitted while reading or writing persisted configuration.
#[derive(Debug, Error)]
pub enum ConfigStoreError {
    #[error("config IO failed")]
    Io(#[from] std::io::Error),
    #[error("config JSON failed")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct RemoteErrorBody {
    error: Option<RemoteErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct RemoteErrorDetail {
    message: Option<String>,
}

/// Extract the provider-supplied error message from a failure body.
///
/// Both Gemini and OpenAI wrap failures as `{"error":{"message":…}}`.
pub(crate) fn remote_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<RemoteErrorBody>(body)
        .ok()?
        .error?
        .message
        .filter(|message| !message.is_empty())
}
