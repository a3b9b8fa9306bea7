use serde::{Deserialize, Serialize};

use crate::error::AiError;

pub(crate) const OPENAI_API_URL: &str =
    "https://api.openai.com/v1/chat/completions";
pub(crate) const OPENAI_MODEL: &str = "gpt-4o";
const OPENAI_MAX_TOKENS: usize = 4096;

#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ChatMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    message: ChatMessage,
}

/// Build a single-turn chat completion request body.
pub(crate) fn request(prompt: &str) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: String::from(OPENAI_MODEL),
        messages: vec![ChatMessage {
            role: String::from("user"),
            content: Some(String::from(prompt)),
        }],
        max_tokens: OPENAI_MAX_TOKENS,
    }
}

/// Return the first choice's message content, if any.
pub(crate) fn extract_text(
    response: &ChatCompletionResponse,
) -> Option<String> {
    response.choices.first()?.message.content.clone()
}

/// Send one chat completion request against the given endpoint.
pub(crate) async fn generate(
    client: &reqwest::Client,
    url: &str,
    api_key: &str,
    prompt: &str,
) -> Result<Option<String>, AiError> {
    let response = client
        .post(url)
        .header("Authorization", format!("Bearer {api_key}"))
        .header("Content-Type", "application/json")
        .json(&request(prompt))
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(AiError::remote(status, &body));
    }

    let payload = response.json::<ChatCompletionResponse>().await?;
    Ok(extract_text(&payload))
}
