use serde::{Deserialize, Serialize};

use crate::error::AiError;

pub(crate) const GEMINI_API_BASE: &str =
    "https://generativelanguage.googleapis.com/v1beta/models";
pub(crate) const GEMINI_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Serialize)]
pub(crate) struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    content: Option<Content>,
}

/// Build the generation endpoint URL with the API key as query parameter.
pub(crate) fn generation_url(base: &str, model: &str, api_key: &str) -> String {
    format!("{base}/{model}:generateContent?key={api_key}")
}

/// Build a single-turn generation request body.
pub(crate) fn request(prompt: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: String::from(prompt),
            }],
        }],
    }
}

/// Return the first candidate's first text part, if any.
pub(crate) fn extract_text(
    response: &GenerateContentResponse,
) -> Option<String> {
    let part = response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .first()?;

    Some(part.text.clone())
}

/// Send one generation request against the given endpoint base.
pub(crate) async fn generate(
    client: &reqwest::Client,
    base: &str,
    api_key: &str,
    prompt: &str,
) -> Result<Option<String>, AiError> {
    let url = generation_url(base, GEMINI_MODEL, api_key);
    let response = client
        .post(&url)
        .header("Content-Type", "application/json")
        .json(&request(prompt))
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(AiError::remote(status, &body));
    }

    let payload = response.json::<GenerateContentResponse>().await?;
    Ok(extract_text(&payload))
}
