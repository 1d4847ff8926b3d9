//! Gemini provider using the `generateContent` REST endpoint.
//!
//! Single-turn, non-streaming: one user prompt in, the first candidate's
//! text parts out.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::advice::provider::{AdviceProvider, ProviderError, api_error};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// ============================================================================
// generateContent API Types
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Serialize, Debug)]
struct RequestContent {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize, Debug)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Joins the text parts of the first candidate.
fn first_candidate_text(response: GenerateContentResponse) -> Option<String> {
    let content = response.candidates.into_iter().next()?.content?;
    let text: String = content.parts.into_iter().map(|p| p.text).collect();
    if text.trim().is_empty() { None } else { Some(text) }
}

// ============================================================================
// Provider Implementation
// ============================================================================

pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider.
    ///
    /// # Arguments
    /// * `api_key` - Google AI Studio API key
    /// * `model` - Model id, e.g. `gemini-2.0-flash`
    /// * `base_url` - Optional custom base URL (defaults to the public v1beta API)
    pub fn new(api_key: String, model: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            model,
            base_url: base_url.unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AdviceProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        info!(
            "Gemini generateContent request: model={}, prompt_len={}",
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        debug!("Gemini response status: {}", response.status());

        if !response.status().is_success() {
            let err = api_error(response).await;
            warn!("Gemini API error: {}", err);
            return Err(err);
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        first_candidate_text(body).ok_or(ProviderError::Empty)
    }
}
