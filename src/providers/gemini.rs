use std::time::Duration;
use serde::{Serialize, Deserialize};
use anyhow::{Result, anyhow};
use reqwest::Client;
use log::error;

/// Gemini client for interacting with the generateContent API
pub struct Gemini {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (optional, defaults to the public API)
    endpoint: String,
}

/// A single text part of a Gemini content block
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeminiPart {
    /// The text payload
    #[serde(default)]
    pub text: String,
}

/// Gemini content block: an optional role and its text parts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeminiContent {
    /// Role of the content producer (user, model)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Text parts making up the content
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

/// Generation parameters
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,

    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

/// Gemini generateContent request
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    /// Conversation contents
    contents: Vec<GeminiContent>,

    /// System instruction to guide the model
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,

    /// Generation parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GeminiGenerationConfig>,
}

/// Token usage information
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiUsage {
    /// Number of prompt tokens
    #[serde(default)]
    pub prompt_token_count: u32,
    /// Number of generated tokens
    #[serde(default)]
    pub candidates_token_count: u32,
}

/// Individual candidate in a Gemini response
#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    /// The generated content
    #[serde(default)]
    pub content: GeminiContent,
}

/// Gemini generateContent response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    /// The returned candidates
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
    /// Token usage information
    pub usage_metadata: Option<GeminiUsage>,
}

impl GeminiRequest {
    /// Create a new request with a single user message
    pub fn new(user_text: impl Into<String>) -> Self {
        Self {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart { text: user_text.into() }],
            }],
            ..Default::default()
        }
    }

    /// Set the system instruction
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system_instruction = Some(GeminiContent {
            role: None,
            parts: vec![GeminiPart { text: system.into() }],
        });
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.generation_config
            .get_or_insert_with(GeminiGenerationConfig::default)
            .temperature = Some(temperature);
        self
    }

    /// Set the maximum number of tokens to generate
    pub fn max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.generation_config
            .get_or_insert_with(GeminiGenerationConfig::default)
            .max_output_tokens = Some(max_output_tokens);
        self
    }
}

impl Gemini {
    /// Create a new Gemini client
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Complete a generateContent request against the given model
    pub async fn complete(&self, model: &str, request: GeminiRequest) -> Result<GeminiResponse> {
        let base = if self.endpoint.is_empty() {
            "https://generativelanguage.googleapis.com".to_string()
        } else {
            self.endpoint.trim_end_matches('/').to_string()
        };
        let api_url = format!("{}/v1beta/models/{}:generateContent", base, model);

        let response = self.client.post(&api_url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to send request to Gemini API: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Gemini API error ({}): {}", status, error_text);
            return Err(anyhow!("Gemini API error ({}): {}", status, error_text));
        }

        let gemini_response = response.json::<GeminiResponse>().await
            .map_err(|e| anyhow!("Failed to parse Gemini API response: {}", e))?;

        Ok(gemini_response)
    }

    /// Extract the first candidate's text from a Gemini response
    ///
    /// Concatenates the candidate's text parts; no candidates yields an
    /// empty string rather than an error.
    pub fn extract_text_from_response(response: &GeminiResponse) -> String {
        response.candidates.first()
            .map(|candidate| {
                candidate.content.parts.iter()
                    .map(|part| part.text.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }
}
