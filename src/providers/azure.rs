use std::time::Duration;
use serde::{Serialize, Deserialize};
use anyhow::{Result, anyhow};
use reqwest::Client;
use log::error;

/// Azure Translator client
///
/// Unlike the chat-style providers, Azure Translator is driven by the
/// target language code and takes the raw text directly. There is no
/// system/user prompt pair to render.
pub struct AzureTranslator {
    /// HTTP client for API requests
    client: Client,
    /// Subscription key for authentication
    api_key: String,
    /// Azure resource region
    region: String,
    /// API endpoint URL (optional, defaults to the global endpoint)
    endpoint: String,
}

/// Single input item of a translate request
#[derive(Debug, Serialize)]
pub struct AzureRequestItem {
    /// The text to translate
    #[serde(rename = "Text")]
    pub text: String,
}

/// One translation within a result item
#[derive(Debug, Deserialize)]
pub struct AzureTranslation {
    /// The translated text
    pub text: String,
    /// The language it was translated to
    pub to: String,
}

/// Per-input result item of a translate response
#[derive(Debug, Deserialize)]
pub struct AzureTranslationResult {
    /// Translations for this input, one per requested language
    #[serde(default)]
    pub translations: Vec<AzureTranslation>,
}

impl AzureTranslator {
    /// Create a new Azure Translator client
    pub fn new(
        api_key: impl Into<String>,
        region: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            region: region.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Translate text to the given target language code
    pub async fn translate(&self, text: &str, to_lang: &str) -> Result<Vec<AzureTranslationResult>> {
        let base = if self.endpoint.is_empty() {
            "https://api.cognitive.microsofttranslator.com".to_string()
        } else {
            self.endpoint.trim_end_matches('/').to_string()
        };
        let api_url = format!("{}/translate?api-version=3.0&to={}", base, to_lang.to_lowercase());

        let body = vec![AzureRequestItem { text: text.to_string() }];

        let response = self.client.post(&api_url)
            .header("Content-Type", "application/json")
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .header("Ocp-Apim-Subscription-Region", &self.region)
            .json(&body)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to send request to Azure Translator API: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Azure Translator API error ({}): {}", status, error_text);
            return Err(anyhow!("Azure Translator API error ({}): {}", status, error_text));
        }

        let results = response.json::<Vec<AzureTranslationResult>>().await
            .map_err(|e| anyhow!("Failed to parse Azure Translator API response: {}", e))?;

        Ok(results)
    }

    /// Extract the first translation from an Azure Translator response
    ///
    /// A response with no result items yields an empty string rather
    /// than an error.
    pub fn extract_text_from_response(results: &[AzureTranslationResult]) -> String {
        results.first()
            .and_then(|result| result.translations.first())
            .map(|translation| translation.text.clone())
            .unwrap_or_default()
    }
}
