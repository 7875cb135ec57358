use anyhow::{Result, anyhow};
use log::{debug, error};
use std::str::FromStr;

use crate::app_config::{Config, TranslationProvider};
use crate::providers::Provider;
use crate::providers::openai::{OpenAI, OpenAIRequest};
use crate::providers::gemini::{Gemini, GeminiRequest};
use crate::providers::anthropic::{Anthropic, AnthropicRequest};
use crate::providers::azure::AzureTranslator;
use crate::providers::mock::{MockProvider, MockRequest};

// @module: Translation service for document bodies

/// Temperature used for the chat-style providers
const TRANSLATION_TEMPERATURE: f32 = 0.3;

/// Token ceiling for providers that require one
const MAX_COMPLETION_TOKENS: u32 = 8192;

/// Translation provider implementation variants
enum TranslationProviderImpl {
    /// OpenAI API service
    OpenAI {
        /// Client instance
        client: OpenAI,
    },

    /// Gemini API service
    Gemini {
        /// Client instance
        client: Gemini,
    },

    /// Anthropic API service
    Anthropic {
        /// Client instance
        client: Anthropic,
    },

    /// Azure Translator service
    Azure {
        /// Client instance
        client: AzureTranslator,
    },

    /// Mock provider for tests
    Mock {
        /// Client instance
        client: MockProvider,
    },
}

/// Translation service for document bodies
///
/// Holds one provider client, selected from the configuration, and turns
/// a body text into its translation with a single call per invocation.
/// No retries, no backoff: transport failures and non-2xx responses
/// propagate to the caller unchanged.
pub struct TranslationService {
    /// Provider implementation
    provider: TranslationProviderImpl,

    /// Configuration for the translation service
    pub config: Config,
}

impl TranslationService {
    /// Create a new translation service from the configuration
    ///
    /// Resolving the provider selector happens here, so an unrecognized
    /// provider name fails before any network call is made.
    pub fn new(config: Config) -> Result<Self> {
        let provider = match TranslationProvider::from_str(&config.provider)? {
            TranslationProvider::OpenAI => TranslationProviderImpl::OpenAI {
                client: OpenAI::new(config.api_key.clone(), config.get_endpoint()),
            },
            TranslationProvider::Gemini => TranslationProviderImpl::Gemini {
                client: Gemini::new(config.api_key.clone(), config.get_endpoint()),
            },
            TranslationProvider::Anthropic => TranslationProviderImpl::Anthropic {
                client: Anthropic::new(config.api_key.clone(), config.get_endpoint()),
            },
            TranslationProvider::Azure => TranslationProviderImpl::Azure {
                client: AzureTranslator::new(
                    config.api_key.clone(),
                    config.azure_region.clone(),
                    config.get_endpoint(),
                ),
            },
        };

        Ok(Self { provider, config })
    }

    /// Create a service backed by the mock provider
    pub fn with_mock(config: Config, client: MockProvider) -> Self {
        Self {
            provider: TranslationProviderImpl::Mock { client },
            config,
        }
    }

    /// Display name of the active provider
    pub fn provider_name(&self) -> &str {
        match &self.provider {
            TranslationProviderImpl::OpenAI { .. } => "OpenAI",
            TranslationProviderImpl::Gemini { .. } => "Gemini",
            TranslationProviderImpl::Anthropic { .. } => "Anthropic",
            TranslationProviderImpl::Azure { .. } => "Azure Translator",
            TranslationProviderImpl::Mock { .. } => "Mock",
        }
    }

    /// Render the system instruction from its template
    pub fn render_system_prompt(&self) -> String {
        self.config
            .system_prompt
            .replace("{TARGET_LANG}", &self.config.target_language)
    }

    /// Render the user instruction from its template
    pub fn render_user_prompt(&self, text: &str) -> String {
        self.config
            .user_prompt
            .replace("{TARGET_LANG}", &self.config.target_language)
            .replace("{text}", text)
    }

    /// Translate a document body into the configured target language
    pub async fn translate(&self, text: &str) -> Result<String> {
        // Skip empty text
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        debug!(
            "Translating {} chars with {}",
            text.len(),
            self.provider_name()
        );

        match &self.provider {
            TranslationProviderImpl::OpenAI { client } => {
                let request = OpenAIRequest::new(self.config.get_model())
                    .add_message("system", self.render_system_prompt())
                    .add_message("user", self.render_user_prompt(text))
                    .temperature(TRANSLATION_TEMPERATURE)
                    .max_tokens(MAX_COMPLETION_TOKENS);

                let response = client.complete(request).await?;
                Ok(self.checked_extraction(OpenAI::extract_text_from_response(&response)))
            }
            TranslationProviderImpl::Gemini { client } => {
                let request = GeminiRequest::new(self.render_user_prompt(text))
                    .system(self.render_system_prompt())
                    .temperature(TRANSLATION_TEMPERATURE);

                let response = client.complete(&self.config.get_model(), request).await?;
                Ok(self.checked_extraction(Gemini::extract_text_from_response(&response)))
            }
            TranslationProviderImpl::Anthropic { client } => {
                let request = AnthropicRequest::new(self.config.get_model(), MAX_COMPLETION_TOKENS)
                    .system(self.render_system_prompt())
                    .add_message("user", self.render_user_prompt(text))
                    .temperature(TRANSLATION_TEMPERATURE);

                let response = client.complete(request).await?;
                Ok(self.checked_extraction(Anthropic::extract_text_from_response(&response)))
            }
            TranslationProviderImpl::Azure { client } => {
                // Azure Translator takes the raw body and the target
                // language code; the instruction templates don't apply.
                let results = client
                    .translate(text, &self.config.target_language_code)
                    .await?;
                Ok(self.checked_extraction(AzureTranslator::extract_text_from_response(&results)))
            }
            TranslationProviderImpl::Mock { client } => {
                let request = MockRequest {
                    text: text.to_string(),
                    target_language: self.config.target_language.clone(),
                };

                let response = client
                    .complete(request)
                    .await
                    .map_err(|e| anyhow!("Mock provider error: {}", e))?;
                Ok(self.checked_extraction(MockProvider::extract_text(&response)))
            }
        }
    }

    /// Flag an extraction that produced nothing
    ///
    /// A response missing the expected text field degrades to an empty
    /// translated body instead of failing. That behavior is kept, but
    /// loudly: the gap would otherwise be invisible until someone opens
    /// the output file.
    fn checked_extraction(&self, translated: String) -> String {
        if translated.is_empty() {
            error!(
                "{} response carried no translated text; writing an empty body",
                self.provider_name()
            );
        }
        translated
    }
}
