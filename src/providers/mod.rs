/*!
 * Provider implementations for the translation backends.
 *
 * This module contains client implementations for the supported providers:
 * - OpenAI: chat completions API
 * - Gemini: generateContent API
 * - Anthropic: messages API
 * - Azure: Translator direct-translate API
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for translation providers
///
/// This trait defines the interface that provider implementations follow,
/// allowing them to be used interchangeably by the translation service.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// The request type for this provider
    type Request: Send + Sync;

    /// The response type for this provider
    type Response: Send + Sync;

    /// Complete a request using this provider
    ///
    /// # Arguments
    /// * `request` - The request to complete
    ///
    /// # Returns
    /// * `Result<Self::Response, ProviderError>` - The response from the provider or an error
    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError>;

    /// Extract text from the provider response
    ///
    /// # Arguments
    /// * `response` - The response from the provider
    ///
    /// # Returns
    /// * `String` - The extracted text, empty when the expected field is missing
    fn extract_text(response: &Self::Response) -> String;
}

pub mod openai;
pub mod gemini;
pub mod anthropic;
pub mod azure;
pub mod mock;
