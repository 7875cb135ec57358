use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use url::Url;

use crate::language_utils;

/// Application configuration module
/// This module loads the process-wide configuration from the environment
/// once, into an immutable value passed explicitly to every component.
/// Extension that gets front matter handling; other extensions are
/// translated as plain body text.
pub const DOC_EXTENSION: &str = "md";

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Provider selector string, resolved when the translation service is built
    pub provider: String,

    /// API key for the selected provider
    pub api_key: String,

    /// Model identifier passed through to the provider
    #[serde(default = "String::new")]
    pub model: String,

    /// Service endpoint override (empty means the provider default)
    #[serde(default = "String::new")]
    pub endpoint: String,

    /// Azure Translator region (Azure provider only)
    #[serde(default = "String::new")]
    pub azure_region: String,

    /// Target language display name (e.g., "Persian")
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Target language ISO 639-1 code (e.g., "fa")
    #[serde(default = "default_target_language_code")]
    pub target_language_code: String,

    /// File extensions to watch for changes
    #[serde(default = "default_file_extensions")]
    pub file_extensions: Vec<String>,

    /// Output filename template with `*`, `{lang}` and `{ext}` tokens
    #[serde(default = "default_output_format")]
    pub output_format: String,

    /// System instruction template with a `{TARGET_LANG}` token
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// User instruction template with `{TARGET_LANG}` and `{text}` tokens
    #[serde(default = "default_user_prompt")]
    pub user_prompt: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation provider type
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationProvider {
    // @provider: OpenAI
    #[default]
    OpenAI,
    // @provider: Gemini
    Gemini,
    // @provider: Anthropic
    Anthropic,
    // @provider: Azure Translator
    Azure,
}

impl TranslationProvider {
    // @returns: Capitalized provider name
    pub fn display_name(&self) -> &str {
        match self {
            Self::OpenAI => "OpenAI",
            Self::Gemini => "Gemini",
            Self::Anthropic => "Anthropic",
            Self::Azure => "Azure Translator",
        }
    }

    // @returns: Lowercase provider identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::OpenAI => "openai".to_string(),
            Self::Gemini => "gemini".to_string(),
            Self::Anthropic => "anthropic".to_string(),
            Self::Azure => "azure".to_string(),
        }
    }
}

// Implement Display trait for TranslationProvider
impl std::fmt::Display for TranslationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for TranslationProvider
impl FromStr for TranslationProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAI),
            "gemini" => Ok(Self::Gemini),
            "anthropic" => Ok(Self::Anthropic),
            "azure" => Ok(Self::Azure),
            _ => Err(anyhow!("Unsupported translation provider: {}", s)),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_target_language() -> String {
    "Persian".to_string()
}

fn default_target_language_code() -> String {
    "fa".to_string()
}

fn default_file_extensions() -> Vec<String> {
    vec![DOC_EXTENSION.to_string()]
}

fn default_output_format() -> String {
    "*-{lang}.{ext}".to_string()
}

fn default_system_prompt() -> String {
    "You are a professional translator. Translate the text you are given into {TARGET_LANG}. \
     Preserve Markdown structure and keep YAML front matter keys unchanged, translating only their values. \
     Only respond with the translated text, without any explanations or notes."
        .to_string()
}

fn default_user_prompt() -> String {
    "Translate the following text into {TARGET_LANG}:\n\n{text}".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_anthropic_model() -> String {
    "claude-3-haiku-20240307".to_string()
}

fn default_openai_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_gemini_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_anthropic_endpoint() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_azure_endpoint() -> String {
    "https://api.cognitive.microsofttranslator.com".to_string()
}

/// Parse a log level name, falling back to the default level
fn parse_log_level(raw: &str) -> LogLevel {
    match raw.trim().to_lowercase().as_str() {
        "error" => LogLevel::Error,
        "warn" => LogLevel::Warn,
        "info" => LogLevel::Info,
        "debug" => LogLevel::Debug,
        "trace" => LogLevel::Trace,
        _ => LogLevel::default(),
    }
}

/// Read an environment variable, falling back to a default when unset or empty
fn env_or(key: &str, default: String) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default,
    }
}

/// Parse the watched-extension list from its single-string form
///
/// Accepts whitespace or comma separated values, with or without a
/// leading dot.
pub fn parse_extensions(raw: &str) -> Vec<String> {
    raw.split(|c: char| c.is_whitespace() || c == ',')
        .map(|ext| ext.trim().trim_start_matches('.'))
        .filter(|ext| !ext.is_empty())
        .map(|ext| ext.to_lowercase())
        .collect()
}

impl Config {
    /// Load the configuration from the environment
    ///
    /// Missing values fall back to defaults; validity is checked
    /// separately by `validate`.
    pub fn from_env() -> Self {
        let target_language_code = env_or("TARGET_LANG_CODE", default_target_language_code());

        // When only the code is provided, derive the display name from it
        let target_language = match env::var("TARGET_LANG") {
            Ok(name) if !name.trim().is_empty() => name,
            _ => language_utils::get_language_name(&target_language_code)
                .unwrap_or_else(|_| default_target_language()),
        };

        Config {
            provider: env_or("PROVIDER", TranslationProvider::default().to_lowercase_string()),
            api_key: env::var("API_KEY").unwrap_or_default(),
            model: env::var("MODEL").unwrap_or_default(),
            endpoint: env::var("ENDPOINT").unwrap_or_default(),
            azure_region: env::var("AZURE_REGION").unwrap_or_default(),
            target_language,
            target_language_code,
            file_extensions: parse_extensions(&env_or("FILE_EXTS", DOC_EXTENSION.to_string())),
            output_format: env_or("OUTPUT_FORMAT", default_output_format()),
            system_prompt: env_or("SYSTEM_PROMPT", default_system_prompt()),
            user_prompt: env_or("USER_PROMPT", default_user_prompt()),
            log_level: parse_log_level(&env::var("LOG_LEVEL").unwrap_or_default()),
        }
    }

    /// Validate the configuration for consistency and required values
    ///
    /// The provider selector itself is deliberately not resolved here:
    /// an unrecognized provider fails when the translation service is
    /// constructed, before any network call.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(anyhow!("Translation API key is required (set API_KEY)"));
        }

        language_utils::validate_language_code(&self.target_language_code)?;

        if self.file_extensions.is_empty() {
            return Err(anyhow!("At least one watched file extension is required (set FILE_EXTS)"));
        }

        if !self.endpoint.is_empty() {
            Url::parse(&self.endpoint)
                .map_err(|e| anyhow!("Invalid endpoint override '{}': {}", self.endpoint, e))?;
        }

        if let Ok(TranslationProvider::Azure) = TranslationProvider::from_str(&self.provider) {
            if self.azure_region.trim().is_empty() {
                return Err(anyhow!("Azure Translator requires a region (set AZURE_REGION)"));
            }
        }

        Ok(())
    }

    /// Get the model for the configured provider
    pub fn get_model(&self) -> String {
        if !self.model.is_empty() {
            return self.model.clone();
        }

        // Default fallback based on provider type
        match TranslationProvider::from_str(&self.provider) {
            Ok(TranslationProvider::OpenAI) => default_openai_model(),
            Ok(TranslationProvider::Gemini) => default_gemini_model(),
            Ok(TranslationProvider::Anthropic) => default_anthropic_model(),
            // Azure Translator is not model-driven
            _ => String::new(),
        }
    }

    /// Get the endpoint for the configured provider
    pub fn get_endpoint(&self) -> String {
        if !self.endpoint.is_empty() {
            return self.endpoint.clone();
        }

        // Default fallback based on provider type
        match TranslationProvider::from_str(&self.provider) {
            Ok(TranslationProvider::OpenAI) => default_openai_endpoint(),
            Ok(TranslationProvider::Gemini) => default_gemini_endpoint(),
            Ok(TranslationProvider::Anthropic) => default_anthropic_endpoint(),
            Ok(TranslationProvider::Azure) => default_azure_endpoint(),
            Err(_) => String::new(),
        }
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            provider: TranslationProvider::default().to_lowercase_string(),
            api_key: String::new(),
            model: String::new(),
            endpoint: String::new(),
            azure_region: String::new(),
            target_language: default_target_language(),
            target_language_code: default_target_language_code(),
            file_extensions: default_file_extensions(),
            output_format: default_output_format(),
            system_prompt: default_system_prompt(),
            user_prompt: default_user_prompt(),
            log_level: LogLevel::default(),
        }
    }
}
